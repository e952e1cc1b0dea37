use crate::board::eval_terms::tables::MAX_PHASE;
use crate::board::position::GamePosition;
use crate::board::types::{Color, Piece};

use super::Evaluator;

/// Weights (in percent) applied to each positional term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalProfile {
    pub piece_squares: i32,
    pub pawn_structure: i32,
    pub passed_pawns: i32,
    pub king_safety: i32,
    /// Clamp the positional sum strictly inside one pawn
    pub clamp_positional: bool,
}

impl EvalProfile {
    pub const STANDARD: EvalProfile = EvalProfile {
        piece_squares: 100,
        pawn_structure: 100,
        passed_pawns: 100,
        king_safety: 100,
        clamp_positional: false,
    };

    pub const AGGRESSIVE: EvalProfile = EvalProfile {
        piece_squares: 130,
        pawn_structure: 70,
        passed_pawns: 150,
        king_safety: 50,
        clamp_positional: false,
    };

    pub const DEFENSIVE: EvalProfile = EvalProfile {
        piece_squares: 80,
        pawn_structure: 130,
        passed_pawns: 80,
        king_safety: 160,
        clamp_positional: true,
    };
}

impl Default for EvalProfile {
    fn default() -> Self {
        EvalProfile::STANDARD
    }
}

/// Largest positional magnitude allowed under a clamping profile
pub(crate) const POSITIONAL_CLAMP: i32 = Piece::Pawn.value() - 1;

/// Material plus phase-blended positional terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedEvaluator {
    profile: EvalProfile,
}

impl WeightedEvaluator {
    #[must_use]
    pub const fn new(profile: EvalProfile) -> Self {
        WeightedEvaluator { profile }
    }

    #[must_use]
    pub const fn profile(&self) -> &EvalProfile {
        &self.profile
    }

    /// Positional part of the score from White's perspective, after
    /// weighting, phase blending and the optional clamp.
    #[must_use]
    pub fn positional(&self, position: &GamePosition) -> i32 {
        let board = position.board();
        let p = &self.profile;

        let terms = [
            (board.eval_psqt(), p.piece_squares),
            (board.eval_pawn_structure(), p.pawn_structure),
            (board.eval_passed_pawns(), p.passed_pawns),
            (board.eval_king_safety(), p.king_safety),
        ];
        let (mg, eg) = terms
            .iter()
            .fold((0, 0), |(mg, eg), &((t_mg, t_eg), weight)| {
                (mg + t_mg * weight / 100, eg + t_eg * weight / 100)
            });

        let phase = board.game_phase();
        let blended = (mg * phase + eg * (MAX_PHASE - phase)) / MAX_PHASE;

        if p.clamp_positional {
            blended.clamp(-POSITIONAL_CLAMP, POSITIONAL_CLAMP)
        } else {
            blended
        }
    }
}

impl Evaluator for WeightedEvaluator {
    fn evaluate(&self, position: &GamePosition, perspective: Color) -> i32 {
        let material = position.board().material_balance(perspective);
        material + perspective.sign() * self.positional(position)
    }
}
