//! Pluggable position evaluation.
//!
//! Search delegates static scoring to the [`Evaluator`] trait so heuristics
//! can be swapped without touching search code. [`Strategy`] names the
//! stock configurations a host can ask for.

mod material;
mod noisy;
mod terminal;
mod weighted;

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::StrategyParseError;
use super::position::GamePosition;
use super::types::Color;

pub use material::MaterialEvaluator;
pub use noisy::{Noisy, DEFAULT_NOISE_AMPLITUDE, DEFAULT_NOISE_SEED};
pub use terminal::{TerminalAware, TERMINAL_SCORE};
pub use weighted::{EvalProfile, WeightedEvaluator};
#[cfg(test)]
pub(crate) use weighted::POSITIONAL_CLAMP;

/// Static position scoring.
pub trait Evaluator: Send + Sync {
    /// Score `position` for `perspective`; positive favors `perspective`.
    fn evaluate(&self, position: &GamePosition, perspective: Color) -> i32;
}

impl<E: Evaluator + ?Sized> Evaluator for Box<E> {
    fn evaluate(&self, position: &GamePosition, perspective: Color) -> i32 {
        (**self).evaluate(position, perspective)
    }
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn evaluate(&self, position: &GamePosition, perspective: Color) -> i32 {
        (**self).evaluate(position, perspective)
    }
}

/// Stock evaluation configurations.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Material count only
    Material,
    /// Balanced weighted evaluation, terminal-aware
    #[default]
    Standard,
    /// Favors piece activity and passed pawns over shelter
    Aggressive,
    /// Favors shelter and structure; positional terms never outweigh a pawn
    Defensive,
    /// Standard with a small random perturbation
    Casual,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Material,
        Strategy::Standard,
        Strategy::Aggressive,
        Strategy::Defensive,
        Strategy::Casual,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Material => "material",
            Strategy::Standard => "standard",
            Strategy::Aggressive => "aggressive",
            Strategy::Defensive => "defensive",
            Strategy::Casual => "casual",
        }
    }

    /// Returns true if evaluations under this strategy are reproducible
    #[must_use]
    pub const fn is_deterministic(self) -> bool {
        !matches!(self, Strategy::Casual)
    }

    /// Build the evaluator this strategy names
    #[must_use]
    pub fn evaluator(self) -> Box<dyn Evaluator> {
        match self {
            Strategy::Material => Box::new(MaterialEvaluator),
            Strategy::Standard => Box::new(TerminalAware::new(WeightedEvaluator::new(
                EvalProfile::STANDARD,
            ))),
            Strategy::Aggressive => Box::new(TerminalAware::new(WeightedEvaluator::new(
                EvalProfile::AGGRESSIVE,
            ))),
            Strategy::Defensive => Box::new(TerminalAware::new(WeightedEvaluator::new(
                EvalProfile::DEFENSIVE,
            ))),
            Strategy::Casual => Box::new(Noisy::new(
                TerminalAware::new(WeightedEvaluator::new(EvalProfile::STANDARD)),
                DEFAULT_NOISE_AMPLITUDE,
                DEFAULT_NOISE_SEED,
            )),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = StrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == lower)
            .ok_or(StrategyParseError {
                name: s.to_string(),
            })
    }
}
