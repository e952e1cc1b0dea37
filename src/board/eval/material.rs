use crate::board::position::GamePosition;
use crate::board::types::Color;

use super::Evaluator;

/// Scores material only: P 100, N 320, B 330, R 500, Q 900.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, position: &GamePosition, perspective: Color) -> i32 {
        position.board().material_balance(perspective)
    }
}
