use serde::{Deserialize, Serialize};

/// Weight configuration for the fitness score.
///
/// The score is `base + max_height*w + height_variance*w + gap*w +
/// sent_lines*w`. Weights are configuration rather than constants so they
/// can be tuned or loaded from stored JSON weight sets; [`Default`]
/// provides the reference values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessWeights {
    /// Constant base added to every non-loss score.
    pub base: i64,
    /// Weight of the tallest column. Zero in the reference weights;
    /// retained as a tuning hook.
    pub max_height: i64,
    /// Weight of the summed adjacent column height differences.
    pub height_variance: i64,
    /// Weight of each buried gap.
    pub gap: i64,
    /// Weight of the multi-line clear bonus.
    pub sent_lines: i64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            base: 1000,
            max_height: 0,
            height_variance: -10,
            gap: -50,
            sent_lines: 10,
        }
    }
}
