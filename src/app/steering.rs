use serde::Serialize;
use wormbrain_core::MuscleOutput;

/// Locomotion command derived from the muscle accumulators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Steering {
    /// Positive turns left.
    pub turn: f64,
    pub speed: f64,
}

impl Steering {
    /// `turn = (L - R) / scale`, `speed = (|L| + |R|) / (5 * scale)`.
    pub fn from_output(output: MuscleOutput, scale: f64) -> Self {
        Self {
            turn: (output.left - output.right) / scale,
            speed: output.magnitude() / (5.0 * scale),
        }
    }
}
