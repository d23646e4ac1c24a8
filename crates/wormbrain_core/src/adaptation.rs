//! Per-neuron adaptation current `w`, single-buffered and updated in place.

use wormbrain_data::NeuronId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdaptationState {
    w: Vec<f64>,
}

impl AdaptationState {
    pub fn new(len: usize) -> Self {
        Self { w: vec![0.0; len] }
    }

    #[inline]
    pub fn get(&self, id: NeuronId) -> f64 {
        self.w[id.index()]
    }

    /// Spike-triggered increment.
    #[inline]
    pub fn bump(&mut self, id: NeuronId, amount: f64) {
        self.w[id.index()] += amount;
    }

    pub fn values(&self) -> &[f64] {
        &self.w
    }

    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let state = AdaptationState::new(4);
        assert!(state.values().iter().all(|w| *w == 0.0));
    }

    #[test]
    fn test_bump_accumulates() {
        let mut state = AdaptationState::new(2);
        state.bump(NeuronId(1), 5.0);
        state.bump(NeuronId(1), 5.0);
        assert_eq!(state.get(NeuronId(1)), 10.0);
        assert_eq!(state.get(NeuronId(0)), 0.0);
    }
}
