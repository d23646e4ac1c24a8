//! Adaptive Exponential Integrate-and-Fire dynamics.
//!
//! Forward-Euler integration of
//!
//! ```text
//! C_m dV/dt = -g_L (V - E_L) + g_L ΔT exp((V - V_T) / ΔT) - w + I_syn
//! tau_w dw/dt = a (V - E_L) - w
//! ```
//!
//! Membrane integration reads `I_syn` from the incoming-signal slot and writes
//! the new potential into the working slot. Adaptation integration runs after
//! membrane integration has finished for every neuron and sees the new `V`.

use crate::adaptation::AdaptationState;
use crate::buffer::SignalBuffer;
use crate::config::ExecutionMode;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::Ordering;
use wormbrain_data::NeuronRole;

/// Model constants shared by every neuron.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct AdExParams {
    /// Membrane capacitance.
    pub c_m: f64,
    /// Leak conductance.
    pub g_l: f64,
    /// Leak reversal potential.
    pub e_l: f64,
    /// Potential after a spike.
    pub v_reset: f64,
    /// Exponential threshold.
    pub v_t: f64,
    /// Slope factor of the exponential term.
    pub delta_t: f64,
    /// Adaptation time constant.
    pub tau_w: f64,
    /// Subthreshold adaptation coupling.
    pub a: f64,
    /// Spike-triggered adaptation increment.
    pub b: f64,
    /// Euler step.
    pub dt: f64,
    /// Spike detection threshold.
    pub fire_threshold: f64,
    /// Upper bound on the exponent of the exponential term.
    pub exp_clamp: f64,
}

impl Default for AdExParams {
    fn default() -> Self {
        Self {
            c_m: 200.0,
            g_l: 10.0,
            e_l: 0.0,
            v_reset: 0.0,
            v_t: 20.0,
            delta_t: 2.0,
            tau_w: 30.0,
            a: 2.0,
            b: 5.0,
            dt: 1.0,
            fire_threshold: 30.0,
            exp_clamp: 10.0,
        }
    }
}

impl AdExParams {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.c_m > 0.0, "Membrane capacitance must be positive");
        anyhow::ensure!(self.g_l >= 0.0, "Leak conductance must be non-negative");
        anyhow::ensure!(self.delta_t > 0.0, "Slope factor must be positive");
        anyhow::ensure!(self.tau_w > 0.0, "Adaptation time constant must be positive");
        anyhow::ensure!(self.dt > 0.0, "Time step must be positive");
        anyhow::ensure!(
            self.fire_threshold > self.v_reset,
            "Fire threshold must exceed the reset potential"
        );
        anyhow::ensure!(
            self.exp_clamp.is_finite() && self.exp_clamp <= 700.0,
            "Exponent clamp must be finite and small enough to avoid overflow"
        );
        Ok(())
    }

    /// Exponential spike-initiation current, `g_L ΔT exp(min((V - V_T)/ΔT, clamp))`.
    ///
    /// Zero at or below `V_T`.
    #[inline]
    pub fn exponential_current(&self, v: f64) -> f64 {
        if v <= self.v_t {
            return 0.0;
        }
        let exponent = ((v - self.v_t) / self.delta_t).min(self.exp_clamp);
        self.g_l * self.delta_t * exponent.exp()
    }

    /// `dV/dt` for one neuron.
    ///
    /// The exponential term only contributes inside `(V_T, fire_threshold)`;
    /// above the threshold the neuron is reset by the firing phase instead.
    #[inline]
    pub fn membrane_derivative(&self, v: f64, w: f64, i_syn: f64) -> f64 {
        let leak = -self.g_l * (v - self.e_l);
        let exp_term = if v < self.fire_threshold {
            self.exponential_current(v)
        } else {
            0.0
        };
        (leak + exp_term - w + i_syn) / self.c_m
    }

    /// `dw/dt` for one neuron.
    #[inline]
    pub fn adaptation_derivative(&self, v: f64, w: f64) -> f64 {
        (self.a * (v - self.e_l) - w) / self.tau_w
    }

    #[inline]
    pub fn step_membrane(&self, v: f64, w: f64, i_syn: f64) -> f64 {
        v + self.membrane_derivative(v, w, i_syn) * self.dt
    }

    #[inline]
    pub fn step_adaptation(&self, v: f64, w: f64) -> f64 {
        w + self.adaptation_derivative(v, w) * self.dt
    }
}

/// Phase 1: Euler step of the membrane potential of every non-muscle neuron.
///
/// Each neuron writes only its own working slot; the incoming-signal slots and
/// the adaptation currents are read-only here.
pub fn integrate_membrane(
    params: &AdExParams,
    roles: &[NeuronRole],
    buffer: &mut SignalBuffer,
    adaptation: &AdaptationState,
    mode: ExecutionMode,
) {
    let (working, incoming) = buffer.split_mut();
    let w = adaptation.values();

    let step = |(idx, v): (usize, &mut f64)| {
        if roles[idx].integrates() {
            let i_syn = incoming[idx].load(Ordering::Relaxed);
            *v = params.step_membrane(*v, w[idx], i_syn);
        }
    };

    match mode {
        ExecutionMode::Sequential => working.iter_mut().enumerate().for_each(step),
        ExecutionMode::Parallel => working.par_iter_mut().enumerate().for_each(step),
    }
}

/// Phase 2: Euler step of the adaptation current, using the potentials
/// produced by [`integrate_membrane`].
pub fn integrate_adaptation(
    params: &AdExParams,
    roles: &[NeuronRole],
    buffer: &SignalBuffer,
    adaptation: &mut AdaptationState,
    mode: ExecutionMode,
) {
    let voltages = buffer.working();

    let step = |(idx, w): (usize, &mut f64)| {
        if roles[idx].integrates() {
            *w = params.step_adaptation(voltages[idx], *w);
        }
    };

    match mode {
        ExecutionMode::Sequential => adaptation
            .values_mut()
            .iter_mut()
            .enumerate()
            .for_each(step),
        ExecutionMode::Parallel => adaptation
            .values_mut()
            .par_iter_mut()
            .enumerate()
            .for_each(step),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wormbrain_data::NeuronId;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_default_params_validate() {
        assert!(AdExParams::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = AdExParams {
            c_m: 0.0,
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = AdExParams {
            fire_threshold: -1.0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_exponential_current_zero_below_vt() {
        let p = AdExParams::default();
        assert_eq!(p.exponential_current(0.0), 0.0);
        assert_eq!(p.exponential_current(20.0), 0.0);
    }

    #[test]
    fn test_exponential_current_in_band() {
        let p = AdExParams::default();
        let expected = 10.0 * 2.0 * (2.5f64).exp();
        assert!((p.exponential_current(25.0) - expected).abs() < EPS);
    }

    #[test]
    fn test_exponential_current_is_clamped() {
        let p = AdExParams::default();
        let expected = p.g_l * p.delta_t * 10.0f64.exp();
        let actual = p.exponential_current(p.v_t + 1000.0);
        assert!(actual.is_finite());
        assert!((actual - expected).abs() < 1e-6);
    }

    #[test]
    fn test_exponential_term_skipped_above_threshold() {
        let p = AdExParams::default();
        // Only the leak contributes at V = 40.
        let d = p.membrane_derivative(40.0, 0.0, 0.0);
        assert!((d - (-10.0 * 40.0) / 200.0).abs() < EPS);
    }

    #[test]
    fn test_membrane_step_from_rest() {
        let p = AdExParams::default();
        let v = p.step_membrane(0.0, 0.0, 5.0);
        assert!((v - 0.025).abs() < EPS);
    }

    #[test]
    fn test_adaptation_step() {
        let p = AdExParams::default();
        let w = p.step_adaptation(0.025, 0.0);
        assert!((w - 0.05 / 30.0).abs() < EPS);
        // Decays towards zero at rest.
        let w = p.step_adaptation(0.0, 3.0);
        assert!((w - 2.9).abs() < EPS);
    }

    #[test]
    fn test_integration_skips_muscles() {
        let p = AdExParams::default();
        let roles = [NeuronRole::Regular, NeuronRole::Muscle, NeuronRole::Sink];
        let mut buffer = SignalBuffer::new(3);
        let mut adaptation = AdaptationState::new(3);
        for idx in 0..3 {
            buffer.accumulate(NeuronId(idx), 5.0);
        }

        integrate_membrane(&p, &roles, &mut buffer, &adaptation, ExecutionMode::Sequential);
        integrate_adaptation(&p, &roles, &buffer, &mut adaptation, ExecutionMode::Sequential);

        assert!((buffer.read_current(NeuronId(0)) - 0.025).abs() < EPS);
        assert_eq!(buffer.read_current(NeuronId(1)), 0.0);
        assert!((buffer.read_current(NeuronId(2)) - 0.025).abs() < EPS);
        assert_eq!(adaptation.get(NeuronId(1)), 0.0);
        assert!(adaptation.get(NeuronId(0)) > 0.0);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let p = AdExParams::default();
        let n = 64;
        let roles = vec![NeuronRole::Regular; n];
        let mut seq = SignalBuffer::new(n);
        let mut par = SignalBuffer::new(n);
        let mut seq_w = AdaptationState::new(n);
        let mut par_w = AdaptationState::new(n);
        for idx in 0..n {
            let id = NeuronId(idx as u32);
            let v = idx as f64 * 0.7 - 5.0;
            seq.write_current(id, v);
            par.write_current(id, v);
            seq.accumulate(id, idx as f64);
            par.accumulate(id, idx as f64);
        }

        integrate_membrane(&p, &roles, &mut seq, &seq_w, ExecutionMode::Sequential);
        integrate_adaptation(&p, &roles, &seq, &mut seq_w, ExecutionMode::Sequential);
        integrate_membrane(&p, &roles, &mut par, &par_w, ExecutionMode::Parallel);
        integrate_adaptation(&p, &roles, &par, &mut par_w, ExecutionMode::Parallel);

        assert_eq!(seq.working(), par.working());
        assert_eq!(seq_w.values(), par_w.values());
    }
}
