//! Double-buffered per-neuron signal state.
//!
//! Two slots per neuron, with fixed roles inside a tick:
//!
//! - `working_potential`: the live membrane potential. Rewritten in place by
//!   integration and by the reset on fire.
//! - `incoming_signal`: the synaptic accumulator. Firing neurons and external
//!   stimulation add into it; integration reads it as `I_syn`.
//!
//! At the tick boundary [`SignalBuffer::swap`] promotes the incoming signal to
//! the working potential. The incoming slot keeps its value: carried signal is
//! only removed when its owner fires or when the muscle aggregator drains it.

use atomic_float::AtomicF64;
use std::sync::atomic::Ordering;
use wormbrain_data::NeuronId;

pub struct SignalBuffer {
    working: Vec<f64>,
    incoming: Vec<AtomicF64>,
}

impl Clone for SignalBuffer {
    fn clone(&self) -> Self {
        Self {
            working: self.working.clone(),
            incoming: self
                .incoming
                .iter()
                .map(|slot| AtomicF64::new(slot.load(Ordering::Relaxed)))
                .collect(),
        }
    }
}

impl std::fmt::Debug for SignalBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalBuffer")
            .field("len", &self.working.len())
            .finish()
    }
}

impl SignalBuffer {
    /// Creates a buffer with both slots zeroed for `len` neurons.
    pub fn new(len: usize) -> Self {
        Self {
            working: vec![0.0; len],
            incoming: (0..len).map(|_| AtomicF64::new(0.0)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.working.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    /// `incoming[target] += delta`.
    ///
    /// Safe to call from many threads at once, including for the same target;
    /// concurrent deposits are summed.
    #[inline]
    pub fn accumulate(&self, target: NeuronId, delta: f64) {
        self.incoming[target.index()].fetch_add(delta, Ordering::Relaxed);
    }

    #[inline]
    pub fn read_current(&self, id: NeuronId) -> f64 {
        self.working[id.index()]
    }

    #[inline]
    pub fn write_current(&mut self, id: NeuronId, value: f64) {
        self.working[id.index()] = value;
    }

    #[inline]
    pub fn read_incoming(&self, id: NeuronId) -> f64 {
        self.incoming[id.index()].load(Ordering::Relaxed)
    }

    /// Returns the incoming signal of `id` and zeroes the slot.
    #[inline]
    pub fn take_incoming(&self, id: NeuronId) -> f64 {
        self.incoming[id.index()].swap(0.0, Ordering::Relaxed)
    }

    #[inline]
    pub fn clear_incoming(&self, id: NeuronId) {
        self.incoming[id.index()].store(0.0, Ordering::Relaxed);
    }

    /// Tick boundary: each working potential is overwritten by its incoming signal.
    pub fn swap(&mut self) {
        for (v, slot) in self.working.iter_mut().zip(self.incoming.iter()) {
            *v = slot.load(Ordering::Relaxed);
        }
    }

    /// Working potentials indexed by neuron id.
    pub fn working(&self) -> &[f64] {
        &self.working
    }

    /// Snapshot of the incoming-signal slots.
    pub fn incoming_snapshot(&self) -> Vec<f64> {
        self.incoming
            .iter()
            .map(|slot| slot.load(Ordering::Relaxed))
            .collect()
    }

    /// Splits into the mutable working slots and the shared accumulators.
    pub fn split_mut(&mut self) -> (&mut [f64], &[AtomicF64]) {
        (&mut self.working, &self.incoming)
    }
}
