//! Phase 3: spike detection, reset and propagation.
//!
//! Firing decisions are taken against the potentials left by integration, all
//! at once, before any signal moves. Emitted signal lands in the incoming
//! slots and is first read by the next tick's integration, so a neuron can
//! fire at most once per tick.

use crate::adaptation::AdaptationState;
use crate::adex::AdExParams;
use crate::buffer::SignalBuffer;
use crate::config::ExecutionMode;
use crate::connectome::Connectome;
use rayon::prelude::*;
use wormbrain_data::{NeuronId, NeuronRole};

/// Adds the static fan-out of `id` into the incoming slots of its targets.
///
/// Returns `false` without touching the buffer when `id` is not a source or
/// is not allowed to propagate.
pub fn propagate(connectome: &Connectome, buffer: &SignalBuffer, id: NeuronId) -> bool {
    let allowed = connectome.role(id).is_some_and(NeuronRole::propagates);
    if !allowed || !connectome.has_outgoing(id) {
        return false;
    }
    for (target, weight) in connectome.outgoing_edges(id) {
        buffer.accumulate(target, weight);
    }
    true
}

/// Ids of firing-capable neurons whose working potential is strictly above
/// the firing threshold. Muscles and sinks are never returned.
pub fn detect(params: &AdExParams, roles: &[NeuronRole], buffer: &SignalBuffer) -> Vec<NeuronId> {
    buffer
        .working()
        .iter()
        .enumerate()
        .filter(|(idx, v)| roles[*idx].fires() && **v > params.fire_threshold)
        .map(|(idx, _)| NeuronId::from(idx))
        .collect()
}

/// Runs the firing phase and returns the neurons that fired, in id order.
///
/// Every fired neuron is reset to `v_reset` and gains `b` adaptation. A fired
/// source neuron has its carried incoming signal drained before any neuron of
/// this tick propagates.
pub fn fire(
    params: &AdExParams,
    connectome: &Connectome,
    buffer: &mut SignalBuffer,
    adaptation: &mut AdaptationState,
    mode: ExecutionMode,
) -> Vec<NeuronId> {
    let fired = detect(params, connectome.roles(), buffer);

    for &id in &fired {
        buffer.write_current(id, params.v_reset);
        adaptation.bump(id, params.b);
        if connectome.has_outgoing(id) {
            buffer.clear_incoming(id);
        }
    }

    let shared: &SignalBuffer = buffer;
    match mode {
        ExecutionMode::Sequential => fired.iter().for_each(|&id| {
            propagate(connectome, shared, id);
        }),
        ExecutionMode::Parallel => fired.par_iter().for_each(|&id| {
            propagate(connectome, shared, id);
        }),
    }

    fired
}
