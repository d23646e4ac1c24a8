//! Time-based latches for the external sensory events.

use wormbrain_data::SensoryRequest;

/// Turns discrete world events into the per-update [`SensoryRequest`].
///
/// Hunger is always on. Nose touch and food sense switch on when their event
/// fires and release `reset_after_ms` after the most recent event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StimulusLatches {
    reset_after_ms: u64,
    touch_until: Option<u64>,
    food_until: Option<u64>,
}

impl StimulusLatches {
    pub fn new(reset_after_ms: u64) -> Self {
        Self {
            reset_after_ms,
            touch_until: None,
            food_until: None,
        }
    }

    pub fn trigger_touch(&mut self, now_ms: u64) {
        self.touch_until = Some(now_ms.saturating_add(self.reset_after_ms));
    }

    pub fn trigger_food(&mut self, now_ms: u64) {
        self.food_until = Some(now_ms.saturating_add(self.reset_after_ms));
    }

    pub fn request(&self, now_ms: u64) -> SensoryRequest {
        let active = |until: Option<u64>| until.is_some_and(|t| now_ms < t);
        SensoryRequest {
            hunger: true,
            nose_touch: active(self.touch_until),
            food_sense: active(self.food_until),
        }
    }
}
