use serde::{Deserialize, Serialize};

/// Named sensory neuron groups pulsed by the external game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensoryGroup {
    /// Ring interneurons driven while the animal is hungry.
    Hunger,
    /// Mechanosensors around the nose, pulsed on wall contact.
    NoseTouch,
    /// Chemosensors pulsed while food is within sensing range.
    FoodSense,
}

impl SensoryGroup {
    /// Pulse order used by a combined update.
    pub const ALL: [SensoryGroup; 3] = [
        SensoryGroup::Hunger,
        SensoryGroup::NoseTouch,
        SensoryGroup::FoodSense,
    ];

    /// Default identities stimulated for this group.
    pub fn default_neurons(self) -> &'static [&'static str] {
        match self {
            SensoryGroup::Hunger => &["RIML", "RIMR", "RICL", "RICR"],
            SensoryGroup::NoseTouch => &[
                "FLPR", "FLPL", "ASHL", "ASHR", "IL1VL", "IL1VR", "OLQDL", "OLQDR", "OLQVR",
                "OLQVL",
            ],
            SensoryGroup::FoodSense => &[
                "ADFL", "ADFR", "ASGR", "ASGL", "ASIL", "ASIR", "ASJR", "ASJL",
            ],
        }
    }
}

/// Which sensory groups to pulse before the next update.
///
/// Owned by the caller and passed in explicitly; the engine keeps no mode flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SensoryRequest {
    pub hunger: bool,
    pub nose_touch: bool,
    pub food_sense: bool,
}

impl SensoryRequest {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self {
            hunger: true,
            nose_touch: true,
            food_sense: true,
        }
    }

    pub fn is_enabled(&self, group: SensoryGroup) -> bool {
        match group {
            SensoryGroup::Hunger => self.hunger,
            SensoryGroup::NoseTouch => self.nose_touch,
            SensoryGroup::FoodSense => self.food_sense,
        }
    }

    /// Enabled groups in pulse order.
    pub fn enabled(&self) -> impl Iterator<Item = SensoryGroup> + '_ {
        SensoryGroup::ALL
            .into_iter()
            .filter(move |g| self.is_enabled(*g))
    }
}
