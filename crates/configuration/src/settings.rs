use core_types::ObservationPeriod;
use serde::{Deserialize, Serialize};

/// The root configuration structure for the entire application.
///
/// The loaders seed every field from `Config::default()`, so a file or the
/// environment only needs to name the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// The period observed before the service.
    pub before: ObservationPeriod,
    /// The period observed after the service.
    pub after: ObservationPeriod,
    pub display: Display,
}

/// Contains parameters for the terminal rendering of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Display {
    /// Width of the impact timeline bar, in characters.
    pub timeline_width: usize,
}

fn default_timeline_width() -> usize {
    40
}

// --- Default Implementations ---

impl Default for Config {
    fn default() -> Self {
        Self {
            before: ObservationPeriod::baseline_pre_service(),
            after: ObservationPeriod::baseline_post_service(),
            display: Display::default(),
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self {
            timeline_width: default_timeline_width(),
        }
    }
}
