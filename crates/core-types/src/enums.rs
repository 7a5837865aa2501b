use serde::{Deserialize, Serialize};

/// Which side of the service event an observation period lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    PreService,
    PostService,
}

impl Phase {
    /// Both phases, in display order.
    pub const ALL: [Phase; 2] = [Phase::PreService, Phase::PostService];

    /// The name shown in chart legends and tooltips.
    pub fn series_name(&self) -> &'static str {
        match self {
            Phase::PreService => "Pre-Service",
            Phase::PostService => "Post-Service",
        }
    }

    /// The key under which a chart record stores this phase's value.
    pub fn data_key(&self) -> &'static str {
        match self {
            Phase::PreService => "before",
            Phase::PostService => "after",
        }
    }

    /// Bar fill colour as a CSS hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Phase::PreService => "#ff7043",
            Phase::PostService => "#4caf50",
        }
    }
}
