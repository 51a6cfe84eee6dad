use std::fmt;

/// Tracking state reported after every update cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingState {
    /// Ball observed this cycle, position and velocity are current
    Tracked,
    /// Ball not observed, but last sighting is recent enough to project from
    Extrapolating,
    /// Ball not observed and no usable history
    #[default]
    NotTracked,
    /// Input for this cycle was invalid, history left untouched
    Error,
}

impl TrackingState {
    /// Whether a meaningful position can be reported in this state.
    #[inline]
    pub fn has_position(&self) -> bool {
        matches!(self, Self::Tracked | Self::Extrapolating)
    }

    /// Label shown on overlays.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tracked => "TRACKED",
            Self::Extrapolating => "EXTRAPOLATING",
            Self::NotTracked => "NOT_TRACKED",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for TrackingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
