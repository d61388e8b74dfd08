/// Lifecycle of the fullscreen overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverlayPhase {
    #[default]
    Closed,
    /// A clone is mounted but has not finished loading.
    Opening,
    Loaded,
}

impl OverlayPhase {
    pub fn is_open(self) -> bool {
        !matches!(self, OverlayPhase::Closed)
    }
}
