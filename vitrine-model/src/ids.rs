use std::fmt;

/// Identifies one showcase section (and therefore its carousel).
///
/// Sections are numbered by the host in document order; the engine only
/// requires the ids to be unique within one showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionId(pub u32);

impl SectionId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "section#{}", self.0)
    }
}

impl From<u32> for SectionId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}
