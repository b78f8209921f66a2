use std::fmt;

/// A rejected [`ColorCycler`](super::ColorCycler) configuration.
///
/// Raised at construction, before any window or GPU resource exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclerConfigError {
    /// The palette has no entries to cycle through.
    EmptyPalette,
    /// The transition duration must be strictly positive.
    NonPositiveDuration,
}

impl fmt::Display for CyclerConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPalette => write!(f, "palette is empty"),
            Self::NonPositiveDuration => {
                write!(f, "transition duration must be greater than zero seconds")
            }
        }
    }
}

impl std::error::Error for CyclerConfigError {}
