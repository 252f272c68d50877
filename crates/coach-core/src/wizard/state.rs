use std::fmt;

/// Step of the plan builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    SelectingDayCount,
    AssigningCategories { day: u32 },
    SelectingItems { day: u32 },
    ReadyToSave,
}

impl WizardState {
    /// Day the user is working on, if any.
    pub fn active_day(&self) -> Option<u32> {
        match self {
            Self::AssigningCategories { day } | Self::SelectingItems { day } => Some(*day),
            Self::SelectingDayCount | Self::ReadyToSave => None,
        }
    }
}

impl fmt::Display for WizardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectingDayCount => write!(f, "selecting the number of days"),
            Self::AssigningCategories { day } => write!(f, "assigning a category to day {day}"),
            Self::SelectingItems { day } => write!(f, "selecting items for day {day}"),
            Self::ReadyToSave => write!(f, "ready to save"),
        }
    }
}

/// Outcome of an operation that may be a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advanced,
    Ignored,
}
