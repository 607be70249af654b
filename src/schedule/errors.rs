use std::fmt;

use crate::Id;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Mission ID is already committed on this schedule
    DuplicateMissionId(Id),
    /// New interval overlaps with an already committed interval
    OverlapsExisting { new_id: Id, existing_id: Id },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::DuplicateMissionId(id) => {
                write!(f, "Mission {} is already committed on this schedule", id)
            }
            ScheduleError::OverlapsExisting {
                new_id,
                existing_id,
            } => {
                write!(
                    f,
                    "Mission {} overlaps with committed mission {}",
                    new_id, existing_id
                )
            }
        }
    }
}

impl std::error::Error for ScheduleError {}
