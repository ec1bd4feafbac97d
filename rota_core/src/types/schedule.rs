use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::records::TimeOfDay;

/// A complete truth assignment: one signed literal per assignment variable,
/// in id order. Entry at position `i` is `i+1` when the variable is true and
/// `-(i+1)` when it is false.
pub type Model = Vec<i32>;

/// The all-false model over a variable universe of the given size.
pub fn empty_model(universe: usize) -> Model {
    (1..=universe as i32).map(|id| -id).collect()
}

/// One assignment in a rendered schedule: a staff member working one
/// half-day slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// The assignment variable id, stringified; stable across runs with the
    /// same roster and horizon.
    pub record_id: String,
    pub staff_name: String,
    pub date: NaiveDate,
    pub time: TimeOfDay,
}

/// One proposed schedule change, pending external confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEntry {
    pub record_id: String,
    pub staff_name: String,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    /// Always emitted false; flipped by the confirmation workflow, never
    /// by this crate.
    #[serde(default)]
    pub validated: bool,
}

/// The difference between two schedules: assignments to create and
/// assignments to cancel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotaDiff {
    pub to_add: Vec<DiffEntry>,
    pub to_remove: Vec<DiffEntry>,
}

impl RotaDiff {
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}
