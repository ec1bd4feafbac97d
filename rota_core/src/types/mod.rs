// Shared domain types.
pub mod config;
pub mod records;
pub mod schedule;

pub use config::{RotaConfig, StaffRegistry, WorkloadRule};
pub use records::{slot_date_time, slot_index, AbsenceRequest, DateExpression, TimeOfDay};
pub use schedule::{empty_model, DiffEntry, Model, RotaDiff, ScheduleEntry};
