//! SAT-based rota planning: assigns staff to recurring day/night shifts
//! under staffing, workload, and unavailability constraints, and computes
//! minimally disruptive schedule updates when the constraints change.
//!
//! The pipeline: [`compiler::RotaCompiler`] turns a [`types::RotaConfig`]
//! and a list of [`types::AbsenceRequest`]s into a [`compiler::Formula`];
//! the [`solver`] module translates cardinality groups into CNF and runs
//! the SAT engine; [`extractor`] renders models as schedules and diffs; and
//! [`reschedule::RescheduleEngine`] searches for a new model close to a
//! previous one via incremental solving with blocking clauses.

pub mod compiler;
pub mod error;
pub mod extractor;
pub mod reschedule;
pub mod solver;
pub mod types;
pub mod variables;

pub use compiler::{CompileOutcome, Formula, RotaCompiler};
pub use error::RotaError;
pub use extractor::{apply_diff, diff_models, hamming_distance, model_to_schedule, schedule_to_model};
pub use reschedule::{Reschedule, RescheduleEngine, DEFAULT_DISTANCE_THRESHOLD};
pub use solver::{solve_once, SolverSession};
pub use types::{
    AbsenceRequest, Model, RotaConfig, RotaDiff, ScheduleEntry, StaffRegistry, TimeOfDay,
    WorkloadRule,
};
pub use variables::VariableIndex;
