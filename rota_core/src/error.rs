use thiserror::Error;

/// Errors produced while building, solving, or translating rota formulas.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotaError {
    #[error("unknown staff name: {0}")]
    UnknownStaff(String),

    #[error("duplicate staff name: {0}")]
    DuplicateStaff(String),

    #[error("staff roster is empty")]
    EmptyRoster,

    #[error("could not parse date expression: {0}")]
    InvalidDate(String),

    #[error("date {0} falls outside the scheduling horizon")]
    OutOfHorizon(String),

    #[error("shift index {index} outside 0..{n_shifts}")]
    ShiftOutOfRange { index: usize, n_shifts: usize },

    #[error("staff index {index} outside 1..={n_staff}")]
    StaffOutOfRange { index: usize, n_staff: usize },

    #[error("variable id {id} outside 1..={max}")]
    VariableOutOfRange { id: i32, max: usize },

    #[error("model lengths differ: {left} vs {right}")]
    ModelLengthMismatch { left: usize, right: usize },

    #[error("constraint set is infeasible")]
    Infeasible,

    #[error("diff entry {0} has not been validated")]
    UnvalidatedChange(String),

    #[error("solver failure: {0}")]
    Solver(String),
}
