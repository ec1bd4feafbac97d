use chrono::NaiveDate;
use std::collections::HashMap;

use crate::error::RotaError;

/// Validated bidirectional mapping between staff names and 1-based indices.
#[derive(Debug, Clone)]
pub struct StaffRegistry {
    names: Vec<String>,
    indices: HashMap<String, usize>,
}

impl StaffRegistry {
    pub fn new<I, S>(names: I) -> Result<Self, RotaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(RotaError::EmptyRoster);
        }
        let mut indices = HashMap::new();
        for (i, name) in names.iter().enumerate() {
            if indices.insert(name.clone(), i + 1).is_some() {
                return Err(RotaError::DuplicateStaff(name.clone()));
            }
        }
        Ok(StaffRegistry { names, indices })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Result<usize, RotaError> {
        self.indices
            .get(name)
            .copied()
            .ok_or_else(|| RotaError::UnknownStaff(name.to_string()))
    }

    pub fn name_of(&self, staff_index: usize) -> Result<&str, RotaError> {
        if staff_index == 0 || staff_index > self.names.len() {
            return Err(RotaError::StaffOutOfRange {
                index: staff_index,
                n_staff: self.names.len(),
            });
        }
        Ok(&self.names[staff_index - 1])
    }

    /// Staff names in index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// A sliding-window workload rule: at most `bound` assignments in any
/// `window` consecutive half-day slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadRule {
    pub window: usize,
    pub bound: usize,
}

impl WorkloadRule {
    pub fn new(window: usize, bound: usize) -> Self {
        WorkloadRule { window, bound }
    }

    /// The standard rule set: at most 4 slots in any 7 days, at most 3 in
    /// any 7 consecutive slots, and never two consecutive slots (no 24h
    /// runs).
    pub fn defaults() -> Vec<WorkloadRule> {
        vec![
            WorkloadRule::new(14, 4),
            WorkloadRule::new(7, 3),
            WorkloadRule::new(2, 1),
        ]
    }
}

/// Configuration for one scheduling run: the roster, the horizon, the
/// per-slot staffing requirements, the workload rules, and the anchor date
/// that shift index 0 maps to.
#[derive(Debug, Clone)]
pub struct RotaConfig {
    pub staff: StaffRegistry,
    pub n_shifts: usize,
    pub day_staffing: usize,
    pub night_staffing: usize,
    pub workload: Vec<WorkloadRule>,
    pub start_date: NaiveDate,
}

impl RotaConfig {
    pub fn n_staff(&self) -> usize {
        self.staff.len()
    }

    /// Number of assignment variables: one per (shift, staff) pair.
    pub fn universe(&self) -> usize {
        self.n_staff() * self.n_shifts
    }

    /// Required staffing level for a shift slot. Even slots are day shifts,
    /// odd slots night shifts.
    pub fn required_for(&self, shift_index: usize) -> usize {
        if shift_index % 2 == 0 {
            self.day_staffing
        } else {
            self.night_staffing
        }
    }
}
