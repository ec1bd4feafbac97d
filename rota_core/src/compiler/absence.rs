use log::warn;

use crate::compiler::formula::Formula;
use crate::error::RotaError;
use crate::types::{AbsenceRequest, RotaConfig};
use crate::variables::VariableIndex;

/// Turns each absence record into a unit clause forcing the corresponding
/// assignment variable false.
///
/// Records that fail to resolve (unknown staff, bad date expression, date
/// outside the horizon) are collected with their error and excluded; every
/// valid record still applies.
pub fn apply_absence_constraints(
    formula: &mut Formula,
    config: &RotaConfig,
    vars: &VariableIndex,
    requests: &[AbsenceRequest],
) -> Vec<(AbsenceRequest, RotaError)> {
    let mut rejected = Vec::new();
    for request in requests {
        match request
            .resolve(config)
            .and_then(|(shift_index, staff_index)| vars.encode(shift_index, staff_index))
        {
            Ok(id) => formula.add_unit(-id),
            Err(err) => {
                warn!("rejected absence record for {}: {}", request.staff_name, err);
                rejected.push((request.clone(), err));
            }
        }
    }
    rejected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{StaffRegistry, TimeOfDay, WorkloadRule};
    use chrono::NaiveDate;

    fn config() -> RotaConfig {
        RotaConfig {
            staff: StaffRegistry::new(["Alice", "Bob", "Charlie"]).unwrap(),
            n_shifts: 8,
            day_staffing: 2,
            night_staffing: 1,
            workload: WorkloadRule::defaults(),
            start_date: NaiveDate::from_ymd_opt(2026, 8, 28).unwrap(),
        }
    }

    #[test]
    fn valid_records_become_unit_clauses() {
        let config = config();
        let vars = VariableIndex::new(config.n_staff(), config.n_shifts);
        let mut formula = Formula::new(config.universe());
        let requests = vec![
            AbsenceRequest::new("Alice", "2026-08-28", TimeOfDay::Day),
            AbsenceRequest::new("Charlie", "tomorrow", TimeOfDay::Night),
        ];
        let rejected = apply_absence_constraints(&mut formula, &config, &vars, &requests);
        assert!(rejected.is_empty());
        // Alice slot 0 -> variable 1; Charlie slot 3 -> variable 12.
        assert_eq!(formula.clauses, vec![vec![-1], vec![-12]]);
    }

    #[test]
    fn invalid_records_are_excluded_but_others_apply() {
        let config = config();
        let vars = VariableIndex::new(config.n_staff(), config.n_shifts);
        let mut formula = Formula::new(config.universe());
        let requests = vec![
            AbsenceRequest::new("Zed", "tomorrow", TimeOfDay::Day),
            AbsenceRequest::new("Bob", "not a date", TimeOfDay::Day),
            AbsenceRequest::new("Bob", "tomorrow", TimeOfDay::Day),
        ];
        let rejected = apply_absence_constraints(&mut formula, &config, &vars, &requests);
        assert_eq!(rejected.len(), 2);
        assert!(matches!(rejected[0].1, RotaError::UnknownStaff(_)));
        assert!(matches!(rejected[1].1, RotaError::InvalidDate(_)));
        // Bob slot 2 -> variable 8.
        assert_eq!(formula.clauses, vec![vec![-8]]);
    }
}
