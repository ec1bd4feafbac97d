use crate::error::RotaError;
use crate::types::{empty_model, slot_date_time, slot_index, Model, RotaConfig, ScheduleEntry};
use crate::variables::VariableIndex;

/// Renders a model as a schedule: one entry per positive literal, decoded
/// to (staff name, date, time of day).
pub fn model_to_schedule(
    model: &Model,
    config: &RotaConfig,
) -> Result<Vec<ScheduleEntry>, RotaError> {
    let vars = VariableIndex::new(config.n_staff(), config.n_shifts);
    let mut schedule = Vec::new();
    for &literal in model {
        if literal <= 0 {
            continue;
        }
        let (shift_index, staff_index) = vars.decode(literal)?;
        let (date, time) = slot_date_time(shift_index, config.start_date);
        schedule.push(ScheduleEntry {
            record_id: literal.to_string(),
            staff_name: config.staff.name_of(staff_index)?.to_string(),
            date,
            time,
        });
    }
    Ok(schedule)
}

/// Rebuilds a model from a schedule: every variable referenced by an entry
/// is true, everything else in the universe is false.
pub fn schedule_to_model(
    schedule: &[ScheduleEntry],
    config: &RotaConfig,
) -> Result<Model, RotaError> {
    let vars = VariableIndex::new(config.n_staff(), config.n_shifts);
    let mut model = empty_model(config.universe());
    for entry in schedule {
        let staff_index = config.staff.index_of(&entry.staff_name)?;
        let shift_index = slot_index(entry.date, entry.time, config)?;
        let id = vars.encode(shift_index, staff_index)?;
        model[id as usize - 1] = id;
    }
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{StaffRegistry, TimeOfDay, WorkloadRule};
    use chrono::NaiveDate;

    fn config() -> RotaConfig {
        RotaConfig {
            staff: StaffRegistry::new(["Alice", "Bob", "Charlie"]).unwrap(),
            n_shifts: 4,
            day_staffing: 2,
            night_staffing: 1,
            workload: WorkloadRule::defaults(),
            start_date: NaiveDate::from_ymd_opt(2026, 8, 28).unwrap(),
        }
    }

    #[test]
    fn positive_literals_become_entries() {
        let config = config();
        // Alice and Bob on shift 0 (day), Charlie on shift 1 (night).
        let model = vec![1, 2, -3, -4, -5, 6, -7, -8, -9, -10, -11, -12];
        let schedule = model_to_schedule(&model, &config).unwrap();
        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule[0].staff_name, "Alice");
        assert_eq!(schedule[0].time, TimeOfDay::Day);
        assert_eq!(
            schedule[0].date,
            NaiveDate::from_ymd_opt(2026, 8, 28).unwrap()
        );
        assert_eq!(schedule[2].staff_name, "Charlie");
        assert_eq!(schedule[2].time, TimeOfDay::Night);
        assert_eq!(schedule[2].record_id, "6");
    }

    #[test]
    fn schedule_round_trips_through_model() {
        let config = config();
        let model = vec![1, 2, -3, -4, -5, 6, 7, -8, 9, -10, -11, -12];
        let schedule = model_to_schedule(&model, &config).unwrap();
        assert_eq!(schedule_to_model(&schedule, &config).unwrap(), model);
    }

    #[test]
    fn absent_pairs_are_implicitly_false() {
        let config = config();
        let model = schedule_to_model(&[], &config).unwrap();
        assert_eq!(model, empty_model(config.universe()));
    }

    #[test]
    fn unknown_staff_is_a_validation_error() {
        let config = config();
        let entry = ScheduleEntry {
            record_id: "1".to_string(),
            staff_name: "Zed".to_string(),
            date: config.start_date,
            time: TimeOfDay::Day,
        };
        assert!(matches!(
            schedule_to_model(&[entry], &config),
            Err(RotaError::UnknownStaff(_))
        ));
    }
}
