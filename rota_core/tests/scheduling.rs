use chrono::NaiveDate;
use rota_core::*;

fn demo_config() -> RotaConfig {
    RotaConfig {
        staff: StaffRegistry::new(["Alice", "Bob", "Charlie", "David", "Eve", "Fred", "Gael"])
            .unwrap(),
        n_shifts: 28,
        day_staffing: 3,
        night_staffing: 1,
        workload: WorkloadRule::defaults(),
        start_date: NaiveDate::from_ymd_opt(2026, 8, 28).unwrap(),
    }
}

fn staffing_count(model: &Model, config: &RotaConfig, shift_index: usize) -> usize {
    let vars = VariableIndex::new(config.n_staff(), config.n_shifts);
    (1..=config.n_staff())
        .filter(|&staff_index| {
            let id = vars.encode(shift_index, staff_index).unwrap();
            model[id as usize - 1] > 0
        })
        .count()
}

#[test]
fn solved_schedule_meets_staffing_exactly() {
    let config = demo_config();
    let compiler = RotaCompiler::new(&config);
    let formula = compiler.permanent_constraints().unwrap();
    let model = solve_once(&formula).unwrap().expect("feasible");
    assert_eq!(model.len(), config.universe());

    for shift_index in 0..config.n_shifts {
        assert_eq!(
            staffing_count(&model, &config, shift_index),
            config.required_for(shift_index),
            "shift {}",
            shift_index
        );
    }
}

#[test]
fn solved_schedule_respects_workload_windows() {
    let config = demo_config();
    let compiler = RotaCompiler::new(&config);
    let formula = compiler.permanent_constraints().unwrap();
    let model = solve_once(&formula).unwrap().expect("feasible");
    let vars = VariableIndex::new(config.n_staff(), config.n_shifts);

    for staff_index in 1..=config.n_staff() {
        for rule in &config.workload {
            for first_shift in 0..(config.n_shifts + 1 - rule.window) {
                let worked = (first_shift..first_shift + rule.window)
                    .filter(|&shift_index| {
                        let id = vars.encode(shift_index, staff_index).unwrap();
                        model[id as usize - 1] > 0
                    })
                    .count();
                assert!(
                    worked <= rule.bound,
                    "staff {} works {} slots in window {}..{} (bound {})",
                    staff_index,
                    worked,
                    first_shift,
                    first_shift + rule.window,
                    rule.bound
                );
            }
        }
    }
}

#[test]
fn absences_are_honored() {
    let config = demo_config();
    let compiler = RotaCompiler::new(&config);
    let absences = vec![
        AbsenceRequest::new("Alice", "2026-08-28", TimeOfDay::Day),
        AbsenceRequest::new("Bob", "tomorrow", TimeOfDay::Night),
    ];
    let outcome = compiler.compile(&absences).unwrap();
    assert!(outcome.rejected.is_empty());
    let model = solve_once(&outcome.formula).unwrap().expect("feasible");
    let vars = VariableIndex::new(config.n_staff(), config.n_shifts);
    // Alice (1) off slot 0, Bob (2) off slot 3.
    assert!(model[vars.encode(0, 1).unwrap() as usize - 1] < 0);
    assert!(model[vars.encode(3, 2).unwrap() as usize - 1] < 0);
}

#[test]
fn invalid_records_are_reported_but_do_not_block_solving() {
    let config = demo_config();
    let compiler = RotaCompiler::new(&config);
    let absences = vec![
        AbsenceRequest::new("Nobody", "tomorrow", TimeOfDay::Day),
        AbsenceRequest::new("Alice", "whenever", TimeOfDay::Day),
        AbsenceRequest::new("Eve", "tomorrow", TimeOfDay::Day),
    ];
    let outcome = compiler.compile(&absences).unwrap();
    assert_eq!(outcome.rejected.len(), 2);
    assert!(solve_once(&outcome.formula).unwrap().is_some());
}

#[test]
fn overconstrained_roster_is_infeasible() {
    // Two staff cannot cover a day shift that requires three.
    let config = RotaConfig {
        staff: StaffRegistry::new(["Alice", "Bob"]).unwrap(),
        n_shifts: 2,
        day_staffing: 3,
        night_staffing: 1,
        workload: Vec::new(),
        start_date: NaiveDate::from_ymd_opt(2026, 8, 28).unwrap(),
    };
    let compiler = RotaCompiler::new(&config);
    let formula = compiler.permanent_constraints().unwrap();
    assert!(solve_once(&formula).unwrap().is_none());

    let engine = RescheduleEngine::default();
    let previous = rota_core::types::empty_model(config.universe());
    assert_eq!(
        engine.closest_model(&formula, &previous).unwrap_err(),
        RotaError::Infeasible
    );
}

/// The reference rescheduling scenario: 3 staff, 4 slots, day staffing 2,
/// night staffing 1, no workload rules. A new absence for Alice on the
/// first day shift must swap exactly one other staff member in, for a total
/// Hamming distance of 2.
#[test]
fn reschedule_swaps_one_assignment() {
    let start = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
    let config = RotaConfig {
        staff: StaffRegistry::new(["Alice", "Bob", "Charlie"]).unwrap(),
        n_shifts: 4,
        day_staffing: 2,
        night_staffing: 1,
        workload: Vec::new(),
        start_date: start,
    };
    let vars = VariableIndex::new(config.n_staff(), config.n_shifts);

    // The published schedule: Alice and Bob on the first day shift, Charlie
    // covering both nights, Alice and Bob again on the second day shift.
    let old_schedule = vec![
        entry(&config, "Alice", 0),
        entry(&config, "Bob", 0),
        entry(&config, "Charlie", 1),
        entry(&config, "Alice", 2),
        entry(&config, "Bob", 2),
        entry(&config, "Charlie", 3),
    ];
    let old_model = schedule_to_model(&old_schedule, &config).unwrap();

    let compiler = RotaCompiler::new(&config);
    let absences = vec![AbsenceRequest::new("Alice", "2026-08-28", TimeOfDay::Day)];
    let outcome = compiler.compile(&absences).unwrap();
    assert!(outcome.rejected.is_empty());

    let engine = RescheduleEngine::default();
    let result = engine.closest_model(&outcome.formula, &old_model).unwrap();
    assert_eq!(result.distance, 2);

    // Alice is off shift 0, Charlie stepped in, staffing still exact.
    assert!(result.model[vars.encode(0, 1).unwrap() as usize - 1] < 0);
    assert!(result.model[vars.encode(0, 3).unwrap() as usize - 1] > 0);
    for shift_index in 0..config.n_shifts {
        assert_eq!(
            staffing_count(&result.model, &config, shift_index),
            config.required_for(shift_index)
        );
    }

    // The rendered diff proposes exactly one addition and one removal.
    let diff = diff_models(&old_model, &result.model, &config).unwrap();
    assert_eq!(diff.to_add.len(), 1);
    assert_eq!(diff.to_remove.len(), 1);
    assert_eq!(diff.to_add[0].staff_name, "Charlie");
    assert_eq!(diff.to_remove[0].staff_name, "Alice");
    assert!(!diff.to_add[0].validated && !diff.to_remove[0].validated);
}

fn entry(config: &RotaConfig, staff_name: &str, shift_index: usize) -> ScheduleEntry {
    let (date, time) = rota_core::types::slot_date_time(shift_index, config.start_date);
    ScheduleEntry {
        record_id: String::new(),
        staff_name: staff_name.to_string(),
        date,
        time,
    }
}
