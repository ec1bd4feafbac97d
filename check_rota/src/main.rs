use std::env;
use std::error::Error;
use std::process;

use chrono::{Local, NaiveDate};
use colored::*;

use rota_core::{
    schedule_to_model, RotaConfig, ScheduleEntry, StaffRegistry, VariableIndex, WorkloadRule,
};

/// Builds the configuration from command-line flags:
/// --staff=Alice,Bob,... --shifts=N --day=K --night=K --start=YYYY-MM-DD
/// and repeatable --window=W:B workload rules.
fn parse_config_from_args(args: &[String]) -> Result<RotaConfig, Box<dyn Error>> {
    let mut staff_names = vec![
        "Alice".to_string(),
        "Bob".to_string(),
        "Charlie".to_string(),
        "David".to_string(),
        "Eve".to_string(),
        "Fred".to_string(),
        "Gael".to_string(),
    ];
    let mut n_shifts = 28;
    let mut day_staffing = 3;
    let mut night_staffing = 1;
    let mut start_date = Local::now().date_naive();
    let mut workload = Vec::new();

    for arg in args {
        if let Some(list) = arg.strip_prefix("--staff=") {
            staff_names = list.split(',').map(|s| s.trim().to_string()).collect();
        } else if let Some(n) = arg.strip_prefix("--shifts=") {
            n_shifts = n.parse()?;
        } else if let Some(n) = arg.strip_prefix("--day=") {
            day_staffing = n.parse()?;
        } else if let Some(n) = arg.strip_prefix("--night=") {
            night_staffing = n.parse()?;
        } else if let Some(date) = arg.strip_prefix("--start=") {
            start_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")?;
        } else if let Some(rule) = arg.strip_prefix("--window=") {
            let (window, bound) = rule
                .split_once(':')
                .ok_or_else(|| format!("expected --window=W:B, got {}", rule))?;
            workload.push(WorkloadRule::new(window.parse()?, bound.parse()?));
        }
    }
    if workload.is_empty() {
        workload = WorkloadRule::defaults();
    }

    Ok(RotaConfig {
        staff: StaffRegistry::new(staff_names)?,
        n_shifts,
        day_staffing,
        night_staffing,
        workload,
        start_date,
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(path) = args.iter().find(|a| !a.starts_with("--")) else {
        eprintln!("usage: check_rota <schedule.json> [--staff=A,B,..] [--shifts=N] [--day=K] [--night=K] [--start=YYYY-MM-DD] [--window=W:B]..");
        process::exit(2);
    };
    let config = parse_config_from_args(&args)?;

    let schedule: Vec<ScheduleEntry> = serde_json::from_str(&std::fs::read_to_string(path)?)?;
    let model = schedule_to_model(&schedule, &config)?;
    let vars = VariableIndex::new(config.n_staff(), config.n_shifts);

    let mut violations = 0;

    // Staffing exactness per shift.
    for shift_index in 0..config.n_shifts {
        let assigned = (1..=config.n_staff())
            .filter(|&staff_index| {
                let id = vars.encode(shift_index, staff_index).unwrap_or(0);
                id > 0 && model[id as usize - 1] > 0
            })
            .count();
        let required = config.required_for(shift_index);
        if assigned != required {
            violations += 1;
            println!(
                "{} shift {}: {} assigned, {} required",
                "staffing violation".red(),
                shift_index,
                assigned,
                required
            );
        }
    }

    // Sliding-window workload bounds per staff member.
    for staff_index in 1..=config.n_staff() {
        for rule in &config.workload {
            for first_shift in 0..(config.n_shifts + 1).saturating_sub(rule.window) {
                let worked = (first_shift..first_shift + rule.window)
                    .filter(|&shift_index| {
                        let id = vars.encode(shift_index, staff_index).unwrap_or(0);
                        id > 0 && model[id as usize - 1] > 0
                    })
                    .count();
                if worked > rule.bound {
                    violations += 1;
                    println!(
                        "{} {}: {} slots worked in window {}..{} (bound {})",
                        "workload violation".red(),
                        config.staff.name_of(staff_index)?,
                        worked,
                        first_shift,
                        first_shift + rule.window,
                        rule.bound
                    );
                }
            }
        }
    }

    if violations == 0 {
        println!("{}", "schedule satisfies all constraints".green().bold());
        Ok(())
    } else {
        println!("{}", format!("{} violation(s) found", violations).red().bold());
        process::exit(1);
    }
}
