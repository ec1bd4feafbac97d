use std::error::Error;

use chrono::Local;
use colored::*;

use rota_core::*;

fn read_absences(path: Option<&String>, fallback: Vec<AbsenceRequest>) -> Result<Vec<AbsenceRequest>, Box<dyn Error>> {
    match path {
        Some(path) => Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?),
        None => Ok(fallback),
    }
}

fn time_label(time: TimeOfDay) -> &'static str {
    match time {
        TimeOfDay::Day => "day",
        TimeOfDay::Night => "night",
    }
}

fn print_schedule(schedule: &[ScheduleEntry]) {
    for entry in schedule {
        println!(
            "  {} {:>5}  {}",
            entry.date,
            time_label(entry.time),
            entry.staff_name.cyan()
        );
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    // Demo roster: 7 staff over a 14-day horizon (28 half-day slots),
    // 3 staff on day shifts, 1 on night shifts.
    let config = RotaConfig {
        staff: StaffRegistry::new(["Alice", "Bob", "Charlie", "David", "Eve", "Fred", "Gael"])?,
        n_shifts: 28,
        day_staffing: 3,
        night_staffing: 1,
        workload: WorkloadRule::defaults(),
        start_date: Local::now().date_naive(),
    };

    // Absence records come from a JSON file when given, otherwise a sample.
    let absences = read_absences(
        args.get(1),
        vec![
            AbsenceRequest::new("Alice", "tomorrow", TimeOfDay::Day),
            AbsenceRequest::new("David", "next week", TimeOfDay::Night),
        ],
    )?;

    let compiler = RotaCompiler::new(&config);
    let outcome = compiler.compile(&absences)?;
    for (request, err) in &outcome.rejected {
        println!(
            "{} {} ({})",
            "rejected constraint:".yellow(),
            request.staff_name,
            err
        );
    }

    println!("computing a schedule for {} staff, {} slots..", config.n_staff(), config.n_shifts);
    let Some(model) = solve_once(&outcome.formula)? else {
        println!("{}", "no schedule satisfies the constraints".red().bold());
        std::process::exit(1);
    };
    println!("{}", "schedule found".green().bold());
    let schedule = model_to_schedule(&model, &config)?;
    print_schedule(&schedule);

    // A new constraint arrives: find the closest valid schedule to the one
    // everyone already knows.
    let additional = read_absences(
        args.get(2),
        vec![AbsenceRequest::new("Bob", "day after tomorrow", TimeOfDay::Day)],
    )?;
    println!();
    println!("rescheduling with {} additional constraint(s)..", additional.len());

    let mut all_absences = absences;
    all_absences.extend(additional);
    let updated = compiler.compile(&all_absences)?;
    for (request, err) in &updated.rejected {
        println!(
            "{} {} ({})",
            "rejected constraint:".yellow(),
            request.staff_name,
            err
        );
    }

    let engine = RescheduleEngine::default();
    match engine.closest_model(&updated.formula, &model) {
        Ok(result) => {
            println!(
                "{} (distance {})",
                "updated schedule found".green().bold(),
                result.distance
            );
            let diff = diff_models(&model, &result.model, &config)?;
            for entry in &diff.to_add {
                println!(
                    "  {} {} {:>5}  {}",
                    "+".green(),
                    entry.date,
                    time_label(entry.time),
                    entry.staff_name
                );
            }
            for entry in &diff.to_remove {
                println!(
                    "  {} {} {:>5}  {}",
                    "-".red(),
                    entry.date,
                    time_label(entry.time),
                    entry.staff_name
                );
            }
        }
        Err(RotaError::Infeasible) => {
            println!("{}", "the additional constraints are infeasible".red().bold());
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
