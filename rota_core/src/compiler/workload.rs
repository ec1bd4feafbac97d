use crate::compiler::formula::Formula;
use crate::error::RotaError;
use crate::types::RotaConfig;
use crate::variables::VariableIndex;

/// Applies every configured sliding-window workload rule to every staff
/// member: in each contiguous window of `rule.window` slots, at most
/// `rule.bound` of that member's variables may be true.
///
/// A window wider than the horizon generates no constraint.
pub fn apply_workload_constraints(
    formula: &mut Formula,
    config: &RotaConfig,
    vars: &VariableIndex,
) -> Result<(), RotaError> {
    for staff_index in 1..=config.n_staff() {
        for rule in &config.workload {
            if rule.window == 0 {
                continue;
            }
            for first_shift in 0..(config.n_shifts + 1).saturating_sub(rule.window) {
                let literals: Vec<i32> = (first_shift..first_shift + rule.window)
                    .map(|shift_index| vars.encode(shift_index, staff_index))
                    .collect::<Result<_, _>>()?;
                formula.add_at_most(literals, rule.bound);
            }
        }
    }
    Ok(())
}
