use crate::compiler::formula::Formula;
use crate::error::RotaError;
use crate::types::RotaConfig;
use crate::variables::VariableIndex;

/// Requires exactly `config.required_for(shift_index)` staff on every shift.
///
/// "Exactly K" is expressed as at-most-K over the positive literals plus
/// at-most-(n-K) over the negated literals, which is at-least-K. This keeps
/// the formula independent of whether the engine has a native equality
/// primitive.
///
/// A requirement above the roster size can never be met; the shift gets a
/// single impossible at-least group, which the encoder lowers to a
/// contradiction, so the solve reports unsatisfiable instead of the build
/// failing.
pub fn apply_staffing_constraints(
    formula: &mut Formula,
    config: &RotaConfig,
    vars: &VariableIndex,
) -> Result<(), RotaError> {
    for shift_index in 0..config.n_shifts {
        let required = config.required_for(shift_index);
        let literals: Vec<i32> = (1..=config.n_staff())
            .map(|staff_index| vars.encode(shift_index, staff_index))
            .collect::<Result<_, _>>()?;
        let Some(slack) = config.n_staff().checked_sub(required) else {
            formula.add_at_least(literals, required);
            continue;
        };
        let negated: Vec<i32> = literals.iter().map(|l| -l).collect();
        formula.add_at_most(literals, required);
        formula.add_at_most(negated, slack);
    }
    Ok(())
}
