use crate::error::RotaError;
use crate::types::{slot_date_time, DiffEntry, Model, RotaConfig, RotaDiff};
use crate::variables::VariableIndex;

/// Number of variables whose sign differs between two models of equal
/// length. A length mismatch means the models range over different staff or
/// horizon domains and is a caller error.
pub fn hamming_distance(a: &Model, b: &Model) -> Result<usize, RotaError> {
    if a.len() != b.len() {
        return Err(RotaError::ModelLengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter()
        .zip(b.iter())
        .filter(|(x, y)| (**x > 0) != (**y > 0))
        .count())
}

/// Computes the assignments to create and to cancel when moving from
/// `old` to `new`. Every entry is emitted with `validated == false`;
/// confirmation belongs to an external workflow.
pub fn diff_models(old: &Model, new: &Model, config: &RotaConfig) -> Result<RotaDiff, RotaError> {
    if old.len() != new.len() {
        return Err(RotaError::ModelLengthMismatch {
            left: old.len(),
            right: new.len(),
        });
    }
    let vars = VariableIndex::new(config.n_staff(), config.n_shifts);
    let mut diff = RotaDiff::default();
    for (&old_literal, &new_literal) in old.iter().zip(new.iter()) {
        if (old_literal > 0) == (new_literal > 0) {
            continue;
        }
        let (shift_index, staff_index) = vars.decode(old_literal.abs())?;
        let (date, time) = slot_date_time(shift_index, config.start_date);
        let entry = DiffEntry {
            record_id: old_literal.abs().to_string(),
            staff_name: config.staff.name_of(staff_index)?.to_string(),
            date,
            time,
            validated: false,
        };
        if new_literal > 0 {
            diff.to_add.push(entry);
        } else {
            diff.to_remove.push(entry);
        }
    }
    Ok(diff)
}

/// Applies a confirmed diff to a model, yielding the updated model. Every
/// entry must carry `validated == true`; otherwise nothing is applied.
pub fn apply_diff(model: &Model, diff: &RotaDiff, config: &RotaConfig) -> Result<Model, RotaError> {
    let vars = VariableIndex::new(config.n_staff(), config.n_shifts);
    for entry in diff.to_add.iter().chain(diff.to_remove.iter()) {
        if !entry.validated {
            return Err(RotaError::UnvalidatedChange(entry.record_id.clone()));
        }
    }
    let mut updated = model.clone();
    let mut set = |entry: &DiffEntry, sign: i32| -> Result<(), RotaError> {
        let staff_index = config.staff.index_of(&entry.staff_name)?;
        let shift_index = crate::types::slot_index(entry.date, entry.time, config)?;
        let id = vars.encode(shift_index, staff_index)?;
        updated[id as usize - 1] = sign * id;
        Ok(())
    };
    for entry in &diff.to_add {
        set(entry, 1)?;
    }
    for entry in &diff.to_remove {
        set(entry, -1)?;
    }
    Ok(updated)
}
