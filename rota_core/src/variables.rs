use crate::error::RotaError;

/// Bijective mapping between (shift, staff) pairs and solver variable ids.
///
/// Variable ids run from 1 to `n_staff * n_shifts`; ids above that range are
/// reserved for auxiliary variables introduced by the cardinality encoding.
#[derive(Debug, Clone, Copy)]
pub struct VariableIndex {
    n_staff: usize,
    n_shifts: usize,
}

impl VariableIndex {
    pub fn new(n_staff: usize, n_shifts: usize) -> Self {
        VariableIndex { n_staff, n_shifts }
    }

    /// Number of assignment variables (excluding auxiliaries).
    pub fn universe(&self) -> usize {
        self.n_staff * self.n_shifts
    }

    /// Maps a (shift, staff) pair to its variable id.
    ///
    /// `staff_index` is 1-based, `shift_index` is 0-based.
    pub fn encode(&self, shift_index: usize, staff_index: usize) -> Result<i32, RotaError> {
        if shift_index >= self.n_shifts {
            return Err(RotaError::ShiftOutOfRange {
                index: shift_index,
                n_shifts: self.n_shifts,
            });
        }
        if staff_index == 0 || staff_index > self.n_staff {
            return Err(RotaError::StaffOutOfRange {
                index: staff_index,
                n_staff: self.n_staff,
            });
        }
        Ok((shift_index * self.n_staff + staff_index) as i32)
    }

    /// Inverse of [`encode`](Self::encode): maps a variable id back to its
    /// (shift, staff) pair.
    pub fn decode(&self, id: i32) -> Result<(usize, usize), RotaError> {
        if id < 1 || id as usize > self.universe() {
            return Err(RotaError::VariableOutOfRange {
                id,
                max: self.universe(),
            });
        }
        let id = id as usize;
        let shift_index = (id - 1) / self.n_staff;
        let staff_index = id - shift_index * self.n_staff;
        Ok((shift_index, staff_index))
    }
}
