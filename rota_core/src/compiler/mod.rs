// Formula construction from configuration and constraint records.
pub mod absence;
pub mod formula;
pub mod staffing;
pub mod workload;

pub use formula::{CardGroup, CardKind, Clause, Formula};

use log::debug;

use crate::error::RotaError;
use crate::types::{AbsenceRequest, RotaConfig};
use crate::variables::VariableIndex;

/// Result of compiling a constraint set: the formula to solve plus the
/// absence records that failed validation and were left out of it.
#[derive(Debug, Clone)]
pub struct CompileOutcome {
    pub formula: Formula,
    pub rejected: Vec<(AbsenceRequest, RotaError)>,
}

/// Builds the clause/cardinality formula for one scheduling run.
///
/// Compilation is deterministic and side-effect-free: the same
/// configuration and record list always produce the same formula, clause
/// for clause.
pub struct RotaCompiler<'a> {
    config: &'a RotaConfig,
    vars: VariableIndex,
}

impl<'a> RotaCompiler<'a> {
    pub fn new(config: &'a RotaConfig) -> Self {
        let vars = VariableIndex::new(config.n_staff(), config.n_shifts);
        RotaCompiler { config, vars }
    }

    pub fn variables(&self) -> &VariableIndex {
        &self.vars
    }

    /// Staffing and workload constraints: everything that holds regardless
    /// of the current absence records.
    pub fn permanent_constraints(&self) -> Result<Formula, RotaError> {
        let mut formula = Formula::new(self.config.universe());
        staffing::apply_staffing_constraints(&mut formula, self.config, &self.vars)?;
        workload::apply_workload_constraints(&mut formula, self.config, &self.vars)?;
        debug!(
            "permanent constraints: {} cardinality groups over {} variables",
            formula.cards.len(),
            formula.universe()
        );
        Ok(formula)
    }

    /// Unit clauses for the given absence records; invalid records are
    /// returned alongside rather than failing the whole build.
    pub fn absence_clauses(
        &self,
        requests: &[AbsenceRequest],
    ) -> (Formula, Vec<(AbsenceRequest, RotaError)>) {
        let mut formula = Formula::new(self.config.universe());
        let rejected =
            absence::apply_absence_constraints(&mut formula, self.config, &self.vars, requests);
        (formula, rejected)
    }

    /// Permanent constraints plus the current absence records.
    pub fn compile(&self, requests: &[AbsenceRequest]) -> Result<CompileOutcome, RotaError> {
        let mut formula = self.permanent_constraints()?;
        let (absences, rejected) = self.absence_clauses(requests);
        formula.extend(absences);
        debug!(
            "compiled formula: {} clauses, {} cardinality groups, {} records rejected",
            formula.clauses.len(),
            formula.cards.len(),
            rejected.len()
        );
        Ok(CompileOutcome { formula, rejected })
    }
}
