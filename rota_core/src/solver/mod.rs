// Boundary to the SAT engine.
pub mod encoding;

use log::debug;
use splr::{Certificate, Config, SatSolverIF, SolveIF, Solver, SolverError};

use crate::compiler::Formula;
use crate::error::RotaError;
use crate::types::Model;

/// One incremental solving session over a fixed formula.
///
/// The session owns its solver exclusively; concurrent requests must open
/// independent sessions. Clauses added between solve calls extend the
/// formula without discarding the solver's internal state.
pub struct SolverSession {
    solver: Option<Solver>,
    universe: usize,
}

impl SolverSession {
    /// Encodes the formula (cardinality groups included) and bootstraps the
    /// engine. A formula that is already inconsistent at load time yields a
    /// session whose first solve reports unsatisfiable.
    pub fn new(formula: &Formula) -> Result<Self, RotaError> {
        let clauses = encoding::encode_formula(formula);
        debug!(
            "session over {} variables, {} encoded clauses",
            formula.universe(),
            clauses.len()
        );
        let solver = match Solver::try_from((Config::default(), clauses.as_slice())) {
            Ok(solver) => Some(solver),
            // Trivially unsatisfiable at load time (empty or conflicting
            // clauses); keep the session so solve() reports it uniformly.
            Err(Ok(Certificate::UNSAT)) => None,
            Err(Err(SolverError::EmptyClause | SolverError::Inconsistent)) => None,
            Err(Ok(Certificate::SAT(_))) => {
                return Err(RotaError::Solver(
                    "unexpected certificate while loading formula".to_string(),
                ))
            }
            Err(Err(err)) => return Err(RotaError::Solver(format!("{:?}", err))),
        };
        Ok(SolverSession {
            solver,
            universe: formula.universe(),
        })
    }

    pub fn universe(&self) -> usize {
        self.universe
    }

    /// Requests any satisfying model; `None` means the formula (with all
    /// clauses added so far) is unsatisfiable. Models are truncated to the
    /// assignment-variable universe, dropping encoding auxiliaries.
    pub fn solve(&mut self) -> Result<Option<Model>, RotaError> {
        let Some(solver) = self.solver.as_mut() else {
            return Ok(None);
        };
        match solver.solve() {
            Ok(Certificate::SAT(mut model)) => {
                model.truncate(self.universe);
                solver.reset();
                Ok(Some(model))
            }
            Ok(Certificate::UNSAT) => Ok(None),
            Err(err) => Err(RotaError::Solver(format!("{:?}", err))),
        }
    }

    /// Adds a clause to the running session. Returns `Ok(false)` when the
    /// clause makes the formula inconsistent at level zero, after which
    /// every solve reports unsatisfiable.
    pub fn add_clause(&mut self, clause: Vec<i32>) -> Result<bool, RotaError> {
        let Some(solver) = self.solver.as_mut() else {
            return Ok(false);
        };
        match solver.add_clause(clause) {
            Ok(_) => Ok(true),
            Err(SolverError::Inconsistent) | Err(SolverError::EmptyClause) => {
                self.solver = None;
                Ok(false)
            }
            Err(err) => Err(RotaError::Solver(format!("{:?}", err))),
        }
    }

    /// Blocks a model: at least one of its literals must flip in any model
    /// returned by a later solve call.
    pub fn block(&mut self, model: &Model) -> Result<bool, RotaError> {
        self.add_clause(model.iter().map(|l| -l).collect())
    }
}

/// Batch entry point: one formula, one solve.
pub fn solve_once(formula: &Formula) -> Result<Option<Model>, RotaError> {
    SolverSession::new(formula)?.solve()
}
