use log::{debug, info};

use crate::compiler::Formula;
use crate::error::RotaError;
use crate::extractor::hamming_distance;
use crate::solver::SolverSession;
use crate::types::Model;

/// Stop searching once a model within this Hamming distance of the previous
/// one has been found. Each further round costs a full re-solve, so "good
/// enough" is preferred over provably minimal.
pub const DEFAULT_DISTANCE_THRESHOLD: usize = 2;

/// A satisfying model together with its Hamming distance to the reference
/// model it was searched against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reschedule {
    pub model: Model,
    pub distance: usize,
}

/// Lazy sequence of satisfying models at strictly decreasing Hamming
/// distance from a reference model.
///
/// Each candidate pulled from the incremental session is blocked before the
/// next round, so the sequence is finite: the solution space strictly
/// shrinks every round until it is exhausted. Candidates that do not improve
/// on the best distance seen so far are blocked and skipped.
pub struct ImprovingModels<'a> {
    session: SolverSession,
    reference: &'a Model,
    best: usize,
    done: bool,
}

impl<'a> ImprovingModels<'a> {
    pub fn new(formula: &Formula, reference: &'a Model) -> Result<Self, RotaError> {
        if reference.len() != formula.universe() {
            return Err(RotaError::ModelLengthMismatch {
                left: reference.len(),
                right: formula.universe(),
            });
        }
        Ok(ImprovingModels {
            session: SolverSession::new(formula)?,
            reference,
            // Sentinel above the maximum possible distance so the first
            // model always improves.
            best: formula.universe() + 1,
            done: false,
        })
    }
}

impl Iterator for ImprovingModels<'_> {
    type Item = Result<Reschedule, RotaError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let model = match self.session.solve() {
                Ok(Some(model)) => model,
                Ok(None) => {
                    self.done = true;
                    return None;
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            };
            let distance = match hamming_distance(&model, self.reference) {
                Ok(distance) => distance,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            };
            match self.session.block(&model) {
                // Level-zero conflict: this candidate was the last one.
                Ok(false) => self.done = true,
                Ok(true) => {}
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
            if distance < self.best {
                self.best = distance;
                return Some(Ok(Reschedule { model, distance }));
            }
            debug!("candidate at distance {} discarded (best {})", distance, self.best);
        }
        None
    }
}

/// Finds a satisfying model close to a previous one: repeated incremental
/// solving with blocking clauses, stopping at the distance threshold.
///
/// The result is not guaranteed distance-minimal; the threshold trades
/// optimality for bounded latency.
#[derive(Debug, Clone, Copy)]
pub struct RescheduleEngine {
    threshold: usize,
}

impl Default for RescheduleEngine {
    fn default() -> Self {
        RescheduleEngine::new(DEFAULT_DISTANCE_THRESHOLD)
    }
}

impl RescheduleEngine {
    pub fn new(threshold: usize) -> Self {
        RescheduleEngine { threshold }
    }

    /// Returns the closest model found before the threshold was reached or
    /// the search space ran out. `RotaError::Infeasible` only when no
    /// satisfying model exists at all; a best model above the threshold is
    /// a normal outcome.
    pub fn closest_model(
        &self,
        formula: &Formula,
        previous: &Model,
    ) -> Result<Reschedule, RotaError> {
        let mut best: Option<Reschedule> = None;
        for candidate in ImprovingModels::new(formula, previous)? {
            let candidate = candidate?;
            info!("reschedule candidate at distance {}", candidate.distance);
            let within_threshold = candidate.distance <= self.threshold;
            best = Some(candidate);
            if within_threshold {
                break;
            }
        }
        best.ok_or(RotaError::Infeasible)
    }
}
