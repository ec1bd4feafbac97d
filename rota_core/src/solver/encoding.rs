use crate::compiler::{CardKind, Clause, Formula};

/// Translates a formula's cardinality groups into primitive clauses using
/// the sequential-counter encoding (Sinz 2005). Auxiliary variables are
/// allocated above the formula's universe; clause count per group is
/// O(n * bound).
///
/// Returns the full clause list ready for the solver.
pub fn encode_formula(formula: &Formula) -> Vec<Clause> {
    let mut clauses = formula.clauses.clone();
    let mut next_var = formula.universe() as i32 + 1;
    for group in &formula.cards {
        match group.kind {
            CardKind::AtMost => {
                encode_at_most(&mut clauses, &group.literals, group.bound, &mut next_var);
            }
            CardKind::AtLeast => {
                // at-least-k over L is at-most-(|L|-k) over the negations.
                if group.bound == 0 {
                    continue;
                }
                match group.literals.len().checked_sub(group.bound) {
                    Some(complement) => {
                        let negated: Vec<i32> = group.literals.iter().map(|l| -l).collect();
                        encode_at_most(&mut clauses, &negated, complement, &mut next_var);
                    }
                    // Demanding more true literals than exist: contradiction.
                    None => clauses.push(Vec::new()),
                }
            }
        }
    }
    clauses
}

/// Sequential-counter clauses for "at most `bound` of `literals` are true".
///
/// Register variable s(i,j) means "at least j of the first i+1 literals are
/// true"; the final clause forbids the counter exceeding the bound.
fn encode_at_most(clauses: &mut Vec<Clause>, literals: &[i32], bound: usize, next_var: &mut i32) {
    let n = literals.len();
    if bound >= n {
        return;
    }
    if bound == 0 {
        for &literal in literals {
            clauses.push(vec![-literal]);
        }
        return;
    }

    // Registers for prefix positions 0..n-1, bound columns each.
    let base = *next_var;
    *next_var += ((n - 1) * bound) as i32;
    let reg = |i: usize, j: usize| -> i32 { base + (i * bound + (j - 1)) as i32 };

    clauses.push(vec![-literals[0], reg(0, 1)]);
    for j in 2..=bound {
        clauses.push(vec![-reg(0, j)]);
    }
    for i in 1..n - 1 {
        clauses.push(vec![-literals[i], reg(i, 1)]);
        clauses.push(vec![-reg(i - 1, 1), reg(i, 1)]);
        for j in 2..=bound {
            clauses.push(vec![-literals[i], -reg(i - 1, j - 1), reg(i, j)]);
            clauses.push(vec![-reg(i - 1, j), reg(i, j)]);
        }
        clauses.push(vec![-literals[i], -reg(i - 1, bound)]);
    }
    clauses.push(vec![-literals[n - 1], -reg(n - 2, bound)]);
}
