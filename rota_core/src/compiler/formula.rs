/// A disjunction of signed literals.
pub type Clause = Vec<i32>;

/// Direction of a cardinality bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    AtMost,
    AtLeast,
}

/// A bound on the number of true literals among a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardGroup {
    pub literals: Vec<i32>,
    pub bound: usize,
    pub kind: CardKind,
}

/// An ordered collection of plain clauses and cardinality groups over a
/// fixed variable universe. Ordering is not semantically significant but is
/// deterministic for a given configuration and constraint list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formula {
    universe: usize,
    pub clauses: Vec<Clause>,
    pub cards: Vec<CardGroup>,
}

impl Formula {
    pub fn new(universe: usize) -> Self {
        Formula {
            universe,
            clauses: Vec::new(),
            cards: Vec::new(),
        }
    }

    /// Number of assignment variables this formula ranges over. Auxiliary
    /// variables introduced by the cardinality encoding live above this.
    pub fn universe(&self) -> usize {
        self.universe
    }

    pub fn add_clause(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    /// Unit clause forcing a single literal.
    pub fn add_unit(&mut self, literal: i32) {
        self.clauses.push(vec![literal]);
    }

    pub fn add_at_most(&mut self, literals: Vec<i32>, bound: usize) {
        self.cards.push(CardGroup {
            literals,
            bound,
            kind: CardKind::AtMost,
        });
    }

    pub fn add_at_least(&mut self, literals: Vec<i32>, bound: usize) {
        self.cards.push(CardGroup {
            literals,
            bound,
            kind: CardKind::AtLeast,
        });
    }

    /// Appends all clauses and cardinality groups of `other`, preserving
    /// their order.
    pub fn extend(&mut self, other: Formula) {
        self.clauses.extend(other.clauses);
        self.cards.extend(other.cards);
    }
}
