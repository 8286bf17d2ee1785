//! Boolean constraint expressions and clause helpers.

use std::ops::Index;

use itertools::Itertools;
use varisat::Lit;

use crate::engine::IntVar;

/// A Boolean combination of equality atoms over integer variables, as asserted on a [`ConstraintEngine`](crate::engine::ConstraintEngine).
///
/// There is no negation, so every subexpression appears with positive polarity.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expr {
    /// Always holds.
    True,
    /// Never holds.
    False,
    /// The variable takes the given value.
    Eq(IntVar, u32),
    /// Every operand holds. An empty conjunction is true.
    And(Vec<Expr>),
    /// At least one operand holds. An empty disjunction is false.
    Or(Vec<Expr>),
}

impl Expr {
    /// Conjunction of `operands`.
    pub fn and(operands: impl IntoIterator<Item = Expr>) -> Self {
        Self::And(operands.into_iter().collect())
    }

    /// Disjunction of `operands`.
    pub fn or(operands: impl IntoIterator<Item = Expr>) -> Self {
        Self::Or(operands.into_iter().collect())
    }

    /// Number of equality atoms in this tree.
    pub fn atom_count(&self) -> usize {
        match self {
            Self::True | Self::False => 0,
            Self::Eq(..) => 1,
            Self::And(operands) | Self::Or(operands) => operands.iter().map(Expr::atom_count).sum(),
        }
    }
}

pub(crate) fn exactly_one(lits: &[Lit]) -> Vec<Vec<Lit>> {
    let mut clauses = Vec::with_capacity(lits.len() * (lits.len() + 1) / 2 + 1);

    // no two are true; (!A + !B) * (!A + !C) * ...
    clauses.extend(lits.iter()
        .combinations(2)
        .map(|pair| vec![!**pair.index(0), !**pair.index(1)])
    );
    // at least one is true; A + B + C + ...
    clauses.push(lits.to_vec());

    clauses
}
