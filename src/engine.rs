//! Finite-domain constraint backends.
//!
//! [`ConstraintEngine`] is what the Gogen model needs from a solver; [`VarisatEngine`] provides it over SAT.

use std::collections::{BTreeMap, HashSet};

use itertools::Itertools;
use varisat::{CnfFormula, ExtendFormula, Lit, Solver, Var};

use crate::logic::{exactly_one, Expr};

/// Handle to an integer variable created by a [`ConstraintEngine`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct IntVar(pub(crate) usize);

/// Outcome of [`ConstraintEngine::check`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CheckResult {
    /// Everything asserted holds together; a model is available.
    Sat,
    /// No assignment satisfies everything asserted.
    Unsat,
    /// The engine gave up without deciding.
    Unknown,
}

/// The interface a constraint backend must offer to solve Gogen puzzles.
///
/// A session holds finite-domain integer variables and asserted [`Expr`]s.
/// [`check`](Self::check) decides their conjunction, after which [`value`](Self::value) reads the model.
pub trait ConstraintEngine {
    /// Create a variable which takes exactly one value out of `domain`.
    /// Duplicate values are ignored; an empty domain makes the session unsatisfiable.
    fn new_int_var(&mut self, domain: impl IntoIterator<Item = u32>) -> IntVar;
    /// Assert that `expr` holds.
    fn assert(&mut self, expr: Expr);
    /// Assert that at most one of the equality atoms `var = value` in `atoms` holds.
    /// Atoms whose value lies outside their variable's domain never hold and are ignored.
    fn assert_at_most_one(&mut self, atoms: &[(IntVar, u32)]);
    /// Decide the conjunction of everything asserted so far.
    fn check(&mut self) -> CheckResult;
    /// The value of `var` in the model found by the last [`check`](Self::check), if it returned [`CheckResult::Sat`].
    fn value(&self, var: IntVar) -> Option<u32>;
}

/// Either a literal or a constant, the result of lowering a subexpression.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Lowered {
    Const(bool),
    Lit(Lit),
}

/// A [`ConstraintEngine`] over the `varisat` CDCL SAT solver.
///
/// Each integer variable is a one-hot group of Boolean variables, one per domain value, of which exactly one is true.
/// Nested subexpressions are named by fresh Tseitin variables; since [`Expr`] has no negation, only the implication
/// from the name to its meaning is needed.
pub struct VarisatEngine {
    formula: CnfFormula,
    // one-hot group of each IntVar, keyed by value
    domains: Vec<BTreeMap<u32, Var>>,
    model: Option<HashSet<Var>>,
}

impl Default for VarisatEngine {
    fn default() -> Self {
        Self {
            formula: CnfFormula::new(),
            domains: Vec::new(),
            model: None,
        }
    }
}

impl VarisatEngine {
    /// An empty session with no variables or clauses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of Boolean variables allocated, including Tseitin variables.
    pub fn var_count(&self) -> usize {
        self.formula.var_count()
    }

    /// Number of clauses asserted so far.
    pub fn clause_count(&self) -> usize {
        self.formula.len()
    }

    fn atom(&self, var: IntVar, value: u32) -> Lowered {
        match self.domains.get(var.0).and_then(|domain| domain.get(&value)) {
            Some(v) => Lowered::Lit(v.positive()),
            // outside the domain, so it can never hold
            None => Lowered::Const(false),
        }
    }

    /// Lower `expr` to a literal which implies it, adding the defining clauses as we go.
    fn lower(&mut self, expr: &Expr) -> Lowered {
        match expr {
            Expr::True => Lowered::Const(true),
            Expr::False => Lowered::Const(false),
            Expr::Eq(var, value) => self.atom(*var, *value),
            Expr::And(operands) => {
                let mut lits = Vec::with_capacity(operands.len());
                for operand in operands {
                    match self.lower(operand) {
                        Lowered::Const(true) => {}
                        Lowered::Const(false) => return Lowered::Const(false),
                        Lowered::Lit(lit) => lits.push(lit),
                    }
                }

                match lits.len() {
                    0 => Lowered::Const(true),
                    1 => Lowered::Lit(lits[0]),
                    _ => {
                        // T => A * B * ... = (!T + A)(!T + B)...
                        let name = self.formula.new_var();
                        for lit in lits {
                            self.formula.add_clause(&[name.negative(), lit]);
                        }
                        Lowered::Lit(name.positive())
                    }
                }
            }
            Expr::Or(operands) => {
                let mut lits = Vec::with_capacity(operands.len());
                for operand in operands {
                    match self.lower(operand) {
                        Lowered::Const(true) => return Lowered::Const(true),
                        Lowered::Const(false) => {}
                        Lowered::Lit(lit) => lits.push(lit),
                    }
                }

                match lits.len() {
                    0 => Lowered::Const(false),
                    1 => Lowered::Lit(lits[0]),
                    _ => {
                        // T => A + B + ... = !T + A + B + ...
                        let name = self.formula.new_var();
                        let mut clause = Vec::with_capacity(lits.len() + 1);
                        clause.push(name.negative());
                        clause.extend(lits);
                        self.formula.add_clause(&clause);
                        Lowered::Lit(name.positive())
                    }
                }
            }
        }
    }
}

impl ConstraintEngine for VarisatEngine {
    fn new_int_var(&mut self, domain: impl IntoIterator<Item = u32>) -> IntVar {
        let mut one_hot = BTreeMap::new();
        for value in domain.into_iter().unique() {
            one_hot.insert(value, self.formula.new_var());
        }

        let lits = one_hot.values().map(|v| v.positive()).collect_vec();
        for clause in exactly_one(&lits) {
            self.formula.add_clause(&clause);
        }

        self.domains.push(one_hot);
        IntVar(self.domains.len() - 1)
    }

    fn assert(&mut self, expr: Expr) {
        self.model = None;

        match expr {
            // top-level conjunctions and disjunctions need no naming
            Expr::And(operands) => operands.into_iter().for_each(|operand| self.assert(operand)),
            Expr::Or(operands) => {
                let mut clause = Vec::with_capacity(operands.len());
                for operand in &operands {
                    match self.lower(operand) {
                        Lowered::Const(true) => return,
                        Lowered::Const(false) => {}
                        Lowered::Lit(lit) => clause.push(lit),
                    }
                }
                self.formula.add_clause(&clause);
            }
            other => match self.lower(&other) {
                Lowered::Const(true) => {}
                Lowered::Const(false) => self.formula.add_clause(&[]),
                Lowered::Lit(lit) => self.formula.add_clause(&[lit]),
            },
        }
    }

    fn assert_at_most_one(&mut self, atoms: &[(IntVar, u32)]) {
        self.model = None;

        let lits = atoms.iter()
            .filter_map(|(var, value)| match self.atom(*var, *value) {
                Lowered::Lit(lit) => Some(lit),
                Lowered::Const(_) => None,
            })
            .unique()
            .collect_vec();

        // !A + !B for every pair
        for (a, b) in lits.into_iter().tuple_combinations() {
            self.formula.add_clause(&[!a, !b]);
        }
    }

    fn check(&mut self) -> CheckResult {
        let mut solver = Solver::new();
        solver.add_formula(&self.formula);

        match solver.solve() {
            Ok(true) => {
                self.model = solver.model().map(|model| model.into_iter()
                    .filter(|lit| lit.is_positive())
                    .map(|lit| lit.var())
                    .collect());

                match self.model {
                    Some(_) => CheckResult::Sat,
                    None => CheckResult::Unknown,
                }
            }
            Ok(false) => {
                self.model = None;
                CheckResult::Unsat
            }
            Err(err) => {
                log::warn!("SAT solver failed: {}", err);
                self.model = None;
                CheckResult::Unknown
            }
        }
    }

    fn value(&self, var: IntVar) -> Option<u32> {
        let model = self.model.as_ref()?;
        self.domains.get(var.0)?
            .iter()
            .find(|(_, v)| model.contains(*v))
            .map(|(value, _)| *value)
    }
}
