use std::collections::HashMap;
use std::ops::{Add, Mul, Neg, Sub};

use crate::symbol::Symbol;

/// A linear form over [`Symbol`]s: `const + sum(coeff * symbol)`.
///
/// This is the "minimal linear-expression type" spec.md §9 calls for in
/// place of a general symbolic-algebra dependency: every equation in this
/// system is linear in its unknowns once a switch mode is fixed, so a sum
/// of `{coefficient, variable}` pairs plus a constant is all the
/// expressiveness the solver ever needs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinExpr {
    vars: HashMap<Symbol, f64>,
    constant: f64,
}

impl LinExpr {
    pub fn zero() -> Self {
        LinExpr::default()
    }

    pub fn from_const(c: f64) -> Self {
        LinExpr {
            vars: HashMap::new(),
            constant: c,
        }
    }

    pub fn from_symbol(sym: Symbol) -> Self {
        let mut vars = HashMap::with_capacity(1);
        vars.insert(sym, 1.0);
        LinExpr { vars, constant: 0.0 }
    }

    pub fn from_term(coeff: f64, sym: Symbol) -> Self {
        if coeff == 0.0 {
            return LinExpr::zero();
        }
        let mut vars = HashMap::with_capacity(1);
        vars.insert(sym, coeff);
        LinExpr { vars, constant: 0.0 }
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Coefficient of `sym` in this expression (0.0 if absent).
    pub fn coeff(&self, sym: &Symbol) -> f64 {
        self.vars.get(sym).copied().unwrap_or(0.0)
    }

    /// Every symbol appearing with a nonzero coefficient.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.vars.keys()
    }

    pub fn is_zero(&self, tol: f64) -> bool {
        self.constant.abs() <= tol && self.vars.values().all(|c| c.abs() <= tol)
    }

    /// Returns a copy of this expression with the terms for `syms` removed
    /// (used by the solver to split an equation's row into the "unknown"
    /// coefficients and the remaining free-symbol/constant part).
    pub fn without(&self, syms: &[Symbol]) -> LinExpr {
        let mut out = self.clone();
        for s in syms {
            out.vars.remove(s);
        }
        out
    }

    pub fn scale(&self, factor: f64) -> LinExpr {
        LinExpr {
            vars: self.vars.iter().map(|(s, c)| (s.clone(), c * factor)).collect(),
            constant: self.constant * factor,
        }
    }
}

impl Add for &LinExpr {
    type Output = LinExpr;
    fn add(self, rhs: &LinExpr) -> LinExpr {
        let mut vars = self.vars.clone();
        for (s, c) in &rhs.vars {
            *vars.entry(s.clone()).or_insert(0.0) += c;
        }
        LinExpr {
            vars,
            constant: self.constant + rhs.constant,
        }
    }
}

impl Sub for &LinExpr {
    type Output = LinExpr;
    fn sub(self, rhs: &LinExpr) -> LinExpr {
        let mut vars = self.vars.clone();
        for (s, c) in &rhs.vars {
            *vars.entry(s.clone()).or_insert(0.0) -= c;
        }
        LinExpr {
            vars,
            constant: self.constant - rhs.constant,
        }
    }
}

impl Neg for &LinExpr {
    type Output = LinExpr;
    fn neg(self) -> LinExpr {
        self.scale(-1.0)
    }
}

impl Mul<f64> for &LinExpr {
    type Output = LinExpr;
    fn mul(self, rhs: f64) -> LinExpr {
        self.scale(rhs)
    }
}
