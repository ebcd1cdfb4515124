use std::collections::HashMap;

use crate::linexpr::LinExpr;
use crate::symbol::Symbol;

/// Absolute pivot magnitude below which a column is treated as
/// numerically zero (i.e. the system is singular along that column).
const PIVOT_TOLERANCE: f64 = 1e-9;

/// Solves the linear system `equations[k] = 0` for every symbol in
/// `unknowns`, expressing each solution as a [`LinExpr`] over
/// `free_symbols` (everything else that may legally appear in the
/// answer — external inputs and un-disabled state variables, per
/// spec.md §4.4/§4.5).
///
/// Returns `None` if the coefficient matrix on `unknowns` is singular
/// (spec.md §4.4 step 4: "this configuration is degenerate"). Any symbol
/// appearing in an equation that is neither in `unknowns` nor in
/// `free_symbols` is folded into the constant term's bookkeeping only
/// insofar as it is carried along symbolically — callers are expected to
/// have accounted for every symbol that can appear (mna equations only
/// ever reference internal symbols and external symbols).
///
/// Implementation: build the augmented matrix `[A | B]` where `A` is
/// `equations.len() x unknowns.len()` (coefficients on the unknowns) and
/// `B` is `equations.len() x (free_symbols.len() + 1)` (coefficients on
/// the free symbols, plus the constant column), then perform Gaussian
/// elimination with partial pivoting on `A` while carrying `B` along —
/// equivalent to solving `A x = b` for several right-hand sides `b`
/// simultaneously, which is exactly what "coefficient of each free
/// symbol" means.
pub fn solve_over(
    equations: &[LinExpr],
    unknowns: &[Symbol],
    free_symbols: &[Symbol],
) -> Option<HashMap<Symbol, LinExpr>> {
    let n = unknowns.len();
    debug_assert_eq!(
        equations.len(),
        n,
        "solve_over requires a square system (caller must check DegreeMismatch first)"
    );

    // Dense row-major coefficient matrix over the unknowns.
    let mut a: Vec<Vec<f64>> = equations
        .iter()
        .map(|eq| unknowns.iter().map(|u| eq.coeff(u)).collect())
        .collect();

    // Augmented columns: one per free symbol, plus one for the constant.
    // equations[row] = sum_j a[row][j]*unknowns[j] + remainder, and we
    // want A x = -remainder, so the augmented column is the *negated*
    // coefficient of each free symbol (and negated constant).
    let mut b: Vec<Vec<f64>> = equations
        .iter()
        .map(|eq| {
            let mut row: Vec<f64> = free_symbols.iter().map(|s| -eq.coeff(s)).collect();
            row.push(-eq.constant());
            row
        })
        .collect();
    let rhs_cols = free_symbols.len() + 1;

    // Forward elimination with partial pivoting.
    for col in 0..n {
        let pivot_row = (col..n).max_by(|&r1, &r2| {
            a[r1][col].abs().partial_cmp(&a[r2][col].abs()).unwrap()
        })?;
        if a[pivot_row][col].abs() < PIVOT_TOLERANCE {
            log::debug!("solve_over: singular at column {col}, pivot magnitude below tolerance");
            return None;
        }
        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        let pivot = a[col][col];
        for j in col..n {
            a[col][j] /= pivot;
        }
        for j in 0..rhs_cols {
            b[col][j] /= pivot;
        }

        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = a[row][col];
            if factor == 0.0 {
                continue;
            }
            for j in col..n {
                a[row][j] -= factor * a[col][j];
            }
            for j in 0..rhs_cols {
                b[row][j] -= factor * b[col][j];
            }
        }
    }

    // Gauss-Jordan elimination above leaves `a` as the identity, so `b`
    // is already the solution matrix: row i gives unknowns[i]'s
    // coefficients over free_symbols, plus its constant in the last
    // column.
    let mut solution = HashMap::with_capacity(n);
    for (i, unknown) in unknowns.iter().enumerate() {
        let mut expr = LinExpr::from_const(b[i][rhs_cols - 1]);
        for (k, sym) in free_symbols.iter().enumerate() {
            let c = b[i][k];
            if c != 0.0 {
                expr = &expr + &LinExpr::from_term(c, sym.clone());
            }
        }
        solution.insert(unknown.clone(), expr);
    }
    Some(solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(ns: &mut crate::symbol::SymbolNamespace, name: &str) -> Symbol {
        ns.define(name).unwrap()
    }

    #[test]
    fn solves_simple_resistor_divider() {
        // u - 2*i = 0 (KVL-ish stand-in), i - x = 0  =>  x = u/2
        let mut ns = crate::symbol::SymbolNamespace::new();
        let u = sym(&mut ns, "u");
        let i = sym(&mut ns, "i");
        let x = sym(&mut ns, "x");

        let eq1 = &LinExpr::from_term(1.0, u.clone()) - &LinExpr::from_term(2.0, i.clone());
        let eq2 = &LinExpr::from_term(1.0, i.clone()) - &LinExpr::from_term(1.0, x.clone());

        let soln = solve_over(&[eq1, eq2], &[i.clone(), x.clone()], &[u.clone()]).unwrap();
        assert_eq!(soln[&x].coeff(&u), 0.5);
        assert_eq!(soln[&x].constant(), 0.0);
        assert_eq!(soln[&i].coeff(&u), 0.5);
    }

    #[test]
    fn singular_system_returns_none() {
        let mut ns = crate::symbol::SymbolNamespace::new();
        let a = sym(&mut ns, "a");
        let b = sym(&mut ns, "b");

        // Two equations that are multiples of each other: singular.
        let eq1 = &LinExpr::from_term(1.0, a.clone()) + &LinExpr::from_term(1.0, b.clone());
        let eq2 = &LinExpr::from_term(2.0, a.clone()) + &LinExpr::from_term(2.0, b.clone());

        assert!(solve_over(&[eq1, eq2], &[a, b], &[]).is_none());
    }

    #[test]
    fn carries_multiple_free_symbols() {
        let mut ns = crate::symbol::SymbolNamespace::new();
        let p = sym(&mut ns, "p");
        let q = sym(&mut ns, "q");
        let x = sym(&mut ns, "x");

        // x - (p + q) = 0 => x = p + q
        let eq = &LinExpr::from_term(1.0, x.clone())
            - &(&LinExpr::from_term(1.0, p.clone()) + &LinExpr::from_term(1.0, q.clone()));

        let soln = solve_over(&[eq], &[x.clone()], &[p.clone(), q.clone()]).unwrap();
        assert_eq!(soln[&x].coeff(&p), 1.0);
        assert_eq!(soln[&x].coeff(&q), 1.0);
    }
}
