use pwlswitch_linalg::{LinExpr, Symbol};

/// Accumulates Kirchhoff current-law sums per node plus auxiliary
/// constitutive/source equations, per spec.md §4.2.
///
/// A fresh `Mna` is built once per mode-combination specialization
/// (spec.md §4.4 step 1): every element contributes its `add_current` and
/// `set_equal` calls, and [`Mna::equations`] yields the final list of
/// symbolic equations (each implicitly `= 0`).
#[derive(Debug, Default)]
pub struct Mna {
    kcl: indexmap::IndexMap<Symbol, LinExpr>,
    aux: Vec<LinExpr>,
}

impl Mna {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the contribution of a branch current `expr` flowing
    /// `p -> n` through an element: `kcl[p] -= expr`, `kcl[n] += expr`.
    pub fn add_current(&mut self, p: &Symbol, n: &Symbol, expr: &LinExpr) {
        let entry = self.kcl.entry(p.clone()).or_insert_with(LinExpr::zero);
        *entry = &*entry - expr;
        let entry = self.kcl.entry(n.clone()).or_insert_with(LinExpr::zero);
        *entry = &*entry + expr;
    }

    /// Appends the equation `lhs - rhs = 0` to the auxiliary equation list.
    pub fn set_equal(&mut self, lhs: &LinExpr, rhs: &LinExpr) {
        self.aux.push(lhs - rhs);
    }

    /// Returns the full equation list: every node's KCL sum except ground
    /// (ground's entry, if any, is structurally redundant and is dropped
    /// here rather than relying on callers to remember to skip it — see
    /// spec.md Open Questions), followed by the auxiliary equations in
    /// the order they were added.
    pub fn equations(&self) -> Vec<LinExpr> {
        let mut out = Vec::with_capacity(self.kcl.len() + self.aux.len());
        for (node, expr) in &self.kcl {
            if node.is_ground() {
                continue;
            }
            out.push(expr.clone());
        }
        out.extend(self.aux.iter().cloned());
        out
    }

    /// Node count participating in KCL (for diagnostics), excluding ground.
    pub fn node_count(&self) -> usize {
        self.kcl.keys().filter(|s| !s.is_ground()).count()
    }

    pub fn aux_count(&self) -> usize {
        self.aux.len()
    }

    /// Exposes the per-node KCL map for diagnostics (Kirchhoff check, §8
    /// property 6). Keyed by every node that received a contribution,
    /// ground included.
    pub fn kcl_map(&self) -> &indexmap::IndexMap<Symbol, LinExpr> {
        &self.kcl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_current_splits_sign_between_terminals() {
        let mut mna = Mna::new();
        let p = Symbol::ground();
        let n_ns = {
            let mut ns = pwlswitch_linalg::SymbolNamespace::new();
            ns.define("v_out").unwrap()
        };
        let i = LinExpr::from_const(2.0);
        mna.add_current(&p, &n_ns, &i);
        let eqs = mna.equations();
        // ground is dropped, only n's KCL sum remains plus no aux.
        assert_eq!(eqs.len(), 1);
        assert_eq!(eqs[0].constant(), 2.0);
    }

    #[test]
    fn set_equal_appends_difference() {
        let mut mna = Mna::new();
        let lhs = LinExpr::from_const(3.0);
        let rhs = LinExpr::from_const(1.0);
        mna.set_equal(&lhs, &rhs);
        let eqs = mna.equations();
        assert_eq!(eqs.len(), 1);
        assert_eq!(eqs[0].constant(), 2.0);
    }

    #[test]
    fn ground_kcl_entry_is_dropped_from_equations() {
        let mut mna = Mna::new();
        let g = Symbol::ground();
        mna.add_current(&g, &g, &LinExpr::from_const(5.0));
        assert_eq!(mna.equations().len(), 0);
    }
}
