use pwlswitch_linalg::{LinExpr, Symbol};

use crate::mna::Mna;

/// The pair of terminals of a two-terminal element, plus the internal
/// symbols for the element's own port voltage and port current.
///
/// `v = V(p) - V(n)`; `i` is the conventional current flowing `p -> n`
/// through the element (spec.md §3).
#[derive(Clone, Debug)]
pub struct Port {
    pub p: Symbol,
    pub n: Symbol,
    pub v: Symbol,
    pub i: Symbol,
}

impl Port {
    pub fn new(p: Symbol, n: Symbol, v: Symbol, i: Symbol) -> Self {
        Port { p, n, v, i }
    }

    /// The node-voltage term for a terminal: zero for ground, the
    /// symbol itself otherwise. Ground never appears as a term in any
    /// emitted equation (spec.md Open Questions: the ground KCL entry is
    /// dropped explicitly; symmetrically, ground contributes nothing to
    /// any node-difference either).
    fn node_term(sym: &Symbol) -> LinExpr {
        if sym.is_ground() {
            LinExpr::zero()
        } else {
            LinExpr::from_symbol(sym.clone())
        }
    }

    /// Registers the universal per-port contribution shared by every
    /// element (spec.md §4.3): the branch current `i` flowing `p -> n`
    /// enters KCL, and `v = V(p) - V(n)` ties the port's own voltage
    /// unknown to the node voltages it bridges. Every element calls this
    /// first, then adds its own constitutive equation(s).
    pub fn contribute(&self, mna: &mut Mna) {
        let i = LinExpr::from_symbol(self.i.clone());
        mna.add_current(&self.p, &self.n, &i);

        let v = LinExpr::from_symbol(self.v.clone());
        let node_diff = &Port::node_term(&self.p) - &Port::node_term(&self.n);
        mna.set_equal(&v, &node_diff);
    }
}
