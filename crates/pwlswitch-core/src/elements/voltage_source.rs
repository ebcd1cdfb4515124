use crate::prelude::*;

/// An ideal voltage source: `port.v = expr`, a linear combination of
/// external symbols (spec.md §3/§4.3). When the builder is called with
/// no `expr`, it mints a fresh external symbol and uses that as `expr`
/// (spec.md §4.3: "when absent, the source value itself is external") —
/// so by the time a `VoltageSource` reaches `contribute`, `expr` is
/// always populated. `None` remains constructible directly for callers
/// that want to assemble the constraint themselves.
#[derive(Debug, Clone)]
pub struct VoltageSource {
    pub name: String,
    pub port: Port,
    pub expr: Option<LinExpr>,
}

impl VoltageSource {
    pub fn identifier(&self) -> String {
        format!("V{}", self.name)
    }

    pub fn contribute(&self, mna: &mut Mna) {
        self.port.contribute(mna);

        if let Some(expr) = &self.expr {
            let v = LinExpr::from_symbol(self.port.v.clone());
            mna.set_equal(&v, expr);
        }
    }
}
