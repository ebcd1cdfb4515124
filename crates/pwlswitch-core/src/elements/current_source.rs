use crate::prelude::*;

/// An ideal current source: `port.i = expr`, a linear combination of
/// external symbols (spec.md §3/§4.3, symmetric to
/// [`super::voltage_source::VoltageSource`]). The builder mints a fresh
/// external symbol for `expr` when none is supplied.
#[derive(Debug, Clone)]
pub struct CurrentSource {
    pub name: String,
    pub port: Port,
    pub expr: Option<LinExpr>,
}

impl CurrentSource {
    pub fn identifier(&self) -> String {
        format!("I{}", self.name)
    }

    pub fn contribute(&self, mna: &mut Mna) {
        self.port.contribute(mna);

        if let Some(expr) = &self.expr {
            let i = LinExpr::from_symbol(self.port.i.clone());
            mna.set_equal(&i, expr);
        }
    }
}
