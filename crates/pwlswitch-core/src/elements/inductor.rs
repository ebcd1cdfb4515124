use crate::prelude::*;

/// An inductor: `port.v = L * di/dt`. `state` identifies the circuit's
/// state-variable slot for `(variable = port.i, derivative = didt)`
/// (spec.md §3/§4.3).
#[derive(Debug, Clone)]
pub struct Inductor {
    pub name: String,
    pub port: Port,
    pub value: f64,
    pub didt: Symbol,
    pub state: StateHandle,
}

impl Inductor {
    pub fn identifier(&self) -> String {
        format!("L{}", self.name)
    }

    pub fn contribute(&self, mna: &mut Mna) {
        self.port.contribute(mna);

        let v = LinExpr::from_symbol(self.port.v.clone());
        let didt = LinExpr::from_symbol(self.didt.clone());
        mna.set_equal(&v, &(&didt * self.value));
    }
}
