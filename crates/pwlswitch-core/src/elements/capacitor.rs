use crate::prelude::*;

/// A capacitor: `port.i = C * dv/dt`. `state` identifies the circuit's
/// state-variable slot for `(variable = port.v, derivative = dvdt)`
/// (spec.md §3/§4.3).
#[derive(Debug, Clone)]
pub struct Capacitor {
    pub name: String,
    pub port: Port,
    pub value: f64,
    pub dvdt: Symbol,
    pub state: StateHandle,
}

impl Capacitor {
    pub fn identifier(&self) -> String {
        format!("C{}", self.name)
    }

    pub fn contribute(&self, mna: &mut Mna) {
        self.port.contribute(mna);

        let i = LinExpr::from_symbol(self.port.i.clone());
        let dvdt = LinExpr::from_symbol(self.dvdt.clone());
        mna.set_equal(&i, &(&dvdt * self.value));
    }
}
