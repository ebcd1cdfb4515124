use crate::prelude::*;

/// An ohmic resistor: `port.v = R * port.i` (spec.md §4.3).
#[derive(Debug, Clone)]
pub struct Resistor {
    pub name: String,
    pub port: Port,
    pub value: f64,
}

impl Resistor {
    pub fn identifier(&self) -> String {
        format!("R{}", self.name)
    }

    pub fn contribute(&self, mna: &mut Mna) {
        self.port.contribute(mna);

        let i = LinExpr::from_symbol(self.port.i.clone());
        let v = LinExpr::from_symbol(self.port.v.clone());
        mna.set_equal(&v, &(&i * self.value));
    }
}
