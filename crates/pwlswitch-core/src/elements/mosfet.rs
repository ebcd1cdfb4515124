use crate::mode::Mode;
use crate::prelude::*;

/// A switched MOSFET: "on" forces `port.v = 0`, "off" forces `port.i = 0`
/// (spec.md §3/§4.3). The compiler never decides which mode applies —
/// that is the downstream runtime's job (spec.md §4.8) — it only emits a
/// consistent update law per mode.
#[derive(Debug, Clone)]
pub struct Mosfet {
    pub name: String,
    pub port: Port,
}

impl Mosfet {
    pub fn identifier(&self) -> String {
        format!("M{}", self.name)
    }

    pub fn contribute(&self, mode: Mode, mna: &mut Mna) {
        self.port.contribute(mna);

        match mode {
            Mode::On => {
                let v = LinExpr::from_symbol(self.port.v.clone());
                mna.set_equal(&v, &LinExpr::zero());
            }
            Mode::Off => {
                let i = LinExpr::from_symbol(self.port.i.clone());
                mna.set_equal(&i, &LinExpr::zero());
            }
        }
    }
}
