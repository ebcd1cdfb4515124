use crate::mode::Mode;
use crate::prelude::*;

/// A switched diode: "on" forces `port.v = vf`, "off" forces `port.i = 0`
/// (spec.md §3/§4.3). Polarity/current-direction checks on the "on"
/// branch are explicitly out of scope here (spec.md Open Questions) —
/// the compiler emits both branches and leaves branch selection to the
/// downstream runtime.
#[derive(Debug, Clone)]
pub struct Diode {
    pub name: String,
    pub port: Port,
    pub vf: f64,
}

impl Diode {
    pub fn identifier(&self) -> String {
        format!("D{}", self.name)
    }

    pub fn contribute(&self, mode: Mode, mna: &mut Mna) {
        self.port.contribute(mna);

        match mode {
            Mode::On => {
                let v = LinExpr::from_symbol(self.port.v.clone());
                mna.set_equal(&v, &LinExpr::from_const(self.vf));
            }
            Mode::Off => {
                let i = LinExpr::from_symbol(self.port.i.clone());
                mna.set_equal(&i, &LinExpr::zero());
            }
        }
    }
}
