use serde::{Deserialize, Serialize};

/// The discrete on/off state of a switched element (MOSFET or diode).
/// `on` / `off` serialize exactly as spec.md §6 requires for
/// `dyn_modes`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    On,
    Off,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::On => write!(f, "on"),
            Mode::Off => write!(f, "off"),
        }
    }
}
