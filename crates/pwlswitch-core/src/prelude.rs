pub use crate::error::Error;
pub type Result<T> = core::result::Result<T, Error>;

pub use crate::mna::Mna;
pub use crate::port::Port;
pub use crate::state::{StateHandle, StateVariable};
pub use pwlswitch_linalg::{LinExpr, Symbol, SymbolNamespace};
pub use std::collections::HashMap;
