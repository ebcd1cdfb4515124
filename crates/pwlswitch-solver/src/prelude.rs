pub use crate::config::CompilerConfig;
pub use crate::error::Error;
pub type Result<T> = core::result::Result<T, Error>;

pub use pwlswitch_core::circuit::Circuit;
pub use pwlswitch_core::mna::Mna;
pub use pwlswitch_core::mode::Mode;
pub use pwlswitch_core::state::StateHandle;
pub use pwlswitch_linalg::{LinExpr, Symbol};
pub use std::collections::HashMap;
