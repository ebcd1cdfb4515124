use thiserror::Error;

/// Errors raised by the symbol namespace and the symbolic linear-algebra
/// layer. `NameCollision` is the lowest-level piece of spec.md §7's error
/// taxonomy — everything in `pwlswitch_core::Error::Symbol` wraps it.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("symbol name already defined: {0}")]
    NameCollision(String),
}

pub type Result<T> = core::result::Result<T, Error>;
