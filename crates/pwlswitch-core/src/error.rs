use thiserror::Error;

/// Errors raised while building or inspecting a [`crate::circuit::Circuit`]
/// (the builder-time/structural failures from spec.md §7's taxonomy). The
/// solve-time failures (`DegreeMismatch`, `NonLinearInput`, the locally
/// recovered `SingularCase`) live in `pwlswitch_solver::Error` since they
/// only make sense once a mode combination has been specialized.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// A name passed to `nodes`/`internal`/`external` (or an
    /// element-generated internal name) collided with one already
    /// defined.
    #[error(transparent)]
    Symbol(#[from] pwlswitch_linalg::Error),

    /// An element referenced a node symbol that was never registered via
    /// `nodes`/`internal`/`external` and is not the ground symbol.
    #[error("unknown node: {0}")]
    UnknownNode(String),
}

pub type Result<T> = core::result::Result<T, Error>;
