use thiserror::Error;

/// Solve-time failures (spec.md §7). `SingularCase` is deliberately not a
/// variant here — it is recovered locally by the disable-set retry loop
/// in [`crate::specialize::specialize_case`] and never escapes `solve`.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Circuit(#[from] pwlswitch_core::Error),

    #[error("equation count {equations} does not match unknown count {unknowns}")]
    DegreeMismatch { equations: usize, unknowns: usize },

    #[error("source expression for {0} is not linear in external symbols")]
    NonLinearInput(String),
}

pub type Result<T> = core::result::Result<T, Error>;
