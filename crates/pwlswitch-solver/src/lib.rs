pub mod config;
pub mod degeneracy;
pub mod error;
pub mod prelude;
pub mod specialize;

use crate::prelude::*;

pub use config::CompilerConfig;
pub use error::Error;
pub use specialize::specialize_case;

/// The output of successfully specializing and solving one mode
/// combination (spec.md §4.4): the mode assignment that produced it,
/// which inductor states were disabled to reach a non-singular system
/// (spec.md §4.5), and the solved value of every unknown, each
/// expressed as a [`LinExpr`] over external symbols and active state
/// variables.
#[derive(Clone, Debug)]
pub struct SolvedCase {
    /// One entry per switched element, in `Circuit::switched_elements`
    /// order, naming the element and the mode it was solved under.
    pub modes: Vec<(String, Mode)>,
    /// The inductor states that were demoted to algebraic unknowns to
    /// rescue this case from a singular baseline system. Empty for the
    /// common (non-degenerate) case.
    pub disabled: Vec<StateHandle>,
    /// The solved expression for every unknown symbol in this case's
    /// specialization (the union of every element's internal `v`/`i`,
    /// every node voltage, and every state derivative or disabled
    /// state's own variable).
    pub solution: HashMap<Symbol, LinExpr>,
}

/// Checks spec.md §7's `NonLinearInput`: every source `expr` must be a
/// linear combination of symbols already registered as external. This
/// runs once, before case enumeration, since it depends only on the
/// circuit's static topology, not on any mode assignment.
fn validate_linearity(circuit: &Circuit) -> Result<()> {
    let ext: std::collections::HashSet<&Symbol> = circuit.ext_syms().iter().collect();
    for element in circuit.static_elements() {
        if let Some(expr) = element.source_expr() {
            for sym in expr.symbols() {
                if !ext.contains(sym) {
                    return Err(Error::NonLinearInput(element.identifier()));
                }
            }
        }
    }
    Ok(())
}

/// Enumerates every mode combination over the circuit's switched
/// elements (spec.md §4.6), specializes and solves each, and collects
/// the cases that admit a solution in enumeration order (spec.md §4.4
/// step 4: infeasible combinations are silently dropped, not errored).
///
/// Pure function of `circuit` and `config`: calling this twice on the
/// same unmutated circuit yields identical output (spec.md §8 property
/// 4, "Idempotence"). Each mode combination's specialization is
/// independent of every other (spec.md §5) — a caller wanting
/// parallelism could fan this loop out without touching
/// [`specialize_case`]'s signature.
pub fn solve(circuit: &Circuit, config: &CompilerConfig) -> Result<Vec<SolvedCase>> {
    validate_linearity(circuit)?;

    let k = circuit.switched_elements().len();
    assert!(
        k < usize::BITS as usize,
        "more switched elements than fit in a mode-assignment bitmask"
    );

    let mut cases = Vec::with_capacity(1 << k);
    for bits in 0..(1u64 << k) {
        let modes: Vec<Mode> = (0..k)
            .map(|j| if (bits >> j) & 1 == 1 { Mode::On } else { Mode::Off })
            .collect();
        if let Some(case) = specialize_case(circuit, &modes, config)? {
            cases.push(case);
        }
    }
    Ok(cases)
}

/// Convenience wrapper around [`solve`] using [`CompilerConfig::default`]
/// (SPEC_FULL.md §4.10), mirroring the teacher's `Solver::new(circuit,
/// config)` shape for callers that don't need to tune the disable-set
/// attempt cap.
pub fn solve_default(circuit: &Circuit) -> Result<Vec<SolvedCase>> {
    solve(circuit, &CompilerConfig::default())
}
