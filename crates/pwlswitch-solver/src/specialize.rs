use std::collections::HashSet;

use pwlswitch_linalg::solve_over;

use crate::degeneracy::disable_set_candidates;
use crate::prelude::*;
use crate::SolvedCase;

/// Builds the unknown set U and the free-symbol set for one disable-set
/// choice (spec.md §4.4 step 3 / §4.5): a state's `variable` is removed
/// from U (and added to the free symbols, alongside the externals)
/// unless that state is in `disabled`, in which case it stays an
/// unknown to be solved for algebraically.
fn unknowns_and_free(circuit: &Circuit, disabled: &HashSet<StateHandle>) -> (Vec<Symbol>, Vec<Symbol>) {
    let mut removed: HashSet<Symbol> = HashSet::new();
    let mut active_state_vars: Vec<Symbol> = Vec::new();
    for (idx, state) in circuit.state_vars().iter().enumerate() {
        if !disabled.contains(&StateHandle(idx)) {
            removed.insert(state.variable.clone());
            active_state_vars.push(state.variable.clone());
        }
    }

    let unknowns: Vec<Symbol> = circuit
        .int_syms()
        .iter()
        .filter(|s| !removed.contains(s))
        .cloned()
        .collect();

    let mut free_symbols: Vec<Symbol> = circuit.ext_syms().to_vec();
    free_symbols.extend(active_state_vars);
    (unknowns, free_symbols)
}

/// Appends one `derivative = 0` equation per disabled state (spec.md
/// §4.5: disabling pins the derivative into the system as a genuine
/// constraint, rebalancing the equation count against the unknown
/// re-added to U by [`unknowns_and_free`]).
fn equations_with_disable_constraints(
    circuit: &Circuit,
    mna: &Mna,
    disabled: &HashSet<StateHandle>,
) -> Vec<LinExpr> {
    let mut equations = mna.equations();
    let mut handles: Vec<&StateHandle> = disabled.iter().collect();
    handles.sort();
    for handle in handles {
        let derivative = circuit.state_vars()[handle.0].derivative.clone();
        equations.push(LinExpr::from_symbol(derivative));
    }
    equations
}

/// Builds the MNA system for one mode assignment: every static element
/// contributes unconditionally, then every switched element contributes
/// under its assigned mode (spec.md §4.4 step 1, §4.6).
fn build_mna(circuit: &Circuit, modes: &[Mode]) -> Mna {
    let mut mna = Mna::new();
    for element in circuit.static_elements() {
        element.contribute(&mut mna);
    }
    for (element, mode) in circuit.switched_elements().iter().zip(modes) {
        element.contribute(*mode, &mut mna);
    }
    mna
}

/// Specializes the circuit to one mode assignment and solves it,
/// retrying with successively larger inductor-state disable sets if the
/// natural (all-states-active) system is singular (spec.md §4.4/§4.5).
///
/// Returns `Ok(None)` if every attempt within `config.max_disable_attempts`
/// is singular — spec.md §7's `SingularCase`, recovered locally by
/// dropping the case rather than surfacing an error. Returns `Err` only
/// for the fatal conditions in spec.md §7: a malformed circuit whose
/// equation count never matches its unknown count (`DegreeMismatch`).
pub fn specialize_case(
    circuit: &Circuit,
    modes: &[Mode],
    config: &CompilerConfig,
) -> Result<Option<SolvedCase>> {
    let mna = build_mna(circuit, modes);
    let candidates = disable_set_candidates(circuit.inductor_states(), config.max_disable_attempts);

    for disable_set in &candidates {
        let disabled: HashSet<StateHandle> = disable_set.iter().copied().collect();
        let (unknowns, free_symbols) = unknowns_and_free(circuit, &disabled);
        let equations = equations_with_disable_constraints(circuit, &mna, &disabled);

        if equations.len() != unknowns.len() {
            return Err(Error::DegreeMismatch {
                equations: equations.len(),
                unknowns: unknowns.len(),
            });
        }

        match solve_over(&equations, &unknowns, &free_symbols) {
            Some(solution) => {
                let mode_names = circuit
                    .switched_elements()
                    .iter()
                    .map(|e| e.identifier())
                    .zip(modes.iter().copied())
                    .collect();
                return Ok(Some(SolvedCase {
                    modes: mode_names,
                    disabled: disable_set.clone(),
                    solution,
                }));
            }
            None => {
                log::debug!(
                    "specialize_case: singular with disable set {:?} (modes {:?})",
                    disable_set,
                    modes
                );
            }
        }
    }

    log::warn!(
        "specialize_case: no solution found for modes {:?} within {} attempts; dropping case",
        modes,
        config.max_disable_attempts
    );
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwlswitch_core::Circuit;

    fn resistor_divider() -> Circuit {
        let mut cir = Circuit::new();
        let v_in = cir.nodes("v_in").unwrap();
        let v_out = cir.nodes("v_out").unwrap();
        let u = cir.external("u").unwrap();
        let ground = Symbol::ground();
        cir.voltage_source(v_in.clone(), ground.clone(), Some(LinExpr::from_symbol(u)))
            .unwrap();
        cir.resistor(v_in, v_out.clone(), 1.0).unwrap();
        cir.resistor(v_out, ground, 1.0).unwrap();
        cir
    }

    #[test]
    fn resistor_divider_solves_with_no_switches() {
        let cir = resistor_divider();
        let config = CompilerConfig::default();
        let case = specialize_case(&cir, &[], &config).unwrap().unwrap();
        assert!(case.modes.is_empty());
        assert!(case.disabled.is_empty());

        let v_out = cir
            .int_syms()
            .iter()
            .find(|s| s.name() == "v_out")
            .unwrap();
        let u = cir.ext_syms()[0].clone();
        let solved = &case.solution[v_out];
        assert_eq!(solved.coeff(&u), 0.5);
        assert_eq!(solved.constant(), 0.0);
    }

    #[test]
    fn rc_low_pass_solves_state_derivative() {
        let mut cir = Circuit::new();
        let v_in = cir.nodes("v_in").unwrap();
        let v_c = cir.nodes("v_c").unwrap();
        let u = cir.external("u").unwrap();
        let ground = Symbol::ground();
        cir.voltage_source(v_in.clone(), ground.clone(), Some(LinExpr::from_symbol(u)))
            .unwrap();
        cir.resistor(v_in, v_c.clone(), 1.0).unwrap();
        cir.capacitor(v_c, ground, 1.0).unwrap();

        let config = CompilerConfig::default();
        let case = specialize_case(&cir, &[], &config).unwrap().unwrap();

        let state = &cir.state_vars()[0];
        let dvdt_solution = &case.solution[&state.derivative];
        // dv_c/dt = (u - v_c) / (R*C) = u - v_c  (R=C=1)
        assert_eq!(dvdt_solution.coeff(&u), 1.0);
        assert_eq!(dvdt_solution.coeff(&state.variable), -1.0);
    }
}
