pub mod error;
pub mod linform;
pub mod table;

use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::Write as _;
use std::path::Path;

use pwlswitch_core::circuit::Circuit;
use pwlswitch_core::elements::SwitchedElement;
use pwlswitch_linalg::{LinExpr, Symbol};
use pwlswitch_solver::SolvedCase;

pub use error::Error;
pub use linform::LinForm;
pub use table::{Case, CaseTable, DiodeMeta, DiodePortForm};

type Result<T> = core::result::Result<T, Error>;

/// The set of symbols a solved case already surfaces by name elsewhere
/// in the record (every state's `variable`, every diode's `v`/`i`):
/// spec.md §4.7 calls for an identity expression rather than a fresh
/// lookup when an output coincides with one of these.
fn already_resolved_symbols(circuit: &Circuit) -> HashSet<Symbol> {
    let mut resolved: HashSet<Symbol> = circuit
        .state_vars()
        .iter()
        .map(|s| s.variable.clone())
        .collect();
    for element in circuit.switched_elements() {
        if let SwitchedElement::Diode(d) = element {
            resolved.insert(d.port.v.clone());
            resolved.insert(d.port.i.clone());
        }
    }
    resolved
}

/// Builds the `states[name]` update expression for one state (spec.md
/// §4.7): Euler discretization for an active state, the raw algebraic
/// solution for a disabled one.
fn state_update(
    case: &SolvedCase,
    state: &pwlswitch_core::state::StateVariable,
    handle: pwlswitch_core::state::StateHandle,
    dt: f64,
) -> LinForm {
    if case.disabled.contains(&handle) {
        LinForm::from_expr(&case.solution[&state.variable])
    } else {
        let derivative = &case.solution[&state.derivative];
        let update = &LinExpr::from_symbol(state.variable.clone()) + &(derivative * dt);
        LinForm::from_expr(&update)
    }
}

/// Builds the diode `{v, i}` linform pair for one case.
fn diode_ports(case: &SolvedCase, circuit: &Circuit) -> BTreeMap<String, DiodePortForm> {
    circuit
        .switched_elements()
        .iter()
        .filter_map(|element| match element {
            SwitchedElement::Diode(d) => Some((
                d.identifier(),
                DiodePortForm {
                    v: LinForm::from_expr(&case.solution[&d.port.v]),
                    i: LinForm::from_expr(&case.solution[&d.port.i]),
                },
            )),
            SwitchedElement::Mosfet(_) => None,
        })
        .collect()
}

/// Resolves one output symbol to its linform, emitting an identity
/// expression when it coincides with a state variable or diode port
/// (spec.md §4.7/Open Questions).
fn output_form(case: &SolvedCase, sym: &Symbol, resolved: &HashSet<Symbol>) -> LinForm {
    if resolved.contains(sym) {
        LinForm::identity(sym.name())
    } else {
        LinForm::from_expr(&case.solution[sym])
    }
}

fn serialize_case(case: &SolvedCase, circuit: &Circuit, dt: f64, resolved: &HashSet<Symbol>) -> Case {
    let dyn_modes = case.modes.iter().cloned().collect();

    let states = circuit
        .state_vars()
        .iter()
        .enumerate()
        .map(|(idx, state)| {
            let handle = pwlswitch_core::state::StateHandle(idx);
            (state.variable.name().to_string(), state_update(case, state, handle, dt))
        })
        .collect();

    let diodes = diode_ports(case, circuit);

    let outputs = circuit
        .outputs()
        .iter()
        .map(|sym| (sym.name().to_string(), output_form(case, sym, resolved)))
        .collect();

    Case { dyn_modes, states, diodes, outputs }
}

/// Converts solved cases into the JSON-serializable case table (spec.md
/// §4.7/§6): the pure "serializer" component, separate from
/// `pwlswitch_solver::solve`'s case enumeration and solving.
pub fn build_case_table(circuit: &Circuit, cases: &[SolvedCase], dt: f64) -> CaseTable {
    let resolved = already_resolved_symbols(circuit);

    let mosfets = circuit
        .switched_elements()
        .iter()
        .filter_map(|e| match e {
            SwitchedElement::Mosfet(m) => Some(m.identifier()),
            SwitchedElement::Diode(_) => None,
        })
        .collect();

    let diode_meta = circuit
        .switched_elements()
        .iter()
        .filter_map(|e| match e {
            SwitchedElement::Diode(d) => Some((
                d.identifier(),
                DiodeMeta {
                    v: d.port.v.name().to_string(),
                    i: d.port.i.name().to_string(),
                    vf: d.vf,
                },
            )),
            SwitchedElement::Mosfet(_) => None,
        })
        .collect();

    CaseTable {
        dt,
        ext_syms: circuit.ext_syms().iter().map(|s| s.name().to_string()).collect(),
        mosfets,
        states: circuit.state_vars().iter().map(|s| s.variable.name().to_string()).collect(),
        outputs: circuit.outputs().iter().map(|s| s.name().to_string()).collect(),
        diodes: diode_meta,
        cases: cases.iter().map(|case| serialize_case(case, circuit, dt, &resolved)).collect(),
    }
}

fn ensure_json_extension(filename: &str) -> String {
    let path = Path::new(filename);
    if path.extension().and_then(|e| e.to_str()) == Some("json") {
        filename.to_string()
    } else {
        format!("{filename}.json")
    }
}

/// Writes a case table to a pretty-printed JSON file, mirroring the
/// teacher's `write_*_to_parquet` helpers: normalize the extension,
/// write, log on success.
pub fn write_case_table_to_json(table: &CaseTable, filename: &str) -> Result<()> {
    let filename = ensure_json_extension(filename);
    let json = serde_json::to_string_pretty(table)?;
    let mut file = File::create(&filename).map_err(|source| Error::Write {
        path: filename.clone(),
        source,
    })?;
    file.write_all(json.as_bytes()).map_err(|source| Error::Write {
        path: filename.clone(),
        source,
    })?;
    log::info!("Saved case table to {filename}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwlswitch_solver::CompilerConfig;

    fn resistor_divider() -> Circuit {
        let mut cir = Circuit::new();
        let v_in = cir.nodes("v_in").unwrap();
        let v_out = cir.nodes("v_out").unwrap();
        let u = cir.external("u").unwrap();
        let ground = Symbol::ground();
        cir.voltage_source(v_in.clone(), ground.clone(), Some(LinExpr::from_symbol(u)))
            .unwrap();
        cir.resistor(v_in, v_out.clone(), 1.0).unwrap();
        cir.resistor(v_out.clone(), ground, 1.0).unwrap();
        cir.output(v_out);
        cir
    }

    #[test]
    fn resistor_divider_output_matches_scenario_a() {
        let cir = resistor_divider();
        let config = CompilerConfig::default();
        let cases = pwlswitch_solver::solve(&cir, &config).unwrap();
        assert_eq!(cases.len(), 1);

        let table = build_case_table(&cir, &cases, 0.1);
        assert_eq!(table.ext_syms, vec!["u".to_string()]);
        assert!(table.mosfets.is_empty());
        assert!(table.diodes.is_empty());

        let out = &table.cases[0].outputs["v_out"];
        assert_eq!(out.vars["u"], 0.5);
        assert_eq!(out.constant, 0.0);
    }

    #[test]
    fn rc_low_pass_state_update_matches_scenario_b() {
        let mut cir = Circuit::new();
        let v_in = cir.nodes("v_in").unwrap();
        let v_c = cir.nodes("v_c").unwrap();
        let u = cir.external("u").unwrap();
        let ground = Symbol::ground();
        cir.voltage_source(v_in.clone(), ground.clone(), Some(LinExpr::from_symbol(u)))
            .unwrap();
        cir.resistor(v_in, v_c.clone(), 1.0).unwrap();
        cir.capacitor(v_c.clone(), ground, 1.0).unwrap();

        let config = CompilerConfig::default();
        let cases = pwlswitch_solver::solve(&cir, &config).unwrap();
        assert_eq!(cases.len(), 1);

        let table = build_case_table(&cir, &cases, 0.1);
        // the capacitor's own port voltage ("v_C0") is the state variable,
        // distinct from the node it's tied to by the node-difference
        // equation ("v_c", the name passed to `cir.nodes`).
        assert_eq!(table.states, vec!["v_C0".to_string()]);
        let update = &table.cases[0].states["v_C0"];
        assert_eq!(update.vars["v_C0"], 0.9);
        assert_eq!(update.vars["u"], 0.1);
        assert_eq!(update.constant, 0.0);
    }

    #[test]
    fn round_trips_through_json() {
        let cir = resistor_divider();
        let config = CompilerConfig::default();
        let cases = pwlswitch_solver::solve(&cir, &config).unwrap();
        let table = build_case_table(&cir, &cases, 0.1);

        let json = serde_json::to_string(&table).unwrap();
        let parsed: CaseTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, parsed);
    }
}
