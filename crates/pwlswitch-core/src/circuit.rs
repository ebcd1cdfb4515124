use std::collections::{HashMap, HashSet};

use crate::elements::capacitor::Capacitor;
use crate::elements::current_source::CurrentSource;
use crate::elements::diode::Diode;
use crate::elements::inductor::Inductor;
use crate::elements::mosfet::Mosfet;
use crate::elements::resistor::Resistor;
use crate::elements::transformer::Transformer;
use crate::elements::voltage_source::VoltageSource;
use crate::elements::{Element, SwitchedElement};
use crate::prelude::*;

/// Per-kind element naming: `V0`, `V1`, `R0`, … (spec.md §9 "Global
/// state: ... a per-element counter"). Kept separate from
/// [`SymbolNamespace`] so that element names and variable names live in
/// independent sequences, mirroring the reference's `ComponentNamer`.
#[derive(Debug, Default)]
struct ComponentNamer {
    counters: HashMap<&'static str, u64>,
}

impl ComponentNamer {
    fn make(&mut self, prefix: &'static str) -> String {
        let counter = self.counters.entry(prefix).or_insert(0);
        let name = format!("{counter}");
        *counter += 1;
        name
    }
}

/// The ordered collection of elements, symbol sets, and state variables
/// that make up one circuit description (spec.md §3 "Circuit"). Built up
/// monotonically through the methods below, then handed to
/// `pwlswitch_solver::solve` for specialization; nothing here mutates
/// once solving begins.
#[derive(Debug, Default)]
pub struct Circuit {
    namespace: SymbolNamespace,
    namer: ComponentNamer,
    known_nodes: HashSet<Symbol>,

    ext_syms: Vec<Symbol>,
    int_syms: Vec<Symbol>,
    state_vars: Vec<StateVariable>,
    inductor_states: Vec<StateHandle>,

    static_elements: Vec<Element>,
    switched_elements: Vec<SwitchedElement>,

    outputs: Vec<Symbol>,
}

impl Circuit {
    pub fn new() -> Self {
        Circuit::default()
    }

    /// Registers a fresh node-voltage symbol, bound to `name`. Usable
    /// afterwards as a `p`/`n` terminal on any element. A node's voltage
    /// is itself an unknown to be solved for (spec.md §3 Port: `v =
    /// V(p) - V(n)`), so it joins `int_syms` exactly like [`Self::internal`]
    /// — `nodes` exists as a separate entry point purely to document
    /// intent at call sites, per spec.md §6.
    pub fn nodes(&mut self, name: &str) -> Result<Symbol> {
        let sym = self.namespace.define(name)?;
        self.known_nodes.insert(sym.clone());
        self.int_syms.push(sym.clone());
        Ok(sym)
    }

    /// Registers a fresh internal unknown, bound to `name`.
    pub fn internal(&mut self, name: &str) -> Result<Symbol> {
        let sym = self.namespace.define(name)?;
        self.int_syms.push(sym.clone());
        Ok(sym)
    }

    /// Registers a fresh external (runtime-supplied) symbol. Usable
    /// afterwards as a `p`/`n` terminal on any element, same as a node.
    pub fn external(&mut self, name: &str) -> Result<Symbol> {
        let sym = self.namespace.define(name)?;
        self.ext_syms.push(sym.clone());
        self.known_nodes.insert(sym.clone());
        Ok(sym)
    }

    /// Alias for [`Circuit::external`] (spec.md §6 `input_(name)`).
    pub fn input_(&mut self, name: &str) -> Result<Symbol> {
        self.external(name)
    }

    fn check_node(&self, sym: &Symbol) -> Result<()> {
        if sym.is_ground() || self.known_nodes.contains(sym) {
            Ok(())
        } else {
            Err(Error::UnknownNode(sym.name().to_string()))
        }
    }

    fn port(&mut self, prefix: &str, p: Symbol, n: Symbol) -> Result<Port> {
        self.check_node(&p)?;
        self.check_node(&n)?;
        let v = self.internal(&format!("v_{prefix}"))?;
        let i = self.internal(&format!("i_{prefix}"))?;
        Ok(Port::new(p, n, v, i))
    }

    pub fn ext_syms(&self) -> &[Symbol] {
        &self.ext_syms
    }

    pub fn int_syms(&self) -> &[Symbol] {
        &self.int_syms
    }

    pub fn state_vars(&self) -> &[StateVariable] {
        &self.state_vars
    }

    pub fn inductor_states(&self) -> &[StateHandle] {
        &self.inductor_states
    }

    pub fn static_elements(&self) -> &[Element] {
        &self.static_elements
    }

    pub fn switched_elements(&self) -> &[SwitchedElement] {
        &self.switched_elements
    }

    pub fn outputs(&self) -> &[Symbol] {
        &self.outputs
    }

    /// Declares `sym` as an emitted output (spec.md §6 `output(sym)`).
    pub fn output(&mut self, sym: Symbol) {
        self.outputs.push(sym);
    }

    /// Resolves an optional source expression at builder time: `Some`
    /// is passed through unchanged, `None` mints a fresh external symbol
    /// and uses it as the expression (spec.md §4.3/§3: "when absent, the
    /// source value itself is external").
    fn source_expr(&mut self, prefix: &str, expr: Option<LinExpr>) -> Result<LinExpr> {
        match expr {
            Some(e) => Ok(e),
            None => {
                let ext = self.external(&format!("src_{prefix}"))?;
                Ok(LinExpr::from_symbol(ext))
            }
        }
    }

    pub fn voltage_source(
        &mut self,
        p: Symbol,
        n: Symbol,
        expr: Option<LinExpr>,
    ) -> Result<VoltageSource> {
        let name = self.namer.make("V");
        let port = self.port(&format!("V{name}"), p, n)?;
        let expr = Some(self.source_expr(&format!("V{name}"), expr)?);
        let source = VoltageSource { name, port, expr };
        self.static_elements.push(source.clone().into());
        Ok(source)
    }

    pub fn current_source(
        &mut self,
        p: Symbol,
        n: Symbol,
        expr: Option<LinExpr>,
    ) -> Result<CurrentSource> {
        let name = self.namer.make("I");
        let port = self.port(&format!("I{name}"), p, n)?;
        let expr = Some(self.source_expr(&format!("I{name}"), expr)?);
        let source = CurrentSource { name, port, expr };
        self.static_elements.push(source.clone().into());
        Ok(source)
    }

    pub fn resistor(&mut self, p: Symbol, n: Symbol, value: f64) -> Result<Resistor> {
        let name = self.namer.make("R");
        let port = self.port(&format!("R{name}"), p, n)?;
        let resistor = Resistor { name, port, value };
        self.static_elements.push(resistor.clone().into());
        Ok(resistor)
    }

    pub fn inductor(&mut self, p: Symbol, n: Symbol, value: f64) -> Result<Inductor> {
        let name = self.namer.make("L");
        let port = self.port(&format!("L{name}"), p, n)?;
        let didt = self.internal(&format!("didt_L{name}"))?;

        let handle = StateHandle(self.state_vars.len());
        self.state_vars.push(StateVariable {
            variable: port.i.clone(),
            derivative: didt.clone(),
        });
        self.inductor_states.push(handle);

        let inductor = Inductor {
            name,
            port,
            value,
            didt,
            state: handle,
        };
        self.static_elements.push(inductor.clone().into());
        Ok(inductor)
    }

    pub fn capacitor(&mut self, p: Symbol, n: Symbol, value: f64) -> Result<Capacitor> {
        let name = self.namer.make("C");
        let port = self.port(&format!("C{name}"), p, n)?;
        let dvdt = self.internal(&format!("dvdt_C{name}"))?;

        let handle = StateHandle(self.state_vars.len());
        self.state_vars.push(StateVariable {
            variable: port.v.clone(),
            derivative: dvdt.clone(),
        });

        let capacitor = Capacitor {
            name,
            port,
            value,
            dvdt,
            state: handle,
        };
        self.static_elements.push(capacitor.clone().into());
        Ok(capacitor)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn transformer(
        &mut self,
        p1: Symbol,
        n1: Symbol,
        p2: Symbol,
        n2: Symbol,
        turns_ratio: f64,
    ) -> Result<Transformer> {
        let name = self.namer.make("T");
        let port1 = self.port(&format!("1_T{name}"), p1, n1)?;
        let port2 = self.port(&format!("2_T{name}"), p2, n2)?;
        let transformer = Transformer {
            name,
            port1,
            port2,
            turns_ratio,
        };
        self.static_elements.push(transformer.clone().into());
        Ok(transformer)
    }

    pub fn mosfet(&mut self, p: Symbol, n: Symbol) -> Result<Mosfet> {
        let name = self.namer.make("M");
        let port = self.port(&format!("M{name}"), p, n)?;
        let mosfet = Mosfet { name, port };
        self.switched_elements.push(mosfet.clone().into());
        Ok(mosfet)
    }

    pub fn diode(&mut self, p: Symbol, n: Symbol, vf: f64) -> Result<Diode> {
        let name = self.namer.make("D");
        let port = self.port(&format!("D{name}"), p, n)?;
        let diode = Diode { name, port, vf };
        self.switched_elements.push(diode.clone().into());
        Ok(diode)
    }
}
