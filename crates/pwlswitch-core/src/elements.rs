use crate::mna::Mna;

pub mod capacitor;
pub mod current_source;
pub mod diode;
pub mod inductor;
pub mod mosfet;
pub mod resistor;
pub mod transformer;
pub mod voltage_source;

/// A component whose contribution to the system of equations never
/// depends on a mode assignment (spec.md §3/§4.3).
#[derive(Debug, Clone)]
pub enum Element {
    VoltageSource(voltage_source::VoltageSource),
    CurrentSource(current_source::CurrentSource),
    Resistor(resistor::Resistor),
    Inductor(inductor::Inductor),
    Capacitor(capacitor::Capacitor),
    Transformer(transformer::Transformer),
}

/// A macro to forward a method call to the correct inner element struct.
macro_rules! dispatch {
    ($self:expr, $method:ident($($args:expr),*)) => {
        match $self {
            Element::VoltageSource(e) => e.$method($($args),*),
            Element::CurrentSource(e) => e.$method($($args),*),
            Element::Resistor(e) => e.$method($($args),*),
            Element::Inductor(e) => e.$method($($args),*),
            Element::Capacitor(e) => e.$method($($args),*),
            Element::Transformer(e) => e.$method($($args),*),
        }
    };
}

impl From<voltage_source::VoltageSource> for Element {
    fn from(item: voltage_source::VoltageSource) -> Self {
        Element::VoltageSource(item)
    }
}
impl From<current_source::CurrentSource> for Element {
    fn from(item: current_source::CurrentSource) -> Self {
        Element::CurrentSource(item)
    }
}
impl From<resistor::Resistor> for Element {
    fn from(item: resistor::Resistor) -> Self {
        Element::Resistor(item)
    }
}
impl From<inductor::Inductor> for Element {
    fn from(item: inductor::Inductor) -> Self {
        Element::Inductor(item)
    }
}
impl From<capacitor::Capacitor> for Element {
    fn from(item: capacitor::Capacitor) -> Self {
        Element::Capacitor(item)
    }
}
impl From<transformer::Transformer> for Element {
    fn from(item: transformer::Transformer) -> Self {
        Element::Transformer(item)
    }
}

impl Element {
    pub fn identifier(&self) -> String {
        dispatch!(self, identifier())
    }

    pub fn contribute(&self, mna: &mut Mna) {
        dispatch!(self, contribute(mna))
    }

    /// The source expression driving a [`Element::VoltageSource`] or
    /// [`Element::CurrentSource`], if any. `None` for every other
    /// variant and for a source with no explicit `expr` (spec.md §4.3).
    /// Callers use this to check linearity-in-externals at solve time.
    pub fn source_expr(&self) -> Option<&pwlswitch_linalg::LinExpr> {
        match self {
            Element::VoltageSource(e) => e.expr.as_ref(),
            Element::CurrentSource(e) => e.expr.as_ref(),
            _ => None,
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// A component whose contribution depends on an on/off [`crate::mode::Mode`]
/// assignment (spec.md §3/§4.3): a MOSFET or a diode.
#[derive(Debug, Clone)]
pub enum SwitchedElement {
    Mosfet(mosfet::Mosfet),
    Diode(diode::Diode),
}

macro_rules! dispatch_switched {
    ($self:expr, $method:ident($($args:expr),*)) => {
        match $self {
            SwitchedElement::Mosfet(e) => e.$method($($args),*),
            SwitchedElement::Diode(e) => e.$method($($args),*),
        }
    };
}

impl From<mosfet::Mosfet> for SwitchedElement {
    fn from(item: mosfet::Mosfet) -> Self {
        SwitchedElement::Mosfet(item)
    }
}
impl From<diode::Diode> for SwitchedElement {
    fn from(item: diode::Diode) -> Self {
        SwitchedElement::Diode(item)
    }
}

impl SwitchedElement {
    pub fn identifier(&self) -> String {
        dispatch_switched!(self, identifier())
    }

    pub fn contribute(&self, mode: crate::mode::Mode, mna: &mut Mna) {
        dispatch_switched!(self, contribute(mode, mna))
    }
}

impl std::fmt::Display for SwitchedElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier())
    }
}
