use std::collections::BTreeMap;

use pwlswitch_core::mode::Mode;

use crate::linform::LinForm;

/// Metadata for one diode: the names of its own solved port symbols plus
/// its forward-voltage constant (spec.md §6 JSON artifact, top-level
/// `diodes` field — distinct from the per-case `diodes` field, which
/// carries the solved linforms rather than names).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DiodeMeta {
    pub v: String,
    pub i: String,
    pub vf: f64,
}

/// The solved `{v, i}` pair for one diode within one case (spec.md
/// §4.7 `diodes[name]`).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DiodePortForm {
    pub v: LinForm,
    pub i: LinForm,
}

/// One compiled update law for one mode assignment (spec.md §3 "Case").
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Case {
    pub dyn_modes: BTreeMap<String, Mode>,
    pub states: BTreeMap<String, LinForm>,
    pub diodes: BTreeMap<String, DiodePortForm>,
    pub outputs: BTreeMap<String, LinForm>,
}

/// The full JSON case table artifact (spec.md §6): every case keyed
/// implicitly by its `dyn_modes`, plus the metadata a downstream runtime
/// needs to interpret them without re-deriving the circuit topology.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CaseTable {
    pub dt: f64,
    pub ext_syms: Vec<String>,
    pub mosfets: Vec<String>,
    pub states: Vec<String>,
    pub outputs: Vec<String>,
    pub diodes: BTreeMap<String, DiodeMeta>,
    pub cases: Vec<Case>,
}
