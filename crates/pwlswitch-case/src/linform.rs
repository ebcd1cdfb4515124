use std::collections::BTreeMap;

use pwlswitch_linalg::LinExpr;

/// The canonical serialized form of a solved [`LinExpr`] (spec.md §4.7):
/// `{vars: {name: coeff}, const: number}` with all nonzero-coefficient
/// terms over symbol *names* rather than [`pwlswitch_linalg::Symbol`]
/// handles, since symbols don't survive a JSON round trip.
///
/// `vars` is a `BTreeMap` rather than a `HashMap` so that two calls to
/// [`LinForm::from_expr`] on an unmutated expression always serialize to
/// byte-identical JSON (spec.md §8 property 4, "Idempotence") rather
/// than varying with hash-iteration order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinForm {
    pub vars: BTreeMap<String, f64>,
    #[serde(rename = "const")]
    pub constant: f64,
}

impl LinForm {
    /// Converts a solved expression into its canonical serialized form,
    /// dropping any term whose coefficient happens to be exactly zero.
    pub fn from_expr(expr: &LinExpr) -> LinForm {
        let vars = expr
            .symbols()
            .filter_map(|sym| {
                let c = expr.coeff(sym);
                if c == 0.0 {
                    None
                } else {
                    Some((sym.name().to_string(), c))
                }
            })
            .collect();
        LinForm {
            vars,
            constant: expr.constant(),
        }
    }

    /// The identity expression `{vars: {name: 1.0}, const: 0}` — emitted
    /// for an output that already coincides with a solved unknown
    /// (spec.md §4.7, Open Questions: "the reference emits an identity
    /// expression").
    pub fn identity(name: &str) -> LinForm {
        let mut vars = BTreeMap::new();
        vars.insert(name.to_string(), 1.0);
        LinForm { vars, constant: 0.0 }
    }
}
