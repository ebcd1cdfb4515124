use crate::prelude::*;

/// An ideal transformer: `v1 = n * v2` and `n * i1 = -i2` (spec.md §3/§4.3),
/// one KCL contribution per port.
#[derive(Debug, Clone)]
pub struct Transformer {
    pub name: String,
    pub port1: Port,
    pub port2: Port,
    pub turns_ratio: f64,
}

impl Transformer {
    pub fn identifier(&self) -> String {
        format!("T{}", self.name)
    }

    pub fn contribute(&self, mna: &mut Mna) {
        self.port1.contribute(mna);
        self.port2.contribute(mna);

        let i1 = LinExpr::from_symbol(self.port1.i.clone());
        let i2 = LinExpr::from_symbol(self.port2.i.clone());
        let v1 = LinExpr::from_symbol(self.port1.v.clone());
        let v2 = LinExpr::from_symbol(self.port2.v.clone());
        mna.set_equal(&v1, &(&v2 * self.turns_ratio));

        let n_i1 = &i1 * self.turns_ratio;
        mna.set_equal(&n_i1, &(&i2 * -1.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contributes_two_kcl_pairs_and_two_constitutive_equations() {
        let mut ns = SymbolNamespace::new();
        let p1 = ns.define("v1_t0").unwrap();
        let n1 = Symbol::ground();
        let v1 = ns.define("vv1_t0").unwrap();
        let i1 = ns.define("ii1_t0").unwrap();
        let p2 = ns.define("v2_t0").unwrap();
        let n2 = Symbol::ground();
        let v2 = ns.define("vv2_t0").unwrap();
        let i2 = ns.define("ii2_t0").unwrap();

        let t = Transformer {
            name: "0".into(),
            port1: Port::new(p1, n1, v1, i1),
            port2: Port::new(p2, n2, v2, i2),
            turns_ratio: 2.0,
        };
        let mut mna = Mna::new();
        t.contribute(&mut mna);
        // two non-ground nodes + two node-diff aux + two own aux equations
        assert_eq!(mna.equations().len(), 6);
    }
}
