use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};

/// A unique identifier for a node voltage, a port quantity, a derivative,
/// or an external input. Symbols are cheap to clone (a reference-counted
/// name) and compare equal iff their names are equal — the namespace that
/// minted them is the only thing that can mint two equal symbols, and it
/// refuses to do that (see [`SymbolNamespace::define`]).
#[derive(Clone, Eq, Ord, PartialOrd)]
pub struct Symbol(Rc<str>);

impl Symbol {
    /// The fixed ground-node symbol. Every circuit implicitly has this
    /// node; it is never registered in a [`SymbolNamespace`] and is exempt
    /// from the collision check.
    pub fn ground() -> Symbol {
        Symbol(Rc::from("0"))
    }

    pub fn is_ground(&self) -> bool {
        &*self.0 == "0"
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl std::hash::Hash for Symbol {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues unique [`Symbol`]s and guards against name collisions.
///
/// Mirrors the teacher's per-element `identifier()` naming convention, but
/// generalized: instead of one counter per element *kind* baked into each
/// parser, counters are keyed by an arbitrary caller-chosen prefix (`v_`,
/// `i_`, `di_dt_`, ...), matching spec.md §4.1.
#[derive(Debug, Default)]
pub struct SymbolNamespace {
    names: std::collections::HashSet<Rc<str>>,
    counters: std::collections::HashMap<String, u64>,
}

impl SymbolNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to a fresh symbol. Fails with [`Error::NameCollision`]
    /// if `name` is already defined.
    pub fn define(&mut self, name: &str) -> Result<Symbol> {
        if name == "0" || self.names.contains(name) {
            return Err(Error::NameCollision(name.to_string()));
        }
        let interned: Rc<str> = Rc::from(name);
        self.names.insert(interned.clone());
        Ok(Symbol(interned))
    }

    /// Mints a fresh name from `prefix` (`prefix` + the next counter value
    /// for that prefix) and defines it. Counters are independent per
    /// prefix; reuse across prefixes is expected and does not collide as
    /// long as the generated names themselves are distinct.
    pub fn make(&mut self, prefix: &str) -> Result<Symbol> {
        loop {
            let next = self.counters.entry(prefix.to_string()).or_insert(0);
            let candidate = format!("{prefix}{next}");
            *next += 1;
            if !self.names.contains(candidate.as_str()) {
                return self.define(&candidate);
            }
        }
    }
}
