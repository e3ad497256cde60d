use crate::formula::Variable;
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

/// A persistent partial assignment of variables to truth values. Unset
/// variables are simply absent. Extension is non-destructive: `bind` hands
/// back an independent copy, so sibling search branches never observe each
/// other's bindings.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Environment {
    bindings: HashMap<Variable, bool>,
}

impl Environment {
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns a copy of this environment extended with the binding. A
    /// correct search binds each variable at most once per path; rebinding is
    /// a logic fault and fails fast.
    pub fn bind(&self, variable: Variable, value: bool) -> Self {
        assert!(
            !self.bindings.contains_key(&variable),
            "variable {:?} is already bound",
            variable
        );
        let mut extended = self.clone();
        extended.bindings.insert(variable, value);
        extended
    }

    pub fn put_true(&self, variable: Variable) -> Self {
        self.bind(variable, true)
    }

    pub fn put_false(&self, variable: Variable) -> Self {
        self.bind(variable, false)
    }

    pub fn lookup(&self, variable: &Variable) -> Option<bool> {
        self.bindings.get(variable).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &bool)> {
        self.bindings.iter()
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut bindings: Vec<_> = self.bindings.iter().collect();
        bindings.sort();
        f.write_str("{")?;
        let mut first = true;
        for (Variable(x), value) in bindings {
            if first {
                first = false;
            } else {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", x, value)?;
        }
        f.write_str("}")
    }
}
