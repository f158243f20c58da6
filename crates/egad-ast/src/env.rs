// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Lexical environments used to resolve variable references.

use std::fmt;

/// Resolved location of a variable binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BindingPath {
    /// `link` scopes outward from the reference, slot `slot`.
    Local { link: u32, slot: u32 },
    /// Slot in the global namespace.
    Global { slot: u32 },
}

impl BindingPath {
    /// The same binding seen from one scope further in.
    fn outward(self) -> Self {
        match self {
            BindingPath::Local { link, slot } => BindingPath::Local { link: link + 1, slot },
            global => global,
        }
    }
}

impl fmt::Display for BindingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingPath::Local { link, slot } => write!(f, "local(link={}, slot={})", link, slot),
            BindingPath::Global { slot } => write!(f, "global(slot={})", slot),
        }
    }
}

/// Chain of enclosing scopes visible at some point in a tree.
pub trait Environment {
    /// Resolve `name` against this scope chain.
    fn lookup_binding(&self, name: &str) -> Option<BindingPath>;
}

/// Environment that defines nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyEnv;

impl Environment for EmptyEnv {
    fn lookup_binding(&self, _name: &str) -> Option<BindingPath> {
        None
    }
}

/// A single lexical scope layered over an enclosing environment.
///
/// The parent is borrowed; a `LocalEnv` lives only for the duration of
/// an attachment pass.
pub struct LocalEnv<'p> {
    names: Vec<&'p str>,
    parent: &'p dyn Environment,
}

impl<'p> LocalEnv<'p> {
    /// Extend `parent` with a scope binding `names` to slots 0, 1, ...
    pub fn new(parent: &'p dyn Environment, names: Vec<&'p str>) -> Self {
        Self { names, parent }
    }

    pub fn names(&self) -> &[&'p str] {
        &self.names
    }
}

impl Environment for LocalEnv<'_> {
    fn lookup_binding(&self, name: &str) -> Option<BindingPath> {
        if let Some(slot) = self.names.iter().position(|n| *n == name) {
            return Some(BindingPath::Local { link: 0, slot: slot as u32 });
        }
        self.parent.lookup_binding(name).map(BindingPath::outward)
    }
}

impl fmt::Debug for LocalEnv<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalEnv").field("names", &self.names).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OneGlobal;

    impl Environment for OneGlobal {
        fn lookup_binding(&self, name: &str) -> Option<BindingPath> {
            (name == "pi").then_some(BindingPath::Global { slot: 0 })
        }
    }

    #[test]
    fn local_slots_follow_declaration_order() {
        let env = LocalEnv::new(&EmptyEnv, vec!["a", "b", "c"]);
        assert_eq!(env.lookup_binding("c"), Some(BindingPath::Local { link: 0, slot: 2 }));
        assert_eq!(env.lookup_binding("z"), None);
    }

    #[test]
    fn nested_scopes_count_links() {
        let outer = LocalEnv::new(&OneGlobal, vec!["x"]);
        let inner = LocalEnv::new(&outer, vec!["y"]);
        assert_eq!(inner.lookup_binding("y"), Some(BindingPath::Local { link: 0, slot: 0 }));
        assert_eq!(inner.lookup_binding("x"), Some(BindingPath::Local { link: 1, slot: 0 }));
        assert_eq!(inner.lookup_binding("pi"), Some(BindingPath::Global { slot: 0 }));
    }

    #[test]
    fn inner_scope_shadows_outer() {
        let outer = LocalEnv::new(&EmptyEnv, vec!["x", "y"]);
        let inner = LocalEnv::new(&outer, vec!["y"]);
        assert_eq!(inner.lookup_binding("y"), Some(BindingPath::Local { link: 0, slot: 0 }));
    }

    #[test]
    fn empty_env_resolves_nothing() {
        assert_eq!(EmptyEnv.lookup_binding("x"), None);
    }
}
