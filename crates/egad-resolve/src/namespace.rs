// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Global namespace of named functions.

use egad_ast::{BindingPath, Environment, ExprRef, Expression};
use indexmap::IndexMap;
use tracing::debug;

use crate::error::ResolveError;

/// Top-level definitions, in definition order.
///
/// Names are unique here: generated code is linked by name.
#[derive(Debug, Default)]
pub struct GlobalEnv {
    defs: IndexMap<String, ExprRef>,
}

impl GlobalEnv {
    pub fn new() -> Self {
        Self { defs: IndexMap::new() }
    }

    /// Define a lambda or primitive under its own name and return its slot.
    pub fn define(&mut self, def: ExprRef) -> Result<u32, ResolveError> {
        let name = match def.as_function() {
            Ok(func) => func.name().to_string(),
            Err(_) => return Err(ResolveError::not_callable(def.kind())),
        };
        if let Some(previous) = self.defs.get_index_of(&name) {
            return Err(ResolveError::duplicate(name, previous as u32));
        }

        let slot = self.defs.len() as u32;
        debug!(%name, slot, kind = %def.kind(), "global defined");
        self.defs.insert(name, def);
        Ok(slot)
    }

    pub fn lookup(&self, name: &str) -> Option<&ExprRef> {
        self.defs.get(name)
    }

    pub fn get(&self, slot: u32) -> Option<(&str, &ExprRef)> {
        self.defs
            .get_index(slot as usize)
            .map(|(name, def)| (name.as_str(), def))
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Iterate over definitions in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExprRef)> {
        self.defs.iter().map(|(name, def)| (name.as_str(), def))
    }

    /// Attach every defined lambda against this namespace.
    ///
    /// Lambdas may refer to any global, including themselves and ones
    /// defined after them.
    pub fn attach_all(&self) -> Result<(), ResolveError> {
        debug!(n_def = self.defs.len(), "attaching globals");
        for (name, def) in &self.defs {
            if let Expression::Lambda(_) = &**def {
                def.attach_envs(self)
                    .map_err(|e| ResolveError::bind(name.clone(), e))?;
            }
        }
        Ok(())
    }
}

impl Environment for GlobalEnv {
    fn lookup_binding(&self, name: &str) -> Option<BindingPath> {
        self.defs
            .get_index_of(name)
            .map(|slot| BindingPath::Global { slot: slot as u32 })
    }
}
