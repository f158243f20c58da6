// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Variable references.

use std::sync::{Arc, OnceLock};

use egad_reflect::TypeDescr;
use tracing::trace;

use crate::env::{BindingPath, Environment};
use crate::error::{BindError, ConstructError};
use crate::kind::ExprKind;
use crate::{ExprRef, Expression, Span};

/// Reference to a named binding.
#[derive(Debug)]
pub struct Variable {
    name: String,
    value_type: TypeDescr,
    span: Option<Span>,
    /// Set once, by the attachment pass.
    path: OnceLock<BindingPath>,
}

impl Variable {
    /// Variable `name` taking values described by `var_type`.
    pub fn new(name: impl Into<String>, var_type: TypeDescr) -> Result<Self, ConstructError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConstructError::EmptyName { kind: ExprKind::Variable });
        }
        Ok(Self {
            name,
            value_type: var_type,
            span: None,
            path: OnceLock::new(),
        })
    }

    /// Record where in the source this reference appeared.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> &TypeDescr {
        &self.value_type
    }

    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// Resolved binding, once the tree has been attached.
    pub fn binding_path(&self) -> Option<BindingPath> {
        self.path.get().copied()
    }

    pub fn is_bound(&self) -> bool {
        self.path.get().is_some()
    }

    /// Resolve this variable against `env` and record the result.
    ///
    /// Attaching again is a no-op when the resolution is unchanged (a shared
    /// variable node is reached once per use) and an error otherwise.
    pub fn attach_envs(&self, env: &dyn Environment) -> Result<(), BindError> {
        let Some(path) = env.lookup_binding(&self.name) else {
            return Err(BindError::unbound(self.name.clone(), self.span));
        };

        match self.path.set(path) {
            Ok(()) => {
                trace!(name = %self.name, %path, "variable bound");
                Ok(())
            }
            Err(attempted) => match self.path.get() {
                Some(&previous) if previous != attempted => Err(BindError::rebound(
                    self.name.clone(),
                    previous,
                    attempted,
                    self.span,
                )),
                _ => Ok(()),
            },
        }
    }
}

/// Create a variable node.
pub fn make_var(name: impl Into<String>, var_type: TypeDescr) -> Result<ExprRef, ConstructError> {
    Ok(Arc::new(Expression::Variable(Variable::new(name, var_type)?)))
}
