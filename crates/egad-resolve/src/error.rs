// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Resolution error types.

use egad_ast::{BindError, ConstructError, ExprKind};
use thiserror::Error;

/// A namespace or attachment error.
#[derive(Debug, Clone, Error)]
#[error("{kind}")]
pub struct ResolveError {
    pub kind: ResolveErrorKind,
}

impl ResolveError {
    pub fn duplicate(name: String, previous_slot: u32) -> Self {
        Self {
            kind: ResolveErrorKind::DuplicateDefinition { name, previous_slot },
        }
    }

    pub fn not_callable(found: ExprKind) -> Self {
        Self {
            kind: ResolveErrorKind::NotCallable { found },
        }
    }

    /// Attachment failed while resolving definition `definition`.
    pub fn bind(definition: String, source: BindError) -> Self {
        Self {
            kind: ResolveErrorKind::Bind { definition, source },
        }
    }
}

impl From<ConstructError> for ResolveError {
    fn from(source: ConstructError) -> Self {
        Self {
            kind: ResolveErrorKind::Construct(source),
        }
    }
}

/// The kind of resolution error.
#[derive(Debug, Clone, Error)]
pub enum ResolveErrorKind {
    #[error("duplicate definition: {name} (previously defined in slot {previous_slot})")]
    DuplicateDefinition { name: String, previous_slot: u32 },

    #[error("only lambdas and primitives can be defined globally, found {found}")]
    NotCallable { found: ExprKind },

    #[error("in `{definition}`: {source}")]
    Bind {
        definition: String,
        source: BindError,
    },

    #[error(transparent)]
    Construct(ConstructError),
}
