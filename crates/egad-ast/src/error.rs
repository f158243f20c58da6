// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Construction, binding and capability errors.

use std::fmt;

use thiserror::Error;

use crate::env::BindingPath;
use crate::kind::ExprKind;
use crate::Span;

/// A node was asked to represent an impossible value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructError {
    #[error("{kind} node requires a non-empty name")]
    EmptyName { kind: ExprKind },

    #[error("primitive `{name}`: expected function type, found {found}")]
    NotAFunction { name: String, found: String },

    #[error("`{name}`: function type {found} has no return type")]
    MissingReturnType { name: String, found: String },

    #[error("primitive `{name}`: descriptor {found} does not describe native type {expected}")]
    DescriptorMismatch {
        name: String,
        expected: String,
        found: String,
    },

    #[error("lambda `{lambda}`: parameter {index} is a {found} node, expected variable")]
    ParameterNotVariable {
        lambda: String,
        index: usize,
        found: ExprKind,
    },

    #[error("lambda `{lambda}`: duplicate parameter `{param}`")]
    DuplicateParameter { lambda: String, param: String },

    #[error("apply: operator of type {found} is not callable")]
    OperatorNotCallable { found: String },

    #[error("apply: operator expects {expected} argument(s), found {found}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("apply: argument {index} has type {found}, expected {expected}")]
    ArgTypeMismatch {
        index: usize,
        expected: String,
        found: String,
    },
}

/// A variable could not be given a binding path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct BindError {
    pub kind: BindErrorKind,
    pub span: Option<Span>,
}

impl BindError {
    pub fn unbound(name: String, span: Option<Span>) -> Self {
        Self {
            kind: BindErrorKind::Unbound { name },
            span,
        }
    }

    pub fn rebound(
        name: String,
        previous: BindingPath,
        attempted: BindingPath,
        span: Option<Span>,
    ) -> Self {
        Self {
            kind: BindErrorKind::Rebound { name, previous, attempted },
            span,
        }
    }

    /// The identifier that failed to bind.
    pub fn name(&self) -> &str {
        match &self.kind {
            BindErrorKind::Unbound { name } | BindErrorKind::Rebound { name, .. } => name,
        }
    }
}

/// The kind of binding error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindErrorKind {
    #[error("unbound variable: {name}")]
    Unbound { name: String },

    #[error("variable `{name}` is already bound to {previous}, cannot rebind to {attempted}")]
    Rebound {
        name: String,
        previous: BindingPath,
        attempted: BindingPath,
    },
}

/// A capability a consumer can ask a node for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Constant,
    Function,
    Primitive,
    Variable,
    Lambda,
    Apply,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Constant => "constant",
            Capability::Function => "function",
            Capability::Primitive => "primitive",
            Capability::Variable => "variable",
            Capability::Lambda => "lambda",
            Capability::Apply => "apply",
        };
        write!(f, "{}", name)
    }
}

/// A consumer asked a node for a capability it does not implement.
///
/// This is a bug in the consumer, not bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{found} node does not provide the {requested} capability")]
pub struct CapabilityError {
    pub requested: Capability,
    pub found: ExprKind,
}

impl CapabilityError {
    pub fn new(requested: Capability, found: ExprKind) -> Self {
        Self { requested, found }
    }
}
