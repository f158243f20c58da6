// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Abstract syntax tree for EGAD (Expression Graph with Automagic Derivation).
//!
//! Trees built here are consumed by the interpreter, the VM compiler and the
//! native code generator. Nodes are immutable and shared through [`ExprRef`]
//! handles, so one tree can serve many independent passes.

pub mod span;
pub mod kind;
pub mod capability;
pub mod env;
pub mod error;
pub mod pretty;

mod apply;
mod config;
mod constant;
mod display;
mod expr;
mod lambda;
mod primitive;
mod variable;

pub use span::Span;
pub use kind::ExprKind;
pub use capability::{ConstantInterface, FunctionInterface, Intrinsic, PrimitiveInterface};
pub use env::{BindingPath, EmptyEnv, Environment, LocalEnv};
pub use error::{BindError, BindErrorKind, Capability, CapabilityError, ConstructError};
pub use config::PrettyConfig;

pub use apply::{make_apply, Apply};
pub use constant::{make_constant, Constant};
pub use expr::{ExprRef, Expression};
pub use lambda::{make_lambda, Lambda};
pub use primitive::{make_primitive, Primitive};
pub use variable::{make_var, Variable};
