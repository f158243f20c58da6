// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! The expression node and its base contract.

use std::collections::BTreeSet;
use std::ops::ControlFlow;
use std::sync::Arc;

use egad_reflect::TypeDescr;

use crate::apply::Apply;
use crate::capability::{ConstantInterface, FunctionInterface, PrimitiveInterface};
use crate::env::Environment;
use crate::error::{BindError, Capability, CapabilityError};
use crate::kind::ExprKind;
use crate::lambda::Lambda;
use crate::variable::Variable;

/// Shared handle to an expression node.
pub type ExprRef = Arc<Expression>;

/// Abstract syntax tree for an EGAD program.
///
/// Expressions are immutable once built, so one tree can be reused by any
/// number of evaluations or compilations. The only write after construction
/// is the one-time binding of each variable during attachment.
#[derive(Debug)]
pub enum Expression {
    /// Literal constant
    Constant(Box<dyn ConstantInterface>),
    /// Native function literal
    Primitive(Box<dyn PrimitiveInterface>),
    /// Function call
    Apply(Apply),
    /// Variable reference
    Variable(Variable),
    /// Function definition
    Lambda(Lambda),
}

impl Expression {
    pub fn kind(&self) -> ExprKind {
        match self {
            Expression::Constant(_) => ExprKind::Constant,
            Expression::Primitive(_) => ExprKind::Primitive,
            Expression::Apply(_) => ExprKind::Apply,
            Expression::Variable(_) => ExprKind::Variable,
            Expression::Lambda(_) => ExprKind::Lambda,
        }
    }

    /// Type of the values this expression produces.
    pub fn value_type(&self) -> &TypeDescr {
        match self {
            Expression::Constant(c) => c.value_td(),
            Expression::Primitive(p) => p.value_td(),
            Expression::Apply(ap) => ap.value_type(),
            Expression::Variable(var) => var.value_type(),
            Expression::Lambda(lm) => lm.fn_type(),
        }
    }

    /// Direct children, left to right.
    pub fn children(&self) -> Vec<&ExprRef> {
        match self {
            Expression::Lambda(lm) => lm.params().iter().chain(std::iter::once(lm.body())).collect(),
            Expression::Apply(ap) => std::iter::once(ap.fn_expr()).chain(ap.args()).collect(),
            Expression::Constant(_) | Expression::Primitive(_) | Expression::Variable(_) => Vec::new(),
        }
    }

    /// Call `visitor` on every node of this tree, each node before its
    /// children. Returns the number of nodes visited.
    pub fn visit_preorder(&self, visitor: &mut dyn FnMut(&Expression)) -> usize {
        visitor(self);
        let mut n = 1;
        for child in self.children() {
            n += child.visit_preorder(visitor);
        }
        n
    }

    /// Preorder traversal that stops as soon as `visitor` breaks.
    ///
    /// Returns `Continue(n)` after a full traversal, `Break(n)` if stopped;
    /// `n` counts the nodes passed to `visitor`.
    pub fn try_visit_preorder(
        &self,
        visitor: &mut dyn FnMut(&Expression) -> ControlFlow<()>,
    ) -> ControlFlow<usize, usize> {
        let mut n = 0;
        match self.try_visit_inner(visitor, &mut n) {
            ControlFlow::Continue(()) => ControlFlow::Continue(n),
            ControlFlow::Break(()) => ControlFlow::Break(n),
        }
    }

    fn try_visit_inner(
        &self,
        visitor: &mut dyn FnMut(&Expression) -> ControlFlow<()>,
        n: &mut usize,
    ) -> ControlFlow<()> {
        *n += 1;
        visitor(self)?;
        for child in self.children() {
            child.try_visit_inner(visitor, n)?;
        }
        ControlFlow::Continue(())
    }

    /// Names referenced in this tree and not bound within it.
    pub fn get_free_variables(&self) -> BTreeSet<String> {
        match self {
            Expression::Variable(var) => BTreeSet::from([var.name().to_string()]),
            Expression::Lambda(lm) => {
                let mut free = lm.body().get_free_variables();
                for param in lm.param_vars() {
                    free.remove(param.name());
                }
                free
            }
            Expression::Apply(ap) => {
                let mut free = ap.fn_expr().get_free_variables();
                for arg in ap.args() {
                    free.extend(arg.get_free_variables());
                }
                free
            }
            Expression::Constant(_) | Expression::Primitive(_) => BTreeSet::new(),
        }
    }

    /// Resolve every variable in this tree against `env`.
    ///
    /// Must run once over a complete tree, before anything reads binding
    /// paths. Stops at the first unresolved name.
    pub fn attach_envs(&self, env: &dyn Environment) -> Result<(), BindError> {
        match self {
            Expression::Variable(var) => var.attach_envs(env),
            Expression::Lambda(lm) => lm.attach_envs(env),
            Expression::Apply(ap) => ap.attach_envs(env),
            Expression::Constant(_) | Expression::Primitive(_) => Ok(()),
        }
    }

    pub fn as_constant(&self) -> Result<&dyn ConstantInterface, CapabilityError> {
        match self {
            Expression::Constant(c) => Ok(&**c),
            Expression::Primitive(p) => Ok(p.as_constant()),
            _ => Err(CapabilityError::new(Capability::Constant, self.kind())),
        }
    }

    pub fn as_function(&self) -> Result<&dyn FunctionInterface, CapabilityError> {
        match self {
            Expression::Lambda(lm) => Ok(lm),
            Expression::Primitive(p) => Ok(p.as_function()),
            _ => Err(CapabilityError::new(Capability::Function, self.kind())),
        }
    }

    pub fn as_primitive(&self) -> Result<&dyn PrimitiveInterface, CapabilityError> {
        match self {
            Expression::Primitive(p) => Ok(&**p),
            _ => Err(CapabilityError::new(Capability::Primitive, self.kind())),
        }
    }

    pub fn as_variable(&self) -> Result<&Variable, CapabilityError> {
        match self {
            Expression::Variable(var) => Ok(var),
            _ => Err(CapabilityError::new(Capability::Variable, self.kind())),
        }
    }

    pub fn as_lambda(&self) -> Result<&Lambda, CapabilityError> {
        match self {
            Expression::Lambda(lm) => Ok(lm),
            _ => Err(CapabilityError::new(Capability::Lambda, self.kind())),
        }
    }

    pub fn as_apply(&self) -> Result<&Apply, CapabilityError> {
        match self {
            Expression::Apply(ap) => Ok(ap),
            _ => Err(CapabilityError::new(Capability::Apply, self.kind())),
        }
    }

    /// Human-readable single-line rendering.
    pub fn display_string(&self) -> String {
        self.to_string()
    }
}
