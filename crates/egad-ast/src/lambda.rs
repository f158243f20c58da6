// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Function definitions.

use std::collections::HashSet;
use std::sync::Arc;

use egad_reflect::TypeDescr;
use tracing::debug;

use crate::capability::FunctionInterface;
use crate::env::{Environment, LocalEnv};
use crate::error::{BindError, ConstructError};
use crate::kind::ExprKind;
use crate::variable::Variable;
use crate::{ExprRef, Expression};

/// A named function with formal parameters and a body.
#[derive(Debug)]
pub struct Lambda {
    /// Name used to link generated code. Uniqueness is up to the namespace
    /// the lambda is registered in.
    name: String,
    /// `ret(args...)`
    fn_type: TypeDescr,
    /// Short name of `fn_type`, e.g. `float(float,float)`.
    type_str: String,
    /// Formal parameters, each a variable node, in argument order.
    params: Vec<ExprRef>,
    body: ExprRef,
}

impl Lambda {
    pub fn new(
        name: impl Into<String>,
        params: Vec<ExprRef>,
        body: ExprRef,
    ) -> Result<Self, ConstructError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConstructError::EmptyName { kind: ExprKind::Lambda });
        }

        let mut seen = HashSet::new();
        let mut arg_types = Vec::with_capacity(params.len());
        for (index, param) in params.iter().enumerate() {
            let Expression::Variable(var) = &**param else {
                return Err(ConstructError::ParameterNotVariable {
                    lambda: name,
                    index,
                    found: param.kind(),
                });
            };
            if !seen.insert(var.name()) {
                return Err(ConstructError::DuplicateParameter {
                    param: var.name().to_string(),
                    lambda: name,
                });
            }
            arg_types.push(var.value_type().clone());
        }

        let fn_type = TypeDescr::function(Some(body.value_type().clone()), arg_types);
        let type_str = fn_type.short_name();

        Ok(Self {
            name,
            fn_type,
            type_str,
            params,
            body,
        })
    }

    /// Function type of this lambda.
    pub fn fn_type(&self) -> &TypeDescr {
        &self.fn_type
    }

    /// Signature string of the form `ret(args...)`.
    pub fn type_str(&self) -> &str {
        &self.type_str
    }

    pub fn params(&self) -> &[ExprRef] {
        &self.params
    }

    /// Parameter `i` as a variable.
    pub fn param(&self, i: usize) -> Option<&Variable> {
        match self.params.get(i).map(|p| &**p) {
            Some(Expression::Variable(var)) => Some(var),
            _ => None,
        }
    }

    pub fn param_vars(&self) -> impl Iterator<Item = &Variable> + '_ {
        self.params.iter().filter_map(|p| match &**p {
            Expression::Variable(var) => Some(var),
            _ => None,
        })
    }

    pub fn body(&self) -> &ExprRef {
        &self.body
    }

    /// Open a scope for the parameters, then attach parameters and body in it.
    pub fn attach_envs(&self, env: &dyn Environment) -> Result<(), BindError> {
        debug!(lambda = %self.name, n_arg = self.params.len(), "attaching lambda scope");

        let names: Vec<&str> = self.param_vars().map(Variable::name).collect();
        let local = LocalEnv::new(env, names);

        for param in &self.params {
            param.attach_envs(&local)?;
        }
        self.body.attach_envs(&local)
    }
}

impl FunctionInterface for Lambda {
    fn name(&self) -> &str {
        &self.name
    }

    fn n_arg(&self) -> usize {
        self.params.len()
    }

    fn fn_arg(&self, i: usize) -> Option<&TypeDescr> {
        self.param(i).map(Variable::value_type)
    }

    fn fn_retval(&self) -> &TypeDescr {
        self.body.value_type()
    }
}

/// Create a lambda node.
pub fn make_lambda(
    name: impl Into<String>,
    params: Vec<ExprRef>,
    body: ExprRef,
) -> Result<ExprRef, ConstructError> {
    Ok(Arc::new(Expression::Lambda(Lambda::new(name, params, body)?)))
}
