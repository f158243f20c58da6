// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Function application.

use std::sync::Arc;

use egad_reflect::TypeDescr;

use crate::env::Environment;
use crate::error::{BindError, ConstructError};
use crate::{ExprRef, Expression};

/// Call of `fn_expr` on `args`.
#[derive(Debug)]
pub struct Apply {
    /// Return type of `fn_expr`.
    value_type: TypeDescr,
    fn_expr: ExprRef,
    args: Vec<ExprRef>,
}

impl Apply {
    /// The operator must have a function type accepting exactly `args`.
    pub fn new(fn_expr: ExprRef, args: Vec<ExprRef>) -> Result<Self, ConstructError> {
        let fn_type = fn_expr.value_type();
        if !fn_type.is_function() {
            return Err(ConstructError::OperatorNotCallable {
                found: fn_type.short_name(),
            });
        }
        let Some(value_type) = fn_type.return_type().cloned() else {
            return Err(ConstructError::MissingReturnType {
                name: operator_name(&fn_expr),
                found: fn_type.short_name(),
            });
        };

        if fn_type.n_fn_arg() != args.len() {
            return Err(ConstructError::ArityMismatch {
                expected: fn_type.n_fn_arg(),
                found: args.len(),
            });
        }
        for (index, (expected, arg)) in fn_type.fn_args().iter().zip(&args).enumerate() {
            if arg.value_type() != expected {
                return Err(ConstructError::ArgTypeMismatch {
                    index,
                    expected: expected.short_name(),
                    found: arg.value_type().short_name(),
                });
            }
        }

        Ok(Self {
            value_type,
            fn_expr,
            args,
        })
    }

    pub fn value_type(&self) -> &TypeDescr {
        &self.value_type
    }

    pub fn fn_expr(&self) -> &ExprRef {
        &self.fn_expr
    }

    pub fn args(&self) -> &[ExprRef] {
        &self.args
    }

    pub fn attach_envs(&self, env: &dyn Environment) -> Result<(), BindError> {
        self.fn_expr.attach_envs(env)?;
        for arg in &self.args {
            arg.attach_envs(env)?;
        }
        Ok(())
    }
}

fn operator_name(fn_expr: &Expression) -> String {
    match fn_expr.as_function() {
        Ok(func) => func.name().to_string(),
        Err(_) => fn_expr.kind().to_string(),
    }
}

/// Create an application node.
pub fn make_apply(fn_expr: ExprRef, args: Vec<ExprRef>) -> Result<ExprRef, ConstructError> {
    Ok(Arc::new(Expression::Apply(Apply::new(fn_expr, args)?)))
}
