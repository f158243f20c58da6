// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Native function literals.

use std::fmt;
use std::sync::Arc;

use egad_reflect::{NativeFn, TaggedRef, TypeDescr};

use crate::capability::{ConstantInterface, FunctionInterface, Intrinsic, PrimitiveInterface};
use crate::error::ConstructError;
use crate::kind::ExprKind;
use crate::{ExprRef, Expression};

/// A constant that refers to a known native function.
///
/// Two flavors:
/// 1. the function maps to a backend builtin (see [`Intrinsic`]);
/// 2. the function is compiled code invoked through its address.
///
/// The erased handle from [`value_tp`](ConstantInterface::value_tp) refers to
/// the stored pointer, not to the function itself: dereference it once to
/// obtain the callable address.
pub struct Primitive<F> {
    /// e.g. `+`, `sqrt`
    name: String,
    value_td: TypeDescr,
    /// Return component of `value_td`.
    retval: TypeDescr,
    value: F,
    explicit_symbol_def: bool,
    intrinsic: Intrinsic,
}

impl<F: NativeFn> Primitive<F> {
    /// Adopt `value` as a primitive named `name`, typed by reflection.
    pub fn new(name: impl Into<String>, value: F) -> Result<Self, ConstructError> {
        Self::with_descr(name, value, F::reflect())
    }

    /// Adopt `value` with an explicitly supplied descriptor.
    ///
    /// `value_td` must describe `F`; its return component may only be
    /// absent, which is rejected as [`ConstructError::MissingReturnType`].
    pub fn with_descr(
        name: impl Into<String>,
        value: F,
        value_td: TypeDescr,
    ) -> Result<Self, ConstructError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConstructError::EmptyName { kind: ExprKind::Primitive });
        }
        if !value_td.is_function() {
            return Err(ConstructError::NotAFunction {
                name,
                found: value_td.short_name(),
            });
        }
        let native_td = F::reflect();
        if value_td.fn_args() != native_td.fn_args() {
            return Err(ConstructError::DescriptorMismatch {
                name,
                expected: native_td.short_name(),
                found: value_td.short_name(),
            });
        }
        let Some(retval) = value_td.return_type().cloned() else {
            return Err(ConstructError::MissingReturnType {
                name,
                found: value_td.short_name(),
            });
        };
        if value_td != native_td {
            return Err(ConstructError::DescriptorMismatch {
                name,
                expected: native_td.short_name(),
                found: value_td.short_name(),
            });
        }

        Ok(Self {
            name,
            value_td,
            retval,
            value,
            explicit_symbol_def: false,
            intrinsic: Intrinsic::None,
        })
    }

    pub fn with_explicit_symbol(mut self, explicit: bool) -> Self {
        self.explicit_symbol_def = explicit;
        self
    }

    pub fn with_intrinsic(mut self, intrinsic: Intrinsic) -> Self {
        self.intrinsic = intrinsic;
        self
    }

    pub fn value(&self) -> F {
        self.value
    }

    /// Storage location of the function pointer.
    pub fn value_slot(&self) -> &F {
        &self.value
    }

    pub fn into_expr(self) -> ExprRef {
        Arc::new(Expression::Primitive(Box::new(self)))
    }
}

impl<F: NativeFn> FunctionInterface for Primitive<F> {
    fn name(&self) -> &str {
        &self.name
    }

    fn n_arg(&self) -> usize {
        self.value_td.n_fn_arg()
    }

    fn fn_arg(&self, i: usize) -> Option<&TypeDescr> {
        self.value_td.fn_arg(i)
    }

    fn fn_retval(&self) -> &TypeDescr {
        &self.retval
    }
}

impl<F: NativeFn> ConstantInterface for Primitive<F> {
    fn value_td(&self) -> &TypeDescr {
        &self.value_td
    }

    fn value_tp(&self) -> TaggedRef<'_> {
        TaggedRef::new(&self.value_td, &self.value)
    }

    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:p}", self.value.fn_addr())
    }
}

impl<F: NativeFn> PrimitiveInterface for Primitive<F> {
    fn explicit_symbol_def(&self) -> bool {
        self.explicit_symbol_def
    }

    fn function_address(&self) -> *const () {
        self.value.fn_addr()
    }

    fn intrinsic(&self) -> Intrinsic {
        self.intrinsic
    }

    fn as_function(&self) -> &dyn FunctionInterface {
        self
    }

    fn as_constant(&self) -> &dyn ConstantInterface {
        self
    }
}

impl<F: NativeFn> fmt::Debug for Primitive<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Primitive")
            .field("name", &self.name)
            .field("value_td", &self.value_td)
            .field("value", &self.value.fn_addr())
            .field("explicit_symbol_def", &self.explicit_symbol_def)
            .field("intrinsic", &self.intrinsic)
            .finish()
    }
}

/// Adopt function `value` as a callable primitive named `name`.
pub fn make_primitive<F: NativeFn>(
    name: impl Into<String>,
    value: F,
) -> Result<ExprRef, ConstructError> {
    Ok(Primitive::new(name, value)?.into_expr())
}
