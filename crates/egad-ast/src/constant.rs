// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Literal constants.

use std::fmt;
use std::sync::Arc;

use egad_reflect::{Reflect, TaggedRef, TypeDescr};

use crate::capability::ConstantInterface;
use crate::{ExprRef, Expression};

/// A literal value of a reflected native type.
#[derive(Debug)]
pub struct Constant<T> {
    value_td: TypeDescr,
    value: T,
}

impl<T: Reflect + fmt::Debug> Constant<T> {
    pub fn new(value: T) -> Self {
        Self {
            value_td: T::reflect(),
            value,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Reflect + fmt::Debug> ConstantInterface for Constant<T> {
    fn value_td(&self) -> &TypeDescr {
        &self.value_td
    }

    fn value_tp(&self) -> TaggedRef<'_> {
        TaggedRef::new(&self.value_td, &self.value)
    }

    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.value)
    }
}

/// Create a constant node holding `value`.
pub fn make_constant<T: Reflect + fmt::Debug>(value: T) -> ExprRef {
    Arc::new(Expression::Constant(Box::new(Constant::new(value))))
}
