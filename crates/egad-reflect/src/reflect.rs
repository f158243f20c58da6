// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Mapping from native Rust types to descriptors.

use std::any::Any;

use crate::descr::{TypeDescr, TypeNode};

/// A native type with a known descriptor.
pub trait Reflect: Any + Send + Sync {
    fn reflect() -> TypeDescr;
}

/// Descriptor for native type `T`.
pub fn type_of<T: Reflect>() -> TypeDescr {
    T::reflect()
}

macro_rules! reflect_scalar {
    ($($ty:ty => $node:expr),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn reflect() -> TypeDescr {
                    TypeDescr::new($node)
                }
            }
        )*
    };
}

reflect_scalar! {
    () => TypeNode::Unit,
    bool => TypeNode::Bool,
    i32 => TypeNode::Int32,
    i64 => TypeNode::Int,
    f32 => TypeNode::Float32,
    f64 => TypeNode::Float,
    String => TypeNode::String,
}

/// A native function pointer that can back a primitive.
pub trait NativeFn: Reflect + Copy {
    /// Entry address of the function.
    fn fn_addr(&self) -> *const ();
}

macro_rules! reflect_fn {
    ($($arg:ident),*) => {
        impl<R: Reflect, $($arg: Reflect),*> Reflect for fn($($arg),*) -> R {
            fn reflect() -> TypeDescr {
                TypeDescr::function(Some(R::reflect()), vec![$($arg::reflect()),*])
            }
        }

        impl<R: Reflect, $($arg: Reflect),*> NativeFn for fn($($arg),*) -> R {
            fn fn_addr(&self) -> *const () {
                *self as *const ()
            }
        }

        impl<R: Reflect, $($arg: Reflect),*> Reflect for extern "C" fn($($arg),*) -> R {
            fn reflect() -> TypeDescr {
                TypeDescr::function(Some(R::reflect()), vec![$($arg::reflect()),*])
            }
        }

        impl<R: Reflect, $($arg: Reflect),*> NativeFn for extern "C" fn($($arg),*) -> R {
            fn fn_addr(&self) -> *const () {
                *self as *const ()
            }
        }
    };
}

reflect_fn!();
reflect_fn!(A0);
reflect_fn!(A0, A1);
reflect_fn!(A0, A1, A2);
reflect_fn!(A0, A1, A2, A3);
