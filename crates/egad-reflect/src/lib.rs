// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Reflection layer for EGAD.
//!
//! Describes native Rust types with runtime descriptors and carries
//! type-erased references tagged with those descriptors.

mod descr;
mod reflect;
mod tagged;

pub use descr::{TypeDescr, TypeNode};
pub use reflect::{type_of, NativeFn, Reflect};
pub use tagged::TaggedRef;
