// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Type-erased references.

use std::any::Any;
use std::fmt;

use crate::descr::TypeDescr;
use crate::reflect::Reflect;

/// A borrowed value whose type is known only through its descriptor.
///
/// The handle never owns the value; it is valid while the owner is.
#[derive(Clone, Copy)]
pub struct TaggedRef<'a> {
    td: &'a TypeDescr,
    slot: &'a (dyn Any + Send + Sync),
}

impl<'a> TaggedRef<'a> {
    pub fn new(td: &'a TypeDescr, slot: &'a (dyn Any + Send + Sync)) -> Self {
        Self { td, slot }
    }

    pub fn td(&self) -> &'a TypeDescr {
        self.td
    }

    /// Address of the referenced storage.
    pub fn address(&self) -> *const () {
        self.slot as *const (dyn Any + Send + Sync) as *const ()
    }

    /// Recover the typed value.
    ///
    /// Succeeds only when `T` has exactly the carried descriptor.
    pub fn recover<T: Reflect>(&self) -> Option<&'a T> {
        if *self.td != T::reflect() {
            return None;
        }
        self.slot.downcast_ref::<T>()
    }
}

impl fmt::Debug for TaggedRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TaggedRef({} @ {:p})", self.td, self.address())
    }
}
