// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Capability interfaces implemented selectively by node kinds.

use std::fmt;

use egad_reflect::{TaggedRef, TypeDescr};

/// A node that always evaluates to a fixed, compile-time-known value.
pub trait ConstantInterface: fmt::Debug + Send + Sync {
    /// Descriptor for the constant's value.
    fn value_td(&self) -> &TypeDescr;

    /// Type-erased reference to the stored value.
    fn value_tp(&self) -> TaggedRef<'_>;

    /// Write the value for display.
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// A node that can be called with a fixed number of arguments.
pub trait FunctionInterface {
    fn name(&self) -> &str;

    /// Number of arguments expected by this function.
    fn n_arg(&self) -> usize;

    /// Type of argument `i`, or `None` if `i >= n_arg()`.
    fn fn_arg(&self, i: usize) -> Option<&TypeDescr>;

    fn fn_retval(&self) -> &TypeDescr;
}

/// Code generator hint for primitives that map to a backend builtin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intrinsic {
    /// Not a builtin; lower as a call to compiled code.
    #[default]
    None,
    FpAdd,
    FpSub,
    FpMul,
    FpDiv,
    FpNeg,
    FpSqrt,
    FpSin,
    FpCos,
    FpPow,
    IntAdd,
    IntSub,
    IntMul,
    IntSDiv,
    IntNeg,
}

impl Intrinsic {
    pub fn is_builtin(self) -> bool {
        self != Intrinsic::None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Intrinsic::None => "none",
            Intrinsic::FpAdd => "fp_add",
            Intrinsic::FpSub => "fp_sub",
            Intrinsic::FpMul => "fp_mul",
            Intrinsic::FpDiv => "fp_div",
            Intrinsic::FpNeg => "fp_neg",
            Intrinsic::FpSqrt => "fp_sqrt",
            Intrinsic::FpSin => "fp_sin",
            Intrinsic::FpCos => "fp_cos",
            Intrinsic::FpPow => "fp_pow",
            Intrinsic::IntAdd => "int_add",
            Intrinsic::IntSub => "int_sub",
            Intrinsic::IntMul => "int_mul",
            Intrinsic::IntSDiv => "int_sdiv",
            Intrinsic::IntNeg => "int_neg",
        }
    }
}

impl fmt::Display for Intrinsic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A constant naming a linkable native function.
pub trait PrimitiveInterface: FunctionInterface + ConstantInterface {
    /// Whether the code generator must declare the symbol explicitly.
    ///
    /// Functions the host process already exports are found through its
    /// symbol table; non-standard `extern` functions are not.
    fn explicit_symbol_def(&self) -> bool;

    /// Entry address of the native function, untyped.
    fn function_address(&self) -> *const ();

    fn intrinsic(&self) -> Intrinsic;

    fn as_function(&self) -> &dyn FunctionInterface;

    fn as_constant(&self) -> &dyn ConstantInterface;
}
