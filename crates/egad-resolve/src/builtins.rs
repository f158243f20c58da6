// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Standard primitives.
//!
//! Each entry declares its code generator hints here, where it is adopted
//! as a language builtin.

use egad_ast::{Intrinsic, Primitive};
use egad_reflect::NativeFn;

use crate::error::ResolveError;
use crate::namespace::GlobalEnv;

fn add2_f64(x: f64, y: f64) -> f64 {
    x + y
}

fn sub2_f64(x: f64, y: f64) -> f64 {
    x - y
}

fn mul2_f64(x: f64, y: f64) -> f64 {
    x * y
}

fn div2_f64(x: f64, y: f64) -> f64 {
    x / y
}

fn neg_f64(x: f64) -> f64 {
    -x
}

fn add2_i64(x: i64, y: i64) -> i64 {
    x.wrapping_add(y)
}

fn mul2_i64(x: i64, y: i64) -> i64 {
    x.wrapping_mul(y)
}

fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

fn sin(x: f64) -> f64 {
    x.sin()
}

fn cos(x: f64) -> f64 {
    x.cos()
}

fn pow(x: f64, y: f64) -> f64 {
    x.powf(y)
}

/// Not in the host symbol table under a predictable name; must be declared.
extern "C" fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Names of the primitives installed by [`register_builtins`], in slot order.
pub const BUILTIN_NAMES: &[&str] = &[
    "add2_f64", "sub2_f64", "mul2_f64", "div2_f64", "neg_f64", "add2_i64", "mul2_i64", "sqrt",
    "sin", "cos", "pow", "clamp01",
];

/// Define the standard primitives in `env`.
pub fn register_builtins(env: &mut GlobalEnv) -> Result<(), ResolveError> {
    builtin(env, "add2_f64", add2_f64 as fn(f64, f64) -> f64, Intrinsic::FpAdd, false)?;
    builtin(env, "sub2_f64", sub2_f64 as fn(f64, f64) -> f64, Intrinsic::FpSub, false)?;
    builtin(env, "mul2_f64", mul2_f64 as fn(f64, f64) -> f64, Intrinsic::FpMul, false)?;
    builtin(env, "div2_f64", div2_f64 as fn(f64, f64) -> f64, Intrinsic::FpDiv, false)?;
    builtin(env, "neg_f64", neg_f64 as fn(f64) -> f64, Intrinsic::FpNeg, false)?;
    builtin(env, "add2_i64", add2_i64 as fn(i64, i64) -> i64, Intrinsic::IntAdd, false)?;
    builtin(env, "mul2_i64", mul2_i64 as fn(i64, i64) -> i64, Intrinsic::IntMul, false)?;
    builtin(env, "sqrt", sqrt as fn(f64) -> f64, Intrinsic::FpSqrt, false)?;
    builtin(env, "sin", sin as fn(f64) -> f64, Intrinsic::FpSin, false)?;
    builtin(env, "cos", cos as fn(f64) -> f64, Intrinsic::FpCos, false)?;
    builtin(env, "pow", pow as fn(f64, f64) -> f64, Intrinsic::FpPow, false)?;
    builtin(env, "clamp01", clamp01 as extern "C" fn(f64) -> f64, Intrinsic::None, true)?;
    Ok(())
}

fn builtin<F: NativeFn>(
    env: &mut GlobalEnv,
    name: &str,
    value: F,
    intrinsic: Intrinsic,
    explicit_symbol: bool,
) -> Result<u32, ResolveError> {
    let prim = Primitive::new(name, value)?
        .with_intrinsic(intrinsic)
        .with_explicit_symbol(explicit_symbol);
    env.define(prim.into_expr())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_builtins_registered_in_order() {
        let mut env = GlobalEnv::new();
        register_builtins(&mut env).unwrap();
        let names: Vec<&str> = env.iter().map(|(name, _)| name).collect();
        assert_eq!(names, BUILTIN_NAMES);
    }

    #[test]
    fn hints_are_declared_per_builtin() {
        let mut env = GlobalEnv::new();
        register_builtins(&mut env).unwrap();

        let mul = env.lookup("mul2_f64").unwrap().as_primitive().unwrap();
        assert_eq!(mul.intrinsic(), Intrinsic::FpMul);
        assert!(!mul.explicit_symbol_def());
        assert_eq!(mul.n_arg(), 2);

        let clamp = env.lookup("clamp01").unwrap().as_primitive().unwrap();
        assert_eq!(clamp.intrinsic(), Intrinsic::None);
        assert!(clamp.explicit_symbol_def());
        assert_eq!(clamp.function_address(), clamp01 as extern "C" fn(f64) -> f64 as *const ());
    }

    #[test]
    fn registering_twice_fails() {
        let mut env = GlobalEnv::new();
        register_builtins(&mut env).unwrap();
        assert!(register_builtins(&mut env).is_err());
    }
}
