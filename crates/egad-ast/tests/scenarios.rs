// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! End-to-end construction, attachment and traversal of small trees.

use std::sync::Arc;
use std::thread;

use egad_ast::{
    make_apply, make_constant, make_lambda, make_primitive, make_var, BindErrorKind,
    BindingPath, ConstructError, EmptyEnv, ExprKind, Expression, FunctionInterface, Primitive,
};
use egad_reflect::{type_of, TypeDescr};

fn mul(x: f64, y: f64) -> f64 {
    x * y
}

fn native_sqrt(x: f64) -> f64 {
    x.sqrt()
}

fn count_nodes(e: &Expression) -> usize {
    let mut n = 0;
    e.visit_preorder(&mut |_| n += 1);
    n
}

#[test]
fn square_binds_parameter_slot() {
    let x = make_var("x", type_of::<f64>()).unwrap();
    let times = make_primitive("mul", mul as fn(f64, f64) -> f64).unwrap();
    let body = make_apply(times, vec![x.clone(), x.clone()]).unwrap();
    let square = make_lambda("square", vec![x.clone()], body).unwrap();

    square.attach_envs(&EmptyEnv).unwrap();

    let var = x.as_variable().unwrap();
    assert_eq!(var.binding_path(), Some(BindingPath::Local { link: 0, slot: 0 }));
    assert_eq!(square.as_lambda().unwrap().type_str(), "float(float)");
}

#[test]
fn sqrt_primitive_double_indirection() {
    let sqrt = make_primitive("sqrt", native_sqrt as fn(f64) -> f64).unwrap();
    let prim = sqrt.as_primitive().unwrap();

    assert_eq!(prim.name(), "sqrt");
    assert!(sqrt.value_type().is_function());
    assert_eq!(prim.n_arg(), 1);

    let tp = prim.value_tp();
    let slot: &fn(f64) -> f64 = tp.recover().unwrap();
    assert_eq!(*slot as *const (), native_sqrt as fn(f64) -> f64 as *const ());
    assert_ne!(tp.address(), native_sqrt as fn(f64) -> f64 as *const ());
}

#[test]
fn free_variable_fails_against_empty_env() {
    let y = make_var("y", type_of::<f64>()).unwrap();
    let err = y.attach_envs(&EmptyEnv).unwrap_err();

    assert_eq!(err.kind, BindErrorKind::Unbound { name: "y".to_string() });
    assert!(y.as_variable().unwrap().binding_path().is_none());
}

#[test]
fn nullary_lambda_over_constant() {
    let const1 = make_lambda("const1", vec![], make_constant(1i64)).unwrap();
    let lm = const1.as_function().unwrap();

    assert_eq!(lm.n_arg(), 0);
    assert_eq!(lm.fn_retval(), &type_of::<i64>());
    assert_eq!(lm.fn_retval().short_name(), "int");
    assert_eq!(const1.visit_preorder(&mut |_| {}), 2);
}

#[test]
fn visit_count_matches_reachable_nodes() {
    let a = make_var("a", type_of::<f64>()).unwrap();
    let b = make_var("b", type_of::<f64>()).unwrap();
    let times = make_primitive("mul", mul as fn(f64, f64) -> f64).unwrap();
    let inner = make_apply(times.clone(), vec![a.clone(), b.clone()]).unwrap();
    let outer = make_apply(times, vec![inner, make_constant(2.0f64)]).unwrap();
    let lm = make_lambda("f", vec![a, b], outer).unwrap();

    // lambda, a, b, outer apply, mul, inner apply, mul, a, b, 2.0
    assert_eq!(lm.visit_preorder(&mut |_| {}), 10);
    assert_eq!(count_nodes(&lm), 10);
}

#[test]
fn lambda_args_agree_with_params() {
    let x = make_var("x", type_of::<f64>()).unwrap();
    let n = make_var("n", type_of::<i64>()).unwrap();
    let flag = make_var("flag", type_of::<bool>()).unwrap();
    let lm = make_lambda("pick", vec![x, n, flag], make_constant(0i64)).unwrap();
    let lambda = lm.as_lambda().unwrap();

    assert_eq!(lambda.n_arg(), lambda.params().len());
    for (i, param) in lambda.params().iter().enumerate() {
        assert_eq!(lambda.fn_arg(i), Some(param.value_type()));
    }
}

#[test]
fn nested_lambda_reaches_outer_parameter() {
    let x = make_var("x", type_of::<f64>()).unwrap();
    let y = make_var("y", type_of::<f64>()).unwrap();
    let times = make_primitive("mul", mul as fn(f64, f64) -> f64).unwrap();
    let inner_body = make_apply(times, vec![x.clone(), y.clone()]).unwrap();
    let inner = make_lambda("scale_by_x", vec![y.clone()], inner_body).unwrap();
    let outer = make_lambda("make_scaler", vec![x.clone()], inner).unwrap();

    // x appears as outer parameter and inside the inner body; those resolve
    // to different paths, so sharing the node is rejected.
    let err = outer.attach_envs(&EmptyEnv).unwrap_err();
    assert!(matches!(err.kind, BindErrorKind::Rebound { .. }));

    let x_use = make_var("x", type_of::<f64>()).unwrap();
    let y2 = make_var("y", type_of::<f64>()).unwrap();
    let times = make_primitive("mul", mul as fn(f64, f64) -> f64).unwrap();
    let inner_body = make_apply(times, vec![x_use.clone(), y2.clone()]).unwrap();
    let inner = make_lambda("scale_by_x", vec![y2.clone()], inner_body).unwrap();
    let x_param = make_var("x", type_of::<f64>()).unwrap();
    let outer = make_lambda("make_scaler", vec![x_param.clone()], inner).unwrap();

    outer.attach_envs(&EmptyEnv).unwrap();
    assert_eq!(
        x_use.as_variable().unwrap().binding_path(),
        Some(BindingPath::Local { link: 1, slot: 0 })
    );
    assert_eq!(
        y2.as_variable().unwrap().binding_path(),
        Some(BindingPath::Local { link: 0, slot: 0 })
    );
    assert_eq!(
        x_param.as_variable().unwrap().binding_path(),
        Some(BindingPath::Local { link: 0, slot: 0 })
    );
}

#[test]
fn apply_checks_operator_and_arguments() {
    let x = make_var("x", type_of::<f64>()).unwrap();
    let n = make_var("n", type_of::<i64>()).unwrap();
    let times = make_primitive("mul", mul as fn(f64, f64) -> f64).unwrap();

    let err = make_apply(times.clone(), vec![x.clone()]).unwrap_err();
    assert_eq!(err, ConstructError::ArityMismatch { expected: 2, found: 1 });

    let err = make_apply(times, vec![x.clone(), n]).unwrap_err();
    assert_eq!(
        err,
        ConstructError::ArgTypeMismatch {
            index: 1,
            expected: "float".to_string(),
            found: "int".to_string(),
        }
    );

    let err = make_apply(x.clone(), vec![]).unwrap_err();
    assert_eq!(err, ConstructError::OperatorNotCallable { found: "float".to_string() });
}

#[test]
fn apply_of_function_typed_variable() {
    let f = make_var("f", type_of::<fn(f64) -> f64>()).unwrap();
    let x = make_var("x", type_of::<f64>()).unwrap();
    let call = make_apply(f.clone(), vec![x.clone()]).unwrap();
    assert_eq!(call.kind(), ExprKind::Apply);
    assert_eq!(call.value_type(), &type_of::<f64>());

    let lm = make_lambda("call_with", vec![f, x], call).unwrap();
    assert_eq!(lm.as_lambda().unwrap().type_str(), "float(float(float),float)");
    assert!(lm.get_free_variables().is_empty());
}

#[test]
fn primitive_construction_failures() {
    let err = Primitive::with_descr("sqrt", native_sqrt as fn(f64) -> f64, type_of::<f64>())
        .unwrap_err();
    assert!(matches!(err, ConstructError::NotAFunction { .. }));

    let no_ret = TypeDescr::function(None, vec![type_of::<f64>()]);
    let err = Primitive::with_descr("sqrt", native_sqrt as fn(f64) -> f64, no_ret).unwrap_err();
    assert!(matches!(err, ConstructError::MissingReturnType { .. }));
}

#[test]
fn mislabelled_primitive_never_reaches_apply() {
    let int = type_of::<i64>();
    let claimed = TypeDescr::function(Some(int.clone()), vec![int.clone(), int]);
    let err = Primitive::with_descr("sqrt", native_sqrt as fn(f64) -> f64, claimed).unwrap_err();
    assert_eq!(
        err,
        ConstructError::DescriptorMismatch {
            name: "sqrt".to_string(),
            expected: "float(float)".to_string(),
            found: "int(int,int)".to_string(),
        }
    );

    // The reflected descriptor still admits only the real arity.
    let sqrt = make_primitive("sqrt", native_sqrt as fn(f64) -> f64).unwrap();
    let err = make_apply(sqrt, vec![make_constant(1i64), make_constant(2i64)]).unwrap_err();
    assert!(matches!(err, ConstructError::ArityMismatch { .. }));
}

#[test]
fn shared_tree_read_concurrently() {
    let x = make_var("x", type_of::<f64>()).unwrap();
    let times = make_primitive("mul", mul as fn(f64, f64) -> f64).unwrap();
    let body = make_apply(times, vec![x.clone(), x.clone()]).unwrap();
    let square = make_lambda("square", vec![x], body).unwrap();
    square.attach_envs(&EmptyEnv).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tree = Arc::clone(&square);
            thread::spawn(move || (tree.visit_preorder(&mut |_| {}), tree.to_string()))
        })
        .collect();

    let expected = square.to_string();
    for handle in handles {
        let (n, text) = handle.join().unwrap();
        assert_eq!(n, 6);
        assert_eq!(text, expected);
    }
}
