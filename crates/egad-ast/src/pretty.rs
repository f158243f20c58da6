// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Multi-line tree rendering, one node per line.

use std::fmt;

use crate::capability::FunctionInterface;
use crate::config::PrettyConfig;
use crate::Expression;

/// Render `expr` as an indented outline.
pub fn render(expr: &Expression, config: &PrettyConfig) -> String {
    let mut printer = Printer {
        out: String::new(),
        config,
    };
    printer.node(expr, 0);
    printer.out
}

struct Printer<'a> {
    out: String,
    config: &'a PrettyConfig,
}

impl Printer<'_> {
    fn node(&mut self, expr: &Expression, depth: usize) {
        let indent = depth * self.config.indent_width;
        self.out.push_str(&" ".repeat(indent));

        let line = match expr {
            Expression::Constant(c) => format!("const {}", ConstValue(&**c)),
            Expression::Primitive(p) => format!("primitive {}", p.name()),
            Expression::Apply(_) => "apply".to_string(),
            Expression::Variable(var) => match var.binding_path() {
                Some(path) => format!("var {} @ {}", var.name(), path),
                None => format!("var {}", var.name()),
            },
            Expression::Lambda(lm) => format!("lambda {}", lm.name()),
        };
        self.out.push_str(&line);
        if self.config.show_types {
            self.out.push_str(&format!(" : {}", expr.value_type()));
        }
        self.out.push('\n');

        for child in expr.children() {
            self.node(child, depth + 1);
        }
    }
}

struct ConstValue<'a>(&'a dyn crate::capability::ConstantInterface);

impl fmt::Display for ConstValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_value(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{make_apply, make_constant, make_lambda, make_primitive, make_var, EmptyEnv};
    use egad_reflect::type_of;

    fn mul(x: f64, y: f64) -> f64 {
        x * y
    }

    fn square() -> crate::ExprRef {
        let x = make_var("x", type_of::<f64>()).unwrap();
        let times = make_primitive("*", mul as fn(f64, f64) -> f64).unwrap();
        let body = make_apply(times, vec![x.clone(), x.clone()]).unwrap();
        make_lambda("square", vec![x], body).unwrap()
    }

    #[test]
    fn outline_with_types() {
        let text = render(&square(), &PrettyConfig::default());
        assert_eq!(
            text,
            "lambda square : float(float)\n\
             \x20 var x : float\n\
             \x20 apply : float\n\
             \x20   primitive * : float(float,float)\n\
             \x20   var x : float\n\
             \x20   var x : float\n"
        );
    }

    #[test]
    fn outline_shows_binding_paths_once_attached() {
        let tree = square();
        tree.attach_envs(&EmptyEnv).unwrap();
        let config = PrettyConfig { indent_width: 1, show_types: false };
        let text = render(&tree, &config);
        assert_eq!(
            text,
            "lambda square\n var x @ local(link=0, slot=0)\n apply\n  primitive *\n  var x @ local(link=0, slot=0)\n  var x @ local(link=0, slot=0)\n"
        );
    }

    #[test]
    fn constant_line() {
        let text = render(&make_constant(3i64), &PrettyConfig::default());
        assert_eq!(text, "const 3 : int\n");
    }
}
