// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Display implementations for expression nodes.

use std::fmt;

use crate::capability::{FunctionInterface, PrimitiveInterface};
use crate::*;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Constant(c) => {
                write!(f, "<Constant :type {} :value ", c.value_td())?;
                c.fmt_value(f)?;
                write!(f, ">")
            }
            Expression::Primitive(p) => fmt_primitive(&**p, f),
            Expression::Apply(ap) => write!(f, "{}", ap),
            Expression::Variable(var) => write!(f, "{}", var),
            Expression::Lambda(lm) => write!(f, "{}", lm),
        }
    }
}

fn fmt_primitive(p: &dyn PrimitiveInterface, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "<Primitive :name {} :type {} :value ", p.name(), p.value_td())?;
    p.fmt_value(f)?;
    if p.intrinsic().is_builtin() {
        write!(f, " :intrinsic {}", p.intrinsic())?;
    }
    write!(f, ">")
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Variable :name {} :type {}>", self.name(), self.value_type())
    }
}

impl fmt::Display for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Lambda :name {} :type {} :argv [", self.name(), self.type_str())?;
        for (i, param) in self.param_vars().enumerate() {
            if i > 0 { write!(f, " ")?; }
            write!(f, "{}", param.name())?;
        }
        write!(f, "] :body {}>", self.body())
    }
}

impl fmt::Display for Apply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Apply :type {} :fn {} :args [", self.value_type(), self.fn_expr())?;
        for (i, arg) in self.args().iter().enumerate() {
            if i > 0 { write!(f, " ")?; }
            write!(f, "{}", arg)?;
        }
        write!(f, "]>")
    }
}
