// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Type descriptors.

use std::fmt;
use std::sync::Arc;

/// Shape of a reflected type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeNode {
    /// The empty tuple
    Unit,
    Bool,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int,
    /// 32-bit float
    Float32,
    /// 64-bit float
    Float,
    /// Owned UTF-8 string
    String,
    /// Function pointer type.
    ///
    /// `ret` is `None` when the return type could not be described.
    Function {
        ret: Option<TypeDescr>,
        args: Vec<TypeDescr>,
    },
    /// A type known only by name (opaque to the reflection layer).
    Opaque(std::string::String),
}

/// Descriptor for a reflected type.
///
/// Cheap to clone; compares structurally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescr(Arc<TypeNode>);

impl TypeDescr {
    pub fn new(node: TypeNode) -> Self {
        Self(Arc::new(node))
    }

    pub fn unit() -> Self {
        Self::new(TypeNode::Unit)
    }

    /// Describe a function type returning `ret` and taking `args`.
    pub fn function(ret: Option<TypeDescr>, args: Vec<TypeDescr>) -> Self {
        Self::new(TypeNode::Function { ret, args })
    }

    pub fn opaque(name: impl Into<std::string::String>) -> Self {
        Self::new(TypeNode::Opaque(name.into()))
    }

    pub fn node(&self) -> &TypeNode {
        &self.0
    }

    pub fn is_function(&self) -> bool {
        matches!(*self.0, TypeNode::Function { .. })
    }

    /// Return type of a function descriptor.
    ///
    /// `None` for non-function types, and for function types whose return
    /// component is absent.
    pub fn return_type(&self) -> Option<&TypeDescr> {
        match &*self.0 {
            TypeNode::Function { ret, .. } => ret.as_ref(),
            _ => None,
        }
    }

    /// Number of arguments of a function descriptor (0 for other types).
    pub fn n_fn_arg(&self) -> usize {
        self.fn_args().len()
    }

    /// Argument `i` of a function descriptor.
    pub fn fn_arg(&self, i: usize) -> Option<&TypeDescr> {
        self.fn_args().get(i)
    }

    pub fn fn_args(&self) -> &[TypeDescr] {
        match &*self.0 {
            TypeNode::Function { args, .. } => args,
            _ => &[],
        }
    }

    /// Short human-readable name, e.g. `float` or `float(float,int)`.
    pub fn short_name(&self) -> std::string::String {
        self.to_string()
    }
}

impl fmt::Display for TypeDescr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.0 {
            TypeNode::Unit => write!(f, "unit"),
            TypeNode::Bool => write!(f, "bool"),
            TypeNode::Int32 => write!(f, "int32"),
            TypeNode::Int => write!(f, "int"),
            TypeNode::Float32 => write!(f, "float32"),
            TypeNode::Float => write!(f, "float"),
            TypeNode::String => write!(f, "string"),
            TypeNode::Function { ret, args } => {
                match ret {
                    Some(ret) => write!(f, "{}", ret)?,
                    None => write!(f, "?")?,
                }
                write!(f, "(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 { write!(f, ",")?; }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            TypeNode::Opaque(name) => write!(f, "{}", name),
        }
    }
}
