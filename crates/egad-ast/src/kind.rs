// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Expression kind tags.

use std::fmt;

/// Identifies the concrete variant of an [`Expression`](crate::Expression).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    /// Literal constant
    Constant,
    /// Constant referring to a linkable native function
    Primitive,
    /// Function call
    Apply,
    /// Variable reference
    Variable,
    /// Function definition
    Lambda,
}

impl ExprKind {
    pub const ALL: [ExprKind; 5] = [
        ExprKind::Constant,
        ExprKind::Primitive,
        ExprKind::Apply,
        ExprKind::Variable,
        ExprKind::Lambda,
    ];

    /// Number of expression kinds, for array sizing.
    pub const COUNT: usize = Self::ALL.len();

    pub fn as_str(self) -> &'static str {
        match self {
            ExprKind::Constant => "constant",
            ExprKind::Primitive => "primitive",
            ExprKind::Apply => "apply",
            ExprKind::Variable => "variable",
            ExprKind::Lambda => "lambda",
        }
    }

    /// True if every node of kind `self` is also a node of kind `other`.
    pub fn refines(self, other: ExprKind) -> bool {
        self == other || (self == ExprKind::Primitive && other == ExprKind::Constant)
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
