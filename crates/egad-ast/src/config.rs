// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Rendering options for the outline printer.

/// Options for [`pretty::render`](crate::pretty::render).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrettyConfig {
    pub indent_width: usize,
    /// Append `: type` to every node.
    pub show_types: bool,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            show_types: true,
        }
    }
}
