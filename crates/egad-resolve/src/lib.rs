// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Global namespace and environment attachment for EGAD trees.
//!
//! Gives every variable in a finished tree its binding path, and keeps
//! top-level function names unique so generated code can be linked by name.

mod error;
mod namespace;
pub mod builtins;

pub use error::{ResolveError, ResolveErrorKind};
pub use namespace::GlobalEnv;

use egad_ast::{Environment, Expression};
use tracing::debug;

/// Attach one complete tree against `env`.
///
/// Construction of the tree must be finished; attachment must not be
/// interleaved with building further nodes on top of it.
pub fn attach(root: &Expression, env: &dyn Environment) -> Result<(), ResolveError> {
    debug!(kind = %root.kind(), "attaching tree");
    root.attach_envs(env)
        .map_err(|e| ResolveError::bind(definition_name(root), e))?;
    debug!("tree attached");
    Ok(())
}

fn definition_name(root: &Expression) -> String {
    match root.as_function() {
        Ok(func) => func.name().to_string(),
        Err(_) => format!("<{}>", root.kind()),
    }
}
