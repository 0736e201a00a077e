//! Process-environment access seam.

use std::env;

/// Read access to named environment variables.
///
/// Production code passes [`ProcessEnv`]; tests substitute an in-memory map
/// so resolution can be exercised without mutating the process environment.
pub trait EnvProvider {
    /// Return the value of `key`, or `None` when it is unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// [`EnvProvider`] backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}
