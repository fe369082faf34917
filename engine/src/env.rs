//! Environment lookup and the per-field value resolver.
//!
//! The engine never reads `std::env` directly. It receives an
//! [`Environment`] so that callers (and tests) decide where values come from.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A read-only `name -> value` lookup.
pub trait Environment {
    /// Look up a variable. `None` means "not set".
    fn var(&self, name: &str) -> Option<String>;
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl<S: BuildHasher> Environment for HashMap<String, String, S> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Pick the string a field should be populated from.
///
/// A non-empty environment value under `binding` wins; otherwise `default`
/// is returned as is, possibly empty. Unset and empty variables are treated
/// the same.
pub fn resolve<E>(default: &str, binding: &str, env: &E) -> String
where
    E: Environment + ?Sized,
{
    if !binding.is_empty() {
        if let Some(value) = env.var(binding).filter(|v| !v.is_empty()) {
            return value;
        }
    }
    default.to_string()
}
