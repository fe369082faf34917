//! Field descriptors.

use crate::node::{Node, Slot};

/// One populatable field of a record.
///
/// Built inside [`Record::fields`](crate::Record::fields), borrowing the
/// field's storage for the duration of a single traversal.
#[derive(Debug)]
pub struct Field<'a> {
    pub(crate) name: &'a str,
    pub(crate) default: &'a str,
    pub(crate) env: &'a str,
    pub(crate) slot: Slot<'a>,
}

impl<'a> Field<'a> {
    /// Describe a field with no default and no environment binding.
    ///
    /// Such a field is still visited: nested records are recursed into and
    /// populated from their own descriptors.
    pub fn new<T>(name: &'a str, value: &'a mut T) -> Self
    where
        T: Node + ?Sized,
    {
        Self {
            name,
            default: "",
            env: "",
            slot: value.slot(),
        }
    }

    /// Literal used when the environment does not provide a value.
    pub fn with_default(mut self, literal: &'a str) -> Self {
        self.default = literal;
        self
    }

    /// Environment variable that overrides the default.
    pub fn with_env(mut self, binding: &'a str) -> Self {
        self.env = binding;
        self
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn default_literal(&self) -> &str {
        self.default
    }

    pub fn env_binding(&self) -> &str {
        self.env
    }

    pub fn kind(&self) -> &'static str {
        self.slot.kind()
    }
}
