//! # structer
//!
//! Populate nested records from environment variables and declared defaults.
//!
//! A record lists its fields once, each with an optional default literal and
//! an optional environment variable. A single call then fills in every field
//! that still holds its zero value, recursing into nested records,
//! sequences, maps and optional values. Fields the caller already set are
//! never overwritten.
//!
//! ## Design Principles
//!
//! - **No IO**: the environment is injected through [`Environment`]; the
//!   library reads no files and does not log
//! - **Non-clobbering**: only zero-valued fields are initialised
//! - **Idempotent**: populating twice is the same as populating once
//! - **Closed dispatch**: every supported kind is a [`Slot`] variant
//!
//! ## Resolution
//!
//! For each field, a non-empty environment value wins over the declared
//! default (see [`resolve`]). The chosen string is then converted:
//!
//! - booleans, integers and floats are parsed; unparseable input leaves the
//!   field at zero
//! - `i64` and [`std::time::Duration`] accept duration literals (`"5s"`,
//!   `"2h30m"`) as well as plain integers (nanoseconds)
//! - strings are assigned as is
//! - sequences, maps and records are decoded from JSON literals; a malformed
//!   literal aborts with [`Error::MalformedDefault`]
//! - `None` optionals, boxed records included, are allocated with the inner
//!   type's default
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Deserialize;
//! use std::collections::HashMap;
//! use structer::{set_defaults_with, Field, Record};
//!
//! #[derive(Debug, Default, PartialEq, Deserialize)]
//! #[serde(default)]
//! struct Contact {
//!     number: String,
//! }
//!
//! impl Record for Contact {
//!     fn fields(&mut self) -> Vec<Field<'_>> {
//!         vec![Field::new("number", &mut self.number)]
//!     }
//! }
//!
//! #[derive(Debug, Default, PartialEq, Deserialize)]
//! #[serde(default)]
//! struct User {
//!     id: i32,
//!     name: String,
//!     contacts: Vec<Contact>,
//! }
//!
//! impl Record for User {
//!     fn fields(&mut self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::new("id", &mut self.id).with_default("0").with_env("E_ID"),
//!             Field::new("name", &mut self.name).with_env("E_NAME"),
//!             Field::new("contacts", &mut self.contacts)
//!                 .with_default(r#"[{"number":"817-273-3746"}]"#),
//!         ]
//!     }
//! }
//!
//! let env: HashMap<String, String> =
//!     [("E_ID".to_string(), "42".to_string())].into_iter().collect();
//!
//! let mut user = User::default();
//! set_defaults_with(&mut user, &env).unwrap();
//!
//! assert_eq!(user.id, 42);
//! assert_eq!(user.name, "");
//! assert_eq!(user.contacts[0].number, "817-273-3746");
//! ```
//!
//! ## Limitations
//!
//! Record schemas must be acyclic: traversal follows the declared shape
//! without a depth guard.

pub mod env;
pub mod error;
pub mod field;
pub mod node;
pub mod parse;
pub mod populate;

// Re-export main types at crate root
pub use env::{resolve, Environment, ProcessEnv};
pub use error::{Error, Result};
pub use field::Field;
pub use node::{DynRecord, Mapping, Node, Optional, Record, Sequence, Slot};
pub use populate::{
    can_update, must_set, must_set_with, set_defaults, set_defaults_with, Populator,
};
