//! The traversal engine.
//!
//! Walks a record depth-first. For each listed field it resolves a source
//! string, initialises the field if it still holds its zero value, then
//! recurses into whatever the field contains.

use crate::env::{resolve, Environment, ProcessEnv};
use crate::error::{Error, Result};
use crate::field::Field;
use crate::node::{DynRecord, Node, Slot};
use crate::parse;
use std::time::Duration;

/// The engine bound to an environment.
///
/// Holds no state between calls; one `Populator` can fill any number of
/// records.
#[derive(Debug, Clone, Default)]
pub struct Populator<E> {
    env: E,
}

impl<E: Environment> Populator<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Populate `target`, which must expose itself as a record.
    ///
    /// On [`Error::MalformedDefault`] the fields visited before the failure
    /// keep their new values.
    pub fn populate<T>(&self, target: &mut T) -> Result<()>
    where
        T: Node + ?Sized,
    {
        match target.slot() {
            Slot::Record(record) => self.populate_record(record, ""),
            other => Err(Error::InvalidArgument(other.kind().to_string())),
        }
    }

    fn populate_record(&self, record: &mut dyn DynRecord, path: &str) -> Result<()> {
        for field in record.fields() {
            let Field {
                name,
                default,
                env,
                slot,
            } = field;
            let value = resolve(default, env, &self.env);
            self.set_field(slot, &value, &join(path, name))?;
        }
        Ok(())
    }

    fn set_field(&self, mut slot: Slot<'_>, value: &str, path: &str) -> Result<()> {
        if !should_touch(&mut slot, value) {
            return Ok(());
        }
        let untouched = slot.is_zero();

        match slot {
            Slot::Record(record) => {
                if untouched && has_literal(value, "{}") {
                    record
                        .decode(value)
                        .map_err(|err| Error::malformed(path, err))?;
                }
                self.populate_record(record, path)
            }
            Slot::Optional(optional) => {
                if untouched {
                    optional.allocate();
                }
                match optional.get() {
                    Some(inner) if untouched || matches!(inner, Slot::Record(_)) => {
                        self.set_field(inner, value, path)
                    }
                    _ => Ok(()),
                }
            }
            Slot::Sequence(sequence) => {
                if untouched {
                    sequence.clear();
                    if has_literal(value, "[]") {
                        sequence
                            .decode(value)
                            .map_err(|err| Error::malformed(path, err))?;
                    }
                }
                // Elements have no descriptors of their own, so they are
                // seeded with the parent's resolved string.
                for (index, element) in sequence.elements().into_iter().enumerate() {
                    self.set_field(element, value, &format!("{path}[{index}]"))?;
                }
                Ok(())
            }
            Slot::Mapping(mapping) => {
                if untouched {
                    mapping.clear();
                    if has_literal(value, "{}") {
                        mapping
                            .decode(value)
                            .map_err(|err| Error::malformed(path, err))?;
                    }
                }
                for (key, entry) in mapping.entries() {
                    let path = format!("{path}[{key}]");
                    match entry {
                        Slot::Optional(optional) => {
                            if let Some(inner) = optional.get().filter(|s| s.is_container()) {
                                self.set_field(inner, "", &path)?;
                            }
                        }
                        entry if entry.is_container() => self.set_field(entry, "", &path)?,
                        _ => {}
                    }
                }
                Ok(())
            }
            leaf => {
                if untouched {
                    assign_leaf(leaf, value);
                }
                Ok(())
            }
        }
    }
}

/// Populate `target` from the process environment and its declared defaults.
pub fn set_defaults<T>(target: &mut T) -> Result<()>
where
    T: Node + ?Sized,
{
    Populator::new(ProcessEnv).populate(target)
}

/// Populate `target` from `env` and its declared defaults.
pub fn set_defaults_with<T, E>(target: &mut T, env: &E) -> Result<()>
where
    T: Node + ?Sized,
    E: Environment + ?Sized,
{
    Populator::new(env).populate(target)
}

/// Like [`set_defaults`], but panics on error.
pub fn must_set<T>(target: &mut T)
where
    T: Node + ?Sized,
{
    if let Err(err) = set_defaults(target) {
        panic!("structer: {err}");
    }
}

/// Like [`set_defaults_with`], but panics on error.
pub fn must_set_with<T, E>(target: &mut T, env: &E)
where
    T: Node + ?Sized,
    E: Environment + ?Sized,
{
    if let Err(err) = set_defaults_with(target, env) {
        panic!("structer: {err}");
    }
}

/// Whether `value` still holds its type's zero value, and so would be
/// filled in by a populate call.
pub fn can_update<T>(value: &T) -> bool
where
    T: Default + PartialEq,
{
    *value == T::default()
}

fn should_touch(slot: &mut Slot<'_>, value: &str) -> bool {
    match slot {
        Slot::Record(_) => true,
        Slot::Optional(optional) => {
            matches!(optional.get(), Some(Slot::Record(_))) || !value.is_empty()
        }
        Slot::Sequence(sequence) => !sequence.is_empty() || !value.is_empty(),
        Slot::Mapping(mapping) => !mapping.is_empty() || !value.is_empty(),
        _ => !value.is_empty(),
    }
}

fn has_literal(value: &str, empty: &str) -> bool {
    !value.is_empty() && value != empty
}

fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

// Unparseable input leaves the field untouched.
fn assign_leaf(slot: Slot<'_>, value: &str) {
    match slot {
        Slot::Bool(v) => assign(v, parse::parse_bool(value)),
        Slot::I8(v) => assign(v, signed(value)),
        Slot::I16(v) => assign(v, signed(value)),
        Slot::I32(v) => assign(v, signed(value)),
        Slot::I64(v) => assign(v, nanos_or_int(value)),
        Slot::Isize(v) => assign(v, signed(value)),
        Slot::U8(v) => assign(v, unsigned(value)),
        Slot::U16(v) => assign(v, unsigned(value)),
        Slot::U32(v) => assign(v, unsigned(value)),
        Slot::U64(v) => assign(v, unsigned(value)),
        Slot::Usize(v) => assign(v, unsigned(value)),
        Slot::F32(v) => assign(v, parse::parse_float(value)),
        Slot::F64(v) => assign(v, parse::parse_float(value)),
        Slot::String(v) => *v = value.to_string(),
        Slot::Duration(v) => assign(
            v,
            nanos_or_int(value)
                .and_then(|n| u64::try_from(n).ok())
                .map(Duration::from_nanos),
        ),
        Slot::Record(_) | Slot::Sequence(_) | Slot::Mapping(_) | Slot::Optional(_) => {}
    }
}

fn assign<T>(slot: &mut T, parsed: Option<T>) {
    if let Some(value) = parsed {
        *slot = value;
    }
}

fn signed<T: TryFrom<i64>>(value: &str) -> Option<T> {
    parse::parse_int(value).and_then(|n| T::try_from(n).ok())
}

fn unsigned<T: TryFrom<u64>>(value: &str) -> Option<T> {
    parse::parse_uint(value).and_then(|n| T::try_from(n).ok())
}

fn nanos_or_int(value: &str) -> Option<i64> {
    parse::parse_duration(value).or_else(|| parse::parse_int(value))
}
