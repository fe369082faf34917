//! The shape model: how a value exposes itself to the engine.
//!
//! Every populatable type implements [`Node`], which hands out a [`Slot`]: a
//! typed mutable view tagged with the value's kind. Leaves are plain
//! references; compound kinds go through small object-safe traits so the
//! engine can walk them without knowing their concrete types.

use crate::field::Field;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::time::Duration;

/// A mutable view of one value, tagged by kind.
pub enum Slot<'a> {
    Bool(&'a mut bool),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    /// 64-bit integers also accept duration literals, in nanoseconds.
    I64(&'a mut i64),
    Isize(&'a mut isize),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    Usize(&'a mut usize),
    F32(&'a mut f32),
    F64(&'a mut f64),
    String(&'a mut String),
    Duration(&'a mut Duration),
    Record(&'a mut dyn DynRecord),
    Sequence(&'a mut dyn Sequence),
    Mapping(&'a mut dyn Mapping),
    Optional(&'a mut dyn Optional),
}

impl Slot<'_> {
    /// Name of the kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Slot::Bool(_) => "bool",
            Slot::I8(_) => "i8",
            Slot::I16(_) => "i16",
            Slot::I32(_) => "i32",
            Slot::I64(_) => "i64",
            Slot::Isize(_) => "isize",
            Slot::U8(_) => "u8",
            Slot::U16(_) => "u16",
            Slot::U32(_) => "u32",
            Slot::U64(_) => "u64",
            Slot::Usize(_) => "usize",
            Slot::F32(_) => "f32",
            Slot::F64(_) => "f64",
            Slot::String(_) => "string",
            Slot::Duration(_) => "duration",
            Slot::Record(_) => "record",
            Slot::Sequence(_) => "sequence",
            Slot::Mapping(_) => "mapping",
            Slot::Optional(_) => "optional",
        }
    }

    /// Whether the value still equals its type's default.
    pub fn is_zero(&self) -> bool {
        match self {
            Slot::Bool(v) => !**v,
            Slot::I8(v) => **v == 0,
            Slot::I16(v) => **v == 0,
            Slot::I32(v) => **v == 0,
            Slot::I64(v) => **v == 0,
            Slot::Isize(v) => **v == 0,
            Slot::U8(v) => **v == 0,
            Slot::U16(v) => **v == 0,
            Slot::U32(v) => **v == 0,
            Slot::U64(v) => **v == 0,
            Slot::Usize(v) => **v == 0,
            Slot::F32(v) => **v == 0.0,
            Slot::F64(v) => **v == 0.0,
            Slot::String(v) => v.is_empty(),
            Slot::Duration(v) => v.is_zero(),
            Slot::Record(record) => record.is_zero(),
            Slot::Sequence(sequence) => sequence.is_empty(),
            Slot::Mapping(mapping) => mapping.is_empty(),
            Slot::Optional(optional) => optional.is_none(),
        }
    }

    /// True for records, sequences and mappings.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Slot::Record(_) | Slot::Sequence(_) | Slot::Mapping(_)
        )
    }
}

impl fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slot").field(&self.kind()).finish()
    }
}

/// A value the engine can populate.
pub trait Node {
    fn slot(&mut self) -> Slot<'_>;
}

/// A record: a type that describes its own fields.
///
/// Fields are visited in the order returned. A field that is not listed is
/// never touched. Any `Record` that is also `Default + PartialEq +
/// DeserializeOwned` is a [`Node`]. Mark the type `#[serde(default)]` so
/// structured literals may omit fields.
///
/// ```rust
/// use serde::Deserialize;
/// use structer::{Field, Record};
///
/// #[derive(Debug, Default, PartialEq, Deserialize)]
/// #[serde(default)]
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// impl Record for Server {
///     fn fields(&mut self) -> Vec<Field<'_>> {
///         vec![
///             Field::new("host", &mut self.host).with_default("localhost"),
///             Field::new("port", &mut self.port)
///                 .with_default("8080")
///                 .with_env("PORT"),
///         ]
///     }
/// }
/// ```
pub trait Record {
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// Object-safe view of a [`Record`], used by [`Slot::Record`].
pub trait DynRecord: Record {
    fn is_zero(&self) -> bool;
    /// Replace the record with one decoded from a JSON object literal.
    fn decode(&mut self, literal: &str) -> serde_json::Result<()>;
}

impl<R> DynRecord for R
where
    R: Record + Default + PartialEq + DeserializeOwned,
{
    fn is_zero(&self) -> bool {
        *self == R::default()
    }

    fn decode(&mut self, literal: &str) -> serde_json::Result<()> {
        *self = serde_json::from_str(literal)?;
        Ok(())
    }
}

impl<R> Node for R
where
    R: Record + Default + PartialEq + DeserializeOwned,
{
    fn slot(&mut self) -> Slot<'_> {
        Slot::Record(self)
    }
}

// Boxed records are records, so `Option<Box<R>>` works as an optional field.
impl<R> Record for Box<R>
where
    R: Record + ?Sized,
{
    fn fields(&mut self) -> Vec<Field<'_>> {
        (**self).fields()
    }
}

/// A growable list of nodes.
pub trait Sequence {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    /// Replace the contents with a decoded JSON array literal.
    fn decode(&mut self, literal: &str) -> serde_json::Result<()>;

    fn elements(&mut self) -> Vec<Slot<'_>>;
}

impl<T> Sequence for Vec<T>
where
    T: Node + DeserializeOwned,
{
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn clear(&mut self) {
        Vec::clear(self)
    }

    fn decode(&mut self, literal: &str) -> serde_json::Result<()> {
        *self = serde_json::from_str(literal)?;
        Ok(())
    }

    fn elements(&mut self) -> Vec<Slot<'_>> {
        self.iter_mut().map(|element| element.slot()).collect()
    }
}

impl<T> Node for Vec<T>
where
    T: Node + DeserializeOwned,
{
    fn slot(&mut self) -> Slot<'_> {
        Slot::Sequence(self)
    }
}

/// A keyed collection of nodes.
pub trait Mapping {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    /// Replace the contents with a decoded JSON object literal.
    fn decode(&mut self, literal: &str) -> serde_json::Result<()>;

    /// Every value paired with its key rendered for diagnostics.
    fn entries(&mut self) -> Vec<(String, Slot<'_>)>;
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Eq + Hash + fmt::Debug + DeserializeOwned,
    V: Node + DeserializeOwned,
    S: BuildHasher + Default,
{
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }

    fn decode(&mut self, literal: &str) -> serde_json::Result<()> {
        *self = serde_json::from_str(literal)?;
        Ok(())
    }

    fn entries(&mut self) -> Vec<(String, Slot<'_>)> {
        self.iter_mut()
            .map(|(key, value)| (format!("{key:?}"), value.slot()))
            .collect()
    }
}

impl<K, V, S> Node for HashMap<K, V, S>
where
    K: Eq + Hash + fmt::Debug + DeserializeOwned,
    V: Node + DeserializeOwned,
    S: BuildHasher + Default,
{
    fn slot(&mut self) -> Slot<'_> {
        Slot::Mapping(self)
    }
}

impl<K, V> Mapping for BTreeMap<K, V>
where
    K: Ord + fmt::Debug + DeserializeOwned,
    V: Node + DeserializeOwned,
{
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn clear(&mut self) {
        BTreeMap::clear(self)
    }

    fn decode(&mut self, literal: &str) -> serde_json::Result<()> {
        *self = serde_json::from_str(literal)?;
        Ok(())
    }

    fn entries(&mut self) -> Vec<(String, Slot<'_>)> {
        self.iter_mut()
            .map(|(key, value)| (format!("{key:?}"), value.slot()))
            .collect()
    }
}

impl<K, V> Node for BTreeMap<K, V>
where
    K: Ord + fmt::Debug + DeserializeOwned,
    V: Node + DeserializeOwned,
{
    fn slot(&mut self) -> Slot<'_> {
        Slot::Mapping(self)
    }
}

/// An optional reference to another node.
pub trait Optional {
    fn is_none(&self) -> bool;

    /// Point at a freshly defaulted value.
    fn allocate(&mut self);

    fn get(&mut self) -> Option<Slot<'_>>;
}

impl<T> Optional for Option<T>
where
    T: Node + Default,
{
    fn is_none(&self) -> bool {
        Option::is_none(self)
    }

    fn allocate(&mut self) {
        *self = Some(T::default());
    }

    fn get(&mut self) -> Option<Slot<'_>> {
        self.as_mut().map(|value| value.slot())
    }
}

impl<T> Node for Option<T>
where
    T: Node + Default,
{
    fn slot(&mut self) -> Slot<'_> {
        Slot::Optional(self)
    }
}

macro_rules! leaf_nodes {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Node for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::$variant(self)
                }
            }
        )*
    };
}

leaf_nodes! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => String,
    Duration => Duration,
}
