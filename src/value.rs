use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::equals::StructuralEq;
use crate::hash::ABSENT_HASH;
use crate::hash::NULL_HASH;
use crate::hash::StructuralHash;
use crate::hash::fold_hash;

/// A composite value that can be hashed and compared by structure.
///
/// `Value` is the closed universe the structural hash and equality
/// functions are defined over: it contains primitives and is closed under
/// arrays of itself and records of itself. Use it when keys are built at
/// runtime from nested data; plain Rust types (integers, strings, `Vec`s)
/// implement [`StructuralHash`] and [`StructuralEq`] directly and do not
/// need to be wrapped.
///
/// Records store their fields in a `BTreeMap`, so field order is canonical
/// by construction: two records with the same fields built in different
/// orders are the same value, hash identically, and compare equal.
///
/// Values own their children outright, so cyclic values are unrepresentable
/// and every hash or equality traversal terminates.
///
/// # Numeric representations
///
/// `Number` and `BigInt` are distinct categories: `Value::number(5.0)` and
/// `Value::bigint(5)` are **not** equal, although they hash identically
/// (both hash the decimal form `"5"`). That is a permitted collision, not
/// an equality; the in-bucket equality scan keeps the two as separate keys.
///
/// `Number` equality is native `f64` equality, so `NaN` is unequal to
/// itself.
///
/// # Examples
///
/// ```rust
/// use struct_hash::StructuralEq;
/// use struct_hash::Value;
///
/// let a = Value::record([("name", Value::from("ada")), ("id", Value::number(1.0))]);
/// let b = Value::record([("id", Value::number(1.0)), ("name", Value::from("ada"))]);
/// assert!(a.structural_eq(&b));
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// The null value.
    Null,
    /// The absent marker, distinct from `Null`.
    Absent,
    /// A boolean.
    Bool(bool),
    /// A double-precision number.
    Number(f64),
    /// An integer outside the range a `Number` represents exactly.
    BigInt(i128),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A name-to-value mapping with canonically sorted field names.
    Record(BTreeMap<String, Value>),
}

impl Value {
    /// Creates a `Number` value.
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    /// Creates a `BigInt` value.
    pub fn bigint(n: i128) -> Self {
        Value::BigInt(n)
    }

    /// Creates an `Array` value from anything iterable over values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use struct_hash::Value;
    ///
    /// let v = Value::array([Value::number(1.0), Value::from("two")]);
    /// ```
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Array(items.into_iter().collect())
    }

    /// Creates a `Record` value from `(name, value)` pairs.
    ///
    /// Later duplicates of a field name overwrite earlier ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use struct_hash::Value;
    ///
    /// let v = Value::record([("x", Value::number(1.0)), ("y", Value::number(2.0))]);
    /// ```
    pub fn record<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Record(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Value::BigInt(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl StructuralHash for Value {
    /// Dispatches on the value's category.
    ///
    /// Primitives hash their canonical string form; arrays fold over their
    /// elements in order; records fold over their field values in ascending
    /// field-name order, so declaration order never reaches the hash.
    fn structural_hash(&self, seed: u64) -> u64 {
        match self {
            Value::Null => NULL_HASH,
            Value::Absent => ABSENT_HASH,
            Value::Bool(b) => b.structural_hash(seed),
            Value::Number(n) => n.structural_hash(seed),
            Value::BigInt(n) => n.structural_hash(seed),
            Value::String(s) => s.structural_hash(seed),
            Value::Array(items) => fold_hash(items.iter(), seed),
            Value::Record(fields) => fold_hash(fields.values(), seed),
        }
    }
}

impl StructuralEq for Value {
    /// Category first, then structure.
    ///
    /// Null and absent only equal themselves. Mismatched categories are
    /// never equal. Arrays compare index-aligned, records by field-name set
    /// and per-field values, primitives by native value equality.
    fn structural_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Absent, Value::Absent) => true,
            (Value::Bool(l), Value::Bool(r)) => l == r,
            (Value::Number(l), Value::Number(r)) => l == r,
            (Value::BigInt(l), Value::BigInt(r)) => l == r,
            (Value::String(l), Value::String(r)) => l == r,
            (Value::Array(l), Value::Array(r)) => l.structural_eq(r),
            (Value::Record(l), Value::Record(r)) => {
                l.len() == r.len()
                    && l.iter()
                        .zip(r.iter())
                        .all(|((lk, lv), (rk, rv))| lk == rk && lv.structural_eq(rv))
            }
            _ => false,
        }
    }
}

impl PartialEq for Value {
    /// Delegates to [`StructuralEq`], so `==` on values means structural
    /// equality.
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}

impl fmt::Display for Value {
    /// Renders a JSON-like diagnostic form. Not a serialization format:
    /// `Absent` has no JSON counterpart and prints as `absent`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Absent => f.write_str("absent"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::BigInt(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Record(fields) => {
                f.write_str("{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{name:?}:{value}")?;
                }
                f.write_str("}")
            }
        }
    }
}
