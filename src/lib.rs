#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Deep structural equality over composite values.
///
/// This module provides the `StructuralEq` trait used by the hash table to
/// disambiguate keys that share a bucket, and implementations for primitive
/// and sequence types.
pub mod equals;

/// Deterministic, seeded structural hashing over composite values.
///
/// This module provides the `StructuralHash` trait used by the hash table
/// for bucket placement, and implementations for primitive and sequence
/// types.
pub mod hash;

pub mod hash_set;

pub mod hash_table;

/// The closed composite value universe: null, absent, booleans, numbers,
/// big integers, strings, arrays, and records.
pub mod value;

#[cfg(test)]
mod proptests;

pub use equals::StructuralEq;
pub use hash::StructuralHash;
pub use hash_set::HashSet;
pub use hash_table::HashTable;
pub use value::Value;
