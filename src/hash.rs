use alloc::string::String;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::hash::BuildHasher;

use foldhash::fast::FixedState;

/// Hash of the null value. A small prime, fixed forever.
pub const NULL_HASH: u64 = 17;

/// Hash of the absent marker. Distinct from [`NULL_HASH`].
pub const ABSENT_HASH: u64 = 31;

/// Fold accumulator start for arrays and records.
///
/// Distinct from [`NULL_HASH`] and [`ABSENT_HASH`] so an empty array or
/// record never collides with null or absent.
const FOLD_START: u64 = 53;

/// Fold step multiplier for arrays and records.
const FOLD_MULTIPLIER: u64 = 17;

/// Hashes a string with the given seed.
///
/// This is the base case every other hash reduces to: booleans and numbers
/// hash their canonical decimal form through this function. The hash is
/// deterministic for a given `(s, seed)` pair across calls and across
/// processes; there is no per-process randomization.
///
/// # Examples
///
/// ```rust
/// use struct_hash::hash::hash_str;
///
/// assert_eq!(hash_str("key", 0), hash_str("key", 0));
/// assert_ne!(hash_str("key", 0), hash_str("key", 1));
/// ```
pub fn hash_str(s: &str, seed: u64) -> u64 {
    FixedState::with_seed(seed).hash_one(s)
}

/// Derives the child seed used when descending into an array or record.
///
/// Re-hashes the current seed so nesting depth perturbs the hashes of
/// contained values: `[["a"]]` and `["a"]` do not reduce to the same fold.
fn derive_seed(seed: u64) -> u64 {
    hash_str(&seed.to_string(), seed)
}

/// Left fold over a sequence of hashable values.
///
/// `acc = acc * 17 + hash(item, derived_seed)`, starting from a fixed
/// constant, with wrapping arithmetic throughout. Order-sensitive: callers
/// hashing records must iterate fields in ascending name order.
pub(crate) fn fold_hash<'a, T, I>(items: I, seed: u64) -> u64
where
    T: StructuralHash + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let derived = derive_seed(seed);
    items.into_iter().fold(FOLD_START, |acc, item| {
        acc.wrapping_mul(FOLD_MULTIPLIER)
            .wrapping_add(item.structural_hash(derived))
    })
}

/// A value that can be hashed by structure rather than identity.
///
/// The contract is paired with [`StructuralEq`](crate::StructuralEq): two
/// values that compare structurally equal **must** produce the same hash for
/// the same seed. The converse is not required; collisions are permitted and
/// resolved by the table's in-bucket equality scan.
///
/// Implementations must be deterministic: the same value and seed always
/// yield the same `u64`, across calls and across processes. Arithmetic
/// overflow wraps; it is not an error.
///
/// A hand-written implementation that violates the pairing (equal values
/// hashing differently) is a caller bug the table cannot detect: it
/// manifests as present keys appearing absent, not as a panic.
///
/// # Examples
///
/// ```rust
/// use struct_hash::StructuralHash;
///
/// // Numbers hash by their decimal form, so the same value hashes the
/// // same regardless of integer width.
/// assert_eq!(7u8.structural_hash(0), 7i64.structural_hash(0));
/// ```
pub trait StructuralHash {
    /// Computes the structural hash of `self` under `seed`.
    fn structural_hash(&self, seed: u64) -> u64;
}

impl StructuralHash for str {
    fn structural_hash(&self, seed: u64) -> u64 {
        hash_str(self, seed)
    }
}

impl StructuralHash for String {
    fn structural_hash(&self, seed: u64) -> u64 {
        hash_str(self, seed)
    }
}

impl StructuralHash for bool {
    fn structural_hash(&self, seed: u64) -> u64 {
        hash_str(if *self { "1" } else { "0" }, seed)
    }
}

macro_rules! impl_structural_hash_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StructuralHash for $ty {
                /// Hashes the decimal string form, so numerically equal
                /// values of different widths hash identically.
                fn structural_hash(&self, seed: u64) -> u64 {
                    hash_str(&self.to_string(), seed)
                }
            }
        )*
    };
}

impl_structural_hash_numeric!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

impl<T: StructuralHash> StructuralHash for [T] {
    fn structural_hash(&self, seed: u64) -> u64 {
        fold_hash(self, seed)
    }
}

impl<T: StructuralHash> StructuralHash for Vec<T> {
    fn structural_hash(&self, seed: u64) -> u64 {
        fold_hash(self, seed)
    }
}

impl<T: StructuralHash + ?Sized> StructuralHash for &T {
    fn structural_hash(&self, seed: u64) -> u64 {
        (**self).structural_hash(seed)
    }
}
