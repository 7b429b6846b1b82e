use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;

pub(crate) use rustc_hash::FxHashMap;

/// Use indexmap for fast lookups and rustc_hash for fast hashing
/// The index of an entry doubles as a stable handle for the lifetime of one search
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
