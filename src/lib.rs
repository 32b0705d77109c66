//! # sorted-set
//!
//! An ordered set of unique elements backed by a canonical sorted sequence.
//!
//! ## Overview
//!
//! [`OrderedSet`](ordered_set::OrderedSet) keeps its members as a strictly
//! ascending sequence. That single invariant gives:
//!
//! - **Deterministic iteration**: always ascending, whatever the construction path
//! - **Structural equality**: equal member sets have identical storage
//! - **Linear set algebra**: union, intersection, difference, subset and
//!   disjointness are two-pointer merge scans in O(n + m)
//! - **Explicit failure**: `min`/`max` on an empty set return
//!   [`EmptyCollectionError`](error::EmptyCollectionError)
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): `Semigroup`, `Monoid` and `Foldable` instances
//! - `serde`: serialization as the canonical ascending sequence
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sorted_set::prelude::*;
//!
//! let a = OrderedSet::from_sequence([3, 1, 2, 3]);
//! let b = OrderedSet::from([2, 3, 4]);
//!
//! assert_eq!(a.difference(&b).as_slice(), &[1]);
//! assert_eq!(b.difference(&a).as_slice(), &[4]);
//! assert!(OrderedSet::from([4]).is_subset(&b));
//! assert_eq!(a.max(), Ok(&3));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use sorted_set::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{EmptyCollectionError, SetError};
    pub use crate::ordered_set::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod error;
pub mod ordered_set;

#[cfg(feature = "typeclass")]
pub mod typeclass;
