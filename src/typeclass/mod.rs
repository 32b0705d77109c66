//! Algebraic type classes implemented by [`OrderedSet`](crate::ordered_set::OrderedSet).
//!
//! - [`TypeConstructor`]: names a container's element type (HKT emulation via GATs)
//! - [`Semigroup`]: associative `combine`, which is union for ordered sets
//! - [`Monoid`]: `Semigroup` with an identity, the empty set
//! - [`Foldable`]: ordered reduction to a summary value
//!
//! # Examples
//!
//! ```rust
//! use sorted_set::ordered_set::OrderedSet;
//! use sorted_set::typeclass::{Foldable, Monoid};
//!
//! let shards = vec![
//!     OrderedSet::from([9, 2]),
//!     OrderedSet::from([2, 5]),
//!     OrderedSet::from([1]),
//! ];
//! let merged = OrderedSet::combine_all(shards);
//! assert_eq!(merged.to_list(), vec![1, 2, 5, 9]);
//! ```

mod foldable;
mod higher;
mod monoid;
mod semigroup;

pub use foldable::Foldable;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
