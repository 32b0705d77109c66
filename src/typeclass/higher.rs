//! Type constructor emulation for container-generic traits.
//!
//! Rust has no higher-kinded types. [`TypeConstructor`] names a container's
//! element type and the same container over another element type through
//! Generic Associated Types, which is enough for [`Foldable`](super::Foldable)
//! to talk about "the elements of `Self`".

use crate::ordered_set::OrderedSet;

/// A container parameterized by a single element type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
///
/// # Examples
///
/// ```rust
/// use sorted_set::ordered_set::OrderedSet;
/// use sorted_set::typeclass::TypeConstructor;
///
/// fn element_of<F: TypeConstructor<Inner = i32>>(_: &F) {}
///
/// element_of(&OrderedSet::from([1, 2, 3]));
/// ```
pub trait TypeConstructor {
    /// The element type of this container.
    type Inner;

    /// The same container holding elements of type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for OrderedSet<T> {
    type Inner = T;
    type WithType<B> = OrderedSet<B>;
}
