//! Plain struct definitions, kept apart from their impls so the bincode and serde derive
//! expansions stay out of the coverage of `linalg.rs`.

use serde::{Deserialize, Serialize};

/// A 2D vector using 64-bit floating point coordinates.
///
/// [`Vector2`] behaves like a plain number pair: it is [`Copy`], all arithmetic operators are
/// provided, and the polar view (`radians()`, `degrees()`, `length()`) can be both read and
/// rewritten through the matching `set_*` methods.
///
/// # Examples
///
/// ```
/// use simplevector::core::prelude::*;
///
/// let v1 = Vector2::new(10.0, 20.0);
/// let v2 = Vector2 { x: 0.0, y: 1.0 };
/// assert_eq!(v1 + v2, Vector2::new(10.0, 21.0));
/// assert_eq!(v1 * 2.0, Vector2::new(20.0, 40.0));
/// ```
///
/// # Equality
/// Two vectors are equal when the distance between them is close to zero, using
/// [`REL_TOLERANCE`](crate::core::config::REL_TOLERANCE) and
/// [`ABS_TOLERANCE`](crate::core::config::ABS_TOLERANCE). This is not transitive.
///
/// The [`Hash`](std::hash::Hash) impl only combines the raw bit patterns of both components, so
/// two vectors that compare equal without being bit-identical will usually hash differently.
/// Do not rely on hashed collections to merge nearly-equal vectors.
#[derive(Default, Debug, Copy, Clone, bincode::Encode, bincode::Decode, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

/// A 3D vector using 64-bit floating point coordinates.
///
/// Angles are only defined per projection plane: `x_radians()` looks at the `(y, z)` plane,
/// `y_radians()` at `(z, x)` and `z_radians()` at `(x, y)`.
#[derive(Default, Debug, Copy, Clone, bincode::Encode, bincode::Decode, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// An axis-aligned rectangle anchored at `position` (its minimum corner).
///
/// Unlike [`Box2D`](crate::util::shape::Box2D) the size is not validated, so empty and
/// negative sizes are representable.
#[derive(
    Default,
    Debug,
    Copy,
    Clone,
    PartialEq,
    bincode::Encode,
    bincode::Decode,
    Serialize,
    Deserialize,
)]
pub struct Rect {
    pub position: Vector2,
    pub size: Vector2,
}

/// A circle. The radius is not validated.
#[derive(Debug, Copy, Clone, PartialEq, bincode::Encode, bincode::Decode, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
    pub position: Vector2,
}
