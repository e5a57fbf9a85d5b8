//! Two-dimensional vectors

use std::ops::{Add, Mul};

/// A vector in the plane.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl_vector!(Vec2, 2, { x, y });

impl<T: Copy + Add<Output = T> + Mul<Output = T>> Vec2<T> {
    /// Dot product.
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }
}
