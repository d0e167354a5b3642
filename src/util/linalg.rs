#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::float;
use crate::util::pack;
use num_traits::Zero;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

pub use crate::util::linalg_def::{Vector2, Vector3};

impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        float::is_close((*self - *other).length(), 0.0)
    }
}
impl Eq for Vector2 {}

impl Hash for Vector2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let x = float::force_positive_zero(self.x).to_bits();
        let y = float::force_positive_zero(self.y).to_bits();
        x.wrapping_add(y).hash(state);
    }
}

impl Vector2 {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Vector2 {
        Vector2 { x, y }
    }
    #[must_use]
    pub fn zero() -> Vector2 {
        Vector2 { x: 0.0, y: 0.0 }
    }
    #[must_use]
    pub fn one() -> Vector2 {
        Vector2 { x: 1.0, y: 1.0 }
    }
    #[must_use]
    pub fn splat(v: f64) -> Vector2 {
        Vector2 { x: v, y: v }
    }

    /// Creates a vector pointing at `angle` radians (counter-clockwise from the positive x-axis)
    /// with the given length.
    #[must_use]
    pub fn from_radians_and_length(angle: f64, length: f64) -> Vector2 {
        Vector2 {
            x: angle.cos() * length,
            y: angle.sin() * length,
        }
    }
    /// Same as [`from_radians_and_length`](Self::from_radians_and_length), in degrees.
    ///
    /// ```
    /// use simplevector::core::prelude::*;
    /// let v = Vector2::from_degrees_and_length(45.0, 200.0_f64.sqrt());
    /// assert_eq!(v, Vector2::new(10.0, 10.0));
    /// ```
    #[must_use]
    pub fn from_degrees_and_length(angle: f64, length: f64) -> Vector2 {
        Self::from_radians_and_length(angle.to_radians(), length)
    }

    /// Returns the squared length of the vector. Prefer this for comparisons.
    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.dot_product(*self)
    }
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }
    /// Rescales the vector to `length`, keeping its angle.
    ///
    /// A zero vector has no angle to keep, so it is left unchanged.
    pub fn set_length(&mut self, length: f64) {
        let current = self.length();
        if current.is_zero() {
            warn!("Vector2: cannot set length of zero vector to {length}");
            return;
        }
        *self *= length / current;
    }

    /// Rescales the vector in place to unit length.
    pub fn normalize(&mut self) {
        self.set_length(1.0);
    }
    /// Returns a unit-length copy. The zero vector normalises to itself.
    #[must_use]
    pub fn normalized(&self) -> Vector2 {
        let mut rv = *self;
        rv.normalize();
        rv
    }
    /// Points the vector in the same direction as `direction`, keeping its own length.
    pub fn set_normalized(&mut self, direction: Vector2) {
        self.set_radians(direction.radians());
    }

    /// The angle of the vector in `(-π, π]`, as given by `atan2(y, x)`.
    #[must_use]
    pub fn radians(&self) -> f64 {
        self.y.atan2(self.x)
    }
    #[must_use]
    pub fn degrees(&self) -> f64 {
        self.radians().to_degrees()
    }
    pub fn set_radians(&mut self, angle: f64) {
        *self = Self::from_radians_and_length(angle, self.length());
    }
    pub fn set_degrees(&mut self, angle: f64) {
        self.set_radians(angle.to_radians());
    }
    pub fn rotate_radians(&mut self, delta: f64) {
        self.set_radians(self.radians() + delta);
    }
    pub fn rotate_degrees(&mut self, delta: f64) {
        self.rotate_radians(delta.to_radians());
    }
    /// Returns a copy rotated counter-clockwise about the coordinate origin.
    #[must_use]
    pub fn rotated(&self, radians: f64) -> Vector2 {
        let (sin, cos) = radians.sin_cos();
        Vector2 {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    #[must_use]
    pub fn dot_product(&self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns a new vector with the absolute values of each component.
    #[must_use]
    pub fn abs(&self) -> Vector2 {
        Vector2 {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }
    #[must_use]
    pub fn mirror(&self) -> Vector2 {
        -*self
    }
    /// Mirrors across the x-axis.
    #[must_use]
    pub fn mirror_x(&self) -> Vector2 {
        Vector2 {
            x: self.x,
            y: -self.y,
        }
    }
    /// Mirrors across the y-axis.
    #[must_use]
    pub fn mirror_y(&self) -> Vector2 {
        Vector2 {
            x: -self.x,
            y: self.y,
        }
    }
    #[must_use]
    pub fn x_vector(&self) -> Vector2 {
        Vector2 { x: self.x, y: 0.0 }
    }
    #[must_use]
    pub fn y_vector(&self) -> Vector2 {
        Vector2 { x: 0.0, y: self.y }
    }

    pub fn get(&self, index: usize) -> Result<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(Self::out_of_range(index)),
        }
    }
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => return Err(Self::out_of_range(index)),
        }
        Ok(())
    }
    /// Always fails: a vector has a fixed number of components.
    pub fn remove(&mut self, _index: usize) -> Result<()> {
        Err(GeomError::Unsupported(
            "cannot remove a component from a Vector2",
        ))
    }
    fn out_of_range(index: usize) -> GeomError {
        GeomError::IndexOutOfRange {
            type_name: "Vector2",
            index,
            len: 2,
        }
    }

    /// Iterates over `x, y`. Use `.rev()` for `y, x`.
    pub fn iter(&self) -> std::array::IntoIter<f64, 2> {
        <[f64; 2]>::from(*self).into_iter()
    }
    /// True if either component is close to `value`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.iter().any(|c| float::is_close(value, c))
    }
}

impl Packable for Vector2 {
    const PACKED_LEN: usize = 16;

    fn to_bytes(&self) -> Result<Vec<u8>> {
        pack::encode(self)
    }
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        pack::decode(bytes, Self::PACKED_LEN)
    }
}

impl Zero for Vector2 {
    fn zero() -> Self {
        Vector2::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from(value: [f64; 2]) -> Self {
        Vector2 {
            x: value[0],
            y: value[1],
        }
    }
}
impl From<(f64, f64)> for Vector2 {
    fn from(value: (f64, f64)) -> Self {
        Vector2 {
            x: value.0,
            y: value.1,
        }
    }
}
impl From<Vector2> for [f64; 2] {
    fn from(value: Vector2) -> Self {
        [value.x, value.y]
    }
}

impl IntoIterator for Vector2 {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl IntoIterator for &Vector2 {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vector2({:.p$}, {:.p$})",
            self.x,
            self.y,
            p = DISPLAY_PRECISION
        )
    }
}

impl Add<Vector2> for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Self::Output {
        Vector2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign<Vector2> for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Vector2> for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Self::Output {
        Vector2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign<Vector2> for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Sum<Vector2> for Vector2 {
    fn sum<I: Iterator<Item = Vector2>>(iter: I) -> Self {
        iter.fold(Vector2::zero(), |acc, v| acc + v)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Self::Output {
        Vector2 {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}
impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;

    fn div(self, rhs: f64) -> Self::Output {
        Vector2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl DivAssign<f64> for Vector2 {
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Self::Output {
        Vector2 {
            x: -self.x,
            y: -self.y,
        }
    }
}
impl Neg for &Vector2 {
    type Output = Vector2;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        float::is_close((*self - *other).length(), 0.0)
    }
}
impl Eq for Vector3 {}

impl Hash for Vector3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let x = float::force_positive_zero(self.x).to_bits();
        let y = float::force_positive_zero(self.y).to_bits();
        let z = float::force_positive_zero(self.z).to_bits();
        x.wrapping_add(y).wrapping_add(z).hash(state);
    }
}

impl Vector3 {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3 { x, y, z }
    }
    #[must_use]
    pub fn zero() -> Vector3 {
        Vector3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
    #[must_use]
    pub fn splat(v: f64) -> Vector3 {
        Vector3 { x: v, y: v, z: v }
    }

    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.dot_product(*self)
    }
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }
    /// Rescales the vector to `length`, keeping its direction. A zero vector is left unchanged.
    pub fn set_length(&mut self, length: f64) {
        let current = self.length();
        if current.is_zero() {
            warn!("Vector3: cannot set length of zero vector to {length}");
            return;
        }
        *self *= length / current;
    }
    pub fn normalize(&mut self) {
        self.set_length(1.0);
    }
    #[must_use]
    pub fn normalized(&self) -> Vector3 {
        let mut rv = *self;
        rv.normalize();
        rv
    }
    /// Points the vector in the same direction as `direction`, keeping its own length.
    pub fn set_normalized(&mut self, direction: Vector3) {
        let length = self.length();
        if direction.length().is_zero() {
            warn!("Vector3: cannot take direction from zero vector");
            return;
        }
        *self = direction.normalized() * length;
    }

    // Each angle is measured in the plane of the two other axes, in the cyclic order
    // (y, z), (z, x), (x, y).
    fn yz(&self) -> Vector2 {
        Vector2::new(self.y, self.z)
    }
    fn zx(&self) -> Vector2 {
        Vector2::new(self.z, self.x)
    }
    fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    #[must_use]
    pub fn x_radians(&self) -> f64 {
        self.yz().radians()
    }
    #[must_use]
    pub fn y_radians(&self) -> f64 {
        self.zx().radians()
    }
    #[must_use]
    pub fn z_radians(&self) -> f64 {
        self.xy().radians()
    }
    #[must_use]
    pub fn x_degrees(&self) -> f64 {
        self.x_radians().to_degrees()
    }
    #[must_use]
    pub fn y_degrees(&self) -> f64 {
        self.y_radians().to_degrees()
    }
    #[must_use]
    pub fn z_degrees(&self) -> f64 {
        self.z_radians().to_degrees()
    }

    /// Rotates the vector about the x-axis so that `x_radians()` becomes `angle`.
    pub fn set_x_radians(&mut self, angle: f64) {
        let mut yz = self.yz();
        yz.set_radians(angle);
        (self.y, self.z) = (yz.x, yz.y);
    }
    pub fn set_y_radians(&mut self, angle: f64) {
        let mut zx = self.zx();
        zx.set_radians(angle);
        (self.z, self.x) = (zx.x, zx.y);
    }
    pub fn set_z_radians(&mut self, angle: f64) {
        let mut xy = self.xy();
        xy.set_radians(angle);
        (self.x, self.y) = (xy.x, xy.y);
    }
    pub fn set_x_degrees(&mut self, angle: f64) {
        self.set_x_radians(angle.to_radians());
    }
    pub fn set_y_degrees(&mut self, angle: f64) {
        self.set_y_radians(angle.to_radians());
    }
    pub fn set_z_degrees(&mut self, angle: f64) {
        self.set_z_radians(angle.to_radians());
    }

    #[must_use]
    pub fn dot_product(&self, other: Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    #[must_use]
    pub fn cross_product(&self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    #[must_use]
    pub fn abs(&self) -> Vector3 {
        Vector3 {
            x: self.x.abs(),
            y: self.y.abs(),
            z: self.z.abs(),
        }
    }
    #[must_use]
    pub fn mirror(&self) -> Vector3 {
        -*self
    }
    #[must_use]
    pub fn x_vector(&self) -> Vector3 {
        Vector3 {
            x: self.x,
            y: 0.0,
            z: 0.0,
        }
    }
    #[must_use]
    pub fn y_vector(&self) -> Vector3 {
        Vector3 {
            x: 0.0,
            y: self.y,
            z: 0.0,
        }
    }
    #[must_use]
    pub fn z_vector(&self) -> Vector3 {
        Vector3 {
            x: 0.0,
            y: 0.0,
            z: self.z,
        }
    }

    pub fn get(&self, index: usize) -> Result<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(Self::out_of_range(index)),
        }
    }
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => return Err(Self::out_of_range(index)),
        }
        Ok(())
    }
    pub fn remove(&mut self, _index: usize) -> Result<()> {
        Err(GeomError::Unsupported(
            "cannot remove a component from a Vector3",
        ))
    }
    fn out_of_range(index: usize) -> GeomError {
        GeomError::IndexOutOfRange {
            type_name: "Vector3",
            index,
            len: 3,
        }
    }

    pub fn iter(&self) -> std::array::IntoIter<f64, 3> {
        <[f64; 3]>::from(*self).into_iter()
    }
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.iter().any(|c| float::is_close(value, c))
    }
}

impl Packable for Vector3 {
    const PACKED_LEN: usize = 24;

    fn to_bytes(&self) -> Result<Vec<u8>> {
        pack::encode(self)
    }
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        pack::decode(bytes, Self::PACKED_LEN)
    }
}

impl Zero for Vector3 {
    fn zero() -> Self {
        Vector3::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(value: [f64; 3]) -> Self {
        Vector3 {
            x: value[0],
            y: value[1],
            z: value[2],
        }
    }
}
impl From<Vector3> for [f64; 3] {
    fn from(value: Vector3) -> Self {
        [value.x, value.y, value.z]
    }
}

impl IntoIterator for Vector3 {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl IntoIterator for &Vector3 {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vector3({:.p$}, {:.p$}, {:.p$})",
            self.x,
            self.y,
            self.z,
            p = DISPLAY_PRECISION
        )
    }
}

impl Add<Vector3> for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Self::Output {
        Vector3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl AddAssign<Vector3> for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub<Vector3> for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Self::Output {
        Vector3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl SubAssign<Vector3> for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Sum<Vector3> for Vector3 {
    fn sum<I: Iterator<Item = Vector3>>(iter: I) -> Self {
        iter.fold(Vector3::zero(), |acc, v| acc + v)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Self::Output {
        Vector3 {
            x: self * rhs.x,
            y: self * rhs.y,
            z: self * rhs.z,
        }
    }
}
impl MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, rhs: f64) -> Self::Output {
        Vector3 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}
impl DivAssign<f64> for Vector3 {
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Self::Output {
        Vector3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
impl Neg for &Vector3 {
    type Output = Vector3;

    fn neg(self) -> Self::Output {
        -*self
    }
}
