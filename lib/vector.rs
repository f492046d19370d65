//! Fixed-dimension real vectors.

use std::ops::{
    Add, AddAssign,
    Mul, MulAssign,
};

/// A fixed-dimension vector of `f64`s.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector<const N: usize>(pub [f64; N]);

/// A vector in ordinary 3D space; the cartesian form of a point on the Bloch
/// sphere.
pub type Vec3 = Vector<3>;

impl<const N: usize> Vector<N> {
    /// Create a vector of all zeros.
    pub fn zeros() -> Self { Self([0.0; N]) }

    /// Create a vector with 1 at the `k`-th index and zeros elsewhere.
    ///
    /// This is equivalent to `zeros` if `k ≥ N`.
    pub fn unit(k: usize) -> Self {
        let mut v = Self::zeros();
        if let Some(elem) = v.0.get_mut(k) {
            *elem = 1.0;
        }
        v
    }

    /// Call a function on each element, returning results in a new vector.
    pub fn map<F>(&self, mut f: F) -> Self
    where F: FnMut(f64) -> f64
    {
        Self(std::array::from_fn(|k| f(self.0[k])))
    }

    /// Return the dot product of two vectors.
    pub fn dot(&self, rhs: &Self) -> f64 {
        self.0.iter().zip(rhs.0.iter())
            .map(|(l, r)| l * r)
            .sum()
    }

    /// Return the Euclidean norm.
    pub fn norm(&self) -> f64 { self.dot(self).sqrt() }

    /// Return `self` scaled to unit norm, or `None` if `self` is zero.
    pub fn normalized(&self) -> Option<Self> {
        let n = self.norm();
        (n > 0.0).then(|| *self * n.recip())
    }
}

impl Vector<3> {
    /// Create a new 3D vector from its components.
    pub fn new(x: f64, y: f64, z: f64) -> Self { Self([x, y, z]) }

    pub fn x(&self) -> f64 { self.0[0] }

    pub fn y(&self) -> f64 { self.0[1] }

    pub fn z(&self) -> f64 { self.0[2] }

    /// Return the cross product `self × rhs`.
    pub fn cross(&self, rhs: &Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = rhs.0;
        Self([
            ay * bz - az * by,
            az * bx - ax * bz,
            ax * by - ay * bx,
        ])
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<const N: usize> AddAssign for Vector<N> {
    fn add_assign(&mut self, rhs: Self) {
        self.0.iter_mut().zip(rhs.0)
            .for_each(|(l, r)| { *l += r; });
    }
}

impl<const N: usize> Mul<f64> for Vector<N> {
    type Output = Self;

    fn mul(mut self, rhs: f64) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<const N: usize> MulAssign<f64> for Vector<N> {
    fn mul_assign(&mut self, rhs: f64) {
        self.0.iter_mut()
            .for_each(|l| { *l *= rhs; });
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;
    use super::*;

    #[test]
    fn cross_follows_right_hand_rule() {
        let x = Vec3::unit(0);
        let y = Vec3::unit(1);
        let z = Vec3::unit(2);
        assert_eq!(x.cross(&y), z);
        assert_eq!(y.cross(&z), x);
        assert_eq!(z.cross(&x), y);
        assert_eq!(y.cross(&x), z * -1.0);
    }

    #[test]
    fn dot_and_norm() {
        let v = Vec3::new(1.0, -2.0, 2.0);
        assert_abs_diff_eq!(v.dot(&Vec3::new(2.0, 1.0, 0.5)), 1.0);
        assert_abs_diff_eq!(v.norm(), 3.0);
        let u = v.normalized().unwrap();
        assert_abs_diff_eq!(u.norm(), 1.0, epsilon = 1e-15);
        assert!(Vec3::zeros().normalized().is_none());
    }

    #[test]
    fn arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Vec3::new(1.5, 2.5, 3.5));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(Vec3::unit(5), Vec3::zeros());
    }
}
