use nalgebra::{Point3, Vector3};
use rand::Rng;
use rand_distr::StandardNormal;

// Samples with a norm at or below this are considered degenerate and redrawn.
const DEGENERATE_NORM: f64 = 1e-6;

/// Cosine of the angle between two vectors, clamped to `[-1, 1]` so that
/// rounding can never push it outside the domain of `acos`.
pub fn cosine(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    (a.dot(b) / (a.norm() * b.norm())).clamp(-1.0, 1.0)
}

/// Angle between two vectors in radians, in `[0, π]`.
pub fn angle(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    cosine(a, b).acos()
}

/// Unit normal of the plane through three points, orthogonal to every edge
/// of the triangle they span.
pub fn triangle_normal(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> Vector3<f64> {
    (a - c).cross(&(b - c)).normalize()
}

/// Uniformly distributed random unit vector.
pub fn random_unit(rng: &mut impl Rng) -> Vector3<f64> {
    loop {
        let x: f64 = rng.sample(StandardNormal);
        let y: f64 = rng.sample(StandardNormal);
        let z: f64 = rng.sample(StandardNormal);
        let sample = Vector3::new(x, y, z);

        let norm = sample.norm();
        if norm > DEGENERATE_NORM {
            return sample / norm;
        }
    }
}

/// Random unit vector orthogonal to `normal` (which need not be normalized).
pub fn random_orthonormal(rng: &mut impl Rng, normal: &Vector3<f64>) -> Vector3<f64> {
    loop {
        let candidate = random_unit(rng);
        let ortho = candidate - normal * (normal.dot(&candidate) / normal.norm_squared());

        let norm = ortho.norm();
        if norm > DEGENERATE_NORM {
            return ortho / norm;
        }
    }
}
