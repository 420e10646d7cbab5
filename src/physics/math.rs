use super::constants::BASE_RADIUS;
use rand::Rng;

/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 2D vector type for positions and velocities
pub type Vector = bevy::math::DVec2;

/// Footprint radius of a body, derived from its mass alone.
///
/// `radius(0.0) == 5.0` and the result grows strictly with mass. The
/// presentation layer sizes bodies with this same function, so the drawn
/// disc and the collision footprint always agree.
#[inline]
#[must_use]
pub fn radius(mass: Scalar) -> Scalar {
    BASE_RADIUS + libm::sqrt(mass) / 2.0
}

/// Unit vector pointing at `angle` radians from the +x axis
#[inline]
pub fn unit_vector(angle: Scalar) -> Vector {
    Vector::new(libm::cos(angle), libm::sin(angle))
}

/// Uniformly distributed angle in `[0, 2π)`
pub fn random_angle<R: Rng + ?Sized>(rng: &mut R) -> Scalar {
    rng.random_range(0.0..std::f64::consts::TAU)
}

/// Velocity perpendicular to the radius at `angle`, for a clockwise orbit
/// in screen coordinates
#[inline]
pub fn orbital_velocity(angle: Scalar, speed: Scalar) -> Vector {
    Vector::new(libm::sin(angle), -libm::cos(angle)) * speed
}
