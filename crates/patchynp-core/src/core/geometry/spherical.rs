use nalgebra::Point3;
use std::f64::consts::PI;

/// Spherical coordinates `(r, theta, phi)` of an origin-centered point.
///
/// `r` is the radial distance, `phi` the polar angle measured from the +z
/// axis (`arccos(z/r)`), and `theta` the azimuth in the xy-plane, adjusted by
/// quadrant into `[0, 2π)`.
pub fn cartesian_to_spherical(pos: &Point3<f64>) -> (f64, f64, f64) {
    let r = pos.coords.norm();
    let phi = (pos.z / r).acos();

    let mut theta = (pos.y / pos.x).atan();
    if pos.x < 0.0 {
        theta += PI;
    } else if pos.y < 0.0 {
        theta += 2.0 * PI;
    }

    (r, theta, phi)
}

/// Cartesian coordinates of the spherical point `(r, theta, phi)`.
///
/// Exact inverse of [`cartesian_to_spherical`] on the principal branch
/// (`r > 0`, `theta` in `[0, 2π)`, `phi` in `[0, π]`).
pub fn spherical_to_cartesian(r: f64, theta: f64, phi: f64) -> Point3<f64> {
    Point3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}
