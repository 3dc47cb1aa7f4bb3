//! Synthetic phantom images for exercising the projector.

use ndarray::Array2;

use crate::Intensityf32;

/// One ellipse of the head phantom, in the usual normalised coordinates:
/// the image square spans `[-1, 1]` in both axes, `phi` is the
/// counter-clockwise tilt of the `a` semi-axis in degrees.
struct Ellipse {
    intensity: f32,
    a: f32,
    b: f32,
    x0: f32,
    y0: f32,
    phi: f32,
}

/// Toft's "modified Shepp-Logan" variant: same geometry as the original
/// 1974 phantom, intensities rescaled for usable display contrast.
const MODIFIED_SHEPP_LOGAN: [Ellipse; 10] = [
    Ellipse { intensity:  1.0, a: 0.6900, b: 0.9200, x0:  0.00, y0:  0.0000, phi:   0.0 },
    Ellipse { intensity: -0.8, a: 0.6624, b: 0.8740, x0:  0.00, y0: -0.0184, phi:   0.0 },
    Ellipse { intensity: -0.2, a: 0.1100, b: 0.3100, x0:  0.22, y0:  0.0000, phi: -18.0 },
    Ellipse { intensity: -0.2, a: 0.1600, b: 0.4100, x0: -0.22, y0:  0.0000, phi:  18.0 },
    Ellipse { intensity:  0.1, a: 0.2100, b: 0.2500, x0:  0.00, y0:  0.3500, phi:   0.0 },
    Ellipse { intensity:  0.1, a: 0.0460, b: 0.0460, x0:  0.00, y0:  0.1000, phi:   0.0 },
    Ellipse { intensity:  0.1, a: 0.0460, b: 0.0460, x0:  0.00, y0: -0.1000, phi:   0.0 },
    Ellipse { intensity:  0.1, a: 0.0460, b: 0.0230, x0: -0.08, y0: -0.6050, phi:   0.0 },
    Ellipse { intensity:  0.1, a: 0.0230, b: 0.0230, x0:  0.00, y0: -0.6060, phi:   0.0 },
    Ellipse { intensity:  0.1, a: 0.0230, b: 0.0460, x0:  0.06, y0: -0.6050, phi:   0.0 },
];

/// The modified Shepp-Logan head phantom on an `n x n` grid, intensities in
/// `[0, 1]`. `n = 400` matches the resolution the reference animation
/// projects.
pub fn shepp_logan(n: usize) -> Array2<Intensityf32> {
    let mut image = Array2::zeros((n, n));
    let half = n as f32 / 2.0;

    for ((row, col), value) in image.indexed_iter_mut() {
        // Pixel centres, +y pointing up
        let x = (col as f32 - half + 0.5) / half;
        let y = (half - row as f32 - 0.5) / half;

        let mut sum = 0.0;
        for e in &MODIFIED_SHEPP_LOGAN {
            let (sin_p, cos_p) = e.phi.to_radians().sin_cos();
            let dx = x - e.x0;
            let dy = y - e.y0;
            let xr =  dx * cos_p + dy * sin_p;
            let yr = -dx * sin_p + dy * cos_p;
            if (xr / e.a).powi(2) + (yr / e.b).powi(2) <= 1.0 {
                sum += e.intensity;
            }
        }
        *value = sum.max(0.0);
    }
    image
}
