use geo::Coord;

use crate::model::unit::{AsF64, Distance};

/// earth radius used by the haversine approximation.
pub const APPROX_EARTH_RADIUS_M: f64 = 6_371_000.0;

/// great-circle distance between two WGS84 `(lon, lat)` coordinates, in
/// meters.
pub fn haversine_distance_meters(src: Coord<f64>, dst: Coord<f64>) -> Distance {
    let lat1 = src.y.to_radians();
    let lat2 = dst.y.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (dst.x - src.x).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    let c = 2.0 * a.sqrt().asin();
    Distance::new(APPROX_EARTH_RADIUS_M * c)
}

/// the point on segment `a -> b` closest to `p`, and the fraction `t` in
/// `[0, 1]` along the segment at which it lies. treats coordinates as
/// locally planar (equirectangular), which is an adequate approximation
/// for the short, sub-edge-length segments a resolver projects onto.
pub fn project_point_onto_segment(p: Coord<f64>, a: Coord<f64>, b: Coord<f64>) -> (Coord<f64>, f64) {
    let lat_scale = a.y.to_radians().cos().max(1e-9);
    let ax = a.x * lat_scale;
    let bx = b.x * lat_scale;
    let px = p.x * lat_scale;

    let dx = bx - ax;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    let t = if len_sq <= f64::EPSILON {
        0.0
    } else {
        (((px - ax) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
    };

    let projected = Coord {
        x: a.x + t * (b.x - a.x),
        y: a.y + t * (b.y - a.y),
    };
    (projected, t)
}

/// the point on a polyline `a -> shape* -> b` closest to `p`: the
/// projected coordinate, the fraction along the *whole polyline* (by
/// cumulative planar length) at which it lies, and the distance from `p`
/// to the projection in meters.
pub fn project_point_onto_polyline(
    p: Coord<f64>,
    a: Coord<f64>,
    shape: &[Coord<f64>],
    b: Coord<f64>,
) -> (Coord<f64>, f64, Distance) {
    let vertices: Vec<Coord<f64>> = std::iter::once(a).chain(shape.iter().copied()).chain(std::iter::once(b)).collect();

    let segment_lengths: Vec<f64> = vertices
        .windows(2)
        .map(|pair| haversine_distance_meters(pair[0], pair[1]).as_f64())
        .collect();
    let total_length: f64 = segment_lengths.iter().sum();

    let mut best_distance = Distance::new(f64::INFINITY);
    let mut best_point = a;
    let mut best_offset = 0.0;
    let mut cumulative_before = 0.0;

    for (i, pair) in vertices.windows(2).enumerate() {
        let (projected, t) = project_point_onto_segment(p, pair[0], pair[1]);
        let distance = haversine_distance_meters(p, projected);
        if distance < best_distance {
            best_distance = distance;
            best_point = projected;
            let along = cumulative_before + t * segment_lengths[i];
            best_offset = if total_length <= f64::EPSILON { 0.0 } else { along / total_length };
        }
        cumulative_before += segment_lengths[i];
    }

    (best_point, best_offset, best_distance)
}
