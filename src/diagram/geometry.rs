//! Connector geometry
//!
//! Node positions are measured from the layout each draw, never stored.
//! A connector is a smooth two-segment quadratic curve from the source
//! node's center to the destination node's center, passing through the
//! midpoint between them, flattened to a polyline for stroking.

use egui::{Pos2, Rect};

/// Center of a node rect relative to the container origin
pub fn center_in(container: Rect, node: Rect) -> Pos2 {
    let center = node.center();
    Pos2::new(center.x - container.min.x, center.y - container.min.y)
}

/// Point on a quadratic bezier at parameter t
fn quad_point(p0: Pos2, control: Pos2, p1: Pos2, t: f32) -> Pos2 {
    let u = 1.0 - t;
    Pos2::new(
        u * u * p0.x + 2.0 * u * t * control.x + t * t * p1.x,
        u * u * p0.y + 2.0 * u * t * control.y + t * t * p1.y,
    )
}

/// Flatten the connector curve from `from` to `to` into `steps` segments.
///
/// The first quadratic segment runs to the midpoint with its control at
/// `(mid_x, from.y)`; the second continues smoothly with the reflected
/// control `(mid_x, to.y)`. Returns `steps + 1` points with the midpoint
/// of the two centers at index `steps / 2`.
pub fn connector_points(from: Pos2, to: Pos2, steps: usize) -> Vec<Pos2> {
    let half = (steps / 2).max(1);
    let mid = Pos2::new((from.x + to.x) / 2.0, (from.y + to.y) / 2.0);
    let control_a = Pos2::new(mid.x, from.y);
    let control_b = Pos2::new(mid.x, to.y);

    let mut points = Vec::with_capacity(half * 2 + 1);
    for i in 0..=half {
        points.push(quad_point(from, control_a, mid, i as f32 / half as f32));
    }
    for i in 1..=half {
        points.push(quad_point(mid, control_b, to, i as f32 / half as f32));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    fn close(a: Pos2, b: Pos2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn test_center_relative_to_container() {
        let container = Rect::from_min_size(Pos2::new(100.0, 50.0), vec2(800.0, 400.0));
        let node = Rect::from_min_size(Pos2::new(180.0, 90.0), vec2(120.0, 60.0));

        let center = center_in(container, node);
        assert!(close(center, Pos2::new(140.0, 70.0)));
    }

    #[test]
    fn test_connector_endpoints() {
        let from = Pos2::new(40.0, 60.0);
        let to = Pos2::new(300.0, 220.0);
        let points = connector_points(from, to, 24);

        assert_eq!(points.len(), 25);
        assert!(close(points[0], from));
        assert!(close(points[24], to));
    }

    #[test]
    fn test_connector_passes_through_midpoint() {
        let from = Pos2::new(40.0, 60.0);
        let to = Pos2::new(300.0, 220.0);
        let points = connector_points(from, to, 24);

        assert!(close(points[12], Pos2::new(170.0, 140.0)));
    }

    #[test]
    fn test_connector_is_smooth_at_midpoint() {
        // The incoming and outgoing tangents at the midpoint must agree:
        // the reflected control makes mid the average of its neighbors.
        let from = Pos2::new(0.0, 0.0);
        let to = Pos2::new(200.0, 100.0);
        let points = connector_points(from, to, 24);

        let before = points[11];
        let mid = points[12];
        let after = points[13];
        let expected = Pos2::new((before.x + after.x) / 2.0, (before.y + after.y) / 2.0);
        assert!(close(mid, expected));
    }

    #[test]
    fn test_degenerate_connector_same_point() {
        let p = Pos2::new(10.0, 10.0);
        let points = connector_points(p, p, 8);
        assert!(points.iter().all(|&q| close(q, p)));
    }

    #[test]
    fn test_tiny_step_count_still_yields_endpoints() {
        let from = Pos2::new(0.0, 0.0);
        let to = Pos2::new(10.0, 0.0);
        let points = connector_points(from, to, 0);

        assert!(close(points[0], from));
        assert!(close(*points.last().unwrap(), to));
    }
}
