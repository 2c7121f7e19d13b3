use evidence_locator::calibrate::CalibrationTargets;
use evidence_locator::{Evidence, Point2D};

/// River along the x axis, satellite track along the y axis, gate placed so
/// that the crossing sits exactly at the gate's log-normal mode distance.
/// The posterior maximum is then the origin.
pub fn crossing_scene() -> Evidence {
    Evidence::new(
        vec![
            Point2D::new(-9000.0, 0.0),
            Point2D::new(0.0, 0.0),
            Point2D::new(9000.0, 0.0),
        ],
        vec![Point2D::new(0.0, -9000.0), Point2D::new(0.0, 9000.0)],
        Point2D::new(3877.0 * 0.6, 3877.0 * 0.8),
        CalibrationTargets::default(),
    )
    .expect("synthetic scene geometry is valid")
}

/// Meandering river with many segments, loosely shaped like a city river.
pub fn meander_scene() -> Evidence {
    let river = (0..=24)
        .map(|i| {
            let x = -12_000.0 + i as f64 * 1000.0;
            Point2D::new(x, 1500.0 * (x / 3000.0).sin())
        })
        .collect();
    Evidence::new(
        river,
        vec![Point2D::new(-4000.0, 9000.0), Point2D::new(6000.0, -9000.0)],
        Point2D::new(-2000.0, 4500.0),
        CalibrationTargets::default(),
    )
    .expect("synthetic scene geometry is valid")
}
