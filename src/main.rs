use evidence_locator::calibrate::CalibrationTargets;
use evidence_locator::{Evidence, Locator, LocatorParams, Point2D};

fn main() {
    // Demo stub: a straight river, a diagonal satellite track and a gate
    // north of the river, calibrated with the default targets.
    let evidence = match Evidence::new(
        vec![Point2D::new(0.0, 0.0), Point2D::new(10_000.0, 0.0)],
        vec![Point2D::new(0.0, -5_000.0), Point2D::new(10_000.0, 5_000.0)],
        Point2D::new(5_000.0, 3_900.0),
        CalibrationTargets::default(),
    ) {
        Ok(ev) => ev,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    match Locator::new(LocatorParams::default()).locate(&evidence) {
        Ok(report) => {
            let res = &report.result;
            println!(
                "mode={:?} reliable={} latency_ms={:.3}",
                res.refined_mode, res.reliable, res.latency_ms
            );
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
