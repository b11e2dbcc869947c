//! DBSCAN on a small 2D dataset with each built-in metric.
//!
//! Run with `RUST_LOG=debug` to see the engine's log output. An optional first argument
//! selects a single metric by name, e.g. `euclidean-2d`.

use dbscan_clusterer::{BuiltinMetric, Dbscan, DbscanParams, Label};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let data: Vec<Vec<f64>> = vec![
        vec![0.0, 10.0],
        vec![0.0, 11.0],
        vec![0.0, 12.0],
        vec![20.0, 33.0],
        vec![21.0, 32.0],
        vec![59.0, 77.0],
        vec![58.0, 79.0],
        vec![58.0, 76.0],
        vec![300.0, 70.0],
        vec![500.0, 300.0],
        vec![500.0, 302.0],
    ];

    let metrics: Vec<BuiltinMetric> = match std::env::args().nth(1) {
        Some(name) => vec![name.parse()?],
        None => BuiltinMetric::ALL.to_vec(),
    };

    for metric in metrics {
        let dbscan = Dbscan::from_params(DbscanParams {
            epsilon: 4.0,
            min_pts: 1,
            metric,
        });
        let groups = dbscan.fit_groups(&data)?;

        println!("=== DBSCAN (eps=4, min_pts=1, metric={metric}) ===");
        for (label, points) in &groups {
            let tag = match label {
                Label::Noise => "NOISE".to_string(),
                other => other.to_string(),
            };
            let coords: Vec<String> = points
                .iter()
                .map(|p| format!("({:.1}, {:.1})", p.coords()[0], p.coords()[1]))
                .collect();
            println!("  {tag:>10} => {}", coords.join(" "));
        }
    }
    Ok(())
}
