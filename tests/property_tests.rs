use std::collections::BTreeSet;

use dbscan_clusterer::{
    epsilon_neighbors, points_from_rows, BuiltinMetric, Dbscan, Euclidean, Label, Metric, Point,
};
use proptest::prelude::*;

fn rows_strategy() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..=4).prop_flat_map(|dim| {
        prop::collection::vec(prop::collection::vec(-10.0f64..10.0, dim), 0..40)
    })
}

fn clustered(rows: &[Vec<f64>], epsilon: f64, min_pts: usize) -> Vec<Point> {
    let mut points = points_from_rows(rows).unwrap();
    Dbscan::new(epsilon, min_pts).run(&mut points).unwrap();
    points
}

fn neighbor_count(points: &[Point], idx: usize, epsilon: f64) -> usize {
    epsilon_neighbors(idx, points, epsilon, &Euclidean)
        .unwrap()
        .len()
}

proptest! {
    #[test]
    fn prop_every_point_classified(
        rows in rows_strategy(),
        epsilon in 0.0f64..5.0,
        min_pts in 0usize..6,
    ) {
        let points = clustered(&rows, epsilon, min_pts);
        prop_assert_eq!(points.len(), rows.len());
        for p in &points {
            prop_assert!(matches!(p.label(), Label::Noise | Label::Cluster(_)));
        }
    }

    #[test]
    fn prop_cluster_ids_contiguous(
        rows in rows_strategy(),
        epsilon in 0.0f64..5.0,
        min_pts in 0usize..6,
    ) {
        let mut points = points_from_rows(&rows).unwrap();
        let n_clusters = Dbscan::new(epsilon, min_pts).run(&mut points).unwrap();
        let ids: BTreeSet<usize> = points.iter().filter_map(|p| p.label().cluster_id()).collect();
        prop_assert_eq!(ids, (0..n_clusters).collect::<BTreeSet<_>>());
    }

    #[test]
    fn prop_deterministic(
        rows in rows_strategy(),
        epsilon in 0.0f64..5.0,
        min_pts in 0usize..6,
    ) {
        let a: Vec<Label> = clustered(&rows, epsilon, min_pts).iter().map(Point::label).collect();
        let b: Vec<Label> = clustered(&rows, epsilon, min_pts).iter().map(Point::label).collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_density_connectivity(
        rows in rows_strategy(),
        epsilon in 0.0f64..5.0,
        min_pts in 1usize..6,
    ) {
        let points = clustered(&rows, epsilon, min_pts);
        for i in 0..points.len() {
            if neighbor_count(&points, i, epsilon) < min_pts {
                continue;
            }
            for j in epsilon_neighbors(i, &points, epsilon, &Euclidean).unwrap() {
                // Neighbors of a core point are never noise.
                prop_assert!(!points[j].label().is_noise());
                // Two mutually reachable core points share a cluster.
                if neighbor_count(&points, j, epsilon) >= min_pts {
                    prop_assert_eq!(points[i].label(), points[j].label());
                }
            }
        }
    }

    #[test]
    fn prop_noise_has_no_core_neighbor(
        rows in rows_strategy(),
        epsilon in 0.0f64..5.0,
        min_pts in 0usize..6,
    ) {
        let points = clustered(&rows, epsilon, min_pts);
        for i in 0..points.len() {
            if !points[i].label().is_noise() {
                continue;
            }
            prop_assert!(neighbor_count(&points, i, epsilon) < min_pts);
            for j in epsilon_neighbors(i, &points, epsilon, &Euclidean).unwrap() {
                prop_assert!(neighbor_count(&points, j, epsilon) < min_pts);
            }
        }
    }

    #[test]
    fn prop_metric_symmetry(
        a in prop::collection::vec(-1e3f64..1e3, 1..=8),
        b in prop::collection::vec(-1e3f64..1e3, 1..=8),
    ) {
        let (a, b) = (Point::new(&a).unwrap(), Point::new(&b).unwrap());
        for m in BuiltinMetric::ALL {
            let ab = m.distance(&a, &b);
            prop_assert!(ab >= 0.0);
            prop_assert_eq!(ab, m.distance(&b, &a));
            prop_assert_eq!(m.distance(&a, &a), 0.0);
        }
    }
}
