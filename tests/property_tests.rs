use itertools::Itertools;
use kmeanspp::{calculate_inertia, kmeans_plusplus, refine, Error, PointSet};
use ndarray::Array2;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn point_set(rows: &[Vec<f64>]) -> PointSet<usize> {
    PointSet::from_rows((0..rows.len()).collect(), rows).unwrap()
}

fn dataset() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..4).prop_flat_map(|dim| prop::collection::vec(prop::collection::vec(-50.0f64..50.0, dim), 4..30))
}

proptest! {
    #[test]
    fn prop_seeding_is_deterministic_and_distinct(
        rows in dataset(),
        k in 2usize..4,
        seed in any::<u64>(),
    ) {
        let points = point_set(&rows);
        let first = kmeans_plusplus(&points, k, &mut StdRng::seed_from_u64(seed));
        let second = kmeans_plusplus(&points, k, &mut StdRng::seed_from_u64(seed));
        match (first, second) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(&a.ids, &b.ids);
                prop_assert_eq!(a.ids.len(), k);
                prop_assert!(a.indices.iter().all_unique());
            }
            (Err(Error::DegenerateSeeding { .. }), Err(Error::DegenerateSeeding { .. })) => {}
            (a, b) => prop_assert!(false, "diverging results: {:?} vs {:?}", a.err(), b.err()),
        }
    }

    #[test]
    fn prop_refine_keeps_shape(
        rows in dataset(),
        k in 2usize..4,
        max_iter in 1usize..20,
        epsilon in 0.0f64..1.0,
    ) {
        let points = point_set(&rows);
        let initial = Array2::from_shape_fn((k, points.dim()), |(i, j)| rows[i][j] + i as f64);
        let result = refine(&points, initial.view(), max_iter, epsilon).unwrap();
        prop_assert_eq!(result.centroids.dim(), (k, points.dim()));
        prop_assert!(result.iterations >= 1 && result.iterations <= max_iter);
    }

    #[test]
    fn prop_inertia_never_increases(rows in dataset(), k in 2usize..4, seed in any::<u64>()) {
        let points = point_set(&rows);
        let seeds = match kmeans_plusplus(&points, k, &mut StdRng::seed_from_u64(seed)) {
            Ok(seeds) => seeds,
            Err(_) => return Ok(()),
        };

        let mut previous = calculate_inertia(points.data(), seeds.centroids.view());
        for max_iter in 1..12 {
            let result = refine(&points, seeds.centroids.view(), max_iter, 0.0).unwrap();
            let inertia = calculate_inertia(points.data(), result.centroids.view());
            prop_assert!(inertia <= previous + 1e-9 * (1.0 + previous), "{} > {}", inertia, previous);
            previous = inertia;
        }
    }

    #[test]
    fn prop_refined_centroids_are_a_fixed_point(rows in dataset(), k in 2usize..4, seed in any::<u64>()) {
        let points = point_set(&rows);
        let seeds = match kmeans_plusplus(&points, k, &mut StdRng::seed_from_u64(seed)) {
            Ok(seeds) => seeds,
            Err(_) => return Ok(()),
        };

        let settled = refine(&points, seeds.centroids.view(), 500, 0.0).unwrap();
        let again = refine(&points, settled.centroids.view(), 300, 1e-9).unwrap();
        prop_assert_eq!(again.iterations, 1);
        prop_assert!(again.converged);
        prop_assert_eq!(again.centroids, settled.centroids);
    }
}
