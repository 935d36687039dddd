use ndarray::Array2;
use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;

use crate::algorithm::refine;
use crate::config::Params;
use crate::error::Result;
use crate::inertia::calculate_inertia;
use crate::initialization::kmeans_plusplus;
use crate::points::PointSet;

/// What a clustering run hands back to its caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusteringResult<Id> {
    /// Ids of the seeding picks, in selection order.
    pub seed_ids: Vec<Id>,
    /// `k x d` final centroids, row `i` grown from seed `i`.
    pub centroids: Array2<f64>,
    pub iterations: usize,
    pub converged: bool,
    /// Within-cluster sum of squares at the final centroids.
    pub inertia: f64,
}

/// k-means with k-means++ seeding and Lloyd refinement.
#[derive(Debug, Clone)]
pub struct KMeans {
    params: Params,
}

impl KMeans {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Run one clustering request. Parameters are validated up front; nothing is
    /// computed if they do not fit the dataset.
    pub fn fit<Id: Clone>(&self, points: &PointSet<Id>) -> Result<ClusteringResult<Id>> {
        let Params {
            k,
            max_iter,
            epsilon,
            seed,
        } = self.params;
        self.params.validate(points.len())?;

        log::info!(
            "Starting KMeans: {} points, {} dims, k={}, max_iter={}, epsilon={}",
            points.len(),
            points.dim(),
            k,
            max_iter,
            epsilon
        );

        let mut rng = StdRng::seed_from_u64(seed);
        let seeds = kmeans_plusplus(points, k, &mut rng)?;
        log::info!("initialized kmeans++");

        let refinement = refine(points, seeds.centroids.view(), max_iter, epsilon)?;
        let inertia = calculate_inertia(points.data(), refinement.centroids.view());
        log::info!(
            "Finished KMeans after {} iterations - Inertia: {}",
            refinement.iterations,
            inertia
        );

        Ok(ClusteringResult {
            seed_ids: seeds.ids,
            centroids: refinement.centroids,
            iterations: refinement.iterations,
            converged: refinement.converged,
            inertia,
        })
    }

    /// Cluster independent datasets in parallel. Every run builds its own
    /// generator, so each result matches a standalone [`KMeans::fit`].
    pub fn fit_batch<Id>(&self, datasets: &[PointSet<Id>]) -> Vec<Result<ClusteringResult<Id>>>
    where
        Id: Clone + Send + Sync,
    {
        datasets.par_iter().map(|points| self.fit(points)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use ndarray::array;

    fn blobs() -> PointSet<u32> {
        PointSet::new(
            (1..=6).collect(),
            array![
                [0.0, 0.0],
                [0.2, 0.1],
                [0.1, 0.3],
                [8.0, 8.0],
                [8.2, 7.9],
                [7.9, 8.1]
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_fit_is_reproducible() {
        let model = KMeans::new(Params::new(2, 0.0001));
        let a = model.fit(&blobs()).unwrap();
        let b = model.fit(&blobs()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed_ids.len(), 2);
        assert_eq!(a.centroids.dim(), (2, 2));
        assert!(a.inertia >= 0.0);
    }

    #[test]
    fn test_fit_rejects_k_not_below_n() {
        let model = KMeans::new(Params::new(6, 0.0001));
        assert!(matches!(
            model.fit(&blobs()),
            Err(Error::InvalidClusterCount { requested: 6, n_items: 6 })
        ));
    }

    #[test]
    fn test_batch_matches_individual_runs() {
        let model = KMeans::new(Params::new(2, 0.0001).with_seed(99));
        let other = PointSet::new(
            (10..14).collect(),
            array![[1.0], [2.0], [50.0], [51.0]],
        )
        .unwrap();
        let datasets = vec![blobs(), other];

        let batch = model.fit_batch(&datasets);
        assert_eq!(batch.len(), 2);
        for (points, result) in datasets.iter().zip(batch) {
            assert_eq!(result.unwrap(), model.fit(points).unwrap());
        }
    }
}
