use itertools::Itertools;
use ndarray::{Array2, Axis};
use rand::{
    distributions::{Distribution, WeightedError, WeightedIndex},
    Rng,
};

use crate::distance::squared_euclidean_distance;
use crate::error::{Error, Result};
use crate::points::PointSet;

/// Seed used when the caller does not supply one. Reproducible runs depend on it.
pub const DEFAULT_SEED: u64 = 1234;

/// Initial centers in selection order.
#[derive(Debug, Clone)]
pub struct Seeds<Id> {
    /// `k x d`, row `i` is a copy of input point `indices[i]`.
    pub centroids: Array2<f64>,
    pub ids: Vec<Id>,
    pub indices: Vec<usize>,
}

/// Sampling weight of every point given the already chosen centers: the squared
/// distance to the nearest of them. Chosen points and exact duplicates weigh zero.
pub fn seed_weights<Id>(points: &PointSet<Id>, chosen: &[usize]) -> Vec<f64> {
    (0..points.len())
        .map(|idx| {
            chosen
                .iter()
                .map(|&c| squared_euclidean_distance(points.row(idx), points.row(c)))
                .fold(f64::INFINITY, f64::min)
        })
        .collect_vec()
}

/// k-means++ seeding.
///
/// The first center is drawn uniformly; each following one is drawn with
/// probability proportional to its squared distance from the nearest center
/// chosen so far. The generator is owned by the caller, so two runs built from
/// the same seed pick the same sequence.
pub fn kmeans_plusplus<Id, R>(points: &PointSet<Id>, k: usize, rng: &mut R) -> Result<Seeds<Id>>
where
    Id: Clone,
    R: Rng + ?Sized,
{
    let n = points.len();
    if k <= 1 || k >= n {
        return Err(Error::InvalidClusterCount {
            requested: k,
            n_items: n,
        });
    }

    let mut indices = Vec::with_capacity(k);
    indices.push(rng.gen_range(0..n));
    log::debug!("seed 0: point {}", indices[0]);

    let mut min_distances = vec![f64::INFINITY; n];

    while indices.len() < k {
        // Only the newest center can lower a point's nearest distance.
        let last = points.row(indices[indices.len() - 1]);
        for (idx, min_dist) in min_distances.iter_mut().enumerate() {
            let distance = squared_euclidean_distance(points.row(idx), last);
            *min_dist = min_dist.min(distance);
        }

        if !min_distances.iter().sum::<f64>().is_finite() {
            return Err(Error::Internal(
                "seeding weights overflow to infinity".to_string(),
            ));
        }

        let dist = WeightedIndex::new(&min_distances).map_err(|e| match e {
            WeightedError::AllWeightsZero => Error::DegenerateSeeding {
                chosen: indices.len(),
                requested: k,
            },
            other => Error::Internal(format!("seeding weights: {other}")),
        })?;
        let next = dist.sample(rng);
        log::debug!("seed {}: point {} (weight {})", indices.len(), next, min_distances[next]);
        indices.push(next);
    }

    let centroids = points.data().select(Axis(0), &indices);
    let ids = indices.iter().map(|&i| points.id(i).clone()).collect_vec();

    Ok(Seeds {
        centroids,
        ids,
        indices,
    })
}
