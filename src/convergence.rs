use ndarray::ArrayView2;

use crate::distance::euclidean_distance;

/// Largest Euclidean distance any centroid moved between two iterations.
pub fn max_displacement(old_centroids: ArrayView2<'_, f64>, new_centroids: ArrayView2<'_, f64>) -> f64 {
    old_centroids
        .outer_iter()
        .zip(new_centroids.outer_iter())
        .map(|(old, new)| euclidean_distance(old, new))
        .fold(0.0, f64::max)
}

/// True when every centroid moved strictly less than `epsilon`.
pub fn has_converged(
    old_centroids: ArrayView2<'_, f64>,
    new_centroids: ArrayView2<'_, f64>,
    epsilon: f64,
) -> bool {
    max_displacement(old_centroids, new_centroids) < epsilon
}
