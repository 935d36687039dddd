use ndarray::ArrayView2;

use crate::distance::squared_euclidean_distance;

/// Within-cluster sum of squares: each point's squared distance to its nearest centroid.
pub fn calculate_inertia(data: ArrayView2<'_, f64>, centroids: ArrayView2<'_, f64>) -> f64 {
    data.outer_iter()
        .map(|point| {
            centroids
                .outer_iter()
                .map(|centroid| squared_euclidean_distance(point, centroid))
                .fold(f64::INFINITY, f64::min)
        })
        .sum()
}
