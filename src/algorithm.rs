use itertools::Itertools;
use ndarray::{Array2, ArrayView2};

use crate::centroid::ClusterSums;
use crate::convergence::{has_converged, max_displacement};
use crate::distance::squared_euclidean_distance;
use crate::error::{Error, Result};
use crate::points::PointSet;

/// Outcome of Lloyd refinement.
#[derive(Debug, Clone, PartialEq)]
pub struct Refinement {
    /// `k x d`, rows in the same order as the initial centroids.
    pub centroids: Array2<f64>,
    /// Assignment + update passes performed.
    pub iterations: usize,
    /// Whether the last pass moved every centroid less than epsilon.
    pub converged: bool,
}

/// Index of the nearest centroid for every point. Ties go to the lowest index.
pub fn assign(data: ArrayView2<'_, f64>, centroids: ArrayView2<'_, f64>) -> Vec<usize> {
    data.outer_iter()
        .map(|point| {
            centroids
                .outer_iter()
                .map(|centroid| squared_euclidean_distance(point, centroid))
                .position_min_by(|a, b| a.total_cmp(b))
                .unwrap_or(0)
        })
        .collect_vec()
}

/// Lloyd's iteration from the given centroids.
///
/// Stops once no centroid moves `epsilon` or more, or after `max_iter` passes,
/// whichever comes first. Sums are accumulated in ascending point order, so the
/// result is bit-for-bit reproducible for identical inputs.
pub fn refine<Id>(
    points: &PointSet<Id>,
    initial_centroids: ArrayView2<'_, f64>,
    max_iter: usize,
    epsilon: f64,
) -> Result<Refinement> {
    let n = points.len();
    let k = initial_centroids.nrows();
    if k <= 1 || k >= n {
        return Err(Error::InvalidClusterCount {
            requested: k,
            n_items: n,
        });
    }
    if initial_centroids.ncols() != points.dim() {
        return Err(Error::DimensionMismatch {
            expected: points.dim(),
            found: initial_centroids.ncols(),
        });
    }
    if let Some(((row, col), _)) = initial_centroids.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(Error::NonFiniteValue { row, col });
    }
    if max_iter < 1 {
        return Err(Error::InvalidParameter {
            name: "max_iter",
            message: "must be at least 1",
        });
    }
    if epsilon.is_nan() || epsilon < 0.0 {
        return Err(Error::InvalidParameter {
            name: "epsilon",
            message: "must be a non-negative number",
        });
    }

    let data = points.data();
    let mut centroids = initial_centroids.to_owned();
    let mut iterations = 0;
    let mut converged = false;

    while iterations < max_iter {
        let labels = assign(data, centroids.view());

        let mut sums = ClusterSums::new(k, points.dim());
        for (point, &label) in data.outer_iter().zip(labels.iter()) {
            sums.update_centroid(label, point);
        }
        let new_centroids = sums.finalize_centroids(centroids.view());
        if let Some(((row, col), _)) = new_centroids.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::Internal(format!(
                "centroid {} coordinate {} is not finite after update",
                row, col
            )));
        }

        let shift = max_displacement(centroids.view(), new_centroids.view());
        let stop = has_converged(centroids.view(), new_centroids.view(), epsilon);
        centroids = new_centroids;
        iterations += 1;
        log::debug!("iteration {}: max centroid shift {:.6}", iterations, shift);

        if stop {
            converged = true;
            log::info!("Converged after {} iterations", iterations);
            break;
        }
    }

    if !converged {
        log::warn!("Stopped at the iteration cap ({}) without converging", max_iter);
    }

    Ok(Refinement {
        centroids,
        iterations,
        converged,
    })
}
