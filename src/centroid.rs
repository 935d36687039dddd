use ndarray::{Array2, ArrayView1, ArrayView2};

/// Running per-cluster coordinate sums for one update step.
#[derive(Debug, Clone)]
pub struct ClusterSums {
    sums: Array2<f64>,
    counts: Vec<usize>,
}

impl ClusterSums {
    pub fn new(k: usize, dim: usize) -> Self {
        Self {
            sums: Array2::zeros((k, dim)),
            counts: vec![0; k],
        }
    }

    pub fn update_centroid(&mut self, cluster: usize, point: ArrayView1<'_, f64>) {
        let mut row = self.sums.row_mut(cluster);
        row += &point;
        self.counts[cluster] += 1;
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Turn sums into means. A cluster that received no points keeps its
    /// position from `previous`.
    pub fn finalize_centroids(self, previous: ArrayView2<'_, f64>) -> Array2<f64> {
        let Self { mut sums, counts } = self;
        for (cluster, (mut row, &count)) in sums.outer_iter_mut().zip(counts.iter()).enumerate() {
            if count == 0 {
                log::warn!("cluster {} is empty, keeping its previous centroid", cluster);
                row.assign(&previous.row(cluster));
            } else {
                let count = count as f64;
                row.mapv_inplace(|value| value / count);
            }
        }
        sums
    }
}
