use std::collections::HashSet;
use std::hash::Hash;

use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::error::{Error, Result};

/// Read-only view over validated input: one id per row of an `N x d` feature matrix.
///
/// Construction checks `N >= 1`, `d >= 1`, finite values and unique ids, so
/// everything downstream can index rows without re-validating.
#[derive(Debug, Clone)]
pub struct PointSet<Id> {
    ids: Vec<Id>,
    data: Array2<f64>,
}

impl<Id: Eq + Hash> PointSet<Id> {
    pub fn new(ids: Vec<Id>, data: Array2<f64>) -> Result<Self> {
        if ids.is_empty() || data.nrows() == 0 {
            return Err(Error::EmptyInput);
        }
        if ids.len() != data.nrows() {
            return Err(Error::InvalidParameter {
                name: "ids",
                message: "id count does not match the number of rows",
            });
        }
        if data.ncols() == 0 {
            return Err(Error::InvalidParameter {
                name: "data",
                message: "points must have at least one feature",
            });
        }

        if let Some(((row, col), _)) = data.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::NonFiniteValue { row, col });
        }

        let mut seen = HashSet::with_capacity(ids.len());
        if let Some(index) = ids.iter().position(|id| !seen.insert(id)) {
            return Err(Error::DuplicateId { index });
        }

        Ok(Self { ids, data })
    }

    /// Build from ragged rows, rejecting any row whose length differs from the first.
    pub fn from_rows(ids: Vec<Id>, rows: &[Vec<f64>]) -> Result<Self> {
        let dim = rows.first().map(Vec::len).ok_or(Error::EmptyInput)?;
        let mut flat = Vec::with_capacity(rows.len() * dim);
        for row in rows {
            if row.len() != dim {
                return Err(Error::DimensionMismatch {
                    expected: dim,
                    found: row.len(),
                });
            }
            flat.extend_from_slice(row);
        }
        let data = Array2::from_shape_vec((rows.len(), dim), flat)
            .map_err(|e| Error::Internal(e.to_string()))?;
        Self::new(ids, data)
    }
}

impl<Id> PointSet<Id> {
    /// Number of points `N`.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Feature dimensionality `d`.
    pub fn dim(&self) -> usize {
        self.data.ncols()
    }

    pub fn ids(&self) -> &[Id] {
        &self.ids
    }

    pub fn id(&self, index: usize) -> &Id {
        &self.ids[index]
    }

    pub fn data(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    pub fn row(&self, index: usize) -> ArrayView1<'_, f64> {
        self.data.row(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_point_set_shape() {
        let points = PointSet::new(vec!["a", "b", "c"], array![[0.0, 1.0], [2.0, 3.0], [4.0, 5.0]]).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points.dim(), 2);
        assert_eq!(points.id(1), &"b");
        assert_eq!(points.row(2).to_vec(), vec![4.0, 5.0]);
    }

    #[test]
    fn test_point_set_rejects_empty() {
        let data = Array2::<f64>::zeros((0, 2));
        assert!(matches!(PointSet::<u32>::new(vec![], data), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_point_set_rejects_zero_dimension() {
        let data = Array2::<f64>::zeros((2, 0));
        assert!(matches!(
            PointSet::new(vec![1, 2], data),
            Err(Error::InvalidParameter { name: "data", .. })
        ));
    }

    #[test]
    fn test_point_set_rejects_ragged_rows() {
        let rows = vec![vec![0.0, 0.0], vec![1.0]];
        assert!(matches!(
            PointSet::from_rows(vec![1, 2], &rows),
            Err(Error::DimensionMismatch { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_point_set_rejects_non_finite() {
        let data = array![[0.0, 1.0], [f64::NAN, 2.0]];
        assert!(matches!(
            PointSet::new(vec![1, 2], data),
            Err(Error::NonFiniteValue { row: 1, col: 0 })
        ));
    }

    #[test]
    fn test_point_set_rejects_duplicate_ids() {
        let data = array![[0.0], [1.0], [2.0]];
        assert!(matches!(
            PointSet::new(vec![7, 8, 7], data),
            Err(Error::DuplicateId { index: 2 })
        ));
    }

    #[test]
    fn test_point_set_rejects_id_count_mismatch() {
        let data = array![[0.0], [1.0]];
        assert!(PointSet::new(vec![1], data).is_err());
    }
}
