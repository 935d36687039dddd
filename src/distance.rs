use ndarray::ArrayView1;

/// Squared L2 distance. Both views are assumed to have the same length.
pub fn squared_euclidean_distance(us: ArrayView1<'_, f64>, them: ArrayView1<'_, f64>) -> f64 {
    us.iter()
        .zip(them.iter())
        .map(|(a, b)| {
            let diff = a - b;
            diff * diff
        })
        .sum::<f64>()
}

pub fn euclidean_distance(us: ArrayView1<'_, f64>, them: ArrayView1<'_, f64>) -> f64 {
    squared_euclidean_distance(us, them).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_squared_distance() {
        let a = array![0.0, 0.0];
        let b = array![3.0, 4.0];
        assert_eq!(squared_euclidean_distance(a.view(), b.view()), 25.0);
        assert_eq!(euclidean_distance(a.view(), b.view()), 5.0);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = array![1.5, -2.0, 7.25];
        assert_eq!(squared_euclidean_distance(a.view(), a.view()), 0.0);
    }
}
