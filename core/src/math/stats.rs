pub struct StatsHelper;

impl StatsHelper {
    /// Arithmetic mean; zero for an empty slice.
    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Largest absolute value; zero for an empty slice.
    pub fn max_abs(values: &[f64]) -> f64 {
        values.iter().fold(0.0, |acc, v| acc.max(v.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_slice_is_zero() {
        assert_eq!(StatsHelper::mean(&[]), 0.0);
    }

    #[test]
    fn mean_handles_single_value() {
        assert_eq!(StatsHelper::mean(&[0.4]), 0.4);
    }

    #[test]
    fn max_abs_ignores_sign() {
        assert_eq!(StatsHelper::max_abs(&[0.2, -0.7, 0.5]), 0.7);
    }
}
