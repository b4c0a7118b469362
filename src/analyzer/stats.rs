//! Descriptive statistics over latency samples.

use super::types::{LatencyRecord, LatencyStats};

impl LatencyStats {
    /// Min, max, mean and median of `samples`, or `None` when empty.
    ///
    /// The median of an even number of samples is the mean of the two middle values.
    pub fn from_samples(samples: &[u32]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let mut sorted = samples.to_vec();
        sorted.sort_unstable();

        let n = sorted.len();
        let sum: u64 = sorted.iter().map(|&v| v as u64).sum();
        let median = if n % 2 == 1 {
            sorted[n / 2] as f64
        } else {
            (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0
        };

        Some(Self {
            min: sorted[0],
            max: sorted[n - 1],
            mean: sum as f64 / n as f64,
            median,
        })
    }
}

impl LatencyRecord {
    pub fn stats(&self) -> Option<LatencyStats> {
        LatencyStats::from_samples(&self.samples)
    }
}

/// Round half away from zero to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Sample standard deviation (n - 1 denominator); zero for fewer than two samples.
pub fn sample_std_dev(samples: &[f64]) -> f64 {
    let n = samples.len();
    if n < 2 {
        return 0.0;
    }
    let mean = samples.iter().sum::<f64>() / n as f64;
    let var = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    var.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_run_device_zero_mean() {
        let samples = [
            161, 139, 134, 145, 164, 171, 154, 180, 161, 183, 210, 192, 131, 138, 179, 152, 143, 171, 151, 126,
        ];
        let stats = LatencyStats::from_samples(&samples).unwrap();
        assert!((stats.mean - 159.25).abs() < 1e-9);
        assert_eq!(round_to_tenth(stats.mean), 159.3);
        assert_eq!(format!("{:.1}", round_to_tenth(stats.mean)), "159.3");
        assert_eq!(stats.min, 126);
        assert_eq!(stats.max, 210);
        assert_eq!(stats.median, 157.5);
    }

    #[test]
    fn all_zero_samples() {
        let stats = LatencyStats::from_samples(&[0; 20]).unwrap();
        assert_eq!(stats.min, 0);
        assert_eq!(stats.max, 0);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.median, 0.0);
    }

    #[test]
    fn odd_count_median_is_middle_value() {
        let stats = LatencyStats::from_samples(&[9, 1, 5]).unwrap();
        assert_eq!(stats.median, 5.0);
        assert_eq!(stats.mean, 5.0);
    }

    #[test]
    fn empty_samples_have_no_stats() {
        assert!(LatencyStats::from_samples(&[]).is_none());
    }

    #[test]
    fn std_dev_matches_hand_computation() {
        assert_eq!(sample_std_dev(&[2.0]), 0.0);
        // mean 5, squared deviations 9 + 1 + 1 + 9 = 20, / 3
        let sd = sample_std_dev(&[2.0, 4.0, 6.0, 8.0]);
        assert!((sd - (20.0_f64 / 3.0).sqrt()).abs() < 1e-12);
    }
}
