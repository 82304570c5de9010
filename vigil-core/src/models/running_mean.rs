use serde::{Deserialize, Serialize};

/// Incrementally maintained mean: `mean ← mean + (value − mean) / n`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunningMean {
    count: u64,
    mean: f64,
}

impl RunningMean {
    pub fn record(&mut self, value: f64) {
        self.count += 1;
        self.mean += (value - self.mean) / self.count as f64;
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_batch_mean() {
        let values = [0.2, 0.9, 0.4, 0.0, 1.0, 0.35];
        let mut running = RunningMean::default();
        for v in values {
            running.record(v);
        }
        let batch: f64 = values.iter().sum::<f64>() / values.len() as f64;
        assert!((running.mean() - batch).abs() < 1e-12);
        assert_eq!(running.count(), values.len() as u64);
    }

    #[test]
    fn empty_mean_is_zero() {
        assert_eq!(RunningMean::default().mean(), 0.0);
    }
}
