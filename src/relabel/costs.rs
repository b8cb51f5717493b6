use crate::error::GraphError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parameters for attaching synthetic costs to a relabeled graph.
///
/// Each node gets `comp = round(multiplier * U(mean - uniform_range, mean + uniform_range))`
/// (never below zero). Each edge gets `transfer_data = round(comp(source) / ccr)`, or
/// `round(comp(source) * ccr)` in data-intensive mode, where communication outweighs
/// computation.
#[derive(Debug, Clone, PartialEq)]
pub struct CostModel {
    pub mean: f64,
    pub uniform_range: f64,
    pub ccr: f64,
    pub multiplier: f64,
    pub data_intensive: bool,
    pub seed: u64,
}

impl CostModel {
    pub fn new(mean: f64, uniform_range: f64, ccr: f64) -> Self {
        Self {
            mean,
            uniform_range,
            ccr,
            multiplier: 1.0,
            data_intensive: false,
            seed: 0,
        }
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn data_intensive(mut self, data_intensive: bool) -> Self {
        self.data_intensive = data_intensive;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), GraphError> {
        let finite = [self.mean, self.uniform_range, self.ccr, self.multiplier]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(GraphError::InvalidCostModel(
                "all parameters must be finite".to_string(),
            ));
        }
        if self.mean < 0.0 || self.uniform_range < 0.0 {
            return Err(GraphError::InvalidCostModel(format!(
                "mean ({}) and uniform range ({}) must not be negative",
                self.mean, self.uniform_range
            )));
        }
        if self.ccr <= 0.0 || self.multiplier <= 0.0 {
            return Err(GraphError::InvalidCostModel(format!(
                "ccr ({}) and multiplier ({}) must be positive",
                self.ccr, self.multiplier
            )));
        }
        let upper = self.mean + self.uniform_range;
        if !upper.is_finite() || !(self.multiplier * upper).is_finite() {
            return Err(GraphError::InvalidCostModel(format!(
                "cost range overflows: multiplier ({}) x (mean ({}) + uniform range ({}))",
                self.multiplier, self.mean, self.uniform_range
            )));
        }
        Ok(())
    }

    pub(super) fn sampler(&self) -> CostSampler<'_> {
        CostSampler {
            model: self,
            rng: StdRng::seed_from_u64(self.seed),
        }
    }
}

/// Draws costs from a `CostModel` with its own seeded generator.
pub(super) struct CostSampler<'a> {
    model: &'a CostModel,
    rng: StdRng,
}

impl CostSampler<'_> {
    pub(super) fn computation(&mut self) -> f64 {
        let low = (self.model.mean - self.model.uniform_range).max(0.0);
        let high = self.model.mean + self.model.uniform_range;
        let draw = self.rng.random_range(low..=high);
        (self.model.multiplier * draw).round().max(0.0)
    }

    pub(super) fn transfer(&self, source_comp: f64) -> f64 {
        if self.model.data_intensive {
            (source_comp * self.model.ccr).round()
        } else {
            (source_comp / self.model.ccr).round()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_bad_parameters() {
        assert!(CostModel::new(10.0, 2.0, 1.0).validate().is_ok());
        assert!(CostModel::new(-1.0, 2.0, 1.0).validate().is_err());
        assert!(CostModel::new(10.0, 2.0, 0.0).validate().is_err());
        assert!(
            CostModel::new(10.0, 2.0, 1.0)
                .with_multiplier(0.0)
                .validate()
                .is_err()
        );
        assert!(CostModel::new(f64::NAN, 2.0, 1.0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_overflowing_range() {
        assert!(matches!(
            CostModel::new(1e308, 1e308, 1.0).validate(),
            Err(GraphError::InvalidCostModel(_))
        ));
        assert!(
            CostModel::new(1e300, 1e300, 1.0)
                .with_multiplier(1e300)
                .validate()
                .is_err()
        );
        assert!(CostModel::new(1e300, 1e300, 1.0).validate().is_ok());
    }

    #[test]
    fn test_computation_stays_in_range() {
        let model = CostModel::new(50.0, 10.0, 2.0).with_multiplier(2.0).with_seed(7);
        let mut sampler = model.sampler();
        for _ in 0..200 {
            let comp = sampler.computation();
            assert!((80.0..=120.0).contains(&comp), "{} out of range", comp);
        }
    }

    #[test]
    fn test_zero_range_is_constant() {
        let model = CostModel::new(12.0, 0.0, 4.0);
        let mut sampler = model.sampler();
        assert_eq!(sampler.computation(), 12.0);
        assert_eq!(sampler.transfer(12.0), 3.0);
    }

    #[test]
    fn test_data_intensive_scales_transfer_up() {
        let model = CostModel::new(12.0, 0.0, 4.0).data_intensive(true);
        assert_eq!(model.sampler().transfer(12.0), 48.0);
    }
}
