use crate::Float;

pub const ELO_MIN: Float = 0.0;
pub const ELO_MAX: Float = 3000.0;
pub const ELO_STEP: Float = 5.0;
pub const PRIOR_MEAN: Float = 1500.0;
pub const PRIOR_STD_DEV: Float = 300.0;

/// Discrete probability mass over a fixed grid of rating values.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    pub values: Vec<Float>,
    pub probs: Vec<Float>,
}

impl Distribution {

    /// Normal prior truncated to `[ELO_MIN, ELO_MAX)`.
    pub fn normal_prior() -> Distribution {
        let n = ((ELO_MAX-ELO_MIN)/ELO_STEP) as usize;
        let values = (0..n).map(|i| ELO_MIN + i as Float*ELO_STEP).collect::<Vec<Float>>();
        let probs = values.iter().map(|v| {
            let z = (v-PRIOR_MEAN)/PRIOR_STD_DEV;
            (-0.5*z*z).exp()
        }).collect();
        let mut distribution = Distribution { values, probs };
        distribution.normalize();
        distribution
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mean(&self) -> Float {
        self.values.iter().zip(self.probs.iter()).map(|(v,p)| v*p).sum()
    }

    pub fn std(&self) -> Float {
        let mean = self.mean();
        self.values.iter().zip(self.probs.iter()).map(|(v,p)| (v-mean).powi(2)*p).sum::<Float>().sqrt()
    }

    /// Smallest grid value at which the cumulative mass reaches `p` percent.
    pub fn percentile(&self, p: Float) -> Float {
        let target = p/100.0;
        let mut cumulative = 0.0;
        for (v,prob) in self.values.iter().zip(self.probs.iter()) {
            cumulative += prob;
            if cumulative >= target {
                return *v;
            }
        }
        self.values.last().cloned().unwrap_or(ELO_MIN)
    }

    /// Rescales the mass to sum to one. A zero mass is left untouched.
    pub fn normalize(&mut self) {
        let sum: Float = self.probs.iter().sum();
        if sum > 0.0 {
            self.probs.iter_mut().for_each(|p| *p /= sum);
        }
    }
}
