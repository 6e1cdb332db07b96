extern crate num_traits;

use num_traits::{float, FloatConst};

/// Normal probability density at `x`. `std` must be positive.
pub fn normal_pdf<F: float::Float + FloatConst>(x: F, mean: F, std: F) -> F {
    let two = F::one() + F::one();
    let exponent = (-((x-mean)/std).powi(2)/two).exp();
    let factor = F::one()/(std*(two*F::PI()).sqrt());
    factor*exponent
}

/// `count` evenly spaced values from `start` to `end`, both ends included.
pub fn linspace<F: float::Float>(start: F, end: F, count: usize) -> Vec<F> {
    match count {
        0 => vec!(),
        1 => vec!(start),
        _ => {
            let last = F::from(count-1).expect("sample count representable as float");
            let step = (end-start)/last;
            (0..count).map(|i| {
                match i {
                    i if i == count-1 => end,
                    i => start + step*F::from(i).expect("index representable as float")
                }
            }).collect()
        }
    }
}

/// Density evaluated at each sample and multiplied by `std*rescale`.
///
/// The factor cancels the `1/std` of the density so every curve peaks near
/// `rescale/sqrt(2*pi)` regardless of its spread. The result is a legibility aid and no
/// longer integrates to one.
pub fn scaled_density<F: float::Float + FloatConst>(samples: &[F], mean: F, std: F, rescale: F) -> Vec<F> {
    samples.iter().map(|&x| normal_pdf(x, mean, std)*std*rescale).collect()
}

pub fn max_value<F: float::Float>(values: &[F]) -> Option<F> {
    values.iter().cloned().fold(None, |acc, v| match acc {
        Some(m) if m >= v => Some(m),
        _ => Some(v)
    })
}
