use ndarray::{ArrayBase, ArrayD, ArrayView1, Axis, Data, Dimension, IxDyn};
use num_complex::{Complex32, Complex64};

use crate::prelude::{StatError, StatResult};

/// Element types that reduce to a non-negative real squared magnitude.
///
/// Complex elements multiply by their conjugate, which keeps the averaged
/// intermediate real even where naive squaring would not.
pub trait SquaredMagnitude: Clone {
    fn squared_magnitude(&self) -> f64;
}

impl SquaredMagnitude for f64 {
    fn squared_magnitude(&self) -> f64 {
        self * self
    }
}

impl SquaredMagnitude for f32 {
    fn squared_magnitude(&self) -> f64 {
        f64::from(*self) * f64::from(*self)
    }
}

impl SquaredMagnitude for Complex64 {
    fn squared_magnitude(&self) -> f64 {
        self.norm_sqr()
    }
}

impl SquaredMagnitude for Complex32 {
    fn squared_magnitude(&self) -> f64 {
        f64::from(self.norm_sqr())
    }
}

/// Root-mean-square of an array of any rank, real or complex.
///
/// With `axis` unset the whole array collapses to a 0-d result; otherwise the
/// reduction runs along the given axis, which must be valid for the input
/// rank. With `keep_dims` the reduced axes are retained with size one. A
/// reduction over zero elements yields NaN.
pub fn rms<S, D>(
    data: &ArrayBase<S, D>,
    axis: Option<usize>,
    keep_dims: bool,
) -> StatResult<ArrayD<f64>>
where
    S: Data,
    S::Elem: SquaredMagnitude,
    D: Dimension,
{
    let squared = data.mapv(|value| value.squared_magnitude()).into_dyn();
    let ndim = squared.ndim();
    match axis {
        None => {
            let value = squared.mean().unwrap_or(f64::NAN).sqrt();
            Ok(full_reduction(value, ndim, keep_dims))
        }
        Some(index) => {
            check_axis(index, ndim)?;
            let mean = match squared.mean_axis(Axis(index)) {
                Some(mean) => mean,
                // zero-length axis: mean_axis gives up, keep the lane shape
                None => nan_lanes(squared.shape(), index),
            };
            let mut result = mean.mapv(f64::sqrt);
            if keep_dims {
                result = result.insert_axis(Axis(index));
            }
            Ok(result)
        }
    }
}

/// Root-mean-square that skips NaN elements instead of propagating them.
///
/// A lane with no finite elements yields NaN, mirroring the plain reduction
/// over empty input.
pub fn nan_rms<S, D>(
    data: &ArrayBase<S, D>,
    axis: Option<usize>,
    keep_dims: bool,
) -> StatResult<ArrayD<f64>>
where
    S: Data,
    S::Elem: SquaredMagnitude,
    D: Dimension,
{
    let squared = data.mapv(|value| value.squared_magnitude()).into_dyn();
    let ndim = squared.ndim();
    match axis {
        None => {
            let value = nan_mean(squared.iter().copied()).sqrt();
            Ok(full_reduction(value, ndim, keep_dims))
        }
        Some(index) => {
            check_axis(index, ndim)?;
            let mut result = squared.map_axis(Axis(index), |lane: ArrayView1<f64>| {
                nan_mean(lane.iter().copied()).sqrt()
            });
            if keep_dims {
                result = result.insert_axis(Axis(index));
            }
            Ok(result)
        }
    }
}

/// RMS of a single value: absolute value for reals, magnitude for complex.
pub fn rms_scalar<T: SquaredMagnitude>(value: &T) -> f64 {
    value.squared_magnitude().sqrt()
}

/// RMS of a flat sample buffer. Empty input yields NaN.
pub fn rms_slice(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return f64::NAN;
    }
    let sum_sq: f64 = samples.iter().map(|&v| v * v).sum();
    (sum_sq / samples.len() as f64).sqrt()
}

/// Extracts the single value from a fully reduced result.
pub fn scalar(result: &ArrayD<f64>) -> Option<f64> {
    if result.len() == 1 {
        result.iter().next().copied()
    } else {
        None
    }
}

fn check_axis(axis: usize, ndim: usize) -> StatResult<()> {
    if axis >= ndim {
        return Err(StatError::AxisOutOfRange { axis, ndim });
    }
    Ok(())
}

fn full_reduction(value: f64, ndim: usize, keep_dims: bool) -> ArrayD<f64> {
    let shape = if keep_dims { vec![1; ndim] } else { Vec::new() };
    ArrayD::from_elem(IxDyn(&shape), value)
}

fn nan_lanes(shape: &[usize], axis: usize) -> ArrayD<f64> {
    let mut reduced = shape.to_vec();
    reduced.remove(axis);
    ArrayD::from_elem(IxDyn(&reduced), f64::NAN)
}

fn nan_mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        if !value.is_nan() {
            sum += value;
            count += 1;
        }
    }
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}
