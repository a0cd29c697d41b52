use crate::prelude::{StatError, StatResult};

/// Sample count, mean, and standard deviation for one data set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetMoments {
    pub count: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl SetMoments {
    pub fn new(count: f64, mean: f64, std_dev: f64) -> Self {
        Self {
            count,
            mean,
            std_dev,
        }
    }
}

/// Combines the moments of two non-overlapping data sets.
///
/// The combined mean is the weighted average; the combined deviation uses the
/// pooled sample formula. Two empty sets combine to zeros, and a combined
/// count of one takes the deviation of whichever set held the single sample.
pub fn combine_sets(first: SetMoments, second: SetMoments) -> StatResult<SetMoments> {
    if first.count < 0.0 || second.count < 0.0 {
        return Err(StatError::InvalidInput(
            "sample counts must be >= 0".to_string(),
        ));
    }
    if first.std_dev < 0.0 || second.std_dev < 0.0 {
        return Err(StatError::InvalidInput(
            "standard deviations must be >= 0".to_string(),
        ));
    }

    let count = first.count + second.count;
    if count == 0.0 {
        return Ok(SetMoments::new(0.0, 0.0, 0.0));
    }

    let mean = (first.count * first.mean + second.count * second.mean) / count;
    let std_dev = if count != 1.0 {
        ((1.0 / (count - 1.0))
            * ((first.count - 1.0) * first.std_dev.powi(2)
                + first.count * first.mean.powi(2)
                + (second.count - 1.0) * second.std_dev.powi(2)
                + second.count * second.mean.powi(2)
                - count * mean.powi(2)))
            .sqrt()
    } else if first.count == 1.0 {
        first.std_dev
    } else if second.count == 1.0 {
        second.std_dev
    } else {
        return Err(StatError::InvalidInput(
            "combined count is 1 but neither set holds a single sample".to_string(),
        ));
    };

    Ok(SetMoments::new(count, mean, std_dev))
}
