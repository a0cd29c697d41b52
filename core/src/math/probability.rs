use ndarray::{ArrayBase, ArrayD, Data, Dimension};

use crate::prelude::{StatError, StatResult};

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Converts annual probabilities into the equivalent monthly ones.
///
/// A probability of exactly one maps to one; the `ln(0)` intermediate
/// collapses through `exp` without a special case.
pub fn convert_annual_to_monthly_probability<S, D>(
    annual: &ArrayBase<S, D>,
) -> StatResult<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    ensure_probability_range(annual, "annual")?;
    Ok(annual
        .mapv(|p| 1.0 - ((1.0 - p).ln() / MONTHS_PER_YEAR).exp())
        .into_dyn())
}

/// Converts monthly probabilities into the equivalent annual ones.
pub fn convert_monthly_to_annual_probability<S, D>(
    monthly: &ArrayBase<S, D>,
) -> StatResult<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    ensure_probability_range(monthly, "monthly")?;
    Ok(monthly
        .mapv(|p| 1.0 - (1.0 - p).powf(MONTHS_PER_YEAR))
        .into_dyn())
}

/// Converts probabilities over the given time window into rates.
pub fn prob_to_rate<S, D>(prob: &ArrayBase<S, D>, time: f64) -> StatResult<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    ensure_probability_range(prob, "probability")?;
    Ok(prob.mapv(|p| -(1.0 - p).ln() / time).into_dyn())
}

/// Converts rates over the given time window into probabilities.
pub fn rate_to_prob<S, D>(rate: &ArrayBase<S, D>, time: f64) -> StatResult<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if rate.iter().any(|&r| r < 0.0) {
        return Err(StatError::InvalidInput("rate must be >= 0".to_string()));
    }
    Ok(rate.mapv(|r| 1.0 - (-r * time).exp()).into_dyn())
}

/// Multiplies a monthly probability by a risk or hazard ratio via rate space.
pub fn month_prob_mult_ratio<S, D>(prob: &ArrayBase<S, D>, ratio: f64) -> StatResult<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let rate = prob_to_rate(prob, 1.0 / MONTHS_PER_YEAR)?;
    let scaled = rate.mapv(|r| r * ratio);
    rate_to_prob(&scaled, 1.0 / MONTHS_PER_YEAR)
}

fn ensure_probability_range<S, D>(values: &ArrayBase<S, D>, label: &str) -> StatResult<()>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if values.iter().any(|&p| p < 0.0) {
        return Err(StatError::InvalidInput(format!("{} must be >= 0", label)));
    }
    if values.iter().any(|&p| p > 1.0) {
        return Err(StatError::InvalidInput(format!("{} must be <= 1", label)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    const TOL: f64 = 1e-10;

    #[test]
    fn annual_and_monthly_conversions_are_circular() {
        let monthly: Vec<f64> = (0..10).map(|i| i as f64 / 1000.0).collect();
        let mut annual = monthly.clone();
        for _ in 1..12 {
            for (a, &m) in annual.iter_mut().zip(&monthly) {
                *a = 1.0 - (1.0 - *a) * (1.0 - m);
            }
        }
        let back = convert_annual_to_monthly_probability(&arr1(&annual)).unwrap();
        for (computed, &wanted) in back.iter().zip(&monthly) {
            assert!((computed - wanted).abs() < TOL);
        }
        let forward = convert_monthly_to_annual_probability(&arr1(&monthly)).unwrap();
        for (computed, &wanted) in forward.iter().zip(&annual) {
            assert!((computed - wanted).abs() < TOL);
        }
    }

    #[test]
    fn boundary_probabilities_convert_exactly() {
        let result = convert_annual_to_monthly_probability(&arr1(&[0.0, 1.0])).unwrap();
        assert_eq!(result[[0]], 0.0);
        assert_eq!(result[[1]], 1.0);
    }

    #[test]
    fn out_of_range_probabilities_are_rejected() {
        let below = arr1(&[0.0, 0.5, -1.0]);
        assert!(convert_annual_to_monthly_probability(&below).is_err());
        let above = arr1(&[0.0, 0.5, 1.5]);
        assert!(convert_monthly_to_annual_probability(&above).is_err());
        assert!(prob_to_rate(&above, 1.0).is_err());
        assert!(rate_to_prob(&arr1(&[-0.1]), 1.0).is_err());
    }

    #[test]
    fn rate_and_probability_are_inverse_maps() {
        let prob = arr1(&[0.0, 0.1, 0.5]);
        let rate = prob_to_rate(&prob, 2.0).unwrap();
        let back = rate_to_prob(&rate, 2.0).unwrap();
        for (computed, &wanted) in back.iter().zip(prob.iter()) {
            assert!((computed - wanted).abs() < TOL);
        }
    }

    #[test]
    fn hazard_ratio_scales_through_rate_space() {
        let prob = arr1(&[0.1]);
        let identity = month_prob_mult_ratio(&prob, 1.0).unwrap();
        assert!((identity[[0]] - 0.1).abs() < TOL);
        let doubled = month_prob_mult_ratio(&prob, 2.0).unwrap();
        assert!((doubled[[0]] - 0.19).abs() < TOL);
    }
}
