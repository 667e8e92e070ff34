use crate::schema::RoundingMode;
use crate::utils::round_cents;
use crate::validator::WeightVector;

pub fn round_to(value: f64, mode: RoundingMode) -> f64 {
    match mode {
        RoundingMode::None => value,
        RoundingMode::TwoDecimal => round_cents(value),
        RoundingMode::Integer => value.round(),
    }
}

/// Spreads an annual total across twelve months.
///
/// With rounding enabled the whole residual between the rounded annual
/// total and the sum of rounded months is booked to December, so the
/// output always sums to `round_to(annual_total, rounding)`.
pub fn allocate(annual_total: f64, weights: &WeightVector, rounding: RoundingMode) -> [f64; 12] {
    let mut monthly = [0.0; 12];
    for (slot, weight) in monthly.iter_mut().zip(weights.iter()) {
        *slot = annual_total * weight;
    }

    if rounding == RoundingMode::None {
        return monthly;
    }

    for value in monthly.iter_mut() {
        *value = round_to(*value, rounding);
    }

    let allocated: f64 = monthly.iter().sum();
    let residual = round_to(annual_total, rounding) - allocated;
    monthly[11] = round_to(monthly[11] + residual, rounding);

    monthly
}
