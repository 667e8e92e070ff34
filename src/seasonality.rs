use crate::error::Result;
use crate::schema::WeightProfile;
use crate::validator::WeightVector;

pub fn get_profile_weights(profile: &WeightProfile) -> Result<WeightVector> {
    match profile {
        WeightProfile::Flat => Ok(WeightVector::uniform()),

        WeightProfile::RetailPeak => WeightVector::new(&[
            0.045, 0.045, 0.045, 0.055, 0.055, 0.060, 0.065, 0.070, 0.075, 0.080, 0.105, 0.300,
        ]),

        WeightProfile::SummerHigh => WeightVector::new(&[
            0.05, 0.05, 0.05, 0.12, 0.12, 0.12, 0.12, 0.12, 0.07, 0.07, 0.07, 0.04,
        ]),

        WeightProfile::SaasGrowth => {
            let base = 0.06;
            let increment = 0.04 / 11.0;
            let ramp: Vec<f64> = (0..12).map(|i| base + i as f64 * increment).collect();
            let total: f64 = ramp.iter().sum();
            let weights: Vec<f64> = ramp.iter().map(|w| w / total).collect();
            WeightVector::new(&weights)
        }

        // Operator supplied; validated as-is, never rescaled.
        WeightProfile::Custom(weights) => WeightVector::new(weights),
    }
}
