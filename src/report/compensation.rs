// Humidity compensation for optical PM sensors (RIVM field fit for Venlo):
//   correction = 3.9 * (100 - RH)^-0.43, compensated = raw / correction
// Other published fits: Amersfoort 3.4 * (100 - RH)^-0.40, Amsterdam 2.3 * (100 - RH)^-0.38.

const FACTOR: f64 = 3.9;
const EXPONENT: f64 = -0.43;

/// Stand-in for saturated readings (RH >= 100), where the fit diverges.
pub const SATURATED_RH: f64 = 99.9;

/// The fit applies unchanged for RH in [0, 100). Negative RH counts as 0.
pub fn correction_factor(rh: f64) -> f64 {
    let rh = if rh >= 100.0 { SATURATED_RH } else { rh.max(0.0) };
    FACTOR * (100.0 - rh).powf(EXPONENT)
}

pub fn compensate_for_rh(value: f64, rh: f64) -> f64 {
    value / correction_factor(rh)
}
