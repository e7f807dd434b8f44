use crate::domain::error::MetricsError;

// Magnus-Tetens coefficients (Celsius).
const MAGNUS_A: f32 = 17.27;
const MAGNUS_B: f32 = 237.7;

/// Dew point in °C from air temperature (°C) and relative humidity (%),
/// via the Magnus-Tetens approximation.
///
/// Humidity must sit in (0, 100]: zero sends the logarithm to negative
/// infinity, so it is rejected instead of computed. Temperature must be
/// finite and above -237.7 °C to keep the formula away from its
/// singularity. The returned value is unrounded; display layers format
/// to two decimals.
pub fn dew_point(temperature_c: f32, relative_humidity: f32) -> Result<f32, MetricsError> {
    if !temperature_c.is_finite() || temperature_c <= -MAGNUS_B {
        return Err(MetricsError::InvalidInput(format!(
            "temperature {temperature_c} °C out of range"
        )));
    }
    if !(relative_humidity > 0.0 && relative_humidity <= 100.0) {
        return Err(MetricsError::InvalidInput(format!(
            "relative humidity {relative_humidity}% outside (0, 100]"
        )));
    }

    let alpha = (MAGNUS_A * temperature_c) / (MAGNUS_B + temperature_c)
        + (relative_humidity / 100.0).ln();
    Ok((MAGNUS_B * alpha) / (MAGNUS_A - alpha))
}
