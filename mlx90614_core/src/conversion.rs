pub use common::physical::{celsius_to_fahrenheit, fahrenheit_to_celsius, KELVIN_OFFSET};

/// Temperature resolution of the RAM temperature registers, Kelvin per LSB.
pub const KELVIN_PER_LSB: f32 = 0.02;

/// Largest distance between `temperature_from_raw` and the exact decimal
/// result over every raw value. The sensor itself resolves 0.02 degrees.
pub const CONVERSION_ERROR: f32 = 2e-4;

/// Convert a raw temperature register value into degrees Celsius.
/// The same formula applies to the ambient and both object registers.
///
/// Computed in `f32`. Rounding puts the result up to about 1.2e-4 degrees
/// away from `raw * 0.02 - 273.15` evaluated exactly, see `CONVERSION_ERROR`.
pub fn temperature_from_raw(raw: u16) -> f32 {
    raw as f32 * KELVIN_PER_LSB - KELVIN_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 0.001;

    #[test]
    fn test_temperature_from_raw_bounds() {
        assert_eq!(temperature_from_raw(0), -273.15f32);
        assert!((temperature_from_raw(0xFFFF) - 1037.55f32).abs() < TOLERANCE);
    }

    #[test]
    fn test_fahrenheit_is_shared_with_temperature_type() {
        let celsius = temperature_from_raw(15242);
        let temperature = common::physical::Temperature::try_from(celsius)
            .expect("Failed to get Temperature representation.");
        assert_eq!(celsius_to_fahrenheit(celsius), temperature.fahrenheit());
    }

    #[test]
    fn test_temperature_from_raw_known_fixture() {
        let raw = u16::from_le_bytes([0x8A, 0x3B]);
        assert_eq!(raw, 15242);
        assert!((temperature_from_raw(raw) - 31.69f32).abs() < TOLERANCE);
    }

    #[test]
    fn test_temperature_from_raw_matches_reference() {
        for raw in 0..=u16::MAX {
            let reference = raw as f64 * 0.02 - 273.15;
            let result = temperature_from_raw(raw) as f64;
            assert!(
                (result - reference).abs() < CONVERSION_ERROR as f64,
                "raw={} result={} reference={}",
                raw,
                result,
                reference
            );
        }
    }
}
