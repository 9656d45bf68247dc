use core::{fmt::Display, marker::PhantomData};

use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

/// Offset between Kelvin and Celsius.
pub const KELVIN_OFFSET: f32 = 273.15;

const ABSOLUTE_ZERO_C: f32 = -KELVIN_OFFSET;

pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9f32 / 5f32 + 32f32
}

pub fn fahrenheit_to_celsius(fahrenheit: f32) -> f32 {
    (fahrenheit - 32f32) * 5f32 / 9f32
}

/// Store physical unit value of Temperature. Stored in degrees Celsius.
///
/// ```
/// use common::physical::Temperature;
/// let temperature = Temperature::try_from(100f32).expect("Failed to get Temperature representation.");
/// assert_eq!(temperature.celsius(), 100f32);
/// assert_eq!(temperature.fahrenheit(), 212f32);
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, PartialOrd)]
pub struct Temperature {
    celsius: f32,

    /// Make sure this can't be constructed with struct literals.
    /// This ensures that absolute zero can't be circumvented.
    _private: PhantomData<()>,
}

/// Represents errors in creating or using the `Temperature` type.
#[derive(Debug, Error, PartialEq)]
pub enum TemperatureError {
    /// The Temperature was trying to be created below absolute zero or from
    /// a value which is not a number.
    #[error("Value outside of valid state space representation!")]
    OutOfValidStateSpace,
}

impl Temperature {
    /// Construct a Temperature from degrees Fahrenheit.
    /// Will return `OutOfValidStateSpace` below absolute zero.
    pub fn from_fahrenheit(fahrenheit: f32) -> Result<Self, TemperatureError> {
        Self::try_from(fahrenheit_to_celsius(fahrenheit))
    }

    /// Construct a Temperature from Kelvin.
    /// Will return `OutOfValidStateSpace` for negative values.
    pub fn from_kelvin(kelvin: f32) -> Result<Self, TemperatureError> {
        if kelvin.is_sign_negative() {
            return Err(TemperatureError::OutOfValidStateSpace);
        }
        Self::try_from(kelvin + ABSOLUTE_ZERO_C)
    }

    pub fn celsius(&self) -> f32 {
        self.celsius
    }

    pub fn fahrenheit(&self) -> f32 {
        celsius_to_fahrenheit(self.celsius)
    }

    pub fn kelvin(&self) -> f32 {
        self.celsius - ABSOLUTE_ZERO_C
    }
}

impl TryFrom<f32> for Temperature {
    type Error = TemperatureError;

    /// Construct a Temperature from degrees Celsius.
    fn try_from(celsius: f32) -> Result<Self, Self::Error> {
        if celsius.is_nan() || celsius < ABSOLUTE_ZERO_C {
            return Err(TemperatureError::OutOfValidStateSpace);
        }
        Ok(Self {
            celsius,
            _private: PhantomData,
        })
    }
}

impl Into<f32> for Temperature {
    fn into(self) -> f32 {
        self.celsius
    }
}

impl Display for Temperature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "<Temperature: {:.2} degC / {:.2} degF>",
            self.celsius,
            self.fahrenheit()
        )
    }
}
