use std::fmt::Debug;

use common::physical::{Temperature, TemperatureError};
use embedded_hal::blocking::i2c::WriteRead;
use mlx90614_core::Mlx90614;
use thiserror::Error;

use crate::models::sensor_data::SensorData;

/// This service allows separation of the external logic of talking to the
/// infrared sensor from the business logic which makes the system easier to
/// unit test.
pub trait IrSensorService {
    /// Error type of the underlying bus.
    type BusError: Debug;

    /// Attempt to read the ambient and object temperature and convert them
    /// into Temperature models. Will return an appropriate error if it is
    /// not able to.
    fn read_sensor_data(&mut self) -> Result<SensorData, IrSensorServiceError<Self::BusError>>;
}

/// Talks to a real MLX90614 over any blocking I2C bus.
pub struct Mlx90614Service<I2C> {
    sensor: Mlx90614<I2C>,
}

#[derive(Error, Debug)]
pub enum IrSensorServiceError<E: Debug> {
    /// This occurs if the driver fails to read the sensor. Keeps the driver
    /// error so bus faults and PEC mismatches can be told apart.
    #[error("Failed to read sensor. Error: {0}")]
    FailedToRead(mlx90614_core::Error<E>),

    /// This occurs if the Temperature model fails to parse the raw f32 temperature.
    #[error("Failed to parse sensor temperature.")]
    FailedToParse(TemperatureError),
}

impl<I2C> Mlx90614Service<I2C> {
    pub fn new(sensor: Mlx90614<I2C>) -> Self {
        Self { sensor }
    }
}

impl<I2C, E> IrSensorService for Mlx90614Service<I2C>
where
    I2C: WriteRead<Error = E>,
    E: Debug,
{
    type BusError = E;

    /// Reads ambient then object temperature. Each is its own bus
    /// transaction. Will return FailedToRead if either transaction fails;
    /// no partial data is returned.
    fn read_sensor_data(&mut self) -> Result<SensorData, IrSensorServiceError<E>> {
        let ambient = self
            .sensor
            .ambient_temperature_c()
            .map_err(IrSensorServiceError::FailedToRead)?;
        let object = self
            .sensor
            .object_temperature_c()
            .map_err(IrSensorServiceError::FailedToRead)?;

        Ok(SensorData {
            ambient_temperature: Temperature::try_from(ambient)
                .map_err(IrSensorServiceError::FailedToParse)?,
            object_temperature: Temperature::try_from(object)
                .map_err(IrSensorServiceError::FailedToParse)?,
        })
    }
}
