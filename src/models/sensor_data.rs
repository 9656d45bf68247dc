use std::fmt::Display;

use common::physical::Temperature;

/// One pair of readings taken from the infrared sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorData {
    pub ambient_temperature: Temperature,
    pub object_temperature: Temperature,
}

impl Display for SensorData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(SensorData: ambient={}, object={})",
            self.ambient_temperature, self.object_temperature
        )
    }
}
