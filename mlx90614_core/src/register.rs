/// Where a register lives inside the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterKind {
    /// Volatile, live measurement data.
    Ram,

    /// Persistent calibration and configuration data.
    Eeprom,
}

/// Register addresses of the MLX90614.
///
/// Only `Ta`, `Tobj1` and `Tobj2` are used by the temperature readings. The
/// rest are listed so they can be read with `Mlx90614::read_register`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// Raw IR channel 1.
    RawIr1 = 0x04,
    /// Raw IR channel 2.
    RawIr2 = 0x05,
    /// Ambient (die) temperature.
    Ta = 0x06,
    /// Object temperature, zone 1.
    Tobj1 = 0x07,
    /// Object temperature, zone 2. Only meaningful on dual zone parts.
    Tobj2 = 0x08,

    /// Maximum object temperature.
    ToMax = 0x20,
    /// Minimum object temperature.
    ToMin = 0x21,
    /// PWM control.
    PwmCtrl = 0x22,
    /// Ambient temperature range.
    TaRange = 0x23,
    /// Emissivity correction coefficient.
    Emissivity = 0x24,
    /// Config register 1.
    Config = 0x25,
    /// SMBus device address.
    Addr = 0x0E,
    /// Unique ID, word 1.
    Id1 = 0x3C,
    /// Unique ID, word 2.
    Id2 = 0x3D,
    /// Unique ID, word 3.
    Id3 = 0x3E,
    /// Unique ID, word 4.
    Id4 = 0x3F,
}

impl Register {
    /// The command byte written to select this register.
    pub const fn addr(self) -> u8 {
        self as u8
    }

    pub const fn kind(self) -> RegisterKind {
        match self {
            Self::RawIr1 | Self::RawIr2 | Self::Ta | Self::Tobj1 | Self::Tobj2 => RegisterKind::Ram,
            _ => RegisterKind::Eeprom,
        }
    }
}

impl From<Register> for u8 {
    fn from(register: Register) -> Self {
        register.addr()
    }
}
