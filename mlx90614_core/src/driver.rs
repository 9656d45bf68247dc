use embedded_hal::blocking::i2c::WriteRead;

use crate::{
    address::Address,
    conversion::{celsius_to_fahrenheit, temperature_from_raw},
    error::Error,
    pec::read_word_pec,
    register::Register,
};

/// Data bytes in a register word.
const WORD_LEN: usize = 2;

/// Data bytes plus the trailing PEC byte.
const WORD_WITH_PEC_LEN: usize = 3;

/// Driver for one MLX90614 at one address.
///
/// Each temperature reading is exactly one `write_read` transaction on the
/// bus. Nothing is cached between readings.
///
/// The bus must be configured for 100kHz.
pub struct Mlx90614<I2C> {
    i2c: I2C,
    address: Address,

    /// Validate the PEC byte trailing every read. Off by default.
    pec: bool,

    /// Scratch space for one transaction. Contents are meaningless outside
    /// of `read_register`.
    buffer: [u8; WORD_WITH_PEC_LEN],
}

impl<I2C, E> Mlx90614<I2C>
where
    I2C: WriteRead<Error = E>,
{
    /// Create a driver for the sensor at `address`.
    /// Will return `InvalidAddress` if the address does not fit into 7 bits.
    /// The bus is not touched.
    pub fn new(i2c: I2C, address: u8) -> Result<Self, Error<E>> {
        let address = Address::new(address)?;
        Ok(Self::with_address(i2c, address))
    }

    /// Create a driver for a sensor at the factory address `0x5A`.
    pub fn new_default(i2c: I2C) -> Self {
        Self::with_address(i2c, Address::DEFAULT)
    }

    pub fn with_address(i2c: I2C, address: Address) -> Self {
        Self {
            i2c,
            address,
            pec: false,
            buffer: [0u8; WORD_WITH_PEC_LEN],
        }
    }

    /// Enable or disable validating the PEC byte the sensor sends after each
    /// word. When disabled the byte is never read.
    pub fn with_pec(mut self, enabled: bool) -> Self {
        self.pec = enabled;
        self
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn pec_enabled(&self) -> bool {
        self.pec
    }

    /// Ambient (die) temperature in degrees Celsius.
    pub fn ambient_temperature_c(&mut self) -> Result<f32, Error<E>> {
        self.read_temperature(Register::Ta)
    }

    /// Object temperature in degrees Celsius.
    pub fn object_temperature_c(&mut self) -> Result<f32, Error<E>> {
        self.read_temperature(Register::Tobj1)
    }

    /// Second zone object temperature in degrees Celsius.
    /// Only meaningful on dual zone parts.
    pub fn object2_temperature_c(&mut self) -> Result<f32, Error<E>> {
        self.read_temperature(Register::Tobj2)
    }

    pub fn ambient_temperature_f(&mut self) -> Result<f32, Error<E>> {
        self.ambient_temperature_c().map(celsius_to_fahrenheit)
    }

    pub fn object_temperature_f(&mut self) -> Result<f32, Error<E>> {
        self.object_temperature_c().map(celsius_to_fahrenheit)
    }

    pub fn object2_temperature_f(&mut self) -> Result<f32, Error<E>> {
        self.object2_temperature_c().map(celsius_to_fahrenheit)
    }

    /// Read one 16-bit register.
    ///
    /// Writes the register address, issues a repeated start and reads the
    /// word back low byte first. The PEC byte is only read and checked when
    /// enabled with `with_pec`.
    pub fn read_register(&mut self, register: Register) -> Result<u16, Error<E>> {
        let len = if self.pec {
            WORD_WITH_PEC_LEN
        } else {
            WORD_LEN
        };

        self.i2c
            .write_read(
                self.address.value(),
                &[register.addr()],
                &mut self.buffer[..len],
            )
            .map_err(Error::Bus)?;

        let [low, high, received] = self.buffer;
        if self.pec {
            let expected = read_word_pec(self.address, register, low, high);
            if expected != received {
                return Err(Error::Pec { expected, received });
            }
        }

        Ok(u16::from_le_bytes([low, high]))
    }

    /// Give back the bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn read_temperature(&mut self, register: Register) -> Result<f32, Error<E>> {
        self.read_register(register).map(temperature_from_raw)
    }
}
