#![cfg_attr(not(test), no_std)]

//! Driver for the MLX90614 contact-less infrared thermometer.
//!
//! The sensor is read over I²C (SMBus). Every reading is one
//! write-then-read transaction: the register pointer is written, a repeated
//! start is issued and two data bytes are read back low byte first.
//!
//! The driver takes any embedded-hal `WriteRead` bus. To share one bus
//! between several devices hand it a proxy from the `shared-bus` crate; each
//! transaction holds the bus for the whole write-then-read.
//!
//! NOTE: Run the bus at 100kHz. The sensor does not show up reliably at
//! 400kHz and the driver has no way to check this.
//!
//! ```
//! # use embedded_hal_mock::i2c::{Mock, Transaction};
//! use mlx90614_core::Mlx90614;
//!
//! # let i2c = Mock::new(&[Transaction::write_read(0x5A, vec![0x06], vec![0x8A, 0x3B])]);
//! let mut sensor = Mlx90614::new_default(i2c);
//! let ambient = sensor.ambient_temperature_c().expect("Failed to read ambient temperature.");
//! assert!((ambient - 31.69).abs() < 0.001);
//! # sensor.release().done();
//! ```

pub mod address;
pub mod conversion;
pub mod driver;
pub mod error;
pub mod pec;
pub mod register;

pub use address::{Address, AddressError};
pub use conversion::{celsius_to_fahrenheit, fahrenheit_to_celsius, temperature_from_raw};
pub use driver::Mlx90614;
pub use error::Error;
pub use register::{Register, RegisterKind};
