use core::fmt::Display;

use thiserror_no_std::Error;

/// Largest address representable with 7 bits.
const MAX_ADDRESS: u8 = 0x7F;

/// A 7-bit I²C device address.
///
/// ```
/// use mlx90614_core::Address;
/// let address = Address::new(0x5B).expect("Failed to get address representation.");
/// assert_eq!(address.value(), 0x5B);
/// assert!(Address::new(0x80).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address(u8);

/// Represents errors in creating an `Address`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    /// The value does not fit into 7 bits.
    #[error("Address {0:#04x} is outside of the 7-bit range!")]
    OutOfRange(u8),
}

impl Address {
    /// Factory default address of every MLX90614.
    pub const DEFAULT: Address = Address(0x5A);

    /// Construct an address. Will return `OutOfRange` for anything above
    /// `0x7F`.
    pub const fn new(value: u8) -> Result<Self, AddressError> {
        if value > MAX_ADDRESS {
            return Err(AddressError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Get the raw 7-bit value.
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// The address byte sent on the wire for a write (R/W bit cleared).
    pub const fn write_byte(&self) -> u8 {
        self.0 << 1
    }

    /// The address byte sent on the wire for a read (R/W bit set).
    pub const fn read_byte(&self) -> u8 {
        (self.0 << 1) | 1
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Address {
    type Error = AddressError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Address> for u8 {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}
