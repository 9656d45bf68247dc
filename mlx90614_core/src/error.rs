use crate::address::AddressError;

/// Errors returned by the `Mlx90614` driver. `E` is the error type of the
/// underlying bus.
#[derive(Debug, thiserror_no_std::Error, PartialEq, Eq)]
pub enum Error<E> {
    /// The bus transaction did not complete. The bus error is passed on
    /// unchanged.
    #[error("Bus communication failed: {0:?}")]
    Bus(E),

    /// The driver was constructed with an address outside of the 7-bit range.
    /// No transaction was attempted.
    #[error("Invalid device address {0:#04x}!")]
    InvalidAddress(u8),

    /// The packet error code sent by the sensor did not match the data.
    /// Only returned when PEC checking is enabled.
    #[error("PEC mismatch. Expected {expected:#04x}, received {received:#04x}.")]
    Pec { expected: u8, received: u8 },
}

impl<E> From<AddressError> for Error<E> {
    fn from(value: AddressError) -> Self {
        match value {
            AddressError::OutOfRange(address) => Self::InvalidAddress(address),
        }
    }
}
