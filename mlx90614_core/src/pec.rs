//! SMBus packet error code (CRC-8, polynomial x^8 + x^2 + x + 1).

use crc::{Crc, CRC_8_SMBUS};

use crate::{address::Address, register::Register};

const SMBUS_PEC: Crc<u8> = Crc::<u8>::new(&CRC_8_SMBUS);

/// Compute the CRC-8 used as SMBus PEC over `data`.
pub fn crc8(data: &[u8]) -> u8 {
    SMBUS_PEC.checksum(data)
}

/// PEC the sensor should append to a read word response. Covers every byte
/// on the wire: write address, command, read address, low and high data byte.
pub fn read_word_pec(address: Address, register: Register, low: u8, high: u8) -> u8 {
    crc8(&[
        address.write_byte(),
        register.addr(),
        address.read_byte(),
        low,
        high,
    ])
}
