//! Bus interface abstraction for the MMA7455 driver.

pub mod spi;

use crate::error::Result;

/// Abstraction over the register-level bus access required by the driver.
///
/// The device speaks in single-byte registers only, so the contract stays at
/// one byte per operation.
pub trait Mma7455Interface {
    /// Error type produced by the concrete bus transport.
    type BusError;

    /// Writes a single register.
    fn write_register(&mut self, address: u8, value: u8) -> Result<(), Self::BusError>;

    /// Reads a single register.
    fn read_register(&mut self, address: u8) -> Result<u8, Self::BusError>;
}
