//! Register map definitions for MMA7455-class accelerometers.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{GRange, OperatingMode};

/// Register address of `XOUTL` (10-bit X output, low byte).
pub const REG_XOUTL: u8 = 0x00;
/// Register address of `XOUTH` (10-bit X output, high bits).
pub const REG_XOUTH: u8 = 0x01;
/// Register address of `YOUTL`.
pub const REG_YOUTL: u8 = 0x02;
/// Register address of `YOUTH`.
pub const REG_YOUTH: u8 = 0x03;
/// Register address of `ZOUTL`.
pub const REG_ZOUTL: u8 = 0x04;
/// Register address of `ZOUTH`.
pub const REG_ZOUTH: u8 = 0x05;
/// Register address of `XOUT8` (8-bit X output).
pub const REG_XOUT8: u8 = 0x06;
/// Register address of `YOUT8` (8-bit Y output).
pub const REG_YOUT8: u8 = 0x07;
/// Register address of `ZOUT8` (8-bit Z output).
pub const REG_ZOUT8: u8 = 0x08;
/// Register address of `STATUS`.
pub const REG_STATUS: u8 = 0x09;
/// Register address of `WHOAMI`.
pub const REG_WHOAMI: u8 = 0x0F;
/// Register address of `MCTL` (mode control).
pub const REG_MCTL: u8 = 0x16;

/// Bitfield representation of the `STATUS` register (address `0x09`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    // New data is ready in the output registers (bit 0).
    pub data_ready: bool,
    // Output data was overwritten before being read (bit 1).
    pub data_overwrite: bool,
    // Parity error in the trim data (bit 2).
    pub parity_error: bool,
    #[skip]
    __: B5,
}

impl From<u8> for Status {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Status> for u8 {
    fn from(value: Status) -> Self {
        value.into_bytes()[0]
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Status {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Status {{ DRDY: {}, DOVR: {}, PERR: {} }}",
            self.data_ready(),
            self.data_overwrite(),
            self.parity_error()
        );
    }
}

/// Bitfield representation of the `MCTL` register (address `0x16`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeControl {
    // Operating mode selection (bits 1:0).
    pub mode: OperatingMode,
    // Measurement range selection (bits 3:2).
    pub g_range: GRange,
    // Self-test enable flag (bit 4).
    pub self_test: bool,
    // Three-wire SPI mode flag (bit 5).
    pub spi_three_wire: bool,
    // Data-ready signal suppressed on the INT1 pin (bit 6).
    pub data_ready_disable: bool,
    #[skip]
    __: B1,
}

impl From<u8> for ModeControl {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<ModeControl> for u8 {
    fn from(value: ModeControl) -> Self {
        value.into_bytes()[0]
    }
}
