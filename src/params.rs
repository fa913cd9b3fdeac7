//! Strongly typed parameter enumerations for the MMA7455 driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Prefer
//! these types over raw integers to keep configuration values valid and
//! explicit.

use modular_bitfield::prelude::Specifier;

/// Operating mode selections encoded in `MCTL.MODE[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum OperatingMode {
    /// Standby, no measurements taken.
    Standby = 0b00,
    /// Continuous measurement mode.
    Measurement = 0b01,
    /// Level detection mode.
    LevelDetection = 0b10,
    /// Pulse detection mode.
    PulseDetection = 0b11,
}

/// Measurement range selections encoded in `MCTL.GLVL[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum GRange {
    /// ±8 g full scale.
    G8 = 0b00,
    /// ±2 g full scale.
    G2 = 0b01,
    /// ±4 g full scale.
    G4 = 0b10,
}

impl GRange {
    /// Returns the full-scale range in g.
    pub const fn full_scale_g(self) -> u8 {
        match self {
            Self::G8 => 8,
            Self::G2 => 2,
            Self::G4 => 4,
        }
    }

    /// Returns the 8-bit output sensitivity in counts per g.
    pub const fn counts_per_g(self) -> u8 {
        match self {
            Self::G8 => 16,
            Self::G2 => 64,
            Self::G4 => 32,
        }
    }
}

/// Self-test actuation flag (`MCTL.STON`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SelfTest {
    /// Self-test deflection disabled.
    Disabled,
    /// Self-test deflection applied to the sensor beam.
    Enabled,
}

/// SPI wiring selection (`MCTL.SPI3W`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiMode {
    /// Four-wire SPI with a dedicated MISO line.
    FourWire,
    /// Three-wire SPI with a shared data line.
    ThreeWire,
}

/// Data-ready routing to the INT1 pin (`MCTL.DRPD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataReadyPin {
    /// Data-ready status is driven onto INT1.
    Routed,
    /// INT1 stays quiet; data-ready is polled via `STATUS`.
    NotRouted,
}
