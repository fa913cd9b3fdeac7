//! Configuration primitives for the MMA7455 driver.

use crate::params::{DataReadyPin, GRange, OperatingMode, SelfTest, SpiMode};
use crate::registers::ModeControl;

/// User-facing configuration for the MMA7455 sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Operating mode selection.
    pub mode: OperatingMode,
    /// Measurement range selection.
    pub range: GRange,
    /// Self-test actuation flag.
    pub self_test: SelfTest,
    /// SPI wiring selection.
    pub spi_mode: SpiMode,
    /// Data-ready routing to the INT1 pin.
    pub data_ready_pin: DataReadyPin,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Encodes this configuration as an `MCTL` register value.
    pub fn mode_control(&self) -> ModeControl {
        ModeControl::new()
            .with_mode(self.mode)
            .with_g_range(self.range)
            .with_self_test(matches!(self.self_test, SelfTest::Enabled))
            .with_spi_three_wire(matches!(self.spi_mode, SpiMode::ThreeWire))
            .with_data_ready_disable(matches!(self.data_ready_pin, DataReadyPin::NotRouted))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: OperatingMode::Measurement,
            range: GRange::G2,
            self_test: SelfTest::Disabled,
            spi_mode: SpiMode::FourWire,
            data_ready_pin: DataReadyPin::NotRouted,
        }
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the operating mode.
    pub fn mode(mut self, mode: OperatingMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Overrides the measurement range.
    pub fn range(mut self, range: GRange) -> Self {
        self.config.range = range;
        self
    }

    /// Enables or disables the self-test deflection.
    pub fn self_test(mut self, self_test: SelfTest) -> Self {
        self.config.self_test = self_test;
        self
    }

    /// Selects the SPI wiring mode.
    pub fn spi_mode(mut self, spi_mode: SpiMode) -> Self {
        self.config.spi_mode = spi_mode;
        self
    }

    /// Selects the data-ready pin routing.
    pub fn data_ready_pin(mut self, data_ready_pin: DataReadyPin) -> Self {
        self.config.data_ready_pin = data_ready_pin;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
