//! High-level MMA7455 device driver implementation.

use embedded_hal::digital::OutputPin;
use embedded_hal_nb::spi::FullDuplex;

use crate::bus::Bus;
use crate::config::Config;
use crate::error::Result;
use crate::interface::spi::SpiInterface;
use crate::interface::Mma7455Interface;
use crate::log::trace;
use crate::params::{DataReadyPin, GRange, OperatingMode, SelfTest, SpiMode};
use crate::registers::{
    ModeControl, Status, REG_MCTL, REG_STATUS, REG_WHOAMI, REG_XOUT8, REG_XOUTL, REG_YOUT8,
    REG_YOUTL, REG_ZOUT8, REG_ZOUTL,
};

/// High-level synchronous driver for MMA7455-class accelerometers.
pub struct Mma7455<IFACE> {
    interface: IFACE,
    config: Config,
}

impl<IFACE> Mma7455<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    pub fn new(interface: IFACE, config: Config) -> Self {
        Self { interface, config }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> (IFACE, Config) {
        (self.interface, self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }
}

impl<SPI, CS> Mma7455<SpiInterface<SPI, CS>>
where
    SPI: FullDuplex<u8>,
    CS: OutputPin,
{
    // ==================================================================
    // == SPI Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor taking the raw SPI peripheral and pin.
    pub fn new_spi(spi: SPI, cs: CS, config: Config) -> Self {
        Self::new(SpiInterface::new(Bus::new(spi, cs)), config)
    }

    /// Releases the driver, returning the SPI peripheral, pin, and
    /// configuration.
    pub fn release_spi(self) -> (SPI, CS, Config) {
        let (iface, config) = self.release();
        let (spi, cs) = iface.release().release();
        (spi, cs, config)
    }
}

impl<IFACE, CommE> Mma7455<IFACE>
where
    IFACE: Mma7455Interface<BusError = CommE>,
{
    // ==================================================================
    // == Initialization & Configuration ================================
    // ==================================================================
    /// Programs the mode control register from the current configuration.
    ///
    /// This is the one startup write the sensor needs before the output
    /// registers produce data.
    pub fn init(&mut self) -> Result<(), CommE> {
        trace!("programming MCTL from configuration");
        self.interface
            .write_register(REG_MCTL, self.config.mode_control().into())
    }

    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Switches the operating mode.
    pub fn set_mode(&mut self, mode: OperatingMode) -> Result<(), CommE> {
        self.update_mode_control(|mctl| mctl.set_mode(mode))
    }

    /// Switches the measurement range.
    pub fn set_range(&mut self, range: GRange) -> Result<(), CommE> {
        self.update_mode_control(|mctl| mctl.set_g_range(range))
    }

    // ==================================================================
    // == Identification & Status =======================================
    // ==================================================================
    /// Reads the `WHOAMI` register.
    ///
    /// The value is semi-factory programmed and has no single documented
    /// constant, so no expectation is checked here.
    pub fn who_am_i(&mut self) -> Result<u8, CommE> {
        self.interface.read_register(REG_WHOAMI)
    }

    /// Returns the decoded `STATUS` register.
    pub fn read_status(&mut self) -> Result<Status, CommE> {
        let raw = self.interface.read_register(REG_STATUS)?;
        Ok(Status::from(raw))
    }

    /// Returns `true` when a fresh sample is waiting in the output
    /// registers.
    pub fn data_ready(&mut self) -> Result<bool, CommE> {
        Ok(self.read_status()?.data_ready())
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads the three 8-bit axis registers and returns the raw bytes in
    /// X, Y, Z order.
    pub fn read_xyz_raw(&mut self) -> Result<[u8; 3], CommE> {
        let mut raw = [0u8; 3];
        for (slot, address) in raw.iter_mut().zip([REG_XOUT8, REG_YOUT8, REG_ZOUT8]) {
            *slot = self.interface.read_register(address)?;
        }
        Ok(raw)
    }

    /// Reads the 8-bit axis registers as signed accelerations.
    pub fn read_xyz(&mut self) -> Result<[i8; 3], CommE> {
        let raw = self.read_xyz_raw()?;
        Ok(raw.map(|byte| byte as i8))
    }

    /// Reads the 10-bit output register pairs and returns sign-extended
    /// accelerations in X, Y, Z order.
    pub fn read_xyz_10bit(&mut self) -> Result<[i16; 3], CommE> {
        let mut samples = [0i16; 3];
        for (slot, address) in samples.iter_mut().zip([REG_XOUTL, REG_YOUTL, REG_ZOUTL]) {
            let lsb = self.interface.read_register(address)?;
            let msb = self.interface.read_register(address + 1)?;
            *slot = Self::unpack_axis(lsb, msb);
        }
        Ok(samples)
    }

    #[inline]
    fn unpack_axis(lsb: u8, msb: u8) -> i16 {
        // 10-bit two's complement, LSB-aligned across the register pair.
        let raw = ((msb as u16 & 0x03) << 8) | lsb as u16;
        ((raw << 6) as i16) >> 6
    }

    // ==================================================================
    // == Raw Register Access ===========================================
    // ==================================================================
    /// Reads an arbitrary device register.
    pub fn read_register(&mut self, address: u8) -> Result<u8, CommE> {
        self.interface.read_register(address)
    }

    /// Writes an arbitrary device register.
    pub fn write_register(&mut self, address: u8, value: u8) -> Result<(), CommE> {
        self.interface.write_register(address, value)
    }

    // ==================================================================
    // == Internal Configuration Helpers ================================
    // ==================================================================
    fn update_mode_control<F>(&mut self, mut mutate: F) -> Result<(), CommE>
    where
        F: FnMut(&mut ModeControl),
    {
        let current = self.interface.read_register(REG_MCTL)?;

        let mut mctl = ModeControl::from(current);
        mutate(&mut mctl);

        let updated = u8::from(mctl);
        if updated != current {
            self.interface.write_register(REG_MCTL, updated)?;
        }

        self.config.mode = mctl.mode();
        // GLVL 0b11 is a reserved pattern; keep the configured range
        // rather than panicking on a misbehaving device.
        self.config.range = mctl.g_range_or_err().unwrap_or(self.config.range);
        self.config.self_test = if mctl.self_test() {
            SelfTest::Enabled
        } else {
            SelfTest::Disabled
        };
        self.config.spi_mode = if mctl.spi_three_wire() {
            SpiMode::ThreeWire
        } else {
            SpiMode::FourWire
        };
        self.config.data_ready_pin = if mctl.data_ready_disable() {
            DataReadyPin::NotRouted
        } else {
            DataReadyPin::Routed
        };

        Ok(())
    }
}
