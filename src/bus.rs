//! Chip-select framed byte transport over a full-duplex SPI peripheral.
//!
//! [`Bus`] owns the SPI master and its active-low chip-select line and is the
//! single place that touches either. A register transaction selects the
//! device, runs one or more byte exchanges, and deselects again; nothing else
//! may drive the bus while the window is open.

use embedded_hal::digital::OutputPin;
use embedded_hal_nb::spi::FullDuplex;

use crate::log::log_warn as warn;

/// Poll budget applied by [`Bus::new`].
///
/// Each unit is one poll of a peripheral readiness flag, so the wall-clock
/// bound depends on the bus clock. The default is generous enough that only a
/// wedged peripheral exhausts it.
pub const DEFAULT_POLL_BUDGET: u32 = 100_000;

/// Transport-level failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError<SpiE, PinE> {
    /// The SPI peripheral reported a hardware fault.
    Spi(SpiE),
    /// Driving the chip-select line failed.
    ChipSelect(PinE),
    /// The peripheral did not signal readiness within the poll budget.
    Timeout,
}

/// Exclusive handle over one SPI master and the chip-select line it controls.
///
/// The chip-select line must be deasserted (high) before the first
/// transaction; board bring-up code is responsible for its idle level.
pub struct Bus<SPI, CS> {
    spi: SPI,
    cs: CS,
    poll_budget: Option<u32>,
}

impl<SPI, CS> Bus<SPI, CS> {
    /// Creates a bus handle with the default bounded poll budget.
    pub const fn new(spi: SPI, cs: CS) -> Self {
        Self {
            spi,
            cs,
            poll_budget: Some(DEFAULT_POLL_BUDGET),
        }
    }

    /// Overrides the poll budget.
    ///
    /// `Some(n)` makes [`Bus::transceive`] give up with [`BusError::Timeout`]
    /// after `n` fruitless polls of a readiness flag. `None` restores the
    /// unbounded busy-wait of the legacy firmware, which hangs forever if the
    /// peripheral stalls.
    pub const fn with_poll_budget(mut self, poll_budget: Option<u32>) -> Self {
        self.poll_budget = poll_budget;
        self
    }

    /// Consumes the handle and returns the SPI peripheral and pin.
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> Bus<SPI, CS>
where
    SPI: FullDuplex<u8>,
    CS: OutputPin,
{
    /// Asserts chip-select, claiming the bus for the exchanges that follow.
    pub fn select(&mut self) -> Result<(), BusError<SPI::Error, CS::Error>> {
        self.cs.set_low().map_err(BusError::ChipSelect)
    }

    /// Deasserts chip-select, ending the transaction window.
    pub fn deselect(&mut self) -> Result<(), BusError<SPI::Error, CS::Error>> {
        self.cs.set_high().map_err(BusError::ChipSelect)
    }

    /// Exchanges one byte: waits for the transmit buffer, writes `byte`,
    /// waits for the reply and returns it.
    ///
    /// One outbound byte always yields exactly one inbound byte. Exchanges
    /// within a selection window reach the device strictly in call order.
    pub fn transceive(&mut self, byte: u8) -> Result<u8, BusError<SPI::Error, CS::Error>> {
        let budget = self.poll_budget;
        let spi = &mut self.spi;
        Self::poll_until(budget, || spi.write(byte))?;
        Self::poll_until(budget, || spi.read())
    }

    /// Runs `f` inside a select/deselect window.
    ///
    /// The deselect runs on every path, including when `f` fails, so the
    /// device is never left addressed after an aborted transaction. Errors
    /// from `f` take precedence over a deselect failure.
    pub fn transaction<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, BusError<SPI::Error, CS::Error>>,
    ) -> Result<T, BusError<SPI::Error, CS::Error>> {
        self.select()?;
        let result = f(self);
        let deselected = self.deselect();
        let value = result?;
        deselected?;
        Ok(value)
    }

    fn poll_until<T>(
        budget: Option<u32>,
        mut op: impl FnMut() -> nb::Result<T, SPI::Error>,
    ) -> Result<T, BusError<SPI::Error, CS::Error>> {
        let mut remaining = budget;
        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(nb::Error::Other(err)) => return Err(BusError::Spi(err)),
                Err(nb::Error::WouldBlock) => {}
            }

            if let Some(polls_left) = remaining.as_mut() {
                if *polls_left == 0 {
                    warn!("bus transfer timed out");
                    return Err(BusError::Timeout);
                }
                *polls_left -= 1;
            }
        }
    }
}
