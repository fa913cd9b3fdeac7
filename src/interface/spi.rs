//! SPI register interface built on the chip-select framed [`Bus`] transport.
//!
//! Every register access is a two-byte exchange inside one selection window:
//! a command byte addressing the register, then either the value to store or
//! a dummy byte whose reply carries the register contents.

use embedded_hal::digital::OutputPin;
use embedded_hal_nb::spi::FullDuplex;

use super::Mma7455Interface;
use crate::bus::{Bus, BusError};
use crate::error::{Error, Result};

/// Read/write discriminator bit of the command byte (1 = read).
const READ_BIT: u8 = 0x80;
/// Byte clocked out while the device shifts the requested value back.
const DUMMY_BYTE: u8 = 0x00;
/// Largest register address that fits the command field.
const ADDRESS_MASK: u8 = 0x7F;

/// SPI-based interface implementation for the MMA7455 driver.
pub struct SpiInterface<SPI, CS> {
    bus: Bus<SPI, CS>,
}

impl<SPI, CS> SpiInterface<SPI, CS> {
    /// Creates a new interface over the provided bus transport.
    pub const fn new(bus: Bus<SPI, CS>) -> Self {
        Self { bus }
    }

    /// Builds the command byte used to address registers over SPI.
    ///
    /// Bit 7 carries the read/write discriminator, bits 6..1 the register
    /// address, and bit 0 is reserved and always clear.
    fn command_byte(address: u8, is_read: bool) -> u8 {
        let mut command = address << 1;
        if is_read {
            command |= READ_BIT;
        }
        command
    }

    /// Rejects addresses that need more than seven bits.
    fn check_address<E>(address: u8) -> Result<(), E> {
        if address > ADDRESS_MASK {
            return Err(Error::InvalidAddress);
        }
        Ok(())
    }

    /// Provides mutable access to the wrapped bus transport.
    pub fn bus_mut(&mut self) -> &mut Bus<SPI, CS> {
        &mut self.bus
    }

    /// Consumes the interface and returns the owned bus transport.
    pub fn release(self) -> Bus<SPI, CS> {
        self.bus
    }
}

impl<SPI, CS> Mma7455Interface for SpiInterface<SPI, CS>
where
    SPI: FullDuplex<u8>,
    CS: OutputPin,
{
    type BusError = BusError<SPI::Error, CS::Error>;

    fn write_register(&mut self, address: u8, value: u8) -> Result<(), Self::BusError> {
        Self::check_address(address)?;
        let command = Self::command_byte(address, false);
        self.bus.transaction(|bus| {
            // neither reply carries anything meaningful on a write
            bus.transceive(command)?;
            bus.transceive(value)?;
            Ok(())
        })?;
        Ok(())
    }

    fn read_register(&mut self, address: u8) -> Result<u8, Self::BusError> {
        Self::check_address(address)?;
        let command = Self::command_byte(address, true);
        let value = self.bus.transaction(|bus| {
            // the first reply is shifted out before the device has decoded
            // the address; only the second one is the register value
            bus.transceive(command)?;
            bus.transceive(DUMMY_BYTE)
        })?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::SpiInterface;
    use crate::bus::Bus;
    use crate::error::Error;
    use crate::interface::Mma7455Interface;
    use core::convert::Infallible;
    use embedded_hal::digital::{ErrorType as PinErrorType, OutputPin};
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };
    use embedded_hal_nb::spi::{ErrorType, FullDuplex};

    /// Register addresses are unambiguous on the wire only up to six bits;
    /// the simulated device decodes that span.
    const SIM_REGISTER_COUNT: usize = 64;

    #[derive(Clone, Copy)]
    enum SimState {
        Idle,
        HaveCommand { is_read: bool, address: u8 },
    }

    /// Simulated accelerometer with a 64-entry register file.
    ///
    /// Decodes the two-byte transaction format: bit 7 of the first byte is
    /// the read flag, bits 6..1 the register address. The reply to the first
    /// byte is always zero; the reply to the second is the register value on
    /// reads and zero on writes.
    struct SimDevice {
        regs: [u8; SIM_REGISTER_COUNT],
        state: SimState,
        reply: Option<u8>,
    }

    impl SimDevice {
        fn new() -> Self {
            Self {
                regs: [0; SIM_REGISTER_COUNT],
                state: SimState::Idle,
                reply: None,
            }
        }

        fn with_register(mut self, address: u8, value: u8) -> Self {
            self.regs[address as usize] = value;
            self
        }
    }

    impl ErrorType for SimDevice {
        type Error = Infallible;
    }

    impl FullDuplex<u8> for SimDevice {
        fn read(&mut self) -> nb::Result<u8, Self::Error> {
            self.reply.take().ok_or(nb::Error::WouldBlock)
        }

        fn write(&mut self, word: u8) -> nb::Result<(), Self::Error> {
            match self.state {
                SimState::Idle => {
                    self.state = SimState::HaveCommand {
                        is_read: word & 0x80 != 0,
                        address: (word >> 1) & 0x3F,
                    };
                    self.reply = Some(0x00);
                }
                SimState::HaveCommand { is_read, address } => {
                    if is_read {
                        self.reply = Some(self.regs[address as usize]);
                    } else {
                        self.regs[address as usize] = word;
                        self.reply = Some(0x00);
                    }
                    self.state = SimState::Idle;
                }
            }
            Ok(())
        }
    }

    struct NoopPin;

    impl PinErrorType for NoopPin {
        type Error = Infallible;
    }

    impl OutputPin for NoopPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn interface(device: SimDevice) -> SpiInterface<SimDevice, NoopPin> {
        SpiInterface::new(Bus::new(device, NoopPin))
    }

    #[test]
    fn read_command_byte_sets_the_read_bit() {
        assert_eq!(SpiInterface::<(), ()>::command_byte(7, true), 0x8E);
    }

    #[test]
    fn write_command_byte_keeps_the_read_bit_clear() {
        assert_eq!(SpiInterface::<(), ()>::command_byte(0x16, false), 0x2C);
    }

    #[test]
    fn command_byte_reserves_bit_zero() {
        for address in 0..=0x3F {
            assert_eq!(SpiInterface::<(), ()>::command_byte(address, true) & 0x01, 0);
            assert_eq!(SpiInterface::<(), ()>::command_byte(address, false) & 0x01, 0);
        }
    }

    #[test]
    fn read_register_returns_the_second_reply() {
        let device = SimDevice::new().with_register(0x00, 0x55);
        let mut interface = interface(device);

        assert_eq!(interface.read_register(0x00), Ok(0x55));
    }

    #[test]
    fn write_register_stores_the_value() {
        let mut interface = interface(SimDevice::new());

        interface.write_register(0x16, 0b0101_0101).unwrap();

        let device = interface.release().release().0;
        assert_eq!(device.regs[0x16], 0b0101_0101);
    }

    #[test]
    fn written_values_read_back() {
        let mut interface = interface(SimDevice::new());

        for address in 0..SIM_REGISTER_COUNT as u8 {
            for value in 0..=0xFF_u8 {
                interface.write_register(address, value).unwrap();
                assert_eq!(interface.read_register(address), Ok(value));
            }
        }
    }

    #[test]
    fn out_of_range_addresses_are_rejected() {
        let mut interface = interface(SimDevice::new());

        assert_eq!(interface.read_register(0x80), Err(Error::InvalidAddress));
        assert_eq!(
            interface.write_register(0xFF, 0x00),
            Err(Error::InvalidAddress)
        );
    }

    #[test]
    fn each_operation_frames_one_selection_window() {
        let expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let mut interface =
            SpiInterface::new(Bus::new(SimDevice::new(), PinMock::new(&expectations)));

        interface.write_register(0x16, 0x45).unwrap();
        interface.read_register(0x06).unwrap();

        let (_, mut cs) = interface.release().release();
        cs.done();
    }

    #[test]
    fn rejected_addresses_cause_no_bus_activity() {
        // An empty expectation list fails on any chip-select transition.
        let mut interface = SpiInterface::new(Bus::new(SimDevice::new(), PinMock::new(&[])));

        assert_eq!(interface.read_register(0x90), Err(Error::InvalidAddress));

        let (_, mut cs) = interface.release().release();
        cs.done();
    }
}
