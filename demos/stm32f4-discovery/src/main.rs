//! Continuously sample the three 8-bit axis registers of an MMA7455-class
//! accelerometer on SPI1 and report them as decimal text over USART2.
//!
//! Runs on the STM32F4 Discovery board:
//!
//! ```text
//! PA4 <-> CS
//! PA5 <-> SCK
//! PA6 <-> MISO (SDO)
//! PA7 <-> MOSI (SDA)
//! PA2 <-> serial RX of the host (9600 8N1)
//! ```
//!
//! Build with:
//! `cargo build --release --target thumbv7em-none-eabihf`

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use embedded_hal_nb::serial::Write;
use nb::block;
use panic_halt as _;
use stm32f4xx_hal::gpio::PinState;
use stm32f4xx_hal::pac;
use stm32f4xx_hal::prelude::*;
use stm32f4xx_hal::spi::{Mode, Phase, Polarity};

use mma7455::config::Config;
use mma7455::text::{format_decimal, DECIMAL_BUF_LEN};
use mma7455::Mma7455;

fn put_bytes<TX: Write<u8>>(tx: &mut TX, bytes: &[u8]) {
    for &byte in bytes {
        let _ = block!(tx.write(byte));
    }
}

#[entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().unwrap();

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    let gpioa = dp.GPIOA.split();
    let cs = gpioa.pa4.into_push_pull_output_in_state(PinState::High);
    let sck = gpioa.pa5.into_alternate();
    let miso = gpioa.pa6.into_alternate();
    let mosi = gpioa.pa7.into_alternate();

    let mode = Mode {
        polarity: Polarity::IdleLow,
        phase: Phase::CaptureOnFirstTransition,
    };
    let spi = dp.SPI1.spi((sck, miso, mosi), mode, 1.MHz(), &clocks);

    let tx_pin = gpioa.pa2.into_alternate();
    let mut tx = dp.USART2.tx(tx_pin, 9600.bps(), &clocks).unwrap();

    let mut accel = Mma7455::new_spi(spi, cs, Config::default());

    put_bytes(&mut tx, b"start reading\r\n\r\n");
    accel.init().unwrap();
    put_bytes(&mut tx, b"accelerometer initialized\r\n");

    loop {
        let axes = accel.read_xyz_raw().unwrap();
        for value in axes {
            let mut buf = [0u8; DECIMAL_BUF_LEN];
            put_bytes(&mut tx, format_decimal(u16::from(value), &mut buf));
            put_bytes(&mut tx, b"   ");
        }
        put_bytes(&mut tx, b"\r\n");
    }
}
