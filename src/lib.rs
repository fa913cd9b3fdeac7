#![no_std]

mod error;
mod log;

pub mod bus;
pub mod config;
pub mod device;
pub mod interface;
pub mod params;
pub mod registers;
pub mod text;

pub use crate::bus::{Bus, BusError};
pub use crate::device::Mma7455;
pub use crate::error::{Error, Result};
