//! Logging shim: forwards to `defmt` when the feature is enabled and
//! compiles to nothing otherwise.
//!
//! The warning macro carries a `log_` prefix because a plain `warn` name
//! collides with the built-in `#[warn]` attribute during resolution;
//! importers can rename it back locally.

#[cfg(feature = "defmt")]
macro_rules! trace {
    ($($arg:tt)*) => { defmt::trace!($($arg)*) };
}

#[cfg(not(feature = "defmt"))]
macro_rules! trace {
    ($($arg:tt)*) => {{}};
}

#[cfg(feature = "defmt")]
macro_rules! log_warn {
    ($($arg:tt)*) => { defmt::warn!($($arg)*) };
}

#[cfg(not(feature = "defmt"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{}};
}

pub(crate) use {log_warn, trace};
