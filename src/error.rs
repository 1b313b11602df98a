//! Error definition for the crate

#[cfg(feature = "defmt")]
use defmt::{write, Format, Formatter};
use thiserror::Error;

/// Errors the driver can report.
///
/// `E` is the error type of the underlying bus implementation, so bus
/// failures propagate without being flattened into a unit variant.
#[derive(Debug, Error)]
pub enum Error<E> {
    /// The underlying SPI or I2C transaction failed.
    #[error("bus transaction failed")]
    Bus(E),
    /// The chip identification register did not read back as the STMPE610
    /// identity (`0x0811`). Carries the value that was read.
    #[error("unexpected chip identification {0:#06x}")]
    UnknownChip(u16),
}

#[cfg(feature = "defmt")]
impl<E> Format for Error<E> {
    fn format(&self, fmt: Formatter) {
        match self {
            Error::Bus(_) => write!(fmt, "bus transaction failed"),
            Error::UnknownChip(id) => write!(fmt, "unexpected chip identification {=u16:#x}", *id),
        }
    }
}
