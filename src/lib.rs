#![doc(html_root_url = "https://docs.rs/stmpe610")]
#![deny(
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    unused_variables,
    unreachable_code,
    unused_comparisons,
    unused_must_use
)]
#![cfg_attr(not(test), no_std)]

//! A platform agnostic Rust driver for the STMPE610 resistive touch screen
//! controller, based on the
//! [`embedded-hal`](https://github.com/rust-embedded/embedded-hal) traits.
//!
//! The STMPE610 samples a 4-wire resistive panel with its own 12-bit ADC and
//! buffers X/Y/pressure records in an on-chip FIFO, so the host only needs to
//! configure it once and drain samples on demand. The chip speaks both SPI
//! and I2C over the same register map; this driver supports either transport
//! through the [`bus::Interface`] trait.
//!
//! ```no_run
//! # fn example<Spi, Delay>(spi: Spi, mut delay: Delay) -> Result<(), stmpe610::Error<Spi::Error>>
//! # where
//! #     Spi: embedded_hal::spi::SpiDevice<u8>,
//! #     Delay: embedded_hal::delay::DelayNs,
//! # {
//! use stmpe610::Stmpe610;
//!
//! let mut touch = Stmpe610::new_spi(spi);
//! touch.init(&mut delay)?;
//!
//! if touch.is_touched()? {
//!     let sample = touch.read_touch()?;
//!     if sample.touched {
//!         let _ = (sample.x, sample.y, sample.z);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub use crate::driver::{Point, Stmpe610, TouchSample};
pub use crate::error::Error;

pub mod bus;
pub mod driver;
pub mod error;
pub mod reg;
