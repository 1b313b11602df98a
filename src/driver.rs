//! The Stmpe610 touch panel driver.
//!
//! The driver is for the STMPE610 resistive touch screen controller connected
//! using SPI or I2C.
//!
//! The STMPE610 combines a touch screen controller with a 12-bit ADC. Once
//! enabled, the chip samples the panel on its own, averages and settles the
//! measurements according to `TSC_CFG`, and pushes 4-byte X/Y/Z records into
//! an on-chip FIFO. The host side of the protocol is therefore small: write a
//! fixed configuration once, poll the touch-detect bit in `TSC_CTRL`, and
//! drain samples from the FIFO read port.
//!
//! A FIFO record packs two 12-bit coordinates and an 8-bit pressure value
//! into four bytes:
//!
//! ```text
//! byte 0: X[11:4]
//! byte 1: X[3:0] Y[11:8]
//! byte 2: Y[7:0]
//! byte 3: Z[7:0]
//! ```
//!
//! Information on the operation of the STMPE610 can be found in the STMPE610
//! data sheet (<https://www.st.com/resource/en/datasheet/stmpe610.pdf>).

use core::fmt::Debug;
#[cfg(feature = "defmt")]
use defmt::Format;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiDevice;

/// Re-exported from
/// [embedded_graphics](https://docs.rs/embedded-graphics/latest/embedded_graphics/index.html)
/// for convenience.
pub use embedded_graphics::geometry::Point;

use crate::bus::{I2cInterface, Interface, SpiInterface};
use crate::error::Error;
use crate::reg;

/// One touch measurement.
///
/// `x` and `y` are raw 12-bit ADC values, `z` is the 8-bit pressure estimate.
/// When `touched` is false the coordinate fields are zero and carry no
/// meaning.
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchSample {
    pub x: u16,
    pub y: u16,
    pub z: u8,
    pub touched: bool,
}

impl TouchSample {
    /// The sample reported when the panel is not being touched.
    pub const NO_TOUCH: Self = Self {
        x: 0,
        y: 0,
        z: 0,
        touched: false,
    };

    /// Returns the sample location as a [`Point`] in raw ADC units.
    pub fn point(&self) -> Point {
        Point::new(self.x.into(), self.y.into())
    }
}

/// Unpacks a 4-byte FIFO record into (x, y, z).
pub(crate) fn unpack_sample(data: [u8; 4]) -> (u16, u16, u8) {
    let x = u16::from(data[0]) << 4 | u16::from(data[1]) >> 4;
    let y = u16::from(data[1] & 0x0F) << 8 | u16::from(data[2]);
    let z = data[3];
    (x, y, z)
}

/// The Stmpe610 driver.
///
/// Generic over the bus [`Interface`]; use [`Stmpe610::new_spi`] or
/// [`Stmpe610::new_i2c`] for the common cases. The driver owns the bus
/// handle for its lifetime and gives it back through [`Stmpe610::release`].
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Debug)]
pub struct Stmpe610<IF> {
    /// The register-level bus interface
    iface: IF,
}

impl<Spi> Stmpe610<SpiInterface<Spi>>
where
    Spi: SpiDevice<u8>,
{
    /// Creates a driver talking over an SPI device.
    pub fn new_spi(spi: Spi) -> Self {
        Self::new(SpiInterface::new(spi))
    }
}

impl<I2cBus> Stmpe610<I2cInterface<I2cBus>>
where
    I2cBus: I2c,
{
    /// Creates a driver talking over I2C at the default address `0x41`.
    pub fn new_i2c(i2c: I2cBus) -> Self {
        Self::new(I2cInterface::new(i2c))
    }

    /// Creates a driver talking over I2C at `address`.
    pub fn new_i2c_with_address(i2c: I2cBus, address: u8) -> Self {
        Self::new(I2cInterface::with_address(i2c, address))
    }
}

impl<IF, BusError> Stmpe610<IF>
where
    IF: Interface<Error = BusError>,
    BusError: Debug,
{
    pub fn new(iface: IF) -> Self {
        Self { iface }
    }

    /// Releases the bus interface.
    pub fn release(self) -> IF {
        self.iface
    }

    /// Verifies the chip identity, resets it and writes the fixed
    /// configuration.
    ///
    /// The configuration enables X/Y/Z acquisition with 4-sample averaging,
    /// a 1 ms touch-detect delay and a 5 ms panel settling time, sets the
    /// FIFO threshold to one sample and arms the touch-detect interrupt.
    /// `delay` covers the 1 ms the chip needs after a soft reset.
    ///
    /// Fails with [`Error::UnknownChip`] before touching any configuration
    /// register if the identification register does not read `0x0811`.
    pub fn init<Delay>(&mut self, delay: &mut Delay) -> Result<(), Error<BusError>>
    where
        Delay: DelayNs,
    {
        let version = self.chip_version()?;
        if version != reg::CHIP_ID_VALUE {
            return Err(Error::UnknownChip(version));
        }

        self.write(reg::SYS_CTRL1, reg::SYS_CTRL1_RESET)?;
        delay.delay_ms(1);

        // Ungate all clocks.
        self.write(reg::SYS_CTRL2, 0x00)?;
        self.write(reg::TSC_CTRL, reg::TSC_CTRL_XYZ | reg::TSC_CTRL_EN)?;
        self.write(reg::INT_EN, reg::INT_EN_TOUCHDET)?;
        // 10-bit ADC, 96 clocks per conversion.
        self.write(reg::ADC_CTRL1, reg::ADC_CTRL1_10BIT | (0x6 << 4))?;
        self.write(reg::ADC_CTRL2, reg::ADC_CTRL2_6_5MHZ)?;
        self.write(
            reg::TSC_CFG,
            reg::TSC_CFG_4SAMPLE | reg::TSC_CFG_DELAY_1MS | reg::TSC_CFG_SETTLE_5MS,
        )?;
        self.write(reg::TSC_FRACTION_Z, 0x06)?;
        self.write(reg::FIFO_TH, 1)?;
        self.write(reg::FIFO_STA, reg::FIFO_STA_RESET)?;
        self.write(reg::FIFO_STA, 0x00)?;
        self.write(reg::TSC_I_DRIVE, reg::TSC_I_DRIVE_50MA)?;
        // Clear any pending interrupts before enabling the line.
        self.write(reg::INT_STA, 0xFF)?;
        self.write(reg::INT_CTRL, reg::INT_CTRL_POL_HIGH | reg::INT_CTRL_ENABLE)?;

        Ok(())
    }

    /// Returns the raw 16-bit chip identification value.
    pub fn chip_version(&mut self) -> Result<u16, Error<BusError>> {
        let high = self.read(reg::CHIP_ID)?;
        let low = self.read(reg::CHIP_ID + 1)?;
        Ok(u16::from(high) << 8 | u16::from(low))
    }

    /// Check if the panel is currently touched.
    pub fn is_touched(&mut self) -> Result<bool, Error<BusError>> {
        let ctrl = self.read(reg::TSC_CTRL)?;
        Ok(ctrl & reg::TSC_CTRL_TOUCHED != 0)
    }

    /// Reads the next touch sample from the FIFO.
    ///
    /// The touch-detect bit can clear between detection and readout. When it
    /// is unset at read time this returns [`TouchSample::NO_TOUCH`] without
    /// draining the FIFO, so a stale buffered sample is never reported as a
    /// live touch.
    ///
    /// After draining a sample that leaves the FIFO empty, the interrupt
    /// status register is cleared so the touch-detect line can fire again.
    pub fn read_touch(&mut self) -> Result<TouchSample, Error<BusError>> {
        if !self.is_touched()? {
            return Ok(TouchSample::NO_TOUCH);
        }

        let mut data = [0u8; 4];
        for byte in data.iter_mut() {
            *byte = self.read(reg::TSC_DATA_AUTO)?;
        }
        let (x, y, z) = unpack_sample(data);

        if self.fifo_empty()? {
            self.write(reg::INT_STA, 0xFF)?;
        }

        Ok(TouchSample {
            x,
            y,
            z,
            touched: true,
        })
    }

    /// Returns the number of samples currently buffered in the FIFO.
    pub fn fifo_size(&mut self) -> Result<u8, Error<BusError>> {
        self.read(reg::FIFO_SIZE)
    }

    /// Check if the sample FIFO is empty.
    pub fn fifo_empty(&mut self) -> Result<bool, Error<BusError>> {
        let status = self.read(reg::FIFO_STA)?;
        Ok(status & reg::FIFO_STA_EMPTY != 0)
    }

    fn read(&mut self, address: u8) -> Result<u8, Error<BusError>> {
        self.iface.read_register(address).map_err(Error::Bus)
    }

    fn write(&mut self, address: u8, value: u8) -> Result<(), Error<BusError>> {
        self.iface.write_register(address, value).map_err(Error::Bus)
    }
}
