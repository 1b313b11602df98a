//! Register access over SPI or I2C.
//!
//! The STMPE610 exposes the same register map on both of its bus interfaces,
//! so the driver core talks to an [`Interface`] and the transport-specific
//! byte framing lives here.
//!
//! On SPI, the address byte is sent first with bit 7 set for a read and
//! clear for a write; the whole exchange happens inside a single chip-select
//! assertion, which [`embedded_hal::spi::SpiDevice::transaction`] provides.
//! On I2C, a read is a write of the register address followed by a repeated
//! start and the data read, and a write is the address byte and value in one
//! write.

use embedded_hal::i2c::I2c;
use embedded_hal::spi::{Operation, SpiDevice};

use crate::reg;

/// A register-level connection to the STMPE610.
pub trait Interface {
    /// Error type of the underlying bus.
    type Error;

    /// Writes one 8-bit value to the register at `address`.
    fn write_register(&mut self, address: u8, value: u8) -> Result<(), Self::Error>;

    /// Reads `buffer.len()` bytes starting at the register at `address`.
    fn read_registers(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;

    /// Reads one 8-bit value from the register at `address`.
    fn read_register(&mut self, address: u8) -> Result<u8, Self::Error> {
        let mut buffer = [0u8; 1];
        self.read_registers(address, &mut buffer)?;
        Ok(buffer[0])
    }
}

/// [`Interface`] implementation over an [`SpiDevice`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug)]
pub struct SpiInterface<Spi> {
    spi: Spi,
}

impl<Spi> SpiInterface<Spi>
where
    Spi: SpiDevice<u8>,
{
    pub fn new(spi: Spi) -> Self {
        Self { spi }
    }

    /// Releases the underlying SPI device.
    pub fn release(self) -> Spi {
        self.spi
    }
}

impl<Spi> Interface for SpiInterface<Spi>
where
    Spi: SpiDevice<u8>,
{
    type Error = Spi::Error;

    fn write_register(&mut self, address: u8, value: u8) -> Result<(), Self::Error> {
        self.spi.write(&[address & !reg::SPI_READ, value])
    }

    fn read_registers(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.spi.transaction(&mut [
            Operation::Write(&[address | reg::SPI_READ]),
            Operation::Read(buffer),
        ])
    }
}

/// [`Interface`] implementation over an [`I2c`] bus.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug)]
pub struct I2cInterface<I2cBus> {
    i2c: I2cBus,
    address: u8,
}

impl<I2cBus> I2cInterface<I2cBus>
where
    I2cBus: I2c,
{
    /// Connects at the default slave address `0x41` (ADDR0 pin low).
    pub fn new(i2c: I2cBus) -> Self {
        Self::with_address(i2c, reg::DEFAULT_I2C_ADDRESS)
    }

    /// Connects at `address`, for boards that strap ADDR0 high.
    pub fn with_address(i2c: I2cBus, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Releases the underlying I2C bus.
    pub fn release(self) -> I2cBus {
        self.i2c
    }
}

impl<I2cBus> Interface for I2cInterface<I2cBus>
where
    I2cBus: I2c,
{
    type Error = I2cBus::Error;

    fn write_register(&mut self, address: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[address, value])
    }

    fn read_registers(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(self.address, &[address], buffer)
    }
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use embedded_hal::i2c::{self, ErrorKind, ErrorType, I2c};

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct I2cFault;

    impl i2c::Error for I2cFault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    /// Records every I2C transaction as (slave address, written bytes,
    /// number of bytes read back).
    struct FakeI2c {
        transactions: Vec<(u8, Vec<u8>, usize)>,
        response: u8,
    }

    impl ErrorType for FakeI2c {
        type Error = I2cFault;
    }

    impl I2c for FakeI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [i2c::Operation<'_>],
        ) -> Result<(), I2cFault> {
            let mut written = Vec::new();
            let mut read = 0;
            for operation in operations.iter_mut() {
                match operation {
                    i2c::Operation::Write(bytes) => written.extend_from_slice(bytes),
                    i2c::Operation::Read(buffer) => {
                        buffer.fill(self.response);
                        read += buffer.len();
                    }
                }
            }
            self.transactions.push((address, written, read));
            Ok(())
        }
    }

    #[test]
    fn i2c_write_frames_address_and_value_together() {
        let mut iface = I2cInterface::new(FakeI2c {
            transactions: Vec::new(),
            response: 0,
        });
        iface.write_register(reg::INT_STA, 0xFF).unwrap();

        let i2c = iface.release();
        assert_eq!(
            i2c.transactions,
            [(reg::DEFAULT_I2C_ADDRESS, vec![reg::INT_STA, 0xFF], 0)]
        );
    }

    #[test]
    fn i2c_read_uses_register_pointer_then_read() {
        let mut iface = I2cInterface::with_address(
            FakeI2c {
                transactions: Vec::new(),
                response: 0x81,
            },
            0x44,
        );
        assert_eq!(iface.read_register(reg::TSC_CTRL).unwrap(), 0x81);

        let i2c = iface.release();
        assert_eq!(i2c.transactions, [(0x44, vec![reg::TSC_CTRL], 1)]);
    }
}
