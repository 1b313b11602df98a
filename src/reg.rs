//! STMPE610 register map.
//!
//! Register addresses and bit-field values from the STMPE610 data sheet
//! (<https://www.st.com/resource/en/datasheet/stmpe610.pdf>). Addresses are
//! 8 bits wide; the chip identification register is the only 16-bit value
//! and is read as two consecutive byte registers starting at `CHIP_ID`.

/// Default I2C slave address (ADDR0 pin low).
pub const DEFAULT_I2C_ADDRESS: u8 = 0x41;

/// Value the 16-bit chip identification register must read back as.
pub const CHIP_ID_VALUE: u16 = 0x0811;

/// Chip identification, 16 bits big-endian at 0x00..=0x01.
pub const CHIP_ID: u8 = 0x00;

/// System control 1: reset control.
pub const SYS_CTRL1: u8 = 0x03;
pub const SYS_CTRL1_RESET: u8 = 0x02;

/// System control 2: clock gating. Writing 0 enables all clocks.
pub const SYS_CTRL2: u8 = 0x04;

/// Interrupt control.
pub const INT_CTRL: u8 = 0x09;
pub const INT_CTRL_POL_HIGH: u8 = 0x04;
pub const INT_CTRL_POL_LOW: u8 = 0x00;
pub const INT_CTRL_EDGE: u8 = 0x02;
pub const INT_CTRL_LEVEL: u8 = 0x00;
pub const INT_CTRL_ENABLE: u8 = 0x01;
pub const INT_CTRL_DISABLE: u8 = 0x00;

/// Interrupt enable mask.
pub const INT_EN: u8 = 0x0A;
pub const INT_EN_TOUCHDET: u8 = 0x01;
pub const INT_EN_FIFOTH: u8 = 0x02;
pub const INT_EN_FIFOOF: u8 = 0x04;
pub const INT_EN_FIFOFULL: u8 = 0x08;
pub const INT_EN_FIFOEMPTY: u8 = 0x10;
pub const INT_EN_ADC: u8 = 0x40;
pub const INT_EN_GPIO: u8 = 0x80;

/// Interrupt status. Writing a bit clears it.
pub const INT_STA: u8 = 0x0B;
pub const INT_STA_TOUCHDET: u8 = 0x01;

/// ADC control 1: sample time and resolution.
pub const ADC_CTRL1: u8 = 0x20;
pub const ADC_CTRL1_12BIT: u8 = 0x08;
pub const ADC_CTRL1_10BIT: u8 = 0x00;

/// ADC control 2: clock speed.
pub const ADC_CTRL2: u8 = 0x21;
pub const ADC_CTRL2_1_625MHZ: u8 = 0x00;
pub const ADC_CTRL2_3_25MHZ: u8 = 0x01;
pub const ADC_CTRL2_6_5MHZ: u8 = 0x02;

/// GPIO block. The driver does not configure these, but alternate-function
/// control matters on boards that route the touch lines through GPIO.
pub const GPIO_SET_PIN: u8 = 0x10;
pub const GPIO_CLR_PIN: u8 = 0x11;
pub const GPIO_DIR: u8 = 0x13;
pub const GPIO_ALT_FUNCT: u8 = 0x17;

/// Touch screen controller control: enable, operating mode and (read-only)
/// touch-detect status in bit 7.
pub const TSC_CTRL: u8 = 0x40;
pub const TSC_CTRL_EN: u8 = 0x01;
pub const TSC_CTRL_XYZ: u8 = 0x00;
pub const TSC_CTRL_XY: u8 = 0x02;
pub const TSC_CTRL_TOUCHED: u8 = 0x80;

/// Touch screen controller configuration: averaging, touch-detect delay and
/// panel settling time.
pub const TSC_CFG: u8 = 0x41;
pub const TSC_CFG_1SAMPLE: u8 = 0x00;
pub const TSC_CFG_2SAMPLE: u8 = 0x40;
pub const TSC_CFG_4SAMPLE: u8 = 0x80;
pub const TSC_CFG_8SAMPLE: u8 = 0xC0;
pub const TSC_CFG_DELAY_10US: u8 = 0x00;
pub const TSC_CFG_DELAY_50US: u8 = 0x08;
pub const TSC_CFG_DELAY_100US: u8 = 0x10;
pub const TSC_CFG_DELAY_500US: u8 = 0x18;
pub const TSC_CFG_DELAY_1MS: u8 = 0x20;
pub const TSC_CFG_DELAY_5MS: u8 = 0x28;
pub const TSC_CFG_DELAY_10MS: u8 = 0x30;
pub const TSC_CFG_DELAY_50MS: u8 = 0x38;
pub const TSC_CFG_SETTLE_10US: u8 = 0x00;
pub const TSC_CFG_SETTLE_100US: u8 = 0x01;
pub const TSC_CFG_SETTLE_500US: u8 = 0x02;
pub const TSC_CFG_SETTLE_1MS: u8 = 0x03;
pub const TSC_CFG_SETTLE_5MS: u8 = 0x04;
pub const TSC_CFG_SETTLE_10MS: u8 = 0x05;
pub const TSC_CFG_SETTLE_50MS: u8 = 0x06;
pub const TSC_CFG_SETTLE_100MS: u8 = 0x07;

/// FIFO threshold for the FIFOTH interrupt.
pub const FIFO_TH: u8 = 0x4A;

/// FIFO status and reset.
pub const FIFO_STA: u8 = 0x4B;
pub const FIFO_STA_RESET: u8 = 0x01;
pub const FIFO_STA_OFLOW: u8 = 0x80;
pub const FIFO_STA_FULL: u8 = 0x40;
pub const FIFO_STA_EMPTY: u8 = 0x20;
pub const FIFO_STA_THTRIG: u8 = 0x10;

/// Number of samples currently buffered in the FIFO.
pub const FIFO_SIZE: u8 = 0x4C;

/// Touch data registers. `TSC_DATA_AUTO` is the non-incrementing FIFO read
/// port: each read of it pops the next byte of the current 4-byte sample.
pub const TSC_DATA_X: u8 = 0x4D;
pub const TSC_DATA_Y: u8 = 0x4F;
pub const TSC_DATA_AUTO: u8 = 0xD7;

/// Fractional part of the Z (pressure) value.
pub const TSC_FRACTION_Z: u8 = 0x56;

/// Touch screen driver current limit.
pub const TSC_I_DRIVE: u8 = 0x58;
pub const TSC_I_DRIVE_20MA: u8 = 0x00;
pub const TSC_I_DRIVE_50MA: u8 = 0x01;

/// On SPI, bit 7 of the address byte selects a read; writes keep it clear.
pub const SPI_READ: u8 = 0x80;
