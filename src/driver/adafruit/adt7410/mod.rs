//! Driver for the Analog Devices ADT7410 temperature sensor.
//! Based on https://github.com/adafruit/Adafruit_ADT7410.
//!
//! Register reads never fail at this API: a failed transaction yields an
//! all-ones sentinel, which then flows into the conversion as a reading of
//! -1/128 °C. Use the `try_` methods to tell a bus fault from a reading.

use embedded_hal::blocking::{
    delay::DelayMs,
    i2c::{Read, Write},
};
use thiserror::Error;
use tracing::{debug, trace, warn};

pub mod reg;
pub mod temperature;

use reg::Register;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i2c error")]
    I2c,
    #[error("unexpected device id {id:#04x}")]
    BadId { id: u8 },
}

/// Bus address and transport the driver is bound to.
pub struct Config<I2C> {
    pub address: u8,
    pub i2c: I2C,
}

impl<I2C> Config<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self {
            address: reg::DEFAULT_ADDRESS,
            i2c,
        }
    }

    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }
}

pub struct Adt7410<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> Adt7410<I2C>
where
    I2C: Read + Write,
{
    pub fn new(config: Config<I2C>) -> Self {
        Self {
            i2c: config.i2c,
            address: config.address,
        }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give the bus back to the caller.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Verify the device id, soft reset, and switch to 16-bit resolution.
    ///
    /// Returns `false` without touching the device if the id does not match.
    /// Failures of the reset and configuration writes are logged but do not
    /// change the result.
    pub fn init<DELAY: DelayMs<u32>>(&mut self, delay: &mut DELAY) -> bool {
        let id = self.read_register8(Register::Id) & reg::id::MASK;
        if id != reg::id::EXPECTED {
            debug!("adt7410 at {:#04x}: unexpected id {id:#04x}", self.address);
            return false;
        }

        if let Err(e) = self.reset() {
            warn!("adt7410 soft reset failed: {e}");
        }
        if let Err(e) = self.write_register8(Register::Config, reg::config::RESOLUTION_16BIT) {
            warn!("adt7410 config write failed: {e}");
        }

        delay.delay_ms(reg::RESET_DELAY_MS);

        debug!("initialized adt7410 at {:#04x}", self.address);
        true
    }

    /// Like [`Adt7410::init`], but every transaction's status is checked.
    pub fn try_init<DELAY: DelayMs<u32>>(&mut self, delay: &mut DELAY) -> Result<(), Error> {
        let raw = self.try_read_register8(Register::Id)?;
        let id = raw & reg::id::MASK;
        if id != reg::id::EXPECTED {
            return Err(Error::BadId { id: raw });
        }

        self.reset()?;
        self.write_register8(Register::Config, reg::config::RESOLUTION_16BIT)?;
        delay.delay_ms(reg::RESET_DELAY_MS);

        debug!("initialized adt7410 at {:#04x}", self.address);
        Ok(())
    }

    /// Get temperature in Celsius.
    pub fn read_celsius(&mut self) -> f32 {
        temperature::celsius_from_raw(self.read_register16(Register::TempMsb))
    }

    /// Get temperature in Fahrenheit.
    pub fn read_fahrenheit(&mut self) -> f32 {
        temperature::fahrenheit_from_raw(self.read_register16(Register::TempMsb))
    }

    pub fn try_read_celsius(&mut self) -> Result<f32, Error> {
        self.try_read_register16(Register::TempMsb)
            .map(temperature::celsius_from_raw)
    }

    pub fn try_read_fahrenheit(&mut self) -> Result<f32, Error> {
        self.try_read_register16(Register::TempMsb)
            .map(temperature::fahrenheit_from_raw)
    }

    /// Issue a soft reset. Only the register address is sent.
    pub fn reset(&mut self) -> Result<(), Error> {
        self.write(&[Register::SoftReset as u8])
    }

    pub fn read_register8(&mut self, reg: Register) -> u8 {
        self.try_read_register8(reg).unwrap_or_else(|e| {
            warn!("adt7410 read of {reg:?} failed ({e}), using sentinel");
            reg::SENTINEL_8
        })
    }

    pub fn read_register16(&mut self, reg: Register) -> u16 {
        self.try_read_register16(reg).unwrap_or_else(|e| {
            warn!("adt7410 read of {reg:?} failed ({e}), using sentinel");
            reg::SENTINEL_16
        })
    }

    /// Single-byte registers still answer with two bytes; the second is
    /// discarded.
    pub fn try_read_register8(&mut self, reg: Register) -> Result<u8, Error> {
        let buf = self.read_window(reg)?;
        Ok(buf[0])
    }

    pub fn try_read_register16(&mut self, reg: Register) -> Result<u16, Error> {
        let buf = self.read_window(reg)?;
        Ok(u16::from_be_bytes(buf))
    }

    pub fn write_register8(&mut self, reg: Register, value: u8) -> Result<(), Error> {
        self.write(&[reg as u8, value])
    }

    pub fn write_register16(&mut self, reg: Register, value: u16) -> Result<(), Error> {
        let [hi, lo] = value.to_be_bytes();
        self.write(&[reg as u8, hi, lo])
    }

    fn write(&mut self, buf: &[u8]) -> Result<(), Error> {
        trace!("adt7410 write {buf:02x?}");
        self.i2c.write(self.address, buf).map_err(|_| Error::I2c)
    }

    // the read request is only issued once the address phase succeeded
    fn read_window(&mut self, reg: Register) -> Result<[u8; 2], Error> {
        self.write(&[reg as u8])?;

        let mut buf = [0u8; 2];
        self.i2c
            .read(self.address, &mut buf)
            .map_err(|_| Error::I2c)?;
        trace!("adt7410 read {reg:?} -> {buf:02x?}");
        Ok(buf)
    }
}
