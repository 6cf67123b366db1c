//! Host-side driver for the ADT7410 I2C temperature sensor.

pub mod driver;
pub mod sensor;
pub mod util;

pub use driver::adafruit::adt7410::{Adt7410, Config, Error};
