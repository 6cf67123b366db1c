use std::{thread::JoinHandle, time::Duration};

use anyhow::{bail, Context};
use embedded_hal::blocking::i2c::{Read, Write};
use rppal::i2c::I2c;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace};

use crate::{
    driver::{
        adafruit::adt7410::{reg, Adt7410, Config},
        ThreadDelay,
    },
    util::Interval,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Reading { celsius: f32, fahrenheit: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub bus: u8,
    pub address: u8,
    pub interval: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bus: 1,
            address: reg::DEFAULT_ADDRESS,
            interval: Duration::from_millis(1000),
        }
    }
}

impl Settings {
    /// Reads `ADT7410_I2C_BUS`, `ADT7410_ADDRESS` and `ADT7410_INTERVAL_MS`,
    /// falling back to the defaults for any that are unset.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut settings = Self::default();

        if let Some(bus) = lookup("ADT7410_I2C_BUS") {
            settings.bus = bus
                .trim()
                .parse()
                .with_context(|| format!("invalid ADT7410_I2C_BUS {bus:?}"))?;
        }

        if let Some(address) = lookup("ADT7410_ADDRESS") {
            settings.address = parse_address(&address)
                .with_context(|| format!("invalid ADT7410_ADDRESS {address:?}"))?;
        }

        if let Some(ms) = lookup("ADT7410_INTERVAL_MS") {
            let ms: u64 = ms
                .trim()
                .parse()
                .with_context(|| format!("invalid ADT7410_INTERVAL_MS {ms:?}"))?;
            settings.interval = Duration::from_millis(ms);
        }

        Ok(settings)
    }
}

/// Accepts `0x`-prefixed hex or decimal. Only 7-bit addresses are valid.
pub fn parse_address(s: &str) -> anyhow::Result<u8> {
    let s = s.trim();
    let address = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16)?,
        None => s.parse::<u8>()?,
    };

    if address > 0x7F {
        bail!("address {address:#04x} is not a 7-bit address");
    }

    Ok(address)
}

pub fn spawn_thread(
    ct: CancellationToken,
    settings: Settings,
    evt_tx: flume::Sender<Event>,
) -> JoinHandle<anyhow::Result<()>> {
    std::thread::spawn(move || {
        let i2c = I2c::with_bus(settings.bus)
            .with_context(|| format!("failed to open i2c bus {}", settings.bus))?;
        let mut sensor = Adt7410::new(Config::new(i2c).with_address(settings.address));
        let mut delay = ThreadDelay;

        if !sensor.init(&mut delay) {
            bail!(
                "no adt7410 found at {:#04x} on i2c bus {}",
                settings.address,
                settings.bus
            );
        }
        info!("initialized adafruit adt7410 driver");

        poll(&ct, &mut sensor, Interval::new(settings.interval), &evt_tx);

        Ok(())
    })
}

/// Reads the sensor once per tick until cancelled or nobody is listening.
pub fn poll<I2C: Read + Write>(
    ct: &CancellationToken,
    sensor: &mut Adt7410<I2C>,
    mut interval: Interval,
    evt_tx: &flume::Sender<Event>,
) {
    while !ct.is_cancelled() {
        let celsius = sensor.read_celsius();
        let fahrenheit = sensor.read_fahrenheit();
        trace!("read {celsius} °C / {fahrenheit} °F");

        if evt_tx.send(Event::Reading { celsius, fahrenheit }).is_err() {
            debug!("event receiver dropped, stopping sensor poll");
            break;
        }

        interval.tick();
    }
}
