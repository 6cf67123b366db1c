use std::time::Duration;

pub mod adafruit;

/// Blocking delay backed by the calling thread's sleep.
pub struct ThreadDelay;

impl embedded_hal::blocking::delay::DelayUs<u32> for ThreadDelay {
    fn delay_us(&mut self, us: u32) {
        std::thread::sleep(Duration::from_micros(us as u64))
    }
}

impl embedded_hal::blocking::delay::DelayMs<u32> for ThreadDelay {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(ms as u64))
    }
}
