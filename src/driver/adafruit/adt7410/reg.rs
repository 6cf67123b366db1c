/// Default 7-bit bus address (A0 and A1 tied low).
pub const DEFAULT_ADDRESS: u8 = 0x48;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// Temperature MSB; the LSB follows at the next address.
    TempMsb = 0x00,
    Config = 0x03,
    Id = 0x0B,
    /// Write-only, the address byte alone triggers the reset.
    SoftReset = 0x2F,
}

pub mod id {
    /// Manufacturer ID occupies the top 5 bits, the silicon revision the rest.
    pub const MASK: u8 = 0xF8;
    pub const EXPECTED: u8 = 0xC8;
}

pub mod config {
    /// 16-bit resolution; the power-on default is 13-bit.
    pub const RESOLUTION_16BIT: u8 = 0x80;
}

/// Settling time after reset and configuration, in milliseconds.
pub const RESET_DELAY_MS: u32 = 10;

pub const SENTINEL_8: u8 = 0xFF;
pub const SENTINEL_16: u16 = 0xFFFF;
