//! Errors reported by the driver
//!
//! The controller protocol itself never fails: out of range operands are wrapped or masked.
//! What can fail is the hardware layer the caller plugs in, so every variant names the signal
//! whose embedded-hal implementation reported an error.

/// Driver error
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Serial clock line
    ClockPin,
    /// Serial data line
    DataPin,
    /// Command/data mode-select line
    ModePin,
    /// Chip-select line
    ChipSelectPin,
    /// Reset line
    ResetPin,
    /// Backlight PWM output
    Backlight,
    /// Hardware bus (SPI) transfer
    Bus,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let signal = match self {
            Error::ClockPin => "clock pin",
            Error::DataPin => "data pin",
            Error::ModePin => "mode-select pin",
            Error::ChipSelectPin => "chip-select pin",
            Error::ResetPin => "reset pin",
            Error::Backlight => "backlight output",
            Error::Bus => "bus transfer",
        };
        write!(f, "pcd8544: {} failed", signal)
    }
}

impl embedded_io::Error for Error {
    fn kind(&self) -> embedded_io::ErrorKind {
        embedded_io::ErrorKind::Other
    }
}
