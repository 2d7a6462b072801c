use embedded_hal::{digital::OutputPin, spi::SpiDevice};

use crate::{
    command::{Command, RegisterSelection},
    error::Error,
    sender::SendCommand,
};

/// Sender on a hardware SPI peripheral
///
/// The [`SpiDevice`] owns chip-select, this sender only drives the mode (D/C) line.
/// Configure the bus as SPI mode 0, MSB first, at most 4 MHz.
pub struct SpiSender<Spi, ModePin>
where
    Spi: SpiDevice,
    ModePin: OutputPin,
{
    spi: Spi,
    mode_pin: ModePin,
}

impl<Spi, ModePin> SpiSender<Spi, ModePin>
where
    Spi: SpiDevice,
    ModePin: OutputPin,
{
    #[allow(missing_docs)]
    pub fn new(spi: Spi, mode: ModePin) -> Self {
        Self {
            spi,
            mode_pin: mode,
        }
    }

    /// Give the bus and the pin back
    pub fn release(self) -> (Spi, ModePin) {
        (self.spi, self.mode_pin)
    }
}

impl<Spi, ModePin> SendCommand for SpiSender<Spi, ModePin>
where
    Spi: SpiDevice,
    ModePin: OutputPin,
{
    fn send(&mut self, command: Command) -> Result<(), Error> {
        match command.get_register_selection() {
            RegisterSelection::Command => self.mode_pin.set_low(),
            RegisterSelection::Data => self.mode_pin.set_high(),
        }
        .map_err(|_| Error::ModePin)?;

        self.spi
            .write(&[command.get_bits()])
            .map_err(|_| Error::Bus)
    }

    fn setup(&mut self) -> Result<(), Error> {
        self.mode_pin.set_low().map_err(|_| Error::ModePin)
    }
}
