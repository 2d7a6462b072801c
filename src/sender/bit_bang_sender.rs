use embedded_hal::digital::OutputPin;

use crate::{
    command::{Command, RegisterSelection},
    error::Error,
    sender::SendCommand,
    utils::{BitOps, BitState},
};

// Serial interface of the PCD8544:
// SCE (chip enable, active low) / D/C (low = command) / SDIN / SCLK
// data is sampled on the rising edge of SCLK, MSB first

/// Sender that clocks bytes out through 4 GPIO lines
pub struct BitBangSender<SclkPin, DataPin, ModePin, CselPin>
where
    SclkPin: OutputPin,
    DataPin: OutputPin,
    ModePin: OutputPin,
    CselPin: OutputPin,
{
    sclk_pin: SclkPin,
    data_pin: DataPin,
    mode_pin: ModePin,
    csel_pin: CselPin,
}

impl<SclkPin, DataPin, ModePin, CselPin> BitBangSender<SclkPin, DataPin, ModePin, CselPin>
where
    SclkPin: OutputPin,
    DataPin: OutputPin,
    ModePin: OutputPin,
    CselPin: OutputPin,
{
    /// Bind the 4 bus lines, no pin is touched yet
    pub fn new(sclk: SclkPin, data: DataPin, mode: ModePin, csel: CselPin) -> Self {
        Self {
            sclk_pin: sclk,
            data_pin: data,
            mode_pin: mode,
            csel_pin: csel,
        }
    }

    /// Give the pins back
    pub fn release(self) -> (SclkPin, DataPin, ModePin, CselPin) {
        (self.sclk_pin, self.data_pin, self.mode_pin, self.csel_pin)
    }

    fn shift_out(&mut self, raw_bits: u8) -> Result<(), Error> {
        for index in (0..8u8).rev() {
            match raw_bits.check_bit(index) {
                BitState::Set => self.data_pin.set_high(),
                BitState::Clear => self.data_pin.set_low(),
            }
            .map_err(|_| Error::DataPin)?;

            self.sclk_pin.set_high().map_err(|_| Error::ClockPin)?;
            self.sclk_pin.set_low().map_err(|_| Error::ClockPin)?;
        }

        Ok(())
    }
}

impl<SclkPin, DataPin, ModePin, CselPin> SendCommand
    for BitBangSender<SclkPin, DataPin, ModePin, CselPin>
where
    SclkPin: OutputPin,
    DataPin: OutputPin,
    ModePin: OutputPin,
    CselPin: OutputPin,
{
    fn send(&mut self, command: Command) -> Result<(), Error> {
        match command.get_register_selection() {
            RegisterSelection::Command => self.mode_pin.set_low(),
            RegisterSelection::Data => self.mode_pin.set_high(),
        }
        .map_err(|_| Error::ModePin)?;

        self.csel_pin.set_low().map_err(|_| Error::ChipSelectPin)?;

        // keep chip-select consistent even if the shift fails halfway
        let shifted = self.shift_out(command.get_bits());

        self.csel_pin.set_high().map_err(|_| Error::ChipSelectPin)?;

        shifted
    }

    fn setup(&mut self) -> Result<(), Error> {
        self.sclk_pin.set_low().map_err(|_| Error::ClockPin)?;
        self.data_pin.set_low().map_err(|_| Error::DataPin)?;
        self.mode_pin.set_low().map_err(|_| Error::ModePin)?;
        self.deselect()
    }

    fn deselect(&mut self) -> Result<(), Error> {
        self.csel_pin.set_high().map_err(|_| Error::ChipSelectPin)
    }
}
