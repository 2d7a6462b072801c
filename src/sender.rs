//! Built-in sender
//! If you want to create a new sender, you will need to implement [`SendCommand`] trait

use crate::{
    command::{Command, CommandSet},
    error::Error,
};

mod bit_bang_sender;
mod spi_sender;

pub use bit_bang_sender::BitBangSender;
pub use spi_sender::SpiSender;

/// [`SendCommand`] is the trait a sender should implement to communicate with the hardware
///
/// A sender owns the bus lines: clock, data, mode-select and chip-select.
pub trait SendCommand {
    /// Select the channel from [`Command`], and shift its byte out, MSB first
    fn send(&mut self, command: Command) -> Result<(), Error>;

    /// Encode a [`CommandSet`] and send it
    fn send_command_set(&mut self, command: CommandSet) -> Result<(), Error> {
        self.send(command.into())
    }

    /// Put the bus lines in their idle level, called once by `begin()`
    ///
    /// Note:
    /// If a driver doesn't own the lines directly, just silently bypass it
    fn setup(&mut self) -> Result<(), Error> {
        Ok(())
    }

    /// Release chip-select, called by every `reset()`
    ///
    /// Note:
    /// If a driver doesn't own chip-select, just silently bypass it
    fn deselect(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

impl<S: SendCommand> SendCommand for &mut S {
    fn send(&mut self, command: Command) -> Result<(), Error> {
        S::send(self, command)
    }

    fn setup(&mut self) -> Result<(), Error> {
        S::setup(self)
    }

    fn deselect(&mut self) -> Result<(), Error> {
        S::deselect(self)
    }
}
