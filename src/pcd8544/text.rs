use embedded_hal::{digital::OutputPin, pwm::SetDutyCycle};

use crate::{error::Error, font, pcd8544::Pcd8544, sender::SendCommand, MAX_ROWS};

const CR: u8 = b'\r';
const LF: u8 = b'\n';

impl<Sender, ResetPin, LightPin> Pcd8544<Sender, ResetPin, LightPin>
where
    Sender: SendCommand,
    ResetPin: OutputPin,
    LightPin: SetDutyCycle,
{
    /// Render one character at the cursor, always reports 1 byte consumed
    ///
    /// * `\r` alone draws nothing, the next glyph goes back to the start of the line.
    ///   A line that just wrapped is rewritten from its first row.
    /// * `\n` moves to column 0 of the next row. Right after a wrap the cursor
    ///   is already on a fresh row, so only the column is reset, and `\r\n` doesn't
    ///   leave an empty line.
    /// * any other code draws its 6 columns glyph, codes above 0x7F draw the placeholder
    pub fn write_byte(&mut self, character: u8) -> Result<usize, Error> {
        let current = font::table_index(character);
        let previous = self.cursor.get_previous_character();
        self.cursor.set_previous_character(current);

        match current {
            CR => return Ok(1),
            LF => {
                if !self.cursor.is_column_wrapped() {
                    self.set_row_address_of_ram(self.cursor.get_row() + MAX_ROWS + 1)?;
                }
                self.set_col_address_of_ram(0)?;
                return Ok(1);
            }
            _ => {}
        }

        if previous == CR {
            if self.cursor.is_column_wrapped() {
                self.set_row_address_of_ram(self.cursor.get_row() + MAX_ROWS - 1)?;
            }
            self.set_col_address_of_ram(0)?;
        }

        self.cursor.clear_wrap_flags();
        for &column in font::glyph(current) {
            self.send_data(column)?;
            self.cursor.advance();
        }

        Ok(1)
    }

    /// [`Pcd8544::write_byte`] over a whole buffer
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<usize, Error> {
        bytes
            .iter()
            .try_fold(0, |count, &byte| Ok(count + self.write_byte(byte)?))
    }
}

impl<Sender, ResetPin, LightPin> core::fmt::Write for Pcd8544<Sender, ResetPin, LightPin>
where
    Sender: SendCommand,
    ResetPin: OutputPin,
    LightPin: SetDutyCycle,
{
    /// One glyph per `char`, anything outside ASCII draws a single placeholder
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        s.chars()
            .map(|c| u8::try_from(c).unwrap_or(font::PLACEHOLDER))
            .try_for_each(|byte| self.write_byte(byte).map(|_| ()))
            .map_err(|_| core::fmt::Error)
    }
}

impl<Sender, ResetPin, LightPin> embedded_io::ErrorType for Pcd8544<Sender, ResetPin, LightPin>
where
    Sender: SendCommand,
    ResetPin: OutputPin,
    LightPin: SetDutyCycle,
{
    type Error = Error;
}

impl<Sender, ResetPin, LightPin> embedded_io::Write for Pcd8544<Sender, ResetPin, LightPin>
where
    Sender: SendCommand,
    ResetPin: OutputPin,
    LightPin: SetDutyCycle,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.write_bytes(buf)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
