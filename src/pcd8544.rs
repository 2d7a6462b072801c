//! The PCD8544 driver

use embedded_hal::{digital::OutputPin, pwm::SetDutyCycle};
use log::debug;

use crate::{
    command::{Addressing, Command, CommandSet, DisplayMode, InstructionSet, PowerMode},
    error::Error,
    sender::SendCommand,
    state::Cursor,
    BYTE_COUNT,
};

mod init;
mod text;

pub use init::Config;

/// PCD8544 driver
///
/// Owns the whole wiring: the 4 bus lines (inside `Sender`), the reset line and the backlight.
///
/// Register writes below do not track the instruction set the controller is in.
/// Temperature, bias and operating voltage are only decoded in the extended set,
/// everything else expects the standard one. [`Pcd8544::set_contrast`] and
/// [`Pcd8544::reset`] take care of switching back.
pub struct Pcd8544<Sender, ResetPin, LightPin>
where
    Sender: SendCommand,
    ResetPin: OutputPin,
    LightPin: SetDutyCycle,
{
    sender: Sender,
    reset_pin: ResetPin,
    light_pin: LightPin,
    config: Config,
    cursor: Cursor,
}

impl<Sender, ResetPin, LightPin> Pcd8544<Sender, ResetPin, LightPin>
where
    Sender: SendCommand,
    ResetPin: OutputPin,
    LightPin: SetDutyCycle,
{
    /// Move the text cursor, row is a bank of 8 pixels, col a pixel column
    ///
    /// Both wrap around: `set_cursor(7, 90)` lands on `(1, 6)`.
    pub fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), Error> {
        self.set_row_address_of_ram(row)?;
        self.set_col_address_of_ram(col)
    }

    /// Read-only view of the text cursor
    pub fn get_cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Change the operating voltage, `level` in `0..=127`
    ///
    /// The controller is back in the standard instruction set when this returns.
    pub fn set_contrast(&mut self, level: u8) -> Result<(), Error> {
        debug!("pcd8544: contrast {}", level);
        self.set_ext_instruction_set()?;
        self.set_operating_voltage(level)?;
        self.set_std_instruction_set()
    }

    /// Backlight intensity, 0 is off, 255 is full
    ///
    /// The backlight input is active low, the PWM output is inverted accordingly.
    pub fn set_backlight(&mut self, level: u8) -> Result<(), Error> {
        self.light_pin
            .set_duty_cycle_fraction(u16::from(u8::MAX - level), u16::from(u8::MAX))
            .map_err(|_| Error::Backlight)
    }

    /// Fill the whole display RAM with `value`, and move the cursor home
    pub fn clear_display(&mut self, value: u8) -> Result<(), Error> {
        debug!("pcd8544: clear display with {:#04x}", value);
        self.set_cursor(0, 0)?;
        (0..BYTE_COUNT).try_for_each(|_| self.send_data(value))
    }

    /// Copy a full frame into display RAM, starting from `(0, 0)`
    ///
    /// Byte `i` lands at row `i / 84`, column `i % 84`.
    /// A `static` image is read straight from flash.
    pub fn put_image(&mut self, image: &[u8; BYTE_COUNT]) -> Result<(), Error> {
        debug!("pcd8544: put image");
        self.set_cursor(0, 0)?;
        image.iter().try_for_each(|&byte| self.send_data(byte))
    }

    #[allow(missing_docs)]
    pub fn set_std_instruction_set(&mut self) -> Result<(), Error> {
        self.sender.send_command_set(CommandSet::FunctionSet(
            PowerMode::Active,
            Addressing::Horizontal,
            InstructionSet::Standard,
        ))
    }

    #[allow(missing_docs)]
    pub fn set_ext_instruction_set(&mut self) -> Result<(), Error> {
        self.sender.send_command_set(CommandSet::FunctionSet(
            PowerMode::Active,
            Addressing::Horizontal,
            InstructionSet::Extended,
        ))
    }

    /// Put the chip to sleep, RAM content is kept
    pub fn set_power_down_mode(&mut self) -> Result<(), Error> {
        self.sender.send_command_set(CommandSet::FunctionSet(
            PowerMode::PowerDown,
            Addressing::Horizontal,
            InstructionSet::Standard,
        ))
    }

    #[allow(missing_docs)]
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> Result<(), Error> {
        self.sender.send_command_set(CommandSet::DisplayControl(mode))
    }

    #[allow(missing_docs)]
    pub fn set_blank_mode(&mut self) -> Result<(), Error> {
        self.set_display_mode(DisplayMode::Blank)
    }

    #[allow(missing_docs)]
    pub fn set_black_mode(&mut self) -> Result<(), Error> {
        self.set_display_mode(DisplayMode::Black)
    }

    #[allow(missing_docs)]
    pub fn set_normal_mode(&mut self) -> Result<(), Error> {
        self.set_display_mode(DisplayMode::Normal)
    }

    #[allow(missing_docs)]
    pub fn set_inverse_mode(&mut self) -> Result<(), Error> {
        self.set_display_mode(DisplayMode::Inverse)
    }

    /// Set the RAM row bank, and the cursor row with it
    pub fn set_row_address_of_ram(&mut self, row: u8) -> Result<(), Error> {
        let row = self.cursor.set_row(row);
        self.sender
            .send_command_set(CommandSet::SetRowAddress(row))
    }

    /// Set the RAM column, and the cursor column with it
    pub fn set_col_address_of_ram(&mut self, col: u8) -> Result<(), Error> {
        let col = self.cursor.set_column(col);
        self.sender
            .send_command_set(CommandSet::SetColumnAddress(col))
    }

    /// Extended instruction set only
    pub fn set_temperature_control(&mut self, tc: u8) -> Result<(), Error> {
        self.sender
            .send_command_set(CommandSet::TemperatureControl(tc))
    }

    /// Extended instruction set only
    pub fn set_bias_system(&mut self, bias: u8) -> Result<(), Error> {
        self.sender.send_command_set(CommandSet::BiasSystem(bias))
    }

    /// Extended instruction set only, see [`Pcd8544::set_contrast`] for the wrapped version
    pub fn set_operating_voltage(&mut self, vop: u8) -> Result<(), Error> {
        self.sender
            .send_command_set(CommandSet::OperatingVoltage(vop))
    }

    /// Send a raw byte on the instruction channel
    pub fn send_command(&mut self, value: u8) -> Result<(), Error> {
        self.sender.send(Command::instruction(value))
    }

    /// Send a raw byte on the data channel
    ///
    /// The controller advances its address counter, the text cursor is not updated.
    pub fn send_data(&mut self, value: u8) -> Result<(), Error> {
        self.sender.send_command_set(CommandSet::WriteData(value))
    }

    /// Consume the driver, give the wiring back
    pub fn release(self) -> (Sender, ResetPin, LightPin) {
        (self.sender, self.reset_pin, self.light_pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::register::BiasSystem;
    use crate::mock::{MockDelay, MockPin, MockPwm, PinEvent, PinLog, RecordingSender};
    use proptest::prelude::*;

    pub(super) type TestDriver = Pcd8544<RecordingSender, MockPin, MockPwm>;

    pub(super) fn driver(log: &PinLog) -> TestDriver {
        Pcd8544::new(
            RecordingSender::new(log),
            MockPin::new(log, "reset"),
            MockPwm::new(log),
            Config::default(),
        )
    }

    pub(super) fn started(log: &PinLog) -> TestDriver {
        let mut lcd = driver(log);
        lcd.begin(&mut MockDelay::new(log)).unwrap();
        log.clear();
        lcd
    }

    #[test]
    fn set_cursor_sends_row_then_column() {
        let log = PinLog::default();
        let mut lcd = started(&log);

        lcd.set_cursor(2, 40).unwrap();

        assert_eq!(log.instructions(), vec![0x42, 0x80 | 40]);
        assert_eq!(lcd.get_cursor().get_pos(), (2, 40));
    }

    #[test]
    fn contrast_is_wrapped_in_extended_mode() {
        let log = PinLog::default();
        let mut lcd = started(&log);

        lcd.set_contrast(0xFF).unwrap();

        assert_eq!(log.instructions(), vec![0x21, 0x80 | 0x7F, 0x20]);
        assert!(log.data().is_empty());
    }

    #[test]
    fn backlight_is_inverted() {
        let log = PinLog::default();
        let mut lcd = started(&log);

        lcd.set_backlight(0).unwrap();
        lcd.set_backlight(255).unwrap();
        lcd.set_backlight(55).unwrap();

        assert_eq!(
            log.take(),
            vec![PinEvent::Duty(255), PinEvent::Duty(0), PinEvent::Duty(200)]
        );
    }

    #[test]
    fn clear_display_is_a_full_frame_after_home() {
        let log = PinLog::default();
        let mut lcd = started(&log);
        lcd.set_cursor(3, 17).unwrap();
        log.clear();

        lcd.clear_display(0x00).unwrap();

        let commands = log.commands();
        assert_eq!(commands.len(), 2 + BYTE_COUNT);
        assert_eq!(commands[0].get_bits(), 0x40);
        assert_eq!(commands[1].get_bits(), 0x80);
        assert_eq!(log.instructions().len(), 2);
        assert!(commands[2..].iter().all(|&c| c == Command::data(0x00)));
        assert_eq!(lcd.get_cursor().get_pos(), (0, 0));
    }

    static FLASH_IMAGE: [u8; BYTE_COUNT] = {
        let mut image = [0u8; BYTE_COUNT];
        let mut i = 0;
        while i < BYTE_COUNT {
            image[i] = (i % 251) as u8;
            i += 1;
        }
        image
    };

    #[test]
    fn put_image_streams_identically_from_flash_and_ram() {
        let log = PinLog::default();
        let mut lcd = started(&log);

        lcd.put_image(&FLASH_IMAGE).unwrap();
        let from_flash = log.commands();
        log.clear();

        let ram_image: [u8; BYTE_COUNT] = FLASH_IMAGE;
        lcd.put_image(&ram_image).unwrap();
        let from_ram = log.commands();

        assert_eq!(from_flash, from_ram);
        assert_eq!(log.instructions(), vec![0x40, 0x80]);
        assert_eq!(log.data(), FLASH_IMAGE.to_vec());
    }

    #[test]
    fn mode_setters_always_retransmit() {
        let log = PinLog::default();
        let mut lcd = started(&log);

        lcd.set_blank_mode().unwrap();
        lcd.set_black_mode().unwrap();
        lcd.set_normal_mode().unwrap();
        lcd.set_inverse_mode().unwrap();
        lcd.set_inverse_mode().unwrap();
        lcd.set_ext_instruction_set().unwrap();
        lcd.set_std_instruction_set().unwrap();
        lcd.set_power_down_mode().unwrap();

        assert_eq!(
            log.instructions(),
            vec![0x08, 0x09, 0x0C, 0x0D, 0x0D, 0x21, 0x20, 0x24]
        );
    }

    #[test]
    fn raw_channels() {
        let log = PinLog::default();
        let mut lcd = started(&log);

        lcd.send_command(0x21).unwrap();
        lcd.send_data(0x21).unwrap();
        lcd.set_temperature_control(2).unwrap();
        lcd.set_bias_system(BiasSystem::N0).unwrap();
        lcd.set_operating_voltage(0x3F).unwrap();

        assert_eq!(log.instructions(), vec![0x21, 0x06, 0x17, 0xBF]);
        assert_eq!(log.data(), vec![0x21]);
    }

    proptest! {
        #[test]
        fn cursor_wraps_modulo_the_geometry(row in any::<u8>(), col in any::<u8>()) {
            let log = PinLog::default();
            let mut lcd = started(&log);

            lcd.set_cursor(row, col).unwrap();

            prop_assert_eq!(lcd.get_cursor().get_row(), row % crate::MAX_ROWS);
            prop_assert_eq!(lcd.get_cursor().get_column(), col % crate::MAX_COLS);
            prop_assert!(!lcd.get_cursor().is_row_wrapped());
            prop_assert!(!lcd.get_cursor().is_column_wrapped());
        }
    }
}
