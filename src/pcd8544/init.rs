use embedded_hal::{delay::DelayNs, digital::OutputPin, pwm::SetDutyCycle};
use log::debug;

use crate::{
    command::{
        register::{BiasSystem, OperatingVoltage, Register, TemperatureControl},
        DisplayMode,
    },
    error::Error,
    pcd8544::Pcd8544,
    sender::SendCommand,
    state::Cursor,
};

/// [`Config`] is the bring-up config of a [`Pcd8544`]
///
/// The default values fit the common Nokia 5110 / LCD4884 modules.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    temperature_control: u8,
    bias_system: u8,
    operating_voltage: u8,
    display_mode: DisplayMode,
    reset_pulse_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            temperature_control: TemperatureControl::DEFAULT,
            bias_system: BiasSystem::DEFAULT,
            operating_voltage: OperatingVoltage::DEFAULT,
            display_mode: DisplayMode::Normal,
            reset_pulse_ms: 100,
        }
    }
}

#[allow(missing_docs)]
impl Config {
    pub fn get_temperature_control(&self) -> u8 {
        self.temperature_control
    }

    pub fn set_temperature_control(mut self, tc: u8) -> Self {
        self.temperature_control = tc;
        self
    }

    pub fn get_bias_system(&self) -> u8 {
        self.bias_system
    }

    pub fn set_bias_system(mut self, bias: u8) -> Self {
        self.bias_system = bias;
        self
    }

    pub fn get_operating_voltage(&self) -> u8 {
        self.operating_voltage
    }

    /// This is the contrast the panel starts with
    pub fn set_operating_voltage(mut self, vop: u8) -> Self {
        self.operating_voltage = vop;
        self
    }

    pub fn get_display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn set_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    pub fn get_reset_pulse_ms(&self) -> u32 {
        self.reset_pulse_ms
    }

    pub fn set_reset_pulse_ms(mut self, ms: u32) -> Self {
        self.reset_pulse_ms = ms;
        self
    }
}

impl<Sender, ResetPin, LightPin> Pcd8544<Sender, ResetPin, LightPin>
where
    Sender: SendCommand,
    ResetPin: OutputPin,
    LightPin: SetDutyCycle,
{
    /// Create a [`Pcd8544`] driver, the hardware is not touched until [`Pcd8544::begin`]
    pub fn new(sender: Sender, reset_pin: ResetPin, light_pin: LightPin, config: Config) -> Self {
        Self {
            sender,
            reset_pin,
            light_pin,
            config,
            cursor: Cursor::default(),
        }
    }

    #[allow(missing_docs)]
    pub fn get_config(&self) -> &Config {
        &self.config
    }

    /// Idle the bus lines, then [`Pcd8544::reset`]
    pub fn begin(&mut self, delayer: &mut impl DelayNs) -> Result<(), Error> {
        debug!("pcd8544: begin");
        self.sender.setup()?;
        self.reset(delayer)
    }

    /// Pulse the reset line, program the controller and clear the display
    ///
    /// The cursor goes home, and the controller is left in the standard instruction set.
    pub fn reset(&mut self, delayer: &mut impl DelayNs) -> Result<(), Error> {
        debug!("pcd8544: reset, {:?}", self.config);

        self.cursor = Cursor::default();

        self.sender.deselect()?;
        self.reset_pin.set_high().map_err(|_| Error::ResetPin)?;

        self.reset_pin.set_low().map_err(|_| Error::ResetPin)?;
        delayer.delay_ms(self.config.reset_pulse_ms);
        self.reset_pin.set_high().map_err(|_| Error::ResetPin)?;

        // temperature, bias and voltage are only reachable from the extended instruction set
        let config = self.config;
        self.set_ext_instruction_set()?;
        self.set_temperature_control(config.temperature_control)?;
        self.set_bias_system(config.bias_system)?;
        self.set_operating_voltage(config.operating_voltage)?;
        self.set_std_instruction_set()?;
        self.set_display_mode(config.display_mode)?;

        self.clear_display(0x00)
    }

    /// Power the controller down, call [`Pcd8544::begin`] or [`Pcd8544::reset`] before using it again
    pub fn end(&mut self) -> Result<(), Error> {
        debug!("pcd8544: end");
        self.set_power_down_mode()
    }
}
