//! Recording doubles for the embedded-hal traits, shared by the unit tests

use std::{cell::RefCell, convert::Infallible, rc::Rc, vec::Vec};

use embedded_hal::{delay::DelayNs, digital, pwm, spi};

use crate::{
    command::{Command, RegisterSelection},
    error::Error,
    sender::SendCommand,
};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Level {
    Low,
    High,
}

/// Everything the driver did to the outside world, in order
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PinEvent {
    Pin(&'static str, Level),
    Spi(u8),
    Duty(u16),
    DelayMs(u32),
    DelayNs(u32),
    Sent(Command),
    Setup,
    Deselect,
}

impl PinEvent {
    pub fn new(pin: &'static str, level: Level) -> Self {
        PinEvent::Pin(pin, level)
    }

    pub fn byte(byte: u8) -> Self {
        PinEvent::Spi(byte)
    }
}

#[derive(Clone, Default)]
pub struct PinLog(Rc<RefCell<Vec<PinEvent>>>);

impl PinLog {
    pub fn push(&self, event: PinEvent) {
        self.0.borrow_mut().push(event);
    }

    pub fn take(&self) -> Vec<PinEvent> {
        self.0.borrow_mut().drain(..).collect()
    }

    /// Only the transfers a [`RecordingSender`] saw
    pub fn commands(&self) -> Vec<Command> {
        self.0
            .borrow()
            .iter()
            .filter_map(|event| match event {
                PinEvent::Sent(command) => Some(*command),
                _ => None,
            })
            .collect()
    }

    pub fn instructions(&self) -> Vec<u8> {
        self.commands()
            .iter()
            .filter(|command| command.get_register_selection() == RegisterSelection::Command)
            .map(Command::get_bits)
            .collect()
    }

    pub fn data(&self) -> Vec<u8> {
        self.commands()
            .iter()
            .filter(|command| command.get_register_selection() == RegisterSelection::Data)
            .map(Command::get_bits)
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

#[derive(Debug)]
pub struct MockError;

impl digital::Error for MockError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

pub struct MockPin {
    log: PinLog,
    name: &'static str,
    fail: bool,
}

impl MockPin {
    pub fn new(log: &PinLog, name: &'static str) -> Self {
        Self {
            log: log.clone(),
            name,
            fail: false,
        }
    }

    pub fn failing(log: &PinLog, name: &'static str) -> Self {
        Self {
            fail: true,
            ..Self::new(log, name)
        }
    }

    fn drive(&mut self, level: Level) -> Result<(), MockError> {
        if self.fail {
            return Err(MockError);
        }
        self.log.push(PinEvent::new(self.name, level));
        Ok(())
    }
}

impl digital::ErrorType for MockPin {
    type Error = MockError;
}

impl digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(Level::Low)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(Level::High)
    }
}

pub struct MockSpi {
    log: PinLog,
}

impl MockSpi {
    pub fn new(log: &PinLog) -> Self {
        Self { log: log.clone() }
    }
}

impl spi::ErrorType for MockSpi {
    type Error = Infallible;
}

impl spi::SpiDevice for MockSpi {
    fn transaction(&mut self, operations: &mut [spi::Operation<'_, u8>]) -> Result<(), Infallible> {
        for operation in operations.iter() {
            if let spi::Operation::Write(bytes) = operation {
                bytes.iter().for_each(|&byte| self.log.push(PinEvent::Spi(byte)));
            }
        }
        Ok(())
    }
}

/// 8-bit PWM channel
pub struct MockPwm {
    log: PinLog,
}

impl MockPwm {
    pub fn new(log: &PinLog) -> Self {
        Self { log: log.clone() }
    }
}

impl pwm::ErrorType for MockPwm {
    type Error = Infallible;
}

impl pwm::SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        255
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Infallible> {
        self.log.push(PinEvent::Duty(duty));
        Ok(())
    }
}

pub struct MockDelay {
    log: PinLog,
}

impl MockDelay {
    pub fn new(log: &PinLog) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.push(PinEvent::DelayNs(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.push(PinEvent::DelayMs(ms));
    }
}

/// Sender that records the encoded transfers instead of clocking them out
pub struct RecordingSender {
    log: PinLog,
}

impl RecordingSender {
    pub fn new(log: &PinLog) -> Self {
        Self { log: log.clone() }
    }
}

impl SendCommand for RecordingSender {
    fn send(&mut self, command: Command) -> Result<(), Error> {
        self.log.push(PinEvent::Sent(command));
        Ok(())
    }

    fn setup(&mut self) -> Result<(), Error> {
        self.log.push(PinEvent::Setup);
        Ok(())
    }

    fn deselect(&mut self) -> Result<(), Error> {
        self.log.push(PinEvent::Deselect);
        Ok(())
    }
}
