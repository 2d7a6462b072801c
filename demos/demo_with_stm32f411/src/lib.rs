//! Glue shared by the demo binaries

#![no_std]

use core::convert::Infallible;

use embedded_hal::{digital::OutputPin, pwm};

/// Backlight wired on a plain GPIO instead of a timer channel
///
/// Any duty cycle below half drives the line low, the rest drives it high.
pub struct OnOffLight<P: OutputPin<Error = Infallible>>(pub P);

impl<P: OutputPin<Error = Infallible>> pwm::ErrorType for OnOffLight<P> {
    type Error = Infallible;
}

impl<P: OutputPin<Error = Infallible>> pwm::SetDutyCycle for OnOffLight<P> {
    fn max_duty_cycle(&self) -> u16 {
        2
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        if duty < 1 {
            self.0.set_low()
        } else {
            self.0.set_high()
        }
    }
}
