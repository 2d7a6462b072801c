//! LCD4884 shield on a Nucleo-F411RE Arduino header: uptime and joystick state, refreshed every 100 ms
//!
//! The 5-way joystick is a resistor ladder on a single analog pin,
//! each direction pulls the pin to a different voltage.

//! Wiring diagram (fixed by the shield)
//!
//! LCD4884 <-> Arduino header <-> STM32F411RET6
//!    SCLK <-> D2 <-> PA10
//!    SDIN <-> D3 <-> PB3
//!      DC <-> D4 <-> PB5
//!   RESET <-> D5 <-> PB4
//!      CS <-> D6 <-> PB10
//!      BL <-> D7 <-> PA8
//!     KEY <-> A0 <-> PA0

#![no_std]
#![no_main]

use core::fmt::Write;

use embedded_hal::delay::DelayNs;

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f4xx_hal::{
    adc::{
        config::{AdcConfig, Resolution, SampleTime},
        Adc,
    },
    pac,
    prelude::*,
};

use demo_with_stm32f411::OnOffLight;
use pcd8544_driver::{
    pcd8544::{Config, Pcd8544},
    sender::BitBangSender,
};

const REFRESH_MS: u32 = 100;

// blank a whole line, the CR brings the next glyph back to its start
const BLANK_LINE: &str = "              \r";

#[derive(Clone, Copy, PartialEq, Debug)]
enum Key {
    Up,
    Down,
    Left,
    Right,
    Button,
    None,
}

impl Key {
    // nominal 8-bit readings of the ladder, and how far a reading may drift
    const LADDER: [(u8, Key); 5] = [
        (185, Key::Up),
        (82, Key::Down),
        (0, Key::Left),
        (126, Key::Right),
        (35, Key::Button),
    ];
    const TOLERANCE: u8 = 15;

    fn from_keyval(keyval: u8) -> Self {
        Self::LADDER
            .iter()
            .find(|(nominal, _)| keyval.abs_diff(*nominal) <= Self::TOLERANCE)
            .map_or(Key::None, |&(_, key)| key)
    }

    fn name(self) -> &'static str {
        match self {
            Key::Up => "up",
            Key::Down => "down",
            Key::Left => "left",
            Key::Right => "right",
            Key::Button => "button",
            Key::None => "none",
        }
    }
}

#[cortex_m_rt::entry]
fn main() -> ! {
    rtt_init_print!();

    let dp = pac::Peripherals::take().expect("Cannot take device peripherals");
    let cp = pac::CorePeripherals::take().expect("Cannot take core peripherals");

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.use_hse(8.MHz()).freeze();

    let mut delayer = cp.SYST.delay(&clocks);

    let gpioa = dp.GPIOA.split();
    let gpiob = dp.GPIOB.split();

    let sclk_pin = gpioa.pa10.into_push_pull_output().erase();
    let sdin_pin = gpiob.pb3.into_push_pull_output().erase();
    let dc_pin = gpiob.pb5.into_push_pull_output().erase();
    let reset_pin = gpiob.pb4.into_push_pull_output().erase();
    let cs_pin = gpiob.pb10.into_push_pull_output().erase();
    let bl_pin = gpioa.pa8.into_push_pull_output().erase();

    let key_pin = gpioa.pa0.into_analog();
    // 10 bit readings, shifted down to 8 bit below
    let mut adc = Adc::adc1(
        dp.ADC1,
        true,
        AdcConfig::default().resolution(Resolution::Ten),
    );

    let sender = BitBangSender::new(sclk_pin, sdin_pin, dc_pin, cs_pin);
    let mut lcd = Pcd8544::new(sender, reset_pin, OnOffLight(bl_pin), Config::default());

    lcd.begin(&mut delayer).expect("Cannot bring up PCD8544");
    lcd.set_backlight(0xFF).unwrap();

    lcd.set_cursor(0, 0).unwrap();
    write!(lcd, "** LCD 4884 **").unwrap();
    write!(lcd, "~~~~~~~~~~~~~~").unwrap();

    let mut uptime_ms: u32 = 0;
    let mut last_key = Key::None;

    loop {
        let raw: u16 = adc.convert(&key_pin, SampleTime::Cycles_480);
        let keyval = (raw >> 2) as u8;
        let key = Key::from_keyval(keyval);

        if key != last_key {
            rprintln!("key {:?} ({})", key, keyval);
            last_key = key;
        }

        lcd.set_cursor(2, 0).unwrap();
        write!(lcd, "{}us:{}", BLANK_LINE, uptime_ms.wrapping_mul(1_000)).unwrap();
        write!(lcd, "{}ms:{}", BLANK_LINE, uptime_ms).unwrap();
        write!(lcd, "{}keyval:{}", BLANK_LINE, keyval).unwrap();
        write!(lcd, "{}keysym:{}", BLANK_LINE, key.name()).unwrap();

        delayer.delay_ms(REFRESH_MS);
        uptime_ms = uptime_ms.wrapping_add(REFRESH_MS);
    }
}
