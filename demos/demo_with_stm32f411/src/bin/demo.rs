//! Drive a Nokia 5110 (PCD8544) panel with a STM32F411RET6, bus lines bit-banged on GPIO
//!
//! this demo use many different functions intentionally, to test functions works just fine.

//! Wiring diagram
//!
//! PCD8544 <-> STM32F411RET6
//!     RST <-> PA0
//!     SCE <-> PA1
//!      DC <-> PA2
//!     DIN <-> PA3
//!     CLK <-> PA4
//!     VCC <-> 3.3V
//!      BL <-> PA5 (active low)
//!     GND <-> GND

#![no_std]
#![no_main]

use core::fmt::Write;

use embedded_hal::delay::DelayNs;

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f4xx_hal::{pac, prelude::*};

use demo_with_stm32f411::OnOffLight;
use pcd8544_driver::{
    pcd8544::{Config, Pcd8544},
    sender::BitBangSender,
    BYTE_COUNT, MAX_COLS,
};

// vertical stripes, 4 pixels wide, with a horizontal band on the middle rows
static STRIPES: [u8; BYTE_COUNT] = {
    let mut image = [0u8; BYTE_COUNT];
    let mut i = 0;
    while i < BYTE_COUNT {
        let row = i / MAX_COLS as usize;
        let col = i % MAX_COLS as usize;
        image[i] = if row == 2 || row == 3 {
            0xFF
        } else if (col / 4) % 2 == 0 {
            0xFF
        } else {
            0x00
        };
        i += 1;
    }
    image
};

#[cortex_m_rt::entry]
fn main() -> ! {
    rtt_init_print!();

    let dp = pac::Peripherals::take().expect("Cannot take device peripherals");
    let cp = pac::CorePeripherals::take().expect("Cannot take core peripherals");

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.use_hse(12.MHz()).freeze();

    let mut delayer = cp.SYST.delay(&clocks);

    let gpioa = dp.GPIOA.split();

    // Push-pull mode for a fast interaction
    let rst_pin = gpioa.pa0.into_push_pull_output().erase();
    let sce_pin = gpioa.pa1.into_push_pull_output().erase();
    let dc_pin = gpioa.pa2.into_push_pull_output().erase();
    let din_pin = gpioa.pa3.into_push_pull_output().erase();
    let clk_pin = gpioa.pa4.into_push_pull_output().erase();
    let bl_pin = gpioa.pa5.into_push_pull_output().erase();

    // put pins together
    let sender = BitBangSender::new(clk_pin, din_pin, dc_pin, sce_pin);

    let config = Config::default().set_operating_voltage(0x38);

    let mut lcd = Pcd8544::new(sender, rst_pin, OnOffLight(bl_pin), config);

    lcd.begin(&mut delayer).expect("Cannot bring up PCD8544");
    lcd.set_backlight(0xFF).unwrap();

    rprintln!("pcd8544 ready, {:?}", lcd.get_config());

    // plain text, then a CR LF pair
    write!(lcd, "hello,\r\nworld!").unwrap();
    delayer.delay_ms(1_000);

    // to test line wrap
    // 14 glyphs fill a line, CR LF right after them must not leave an empty line
    lcd.set_cursor(3, 0).unwrap();
    write!(lcd, "0123456789ABCD\r\nnext line").unwrap();
    delayer.delay_ms(1_000);

    // to test carriage return, the second string overwrites the first one
    lcd.set_cursor(5, 0).unwrap();
    write!(lcd, "------\rCR ok").unwrap();
    rprintln!("cursor at {:?}", lcd.get_cursor().get_pos());
    delayer.delay_ms(1_000);

    // sweep contrast
    for vop in (0x30..=0x48).chain((0x30..0x48).rev()) {
        lcd.set_contrast(vop).unwrap();
        delayer.delay_ms(50);
    }
    lcd.set_contrast(config.get_operating_voltage()).unwrap();

    // blink display 3 times with inverse mode
    for _ in 0..3 {
        delayer.delay_ms(500);
        lcd.set_inverse_mode().unwrap();
        delayer.delay_ms(500);
        lcd.set_normal_mode().unwrap();
    }

    // full frame from flash
    delayer.delay_ms(1_000);
    lcd.put_image(&STRIPES).unwrap();

    // turn off the panel and the backlight, RAM is kept
    delayer.delay_ms(3_000);
    lcd.set_backlight(0x00).unwrap();
    lcd.end().unwrap();

    rprintln!("pcd8544 powered down");

    #[allow(clippy::empty_loop)]
    loop {}
}
