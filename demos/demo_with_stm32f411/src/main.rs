//! Drive a Nokia 5110 (PCD8544) panel with a STM32F411RET6 on the SPI1 peripheral
//!
//! Same panel as `demo`, only the sender changes.

//! Wiring diagram
//!
//! PCD8544 <-> STM32F411RET6
//!     RST <-> PB0
//!     SCE <-> PA4
//!      DC <-> PB1
//!     DIN <-> PA7 (SPI1 MOSI)
//!     CLK <-> PA5 (SPI1 SCK)
//!     VCC <-> 3.3V
//!      BL <-> PB2 (active low)
//!     GND <-> GND

#![no_std]
#![no_main]

use core::fmt::Write;

use embedded_hal::{delay::DelayNs, spi::MODE_0};
use embedded_hal_bus::spi::ExclusiveDevice;

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f4xx_hal::{pac, prelude::*, spi::NoMiso};

use demo_with_stm32f411::OnOffLight;
use pcd8544_driver::{
    pcd8544::{Config, Pcd8544},
    sender::SpiSender,
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
    let gpiob = dp.GPIOB.split();

    // the controller samples on the rising edge, up to 4 MHz
    let spi_bus = dp
        .SPI1
        .spi((gpioa.pa5, NoMiso::new(), gpioa.pa7), MODE_0, 4.MHz(), &clocks);
    let sce_pin = gpioa.pa4.into_push_pull_output();
    let spi_device =
        ExclusiveDevice::new_no_delay(spi_bus, sce_pin).expect("Cannot take chip-select");

    let dc_pin = gpiob.pb1.into_push_pull_output();
    let rst_pin = gpiob.pb0.into_push_pull_output();
    let bl_pin = gpiob.pb2.into_push_pull_output();

    let sender = SpiSender::new(spi_device, dc_pin);
    let mut lcd = Pcd8544::new(sender, rst_pin, OnOffLight(bl_pin), Config::default());

    lcd.begin(&mut delayer).expect("Cannot bring up PCD8544");
    lcd.set_backlight(0xFF).unwrap();

    write!(lcd, "PCD8544\r\nover SPI1").unwrap();

    let mut count: u32 = 0;
    loop {
        lcd.set_cursor(3, 0).unwrap();
        write!(lcd, "count:{}", count).unwrap();
        rprintln!("count {}", count);

        count = count.wrapping_add(1);
        delayer.delay_ms(1_000);
    }
}
