//! Monoclock Firmware
//!
//! OLED clock for STM32L0 boards. Shows a greeting on the first frame,
//! then the time of day, redrawn every refresh interval.
//!
//! Wiring (SSD1306 128x32 on SPI1):
//! - PB3 = SCK, PB5 = MOSI
//! - PA15 = CS, PA11 = DC, PB1 = RST

#![no_std]
#![no_main]

mod rtc;

use defmt::*;
use defmt::panic;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::spi::Spi;
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use crate::rtc::SoftRtc;
use monoclock_core::font::FONT_8X14;
use monoclock_core::refresh::RefreshAction;
use monoclock_drivers::adapter::EhOutput;
use monoclock_drivers::{ClockDisplay, Ssd1306};
use monoclock_hal::spi::SpiConfig;
use monoclock_hal_stm32l0::{spi_config, EmbassyClock, L0Spi};

mod config {
    use monoclock_core::config::{DisplayConfig, Orientation, Timing};
    use monoclock_core::time::ClockTime;

    include!(concat!(env!("OUT_DIR"), "/display_config.rs"));
}

type ControlLine = EhOutput<Output<'static>>;

type Display =
    ClockDisplay<'static, L0Spi<'static>, ControlLine, ControlLine, ControlLine, EmbassyClock>;

/// How often the refresh loop checks the scheduler
const POLL_INTERVAL_MS: u64 = 10;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Monoclock firmware starting...");

    let p = embassy_stm32::init(Default::default());

    // SPI1, transmit only (PB3=SCK, PB5=MOSI)
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PB3, p.PB5, spi_config(&SpiConfig::default()));

    // Control lines idle high
    let cs = EhOutput::new(Output::new(p.PA15, Level::High, Speed::VeryHigh), true);
    let dc = EhOutput::new(Output::new(p.PA11, Level::High, Speed::VeryHigh), true);
    let rst = EhOutput::new(Output::new(p.PB1, Level::High, Speed::Low), true);

    let config = config::display_config();
    let transport = Ssd1306::new(L0Spi::new(spi), cs, dc, rst, EmbassyClock, config.timing);

    let mut display: Display = match ClockDisplay::new(transport, FONT_8X14, config) {
        Ok(display) => display,
        Err(e) => {
            error!("Invalid display configuration: {:?}", e);
            panic!("display configuration rejected");
        }
    };

    if let Err(e) = display.initialize() {
        error!("Display bring-up failed: {:?}", e);
        panic!("display unavailable");
    }
    info!("OLED initialized");

    let mut rtc = SoftRtc::new(config::START_TIME);
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    loop {
        match display.poll(&mut rtc) {
            Ok(RefreshAction::Greeting) => info!("Greeting shown"),
            Ok(_) => {}
            Err(e) => warn!("Display refresh failed: {:?}", e),
        }
        ticker.next().await;
    }
}
