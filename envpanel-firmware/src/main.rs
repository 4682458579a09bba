//! envpanel - Climate and Light Display Firmware
//!
//! Main firmware binary for RP2040-based boards. Alternates a DHT22
//! temperature/humidity screen and an LDR light screen on an SSD1306 OLED,
//! echoing every reading to the serial console.
//!
//! Wiring:
//! - OLED: I2C0, SDA = GPIO4, SCL = GPIO5, address 0x3C
//! - DHT22: data on GPIO15 (module pull-up to 3V3)
//! - LDR divider: ADC0 on GPIO26
//! - Serial console: UART0, TX = GPIO0, RX = GPIO1, 115200 baud

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Level, OutputOpenDrain, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::uart::{Config as UartConfig, Uart};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use envpanel_core::{CycleParts, SensorDisplayCycle, CONFIG};
use envpanel_drivers::display::Ssd1306;
use envpanel_drivers::sensor::{Dht, DhtKind, Ldr};

use crate::adc::RpAdc;
use crate::serial::SerialSink;

mod adc;
mod serial;

/// OLED bus speed
const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("envpanel firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Serial console (115200 8N1 default)
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, UartConfig::default());
    let (tx, _rx) = uart.split();
    let sink = SerialSink::new(tx);

    // OLED on I2C0
    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);
    let display = Ssd1306::new(i2c);

    // DHT22 data line, released high
    let dht_pin = OutputOpenDrain::new(p.PIN_15, Level::High);
    let climate = Dht::new(dht_pin, Delay, DhtKind::Dht22);

    // LDR divider on ADC0
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let ldr_channel = Channel::new_pin(p.PIN_26, Pull::None);
    let light = Ldr::new(RpAdc::new(adc, ldr_channel), CONFIG.adc.full_scale);

    info!(
        "Cycle config: climate={}ms light={}ms settle={}ms panel={}x{}",
        CONFIG.climate_dwell_ms,
        CONFIG.light_dwell_ms,
        CONFIG.settle_ms,
        CONFIG.geometry.width,
        CONFIG.geometry.height
    );

    let parts = CycleParts {
        climate,
        light,
        display,
        sink,
        delay: Delay,
    };

    match SensorDisplayCycle::init(parts, CONFIG) {
        Ok(cycle) => {
            info!("Display up, entering sensor loop");
            cycle.run()
        }
        Err(e) => {
            error!("Display init failed: {}", e.cause);
            halt()
        }
    }
}

/// Stop doing anything useful; only a reset recovers
fn halt() -> ! {
    loop {
        cortex_m::asm::wfi();
    }
}
