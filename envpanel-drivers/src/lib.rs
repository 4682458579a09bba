//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in envpanel-core for the panel's hardware:
//!
//! - Climate sensors (DHT11, DHT22 single-wire)
//! - Light sensors (LDR on an ADC channel)
//! - Displays (SSD1306 128x64 OLED over I2C)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod sensor;
