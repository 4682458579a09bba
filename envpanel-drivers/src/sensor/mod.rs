//! Sensor drivers

pub mod dht;
pub mod ldr;

pub use dht::{Dht, DhtKind};
pub use ldr::{AdcReader, Ldr};
