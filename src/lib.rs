#![warn(clippy::pedantic)]
#![allow(clippy::float_cmp)]

pub mod bar;
pub mod breakdown;
pub mod calculator;
pub mod calculator_error;
pub mod config;
pub mod logging;
pub mod plate;
pub mod preferences;
pub mod request;
pub mod warmup;
pub mod weight_unit;
