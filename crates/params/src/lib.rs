//! Constant values for the p256m PSA driver

#![no_std]

pub mod driver;
pub mod traditional;
