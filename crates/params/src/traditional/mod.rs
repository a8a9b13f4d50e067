//! Constants for the SECP256R1 algorithms the driver fronts

pub mod ecdh;
pub mod ecdsa;
