//! Collaborator traits the driver delegates to

pub mod backend;
pub mod export;

pub use backend::P256Backend;
pub use export::PublicKeyExporter;
