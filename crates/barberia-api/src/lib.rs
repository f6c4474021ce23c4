// barberia-api: Async Rust client for the BarberiaUQ booking REST API

pub mod appointments;
pub mod barbers;
pub mod client;
pub mod clients;
pub mod error;
pub mod models;
pub mod transport;

pub use client::ApiClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
