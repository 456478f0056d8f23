//! Deployment helpers for the FundMe contracts.
//!
//! - [`verify`] submits a deployed contract to a block explorer for source
//!   verification. Failures are logged and swallowed.
//! - [`config`] describes the known networks, which of them are local
//!   development networks and where their price feeds live.

pub mod config;
pub mod error;
pub mod verify;

pub use config::{NetworkConfig, NetworkEntry};
pub use error::VerifyError;
pub use verify::{verify, ExplorerClient, SourceVerifier};
