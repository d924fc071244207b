//! Core types shared by the osrs-info crates.
//!
//! This crate provides the pieces every client needs:
//! - `normalize`: canonical lookup keys for hiscores display names
//! - `GameMode`, `ModeFlags`: hiscores leaderboard selection
//! - `HttpTransport`: the seam between API clients and the HTTP stack

pub mod error;
pub mod mode;
pub mod name;
pub mod transport;

pub use error::{TransportError, TransportResult};
pub use mode::{GameMode, ModeFlags};
pub use name::normalize;
pub use transport::{
    BoxFuture, DynTransport, HttpTransport, JsonRequest, MockTransport, ReqwestTransport,
};
