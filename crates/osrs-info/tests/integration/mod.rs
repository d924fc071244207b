//! Integration tests for osrs-info.
//!
//! These tests run the decoder with the real `reqwest` transport against a
//! local HTTP server:
//! - hiscores URL building and classification
//! - item catalog requests, caching and tradeable filtering
//! - HTTP and decode failures surfacing as fetch errors

pub mod common;
