#![doc = "content-batch-core: validation, discovery and pipelines for bulk content operations."]

//! This crate holds everything that does not need a terminal or a network
//! socket: payload decoding, the exact-schema validator, the display-name
//! formatter, folder discovery, and the batch/purge pipelines. The pipelines
//! talk to the outside world only through the traits in [`contract`].
//!
//! # Usage
//! The `content-batch` CLI crate supplies the HTTP client and the terminal
//! operator; tests supply `MockContentApi` and scripted operators.

pub mod batch;
pub mod config;
pub mod content;
pub mod contract;
pub mod discover;
pub mod display_name;
pub mod error;
pub mod outcome;
pub mod payload;
pub mod purge;
pub mod validate;
