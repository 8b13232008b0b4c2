//! # Recstore Architecture
//!
//! Recstore keeps a list of user records as a single JSON array in one file and
//! runs exactly one operation per invocation: `add`, `list`, `findById` or
//! `remove`. Every run loads the whole file, works on it in memory and, if the
//! operation mutates, writes it back.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses flags, sets up logging, owns stdout/exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Config (config.rs)                                         │
//! │  - Raw flag values → validated StoreConfig, before any I/O  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Opens the file, dispatches, renders onto a Write sink    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / list / find / remove over a RecordStore            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordBackend trait, FileBackend, MemBackend (tests)     │
//! │  - JSON array codec in RecordStore                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//!
//! None. The backing file is not locked, so two invocations mutating the same
//! file at the same time can lose a write.
//!
//! ## Module Overview
//!
//! - [`api`]: entry point, `perform` and the `RecordApi` dispatcher
//! - [`commands`]: logic for each operation
//! - [`config`]: flag validation
//! - [`store`]: storage abstraction and the JSON codec
//! - [`model`]: `Record` and `Operation`
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
