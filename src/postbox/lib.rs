//! # Postbox Architecture
//!
//! Postbox is a **UI-agnostic client library** for a remote posts
//! collection. This is not a CLI application that happens to have some
//! library code—it's a library that happens to have a CLI client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, shell.rs, wired by main.rs)            │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (session.rs)                                 │
//! │  - The facade for every user intent                         │
//! │  - Owns the edit state machine and the search debouncer     │
//! │  - Returns structured outcomes, emits events for async work │
//! └─────────────────────────────────────────────────────────────┘
//!                    │                     │
//!                    ▼                     ▼
//! ┌──────────────────────────┐ ┌──────────────────────────────┐
//! │  Store (store.rs)        │ │  Gateway (gateway/)          │
//! │  - In-memory sequences   │ │  - Abstract PostBackend      │
//! │  - Merge/search/id logic │ │  - HttpGateway (production)  │
//! │  - No I/O whatsoever     │ │  - InMemoryBackend (testing) │
//! └──────────────────────────┘ └──────────────────────────────┘
//! ```
//!
//! ## The Two Sequences
//!
//! The remote mock API echoes writes without persisting them, so the store
//! keeps remote-origin posts and session-local posts apart and presents
//! locals first. See store.rs for the id-assignment and merge rules.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `session.rs` inward (session, store), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<Outcome>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! The gateway is the one place that talks to the network, and it does so
//! behind a trait so tests never need a server.
//!
//! ## Module Overview
//!
//! - [`session`]: The facade—entry point for all operations
//! - [`store`]: The reconciliation core (local vs remote posts)
//! - [`gateway`]: The four remote operations, HTTP and in-memory
//! - [`debounce`]: Cancellable timer for search-as-you-type
//! - [`model`]: Core data types (`Post`, `PostDraft`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod config;
pub mod debounce;
pub mod error;
pub mod gateway;
pub mod model;
pub mod session;
pub mod store;
