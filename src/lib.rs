//! Giza Guide: a keyword-matching FAQ chat service about the Great Pyramids.

// Strict discipline: no unsafe, everything public documented
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(non_snake_case)]
#![deny(unused_must_use)] // Require explicit handling of Result and Option
#![forbid(unsafe_op_in_unsafe_fn)]

// Clippy discipline
#![deny(clippy::all)]
#![deny(clippy::unwrap_used)] // No unwrap() in production paths
#![deny(clippy::expect_used)] // No expect() either
#![deny(clippy::panic)]
#![deny(clippy::print_stdout)] // tracing only, no println!()
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

/// Runtime configuration (port, reply pacing).
pub mod config;
/// Static knowledge base of topics and canned answers.
pub mod knowledge;
/// First-match keyword lookup over the knowledge base.
pub mod responder;
/// HTTP server and API routes.
#[allow(clippy::unused_async)]
pub mod server;
/// In-memory conversation sessions.
pub mod session;
/// Entry helpers to start the guide server.
pub mod start_giza_guide;
