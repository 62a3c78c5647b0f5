//! Domain core for the hexpolls questions microservice.
//!
//! This crate defines the capability contracts consumed by the rest of the
//! system and contains no infrastructure code:
//!
//! - [`question`] — the `Question` aggregate, its DTOs, and pure ordering
//!   helpers.
//! - [`storage`] — the repository capability traits, the repository error
//!   taxonomy, and HTTP status mapping.
//! - [`usecase`] — the use-case executor capability and the orchestrators
//!   built on it.
//! - [`wiring`] — the dependency container that binds capability traits to
//!   concrete adapters once at process start.
//! - [`transport`] — the I/O boundary adapter contract.

pub mod question;
pub mod storage;
pub mod transport;
pub mod usecase;
pub mod wiring;
