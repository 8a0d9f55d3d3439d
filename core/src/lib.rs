//! Client core for the hotel reservation REST API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), executes them through a
//! `Transport`, and keeps the display state of an interactive front end.
//!
//! # Design
//! - `HotelClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit. `Gateway` joins them with a `Transport`.
//! - Every failure is one of three `ApiError` variants: server-reported,
//!   unreachable, or local.
//! - `Session` owns the two display slots; the last operation to resolve
//!   decides what is shown.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod forms;
pub mod gateway;
pub mod http;
pub mod session;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use client::HotelClient;
pub use config::{GatewayConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use forms::{ClientForm, ReservationForm};
pub use gateway::{Gateway, Payload};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use session::{DisplayState, Outcome, Session, Shown};
pub use transport::{Transport, TransportError, UreqTransport};
pub use types::{Client, EntityRef, NewClient, NewReservation, Reservation, Room};
