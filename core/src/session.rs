//! Display state for an interactive front end.
//!
//! # Design
//! A `Session` owns the gateway and two display slots: the last successful
//! result and the last error. Each operation converts its raw input, runs
//! through the gateway and records an `Outcome` when it resolves. Recording
//! replaces both slots under one lock, so overlapping operations never leave
//! a merged display; whichever resolves last is what remains shown.

use std::sync::{Mutex, PoisonError};

use serde_json::Value;

use crate::config::GatewayConfig;
use crate::error::ApiError;
use crate::forms::{parse_id, ClientForm, ReservationForm};
use crate::gateway::{Gateway, Payload};
use crate::transport::{Transport, UreqTransport};

/// Result of one user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The server returned a payload.
    Data { message: String, data: Value },
    /// The action succeeded with nothing to show but a confirmation.
    Done { message: String },
    Failed(ApiError),
}

impl Outcome {
    /// Shows the body as the server sent it; the typed value is not re-rendered.
    fn from_result<R>(result: Result<Payload<R>, ApiError>, message: impl Into<String>) -> Self {
        match result {
            Ok(payload) => Outcome::Data {
                message: message.into(),
                data: payload.body,
            },
            Err(err) => Outcome::Failed(err),
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Failed(_))
    }
}

/// A success headline with its optional payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Shown {
    pub message: String,
    pub data: Option<Value>,
}

/// The two display slots. At most one is populated at any time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayState {
    pub last_result: Option<Shown>,
    pub last_error: Option<ApiError>,
}

impl DisplayState {
    /// Populate one slot and clear the other.
    pub fn apply(&mut self, outcome: Outcome) {
        *self = match outcome {
            Outcome::Data { message, data } => DisplayState {
                last_result: Some(Shown {
                    message,
                    data: Some(data),
                }),
                last_error: None,
            },
            Outcome::Done { message } => DisplayState {
                last_result: Some(Shown { message, data: None }),
                last_error: None,
            },
            Outcome::Failed(err) => DisplayState {
                last_result: None,
                last_error: Some(err),
            },
        };
    }
}

pub struct Session<T = UreqTransport> {
    gateway: Gateway<T>,
    display: Mutex<DisplayState>,
}

impl Session<UreqTransport> {
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(Gateway::from_config(config))
    }
}

impl<T: Transport> Session<T> {
    pub fn new(gateway: Gateway<T>) -> Self {
        Self {
            gateway,
            display: Mutex::new(DisplayState::default()),
        }
    }

    pub fn gateway(&self) -> &Gateway<T> {
        &self.gateway
    }

    /// Snapshot of both display slots.
    pub fn display(&self) -> DisplayState {
        self.display
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn create_client(&self, form: &ClientForm) -> Outcome {
        let result = form
            .to_payload()
            .and_then(|input| self.gateway.create_client(&input));
        self.record(Outcome::from_result(result, "Client created"))
    }

    pub fn list_clients(&self) -> Outcome {
        let result = self.gateway.list_clients();
        self.record(Outcome::from_result(result, "Client list retrieved"))
    }

    pub fn list_rooms(&self) -> Outcome {
        let result = self.gateway.list_rooms();
        self.record(Outcome::from_result(result, "Room list retrieved"))
    }

    pub fn create_reservation(&self, form: &ReservationForm) -> Outcome {
        let result = form
            .to_payload()
            .and_then(|input| self.gateway.create_reservation(&input));
        self.record(Outcome::from_result(result, "Reservation created"))
    }

    pub fn get_reservation(&self, id: &str) -> Outcome {
        let result = parse_id(id).and_then(|id| self.gateway.get_reservation(id));
        self.record(Outcome::from_result(result, "Reservation retrieved"))
    }

    pub fn list_reservations(&self) -> Outcome {
        let result = self.gateway.list_reservations();
        self.record(Outcome::from_result(result, "Reservation list retrieved"))
    }

    pub fn delete_reservation(&self, id: &str) -> Outcome {
        let outcome = match parse_id(id).and_then(|id| self.gateway.delete_reservation(id).map(|()| id)) {
            Ok(id) => Outcome::Done {
                message: format!("Reservation {id} deleted"),
            },
            Err(err) => Outcome::Failed(err),
        };
        self.record(outcome)
    }

    fn record(&self, outcome: Outcome) -> Outcome {
        self.display
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .apply(outcome.clone());
        outcome
    }
}
