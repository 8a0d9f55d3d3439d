//! Request gateway: one method per user action, each a complete round-trip.
//!
//! # Design
//! `Gateway` pairs the stateless `HotelClient` with a `Transport`. Every
//! method builds a request, executes it and parses the response, returning
//! a `Payload` (typed value plus the body as sent) or an `ApiError`.
//! Reservation creation is an ordered pipeline of three calls that stops at
//! the first failure.

use serde_json::Value;
use tracing::{debug, warn};

use crate::client::HotelClient;
use crate::config::GatewayConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{Client, NewClient, NewReservation, Reservation, Room};

/// A decoded response together with the body exactly as the server sent it.
///
/// `data` only carries the fields the DTO names; `body` keeps everything,
/// embedded records and server-side extras included.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload<T> {
    pub data: T,
    pub body: Value,
}

impl<T> Payload<T> {
    fn new(data: T, raw: &str) -> Self {
        let body = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        Self { data, body }
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

#[derive(Debug, Clone)]
pub struct Gateway<T = UreqTransport> {
    client: HotelClient,
    transport: T,
}

impl Gateway<UreqTransport> {
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(HotelClient::new(&config.base_url), UreqTransport::new())
    }
}

impl<T: Transport> Gateway<T> {
    pub fn new(client: HotelClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &HotelClient {
        &self.client
    }

    pub fn create_client(&self, input: &NewClient) -> Result<Payload<Client>, ApiError> {
        let request = self.client.build_create_client(input)?;
        self.round_trip(request, HotelClient::parse_create_client)
    }

    pub fn list_clients(&self) -> Result<Payload<Vec<Client>>, ApiError> {
        self.round_trip(self.client.build_list_clients(), HotelClient::parse_list_clients)
    }

    pub fn get_client(&self, id: i64) -> Result<Payload<Client>, ApiError> {
        self.round_trip(self.client.build_get_client(id), HotelClient::parse_get_client)
    }

    pub fn list_rooms(&self) -> Result<Payload<Vec<Room>>, ApiError> {
        self.round_trip(self.client.build_list_rooms(), HotelClient::parse_list_rooms)
    }

    pub fn get_room(&self, id: i64) -> Result<Payload<Room>, ApiError> {
        self.round_trip(self.client.build_get_room(id), HotelClient::parse_get_room)
    }

    /// Looks up the client, then the room, then creates the reservation.
    ///
    /// The lookups only produce a clearer error for a dangling reference;
    /// the server still validates the creation on its own.
    pub fn create_reservation(&self, input: &NewReservation) -> Result<Payload<Reservation>, ApiError> {
        self.get_client(input.client.id)?;
        self.get_room(input.chambre.id)?;
        let request = self.client.build_create_reservation(input)?;
        self.round_trip(request, HotelClient::parse_create_reservation)
    }

    pub fn get_reservation(&self, id: i64) -> Result<Payload<Reservation>, ApiError> {
        self.round_trip(
            self.client.build_get_reservation(id),
            HotelClient::parse_get_reservation,
        )
    }

    pub fn list_reservations(&self) -> Result<Payload<Vec<Reservation>>, ApiError> {
        self.round_trip(
            self.client.build_list_reservations(),
            HotelClient::parse_list_reservations,
        )
    }

    pub fn delete_reservation(&self, id: i64) -> Result<(), ApiError> {
        self.round_trip(
            self.client.build_delete_reservation(id),
            HotelClient::parse_delete_reservation,
        )
        .map(Payload::into_data)
    }

    fn round_trip<R>(
        &self,
        request: HttpRequest,
        parse: impl FnOnce(&HotelClient, HttpResponse) -> Result<R, ApiError>,
    ) -> Result<Payload<R>, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        debug!(%method, %path, "sending request");

        let result = self
            .transport
            .execute(request)
            .map_err(ApiError::from)
            .and_then(|response| {
                debug!(%method, %path, status = response.status, "received response");
                let raw = response.body.clone();
                let data = parse(&self.client, response)?;
                Ok(Payload::new(data, &raw))
            });

        if let Err(err) = &result {
            warn!(%method, %path, error = %err, "request failed");
        }
        result
    }
}
