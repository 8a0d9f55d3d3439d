//! Domain DTOs for the hotel reservation API.
//!
//! # Design
//! These types mirror the REST service's JSON but are defined independently
//! from the mock-server crate; integration tests catch schema drift. The
//! server owns every entity, so nothing here enforces invariants beyond what
//! serde needs to decode a payload. Field names follow the wire format
//! (`nom`, `dateDebut`, ...) through serde renames.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A hotel client as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Client {
    pub id: i64,
    pub nom: String,
    pub prenom: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
}

/// Request payload for creating a client. The id is assigned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewClient {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
}

/// A room (`chambre`). Only the id matters to this client; the remaining
/// fields are passed through when the server sends them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: i64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prix: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disponible: Option<bool>,
}

/// Reference to another entity by id. Extra fields of an embedded entity
/// are ignored on decode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityRef {
    pub id: i64,
}

/// A reservation linking a client to a room for a date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub client: EntityRef,
    pub chambre: EntityRef,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    #[serde(default)]
    pub preferences: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statut: Option<String>,
}

/// Request payload for creating a reservation.
///
/// Serializes as `{ client: { id }, chambre: { id }, dateDebut, dateFin,
/// preferences }` with ISO `YYYY-MM-DD` dates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewReservation {
    pub client: EntityRef,
    pub chambre: EntityRef,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    pub preferences: String,
}
