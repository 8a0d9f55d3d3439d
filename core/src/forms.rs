//! Raw user input and its conversion into request payloads.
//!
//! Fields are kept as the text the user typed. Converting them is the point
//! where a request can fail before anything is sent, so every conversion
//! error is an `ApiError::LocalFailure`.

use chrono::NaiveDate;

use crate::error::ApiError;
use crate::types::{EntityRef, NewClient, NewReservation};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientForm {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
}

impl ClientForm {
    /// `nom` and `prenom` must be non-blank. Email format is left to the server.
    pub fn to_payload(&self) -> Result<NewClient, ApiError> {
        let nom = required("nom", &self.nom)?;
        let prenom = required("prenom", &self.prenom)?;
        Ok(NewClient {
            nom,
            prenom,
            email: self.email.trim().to_string(),
            telephone: self.telephone.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationForm {
    pub client_id: String,
    pub chambre_id: String,
    pub date_debut: String,
    pub date_fin: String,
    pub preferences: String,
}

impl ReservationForm {
    pub fn to_payload(&self) -> Result<NewReservation, ApiError> {
        Ok(NewReservation {
            client: EntityRef {
                id: parse_id(&self.client_id)?,
            },
            chambre: EntityRef {
                id: parse_id(&self.chambre_id)?,
            },
            date_debut: parse_date("dateDebut", &self.date_debut)?,
            date_fin: parse_date("dateFin", &self.date_fin)?,
            preferences: self.preferences.clone(),
        })
    }
}

/// Parse an entity id typed by the user.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| ApiError::local(format!("invalid id: {trimmed:?}")))
}

fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, ApiError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| ApiError::local(format!("{field} must be a date (YYYY-MM-DD), got {trimmed:?}")))
}

fn required(field: &str, raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::local(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}
