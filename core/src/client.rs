//! Stateless HTTP request builder and response parser for the hotel API.
//!
//! # Design
//! `HotelClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Executing the round-trip is left to a `Transport`, keeping this module
//! deterministic and free of I/O.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Client, NewClient, NewReservation, Reservation, Room};

/// Synchronous, stateless client for the hotel reservation API.
#[derive(Debug, Clone)]
pub struct HotelClient {
    base_url: String,
}

impl HotelClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // --- clients ---

    pub fn build_create_client(&self, input: &NewClient) -> Result<HttpRequest, ApiError> {
        self.post_json("/clients", input)
    }

    pub fn build_list_clients(&self) -> HttpRequest {
        self.without_body(HttpMethod::Get, "/clients".to_string())
    }

    pub fn build_get_client(&self, id: i64) -> HttpRequest {
        self.without_body(HttpMethod::Get, format!("/clients/{id}"))
    }

    pub fn parse_create_client(&self, response: HttpResponse) -> Result<Client, ApiError> {
        decode(response)
    }

    pub fn parse_list_clients(&self, response: HttpResponse) -> Result<Vec<Client>, ApiError> {
        decode(response)
    }

    pub fn parse_get_client(&self, response: HttpResponse) -> Result<Client, ApiError> {
        decode(response)
    }

    // --- rooms ---

    pub fn build_list_rooms(&self) -> HttpRequest {
        self.without_body(HttpMethod::Get, "/chambres".to_string())
    }

    pub fn build_get_room(&self, id: i64) -> HttpRequest {
        self.without_body(HttpMethod::Get, format!("/chambres/{id}"))
    }

    pub fn parse_list_rooms(&self, response: HttpResponse) -> Result<Vec<Room>, ApiError> {
        decode(response)
    }

    pub fn parse_get_room(&self, response: HttpResponse) -> Result<Room, ApiError> {
        decode(response)
    }

    // --- reservations ---

    pub fn build_create_reservation(&self, input: &NewReservation) -> Result<HttpRequest, ApiError> {
        self.post_json("/reservations", input)
    }

    pub fn build_list_reservations(&self) -> HttpRequest {
        self.without_body(HttpMethod::Get, "/reservations".to_string())
    }

    pub fn build_get_reservation(&self, id: i64) -> HttpRequest {
        self.without_body(HttpMethod::Get, format!("/reservations/{id}"))
    }

    pub fn build_delete_reservation(&self, id: i64) -> HttpRequest {
        self.without_body(HttpMethod::Delete, format!("/reservations/{id}"))
    }

    pub fn parse_create_reservation(&self, response: HttpResponse) -> Result<Reservation, ApiError> {
        decode(response)
    }

    pub fn parse_list_reservations(&self, response: HttpResponse) -> Result<Vec<Reservation>, ApiError> {
        decode(response)
    }

    pub fn parse_get_reservation(&self, response: HttpResponse) -> Result<Reservation, ApiError> {
        decode(response)
    }

    /// Deletion carries no payload; any 2xx counts as success.
    pub fn parse_delete_reservation(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn without_body(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn post_json<T: Serialize>(&self, path: &str, input: &T) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input)
            .map_err(|e| ApiError::local(format!("could not serialize request: {e}")))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Map a non-2xx status to `ApiError::ServerError`, keeping the raw body.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::ServerError {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body)
        .map_err(|e| ApiError::local(format!("could not decode response: {e}")))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::types::EntityRef;

    fn client() -> HotelClient {
        HotelClient::new("http://localhost:8081/api")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_clients_produces_correct_request() {
        let req = client().build_list_clients();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8081/api/clients");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_client_produces_correct_request() {
        let input = NewClient {
            nom: "Dupont".to_string(),
            prenom: "Jean".to_string(),
            email: "jean@x.com".to_string(),
            telephone: "0600000000".to_string(),
        };
        let req = client().build_create_client(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8081/api/clients");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["nom"], "Dupont");
        assert_eq!(body["telephone"], "0600000000");
    }

    #[test]
    fn build_get_room_uses_chambres_path() {
        let req = client().build_get_room(3);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8081/api/chambres/3");
    }

    #[test]
    fn build_create_reservation_nests_references() {
        let input = NewReservation {
            client: EntityRef { id: 1 },
            chambre: EntityRef { id: 2 },
            date_debut: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            date_fin: NaiveDate::from_ymd_opt(2025, 7, 5).unwrap(),
            preferences: "Sea view".to_string(),
        };
        let req = client().build_create_reservation(&input).unwrap();
        assert_eq!(req.path, "http://localhost:8081/api/reservations");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "client": { "id": 1 },
                "chambre": { "id": 2 },
                "dateDebut": "2025-07-01",
                "dateFin": "2025-07-05",
                "preferences": "Sea view"
            })
        );
    }

    #[test]
    fn build_delete_reservation_produces_correct_request() {
        let req = client().build_delete_reservation(7);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:8081/api/reservations/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = HotelClient::new("http://localhost:8081/api/");
        let req = client.build_list_reservations();
        assert_eq!(req.path, "http://localhost:8081/api/reservations");
    }

    #[test]
    fn parse_create_client_accepts_201() {
        let created = client()
            .parse_create_client(response(
                201,
                r#"{"id":1,"nom":"Dupont","prenom":"Jean","email":"jean@x.com","telephone":"0600000000"}"#,
            ))
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.nom, "Dupont");
        assert_eq!(created.email.as_deref(), Some("jean@x.com"));
    }

    #[test]
    fn parse_list_clients_accepts_null_contact_fields() {
        let clients = client()
            .parse_list_clients(response(
                200,
                r#"[{"id":1,"nom":"Dupont","prenom":"Jean","email":null,"telephone":null},{"id":2,"nom":"Martin","prenom":"Paul"}]"#,
            ))
            .unwrap();
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].email, None);
        assert_eq!(clients[0].telephone, None);
        assert_eq!(clients[1].email, None);
    }

    #[test]
    fn parse_get_reservation_ignores_embedded_entity_fields() {
        let body = r#"{
            "id": 4,
            "client": {"id": 1, "nom": "Dupont", "prenom": "Jean"},
            "chambre": {"id": 2, "type": "DOUBLE", "prix": 120.0, "disponible": true},
            "dateDebut": "2025-07-01",
            "dateFin": "2025-07-05",
            "preferences": null,
            "statut": "CONFIRMEE"
        }"#;
        let reservation = client().parse_get_reservation(response(200, body)).unwrap();
        assert_eq!(reservation.client.id, 1);
        assert_eq!(reservation.chambre.id, 2);
        assert_eq!(reservation.preferences, None);
        assert_eq!(reservation.statut.as_deref(), Some("CONFIRMEE"));
    }

    #[test]
    fn parse_get_reservation_not_found() {
        let err = client().parse_get_reservation(response(404, "")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn parse_create_reservation_keeps_error_body() {
        let err = client()
            .parse_create_reservation(response(400, r#"{"error":"room not found"}"#))
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::ServerError {
                status: 400,
                body: r#"{"error":"room not found"}"#.to_string()
            }
        );
    }

    #[test]
    fn parse_delete_reservation_accepts_any_2xx() {
        assert!(client().parse_delete_reservation(response(204, "")).is_ok());
        assert!(client().parse_delete_reservation(response(200, "")).is_ok());
    }

    #[test]
    fn parse_list_clients_bad_json_is_local_failure() {
        let err = client().parse_list_clients(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::LocalFailure(_)));
    }
}
