use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: i64,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
}

#[derive(Deserialize)]
pub struct CreateClient {
    pub nom: String,
    pub prenom: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telephone: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Chambre {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub prix: f64,
    pub disponible: bool,
}

#[derive(Deserialize)]
pub struct CreateChambre {
    #[serde(rename = "type")]
    pub kind: String,
    pub prix: f64,
    #[serde(default = "available")]
    pub disponible: bool,
}

fn available() -> bool {
    true
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub client: Client,
    pub chambre: Chambre,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    pub preferences: Option<String>,
    pub statut: String,
}

#[derive(Deserialize)]
pub struct IdRef {
    pub id: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservation {
    pub client: IdRef,
    pub chambre: IdRef,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    pub preferences: Option<String>,
}

/// One table per entity, each with its own id sequence starting at 1.
#[derive(Default)]
pub struct Store {
    clients: BTreeMap<i64, Client>,
    chambres: BTreeMap<i64, Chambre>,
    reservations: BTreeMap<i64, Reservation>,
    next_client: i64,
    next_chambre: i64,
    next_reservation: i64,
}

fn next_id(seq: &mut i64) -> i64 {
    *seq += 1;
    *seq
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    let api = Router::new()
        .route("/clients", get(list_clients).post(create_client))
        .route("/clients/{id}", get(get_client))
        .route("/chambres", get(list_chambres).post(create_chambre))
        .route("/chambres/{id}", get(get_chambre))
        .route("/reservations", get(list_reservations).post(create_reservation))
        .route(
            "/reservations/{id}",
            get(get_reservation).delete(delete_reservation),
        )
        .with_state(db);
    Router::new()
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!("serving reservation API on http://{addr}/api");
    }
    axum::serve(listener, app()).await
}

fn bad_request(msg: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
}

// --- clients ---

async fn list_clients(State(db): State<Db>) -> Json<Vec<Client>> {
    Json(db.read().await.clients.values().cloned().collect())
}

async fn create_client(State(db): State<Db>, Json(input): Json<CreateClient>) -> Response {
    if input.nom.trim().is_empty() || input.prenom.trim().is_empty() {
        return bad_request("nom and prenom are required");
    }
    let mut store = db.write().await;
    let client = Client {
        id: next_id(&mut store.next_client),
        nom: input.nom,
        prenom: input.prenom,
        email: input.email,
        telephone: input.telephone,
    };
    store.clients.insert(client.id, client.clone());
    (StatusCode::CREATED, Json(client)).into_response()
}

async fn get_client(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Client>, StatusCode> {
    let store = db.read().await;
    store.clients.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

// --- chambres ---

async fn list_chambres(State(db): State<Db>) -> Json<Vec<Chambre>> {
    Json(db.read().await.chambres.values().cloned().collect())
}

async fn create_chambre(
    State(db): State<Db>,
    Json(input): Json<CreateChambre>,
) -> (StatusCode, Json<Chambre>) {
    let mut store = db.write().await;
    let chambre = Chambre {
        id: next_id(&mut store.next_chambre),
        kind: input.kind,
        prix: input.prix,
        disponible: input.disponible,
    };
    store.chambres.insert(chambre.id, chambre.clone());
    (StatusCode::CREATED, Json(chambre))
}

async fn get_chambre(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Chambre>, StatusCode> {
    let store = db.read().await;
    store.chambres.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

// --- reservations ---

async fn list_reservations(State(db): State<Db>) -> Json<Vec<Reservation>> {
    Json(db.read().await.reservations.values().cloned().collect())
}

async fn create_reservation(
    State(db): State<Db>,
    Json(input): Json<CreateReservation>,
) -> Response {
    let mut store = db.write().await;
    let Some(client) = store.clients.get(&input.client.id).cloned() else {
        return bad_request("client not found");
    };
    let Some(chambre) = store.chambres.get(&input.chambre.id).cloned() else {
        return bad_request("room not found");
    };
    if !chambre.disponible {
        return bad_request("room is not available");
    }
    if input.date_fin <= input.date_debut {
        return bad_request("dateFin must be after dateDebut");
    }
    let reservation = Reservation {
        id: next_id(&mut store.next_reservation),
        client,
        chambre,
        date_debut: input.date_debut,
        date_fin: input.date_fin,
        preferences: input.preferences,
        statut: "CONFIRMEE".to_string(),
    };
    store.reservations.insert(reservation.id, reservation.clone());
    (StatusCode::CREATED, Json(reservation)).into_response()
}

async fn get_reservation(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Reservation>, StatusCode> {
    let store = db.read().await;
    store.reservations.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn delete_reservation(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .reservations
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
