//! `HttpBackend` against a real in-process HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use foodorder::adapter::outbound::http::HttpBackend;
use foodorder::application::{FoodDetailsSession, SubmissionOutcome};
use foodorder::domain::{ExtraId, FoodId, LocaleFormatter};
use foodorder::error::BackendError;
use foodorder::port::{FavoriteRecord, FoodBackend};
use parking_lot::Mutex;
use serde_json::{json, Value};

#[derive(Default)]
struct ServerState {
    favorites: Vec<Value>,
    orders: Vec<Value>,
    fail_orders: bool,
}

type Shared = Arc<Mutex<ServerState>>;

async fn get_food(Path(id): Path<u64>) -> (StatusCode, Json<Value>) {
    match id {
        1 => (
            StatusCode::OK,
            Json(json!({
                "id": 1,
                "name": "Ao molho",
                "description": "Macarrão ao molho branco, fughi e cheiro verde das montanhas.",
                "price": 19.9,
                "category": 1,
                "image_url": "https://img.test/ao_molho.png",
                "thumbnail_url": "https://img.test/ao_molho_thumb.png",
                "extras": [
                    { "id": 1, "name": "Bacon", "value": 1.5, "quantity": 3 },
                    { "id": 2, "name": "Frango", "value": 2 }
                ]
            })),
        ),
        // json-server answers some misses with an empty object.
        2 => (StatusCode::OK, Json(json!({}))),
        3 => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "boom" }))),
        _ => (StatusCode::NOT_FOUND, Json(json!({}))),
    }
}

async fn list_favorites(State(state): State<Shared>) -> Json<Vec<Value>> {
    Json(state.lock().favorites.clone())
}

async fn add_favorite(State(state): State<Shared>, Json(body): Json<Value>) -> StatusCode {
    state.lock().favorites.push(body);
    StatusCode::CREATED
}

async fn remove_favorite(State(state): State<Shared>, Path(id): Path<u64>) -> StatusCode {
    state.lock().favorites.retain(|f| f["id"].as_u64() != Some(id));
    StatusCode::OK
}

async fn create_order(State(state): State<Shared>, Json(body): Json<Value>) -> StatusCode {
    let mut state = state.lock();
    if state.fail_orders {
        return StatusCode::SERVICE_UNAVAILABLE;
    }
    state.orders.push(body);
    StatusCode::CREATED
}

async fn spawn_server(state: Shared) -> SocketAddr {
    let app = Router::new()
        .route("/foods/:id", get(get_food))
        .route(
            "/favorites",
            get(list_favorites).post(add_favorite),
        )
        .route("/favorites/:id", delete(remove_favorite))
        .route("/orders", axum::routing::post(create_order))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client(addr: SocketAddr) -> HttpBackend {
    HttpBackend::new(&format!("http://{addr}"), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn fetch_food_decodes_record() {
    let addr = spawn_server(Shared::default()).await;

    let record = client(addr).fetch_food(FoodId::new(1)).await.unwrap().unwrap();

    assert_eq!(record.name, "Ao molho");
    assert_eq!(record.price, rust_decimal_macros::dec!(19.9));
    assert_eq!(record.extras.len(), 2);
}

#[tokio::test]
async fn missing_food_maps_to_none() {
    let addr = spawn_server(Shared::default()).await;
    let backend = client(addr);

    assert!(backend.fetch_food(FoodId::new(77)).await.unwrap().is_none());
    assert!(backend.fetch_food(FoodId::new(2)).await.unwrap().is_none());
}

#[tokio::test]
async fn server_error_maps_to_status() {
    let addr = spawn_server(Shared::default()).await;

    let err = client(addr).fetch_food(FoodId::new(3)).await.unwrap_err();

    assert_eq!(
        err,
        BackendError::Status {
            path: "foods/3".into(),
            status: 500
        }
    );
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(addr).fetch_favorites().await.unwrap_err();

    assert!(matches!(err, BackendError::Transport { .. }));
}

#[tokio::test]
async fn favorites_round_trip_through_server() {
    let state = Shared::default();
    let addr = spawn_server(state.clone()).await;
    let backend = client(addr);
    let favorite = FavoriteRecord {
        id: FoodId::new(1),
        name: "Ao molho".into(),
        description: String::new(),
        price: rust_decimal_macros::dec!(19.9),
        category: 1,
        image_url: "https://img.test/ao_molho.png".into(),
    };

    backend.add_favorite(&favorite).await.unwrap();
    let listed = backend.fetch_favorites().await.unwrap();
    assert_eq!(listed, vec![favorite]);
    assert!(state.lock().favorites[0].get("extras").is_none());

    backend.remove_favorite(FoodId::new(1)).await.unwrap();
    assert!(backend.fetch_favorites().await.unwrap().is_empty());
}

#[tokio::test]
async fn session_over_http_posts_order_body() {
    let state = Shared::default();
    let addr = spawn_server(state.clone()).await;
    let mut session = FoodDetailsSession::open(
        Arc::new(client(addr)),
        Arc::new(LocaleFormatter::default()),
        FoodId::new(1),
    )
    .await
    .unwrap();

    assert_eq!(session.view().extras[0].quantity, 0);
    session.increment_extra(ExtraId::new(2));
    session.increment_base();

    let outcome = session.submit().await.unwrap();
    assert_eq!(
        outcome,
        SubmissionOutcome::Completed {
            total: rust_decimal_macros::dec!(41.8)
        }
    );

    let orders = state.lock().orders.clone();
    assert_eq!(orders.len(), 1);
    assert_eq!(
        orders[0],
        json!({
            "product_id": 1,
            "name": "Ao molho",
            "description": "Macarrão ao molho branco, fughi e cheiro verde das montanhas.",
            "price": 41.8,
            "category": 1,
            "thumbnail_url": "https://img.test/ao_molho.png",
            "extras": [
                { "id": 1, "name": "Bacon", "value": 1.5, "quantity": 0 },
                { "id": 2, "name": "Frango", "value": 2.0, "quantity": 1 }
            ]
        })
    );
}

#[tokio::test]
async fn rejected_order_surfaces_submission_error() {
    let state = Shared::default();
    state.lock().fail_orders = true;
    let addr = spawn_server(state.clone()).await;
    let session = FoodDetailsSession::open(
        Arc::new(client(addr)),
        Arc::new(LocaleFormatter::default()),
        FoodId::new(1),
    )
    .await
    .unwrap();

    let err = session.submit().await.unwrap_err();

    assert_eq!(
        err.backend(),
        &BackendError::Status {
            path: "orders".into(),
            status: 503
        }
    );
}
