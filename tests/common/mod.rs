//! Common test utilities for e2e tests
//!
//! Provides test infrastructure for spinning up a PostgreSQL container,
//! running migrations, and creating a test application.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;

use racing_team_registry::infrastructure::driven_adapters::{
    EmailCipher, PostgresCarRepository, PostgresDriverRepository, PostgresTeamRepository,
};
use racing_team_registry::infrastructure::driving_adapters::api_rest::{self, AppState};

/// Base64-encoded 32-byte AES key for test runs
pub const TEST_EMAIL_KEY: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl TestApp {
    /// Create a new test application with a fresh PostgreSQL database
    pub async fn new() -> Self {
        // Start PostgreSQL container
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let database_url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

        // Create connection pool
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        // Run migrations
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        // Create repositories
        let cipher =
            Arc::new(EmailCipher::from_base64_key(TEST_EMAIL_KEY).expect("Failed to build cipher"));
        let team_repository = Arc::new(PostgresTeamRepository::new(pool.clone()));
        let driver_repository = Arc::new(PostgresDriverRepository::new(pool.clone(), cipher));
        let car_repository = Arc::new(PostgresCarRepository::new(pool.clone()));

        let state = AppState::new(team_repository, driver_repository, car_repository);
        let router = api_rest::app(state);

        Self {
            router,
            pool,
            _container: container,
        }
    }

    /// Send a request with an optional JSON body and return the raw response
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        self.router
            .clone()
            .oneshot(builder.body(body).expect("Failed to build request"))
            .await
            .expect("Failed to send request")
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> Response<Body> {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> Response<Body> {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> Response<Body> {
        self.request(Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> Response<Body> {
        self.request(Method::DELETE, uri, None).await
    }

    /// Create a team through the API and return its response body
    pub async fn seed_team(&self, name: &str) -> TeamResponse {
        let response = self
            .post(
                "/teams",
                json!({
                    "name": name,
                    "website": "https://racing.example.com",
                }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        read_json(response).await
    }

    /// Create a driver through the API and return its response body
    pub async fn seed_driver(&self, team_id: &str, last_name: &str) -> DriverResponse {
        let response = self
            .post(
                "/drivers",
                json!({
                    "firstName": "Test",
                    "lastName": last_name,
                    "email": format!("{}@racing.example.com", last_name.to_lowercase()),
                    "teamId": team_id,
                }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        read_json(response).await
    }

    /// Create a car through the API and return its response body
    pub async fn seed_car(&self, team_id: &str, driver_id: &str, number: i32) -> CarResponse {
        let response = self
            .post(
                "/cars",
                json!({
                    "number": number,
                    "teamId": team_id,
                    "driverId": driver_id,
                }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        read_json(response).await
    }
}

/// Deserialize a response body as JSON
pub async fn read_json<T: for<'de> Deserialize<'de>>(response: Response<Body>) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Failed to deserialize response body")
}

/// Team response structure for deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct TeamResponse {
    pub id: String,
    pub name: String,
    pub website: String,
    pub created_at: String,
    pub updated_at: String,
    pub drivers: Option<Vec<DriverResponse>>,
}

/// Driver response structure for deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct DriverResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub team_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub team: Option<TeamResponse>,
}

/// Car response structure for deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct CarResponse {
    pub id: String,
    pub number: i32,
    pub team_id: String,
    pub driver_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub team: Option<TeamResponse>,
    pub driver: Option<DriverResponse>,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
