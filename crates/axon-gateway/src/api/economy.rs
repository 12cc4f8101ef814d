//! Economy query actions.

use crate::ip::client_ip;
use crate::session::AUTH_COOKIE;
use crate::state::AppState;
use crate::validate;
use axon_connect::domain::{BuildingsPage, BuildingsQuery, BusinessesPage, BusinessesQuery, Corporation};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

const MISSING_JWT: &str = "Failed to retrieve jwt.";

/// Success-or-message envelope for query actions.
#[derive(Debug, Serialize)]
pub struct DataReply<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> DataReply<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            message: None,
        })
    }

    fn failure(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: false,
            data: None,
            message: Some(message.into()),
        })
    }
}

fn session_jwt(jar: &CookieJar) -> Option<String> {
    jar.get(AUTH_COOKIE).map(|cookie| cookie.value().to_string())
}

/// Returns the caller's corporation.
pub async fn corporation(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Json<DataReply<Corporation>> {
    let Some(jwt) = session_jwt(&jar) else {
        return DataReply::failure(MISSING_JWT);
    };

    let ip_address = client_ip(&headers);

    match state.economy.get_corporation(&ip_address, &jwt).await {
        Ok(corporation) => DataReply::ok(corporation),
        Err(error) => {
            tracing::error!("Fetching corporation failed: {}", error);
            DataReply::failure(error.to_string())
        }
    }
}

/// Queries buildings inside a bounding box.
pub async fn buildings(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
    Json(filters): Json<BuildingsQuery>,
) -> Json<DataReply<BuildingsPage>> {
    if !validate::buildings_query(&filters) {
        return DataReply::failure(validate::INVALID_QUERY);
    }

    let Some(jwt) = session_jwt(&jar) else {
        return DataReply::failure(MISSING_JWT);
    };

    let ip_address = client_ip(&headers);

    match state.economy.query_buildings(filters, &ip_address, &jwt).await {
        Ok(page) => DataReply::ok(page),
        Err(error) => {
            tracing::error!("Building query failed: {}", error);
            DataReply::failure("An unexpected error occurred while fetching buildings.")
        }
    }
}

/// Queries businesses with filters and sorting.
pub async fn businesses(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
    Json(filters): Json<BusinessesQuery>,
) -> Json<DataReply<BusinessesPage>> {
    let Some(jwt) = session_jwt(&jar) else {
        return DataReply::failure(MISSING_JWT);
    };

    let ip_address = client_ip(&headers);

    match state
        .economy
        .query_businesses(filters, &ip_address, &jwt)
        .await
    {
        Ok(page) => DataReply::ok(page),
        Err(error) => {
            tracing::error!("Business query failed: {}", error);
            DataReply::failure("An unexpected error occurred while fetching businesses.")
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{issue_token, send_json, state_with, StubAuth, StubEconomy};
    use axon_connect::domain::{Building, BuildingsPage, Corporation};
    use serde_json::json;

    const SECRET: &str = "test-secret";

    fn session_cookie() -> String {
        format!("auth_token={}", issue_token(SECRET, 3600))
    }

    #[tokio::test]
    async fn test_corporation_requires_the_session_cookie() {
        let app = crate::router(state_with(
            StubAuth::default(),
            StubEconomy::default(),
            SECRET,
        ));

        let (_, _, body) = send_json(app, "GET", "/api/economy/corporation", None, None).await;

        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Failed to retrieve jwt.");
    }

    #[tokio::test]
    async fn test_corporation_returns_the_data_envelope() {
        let economy = StubEconomy {
            corporation: Ok(Corporation {
                uuid: "corp-1".to_string(),
                name: "Kaze Heavy Industries".to_string(),
                cash_balance: 25_000,
            }),
            ..StubEconomy::default()
        };
        let app = crate::router(state_with(StubAuth::default(), economy, SECRET));

        let (_, _, body) = send_json(
            app,
            "GET",
            "/api/economy/corporation",
            None,
            Some(&session_cookie()),
        )
        .await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "Kaze Heavy Industries");
        assert_eq!(body["data"]["cash_balance"], 25_000);
    }

    #[tokio::test]
    async fn test_buildings_rejects_oversized_limit() {
        let app = crate::router(state_with(
            StubAuth::default(),
            StubEconomy::default(),
            SECRET,
        ));

        let (_, _, body) = send_json(
            app,
            "POST",
            "/api/economy/buildings",
            Some(json!({"limit": 500})),
            Some(&session_cookie()),
        )
        .await;

        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Invalid input provided.");
    }

    #[tokio::test]
    async fn test_buildings_returns_page_in_camel_case() {
        let economy = StubEconomy {
            buildings: Ok(BuildingsPage {
                game_tick: 42,
                buildings: vec![Building {
                    gml_id: "bldg-13".to_string(),
                    longitude: 139.69,
                    latitude: 35.68,
                }],
                total_count: 1,
            }),
            ..StubEconomy::default()
        };
        let app = crate::router(state_with(StubAuth::default(), economy, SECRET));

        let (_, _, body) = send_json(
            app,
            "POST",
            "/api/economy/buildings",
            Some(json!({"minLon": 139.0, "maxLon": 140.0})),
            Some(&session_cookie()),
        )
        .await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["gameTick"], 42);
        assert_eq!(body["data"]["buildings"][0]["gmlId"], "bldg-13");
        assert_eq!(body["data"]["totalCount"], 1);
    }

    #[tokio::test]
    async fn test_businesses_failure_message_is_generic() {
        let app = crate::router(state_with(
            StubAuth::default(),
            StubEconomy::default(),
            SECRET,
        ));

        let (_, _, body) = send_json(
            app,
            "POST",
            "/api/economy/businesses",
            Some(json!({"sortBy": "BUSINESS_NAME", "sortDirection": "ASCENDING"})),
            Some(&session_cookie()),
        )
        .await;

        assert_eq!(body["success"], false);
        assert_eq!(
            body["message"],
            "An unexpected error occurred while fetching businesses."
        );
    }
}
