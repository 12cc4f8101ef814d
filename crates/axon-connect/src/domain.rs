//! Domain types and repository contracts consumed by the gateway.

use crate::error::AuthError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A player account as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uuid: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistration {
    pub user_name: String,
    pub user_password: String,
    pub email: String,
    pub corporation_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCredentials {
    pub user_name: String,
    pub user_password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationInfo {
    pub user_name: String,
    pub code: String,
}

/// Result of registration and verification calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub user_uuid: String,
}

/// A freshly issued session token.
#[derive(Debug, Clone)]
pub struct SessionToken {
    pub jwt: String,
}

/// The player's corporation and its cash position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Corporation {
    pub uuid: String,
    pub name: String,
    pub cash_balance: i64,
}

/// Filters for a building query. All fields are optional; absent fields
/// leave the corresponding dimension unconstrained.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildingsQuery {
    pub owning_corporation_uuid: Option<String>,
    pub owning_business_uuid: Option<String>,
    pub min_lon: Option<f64>,
    pub max_lon: Option<f64>,
    pub min_lat: Option<f64>,
    pub max_lat: Option<f64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub gml_id: String,
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingsPage {
    pub game_tick: u64,
    pub buildings: Vec<Building>,
    pub total_count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessSortBy {
    BusinessName,
    BusinessOperationExpenses,
    BusinessMarketVolume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessesQuery {
    pub owning_corporation_uuid: Option<String>,
    pub market_uuid: Option<String>,
    pub min_operational_expenses: Option<i64>,
    pub max_operational_expenses: Option<i64>,
    pub sort_by: Option<BusinessSortBy>,
    pub sort_direction: Option<SortDirection>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub business_uuid: String,
    pub business_name: String,
    pub owning_corporation_uuid: Option<String>,
    pub market_uuid: String,
    pub operational_expenses: i64,
    pub headquarter_building_uuid: String,
    pub headquarter_building_gml_id: String,
    pub headquarter_longitude: f64,
    pub headquarter_latitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessesPage {
    pub businesses: Vec<Business>,
    pub total_count: i64,
}

/// Account and session operations against the backend.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn register(
        &self,
        data: UserRegistration,
        ip_address: &str,
    ) -> Result<RegisteredUser, AuthError>;

    async fn verify_user(
        &self,
        info: VerificationInfo,
        ip_address: &str,
    ) -> Result<RegisteredUser, AuthError>;

    async fn resend_verification_email(
        &self,
        user_name: &str,
        ip_address: &str,
    ) -> Result<(), AuthError>;

    async fn login(
        &self,
        credentials: UserCredentials,
        ip_address: &str,
    ) -> Result<SessionToken, AuthError>;

    async fn get_current_user(&self, ip_address: &str, jwt: &str) -> Result<User, AuthError>;
}

/// Read access to the player economy.
#[async_trait]
pub trait EconomyRepository: Send + Sync {
    async fn get_corporation(&self, ip_address: &str, jwt: &str)
        -> Result<Corporation, AuthError>;

    async fn query_buildings(
        &self,
        filters: BuildingsQuery,
        ip_address: &str,
        jwt: &str,
    ) -> Result<BuildingsPage, AuthError>;

    async fn query_businesses(
        &self,
        filters: BusinessesQuery,
        ip_address: &str,
        jwt: &str,
    ) -> Result<BusinessesPage, AuthError>;
}
