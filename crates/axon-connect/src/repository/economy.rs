//! Economy repository backed by the `economy.v1` service.

use crate::context::{request_with_context, CallContext};
use crate::domain::{
    Building, BuildingsPage, BuildingsQuery, Business, BusinessSortBy, BusinessesPage,
    BusinessesQuery, Corporation, EconomyRepository, SortDirection,
};
use crate::error::AuthError;
use crate::registry::ClientRegistry;
use async_trait::async_trait;
use axon_proto::economy::v1 as economy;
use axon_proto::interface::v1 as interface;
use std::sync::Arc;
use tracing::debug;

/// Talks to the backend economy service with the shared client registry.
pub struct GrpcEconomyRepository {
    registry: Arc<ClientRegistry>,
}

impl GrpcEconomyRepository {
    pub fn new(registry: Arc<ClientRegistry>) -> Self {
        Self { registry }
    }
}

fn sort_by_wire(sort_by: Option<BusinessSortBy>) -> i32 {
    (match sort_by {
        Some(BusinessSortBy::BusinessName) => economy::BusinessSortBy::Name,
        Some(BusinessSortBy::BusinessOperationExpenses) => {
            economy::BusinessSortBy::OperationExpenses
        }
        Some(BusinessSortBy::BusinessMarketVolume) => economy::BusinessSortBy::MarketVolume,
        None => economy::BusinessSortBy::Unspecified,
    }) as i32
}

fn sort_direction_wire(direction: Option<SortDirection>) -> i32 {
    (match direction {
        Some(SortDirection::Ascending) => interface::SortDirection::Ascending,
        Some(SortDirection::Descending) => interface::SortDirection::Descending,
        None => interface::SortDirection::Unspecified,
    }) as i32
}

#[async_trait]
impl EconomyRepository for GrpcEconomyRepository {
    async fn get_corporation(
        &self,
        ip_address: &str,
        jwt: &str,
    ) -> Result<Corporation, AuthError> {
        let response = self
            .registry
            .economy()
            .get_current_corporation(request_with_context(
                economy::GetCorporationRequest {},
                CallContext::for_session(ip_address, jwt),
            ))
            .await?;

        let corporation = response.into_inner();

        Ok(Corporation {
            uuid: corporation.uuid,
            name: corporation.name,
            cash_balance: corporation.balance,
        })
    }

    async fn query_buildings(
        &self,
        filters: BuildingsQuery,
        ip_address: &str,
        jwt: &str,
    ) -> Result<BuildingsPage, AuthError> {
        debug!("Querying buildings with limit {:?}", filters.limit);

        let request = economy::QueryBuildingsRequest {
            owning_corporation_uuid: filters.owning_corporation_uuid,
            owning_business_uuid: filters.owning_business_uuid,
            min_lon: filters.min_lon,
            max_lon: filters.max_lon,
            min_lat: filters.min_lat,
            max_lat: filters.max_lat,
            limit: filters.limit,
        };

        let response = self
            .registry
            .economy()
            .query_buildings(request_with_context(
                request,
                CallContext::for_session(ip_address, jwt),
            ))
            .await?;

        let page = response.into_inner();

        Ok(BuildingsPage {
            game_tick: page.game_tick,
            buildings: page
                .buildings
                .into_iter()
                .map(|building| Building {
                    gml_id: building.gml_id,
                    longitude: building.longitude,
                    latitude: building.latitude,
                })
                .collect(),
            total_count: page.total_count,
        })
    }

    async fn query_businesses(
        &self,
        filters: BusinessesQuery,
        ip_address: &str,
        jwt: &str,
    ) -> Result<BusinessesPage, AuthError> {
        let request = economy::QueryBusinessesRequest {
            owning_corporation_uuid: filters.owning_corporation_uuid,
            market_uuid: filters.market_uuid,
            min_operational_expenses: filters.min_operational_expenses,
            max_operational_expenses: filters.max_operational_expenses,
            sort_by: sort_by_wire(filters.sort_by),
            sort_direction: sort_direction_wire(filters.sort_direction),
            limit: filters.limit,
            offset: filters.offset,
        };

        let response = self
            .registry
            .economy()
            .query_businesses(request_with_context(
                request,
                CallContext::for_session(ip_address, jwt),
            ))
            .await?;

        let page = response.into_inner();

        Ok(BusinessesPage {
            businesses: page
                .businesses
                .into_iter()
                .map(|business| Business {
                    business_uuid: business.business_uuid,
                    business_name: business.business_name,
                    owning_corporation_uuid: business.owning_corporation_uuid,
                    market_uuid: business.market_uuid,
                    operational_expenses: business.operational_expenses,
                    headquarter_building_uuid: business.headquarter_building_uuid,
                    headquarter_building_gml_id: business.headquarter_building_gml_id,
                    headquarter_longitude: business.headquarter_longitude,
                    headquarter_latitude: business.headquarter_latitude,
                })
                .collect(),
            total_count: page.total_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_mappings_default_to_unspecified() {
        assert_eq!(sort_by_wire(None), 0);
        assert_eq!(sort_direction_wire(None), 0);
    }

    #[test]
    fn test_sort_mappings_follow_the_wire_enums() {
        assert_eq!(
            sort_by_wire(Some(BusinessSortBy::BusinessOperationExpenses)),
            economy::BusinessSortBy::OperationExpenses as i32
        );
        assert_eq!(
            sort_direction_wire(Some(SortDirection::Descending)),
            interface::SortDirection::Descending as i32
        );
    }
}
