//! Messages and client stub for the `economy.v1` service.
//!
//! Optional scalar filters use the `google.protobuf.*Value` wrapper
//! encoding, which prost models as optional message fields.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCorporationRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCorporationResponse {
    #[prost(string, tag = "1")]
    pub uuid: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(int64, tag = "3")]
    pub balance: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryBuildingsRequest {
    #[prost(message, optional, tag = "1")]
    pub owning_corporation_uuid: Option<String>,
    #[prost(message, optional, tag = "2")]
    pub owning_business_uuid: Option<String>,
    #[prost(message, optional, tag = "3")]
    pub min_lon: Option<f64>,
    #[prost(message, optional, tag = "4")]
    pub max_lon: Option<f64>,
    #[prost(message, optional, tag = "5")]
    pub min_lat: Option<f64>,
    #[prost(message, optional, tag = "6")]
    pub max_lat: Option<f64>,
    #[prost(message, optional, tag = "7")]
    pub limit: Option<i64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BuildingDetails {
    #[prost(string, tag = "1")]
    pub gml_id: String,
    #[prost(double, tag = "2")]
    pub longitude: f64,
    #[prost(double, tag = "3")]
    pub latitude: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryBuildingsResponse {
    #[prost(uint64, tag = "1")]
    pub game_tick: u64,
    #[prost(message, repeated, tag = "2")]
    pub buildings: Vec<BuildingDetails>,
    #[prost(int64, tag = "3")]
    pub total_count: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryBusinessesRequest {
    #[prost(message, optional, tag = "1")]
    pub owning_corporation_uuid: Option<String>,
    #[prost(message, optional, tag = "2")]
    pub market_uuid: Option<String>,
    #[prost(message, optional, tag = "3")]
    pub min_operational_expenses: Option<i64>,
    #[prost(message, optional, tag = "4")]
    pub max_operational_expenses: Option<i64>,
    #[prost(enumeration = "BusinessSortBy", tag = "5")]
    pub sort_by: i32,
    #[prost(enumeration = "super::super::interface::v1::SortDirection", tag = "6")]
    pub sort_direction: i32,
    #[prost(message, optional, tag = "7")]
    pub limit: Option<i64>,
    #[prost(message, optional, tag = "8")]
    pub offset: Option<i64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BusinessDetails {
    #[prost(string, tag = "1")]
    pub business_uuid: String,
    #[prost(string, tag = "2")]
    pub business_name: String,
    #[prost(message, optional, tag = "3")]
    pub owning_corporation_uuid: Option<String>,
    #[prost(string, tag = "4")]
    pub market_uuid: String,
    #[prost(int64, tag = "5")]
    pub operational_expenses: i64,
    #[prost(string, tag = "6")]
    pub headquarter_building_uuid: String,
    #[prost(string, tag = "7")]
    pub headquarter_building_gml_id: String,
    #[prost(double, tag = "8")]
    pub headquarter_longitude: f64,
    #[prost(double, tag = "9")]
    pub headquarter_latitude: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryBusinessesResponse {
    #[prost(message, repeated, tag = "1")]
    pub businesses: Vec<BusinessDetails>,
    #[prost(int64, tag = "2")]
    pub total_count: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BusinessSortBy {
    Unspecified = 0,
    Name = 1,
    OperationExpenses = 2,
    MarketVolume = 3,
}

/// Client implementation for the economy service.
pub mod economy_service_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::wildcard_imports)]
    use tonic::codegen::http::Uri;
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct EconomyServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl EconomyServiceClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> EconomyServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::Body>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }

        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> EconomyServiceClient<InterceptedService<T, F>>
        where
            F: tonic::service::Interceptor,
            T::ResponseBody: Default,
            T: tonic::codegen::Service<
                http::Request<tonic::body::Body>,
                Response = http::Response<
                    <T as tonic::client::GrpcService<tonic::body::Body>>::ResponseBody,
                >,
            >,
            <T as tonic::codegen::Service<http::Request<tonic::body::Body>>>::Error:
                Into<StdError> + std::marker::Send + std::marker::Sync,
        {
            EconomyServiceClient::new(InterceptedService::new(inner, interceptor))
        }

        pub async fn get_current_corporation(
            &mut self,
            request: impl tonic::IntoRequest<super::GetCorporationRequest>,
        ) -> std::result::Result<tonic::Response<super::GetCorporationResponse>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
            })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/economy.v1.EconomyService/GetCurrentCorporation",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "economy.v1.EconomyService",
                "GetCurrentCorporation",
            ));
            self.inner.unary(req, path, codec).await
        }

        pub async fn query_buildings(
            &mut self,
            request: impl tonic::IntoRequest<super::QueryBuildingsRequest>,
        ) -> std::result::Result<tonic::Response<super::QueryBuildingsResponse>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
            })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/economy.v1.EconomyService/QueryBuildings",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("economy.v1.EconomyService", "QueryBuildings"));
            self.inner.unary(req, path, codec).await
        }

        pub async fn query_businesses(
            &mut self,
            request: impl tonic::IntoRequest<super::QueryBusinessesRequest>,
        ) -> std::result::Result<tonic::Response<super::QueryBusinessesResponse>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
            })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/economy.v1.EconomyService/QueryBusinesses",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("economy.v1.EconomyService", "QueryBusinesses"));
            self.inner.unary(req, path, codec).await
        }
    }
}
