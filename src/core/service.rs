use crate::core::parser;
use crate::domain::model::{GeodesyObservation, ObservationsFilter};
use crate::domain::ports::{
    HttpServiceCaller, PostMethodParams, ResultType, WfsMethod, WfsMethodMaker,
};
use crate::utils::error::Result;

/// Feature type queried for station observations.
pub const STATION_OBSERVATIONS_TYPE_NAME: &str = "geodesy:station_observations";

/// Retrieves geodesy station observations from a WFS endpoint.
///
/// Holds no state beyond its two stateless collaborators, so a single
/// instance can serve independent callers concurrently.
pub struct GeodesyService<C: HttpServiceCaller, M: WfsMethodMaker> {
    service_caller: C,
    method_maker: M,
}

impl<C: HttpServiceCaller, M: WfsMethodMaker> GeodesyService<C, M> {
    pub fn new(service_caller: C, method_maker: M) -> Self {
        Self {
            service_caller,
            method_maker,
        }
    }

    /// All observations for `station_id` within the inclusive date range,
    /// in response document order.
    ///
    /// One linear request/response cycle, no retries. The request's
    /// connection is released exactly once, whether the call succeeds or
    /// fails; every failure comes back as the crate's uniform error.
    pub async fn observations_for_station(
        &self,
        service_url: &str,
        station_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<GeodesyObservation>> {
        let filter = ObservationsFilter::new(station_id, start_date, end_date);

        let method = self.method_maker.make_post_method(PostMethodParams {
            service_url,
            type_name: STATION_OBSERVATIONS_TYPE_NAME,
            filter: &filter.filter_string_all_records(),
            max_features: None,
            output_format: None,
            result_type: ResultType::Results,
            srs_name: None,
        })?;

        tracing::debug!("requesting station observations from: {}", service_url);
        let outcome = self.fetch_and_parse(method.as_ref()).await;
        method.release_connection();

        if let Ok(observations) = &outcome {
            tracing::debug!(
                "parsed {} observations for station {}",
                observations.len(),
                station_id
            );
        }

        outcome
    }

    async fn fetch_and_parse(&self, method: &dyn WfsMethod) -> Result<Vec<GeodesyObservation>> {
        let body = self.service_caller.response_stream(method).await?;
        parser::parse_station_observations(&body)
    }
}
