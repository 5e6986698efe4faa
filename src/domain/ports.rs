use crate::utils::error::Result;
use async_trait::async_trait;

/// Request mode for a GetFeature call: full feature payloads or a hit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultType {
    Results,
    Hits,
}

impl ResultType {
    /// Value of the `resultType` attribute on a GetFeature request.
    pub fn as_wfs_attr(&self) -> &'static str {
        match self {
            ResultType::Results => "results",
            ResultType::Hits => "hits",
        }
    }
}

/// Everything a method maker needs to construct a GetFeature POST request.
#[derive(Debug, Clone, Copy)]
pub struct PostMethodParams<'a> {
    pub service_url: &'a str,
    pub type_name: &'a str,
    pub filter: &'a str,
    pub max_features: Option<u32>,
    pub output_format: Option<&'a str>,
    pub result_type: ResultType,
    pub srs_name: Option<&'a str>,
}

/// A constructed WFS request, ready for execution.
///
/// Whoever triggers the request owns releasing its connection afterwards.
/// `release_connection` must be idempotent and callable on any exit path.
pub trait WfsMethod: Send + Sync {
    fn url(&self) -> &str;
    fn body(&self) -> &str;
    fn release_connection(&self);
}

/// Builds GetFeature POST requests for a WFS endpoint.
pub trait WfsMethodMaker: Send + Sync {
    fn make_post_method(&self, params: PostMethodParams<'_>) -> Result<Box<dyn WfsMethod>>;
}

/// Executes a constructed request and hands back the raw response bytes.
#[async_trait]
pub trait HttpServiceCaller: Send + Sync {
    async fn response_stream(&self, method: &dyn WfsMethod) -> Result<Vec<u8>>;
}
