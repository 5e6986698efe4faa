pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{ReqwestServiceCaller, WfsPostMethodMaker};
#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;
pub use core::service::{GeodesyService, STATION_OBSERVATIONS_TYPE_NAME};
pub use domain::model::{GeodesyObservation, ObservationsFilter};
pub use domain::ports::{
    HttpServiceCaller, PostMethodParams, ResultType, WfsMethod, WfsMethodMaker,
};
pub use utils::error::{ConfigError, Result, ServiceError};
