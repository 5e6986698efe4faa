pub mod parser;
pub mod service;

pub use crate::domain::model::{GeodesyObservation, ObservationsFilter};
pub use crate::domain::ports::{
    HttpServiceCaller, PostMethodParams, ResultType, WfsMethod, WfsMethodMaker,
};
pub use crate::utils::error::Result;
pub use service::{GeodesyService, STATION_OBSERVATIONS_TYPE_NAME};
