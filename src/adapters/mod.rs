// Adapters layer: concrete implementations of the domain ports (WFS request
// construction, HTTP execution).

pub mod http;
pub mod wfs;

pub use http::ReqwestServiceCaller;
pub use wfs::WfsPostMethodMaker;
