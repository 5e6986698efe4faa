use std::sync::atomic::{AtomicBool, Ordering};

use quick_xml::escape::escape;

use crate::domain::ports::{PostMethodParams, WfsMethod, WfsMethodMaker};
use crate::utils::error::Result;

/// A GetFeature POST request bound to a service URL.
///
/// reqwest pools connections internally, so releasing is a bookkeeping
/// marker here rather than a socket teardown; it stays idempotent.
#[derive(Debug)]
pub struct WfsPostMethod {
    url: String,
    body: String,
    released: AtomicBool,
}

impl WfsPostMethod {
    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }
}

impl WfsMethod for WfsPostMethod {
    fn url(&self) -> &str {
        &self.url
    }

    fn body(&self) -> &str {
        &self.body
    }

    fn release_connection(&self) {
        self.released.store(true, Ordering::SeqCst);
    }
}

/// Builds WFS 1.1.0 GetFeature POST bodies.
///
/// `maxFeatures`, `outputFormat` and `srsName` are emitted only when given;
/// the filter string is embedded as-is inside the query element.
#[derive(Debug, Default, Clone)]
pub struct WfsPostMethodMaker;

impl WfsPostMethodMaker {
    pub fn new() -> Self {
        Self
    }
}

impl WfsMethodMaker for WfsPostMethodMaker {
    fn make_post_method(&self, params: PostMethodParams<'_>) -> Result<Box<dyn WfsMethod>> {
        let mut body = String::with_capacity(512 + params.filter.len());

        body.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        body.push_str(r#"<wfs:GetFeature service="WFS" version="1.1.0""#);
        body.push_str(&format!(
            r#" resultType="{}""#,
            params.result_type.as_wfs_attr()
        ));
        if let Some(max_features) = params.max_features {
            body.push_str(&format!(r#" maxFeatures="{}""#, max_features));
        }
        if let Some(output_format) = params.output_format {
            body.push_str(&format!(r#" outputFormat="{}""#, escape(output_format)));
        }
        body.push_str(r#" xmlns:wfs="http://www.opengis.net/wfs""#);
        body.push_str(r#" xmlns:ogc="http://www.opengis.net/ogc""#);
        body.push_str(r#" xmlns:gml="http://www.opengis.net/gml">"#);

        body.push_str(&format!(
            r#"<wfs:Query typeName="{}""#,
            escape(params.type_name)
        ));
        if let Some(srs_name) = params.srs_name {
            body.push_str(&format!(r#" srsName="{}""#, escape(srs_name)));
        }
        body.push('>');
        body.push_str(params.filter);
        body.push_str("</wfs:Query>");
        body.push_str("</wfs:GetFeature>");

        Ok(Box::new(WfsPostMethod {
            url: params.service_url.to_string(),
            body,
            released: AtomicBool::new(false),
        }))
    }
}
