use quick_xml::escape::escape;
use serde::{Deserialize, Serialize};

/// One parsed result row from a station_observations feature.
///
/// The date keeps the wire format verbatim (ISO-like with a trailing zone
/// marker, e.g. "1999-12-06Z"); the url is the absolute download location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeodesyObservation {
    pub station_id: String,
    pub date: String,
    pub url: String,
}

/// Filter over station observations: one station, inclusive date range.
///
/// Built per request and immutable. No date-format validation happens here;
/// malformed input is passed through verbatim (XML-escaped only) and left
/// for the remote service to reject.
#[derive(Debug, Clone)]
pub struct ObservationsFilter {
    station_id: String,
    start_date: String,
    end_date: String,
}

impl ObservationsFilter {
    pub fn new(
        station_id: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            station_id: station_id.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// OGC Filter expression matching every record for the station within
    /// the inclusive [start, end] range, embeddable in a GetFeature body.
    pub fn filter_string_all_records(&self) -> String {
        format!(
            concat!(
                r#"<ogc:Filter xmlns:ogc="http://www.opengis.net/ogc">"#,
                "<ogc:And>",
                "<ogc:PropertyIsEqualTo>",
                "<ogc:PropertyName>station_id</ogc:PropertyName>",
                "<ogc:Literal>{station}</ogc:Literal>",
                "</ogc:PropertyIsEqualTo>",
                "<ogc:PropertyIsGreaterThanOrEqualTo>",
                "<ogc:PropertyName>ob_date</ogc:PropertyName>",
                "<ogc:Literal>{start}</ogc:Literal>",
                "</ogc:PropertyIsGreaterThanOrEqualTo>",
                "<ogc:PropertyIsLessThanOrEqualTo>",
                "<ogc:PropertyName>ob_date</ogc:PropertyName>",
                "<ogc:Literal>{end}</ogc:Literal>",
                "</ogc:PropertyIsLessThanOrEqualTo>",
                "</ogc:And>",
                "</ogc:Filter>",
            ),
            station = escape(&self.station_id),
            start = escape(&self.start_date),
            end = escape(&self.end_date),
        )
    }
}
