use geodesy_wfs::{GeodesyService, ReqwestServiceCaller, WfsPostMethodMaker};
use httpmock::prelude::*;

const RESPONSE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<wfs:FeatureCollection xmlns:wfs="http://www.opengis.net/wfs" xmlns:gml="http://www.opengis.net/gml" xmlns:geodesy="http://auscope.org/geodesy">
  <gml:featureMember>
    <geodesy:station_observations fid="station_observations.1">
      <geodesy:station_id>parc</geodesy:station_id>
      <geodesy:ob_date>1999-12-06Z</geodesy:ob_date>
      <geodesy:url>http://siss2.anu.edu.au/geodesy-mirror/daily/1999/99341/parc3410.99d.Z</geodesy:url>
    </geodesy:station_observations>
  </gml:featureMember>
  <gml:featureMember>
    <geodesy:station_observations fid="station_observations.2">
      <geodesy:station_id>pert</geodesy:station_id>
      <geodesy:ob_date>1999-11-01Z</geodesy:ob_date>
      <geodesy:url>http://siss2.anu.edu.au/geodesy-mirror/daily/1999/99341/pert3410.99d.Z</geodesy:url>
    </geodesy:station_observations>
  </gml:featureMember>
  <gml:featureMember>
    <geodesy:station_observations fid="station_observations.3">
      <geodesy:station_id>petp</geodesy:station_id>
      <geodesy:ob_date>1999-12-06Z</geodesy:ob_date>
      <geodesy:url>http://siss2.anu.edu.au/geodesy-mirror/daily/1999/99341/petp3410.99d.Z</geodesy:url>
    </geodesy:station_observations>
  </gml:featureMember>
</wfs:FeatureCollection>"#;

fn service() -> GeodesyService<ReqwestServiceCaller, WfsPostMethodMaker> {
    GeodesyService::new(ReqwestServiceCaller::default(), WfsPostMethodMaker::new())
}

#[tokio::test]
async fn test_end_to_end_observation_retrieval() {
    let server = MockServer::start();

    let wfs_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/wfs")
            .header("Content-Type", "text/xml")
            .body_contains(r#"<wfs:Query typeName="geodesy:station_observations">"#)
            .body_contains("<ogc:Literal>parc</ogc:Literal>")
            .body_contains("<ogc:Literal>1986-10-09</ogc:Literal>")
            .body_contains("<ogc:Literal>1990-12-13</ogc:Literal>");
        then.status(200)
            .header("Content-Type", "text/xml")
            .body(RESPONSE_XML);
    });

    let observations = service()
        .observations_for_station(&server.url("/wfs"), "parc", "1986-10-09", "1990-12-13")
        .await
        .unwrap();

    wfs_mock.assert();

    assert_eq!(observations.len(), 3);

    assert_eq!(observations[0].station_id, "parc");
    assert_eq!(observations[0].date, "1999-12-06Z");
    assert_eq!(
        observations[0].url,
        "http://siss2.anu.edu.au/geodesy-mirror/daily/1999/99341/parc3410.99d.Z"
    );

    assert_eq!(observations[1].station_id, "pert");
    assert_eq!(observations[1].date, "1999-11-01Z");
    assert_eq!(
        observations[1].url,
        "http://siss2.anu.edu.au/geodesy-mirror/daily/1999/99341/pert3410.99d.Z"
    );

    assert_eq!(observations[2].station_id, "petp");
    assert_eq!(observations[2].date, "1999-12-06Z");
    assert_eq!(
        observations[2].url,
        "http://siss2.anu.edu.au/geodesy-mirror/daily/1999/99341/petp3410.99d.Z"
    );
}

#[tokio::test]
async fn test_empty_feature_collection() {
    let server = MockServer::start();

    let wfs_mock = server.mock(|when, then| {
        when.method(POST).path("/wfs");
        then.status(200)
            .header("Content-Type", "text/xml")
            .body(r#"<wfs:FeatureCollection xmlns:wfs="http://www.opengis.net/wfs"></wfs:FeatureCollection>"#);
    });

    let observations = service()
        .observations_for_station(&server.url("/wfs"), "nope", "1986-10-09", "1990-12-13")
        .await
        .unwrap();

    wfs_mock.assert();
    assert!(observations.is_empty());
}

#[tokio::test]
async fn test_server_error_status_maps_to_service_error() {
    let server = MockServer::start();

    let wfs_mock = server.mock(|when, then| {
        when.method(POST).path("/wfs");
        then.status(500);
    });

    let err = service()
        .observations_for_station(&server.url("/wfs"), "parc", "1986-10-09", "1990-12-13")
        .await
        .unwrap_err();

    wfs_mock.assert();
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_unreachable_endpoint_maps_to_service_error() {
    // nothing listens on port 1
    let err = service()
        .observations_for_station("http://127.0.0.1:1/wfs", "parc", "1986-10-09", "1990-12-13")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("http://127.0.0.1:1/wfs"));
}

#[tokio::test]
async fn test_non_xml_response_maps_to_service_error() {
    let server = MockServer::start();

    let wfs_mock = server.mock(|when, then| {
        when.method(POST).path("/wfs");
        then.status(200)
            .header("Content-Type", "text/html")
            .body("<html><body>Service temporarily unavailable</html>");
    });

    let err = service()
        .observations_for_station(&server.url("/wfs"), "parc", "1986-10-09", "1990-12-13")
        .await
        .unwrap_err();

    wfs_mock.assert();
    assert!(err.to_string().contains("invalid WFS response"));
}
