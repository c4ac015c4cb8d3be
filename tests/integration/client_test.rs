use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wxa::core::{AlertSource, NwsClient, Severity};
use wxa::WxaError;

const FLORIDA_ALERTS: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "properties": {
                "headline": "Rip Current Statement issued by NWS Miami FL",
                "severity": "Moderate",
                "event": "Rip Current Statement",
                "areaDesc": "Coastal Palm Beach"
            }
        },
        {
            "properties": {
                "headline": "Small Craft Advisory issued by NWS Key West FL",
                "severity": "Minor"
            }
        }
    ]
}"#;

fn client_for(server: &MockServer) -> NwsClient {
    NwsClient::new(&format!("{}/alerts/active", server.uri()), "wxa-test/1.0").unwrap()
}

#[tokio::test]
async fn test_fetch_parses_features_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alerts/active"))
        .and(query_param("area", "FL"))
        .and(header("user-agent", "wxa-test/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FLORIDA_ALERTS))
        .expect(1)
        .mount(&server)
        .await;

    let collection = client_for(&server).fetch("FL").await.unwrap();

    assert_eq!(collection.len(), 2);
    assert_eq!(
        collection.features[0].display_text(),
        "Rip Current Statement issued by NWS Miami FL"
    );
    assert_eq!(collection.features[0].severity(), Severity::Moderate);
    assert_eq!(collection.features[1].severity(), Severity::Minor);
}

#[tokio::test]
async fn test_non_success_status_is_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch("FL").await.unwrap_err();

    assert!(matches!(err, WxaError::Request { status: 503, .. }));
    assert_eq!(err.to_string(), "Error: 503 Service Unavailable");
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch("FL").await.unwrap_err();

    assert!(matches!(err, WxaError::Parse(_)));
    assert!(err.to_string().contains("expected value"));
}

#[tokio::test]
async fn test_area_parameter_is_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("area", "FL&X=1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"features": []}"#))
        .expect(1)
        .mount(&server)
        .await;

    let collection = client_for(&server).fetch("FL&X=1").await.unwrap();
    assert!(collection.is_empty());
}
