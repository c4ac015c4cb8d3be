use std::sync::Arc;

use parking_lot::Mutex;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wxa::core::{
    build_binding, Config, EmptyRouting, FetchOutcome, InputKey, NwsClient, ViewState,
    EMPTY_INPUT_MESSAGE, NO_ALERTS_MESSAGE,
};

const ONE_ALERT: &str = r#"{"features": [{"properties": {"headline": "Heat Advisory", "severity": "Severe"}}]}"#;

fn surface_with(input: &str) -> Arc<Mutex<ViewState>> {
    Arc::new(Mutex::new(ViewState::with_input(input)))
}

fn client_for(server: &MockServer) -> NwsClient {
    NwsClient::new(&format!("{}/alerts/active", server.uri()), "wxa-test").unwrap()
}

#[tokio::test]
async fn test_input_is_trimmed_and_upper_cased() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("area", "FL"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ONE_ALERT))
        .expect(1)
        .mount(&server)
        .await;

    let surface = surface_with(" fl ");
    let binding = build_binding(
        surface.clone(),
        client_for(&server),
        &Config::default(),
        EmptyRouting::ErrorChannel,
    );

    let outcome = binding.activate().await;

    assert_eq!(outcome, Some(FetchOutcome::Rendered(1)));
    let state = surface.lock();
    assert_eq!(state.summary.as_deref(), Some("Weather Alerts: 1"));
    assert_eq!(state.rendered_alerts[0].text, "Heat Advisory");
    assert_eq!(state.rendered_alerts[0].css_class(), "severity-Severe");
    assert!(!state.loading);
    assert_eq!(state.input, "");
}

#[tokio::test]
async fn test_blank_input_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ONE_ALERT))
        .expect(0)
        .mount(&server)
        .await;

    for input in ["", "   ", "\t"] {
        let surface = surface_with(input);
        let binding = build_binding(
            surface.clone(),
            client_for(&server),
            &Config::default(),
            EmptyRouting::ErrorChannel,
        );

        assert_eq!(binding.activate().await, None);
        assert_eq!(surface.lock().visible_error(), Some(EMPTY_INPUT_MESSAGE));
    }
}

#[tokio::test]
async fn test_enter_key_matches_button() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ONE_ALERT))
        .expect(2)
        .mount(&server)
        .await;

    let by_button = surface_with("tx");
    build_binding(
        by_button.clone(),
        client_for(&server),
        &Config::default(),
        EmptyRouting::ErrorChannel,
    )
    .activate()
    .await;

    let by_key = surface_with("tx");
    let binding = build_binding(
        by_key.clone(),
        client_for(&server),
        &Config::default(),
        EmptyRouting::ErrorChannel,
    );
    assert_eq!(binding.handle_key(InputKey::Other).await, None);
    binding.handle_key(InputKey::Enter).await;

    assert_eq!(*by_button.lock(), *by_key.lock());
}

#[tokio::test]
async fn test_server_error_then_loading_cleared() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let surface = surface_with("fl");
    let binding = build_binding(
        surface.clone(),
        client_for(&server),
        &Config::default(),
        EmptyRouting::ErrorChannel,
    );

    let outcome = binding.activate().await;

    assert_eq!(
        outcome,
        Some(FetchOutcome::Failed("Error: 503 Service Unavailable".to_string()))
    );
    let state = surface.lock();
    assert_eq!(state.visible_error(), Some("Error: 503 Service Unavailable"));
    assert!(!state.loading);
    assert_eq!(state.input, "");
    assert!(state.rendered_alerts.is_empty());
}

#[tokio::test]
async fn test_empty_feed_shows_no_alerts_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"features": []}"#))
        .mount(&server)
        .await;

    let surface = surface_with("wy");
    let binding = build_binding(
        surface.clone(),
        client_for(&server),
        &Config::default(),
        EmptyRouting::ErrorChannel,
    );

    assert_eq!(binding.activate().await, Some(FetchOutcome::Empty));
    let state = surface.lock();
    assert_eq!(state.visible_error(), Some(NO_ALERTS_MESSAGE));
    assert!(state.summary.is_none());
}

#[tokio::test]
async fn test_connection_refused_is_displayed() {
    // Reserve a port, then close it so nothing is listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = NwsClient::new(&format!("http://{}/alerts/active", addr), "wxa-test").unwrap();
    let surface = surface_with("ca");
    let binding = build_binding(
        surface.clone(),
        client,
        &Config::default(),
        EmptyRouting::ErrorChannel,
    );

    let Some(FetchOutcome::Failed(message)) = binding.activate().await else {
        panic!("expected a failed fetch");
    };

    assert!(message.contains("error sending request"), "{}", message);
    let state = surface.lock();
    assert_eq!(state.visible_error(), Some(message.as_str()));
    assert!(!state.loading);
    assert_eq!(state.input, "");
    assert!(state.rendered_alerts.is_empty());
}
