
use serde_json::json;

async fn seed(client: &reqwest::Client, base: &str, body: serde_json::Value) {
    let r = client
        .post(format!("{}/database", base))
        .json(&body)
        .send()
        .await
        .expect("seed request");
    assert!(r.status().is_success(), "seed failed: {}", r.status());
}

#[tokio::test]
async fn post_rates_then_convert_end_to_end() {
    let base = harness::spawn_server().await;
    harness::wait_ready(&base).await;
    let client = reqwest::Client::new();

    seed(&client, &base, json!({ "USD": 1, "EUR": 1.18 })).await;

    let r = client
        .get(format!("{}/convert?from=USD&to=EUR&amount=100", base))
        .send()
        .await
        .expect("convert request");
    assert!(r.status().is_success(), "convert failed: {}", r.status());
    let body: serde_json::Value = r.json().await.expect("parse json");

    assert_eq!(body["from"].as_str(), Some("USD"));
    assert_eq!(body["to"].as_str(), Some("EUR"));
    assert_eq!(body["amount"].as_f64(), Some(100.0));
    let converted = body["converted_amount"].as_f64().expect("numeric");
    assert!((converted - 118.0).abs() < 1e-9, "got {}", converted);
}

#[tokio::test]
async fn convert_reflects_written_rates_exactly() {
    let base = harness::spawn_server().await;
    let client = reqwest::Client::new();

    seed(&client, &base, json!({ "USD": 2.0, "JPY": 300.0 })).await;

    let r = client
        .get(format!("{}/convert?from=USD&to=JPY&amount=10", base))
        .send()
        .await
        .expect("convert request");
    let body: serde_json::Value = r.json().await.expect("parse json");
    // 10 * 300 / 2 = 1500, exact in f64
    assert_eq!(body["converted_amount"].as_f64(), Some(1500.0));
}

#[tokio::test]
async fn missing_params_are_all_reported() {
    let base = harness::spawn_server().await;
    let client = reqwest::Client::new();

    let r = client
        .get(format!("{}/convert", base))
        .send()
        .await
        .expect("convert request");
    assert_eq!(r.status().as_u16(), 400);
    let body: serde_json::Value = r.json().await.expect("parse json");
    let errors: Vec<&str> = body["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .filter_map(|e| e.as_str())
        .collect();
    assert_eq!(errors.len(), 3);
    assert!(errors.contains(&"Parameter 'from' is required"));
    assert!(errors.contains(&"Parameter 'to' is required"));
    assert!(errors.contains(&"Parameter 'amount' is required"));
}

#[tokio::test]
async fn negative_amount_is_rejected() {
    let base = harness::spawn_server().await;
    let client = reqwest::Client::new();

    let r = client
        .get(format!("{}/convert?from=USD&to=EUR&amount=-5", base))
        .send()
        .await
        .expect("convert request");
    assert_eq!(r.status().as_u16(), 400);
    let body: serde_json::Value = r.json().await.expect("parse json");
    let errors = body["errors"].as_array().expect("errors array");
    assert_eq!(
        errors[0].as_str(),
        Some("Parameter 'amount' must be positive")
    );
}

#[tokio::test]
async fn non_numeric_amount_is_rejected() {
    let base = harness::spawn_server().await;
    let client = reqwest::Client::new();

    let r = client
        .get(format!("{}/convert?from=USD&to=EUR&amount=ten", base))
        .send()
        .await
        .expect("convert request");
    assert_eq!(r.status().as_u16(), 400);
    let body: serde_json::Value = r.json().await.expect("parse json");
    let errors = body["errors"].as_array().expect("errors array");
    assert_eq!(
        errors[0].as_str(),
        Some("Parameter 'amount' must be a number")
    );
}

#[tokio::test]
async fn unknown_currency_is_a_404_not_a_crash() {
    let base = harness::spawn_server().await;
    let client = reqwest::Client::new();

    seed(&client, &base, json!({ "USD": 1 })).await;

    let r = client
        .get(format!("{}/convert?from=USD&to=XXX&amount=10", base))
        .send()
        .await
        .expect("convert request");
    assert_eq!(r.status().as_u16(), 404);
    let body: serde_json::Value = r.json().await.expect("parse json");
    assert_eq!(body["error"].as_str(), Some("Currency 'XXX' not found"));
}

#[tokio::test]
async fn zero_source_rate_is_rejected() {
    let base = harness::spawn_server().await;
    let client = reqwest::Client::new();

    seed(&client, &base, json!({ "ZRO": 0, "EUR": 1.18 })).await;

    let r = client
        .get(format!("{}/convert?from=ZRO&to=EUR&amount=10", base))
        .send()
        .await
        .expect("convert request");
    assert_eq!(r.status().as_u16(), 400);
    let body: serde_json::Value = r.json().await.expect("parse json");
    assert_eq!(body["error"].as_str(), Some("Rate for 'ZRO' is zero"));
}

#[tokio::test]
async fn convert_has_no_side_effects() {
    let base = harness::spawn_server().await;
    let client = reqwest::Client::new();

    seed(&client, &base, json!({ "USD": 1, "EUR": 1.18 })).await;

    for _ in 0..3 {
        let r = client
            .get(format!("{}/convert?from=EUR&to=USD&amount=59", base))
            .send()
            .await
            .expect("convert request");
        assert!(r.status().is_success());
    }

    let r = client
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("health request");
    let body: serde_json::Value = r.json().await.expect("parse json");
    assert_eq!(body["rates"].as_u64(), Some(2));
}
