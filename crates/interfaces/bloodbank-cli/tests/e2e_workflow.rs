use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use bloodbank_cli::commands;
use bloodbank_config::ClientConfig;
use bloodbank_core::{BloodType, DonorDraft, SearchCriteria};
use bloodbank_infra::{default_http_client, BackendClient, GenerativeClient};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Mock {
    donors: Arc<Mutex<Vec<Value>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

fn donor_json(first: &str, blood_type: &str, city: &str, eligible: bool) -> Value {
    json!({
        "id": 1,
        "firstName": first,
        "lastName": "Rivera",
        "email": format!("{}@example.com", first.to_lowercase()),
        "phone": "",
        "bloodType": blood_type,
        "dateOfBirth": "1988-02-11",
        "gender": "Female",
        "city": city,
        "state": "CA",
        "isEligible": eligible
    })
}

async fn start_mock_server() -> (SocketAddr, Mock, tokio::task::JoinHandle<()>) {
    let mock = Mock::default();
    mock.donors.lock().unwrap().extend([
        donor_json("Maria", "O-", "Fresno", true),
        donor_json("Luis", "AB+", "Sacramento", false),
    ]);

    let app = Router::new()
        .route(
            "/api/donors",
            get(|State(m): State<Mock>| async move {
                Json(Value::Array(m.donors.lock().unwrap().clone()))
            })
            .post(|State(m): State<Mock>, Json(mut body): Json<Value>| async move {
                body["isEligible"] = json!(true);
                m.donors.lock().unwrap().push(body);
                StatusCode::CREATED
            }),
        )
        .route(
            "/api/inventory",
            get(|| async {
                Json(json!([
                    {"bloodType": "O-", "units": 3},
                    {"bloodType": "A+", "units": 15},
                    {"bloodType": "B+", "units": 60}
                ]))
            }),
        )
        .route(
            "/api/donors/search",
            get(
                |State(m): State<Mock>, Query(q): Query<HashMap<String, String>>| async move {
                    let city = q.get("city").cloned().unwrap_or_default();
                    let found: Vec<Value> = m
                        .donors
                        .lock()
                        .unwrap()
                        .iter()
                        .filter(|d| d["city"] == city.as_str() && d["isEligible"] == true)
                        .cloned()
                        .collect();
                    Json(Value::Array(found))
                },
            ),
        )
        .route(
            "/models/*rest",
            post(|State(m): State<Mock>, Json(body): Json<Value>| async move {
                let prompt = body["contents"][0]["parts"][0]["text"]
                    .as_str()
                    .unwrap_or_default()
                    .to_string();
                m.prompts.lock().unwrap().push(prompt);
                Json(json!({
                    "candidates": [{"content": {"parts": [{"text": "Roll up a sleeve this weekend."}]}}]
                }))
            }),
        )
        .with_state(mock.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, mock, handle)
}

fn clients(addr: SocketAddr) -> (BackendClient, GenerativeClient) {
    let cfg = ClientConfig {
        api_base_url: format!("http://{addr}/api"),
        genai_base_url: format!("http://{addr}/models"),
        genai_model: "test-model".into(),
        genai_api_key: "k".into(),
    };
    let http = default_http_client().unwrap();
    (
        BackendClient::from_config(http.clone(), &cfg),
        GenerativeClient::from_config(http, &cfg),
    )
}

#[tokio::test]
async fn register_then_find_and_reach_out() {
    let (addr, mock, _server) = start_mock_server().await;
    let (backend, generator) = clients(addr);

    let all = commands::cmd_donors(&backend, None).await.unwrap();
    assert_eq!(all.len(), 2);
    let filtered = commands::cmd_donors(&backend, Some("ab+")).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].blood_type, BloodType::AbPositive);

    let draft = DonorDraft {
        first_name: "Kim".into(),
        last_name: "Park".into(),
        email: "kim@example.com".into(),
        blood_type: BloodType::BNegative,
        date_of_birth: "1995-07-30".into(),
        city: "Fresno".into(),
        state: "CA".into(),
        ..Default::default()
    };
    commands::cmd_register(&backend, &draft).await.unwrap();
    assert_eq!(commands::cmd_donors(&backend, None).await.unwrap().len(), 3);

    let criteria = SearchCriteria::new("CA", "Fresno");
    let found = commands::cmd_search(&backend, &criteria).await.unwrap();
    assert_eq!(found.len(), 2);

    let message = commands::cmd_outreach(&backend, &generator, &criteria)
        .await
        .unwrap();
    assert_eq!(message.as_deref(), Some("Roll up a sleeve this weekend."));

    let prompts = mock.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Fresno, CA"));
    assert!(prompts[0].contains("O-, B-"));
}

#[tokio::test]
async fn invalid_input_never_reaches_the_backend() {
    let (addr, mock, _server) = start_mock_server().await;
    let (backend, generator) = clients(addr);

    let err = commands::cmd_register(&backend, &DonorDraft::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Please fill in all required fields.");
    assert_eq!(mock.donors.lock().unwrap().len(), 2);

    assert!(commands::cmd_search(&backend, &SearchCriteria::new("CA", " "))
        .await
        .is_err());

    // Nobody eligible in Sacramento, so nothing is generated.
    let none = commands::cmd_outreach(&backend, &generator, &SearchCriteria::new("CA", "Sacramento"))
        .await
        .unwrap();
    assert!(none.is_none());
    assert!(mock.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn campaign_names_low_stock_types() {
    let (addr, mock, _server) = start_mock_server().await;
    let (backend, generator) = clients(addr);

    let inventory = commands::cmd_inventory(&backend).await.unwrap();
    assert_eq!(inventory.len(), 3);

    let ideas = commands::cmd_campaign(&backend, &generator).await.unwrap();
    assert_eq!(ideas, "Roll up a sleeve this weekend.");

    let prompts = mock.prompts.lock().unwrap();
    assert!(prompts[0].contains("O-"));
    assert!(prompts[0].contains("A+"));
    assert!(!prompts[0].contains("B+"));
}
