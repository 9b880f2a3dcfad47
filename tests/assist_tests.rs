use esekolah_pintar::assist::AssistClient;
use esekolah_pintar::error::Error;
use esekolah_pintar::state::defaults;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> AssistClient {
    AssistClient::new("kunci_ujian", reqwest::Client::new()).with_base_url(&server.uri())
}

#[tokio::test]
async fn chat_returns_the_model_reply() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(query_param("key", "kunci_ujian"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                {"content": {"parts": [{"text": "Baik, boleh saya bantu?"}]}}
            ]
        })))
        .mount(&mock_server)
        .await;

    let reply = client(&mock_server).chat("Apakah jadual hari ini?").await.unwrap();
    assert_eq!(reply, "Baik, boleh saya bantu?");
}

#[tokio::test]
async fn lesson_plan_prompt_carries_the_subject_and_topic() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                {"content": {"parts": [{"text": "## RPH"}]}}
            ]
        })))
        .mount(&mock_server)
        .await;

    client(&mock_server)
        .lesson_plan("Matematik", "Pecahan", "60 minit")
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Subjek: Matematik"));
    assert!(prompt.contains("Topik: Pecahan"));
    assert!(prompt.contains("Masa: 60 minit"));
}

#[tokio::test]
async fn empty_reply_falls_back_to_the_localized_string() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&mock_server)
        .await;

    let reply = client(&mock_server).chat("Helo").await.unwrap();
    assert_eq!(reply, "Maaf, saya tidak faham.");
}

#[tokio::test]
async fn server_failure_surfaces_the_localized_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let student = defaults::students().remove(0);
    let err = client(&mock_server).student_report(&student).await.unwrap_err();
    assert!(matches!(err, Error::Assist(_)));
    assert_eq!(err.to_string(), "Gagal menjana laporan. Sila cuba lagi.");
}
