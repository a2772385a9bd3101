use super::common;

use common::test_server::TestServer;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NEWSLETTER_FORM: &str = r#"{
  "title": "Newsletter Signup",
  "description": "Stay in the loop",
  "sections": [
    {
      "id": "subscriber",
      "title": "Subscriber",
      "fields": [
        { "id": "email", "type": "email", "label": "Email", "required": true },
        { "id": "frequency", "type": "radio", "label": "Frequency", "required": true,
          "options": ["Weekly", 2, false, null] }
      ]
    }
  ]
}"#;

async fn ollama_replying(response: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "llama3.2:3b",
            "response": response,
            "done": true
        })))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_fenced_llm_json_is_used() {
    let ollama = ollama_replying(&format!("```json\n{}\n```", NEWSLETTER_FORM)).await;
    let server = TestServer::with_ollama(&ollama.uri()).await;

    let body = server.generate("newsletter signup").await;

    assert_eq!(body["success"], json!(true));
    assert_eq!(body["form"]["title"], json!("Newsletter Signup"));
    // non-string options are coerced; falsy values become ""
    assert_eq!(
        body["form"]["sections"][0]["fields"][1]["options"],
        json!(["Weekly", "2", "", ""])
    );
}

#[tokio::test]
async fn test_request_shape_sent_to_ollama() {
    let ollama = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({
            "model": "llama3.2:3b",
            "stream": false,
            "options": { "max_tokens": 1500, "num_predict": 1500 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": NEWSLETTER_FORM,
            "done": true
        })))
        .expect(1)
        .mount(&ollama)
        .await;

    let server = TestServer::with_ollama(&ollama.uri()).await;
    let body = server.generate("newsletter").await;
    assert_eq!(body["form"]["title"], json!("Newsletter Signup"));

    let requests = ollama.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let prompt = sent["prompt"].as_str().unwrap();
    assert!(prompt.starts_with("You are a form builder AI."));
    assert!(prompt.ends_with(
        "Create a form for: newsletter\n\nReturn only valid JSON following the exact structure above."
    ));
}

#[tokio::test]
async fn test_prose_reply_falls_back_to_template() {
    let ollama = ollama_replying("Sure! I'd love to help you design a contact form.").await;
    let server = TestServer::with_ollama(&ollama.uri()).await;

    let body = server.generate("contact form for my bakery").await;

    assert_eq!(body["success"], json!(true));
    assert_eq!(body["form"]["title"], json!("Contact Form"));
    assert_eq!(body["form"]["description"], json!("Get in touch with us"));
}

#[tokio::test]
async fn test_backend_error_falls_back_to_template() {
    let ollama = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model not found"))
        .mount(&ollama)
        .await;
    let server = TestServer::with_ollama(&ollama.uri()).await;

    let body = server.generate("job application").await;
    assert_eq!(body["form"]["title"], json!("Job Application Form"));
}

#[tokio::test]
async fn test_form_without_sections_falls_back() {
    let ollama = ollama_replying(r#"{"title": "Empty", "sections": []}"#).await;
    let server = TestServer::with_ollama(&ollama.uri()).await;

    let body = server.generate("survey").await;
    assert_eq!(body["form"]["title"], json!("Customer Feedback Survey"));
}

#[tokio::test]
async fn test_slow_backend_falls_back() {
    let ollama = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "response": NEWSLETTER_FORM, "done": true }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&ollama)
        .await;
    let server = TestServer::with_ollama(&ollama.uri()).await;

    let body = server.generate("pizza order").await;
    assert_eq!(body["form"]["title"], json!("Contact Form"));
    assert_eq!(body["form"]["description"], json!("Please fill out this form"));
}

#[tokio::test]
async fn test_unreachable_backend_falls_back() {
    let server = TestServer::with_ollama("http://127.0.0.1:9").await;

    let body = server.generate("feedback").await;
    assert_eq!(body["form"]["title"], json!("Customer Feedback Survey"));
}
