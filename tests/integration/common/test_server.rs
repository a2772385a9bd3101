use formforge::config::Settings;
use std::net::SocketAddr;

pub struct TestServer {
    pub addr: SocketAddr,
    pub base_url: String,
}

impl TestServer {
    /// Template-only server
    pub async fn new() -> Self {
        let mut settings = Settings::default();
        settings.generation.llm_enabled = false;
        Self::start(settings).await
    }

    /// Server whose Ollama backend is the given base URL
    pub async fn with_ollama(base_url: &str) -> Self {
        let mut settings = Settings::default();
        settings.llm.base_url = Some(base_url.to_string());
        settings.llm.timeout_seconds = 1;
        Self::start(settings).await
    }

    async fn start(settings: Settings) -> Self {
        let state = formforge::build_state(&settings).unwrap();
        let app = formforge::create_app(state, &settings);

        // Start server on random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestServer { addr, base_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a prompt and return the decoded response body
    pub async fn generate(&self, prompt: &str) -> serde_json::Value {
        let response = reqwest::Client::new()
            .post(self.url("/api/generate-form"))
            .json(&serde_json::json!({ "prompt": prompt }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        response.json().await.unwrap()
    }
}
