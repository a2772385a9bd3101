use formforge::config::Settings;
use formforge::llm::BackendKind;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_full_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("formforge.toml");

    let formforge_toml = r#"
[server]
host = "0.0.0.0"
port = 8080

[llm]
backend = "openai"
model = "gpt-4o-mini"
api_key_env = "MY_OPENAI_KEY"
temperature = 0.5
max_tokens = 800
timeout_seconds = 10

[generation]
llm_enabled = false

[rate_limit]
enabled = true
requests_per_second = 5
burst_size = 10
"#;
    fs::write(&path, formforge_toml)?;

    let settings = Settings::from_path(&path)?;

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.llm.backend, BackendKind::OpenAI);
    assert_eq!(settings.llm.model(), "gpt-4o-mini");
    assert_eq!(settings.llm.api_key_env(), "MY_OPENAI_KEY");
    assert_eq!(settings.llm.temperature, 0.5);
    assert_eq!(settings.llm.top_p, 0.8);
    assert_eq!(settings.llm.max_tokens, 800);
    assert_eq!(settings.llm.timeout_seconds, 10);
    assert!(!settings.generation.llm_enabled);

    let rate_limit = settings.rate_limit.unwrap();
    assert!(rate_limit.enabled);
    assert_eq!(rate_limit.requests_per_second, 5);
    assert_eq!(rate_limit.burst_size, 10);

    Ok(())
}

#[test]
fn test_partial_config_uses_defaults() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("formforge.toml");
    fs::write(&path, "[llm]\nbase_url = \"http://gpu-box:11434/\"\n")?;

    let settings = Settings::from_path(&path)?;

    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.llm.backend, BackendKind::Ollama);
    assert_eq!(settings.llm.model(), "llama3.2:3b");
    assert_eq!(settings.llm.base_url(), "http://gpu-box:11434");
    assert!(settings.generation.llm_enabled);

    Ok(())
}

#[test]
fn test_invalid_values_are_all_reported() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("formforge.toml");
    fs::write(
        &path,
        "[server]\nhost = \"\"\nport = 0\n\n[llm]\ntemperature = 3.0\n",
    )?;

    let err = Settings::from_path(&path).unwrap_err().to_string();

    assert!(err.contains("Configuration validation failed"));
    assert!(err.contains("server.host"));
    assert!(err.contains("server.port"));
    assert!(err.contains("llm.temperature"));

    Ok(())
}

#[test]
fn test_unknown_backend_fails_to_load() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("formforge.toml");
    fs::write(&path, "[llm]\nbackend = \"anthropic\"\n")?;

    assert!(Settings::from_path(&path).is_err());

    Ok(())
}
