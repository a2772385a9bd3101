use clap::Parser;
use std::path::PathBuf;

use crate::llm::BackendKind;

/// Form builder server - turns plain-language prompts into structured forms
#[derive(Parser, Debug, Clone)]
#[command(name = "formforge", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "FORMFORGE_CONFIG", default_value = "formforge.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "FORMFORGE_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "FORMFORGE_PORT")]
    pub port: Option<u16>,

    /// Completion backend
    #[arg(long, env = "FORMFORGE_BACKEND", value_enum)]
    pub backend: Option<BackendKind>,

    /// Model name passed to the backend
    #[arg(long, env = "FORMFORGE_MODEL")]
    pub model: Option<String>,

    /// Backend base URL
    #[arg(long, env = "FORMFORGE_BASE_URL")]
    pub base_url: Option<String>,

    /// Serve template forms only, never calling the backend
    #[arg(long)]
    pub no_llm: bool,
}
