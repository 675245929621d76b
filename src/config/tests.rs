#[cfg(test)]
mod tests {
    use crate::config::{ArxivConfig, Config, LLMConfig, LLMProvider};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.export_dir, PathBuf::from("./exports"));
        assert_eq!(config.default_paper_count, 4);
        assert!(!config.verbose);
    }

    #[test]
    fn test_default_llm_config() {
        let llm = LLMConfig::default();

        assert_eq!(llm.provider, LLMProvider::Gemini);
        assert_eq!(llm.model, "gemini-2.5-flash");
        assert_eq!(llm.max_tokens, 16384);
        assert_eq!(llm.temperature, 0.2);
        assert_eq!(llm.retry_attempts, 3);
        assert_eq!(llm.retry_delay_ms, 3000);
        assert_eq!(llm.timeout_seconds, 120);
    }

    #[test]
    fn test_default_arxiv_config() {
        let arxiv = ArxivConfig::default();

        assert_eq!(arxiv.api_base_url, "https://export.arxiv.org/api/query");
        assert_eq!(arxiv.request_interval_ms, 3000);
        assert_eq!(arxiv.timeout_seconds, 30);
    }

    #[test]
    fn test_provider_from_str() {
        assert_eq!("openai".parse::<LLMProvider>(), Ok(LLMProvider::OpenAI));
        assert_eq!("Anthropic".parse::<LLMProvider>(), Ok(LLMProvider::Anthropic));
        assert_eq!("GEMINI".parse::<LLMProvider>(), Ok(LLMProvider::Gemini));
        assert_eq!("deepseek".parse::<LLMProvider>(), Ok(LLMProvider::DeepSeek));
        assert_eq!("ollama".parse::<LLMProvider>(), Ok(LLMProvider::Ollama));
        assert!("invalid".parse::<LLMProvider>().is_err());
    }

    #[test]
    fn test_provider_display_roundtrip() {
        for provider in [
            LLMProvider::OpenAI,
            LLMProvider::Anthropic,
            LLMProvider::Gemini,
            LLMProvider::DeepSeek,
            LLMProvider::Ollama,
        ] {
            let parsed = provider.to_string().parse::<LLMProvider>().unwrap();
            assert_eq!(parsed, provider);
        }
    }

    #[test]
    fn test_from_file_valid() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("litreview.toml");

        let content = r#"
export_dir = "/tmp/reviews"
default_paper_count = 6
verbose = true

[llm]
provider = "openai"
api_key = "test-key"
api_base_url = "https://api.openai.com/v1"
model = "gpt-4o"
max_tokens = 8192
temperature = 0.5
retry_attempts = 2
retry_delay_ms = 1000
timeout_seconds = 60

[arxiv]
api_base_url = "https://export.arxiv.org/api/query"
request_interval_ms = 500
timeout_seconds = 15
"#;
        fs::write(&config_path, content).unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.export_dir, PathBuf::from("/tmp/reviews"));
        assert_eq!(config.default_paper_count, 6);
        assert!(config.verbose);
        assert_eq!(config.llm.provider, LLMProvider::OpenAI);
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.max_tokens, 8192);
        assert_eq!(config.arxiv.request_interval_ms, 500);
    }

    #[test]
    fn test_from_file_partial_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("litreview.toml");

        // 只覆盖模型标识，其余配置项取默认值
        let content = r#"
[llm]
model = "gpt-4o"
"#;
        fs::write(&config_path, content).unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.provider, LLMProvider::Gemini);
        assert_eq!(config.export_dir, PathBuf::from("./exports"));
        assert_eq!(config.default_paper_count, 4);
        assert_eq!(config.arxiv.request_interval_ms, 3000);
    }

    #[test]
    fn test_from_file_missing() {
        let path = PathBuf::from("/nonexistent/litreview.toml");
        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn test_from_file_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("litreview.toml");
        fs::write(&config_path, "not valid toml {{{{").unwrap();

        assert!(Config::from_file(&config_path).is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let restored: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(restored.export_dir, config.export_dir);
        assert_eq!(restored.default_paper_count, config.default_paper_count);
        assert_eq!(restored.llm.provider, config.llm.provider);
        assert_eq!(restored.llm.model, config.llm.model);
        assert_eq!(restored.arxiv.api_base_url, config.arxiv.api_base_url);
    }
}
