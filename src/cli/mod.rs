use crate::config::{Config, LLMProvider};
use crate::review::orchestrator::ReviewRequest;
use clap::Parser;
use std::path::PathBuf;

/// LitReview-RS - 由Rust与AI驱动的文献综述生成引擎
#[derive(Parser, Debug)]
#[command(name = "litreview-rs")]
#[command(
    about = "AI-based literature review generator. It retrieves candidate papers from arXiv, down-selects the most relevant ones, and synthesizes a structured Markdown review."
)]
#[command(author = "Sopaco")]
#[command(version)]
pub struct Args {
    /// 综述主题
    #[arg(short, long)]
    pub topic: String,

    /// 收录论文数量
    #[arg(short, long)]
    pub num_papers: Option<usize>,

    /// 模型标识
    #[arg(short, long)]
    pub model: Option<String>,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 导出目录
    #[arg(short, long)]
    pub export_dir: Option<PathBuf>,

    /// LLM Provider (openai, anthropic, gemini, deepseek, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数转换为配置与评审请求
    pub fn into_config(self) -> (Config, ReviewRequest) {
        let mut config = if let Some(config_path) = &self.config {
            // 如果显式指定了配置文件路径，从该路径加载
            Config::from_file(config_path)
                .unwrap_or_else(|_| panic!("⚠️ 警告: 无法读取配置文件 {:?}", config_path))
        } else {
            // 如果没有显式指定配置文件，尝试从默认位置加载
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| std::path::PathBuf::from("."))
                .join("litreview.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path).unwrap_or_else(|_| {
                    panic!("⚠️ 警告: 无法读取默认配置文件 {:?}", default_config_path)
                })
            } else {
                // 默认配置文件不存在，使用默认值
                Config::default()
            }
        };

        // 覆盖配置文件中的设置
        if let Some(export_dir) = self.export_dir {
            config.export_dir = export_dir;
        }

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的provider: {}，使用默认provider",
                    provider_str
                );
            }
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(model) = self.model.clone() {
            config.llm.model = model;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }
        config.verbose = self.verbose;

        let request = ReviewRequest {
            topic: self.topic,
            requested_paper_count: self.num_papers.unwrap_or(config.default_paper_count),
            model: config.llm.model.clone(),
        };

        (config, request)
    }
}
