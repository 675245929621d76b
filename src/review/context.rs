use std::sync::Arc;

use anyhow::Result;

use crate::{arxiv::ArxivClient, config::Config, llm::client::LLMClient};

/// 评审运行上下文，两个智能体共享同一模型客户端与检索客户端
#[derive(Clone)]
pub struct ReviewContext {
    /// LLM调用器，用于与AI通信。
    pub llm_client: LLMClient,
    /// arXiv检索客户端
    pub arxiv_client: Arc<ArxivClient>,
    /// 配置
    pub config: Config,
}

impl ReviewContext {
    /// 创建新的评审上下文
    pub fn new(config: Config) -> Result<Self> {
        let llm_client = LLMClient::new(config.clone())?;
        let arxiv_client = Arc::new(ArxivClient::new(config.arxiv.clone())?);

        Ok(Self {
            llm_client,
            arxiv_client,
            config,
        })
    }
}
