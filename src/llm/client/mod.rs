//! LLM客户端 - 提供统一的LLM服务接口

use anyhow::Result;
use std::future::Future;

use crate::{config::Config, llm::tools::arxiv_search::AgentToolArxivSearch};

mod providers;

use providers::ProviderClient;

/// LLM客户端，检索与综述两个智能体共享同一实例
#[derive(Clone)]
pub struct LLMClient {
    config: Config,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: Config) -> Result<Self> {
        let client = ProviderClient::new(&config.llm)?;
        Ok(Self { client, config })
    }

    /// 检查模型连接和功能是否正常
    pub async fn check_connection(&self) -> Result<()> {
        println!("🔄 正在检查模型连接...");
        // 使用一个简单的prompt来测试连接
        match self
            .prompt("System: You are a helpful assistant.", "Hello")
            .await
        {
            Ok(_) => {
                println!("✅ 模型连接正常");
                Ok(())
            }
            Err(e) => {
                eprintln!("❌ 模型连接失败: {}", e);
                Err(e)
            }
        }
    }

    /// 通用重试逻辑，用于处理异步操作的重试机制
    async fn retry_with_backoff<T, F, Fut>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, anyhow::Error>>,
    {
        let llm_config = &self.config.llm;
        let max_retries = llm_config.retry_attempts;
        let retry_delay_ms = llm_config.retry_delay_ms;
        let mut retries = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(err) => {
                    retries += 1;
                    eprintln!(
                        "❌ 调用模型服务出错，重试中 (第 {} / {}次尝试): {}",
                        retries, max_retries, err
                    );
                    if retries >= max_retries {
                        return Err(err);
                    }
                    tokio::time::sleep(std::time::Duration::from_millis(retry_delay_ms)).await;
                }
            }
        }
    }

    /// 单轮对话方法（不使用工具）
    pub async fn prompt(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let agent = self
            .client
            .create_agent(&self.config.llm.model, system_prompt, &self.config.llm);

        self.retry_with_backoff(|| async { agent.prompt(user_prompt).await })
            .await
    }

    /// 带文献检索工具的多轮对话方法，模型可自主决定何时调用检索
    pub async fn prompt_with_search(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        search_tool: &AgentToolArxivSearch,
        max_iterations: usize,
    ) -> Result<String> {
        let agent = self.client.create_agent_with_search(
            &self.config.llm.model,
            system_prompt,
            &self.config.llm,
            search_tool,
        );

        self.retry_with_backoff(|| async {
            agent
                .multi_turn(user_prompt, max_iterations)
                .await
                .map_err(|e| e.into())
        })
        .await
    }
}
