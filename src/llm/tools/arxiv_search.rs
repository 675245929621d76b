//! arXiv文献检索工具

use rig::tool::Tool;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::arxiv::{ArxivClient, ArxivError, PaperRecord, SearchQuery};

/// 文献检索工具，包装arXiv客户端供模型调用
#[derive(Clone)]
pub struct AgentToolArxivSearch {
    client: Arc<ArxivClient>,
}

/// 检索参数
#[derive(Debug, Deserialize)]
pub struct ArxivSearchArgs {
    pub query: String,
    pub max_results: Option<usize>,
}

/// 检索结果
#[derive(Debug, Serialize)]
pub struct ArxivSearchResult {
    pub papers: Vec<PaperRecord>,
    pub total_count: usize,
}

/// 检索工具错误
#[derive(Debug, thiserror::Error)]
#[error("arXiv检索工具执行失败: {0}")]
pub struct ArxivSearchToolError(#[from] ArxivError);

impl AgentToolArxivSearch {
    pub fn new(client: Arc<ArxivClient>) -> Self {
        Self { client }
    }
}

impl Tool for AgentToolArxivSearch {
    const NAME: &'static str = "arxiv_search";

    type Error = ArxivSearchToolError;
    type Args = ArxivSearchArgs;
    type Output = ArxivSearchResult;

    async fn definition(&self, _prompt: String) -> rig::completion::ToolDefinition {
        rig::completion::ToolDefinition {
            name: Self::NAME.to_string(),
            description:
                "检索arXiv并返回至多max_results篇论文，每篇包含title、authors、published、summary和pdf_url。"
                    .to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "arXiv检索查询语句"
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "最多返回的论文数量（默认为25）"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        println!("   🔧 tool called...arxiv_search@{:?}", args);

        let query = SearchQuery {
            text: args.query,
            max_results: args.max_results.unwrap_or(25),
        };

        let papers = self.client.search(&query).await?;
        let total_count = papers.len();

        Ok(ArxivSearchResult {
            papers,
            total_count,
        })
    }
}
