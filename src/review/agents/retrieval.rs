//! 检索智能体 - 构造arXiv查询、过量抓取并圈选候选论文

use anyhow::Result;
use async_trait::async_trait;

use crate::llm::tools::arxiv_search::AgentToolArxivSearch;
use crate::review::context::ReviewContext;
use crate::review::team::{TeamParticipant, Turn, TurnSource};

/// 过量检索倍数：先抓取所需数量的数倍候选，再由模型圈选最相关的
pub const OVERFETCH_FACTOR: usize = 5;

/// 工具调用的最大推理轮数
const MAX_TOOL_ITERATIONS: usize = 6;

/// 检索智能体，产出第一回合的论文清单
pub struct RetrievalAgent {
    search_tool: AgentToolArxivSearch,
}

impl RetrievalAgent {
    pub fn new(search_tool: AgentToolArxivSearch) -> Self {
        Self { search_tool }
    }

    /// 系统提示词：查询构造与圈选策略均委托给模型推理
    pub fn system_prompt() -> String {
        format!(
            r#"Given a user topic, think of the best arXiv query and call the
provided arxiv_search tool. Always fetch {OVERFETCH_FACTOR} times the number of papers
requested so that you can down-select the most relevant ones. When the
tool returns, choose exactly the number of papers requested and emit
them as a concise JSON list, one object per paper with the fields
title, authors, published, summary and pdf_url. If the tool returns
fewer papers than requested, emit all of them; if it returns none,
emit an empty JSON list. Never invent papers. Output the JSON only."#
        )
    }
}

#[async_trait]
impl TeamParticipant for RetrievalAgent {
    fn name(&self) -> &'static str {
        "retrieval_agent"
    }

    fn source(&self) -> TurnSource {
        TurnSource::Retrieval
    }

    async fn reply(
        &self,
        context: &ReviewContext,
        task: &str,
        _previous: Option<&Turn>,
    ) -> Result<String> {
        context
            .llm_client
            .prompt_with_search(
                &Self::system_prompt(),
                task,
                &self.search_tool,
                MAX_TOOL_ITERATIONS,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_mentions_overfetch() {
        let prompt = RetrievalAgent::system_prompt();
        assert!(prompt.contains("5 times"));
        assert!(prompt.contains("arxiv_search"));
        assert!(prompt.contains("down-select"));
    }

    #[test]
    fn test_system_prompt_tolerates_shortfall() {
        let prompt = RetrievalAgent::system_prompt();
        assert!(prompt.contains("fewer papers"));
        assert!(prompt.contains("empty JSON list"));
    }
}
