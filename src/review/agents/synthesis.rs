//! 综述智能体 - 将论文清单渲染为固定模板的Markdown综述

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use crate::review::context::ReviewContext;
use crate::review::team::{TeamParticipant, Turn, TurnSource};

/// 综述智能体，消费检索回合的论文清单，产出最终Markdown文档
#[derive(Default)]
pub struct SynthesisAgent;

impl SynthesisAgent {
    /// 系统提示词：固定的章节模板契约
    pub fn system_prompt() -> &'static str {
        r#"You are an expert researcher writing literature reviews in Markdown format.

When given a JSON list of papers, generate a clean, structured Markdown report:

1. Start with a 2-3 sentence introduction summarizing the research theme or domain.
2. Then, for each paper, include a well-formatted bullet with:
    - Title (as a Markdown link using the `pdf_url`)
    - Authors
    - Publication date
    - Abstract
    - Specific problem addressed
    - Key contributions or results

Use the following format:

### 📚 Literature Review on <Insert Topic>

<Brief introduction>

#### 🔍 Reviewed Papers

- **[Title](pdf_url)**
  - **Authors:** A, B, C
  - **Published:** YYYY-MM-DD
  - **Abstract:** ...
  - **Problem:** ...
  - **Contributions:** ...

#### ✅ Summary Takeaway
<1-sentence conclusion>

Every provided paper must appear exactly once and no paper may be
invented. If the list is empty, still emit the full section structure
with no bullets. All responses must be in valid Markdown."#
    }
}

#[async_trait]
impl TeamParticipant for SynthesisAgent {
    fn name(&self) -> &'static str {
        "synthesis_agent"
    }

    fn source(&self) -> TurnSource {
        TurnSource::Synthesis
    }

    async fn reply(
        &self,
        context: &ReviewContext,
        task: &str,
        previous: Option<&Turn>,
    ) -> Result<String> {
        let payload = previous
            .filter(|turn| turn.source == TurnSource::Retrieval)
            .map(|turn| turn.content.as_str())
            .ok_or_else(|| anyhow!("综述智能体缺少检索回合的论文清单"))?;

        let user_prompt = format!("{}\n\nPapers:\n{}", task, payload);
        context
            .llm_client
            .prompt(Self::system_prompt(), &user_prompt)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_section_contract() {
        let prompt = SynthesisAgent::system_prompt();
        assert!(prompt.contains("### 📚 Literature Review on"));
        assert!(prompt.contains("#### 🔍 Reviewed Papers"));
        assert!(prompt.contains("#### ✅ Summary Takeaway"));
    }

    #[test]
    fn test_system_prompt_forbids_invention() {
        let prompt = SynthesisAgent::system_prompt();
        assert!(prompt.contains("exactly once"));
        assert!(prompt.contains("no paper may be\ninvented"));
        assert!(prompt.contains("If the list is empty"));
    }
}
