//! 文献综述评审域 - 智能体团队、编排器与运行上下文

pub mod agents;
pub mod context;
pub mod orchestrator;
pub mod team;

use anyhow::{Result, bail};

use crate::config::Config;
use crate::exports;
use context::ReviewContext;
use orchestrator::{ReviewEvent, ReviewOrchestrator, ReviewRequest};

/// 启动一次完整的文献综述流程：连接检查、流式执行、结果展示
pub async fn launch(config: &Config, request: &ReviewRequest) -> Result<()> {
    let verbose = config.verbose;
    let export_dir = config.export_dir.clone();

    let context = ReviewContext::new(config.clone())?;
    context.llm_client.check_connection().await?;

    let orchestrator = ReviewOrchestrator::new(context);
    let mut events = orchestrator.stream(request.clone());

    while let Some(event) = events.recv().await {
        match event {
            ReviewEvent::TurnCompleted(turn) => {
                if verbose {
                    println!("💬 [{}] 回合内容:\n{}\n", turn.source, turn.content);
                }
            }
            ReviewEvent::Completed(run) => {
                println!("\n{}\n", run.final_document);
                println!("✅ 评审完成，文档已导出: {}", run.export_path.display());
                if let Ok(latest) = exports::latest_export(&export_dir) {
                    println!("⬇️ 最近一次导出: {}", latest.display());
                }
            }
            ReviewEvent::Failed(message) => {
                bail!("评审流程执行失败: {}", message);
            }
        }
    }

    Ok(())
}
