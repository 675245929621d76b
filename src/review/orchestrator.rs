//! 评审运行编排器 - 驱动团队执行、聚合综述产出并完成落盘

use anyhow::{Result, bail};
use chrono::{DateTime, Local};
use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::exports;
use crate::llm::tools::arxiv_search::AgentToolArxivSearch;
use crate::review::agents::retrieval::RetrievalAgent;
use crate::review::agents::synthesis::SynthesisAgent;
use crate::review::context::ReviewContext;
use crate::review::team::{MAX_TURNS, ReviewTeam, Turn, TurnSource};

/// 单次评审请求，每次运行临时构造
#[derive(Debug, Clone)]
pub struct ReviewRequest {
    /// 综述主题
    pub topic: String,
    /// 要求收录的论文数量，至少为1
    pub requested_paper_count: usize,
    /// 模型标识，透传配置
    pub model: String,
}

/// 一次完整评审运行的结果，综述回合完成且文档落盘后才构造
#[derive(Debug, Clone)]
pub struct ReviewRun {
    pub topic: String,
    pub requested_paper_count: usize,
    pub model_identifier: String,
    pub timestamp: DateTime<Local>,
    /// 最终Markdown文档（已去除首尾空白）
    pub final_document: String,
    pub export_path: PathBuf,
}

/// 文档已生成但落盘失败时的错误，携带文档本身供调用方恢复
#[derive(Debug, thiserror::Error)]
#[error("评审文档落盘失败: {source}")]
pub struct ExportFailure {
    /// 已生成的最终文档
    pub document: String,
    #[source]
    pub source: exports::ExportError,
}

/// 评审过程中的流式事件
#[derive(Debug)]
pub enum ReviewEvent {
    /// 单个回合完整产出
    TurnCompleted(Turn),
    /// 运行成功，附带最终结果
    Completed(ReviewRun),
    /// 运行失败，两回合流水线中任一环节出错都会中止整次运行
    Failed(String),
}

/// 评审编排器
pub struct ReviewOrchestrator {
    context: ReviewContext,
}

impl ReviewOrchestrator {
    pub fn new(context: ReviewContext) -> Self {
        Self { context }
    }

    /// 构造固定调度的双智能体团队，两个智能体绑定同一共享模型客户端
    fn build_team(&self) -> ReviewTeam {
        let search_tool = AgentToolArxivSearch::new(self.context.arxiv_client.clone());
        ReviewTeam::new(
            Box::new(RetrievalAgent::new(search_tool)),
            Box::new(SynthesisAgent),
        )
    }

    /// 构造任务提示词，主题与论文数量原样嵌入
    pub fn build_task_prompt(request: &ReviewRequest) -> String {
        format!(
            "Conduct a literature review on **{}** and return exactly {} papers.",
            request.topic, request.requested_paper_count
        )
    }

    fn validate(request: &ReviewRequest) -> Result<()> {
        if request.requested_paper_count < 1 {
            bail!("要求收录的论文数量至少为1");
        }
        Ok(())
    }

    /// 仅累计综述回合的内容，回合间以换行连接，最后去除首尾空白。
    /// 双回合调度下恰为综述回合的内容，但聚合规则容忍综述跨多回合的设计。
    pub fn collect_final_document(turns: &[Turn]) -> String {
        turns
            .iter()
            .filter(|turn| turn.source == TurnSource::Synthesis)
            .map(|turn| turn.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }

    /// 驱动一次评审直至完成，返回最终结果
    pub async fn run(&self, request: &ReviewRequest) -> Result<ReviewRun> {
        let mut team = self.build_team();
        self.run_team(&mut team, request, None).await
    }

    /// 以指定团队执行一次评审。成功时恰好新建一个导出文件，失败则不落盘。
    pub(crate) async fn run_team(
        &self,
        team: &mut ReviewTeam,
        request: &ReviewRequest,
        progress: Option<&mpsc::Sender<Turn>>,
    ) -> Result<ReviewRun> {
        Self::validate(request)?;

        println!(
            "🚀 开始生成文献综述: {} (收录 {} 篇论文)",
            request.topic, request.requested_paper_count
        );

        let task = Self::build_task_prompt(request);
        let turns = team.run_stream(&self.context, &task, progress).await?;
        let final_document = Self::collect_final_document(&turns);

        // 时间戳在全部回合完成后采集，秒级精度下正常运行不会碰撞
        let timestamp = Local::now();
        let export_path =
            exports::save_review(&self.context.config.export_dir, &final_document, &timestamp)
                .map_err(|source| ExportFailure {
                    document: final_document.clone(),
                    source,
                })?;

        Ok(ReviewRun {
            topic: request.topic.clone(),
            requested_paper_count: request.requested_paper_count,
            model_identifier: request.model.clone(),
            timestamp,
            final_document,
            export_path,
        })
    }

    /// 流式运行：后台驱动评审，消费者按事件到达渐进渲染。
    /// 回合事件先于终态事件送达，文档内容在落盘之前就已经过回合事件交付。
    pub fn stream(self, request: ReviewRequest) -> mpsc::Receiver<ReviewEvent> {
        let team = self.build_team();
        self.stream_with_team(team, request)
    }

    /// 以指定团队流式运行。全部回合事件送达后，恰好发出一个终态事件。
    pub(crate) fn stream_with_team(
        self,
        mut team: ReviewTeam,
        request: ReviewRequest,
    ) -> mpsc::Receiver<ReviewEvent> {
        let (event_tx, event_rx) = mpsc::channel(MAX_TURNS + 1);

        tokio::spawn(async move {
            let (turn_tx, mut turn_rx) = mpsc::channel::<Turn>(MAX_TURNS);

            let forward_tx = event_tx.clone();
            let forwarder = tokio::spawn(async move {
                while let Some(turn) = turn_rx.recv().await {
                    let _ = forward_tx.send(ReviewEvent::TurnCompleted(turn)).await;
                }
            });

            let outcome = self.run_team(&mut team, &request, Some(&turn_tx)).await;
            drop(turn_tx);
            let _ = forwarder.await;

            let event = match outcome {
                Ok(run) => ReviewEvent::Completed(run),
                Err(e) => ReviewEvent::Failed(format!("{:#}", e)),
            };
            let _ = event_tx.send(event).await;
        });

        event_rx
    }
}
