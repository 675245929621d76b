//! 回合制双智能体团队 - 检索与综述按固定顺序各执行一个回合

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::review::context::ReviewContext;

/// 固定的回合总数：检索一回合，综述一回合
pub const MAX_TURNS: usize = 2;

/// 回合归属
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnSource {
    #[serde(rename = "retrieval")]
    Retrieval,
    #[serde(rename = "synthesis")]
    Synthesis,
}

impl std::fmt::Display for TurnSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnSource::Retrieval => write!(f, "retrieval"),
            TurnSource::Synthesis => write!(f, "synthesis"),
        }
    }
}

/// 协作序列中单个参与者的一次发言，产出后不再修改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub source: TurnSource,
    pub content: String,
    pub sequence_index: usize,
}

/// 团队状态机
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamState {
    AwaitingRetrieval,
    AwaitingSynthesis,
    Done,
}

impl TeamState {
    /// 每产出一个回合推进一次状态
    fn advance(self) -> Self {
        match self {
            TeamState::AwaitingRetrieval => TeamState::AwaitingSynthesis,
            TeamState::AwaitingSynthesis => TeamState::Done,
            TeamState::Done => TeamState::Done,
        }
    }
}

/// 团队参与者接口
#[async_trait]
pub trait TeamParticipant: Send + Sync {
    /// 参与者名称，用于日志
    fn name(&self) -> &'static str;

    /// 该参与者产出回合的归属
    fn source(&self) -> TurnSource;

    /// 基于任务与上一回合的内容产出本回合内容
    async fn reply(
        &self,
        context: &ReviewContext,
        task: &str,
        previous: Option<&Turn>,
    ) -> Result<String>;
}

/// 回合制团队：按固定顺序依次激活参与者，任一参与者出错则整体失败
pub struct ReviewTeam {
    participants: Vec<Box<dyn TeamParticipant>>,
    state: TeamState,
}

impl ReviewTeam {
    /// 创建固定调度的双智能体团队：先检索，后综述
    pub fn new(retrieval: Box<dyn TeamParticipant>, synthesis: Box<dyn TeamParticipant>) -> Self {
        Self {
            participants: vec![retrieval, synthesis],
            state: TeamState::AwaitingRetrieval,
        }
    }

    /// 当前状态
    pub fn state(&self) -> TeamState {
        self.state
    }

    /// 执行全部回合。每个回合完整产出后经由可选的progress通道流式送出，
    /// 下一回合在上一回合完全物化之前不会开始。序列一次性，不可重放。
    pub async fn run_stream(
        &mut self,
        context: &ReviewContext,
        task: &str,
        progress: Option<&mpsc::Sender<Turn>>,
    ) -> Result<Vec<Turn>> {
        let mut turns: Vec<Turn> = Vec::with_capacity(MAX_TURNS);

        for (sequence_index, participant) in self.participants.iter().enumerate() {
            if turns.len() >= MAX_TURNS {
                break;
            }

            println!(
                "🤖 [{}] 开始第 {} 回合...",
                participant.name(),
                sequence_index + 1
            );

            let content = participant.reply(context, task, turns.last()).await?;
            let turn = Turn {
                source: participant.source(),
                content,
                sequence_index,
            };
            self.state = self.state.advance();

            if let Some(tx) = progress {
                // 消费端提前关闭不影响运行本身
                let _ = tx.send(turn.clone()).await;
            }

            println!("✓ [{}] 第 {} 回合完成", participant.name(), sequence_index + 1);
            turns.push(turn);
        }

        Ok(turns)
    }
}
