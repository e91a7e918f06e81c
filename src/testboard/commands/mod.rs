use crate::config::TestboardConfig;
use crate::stats::{ExecutionStats, ResultStats};

pub mod config;
pub mod list;
pub mod options;
pub mod stats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Summary figures for one of the run lists.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardStats {
    Executions(ExecutionStats),
    Results(ResultStats),
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub stats: Option<BoardStats>,
    pub options: Vec<String>,
    pub config: Option<TestboardConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_stats(mut self, stats: BoardStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    pub fn with_config(mut self, config: TestboardConfig) -> Self {
        self.config = Some(config);
        self
    }
}
