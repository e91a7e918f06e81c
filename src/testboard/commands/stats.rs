use crate::commands::{BoardStats, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Execution, ExecutionResult};
use crate::stats::{ExecutionStats, ResultStats};
use crate::store::{self, DataStore};

pub fn executions<S: DataStore + ?Sized>(store: &S) -> Result<CmdResult> {
    let list: Vec<Execution> = store::list(store)?;
    let mut result =
        CmdResult::default().with_stats(BoardStats::Executions(ExecutionStats::compute(&list)));
    if list.is_empty() {
        result.add_message(CmdMessage::info("No executions recorded."));
    }
    Ok(result)
}

pub fn results<S: DataStore + ?Sized>(store: &S) -> Result<CmdResult> {
    let list: Vec<ExecutionResult> = store::list(store)?;
    let mut result =
        CmdResult::default().with_stats(BoardStats::Results(ResultStats::compute(&list)));
    if list.is_empty() {
        result.add_message(CmdMessage::info("No results recorded."));
    }
    Ok(result)
}
