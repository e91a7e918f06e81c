use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TestboardError};
use crate::stats::distinct_options;
use crate::store::{self, DataStore};
use crate::view::Record;
use serde::de::DeserializeOwned;

/// Values offered by the dropdown of one filter field.
pub fn run<R, S>(store: &S, field: &str) -> Result<CmdResult>
where
    R: Record + DeserializeOwned,
    S: DataStore + ?Sized,
{
    let schema = R::schema();
    if schema.field(field).is_none() {
        return Err(TestboardError::UnknownField {
            entity: schema.entity.to_string(),
            field: field.to_string(),
        });
    }

    let records: Vec<R> = store::list(store)?;
    let options = distinct_options(&records, field);
    let mut result = CmdResult::default();
    if options.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No values for {} in {}.",
            field, schema.entity
        )));
    }
    Ok(result.with_options(options))
}
