use crate::commands::CmdMessage;
use crate::config::TestboardConfig;
use crate::error::{Result, TestboardError};
use crate::store::{self, DataStore};
use crate::view::{FilterEngine, FilterState, Paginator, Record, Schema};
use serde::de::DeserializeOwned;
use std::cell::Cell;

/// What the user did on a list screen, replayed in order.
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    /// `(field, value)` pairs, applied in order
    pub filters: Vec<(String, String)>,
    /// Sort header clicks, applied in order after the filters
    pub sorts: Vec<String>,
    /// 1-based page; the first page when absent
    pub page: Option<usize>,
    /// Overrides the configured page size
    pub per_page: Option<usize>,
}

/// One rendered page of a derived view.
#[derive(Debug, Clone)]
pub struct Listing<R> {
    /// Rows of the current page
    pub rows: Vec<R>,
    pub page: usize,
    pub total_pages: usize,
    /// Page numbers for the page bar
    pub window: Vec<usize>,
    /// 1-based position of the first row shown (0 when empty)
    pub first: usize,
    /// 1-based position of the last row shown (0 when empty)
    pub last: usize,
    /// Rows passing the filters
    pub matched: usize,
    /// Rows in the fetched list
    pub total: usize,
    pub state: FilterState,
    pub messages: Vec<CmdMessage>,
}

pub fn run<R, S>(store: &S, config: &TestboardConfig, request: &ListRequest) -> Result<Listing<R>>
where
    R: Record + DeserializeOwned + Clone,
    S: DataStore + ?Sized,
{
    let schema = R::schema();
    validate(schema, request)?;

    let records: Vec<R> = store::list(store)?;
    let total = records.len();
    let mut messages = Vec::new();

    let matched = Cell::new(0);
    let mut engine = FilterEngine::new(records, |view: &[&R]| matched.set(view.len()));
    let per_page = request
        .per_page
        .unwrap_or_else(|| config.page_size_for(schema.entity));
    let mut paginator = Paginator::new(per_page);

    for (field, value) in &request.filters {
        engine.set_filter_field(field, value);
        paginator.reset();
        if !value.trim().is_empty() && engine.state().get(field).is_some_and(|v| !v.is_active()) {
            messages.push(CmdMessage::warning(format!(
                "Ignoring {}: '{}' is not a valid value",
                field, value
            )));
        }
    }
    for key in &request.sorts {
        engine.set_sort(key);
    }

    let requested = request.page.unwrap_or(1);
    if !paginator.go_to(requested, matched.get()) {
        messages.push(CmdMessage::warning(format!(
            "Page {} does not exist, showing page {}",
            requested,
            paginator.current()
        )));
    }

    let view = engine.view();
    let page = paginator.page(view.as_slice());
    if page.total == 0 {
        let note = if engine.state().active_filters().next().is_some() {
            format!("No {} match the current filters.", schema.entity)
        } else {
            format!("No {} found.", schema.entity)
        };
        messages.push(CmdMessage::info(note));
    }

    Ok(Listing {
        rows: page.items.iter().map(|r| (*r).clone()).collect(),
        page: page.number,
        total_pages: page.total_pages,
        window: paginator.window(page.total, config.max_visible_pages),
        first: page.first,
        last: page.last,
        matched: page.total,
        total,
        state: engine.state().clone(),
        messages,
    })
}

fn validate(schema: &Schema, request: &ListRequest) -> Result<()> {
    if let Some((field, _)) = request
        .filters
        .iter()
        .find(|(field, _)| schema.field(field).is_none())
    {
        return Err(TestboardError::UnknownField {
            entity: schema.entity.to_string(),
            field: field.clone(),
        });
    }
    if let Some(key) = request.sorts.iter().find(|key| !schema.has_sort_key(key)) {
        return Err(TestboardError::UnknownSortKey {
            entity: schema.entity.to_string(),
            key: key.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::{Execution, User};
    use crate::store::memory::InMemoryStore;
    use crate::view::Direction;
    use serde_json::{json, Value};

    fn executions(count: i64) -> Value {
        let items: Vec<Value> = (1..=count)
            .map(|id| {
                json!({
                    "id": id,
                    "statut": if id % 3 == 0 { "error" } else { "done" },
                    "started_at": format!("2024-01-{:02}T10:00:00Z", id),
                })
            })
            .collect();
        Value::Array(items)
    }

    fn store(count: i64) -> InMemoryStore {
        InMemoryStore::new().with_collection("executions", executions(count))
    }

    fn ids(listing: &Listing<Execution>) -> Vec<i64> {
        listing.rows.iter().map(|e| e.id).collect()
    }

    fn request() -> ListRequest {
        ListRequest::default()
    }

    #[test]
    fn default_listing_is_newest_first_and_paginated() {
        let listing: Listing<Execution> =
            run(&store(25), &TestboardConfig::default(), &request()).unwrap();
        assert_eq!(listing.total, 25);
        assert_eq!(listing.matched, 25);
        assert_eq!(listing.total_pages, 3);
        assert_eq!(listing.rows.len(), 10);
        assert_eq!(ids(&listing)[0], 25);
        assert_eq!((listing.first, listing.last), (1, 10));
        assert_eq!(listing.window, vec![1, 2, 3]);
        assert!(listing.messages.is_empty());
    }

    #[test]
    fn filters_then_pages() {
        let req = ListRequest {
            filters: vec![("statut".into(), "error".into())],
            page: Some(2),
            per_page: Some(3),
            ..request()
        };
        let listing: Listing<Execution> =
            run(&store(25), &TestboardConfig::default(), &req).unwrap();
        // errors: 3, 6, ..., 24 -> 8 rows, newest first
        assert_eq!(listing.matched, 8);
        assert_eq!(ids(&listing), vec![15, 12, 9]);
        assert_eq!((listing.first, listing.last), (4, 6));
        assert_eq!(listing.total_pages, 3);
    }

    #[test]
    fn repeated_sort_clicks_toggle() {
        let req = ListRequest {
            sorts: vec!["started_at".into()],
            ..request()
        };
        let listing: Listing<Execution> = run(&store(4), &TestboardConfig::default(), &req).unwrap();
        assert_eq!(listing.state.sort().direction, Direction::Asc);
        assert_eq!(ids(&listing), vec![1, 2, 3, 4]);
    }

    #[test]
    fn out_of_range_page_is_clamped_with_warning() {
        let req = ListRequest {
            page: Some(9),
            ..request()
        };
        let listing: Listing<Execution> =
            run(&store(12), &TestboardConfig::default(), &req).unwrap();
        assert_eq!(listing.page, 2);
        assert_eq!(ids(&listing), vec![2, 1]);
        assert_eq!(listing.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn invalid_date_is_ignored_with_warning() {
        let req = ListRequest {
            filters: vec![("date_debut".into(), "15/01/2024".into())],
            ..request()
        };
        let listing: Listing<Execution> = run(&store(5), &TestboardConfig::default(), &req).unwrap();
        assert_eq!(listing.matched, 5);
        assert!(listing.messages[0].content.contains("date_debut"));
    }

    #[test]
    fn empty_view_gets_a_note() {
        let req = ListRequest {
            filters: vec![("projet".into(), "Nope".into())],
            ..request()
        };
        let listing: Listing<Execution> = run(&store(5), &TestboardConfig::default(), &req).unwrap();
        assert_eq!(listing.matched, 0);
        assert_eq!(listing.page, 1);
        assert_eq!(listing.total_pages, 0);
        assert!(listing.window.is_empty());
        assert_eq!(
            listing.messages[0].content,
            "No executions match the current filters."
        );
    }

    #[test]
    fn page_size_comes_from_config() {
        let users: Vec<Value> = (1..=10).map(|id| json!({"id": id})).collect();
        let store = InMemoryStore::new().with_collection("users", Value::Array(users));
        let listing: Listing<User> = run(&store, &TestboardConfig::default(), &request()).unwrap();
        assert_eq!(listing.rows.len(), 7);
        assert_eq!(listing.total_pages, 2);
    }

    #[test]
    fn unknown_field_and_sort_key_are_rejected() {
        let req = ListRequest {
            filters: vec![("societe".into(), "Acme".into())],
            ..request()
        };
        let err = run::<Execution, _>(&store(1), &TestboardConfig::default(), &req).unwrap_err();
        assert!(matches!(err, TestboardError::UnknownField { .. }));

        let req = ListRequest {
            sorts: vec!["email".into()],
            ..request()
        };
        let err = run::<Execution, _>(&store(1), &TestboardConfig::default(), &req).unwrap_err();
        assert!(matches!(err, TestboardError::UnknownSortKey { .. }));
    }
}
