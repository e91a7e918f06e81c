//! The derived-view engine.
//!
//! [`derive`] is the whole algorithm: keep the records that pass every
//! active filter, then stable-sort them by the active key. [`FilterEngine`]
//! wraps it with the state a list screen holds and reports every new view
//! to a callback.

use super::filter::{FilterState, SortState};
use super::record::Record;
use super::schema::Direction;
use std::cmp::Ordering;

/// Filter and sort `records` under `state`.
///
/// Ties keep their relative input order in both directions.
pub fn derive<'a, R: Record>(records: &'a [R], state: &FilterState) -> Vec<&'a R> {
    let mut view: Vec<&R> = records.iter().filter(|r| state.matches(*r)).collect();
    let sort = state.sort();
    view.sort_by(|a, b| compare(*a, *b, sort));
    view
}

fn compare<R: Record>(a: &R, b: &R, sort: &SortState) -> Ordering {
    let ord = a.sort_value(&sort.key).cmp(&b.sort_value(&sort.key));
    match sort.direction {
        Direction::Asc => ord,
        Direction::Desc => ord.reverse(),
    }
}

/// A list screen's filter state over a source list.
///
/// The engine recomputes the view synchronously after construction, after
/// every mutator and after the source list is replaced, and hands it to
/// `on_change`. Nothing is cached between computations.
pub struct FilterEngine<R, F>
where
    R: Record,
    F: FnMut(&[&R]),
{
    source: Vec<R>,
    state: FilterState,
    on_change: F,
}

impl<R, F> FilterEngine<R, F>
where
    R: Record,
    F: FnMut(&[&R]),
{
    pub fn new(source: Vec<R>, on_change: F) -> Self {
        let mut engine = Self {
            source,
            state: FilterState::new(R::schema()),
            on_change,
        };
        engine.recompute();
        engine
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn source(&self) -> &[R] {
        &self.source
    }

    pub fn set_filter_field(&mut self, field: &str, value: &str) {
        self.state.set_field(field, value);
        self.recompute();
    }

    pub fn set_sort(&mut self, key: &str) {
        self.state.set_sort(key);
        self.recompute();
    }

    pub fn clear(&mut self) {
        self.state.clear();
        self.recompute();
    }

    /// Swap in a freshly fetched list, keeping the current filters.
    pub fn replace_source(&mut self, source: Vec<R>) {
        self.source = source;
        self.recompute();
    }

    /// The current view, computed on demand.
    pub fn view(&self) -> Vec<&R> {
        derive(&self.source, &self.state)
    }

    fn recompute(&mut self) {
        let view = derive(&self.source, &self.state);
        tracing::debug!(
            entity = R::schema().entity,
            shown = view.len(),
            total = self.source.len(),
            sort = %self.state.sort().key,
            direction = %self.state.sort().direction,
            "recomputed view"
        );
        (self.on_change)(&view);
    }
}
