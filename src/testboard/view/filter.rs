//! Filter state and predicates.
//!
//! `FilterState` holds one value per filter field of a [`Schema`] plus the
//! active sort. Every field always has a value: clearing restores the
//! inactive defaults rather than removing entries.

use super::record::Record;
use super::schema::{Direction, FilterKind, Schema};
use super::value::{timestamp_date, FilterValue, Target};

/// The active sort key and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub key: String,
    pub direction: Direction,
}

#[derive(Debug, Clone)]
pub struct FilterState {
    schema: &'static Schema,
    // Parallel to `schema.fields`.
    values: Vec<FilterValue>,
    sort: SortState,
}

impl PartialEq for FilterState {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.schema, other.schema)
            && self.values == other.values
            && self.sort == other.sort
    }
}

impl FilterState {
    /// A state with every field at its default.
    pub fn new(schema: &'static Schema) -> Self {
        Self {
            schema,
            values: schema
                .fields
                .iter()
                .map(|spec| FilterValue::default_for(spec.kind))
                .collect(),
            sort: SortState {
                key: schema.default_sort.to_string(),
                direction: schema.default_direction,
            },
        }
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn get(&self, field: &str) -> Option<&FilterValue> {
        self.position(field).map(|i| &self.values[i])
    }

    /// Update one filter field from user input.
    ///
    /// The input is coerced to the field's value type; it is never rejected.
    /// Unknown field names are ignored.
    pub fn set_field(&mut self, field: &str, raw: &str) {
        match self.position(field) {
            Some(i) => {
                self.values[i] = FilterValue::coerce(self.schema.fields[i].kind, raw);
            }
            None => {
                tracing::debug!(
                    entity = self.schema.entity,
                    field,
                    "ignoring unknown filter field"
                );
            }
        }
    }

    /// Click on a sort header.
    ///
    /// Clicking the active key flips the direction. Clicking another key
    /// selects it and always starts descending, whatever the previous
    /// direction was.
    pub fn set_sort(&mut self, key: &str) {
        if self.sort.key == key {
            self.sort.direction = self.sort.direction.toggled();
        } else {
            self.sort = SortState {
                key: key.to_string(),
                direction: Direction::Desc,
            };
        }
    }

    /// Restore every field and the sort to the schema defaults.
    pub fn clear(&mut self) {
        *self = Self::new(self.schema);
    }

    pub fn is_default(&self) -> bool {
        *self == Self::new(self.schema)
    }

    /// Fields currently narrowing the list, in schema order.
    pub fn active_filters(&self) -> impl Iterator<Item = (&'static str, &FilterValue)> + '_ {
        self.schema
            .fields
            .iter()
            .zip(&self.values)
            .filter(|(_, value)| value.is_active())
            .map(|(spec, value)| (spec.name, value))
    }

    /// Whether a record passes every active filter.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.schema
            .fields
            .iter()
            .zip(&self.values)
            .filter(|(_, value)| value.is_active())
            .all(|(spec, value)| field_matches(spec.kind, value, &record.target(spec.name)))
    }

    fn position(&self, field: &str) -> Option<usize> {
        self.schema.fields.iter().position(|spec| spec.name == field)
    }
}

fn field_matches(kind: FilterKind, value: &FilterValue, target: &Target<'_>) -> bool {
    match (kind, value) {
        (FilterKind::Exact, FilterValue::Text(wanted)) => match target {
            Target::Text(s) => s == wanted,
            Target::Texts(list) => list.iter().any(|s| s == wanted),
            _ => false,
        },
        (FilterKind::Contains, FilterValue::Text(needle)) => {
            let needle = needle.to_lowercase();
            match target {
                Target::Text(s) => s.to_lowercase().contains(&needle),
                Target::Texts(list) => list.iter().any(|s| s.to_lowercase().contains(&needle)),
                _ => false,
            }
        }
        (FilterKind::Role { on, off }, FilterValue::Text(choice)) => {
            let wanted = if choice == on {
                true
            } else if choice == off {
                false
            } else {
                return true;
            };
            matches!(target, Target::Flag(flag) if *flag == wanted)
        }
        (FilterKind::DateFrom, FilterValue::Date(Some(bound))) => match target {
            Target::Timestamp(raw) => timestamp_date(*raw).is_some_and(|day| day >= *bound),
            _ => false,
        },
        (FilterKind::DateTo, FilterValue::Date(Some(bound))) => match target {
            Target::Timestamp(raw) => timestamp_date(*raw).is_some_and(|day| day <= *bound),
            _ => false,
        },
        (FilterKind::Id, FilterValue::Id(Some(wanted))) => {
            matches!(target, Target::Id(id) if id == wanted)
        }
        _ => false,
    }
}
