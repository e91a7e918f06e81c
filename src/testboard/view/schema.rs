//! List schemas and their registries.
//!
//! A [`Schema`] describes one list screen: which filter fields it offers,
//! how each field matches, which sort keys exist and what the defaults are.
//! Each entity in [`crate::model`] owns a static schema.

use std::fmt;
use std::str::FromStr;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            other => Err(format!("Invalid sort direction: {}", other)),
        }
    }
}

/// How a filter field matches a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Exact string equality (enum values, denormalized foreign-key names).
    Exact,

    /// Case-insensitive substring match (free-text name fields).
    Contains,

    /// Record date is on or after the filter date (date-only comparison).
    DateFrom,

    /// Record date is on or before the filter date (date-only comparison).
    DateTo,

    /// Two-valued choice mapped onto a boolean flag of the record.
    ///
    /// `on` selects records whose flag is set, `off` those whose flag is
    /// clear. Any other value leaves the list untouched.
    Role {
        on: &'static str,
        off: &'static str,
    },

    /// Integer identifier equality. Non-numeric input disables the filter.
    Id,
}

/// Specification for one filter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// The field name used in filter state (e.g. "statut", "date_debut")
    pub name: &'static str,

    /// How the field matches
    pub kind: FilterKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FilterKind) -> Self {
        Self { name, kind }
    }

    pub const fn exact(name: &'static str) -> Self {
        Self::new(name, FilterKind::Exact)
    }

    pub const fn contains(name: &'static str) -> Self {
        Self::new(name, FilterKind::Contains)
    }

    pub const fn date_from(name: &'static str) -> Self {
        Self::new(name, FilterKind::DateFrom)
    }

    pub const fn date_to(name: &'static str) -> Self {
        Self::new(name, FilterKind::DateTo)
    }

    pub const fn id(name: &'static str) -> Self {
        Self::new(name, FilterKind::Id)
    }

    pub const fn role(name: &'static str, on: &'static str, off: &'static str) -> Self {
        Self::new(name, FilterKind::Role { on, off })
    }
}

/// Everything the engine needs to know about one list screen.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    /// Human name of the entity (e.g. "executions")
    pub entity: &'static str,

    /// Backend collection the list is fetched from (`GET <collection>/`)
    pub collection: &'static str,

    /// Filter fields, in display order
    pub fields: &'static [FieldSpec],

    /// Sort keys, in display order
    pub sort_keys: &'static [&'static str],

    /// Sort key restored by `clear()`
    pub default_sort: &'static str,

    /// Direction restored by `clear()`
    pub default_direction: Direction,

    /// Rows per page on the list screen
    pub page_size: usize,
}

impl Schema {
    /// Look up a filter field by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    pub fn has_sort_key(&self, key: &str) -> bool {
        self.sort_keys.contains(&key)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|spec| spec.name)
    }
}
