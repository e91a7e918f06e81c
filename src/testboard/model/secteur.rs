use crate::view::{Direction, FieldSpec, Record, Schema, SortValue, Target};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub static SECTEURS: Schema = Schema {
    entity: "secteurs",
    collection: "secteurs",
    fields: &[FieldSpec::contains("nom")],
    sort_keys: &["nom", "id"],
    default_sort: "nom",
    default_direction: Direction::Asc,
    page_size: 10,
};

/// A business sector companies are attached to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secteur {
    pub id: i64,
    #[serde(default)]
    pub nom: String,
}

impl Record for Secteur {
    fn schema() -> &'static Schema {
        &SECTEURS
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn target(&self, field: &str) -> Target<'_> {
        match field {
            "nom" => Target::Text(Cow::Borrowed(&self.nom)),
            _ => Target::Absent,
        }
    }

    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "id" => SortValue::number(self.id),
            _ => SortValue::text(Some(self.nom.as_str())),
        }
    }
}
