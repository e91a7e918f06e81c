use crate::view::{Direction, FieldSpec, Record, Schema, SortValue, Target};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;

pub static USERS: Schema = Schema {
    entity: "users",
    collection: "users",
    fields: &[
        FieldSpec::contains("nom"),
        FieldSpec::contains("societe"),
        FieldSpec::role("statut", "actif", "utilisateur"),
    ],
    sort_keys: &["date_joined", "nom", "email"],
    default_sort: "date_joined",
    default_direction: Direction::Desc,
    page_size: 7,
};

/// A company a user belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocieteRef {
    pub id: i64,
    #[serde(default)]
    pub nom: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, deserialize_with = "societes_from_any")]
    pub societes: Vec<SocieteRef>,
    #[serde(default)]
    pub date_joined: Option<String>,
}

/// The user endpoint sends one company, `null`, or (in older snapshots) a list.
#[derive(Deserialize)]
#[serde(untagged)]
enum SocietesField {
    One(SocieteRef),
    Many(Vec<SocieteRef>),
}

fn societes_from_any<'de, D>(deserializer: D) -> Result<Vec<SocieteRef>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<SocietesField>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(SocietesField::One(societe)) => vec![societe],
        Some(SocietesField::Many(societes)) => societes,
    })
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for User {
    fn schema() -> &'static Schema {
        &USERS
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn target(&self, field: &str) -> Target<'_> {
        match field {
            "nom" => Target::Text(Cow::Owned(self.full_name())),
            "societe" => Target::Texts(self.societes.iter().map(|s| s.nom.as_str()).collect()),
            "statut" => Target::Flag(self.is_staff),
            _ => Target::Absent,
        }
    }

    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "nom" => SortValue::text(Some(self.full_name().as_str())),
            "email" => SortValue::text(Some(self.email.as_str())),
            _ => SortValue::timestamp(self.date_joined.as_deref()),
        }
    }
}
