use super::{is_present, Statut};
use crate::view::{
    duration_millis, text_or_empty, Direction, FieldSpec, Record, Schema, SortValue, Target,
};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub static EXECUTIONS: Schema = Schema {
    entity: "executions",
    collection: "executions",
    fields: &[
        FieldSpec::exact("configuration"),
        FieldSpec::exact("projet"),
        FieldSpec::exact("statut"),
        FieldSpec::date_from("date_debut"),
        FieldSpec::date_to("date_fin"),
    ],
    sort_keys: &[
        "started_at",
        "ended_at",
        "duration",
        "configuration",
        "projet",
        "statut",
    ],
    default_sort: "started_at",
    default_direction: Direction::Desc,
    page_size: 10,
};

/// One run of a test configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Execution {
    pub id: i64,
    #[serde(default)]
    pub configuration: Option<i64>,
    #[serde(default)]
    pub configuration_nom: Option<String>,
    #[serde(default)]
    pub projet_nom: Option<String>,
    #[serde(default)]
    pub societe_nom: Option<String>,
    #[serde(default)]
    pub statut: String,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub ended_at: Option<String>,
    #[serde(default)]
    pub log_fichier: Option<String>,
    #[serde(default)]
    pub rapport: Option<String>,
    #[serde(default)]
    pub ticket_redmine_id: Option<i64>,
}

impl Execution {
    pub fn statut(&self) -> Option<Statut> {
        self.statut.parse().ok()
    }

    /// Run time in milliseconds, 0 unless both timestamps are known.
    pub fn duration_millis(&self) -> i64 {
        duration_millis(self.started_at.as_deref(), self.ended_at.as_deref())
    }

    pub fn is_completed(&self) -> bool {
        self.started_at.is_some() && self.ended_at.is_some()
    }

    pub fn has_log(&self) -> bool {
        is_present(self.log_fichier.as_deref())
    }

    pub fn has_ticket(&self) -> bool {
        self.ticket_redmine_id.is_some()
    }
}

impl Record for Execution {
    fn schema() -> &'static Schema {
        &EXECUTIONS
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn target(&self, field: &str) -> Target<'_> {
        match field {
            "configuration" => Target::Text(Cow::Borrowed(text_or_empty(
                self.configuration_nom.as_deref(),
            ))),
            "projet" => Target::Text(Cow::Borrowed(text_or_empty(self.projet_nom.as_deref()))),
            "statut" => Target::Text(Cow::Borrowed(&self.statut)),
            "date_debut" | "date_fin" => Target::Timestamp(self.started_at.as_deref()),
            _ => Target::Absent,
        }
    }

    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "ended_at" => SortValue::timestamp(self.ended_at.as_deref()),
            "duration" => SortValue::number(self.duration_millis()),
            "configuration" => SortValue::text(self.configuration_nom.as_deref()),
            "projet" => SortValue::text(self.projet_nom.as_deref()),
            "statut" => SortValue::text(Some(self.statut.as_str())),
            _ => SortValue::timestamp(self.started_at.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "id": 12,
        "configuration": 3,
        "configuration_nom": "Nightly",
        "projet_nom": "Checkout",
        "societe_nom": "Acme",
        "configuration_details": {"id": 3, "nom": "Nightly", "periodicite": "daily", "is_active": true},
        "statut": "done",
        "started_at": "2024-01-15T10:00:00Z",
        "ended_at": "2024-01-15T10:02:30Z",
        "log_fichier": "logs/run-12.txt",
        "rapport": "",
        "ticket_redmine_id": null
    }"#;

    #[test]
    fn deserializes_backend_payload() {
        let exec: Execution = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(exec.id, 12);
        assert_eq!(exec.configuration_nom.as_deref(), Some("Nightly"));
        assert_eq!(exec.statut(), Some(Statut::Done));
        assert_eq!(exec.duration_millis(), 150_000);
        assert!(exec.is_completed());
        assert!(exec.has_log());
        assert!(!exec.has_ticket());
    }

    #[test]
    fn tolerates_missing_fields() {
        let exec: Execution = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(exec.statut, "");
        assert!(exec.statut().is_none());
        assert_eq!(exec.duration_millis(), 0);
        assert!(!exec.has_log());
    }

    #[test]
    fn missing_names_target_empty_text() {
        let exec = Execution {
            id: 1,
            ..Default::default()
        };
        assert_eq!(exec.target("projet"), Target::Text(Cow::Borrowed("")));
        assert_eq!(exec.target("date_fin"), Target::Timestamp(None));
        assert_eq!(exec.target("script"), Target::Absent);
    }

    #[test]
    fn unknown_sort_key_falls_back_to_start_time() {
        let exec = Execution {
            id: 1,
            started_at: Some("1970-01-01T00:00:01Z".into()),
            ..Default::default()
        };
        assert_eq!(exec.sort_value("bogus"), SortValue::Number(1000));
        assert_eq!(exec.sort_value("ended_at"), SortValue::Number(0));
    }

    #[test]
    fn name_sort_values_ignore_case() {
        let exec = Execution {
            id: 1,
            projet_nom: Some("Checkout".into()),
            ..Default::default()
        };
        assert_eq!(exec.sort_value("projet"), SortValue::Text("checkout".into()));
        assert_eq!(exec.sort_value("configuration"), SortValue::Text(String::new()));
    }
}
