use super::{is_present, Statut};
use crate::view::{text_or_empty, Direction, FieldSpec, Record, Schema, SortValue, Target};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub static RESULTS: Schema = Schema {
    entity: "results",
    collection: "execution-resultats",
    fields: &[
        FieldSpec::exact("script"),
        FieldSpec::exact("configuration"),
        FieldSpec::exact("projet"),
        FieldSpec::exact("statut"),
        FieldSpec::id("execution"),
        FieldSpec::date_from("date_debut"),
        FieldSpec::date_to("date_fin"),
    ],
    sort_keys: &[
        "started_at",
        "script",
        "configuration",
        "projet",
        "statut",
        "execution",
    ],
    default_sort: "started_at",
    default_direction: Direction::Desc,
    page_size: 10,
};

/// Outcome of one script within an execution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub id: i64,
    #[serde(default)]
    pub execution_id: Option<i64>,
    #[serde(default)]
    pub script: Option<i64>,
    #[serde(default)]
    pub script_nom: Option<String>,
    #[serde(default)]
    pub statut: String,
    #[serde(default)]
    pub log_fichier: Option<String>,
    #[serde(default)]
    pub commentaire: Option<String>,
    #[serde(default)]
    pub configuration_nom: Option<String>,
    #[serde(default)]
    pub projet_nom: Option<String>,
    /// Start of the parent execution
    #[serde(default)]
    pub started_at: Option<String>,
}

impl ExecutionResult {
    pub fn statut(&self) -> Option<Statut> {
        self.statut.parse().ok()
    }

    pub fn has_log(&self) -> bool {
        is_present(self.log_fichier.as_deref())
    }
}

impl Record for ExecutionResult {
    fn schema() -> &'static Schema {
        &RESULTS
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn target(&self, field: &str) -> Target<'_> {
        match field {
            "script" => name_target(self.script_nom.as_deref()),
            "configuration" => name_target(self.configuration_nom.as_deref()),
            "projet" => name_target(self.projet_nom.as_deref()),
            "statut" => Target::Text(Cow::Borrowed(&self.statut)),
            "execution" => self.execution_id.map_or(Target::Absent, Target::Id),
            "date_debut" | "date_fin" => Target::Timestamp(self.started_at.as_deref()),
            _ => Target::Absent,
        }
    }

    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "script" => SortValue::text(self.script_nom.as_deref()),
            "configuration" => SortValue::text(self.configuration_nom.as_deref()),
            "projet" => SortValue::text(self.projet_nom.as_deref()),
            "statut" => SortValue::text(Some(self.statut.as_str())),
            "execution" => SortValue::number(self.execution_id.unwrap_or(0)),
            _ => SortValue::timestamp(self.started_at.as_deref()),
        }
    }
}

fn name_target(value: Option<&str>) -> Target<'_> {
    Target::Text(Cow::Borrowed(text_or_empty(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{derive, FilterState};

    fn result(id: i64, execution_id: Option<i64>, script: &str) -> ExecutionResult {
        ExecutionResult {
            id,
            execution_id,
            script_nom: Some(script.to_string()),
            statut: "done".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn deserializes_backend_payload() {
        let json = r#"{
            "id": 4, "execution_id": 12, "script": 9, "script_nom": "login.spec",
            "statut": "error", "log_fichier": null, "commentaire": "timeout",
            "configuration_nom": "Nightly", "projet_nom": "Checkout",
            "started_at": "2024-01-15T10:00:00Z"
        }"#;
        let r: ExecutionResult = serde_json::from_str(json).unwrap();
        assert_eq!(r.execution_id, Some(12));
        assert_eq!(r.statut(), Some(Statut::Error));
        assert!(!r.has_log());
    }

    #[test]
    fn filters_by_execution_id() {
        let records = vec![
            result(1, Some(12), "a"),
            result(2, Some(13), "b"),
            result(3, None, "c"),
        ];
        let mut state = FilterState::new(&RESULTS);
        state.set_field("execution", "13");
        let view = derive(&records, &state);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 2);
    }

    #[test]
    fn sorts_by_script_name_case_insensitively() {
        let records = vec![
            result(1, None, "beta"),
            result(2, None, "Alpha"),
            result(3, None, "gamma"),
        ];
        let mut state = FilterState::new(&RESULTS);
        state.set_sort("script");
        state.set_sort("script");
        let ids: Vec<_> = derive(&records, &state).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn execution_sort_treats_missing_as_zero() {
        let records = vec![result(1, None, "a"), result(2, Some(5), "b")];
        let mut state = FilterState::new(&RESULTS);
        state.set_sort("execution");
        let ids: Vec<_> = derive(&records, &state).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
