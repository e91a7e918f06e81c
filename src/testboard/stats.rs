//! Summary figures shown above the execution and result lists, and the
//! option lists feeding the filter dropdowns.
//!
//! Figures are computed over the whole fetched list, not the filtered view.

use crate::model::{Execution, ExecutionResult, Statut};
use crate::view::{Record, Target};
use serde::Serialize;
use std::collections::BTreeSet;

/// Count of records per status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusBreakdown {
    pub total: usize,
    pub pending: usize,
    pub running: usize,
    pub done: usize,
    pub error: usize,
    pub non_executed: usize,
    /// Statuses outside the known set
    pub other: usize,
}

impl StatusBreakdown {
    pub fn from_statuses<'a>(statuses: impl IntoIterator<Item = &'a str>) -> Self {
        let mut breakdown = Self::default();
        for raw in statuses {
            breakdown.total += 1;
            match raw.parse::<Statut>() {
                Ok(Statut::Pending) => breakdown.pending += 1,
                Ok(Statut::Running) => breakdown.running += 1,
                Ok(Statut::Done) => breakdown.done += 1,
                Ok(Statut::Error) => breakdown.error += 1,
                Ok(Statut::NonExecuted) => breakdown.non_executed += 1,
                Err(_) => breakdown.other += 1,
            }
        }
        breakdown
    }

    pub fn count(&self, statut: Statut) -> usize {
        match statut {
            Statut::Pending => self.pending,
            Statut::Running => self.running,
            Statut::Done => self.done,
            Statut::Error => self.error,
            Statut::NonExecuted => self.non_executed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExecutionStats {
    pub statuses: StatusBreakdown,
    pub with_logs: usize,
    pub with_tickets: usize,
    /// Runs with both a start and an end timestamp
    pub completed: usize,
    /// Mean run time of completed runs, 0 when none completed
    pub average_duration_millis: i64,
    pub unique_configurations: usize,
    pub unique_projects: usize,
}

impl ExecutionStats {
    pub fn compute(executions: &[Execution]) -> Self {
        let completed: Vec<&Execution> = executions.iter().filter(|e| e.is_completed()).collect();
        let average_duration_millis = if completed.is_empty() {
            0
        } else {
            completed.iter().map(|e| e.duration_millis()).sum::<i64>() / completed.len() as i64
        };

        Self {
            statuses: StatusBreakdown::from_statuses(executions.iter().map(|e| e.statut.as_str())),
            with_logs: executions.iter().filter(|e| e.has_log()).count(),
            with_tickets: executions.iter().filter(|e| e.has_ticket()).count(),
            completed: completed.len(),
            average_duration_millis,
            unique_configurations: distinct_options(executions, "configuration").len(),
            unique_projects: distinct_options(executions, "projet").len(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultStats {
    pub statuses: StatusBreakdown,
    pub with_logs: usize,
    pub unique_scripts: usize,
    pub unique_configurations: usize,
    pub unique_projects: usize,
    /// Share of `done` results, in percent with one decimal
    pub success_rate: f64,
    /// Share of `error` results, in percent with one decimal
    pub failure_rate: f64,
}

impl ResultStats {
    pub fn compute(results: &[ExecutionResult]) -> Self {
        let statuses = StatusBreakdown::from_statuses(results.iter().map(|r| r.statut.as_str()));
        Self {
            with_logs: results.iter().filter(|r| r.has_log()).count(),
            unique_scripts: distinct_options(results, "script").len(),
            unique_configurations: distinct_options(results, "configuration").len(),
            unique_projects: distinct_options(results, "projet").len(),
            success_rate: percent(statuses.done, statuses.total),
            failure_rate: percent(statuses.error, statuses.total),
            statuses,
        }
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 * 1000.0 / total as f64).round() / 10.0
}

/// Sorted, de-duplicated, non-blank values of a filter field.
///
/// These are the choices offered by the dropdown of an exact-match field.
pub fn distinct_options<R: Record>(records: &[R], field: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut ids = BTreeSet::new();
    for record in records {
        match record.target(field) {
            Target::Text(value) => {
                if !value.trim().is_empty() {
                    seen.insert(value.into_owned());
                }
            }
            Target::Texts(values) => {
                seen.extend(
                    values
                        .into_iter()
                        .filter(|v| !v.trim().is_empty())
                        .map(str::to_string),
                );
            }
            Target::Id(id) => {
                ids.insert(id);
            }
            Target::Timestamp(_) | Target::Flag(_) | Target::Absent => {}
        }
    }
    ids.into_iter()
        .map(|id| id.to_string())
        .chain(seen)
        .collect()
}

/// Human duration: whole seconds under a minute, whole minutes under an
/// hour, whole hours beyond.
pub fn format_duration(millis: i64) -> String {
    let seconds = millis.max(0) / 1000;
    if seconds < 60 {
        format!("{} seconds", seconds)
    } else if seconds < 3600 {
        format!("{} minutes", seconds / 60)
    } else {
        format!("{} hours", seconds / 3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExecutionResult, Secteur, User};

    fn exec(statut: &str, conf: &str, started: Option<&str>, ended: Option<&str>) -> Execution {
        Execution {
            statut: statut.to_string(),
            configuration_nom: Some(conf.to_string()),
            started_at: started.map(str::to_string),
            ended_at: ended.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn breakdown_counts_unknown_statuses_separately() {
        let b = StatusBreakdown::from_statuses(["done", "done", "error", "archived", ""]);
        assert_eq!(b.total, 5);
        assert_eq!(b.count(Statut::Done), 2);
        assert_eq!(b.count(Statut::Error), 1);
        assert_eq!(b.other, 2);
    }

    #[test]
    fn execution_stats_average_only_completed_runs() {
        let mut list = vec![
            exec(
                "done",
                "Nightly",
                Some("2024-01-15T10:00:00Z"),
                Some("2024-01-15T10:01:00Z"),
            ),
            exec(
                "error",
                "Nightly",
                Some("2024-01-16T10:00:00Z"),
                Some("2024-01-16T10:03:00Z"),
            ),
            exec("running", "Smoke", Some("2024-01-17T10:00:00Z"), None),
        ];
        list[0].log_fichier = Some("logs/a.txt".into());
        list[1].ticket_redmine_id = Some(42);

        let stats = ExecutionStats::compute(&list);
        assert_eq!(stats.statuses.total, 3);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.average_duration_millis, 120_000);
        assert_eq!(stats.with_logs, 1);
        assert_eq!(stats.with_tickets, 1);
        assert_eq!(stats.unique_configurations, 2);
        assert_eq!(stats.unique_projects, 0);
    }

    #[test]
    fn execution_stats_of_empty_list() {
        let stats = ExecutionStats::compute(&[]);
        assert_eq!(stats, ExecutionStats::default());
    }

    #[test]
    fn result_rates_use_one_decimal() {
        let results: Vec<ExecutionResult> = ["done", "done", "error"]
            .iter()
            .enumerate()
            .map(|(i, statut)| ExecutionResult {
                id: i as i64,
                statut: statut.to_string(),
                script_nom: Some(format!("script-{}", i % 2)),
                ..Default::default()
            })
            .collect();

        let stats = ResultStats::compute(&results);
        assert_eq!(stats.success_rate, 66.7);
        assert_eq!(stats.failure_rate, 33.3);
        assert_eq!(stats.unique_scripts, 2);
    }

    #[test]
    fn result_rates_are_zero_when_empty() {
        let stats = ResultStats::compute(&[]);
        assert_eq!(stats.success_rate, 0.0);
        assert_eq!(stats.failure_rate, 0.0);
    }

    #[test]
    fn options_are_sorted_unique_and_non_blank() {
        let list = vec![
            exec("done", "Smoke", None, None),
            exec("done", "", None, None),
            exec("done", "Nightly", None, None),
            exec("done", "Smoke", None, None),
        ];
        assert_eq!(
            distinct_options(&list, "configuration"),
            vec!["Nightly".to_string(), "Smoke".to_string()]
        );
        assert!(distinct_options(&list, "date_debut").is_empty());
    }

    #[test]
    fn options_flatten_multi_valued_fields() {
        let users = vec![
            User {
                id: 1,
                societes: vec![
                    crate::model::SocieteRef {
                        id: 1,
                        nom: "Globex".into(),
                    },
                    crate::model::SocieteRef {
                        id: 2,
                        nom: "Acme".into(),
                    },
                ],
                ..Default::default()
            },
            User {
                id: 2,
                societes: vec![crate::model::SocieteRef {
                    id: 2,
                    nom: "Acme".into(),
                }],
                ..Default::default()
            },
        ];
        assert_eq!(distinct_options(&users, "societe"), vec!["Acme", "Globex"]);

        let secteurs = vec![Secteur {
            id: 1,
            nom: "Retail".into(),
        }];
        assert_eq!(distinct_options(&secteurs, "nom"), vec!["Retail"]);
    }

    #[test]
    fn id_options_sort_numerically() {
        let results: Vec<ExecutionResult> = [10, 9, 100, 9]
            .into_iter()
            .enumerate()
            .map(|(i, execution)| ExecutionResult {
                id: i as i64,
                execution_id: Some(execution),
                ..Default::default()
            })
            .collect();
        assert_eq!(distinct_options(&results, "execution"), vec!["9", "10", "100"]);
    }

    #[test]
    fn durations_pick_the_largest_whole_unit() {
        assert_eq!(format_duration(0), "0 seconds");
        assert_eq!(format_duration(59_999), "59 seconds");
        assert_eq!(format_duration(60_000), "1 minutes");
        assert_eq!(format_duration(3_599_000), "59 minutes");
        assert_eq!(format_duration(7_200_000), "2 hours");
    }
}
