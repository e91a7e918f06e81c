use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use testboard::api::{BoardStats, CmdMessage, Listing, MessageLevel};
use testboard::config::TestboardConfig;
use testboard::model::{Execution, ExecutionResult, Secteur, Statut, User};
use testboard::stats::{format_duration, ExecutionStats, ResultStats, StatusBreakdown};
use testboard::view::{parse_timestamp, Direction, FilterState, FilterValue, Record};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const GAP: &str = "  ";
const EMPTY_CELL: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CellKind {
    Plain,
    /// Raw status, shown as its label
    Status,
    /// Raw timestamp, shown as time ago
    Ago,
}

pub(super) struct Column {
    pub header: &'static str,
    pub width: usize,
    pub kind: CellKind,
    /// Sort key behind this header, if it is clickable
    pub sort_key: Option<&'static str>,
}

const fn column(header: &'static str, width: usize, sort_key: Option<&'static str>) -> Column {
    Column {
        header,
        width,
        kind: CellKind::Plain,
        sort_key,
    }
}

const fn status_column(sort_key: Option<&'static str>) -> Column {
    Column {
        header: "Statut",
        width: 14,
        kind: CellKind::Status,
        sort_key,
    }
}

const fn ago_column(header: &'static str, sort_key: &'static str) -> Column {
    Column {
        header,
        width: 16,
        kind: CellKind::Ago,
        sort_key: Some(sort_key),
    }
}

/// How a record is laid out as a table row.
pub(super) trait TableRow {
    const COLUMNS: &'static [Column];

    /// One raw cell per column.
    fn cells(&self) -> Vec<String>;
}

impl TableRow for Execution {
    const COLUMNS: &'static [Column] = &[
        column("ID", 6, None),
        column("Configuration", 22, Some("configuration")),
        column("Projet", 18, Some("projet")),
        status_column(Some("statut")),
        ago_column("Started", "started_at"),
        ago_column("Ended", "ended_at"),
        column("Duration", 12, Some("duration")),
    ];

    fn cells(&self) -> Vec<String> {
        let duration = if self.is_completed() {
            format_duration(self.duration_millis())
        } else {
            String::new()
        };
        vec![
            self.id.to_string(),
            self.configuration_nom.clone().unwrap_or_default(),
            self.projet_nom.clone().unwrap_or_default(),
            self.statut.clone(),
            self.started_at.clone().unwrap_or_default(),
            self.ended_at.clone().unwrap_or_default(),
            duration,
        ]
    }
}

impl TableRow for ExecutionResult {
    const COLUMNS: &'static [Column] = &[
        column("ID", 6, None),
        column("Exec", 6, Some("execution")),
        column("Script", 24, Some("script")),
        column("Configuration", 18, Some("configuration")),
        column("Projet", 16, Some("projet")),
        status_column(Some("statut")),
        ago_column("Started", "started_at"),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.execution_id.map(|id| id.to_string()).unwrap_or_default(),
            self.script_nom.clone().unwrap_or_default(),
            self.configuration_nom.clone().unwrap_or_default(),
            self.projet_nom.clone().unwrap_or_default(),
            self.statut.clone(),
            self.started_at.clone().unwrap_or_default(),
        ]
    }
}

impl TableRow for User {
    const COLUMNS: &'static [Column] = &[
        column("ID", 6, None),
        column("Nom", 24, Some("nom")),
        column("Email", 28, Some("email")),
        column("Sociétés", 24, None),
        column("Rôle", 12, None),
        ago_column("Joined", "date_joined"),
    ];

    fn cells(&self) -> Vec<String> {
        let societes: Vec<&str> = self.societes.iter().map(|s| s.nom.as_str()).collect();
        let role = if self.is_staff { "actif" } else { "utilisateur" };
        vec![
            self.id.to_string(),
            self.full_name().trim().to_string(),
            self.email.clone(),
            societes.join(", "),
            role.to_string(),
            self.date_joined.clone().unwrap_or_default(),
        ]
    }
}

impl TableRow for Secteur {
    const COLUMNS: &'static [Column] = &[column("ID", 6, Some("id")), column("Nom", 40, Some("nom"))];

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.nom.clone()]
    }
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_listing<R: Record + TableRow>(listing: &Listing<R>) {
    if let Some(chips) = filter_chips(&listing.state) {
        println!("{} {}", "Filters:".dimmed(), chips);
    }

    if listing.rows.is_empty() {
        return;
    }

    println!("{}", header_line::<R>(&listing.state).bold());
    for row in &listing.rows {
        let line: Vec<String> = R::COLUMNS
            .iter()
            .zip(row.cells())
            .map(|(col, raw)| render_cell(col, &raw))
            .collect();
        println!("{}", line.join(GAP));
    }

    println!();
    let mut footer = format!(
        "Showing {} to {} of {} {}",
        listing.first,
        listing.last,
        listing.matched,
        R::schema().entity
    );
    if listing.matched != listing.total {
        footer.push_str(&format!(" (filtered from {})", listing.total));
    }
    println!("{}", footer.dimmed());
    if listing.total_pages > 1 {
        println!("{}", page_bar(listing));
    }
}

fn filter_chips(state: &FilterState) -> Option<String> {
    let chips: Vec<String> = state
        .active_filters()
        .map(|(field, value)| match (field, value) {
            ("statut", FilterValue::Text(raw)) => {
                format!("{}={}", field, Statut::label_for(raw))
            }
            _ => format!("{}={}", field, value),
        })
        .collect();
    if chips.is_empty() {
        None
    } else {
        Some(chips.join(", "))
    }
}

fn header_line<R: TableRow>(state: &FilterState) -> String {
    let sort = state.sort();
    R::COLUMNS
        .iter()
        .map(|col| {
            let marker = match col.sort_key {
                Some(key) if key == sort.key => match sort.direction {
                    Direction::Asc => " ▲",
                    Direction::Desc => " ▼",
                },
                _ => "",
            };
            pad_to_width(&format!("{}{}", col.header, marker), col.width)
        })
        .collect::<Vec<_>>()
        .join(GAP)
}

fn render_cell(col: &Column, raw: &str) -> String {
    let text = match col.kind {
        CellKind::Plain => raw.to_string(),
        CellKind::Status => Statut::label_for(raw).to_string(),
        CellKind::Ago => parse_timestamp(raw).map(format_time_ago).unwrap_or_default(),
    };
    let text = if text.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        text
    };
    let padded = pad_to_width(&text, col.width);
    match col.kind {
        CellKind::Status => status_color(raw, padded).to_string(),
        CellKind::Ago => padded.dimmed().to_string(),
        CellKind::Plain => padded,
    }
}

fn status_color(raw: &str, text: String) -> ColoredString {
    match raw.parse::<Statut>() {
        Ok(Statut::Done) => text.green(),
        Ok(Statut::Error) => text.red(),
        Ok(Statut::Running) => text.cyan(),
        Ok(Statut::Pending) => text.yellow(),
        Ok(Statut::NonExecuted) | Err(_) => text.dimmed(),
    }
}

fn page_bar<R>(listing: &Listing<R>) -> String {
    let mut parts = Vec::new();
    if listing.page > 1 {
        parts.push("«".to_string());
    }
    for n in &listing.window {
        if *n == listing.page {
            parts.push(format!("[{}]", n).bold().to_string());
        } else {
            parts.push(n.to_string());
        }
    }
    if listing.page < listing.total_pages {
        parts.push("»".to_string());
    }
    parts.join(" ")
}

pub(super) fn print_stats(stats: &BoardStats) {
    match stats {
        BoardStats::Executions(stats) => print_execution_stats(stats),
        BoardStats::Results(stats) => print_result_stats(stats),
    }
}

fn print_execution_stats(stats: &ExecutionStats) {
    print_breakdown(&stats.statuses);
    print_figure("With logs", stats.with_logs);
    print_figure("With tickets", stats.with_tickets);
    print_figure("Completed", stats.completed);
    print_figure(
        "Average duration",
        format_duration(stats.average_duration_millis),
    );
    print_figure("Configurations", stats.unique_configurations);
    print_figure("Projects", stats.unique_projects);
}

fn print_result_stats(stats: &ResultStats) {
    print_breakdown(&stats.statuses);
    print_figure("With logs", stats.with_logs);
    print_figure("Scripts", stats.unique_scripts);
    print_figure("Configurations", stats.unique_configurations);
    print_figure("Projects", stats.unique_projects);
    print_figure("Success rate", format!("{:.1}%", stats.success_rate).green());
    print_figure("Failure rate", format!("{:.1}%", stats.failure_rate).red());
}

fn print_breakdown(breakdown: &StatusBreakdown) {
    print_figure("Total", breakdown.total.to_string().bold());
    for statut in Statut::ALL {
        let count = breakdown.count(statut);
        print_figure(statut.label(), status_color(statut.as_str(), count.to_string()));
    }
    if breakdown.other > 0 {
        print_figure("Other", breakdown.other);
    }
}

fn print_figure(label: &str, value: impl std::fmt::Display) {
    println!("{}{}", pad_to_width(label, 20).dimmed(), value);
}

pub(super) fn print_options(options: &[String]) {
    for option in options {
        println!("{}", option);
    }
}

pub(super) fn print_config(config: &TestboardConfig) {
    for key in TestboardConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let text = truncate_to_width(s, width);
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
