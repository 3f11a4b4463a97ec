//! Scripted session replay: feed input events through the dashboard
//! binding graph and print what changed.
//!
//! The events file carries one event per line:
//!
//! ```text
//! continent=EU
//! countries=DEU,FRA
//! indicator=life-expectancy
//! ```
//!
//! Blank lines and `#` comments are skipped. Output is one JSON line per
//! event (including the initial refresh) so it stays pipeable.

use crate::query::{load_database, parse_country_list};
use serde_json::json;
use wdi_core::selector::ContinentSelector;
use wdi_dashboard::DashboardSession;
use wdi_reactive::graph::DispatchReport;

pub fn run_session(data: &str, events_path: &str) -> anyhow::Result<()> {
    let db = load_database(data)?;
    let mut session = DashboardSession::new(db)?;
    let report = session.refresh_all();
    print_report("refresh", &report);

    let script = std::fs::read_to_string(events_path)?;
    for (lineno, raw_line) in script.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let report = apply_event(&mut session, line)
            .map_err(|err| err.context(format!("events line {}", lineno + 1)))?;
        print_report(line, &report);
    }
    Ok(())
}

/// Apply one `input=value` event line to the session.
pub(crate) fn apply_event(
    session: &mut DashboardSession,
    line: &str,
) -> anyhow::Result<DispatchReport> {
    let Some((input, value)) = line.split_once('=') else {
        anyhow::bail!("expected `input=value`, got `{}`", line);
    };
    let report = match input.trim() {
        "continent" => session.set_continent(&ContinentSelector::parse(value))?,
        "countries" => session.set_countries(&parse_country_list(value))?,
        "indicator" => session.set_indicator(value.trim().parse()?)?,
        other => anyhow::bail!("unknown input `{}`", other),
    };
    Ok(report)
}

fn print_report(event: &str, report: &DispatchReport) {
    let line = json!({
        "event": event,
        "changed": report
            .changed
            .iter()
            .map(|(output, value)| json!({ "output": output, "value": value }))
            .collect::<Vec<_>>(),
        "failures": report
            .failures
            .iter()
            .map(|failure| json!({ "binding": failure.binding, "message": failure.message }))
            .collect::<Vec<_>>(),
    });
    println!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use wdi_db::Database;

    fn sample_session() -> DashboardSession {
        let db = Database::new().unwrap();
        db.load_dataset(
            "code,country,continent,year,gdp_per_capita,population,life_expectancy\n\
             DEU,Germany,EU,2007,32170.0,82400996,79.406\n\
             JPN,Japan,AS,2007,31656.07,127467972,82.603\n",
        )
        .unwrap();
        let mut session = DashboardSession::new(db).unwrap();
        session.refresh_all();
        session
    }

    #[test]
    fn applies_each_event_kind() {
        let mut session = sample_session();
        apply_event(&mut session, "continent=EU").unwrap();
        apply_event(&mut session, "countries=DEU").unwrap();
        let report = apply_event(&mut session, "indicator=life-expectancy").unwrap();
        assert!(report.failures.is_empty());
        assert!(!report.changed.is_empty());
    }

    #[test]
    fn malformed_line_is_an_error() {
        let mut session = sample_session();
        assert!(apply_event(&mut session, "continent EU").is_err());
        assert!(apply_event(&mut session, "year=2007").is_err());
    }

    #[test]
    fn unknown_indicator_is_an_error() {
        let mut session = sample_session();
        assert!(apply_event(&mut session, "indicator=co2").is_err());
    }
}
