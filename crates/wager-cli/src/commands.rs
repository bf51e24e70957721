use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};
use wager_ledger::{BetSheet, Ledger, LedgerDeriver, RecordValidator};
use wager_types::Language;

use crate::chrome::Chrome;
use crate::cli::*;
use crate::config::DashboardConfig;
use crate::render::{self, View};

struct Session {
    config: DashboardConfig,
    language: Language,
    format: OutputFormat,
    explain: bool,
    sheet: BetSheet,
}

impl Session {
    fn open(cli: &Cli) -> anyhow::Result<Self> {
        let config = DashboardConfig::resolve(cli)?;
        let language = config.language()?;
        let sheet = BetSheet::load(&config.data_path)
            .with_context(|| format!("loading bet sheet {}", config.data_path.display()))?;
        Ok(Self {
            config,
            language,
            format: cli.format.clone(),
            explain: cli.explain,
            sheet,
        })
    }

    fn ledger(&self) -> anyhow::Result<Ledger> {
        let deriver = LedgerDeriver::new(self.sheet.catalog()?);
        Ok(deriver.derive(&self.sheet.bets, self.language)?)
    }

    fn chrome(&self) -> &'static Chrome {
        Chrome::for_language(self.language)
    }

    fn view(&self) -> View<'_> {
        View {
            chrome: self.chrome(),
            currency: &self.config.currency,
            images_root: self.config.images_root.as_deref(),
            author: self.config.author.as_deref(),
            explain: self.explain,
        }
    }

    /// Write `value` as pretty JSON, or the rendered text.
    fn emit<T, W>(&self, out: &mut W, value: &T, text: impl FnOnce() -> String) -> anyhow::Result<()>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        match self.format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(value)?)?,
            OutputFormat::Text => write!(out, "{}", text())?,
        }
        Ok(())
    }
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let stdout = io::stdout();
    run_command_to(cli, &mut stdout.lock())
}

fn run_command_to<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    let session = Session::open(&cli)?;
    match cli.command {
        Command::Summary(_) => cmd_summary(&session, out),
        Command::History(args) => cmd_history(&session, args, out),
        Command::Breakdown(_) => cmd_breakdown(&session, out),
        Command::Trend(args) => cmd_trend(&session, args, out),
        Command::Validate(_) => cmd_validate(&session, out),
        Command::Export(args) => cmd_export(&session, args, out),
    }
}

fn cmd_summary<W: Write>(session: &Session, out: &mut W) -> anyhow::Result<()> {
    let ledger = session.ledger()?;
    session.emit(out, &ledger.stats, || render::summary(&ledger, &session.view()))
}

fn cmd_history<W: Write>(session: &Session, args: HistoryArgs, out: &mut W) -> anyhow::Result<()> {
    let ledger = session.ledger()?;
    let skip = args
        .limit
        .map_or(0, |n| ledger.records.len().saturating_sub(n));
    session.emit(out, &ledger.records[skip..], || {
        render::history(&ledger, &session.view(), args.limit)
    })
}

fn cmd_breakdown<W: Write>(session: &Session, out: &mut W) -> anyhow::Result<()> {
    let ledger = session.ledger()?;
    let value = json!({
        "outcomes": ledger.outcome_split(),
        "bet_types": ledger.bet_types().entries,
    });
    session.emit(out, &value, || render::breakdown(&ledger, &session.view()))
}

fn cmd_trend<W: Write>(session: &Session, args: TrendArgs, out: &mut W) -> anyhow::Result<()> {
    let ledger = session.ledger()?;
    let value = json!({
        "cumulative_profit": ledger.cumulative_series(),
        "profit_loss": ledger.profit_series(),
    });
    session.emit(out, &value, || {
        render::trend(&ledger, &session.view(), args.width.max(1))
    })
}

fn cmd_validate<W: Write>(session: &Session, out: &mut W) -> anyhow::Result<()> {
    let report = RecordValidator::validate(&session.sheet.bets);
    session.emit(out, &report, || render::validation(&report))?;
    if !report.is_valid() {
        anyhow::bail!(
            "{} violation(s) in {}",
            report.violations.len(),
            session.config.data_path.display()
        );
    }
    Ok(())
}

/// Export failures are reported and leave the process successful.
fn cmd_export<W: Write>(session: &Session, args: ExportArgs, out: &mut W) -> anyhow::Result<()> {
    let ledger = session.ledger()?;
    let chrome = session.chrome();
    match write_export(&ledger, &args.output) {
        Ok(()) => {
            info!(path = %args.output.display(), records = ledger.records.len(), "dashboard exported");
            writeln!(
                out,
                "{} {} {}",
                "✓".green().bold(),
                chrome.export_done,
                args.output.display().to_string().bold()
            )?;
        }
        Err(e) => {
            warn!(path = %args.output.display(), error = %e, "export failed");
            writeln!(out, "{} {}", "!".yellow().bold(), chrome.export_failed)?;
        }
    }
    Ok(())
}

fn write_export(ledger: &Ledger, path: &Path) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(ledger)?;
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use serde_json::Value;

    use super::*;

    const SHEET: &str = r#"
[[bets]]
date = "3 mai 2025"
short_date = "03/05"
match = "Lecce 0 - 1 Naples"
bet_label = "Résultat Naples"
odds = 1.5
stake = 100.0
gains = 150.0
outcome = "Win"

[[bets]]
date = "16 avril 2025"
short_date = "16/04"
match = "Real Madrid 1 - 2 Arsenal"
bet_label = "Résultat R. Madrid"
odds = 1.84
stake = 100.0
gains = 0.0
outcome = "Loss"
"#;

    fn sheet_file(contents: &str) -> tempfile::NamedTempFile {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        fs::write(file.path(), contents).unwrap();
        file
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    /// Run a command against `SHEET` with `--format json` and parse its output.
    fn json_output(args: &[&str]) -> Value {
        let file = sheet_file(SHEET);
        let path = file.path().to_string_lossy().into_owned();
        let mut argv = vec!["wager", "--format", "json", "--data", path.as_str()];
        argv.extend_from_slice(args);

        let mut out = Vec::new();
        run_command_to(cli(&argv), &mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn ledger_is_derived_from_the_sheet() {
        let file = sheet_file(SHEET);
        let path = file.path().to_string_lossy().into_owned();
        let session = Session::open(&cli(&["wager", "--data", &path, "summary"])).unwrap();
        let ledger = session.ledger().unwrap();
        assert_eq!(ledger.records[0].date_label, "16 April 2025");
        assert_eq!(ledger.stats.total_profit, -50.0);
    }

    #[test]
    fn summary_json_is_the_statistics() {
        let stats = json_output(&["summary"]);
        assert_eq!(stats["total_bets"], 2);
        assert_eq!(stats["win_count"], 1);
        assert_eq!(stats["total_profit"].as_f64(), Some(-50.0));
        assert_eq!(stats["roi"].as_f64(), Some(-25.0));
        assert_eq!(stats["win_rate"].as_f64(), Some(50.0));
    }

    #[test]
    fn history_json_lists_rows_oldest_first() {
        let rows = json_output(&["history"]);
        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["match"], "Real Madrid 1 - 2 Arsenal");
        assert_eq!(rows[0]["date_label"], "16 April 2025");
        assert_eq!(rows[1]["cumulative_profit"].as_f64(), Some(-50.0));
    }

    #[test]
    fn history_json_limit_keeps_latest() {
        let latest = json_output(&["history", "-n", "1"]);
        let latest = latest.as_array().unwrap();
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0]["match"], "Lecce 0 - 1 Naples");

        let none = json_output(&["history", "-n", "0"]);
        assert!(none.as_array().unwrap().is_empty());

        let all = json_output(&["history", "-n", "10"]);
        assert_eq!(all.as_array().unwrap().len(), 2);
    }

    #[test]
    fn breakdown_json_has_outcomes_and_bet_types() {
        let value = json_output(&["--lang", "fr", "breakdown"]);
        assert_eq!(value["outcomes"]["wins"], 1);
        assert_eq!(value["outcomes"]["losses"], 1);
        assert_eq!(value["outcomes"]["win_share"].as_f64(), Some(50.0));
        let types = value["bet_types"].as_array().unwrap();
        assert_eq!(types.len(), 2);
        assert_eq!(types[0]["label"], "Résultat R. Madrid");
        assert_eq!(types[0]["count"], 1);
    }

    #[test]
    fn trend_json_has_both_series() {
        let value = json_output(&["trend"]);
        let cumulative: Vec<f64> = value["cumulative_profit"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["value"].as_f64().unwrap())
            .collect();
        assert_eq!(cumulative, vec![-100.0, -50.0]);
        assert_eq!(value["profit_loss"][1]["short_date"], "03/05");
        assert_eq!(value["profit_loss"][1]["value"].as_f64(), Some(50.0));
    }

    #[test]
    fn text_commands_render() {
        colored::control::set_override(false);
        let file = sheet_file(SHEET);
        let path = file.path().to_string_lossy().into_owned();
        for (command, expected) in [
            ("summary", "Total Profit/Loss"),
            ("history", "Betting History"),
            ("breakdown", "Bet Types"),
            ("trend", "Cumulative Profit Evolution"),
        ] {
            let mut out = Vec::new();
            run_command_to(cli(&["wager", "--data", &path, command]), &mut out).unwrap();
            let text = String::from_utf8(out).unwrap();
            assert!(text.contains(expected), "{command}: {text}");
        }
    }

    #[test]
    fn unsupported_language_fails_before_loading() {
        let c = cli(&["wager", "--lang", "de", "--data", "/nonexistent/bets.toml", "summary"]);
        let err = Session::open(&c).err().unwrap();
        assert!(err.to_string().contains("unsupported"), "{err}");
    }

    #[test]
    fn missing_sheet_is_an_error() {
        let c = cli(&["wager", "--data", "/nonexistent/bets.toml", "summary"]);
        assert!(run_command_to(c, &mut Vec::new()).is_err());
    }

    #[test]
    fn validate_fails_on_defects() {
        let file = sheet_file(&SHEET.replace("\"03/05\"", "\"04/05\""));
        let path = file.path().to_string_lossy().into_owned();
        let mut out = Vec::new();
        assert!(run_command_to(cli(&["wager", "--format", "json", "--data", &path, "validate"]), &mut out).is_err());
        let report: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(report["violations"][0]["kind"], "ShortDateMismatch");

        let file = sheet_file(SHEET);
        let path = file.path().to_string_lossy().into_owned();
        assert!(run_command_to(cli(&["wager", "--data", &path, "validate"]), &mut Vec::new()).is_ok());
    }

    #[test]
    fn export_writes_the_ledger() {
        let file = sheet_file(SHEET);
        let path = file.path().to_string_lossy().into_owned();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dashboard.json");
        let out_str = out.to_string_lossy().into_owned();

        let c = cli(&["wager", "--data", &path, "--lang", "fr", "export", "-o", &out_str]);
        run_command_to(c, &mut Vec::new()).unwrap();
        let written: Ledger = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written.language, Language::Fr);
        assert_eq!(written.records.len(), 2);
    }

    #[test]
    fn export_failure_is_not_fatal() {
        colored::control::set_override(false);
        let file = sheet_file(SHEET);
        let path = file.path().to_string_lossy().into_owned();
        let c = cli(&["wager", "--data", &path, "export", "-o", "/nonexistent/dir/out.json"]);
        let mut out = Vec::new();
        assert!(run_command_to(c, &mut out).is_ok());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(Chrome::for_language(Language::En).export_failed));
    }
}
