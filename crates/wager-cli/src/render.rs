//! Text rendering of the dashboard views.

use std::path::Path;

use colored::{ColoredString, Colorize};
use tracing::warn;
use wager_ledger::{Ledger, SeriesPoint, ValidationReport};

use crate::chrome::Chrome;

/// Colour of a displayed cell. Signed amounts use [`Tone::for_value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    /// Neutral highlight for unsigned figures such as the win rate.
    Accent,
}

impl Tone {
    /// Zero counts as positive.
    pub fn for_value(value: f64) -> Self {
        if value >= 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

fn paint(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Positive => text.green(),
        Tone::Negative => text.red(),
        Tone::Accent => text.blue(),
    }
}

pub fn money(value: f64, currency: &str) -> String {
    format!("{currency}{value:.2}")
}

pub fn percent(value: Option<f64>, chrome: &Chrome) -> String {
    match value {
        Some(v) => format!("{v:.2}%"),
        None => chrome.not_applicable.to_string(),
    }
}

/// Shared rendering inputs.
pub struct View<'a> {
    pub chrome: &'a Chrome,
    pub currency: &'a str,
    pub images_root: Option<&'a Path>,
    pub author: Option<&'a str>,
    /// Print the one-line explanation under each section.
    pub explain: bool,
}

impl View<'_> {
    fn heading(&self, out: &mut String, title: &str, hint: &str) {
        out.push_str(&format!("{}\n", title.bold()));
        if self.explain {
            out.push_str(&format!("{}\n", hint.dimmed()));
        }
    }
}

struct Cell {
    text: String,
    tone: Option<Tone>,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: None,
        }
    }

    fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone: Some(tone),
        }
    }
}

/// Column-aligned rows. Widths are measured on the uncoloured text; a
/// `None` header skips the header line.
fn render_table(headers: Option<&[&str]>, rows: &[Vec<Cell>]) -> String {
    let columns = rows
        .iter()
        .map(Vec::len)
        .chain(headers.map(|h| h.len()))
        .max()
        .unwrap_or(0);
    let mut widths = vec![0; columns];
    for (i, h) in headers.unwrap_or_default().iter().enumerate() {
        widths[i] = h.chars().count();
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.text.chars().count());
        }
    }

    let mut out = String::new();
    if let Some(headers) = headers {
        let header_line: Vec<String> = headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad(h, *w))
            .collect();
        out.push_str(&format!("{}\n", header_line.join("  ").trim_end().bold()));
    }

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| {
                let padded = pad(&cell.text, *w);
                match cell.tone {
                    Some(tone) => paint(&padded, tone).to_string(),
                    None => padded,
                }
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

/// The four summary cards.
pub fn summary(ledger: &Ledger, view: &View<'_>) -> String {
    let chrome = view.chrome;
    let hints = &chrome.hints;
    let stats = &ledger.stats;
    let profit_tone = if stats.is_profitable() { Tone::Positive } else { Tone::Negative };

    let cards = vec![
        (
            chrome.total_profit_loss,
            Cell::toned(money(stats.total_profit, view.currency), profit_tone),
            hints.total_profit_loss,
        ),
        (
            chrome.roi,
            match stats.roi {
                Some(roi) => Cell::toned(percent(Some(roi), chrome), Tone::for_value(roi)),
                None => Cell::plain(percent(None, chrome)),
            },
            hints.roi,
        ),
        (
            chrome.win_rate,
            Cell::toned(percent(stats.win_rate, chrome), Tone::Accent),
            hints.win_rate,
        ),
        (
            chrome.total_bets,
            Cell::plain(stats.total_bets.to_string()),
            hints.total_bets,
        ),
    ];
    let rows: Vec<Vec<Cell>> = cards
        .into_iter()
        .map(|(label, value, hint)| {
            let mut row = vec![Cell::plain(label), value];
            if view.explain {
                row.push(Cell::plain(hint));
            }
            row
        })
        .collect();

    let mut out = String::new();
    match view.author {
        Some(author) => out.push_str(&format!("{} {} {author}\n", chrome.title.bold(), chrome.by)),
        None => out.push_str(&format!("{}\n", chrome.title.bold())),
    }
    out.push_str(&format!("{}\n\n", chrome.disclaimer.dimmed()));
    out.push_str(&render_table(None, &rows));
    out
}

/// The betting history table, oldest first.
pub fn history(ledger: &Ledger, view: &View<'_>, limit: Option<usize>) -> String {
    let chrome = view.chrome;
    let mut out = String::new();
    view.heading(&mut out, chrome.betting_history, chrome.hints.betting_history);
    if ledger.records.is_empty() {
        out.push_str(&format!("{}\n", chrome.no_bets));
        return out;
    }

    let skip = limit.map_or(0, |n| ledger.records.len().saturating_sub(n));
    let rows: Vec<Vec<Cell>> = ledger
        .records
        .iter()
        .skip(skip)
        .map(|r| {
            let outcome_tone = if r.outcome.is_win() { Tone::Positive } else { Tone::Negative };
            vec![
                Cell::plain(&r.date_label),
                Cell::plain(&r.fixture),
                Cell::plain(&r.bet_label),
                Cell::plain(format!("{:.2}", r.odds)),
                Cell::plain(money(r.stake, view.currency)),
                Cell::toned(&r.outcome_label, outcome_tone),
                Cell::toned(money(r.profit_loss, view.currency), Tone::for_value(r.profit_loss)),
                Cell::toned(
                    money(r.cumulative_profit, view.currency),
                    Tone::for_value(r.cumulative_profit),
                ),
                Cell::plain(proof_cell(r.image_ref.as_deref(), view)),
            ]
        })
        .collect();

    let headers = [
        chrome.date,
        chrome.fixture,
        chrome.bet_type,
        chrome.odds,
        chrome.stake,
        chrome.result,
        chrome.profit_loss,
        chrome.cumulative,
        chrome.proof,
    ];
    out.push_str(&render_table(Some(&headers), &rows));
    out
}

/// Proof image marker. A missing image degrades to a placeholder.
fn proof_cell(image_ref: Option<&str>, view: &View<'_>) -> String {
    let Some(image_ref) = image_ref else {
        return "-".into();
    };
    let name = image_ref.rsplit('/').next().unwrap_or(image_ref).to_string();
    match view.images_root {
        Some(root) if !root.join(image_ref.trim_start_matches('/')).is_file() => {
            warn!(image = image_ref, root = %root.display(), "proof image not found");
            format!("({})", view.chrome.proof_missing)
        }
        _ => name,
    }
}

/// Win/loss split and bet type counts.
pub fn breakdown(ledger: &Ledger, view: &View<'_>) -> String {
    let chrome = view.chrome;
    let split = ledger.outcome_split();

    let outcome_rows = vec![
        vec![
            Cell::toned(chrome.wins, Tone::Positive),
            Cell::plain(split.wins.to_string()),
            Cell::plain(percent(split.win_share, chrome)),
        ],
        vec![
            Cell::toned(chrome.losses, Tone::Negative),
            Cell::plain(split.losses.to_string()),
            Cell::plain(percent(split.loss_share, chrome)),
        ],
    ];

    let mut out = String::new();
    view.heading(&mut out, chrome.win_loss_distribution, chrome.hints.win_loss_distribution);
    out.push_str(&render_table(None, &outcome_rows));
    out.push('\n');
    out.push_str(&format!("{}\n", chrome.bet_types.bold()));

    let bet_types = ledger.bet_types();
    if bet_types.is_empty() {
        out.push_str(&format!("{}\n", chrome.no_bets));
        return out;
    }
    let type_rows: Vec<Vec<Cell>> = bet_types
        .entries
        .into_iter()
        .map(|e| vec![Cell::plain(e.display_name), Cell::plain(e.count.to_string())])
        .collect();
    out.push_str(&render_table(Some(&[chrome.bet_type, chrome.total_bets]), &type_rows));
    out
}

/// Both trend charts as horizontal bars.
pub fn trend(ledger: &Ledger, view: &View<'_>, width: usize) -> String {
    let chrome = view.chrome;
    let mut out = String::new();
    view.heading(&mut out, chrome.cumulative_profit_evolution, chrome.hints.cumulative_profit);
    out.push_str(&bar_chart(&ledger.cumulative_series(), view.currency, width));
    out.push('\n');
    view.heading(&mut out, chrome.profit_loss_per_bet, chrome.hints.profit_loss_per_bet);
    out.push_str(&bar_chart(&ledger.profit_series(), view.currency, width));
    out
}

fn bar_chart(points: &[SeriesPoint], currency: &str, width: usize) -> String {
    let max = points.iter().map(|p| p.value.abs()).fold(0.0_f64, f64::max);
    let rows: Vec<Vec<Cell>> = points
        .iter()
        .map(|p| {
            let tone = Tone::for_value(p.value);
            vec![
                Cell::plain(&p.short_date),
                Cell::toned(money(p.value, currency), tone),
                Cell::toned(bar(p.value, max, width), tone),
            ]
        })
        .collect();
    render_table(None, &rows)
}

fn bar(value: f64, max: f64, width: usize) -> String {
    if max == 0.0 || value == 0.0 {
        return String::new();
    }
    let len = ((value.abs() / max) * width as f64).round().max(1.0) as usize;
    "█".repeat(len)
}

/// Every violation found in the bet sheet.
pub fn validation(report: &ValidationReport) -> String {
    if report.is_valid() {
        return format!("{} {} record(s) valid\n", "✓".green().bold(), report.record_count);
    }
    let mut out = format!(
        "{} {} violation(s) in {} record(s)\n",
        "✗".red().bold(),
        report.violations.len(),
        report.record_count
    );
    for v in &report.violations {
        out.push_str(&format!("  {:?}: {}\n", v.kind, v.description));
    }
    out
}
