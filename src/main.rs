//! Command line front end.
//!
//! Filters lines (or an outline dump) read from stdin with the configured
//! engine and prints the ranked rows, or prints resolved theme entries.
//!
//! # Usage
//!
//! ```text
//! ablstyle [key=value ...]
//!
//!   query=<text>         filter query (default: empty, keeps every line)
//!   mode=substring|fuzzy matching primitive
//!   outline=true         stdin is an outline dump (kind, name, line, level)
//!   theme_file=<path>    theme resource (default: built-in themes)
//!   theme=<name|index>   active theme
//!   resolve=<style-key>  print the resolved entry of a style key and exit
//!   themes=true          print the theme resource and exit
//!   config=<path>        TOML configuration; other keys override it
//!   trace_level=<level>  log level (default: info)
//!   log_file=<path>      log to a rotating file instead of stderr
//!   json=true            print JSON lines instead of text
//! ```
//!
//! In text output, matched ranges are wrapped in `[` `]` unless the row is
//! disabled, and the selected (first) row is marked with `>`.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::process::ExitCode;

use ablstyle::filter::{FilterableItem, MatchRange, RankedItem, RankedList, RowState};
use ablstyle::theme::{write_themes, StyleKey, ThemeEntry};
use ablstyle::{initialize, outline, AblStyleError, Config, Result, ThemeStore};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ablstyle: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    let config = load_config(&args)?;
    ablstyle::observability::init_tracing(&config)?;

    let _span = tracing::debug_span!("run", args = args.len()).entered();
    let store = initialize(&config)?;
    let json = flag(&args, "json");
    let mut out = io::stdout().lock();

    if flag(&args, "themes") {
        out.write_all(write_themes(store.themes()).as_bytes())?;
        return Ok(());
    }

    if let Some(key) = args.get("resolve") {
        let key: StyleKey = key.parse()?;
        return print_resolved(&mut out, &store, key, json);
    }

    let input = io::read_to_string(io::stdin().lock())?;
    let query = args.get("query").map(String::as_str).unwrap_or_default();

    if flag(&args, "outline") {
        let mut list = RankedList::new(outline::parse_outline(&input), config.engine());
        list.set_query(query);
        print_rows(&mut out, &list, json)
    } else {
        let lines: Vec<String> = input.lines().map(String::from).collect();
        let mut list = RankedList::new(lines, config.engine());
        list.set_query(query);
        print_rows(&mut out, &list, json)
    }
}

/// Collects `key=value` arguments.
fn parse_args(args: impl Iterator<Item = String>) -> Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    for arg in args {
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| AblStyleError::Config(format!("expected key=value, got {arg:?}")))?;
        map.insert(key.trim().to_string(), value.to_string());
    }
    Ok(map)
}

fn load_config(args: &BTreeMap<String, String>) -> Result<Config> {
    let overrides = Config::from_map(args);
    match args.get("config") {
        Some(path) => Ok(Config::from_file(path)?.merge(overrides)),
        None => Ok(overrides),
    }
}

fn flag(args: &BTreeMap<String, String>, key: &str) -> bool {
    args.get(key)
        .is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}

fn print_resolved(out: &mut impl Write, store: &ThemeStore, key: StyleKey, json: bool) -> Result<()> {
    let entry = store.resolve_inherited(key, ThemeEntry::default());
    if json {
        serde_json::to_writer(&mut *out, &entry)?;
        writeln!(out)?;
    } else {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            store.active_theme().name,
            key,
            entry.fore_color,
            entry.back_color,
            entry.font.bits()
        )?;
    }
    Ok(())
}

fn print_rows<T>(out: &mut impl Write, list: &RankedList<T>, json: bool) -> Result<()>
where
    T: FilterableItem + Clone + serde::Serialize,
{
    let mut result = Ok(());
    list.render_with(list.results().len(), |row, state| {
        if result.is_err() {
            return;
        }
        result = if json {
            write_json_row(&mut *out, row)
        } else {
            write_text_row(&mut *out, row, state)
        };
    });
    result
}

fn write_json_row<T: serde::Serialize>(out: &mut impl Write, row: &RankedItem<T>) -> Result<()> {
    serde_json::to_writer(&mut *out, row)?;
    writeln!(out)?;
    Ok(())
}

fn write_text_row<T: FilterableItem>(
    out: &mut impl Write,
    row: &RankedItem<T>,
    state: RowState,
) -> Result<()> {
    let marker = if state.is_selected { '>' } else { ' ' };
    let text = if state.draw_highlights {
        bracket_ranges(row.display_text(), row.matched_ranges())
    } else {
        row.display_text().to_string()
    };
    writeln!(out, "{marker} {text}\t{:.2}", row.dispersion_level())?;
    Ok(())
}

/// Wraps each matched character range of `text` in brackets.
fn bracket_ranges(text: &str, ranges: &[MatchRange]) -> String {
    let mut out = String::with_capacity(text.len() + ranges.len() * 2);
    let mut ranges = ranges.iter().peekable();
    for (position, c) in text.chars().enumerate() {
        if ranges.peek().is_some_and(|r| r.start == position) {
            out.push('[');
        }
        out.push(c);
        if let Some(range) = ranges.peek() {
            if position + 1 == range.end() {
                out.push(']');
                ranges.next();
            }
        }
    }
    out
}
