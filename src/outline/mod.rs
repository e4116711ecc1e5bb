//! Code explorer outline model.
//!
//! Outline nodes describe the procedures, functions, methods and other
//! declarations of an ABL source file. They implement
//! [`FilterableItem`](crate::filter::FilterableItem) so the explorer list can
//! be filtered with the same engine as any other list.
//!
//! # Dump format
//!
//! [`parse_outline`] reads a flat, tab-separated dump, one node per line:
//!
//! ```text
//! procedure	initialize	12	0
//! variable	cCustName	14	1
//! function	getTotal	40	0	disabled
//! ```
//!
//! Fields are kind, name, line, level and an optional `disabled` marker
//! (`disabled`, `true` or `1`). Malformed lines are skipped.

pub mod item;

pub use item::{OutlineItem, OutlineKind};

/// Parses an outline dump and fills in `has_children` from the levels.
#[must_use]
pub fn parse_outline(text: &str) -> Vec<OutlineItem> {
    let _span = tracing::debug_span!("parse_outline", bytes = text.len()).entered();

    let mut items: Vec<OutlineItem> = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(idx, line)| {
            let parsed = parse_line(line);
            if parsed.is_none() {
                tracing::debug!(line_number = idx + 1, "skipping outline line");
            }
            parsed
        })
        .collect();

    for i in 1..items.len() {
        if items[i].level > items[i - 1].level {
            items[i - 1].has_children = true;
        }
    }

    tracing::debug!(item_count = items.len(), "outline parsed");
    items
}

fn parse_line(line: &str) -> Option<OutlineItem> {
    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    let (kind, name, line_no, level, flag) = match fields.as_slice() {
        &[kind, name, line_no, level] => (kind, name, line_no, level, None),
        &[kind, name, line_no, level, flag] => (kind, name, line_no, level, Some(flag)),
        _ => return None,
    };

    if name.is_empty() {
        return None;
    }

    let mut item = OutlineItem::new(
        name,
        kind.parse().ok()?,
        line_no.parse().ok()?,
        level.parse().ok()?,
    );
    if flag.is_some_and(|f| matches!(f.to_ascii_lowercase().as_str(), "disabled" | "true" | "1")) {
        item = item.disabled();
    }
    Some(item)
}
