use ablstyle::filter::{FilterEngine, RankedList, RowState};
use ablstyle::outline::{OutlineItem, OutlineKind};

fn numbered(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("item {i}")).collect()
}

#[test]
fn selection_wraps_in_both_directions() {
    let mut list = RankedList::new(numbered(3), FilterEngine::default());
    assert_eq!(list.selected_index(), 0);

    list.move_selection_up();
    assert_eq!(list.selected_index(), 2);

    list.move_selection_down();
    assert_eq!(list.selected_index(), 0);
}

#[test]
fn selection_is_clamped_when_results_shrink() {
    let mut list = RankedList::new(numbered(12), FilterEngine::default());
    for _ in 0..11 {
        list.move_selection_down();
    }
    assert_eq!(list.selected_index(), 11);

    list.set_query("item 1");
    assert_eq!(list.results().len(), 3);
    assert_eq!(list.selected_index(), 2);

    list.set_query("nothing matches");
    assert!(list.results().is_empty());
    assert_eq!(list.selected_index(), 0);
    assert!(list.selected().is_none());

    list.move_selection_down();
    assert_eq!(list.selected_index(), 0);
}

#[test]
fn visible_window_follows_selection() {
    let mut list = RankedList::new(numbered(10), FilterEngine::default());
    assert_eq!(list.visible_window(4), 0..4);

    for _ in 0..5 {
        list.move_selection_down();
    }
    assert_eq!(list.visible_window(4), 3..7);

    list.move_selection_up();
    list.move_selection_up();
    list.move_selection_up();
    list.move_selection_up();
    list.move_selection_up();
    list.move_selection_up();
    assert_eq!(list.selected_index(), 9);
    assert_eq!(list.visible_window(4), 6..10);
    assert_eq!(list.visible_window(20), 0..10);
}

#[test]
fn render_reports_row_state() {
    let items = vec![
        OutlineItem::new("findCustomer", OutlineKind::Procedure, 4, 0).disabled(),
        OutlineItem::new("findOrder", OutlineKind::Procedure, 40, 0),
        OutlineItem::new("DEFINE TEMP-TABLE", OutlineKind::Table, 2, 0),
    ];
    let mut list = RankedList::new(items, FilterEngine::default());
    list.set_query("find");
    list.move_selection_down();

    let mut rows: Vec<(String, RowState)> = Vec::new();
    list.render_with(10, |row, state| rows.push((row.item.name.clone(), state)));

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].0, "findCustomer");
    assert!(!rows[0].1.draw_highlights);
    assert!(!rows[0].1.is_selected);
    assert_eq!(rows[1].0, "findOrder");
    assert!(rows[1].1.draw_highlights);
    assert!(rows[1].1.is_selected);
    assert_eq!(rows[1].1.position, 1);
}

#[test]
fn predicate_is_applied_after_text_match() {
    let items = vec![
        OutlineItem::new("total", OutlineKind::Function, 1, 0),
        OutlineItem::new("total", OutlineKind::Variable, 2, 1),
    ];
    let mut list = RankedList::new(items, FilterEngine::default());
    list.set_predicate(|item| item.kind == OutlineKind::Variable);
    list.set_query("tot");
    assert_eq!(list.results().len(), 1);
    assert_eq!(list.results()[0].index, 1);

    list.clear_predicate();
    assert_eq!(list.results().len(), 2);
}
