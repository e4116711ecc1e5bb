use ablstyle::filter::{FilterEngine, FilterableItem, MatchMode, MatchRange};
use ablstyle::outline::{OutlineItem, OutlineKind};

fn texts<T: FilterableItem>(ranked: &[ablstyle::RankedItem<&T>]) -> Vec<String> {
    ranked
        .iter()
        .map(|r| r.item.display_text().to_string())
        .collect()
}

#[test]
fn excludes_items_missing_any_token() {
    let items = vec![
        "FOR EACH customer NO-LOCK".to_string(),
        "FIND FIRST customer".to_string(),
        "for each order".to_string(),
    ];
    let ranked = FilterEngine::default().apply("each CUSTOMER", &items);
    assert_eq!(texts(&ranked), vec!["FOR EACH customer NO-LOCK"]);
}

#[test]
fn filtering_is_idempotent() {
    let items = vec![
        "procedure initialize".to_string(),
        "function getTotal".to_string(),
        "procedure finalize".to_string(),
        "method Initialize".to_string(),
    ];
    let engine = FilterEngine::new(MatchMode::Fuzzy);

    let first = engine.apply("ini", &items);
    let second = engine.apply("ini", &first);

    assert_eq!(
        texts(&first),
        second
            .iter()
            .map(|r| r.item.display_text().to_string())
            .collect::<Vec<_>>()
    );
    assert_eq!(engine.apply("ini", &items), first);
}

#[test]
fn empty_query_returns_all_items_in_order() {
    let items = vec!["c".to_string(), "a".to_string(), "b".to_string()];
    let ranked = FilterEngine::default().apply("", &items);
    assert_eq!(texts(&ranked), vec!["c", "a", "b"]);
    assert!(ranked.iter().all(|r| r.matched_ranges().is_empty()));
}

#[test]
fn contiguous_early_match_ranks_first() {
    let items = vec!["pineapple".to_string(), "apple pie".to_string()];
    let ranked = FilterEngine::new(MatchMode::Fuzzy).apply("pie", &items);

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].item, "apple pie");
    assert_eq!(ranked[0].matched_ranges(), &[MatchRange::new(6, 3)]);
    assert!(ranked[1].matched_ranges().len() > 1);
}

#[test]
fn exact_prefix_beats_every_other_position() {
    let items = vec![
        "xx run".to_string(),
        "r u n".to_string(),
        "run".to_string(),
        "x run".to_string(),
    ];
    let ranked = FilterEngine::new(MatchMode::Fuzzy).apply("run", &items);
    assert_eq!(ranked[0].item, "run");
    assert_eq!(ranked[1].item, "x run");
    assert_eq!(ranked[2].item, "xx run");
    assert_eq!(ranked[3].item, "r u n");
}

#[test]
fn disabled_items_are_listed_without_highlights() {
    let items = vec![
        OutlineItem::new("getTotal", OutlineKind::Function, 10, 0).disabled(),
        OutlineItem::new("getName", OutlineKind::Function, 20, 0),
    ];
    let ranked = FilterEngine::default().apply("get", &items);

    assert_eq!(ranked.len(), 2);
    assert!(ranked[0].is_disabled);
    assert!(!ranked[0].draws_highlights());
    assert!(ranked[1].draws_highlights());
}

#[test]
fn predicate_narrows_matches_by_kind() {
    let items = vec![
        OutlineItem::new("getTotal", OutlineKind::Function, 10, 0),
        OutlineItem::new("getTotal", OutlineKind::Method, 30, 1),
    ];
    let ranked = FilterEngine::default().apply_with("total", &items, |item| {
        item.kind == OutlineKind::Method
    });
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].index, 1);
}

#[test]
fn rank_keeps_non_matching_rows() {
    let items = vec!["alpha".to_string(), "beta".to_string()];
    let ranked = FilterEngine::default().rank("beta", &items);
    assert_eq!(ranked.len(), 2);
    assert!(!ranked[0].fully_matches());
    assert!(ranked[1].fully_matches());
}

#[test]
fn substring_filtering_is_idempotent() {
    let items = vec![
        "DEFINE VARIABLE cName".to_string(),
        "define buffer bCust".to_string(),
        "FIND FIRST customer".to_string(),
        "run defineAll.p".to_string(),
    ];
    let engine = FilterEngine::new(MatchMode::Substring);

    let first = engine.apply("define", &items);
    let second = engine.apply("define", &first);

    assert_eq!(
        texts(&first),
        vec!["DEFINE VARIABLE cName", "define buffer bCust", "run defineAll.p"]
    );
    assert_eq!(
        texts(&first),
        second
            .iter()
            .map(|r| r.item.display_text().to_string())
            .collect::<Vec<_>>()
    );
}

#[test]
fn query_equal_to_item_text_always_matches() {
    let items = vec![
        "ΟΔΟΣ".to_string(),
        "Οδός Σταδίου".to_string(),
        "İstanbul".to_string(),
        "GROẞE Straße".to_string(),
        "ΚΑΛΗΣΠΕΡΑ ΣΑΣ".to_string(),
    ];

    for mode in [MatchMode::Substring, MatchMode::Fuzzy] {
        let engine = FilterEngine::new(mode);
        for (index, text) in items.iter().enumerate() {
            let folded: String = text.chars().flat_map(char::to_lowercase).collect();
            for query in [text.clone(), folded] {
                let ranked = engine.apply(query.as_str(), &items);
                assert!(
                    ranked.iter().any(|r| r.index == index),
                    "{mode}: {query:?} should match {text:?}"
                );
            }
        }
    }
}
