use geoscore::{analyze, get_insights, InsightKind};

#[test]
fn identical_text_yields_success_insights() {
    let text = "Bu metin birebir eşleşecek.";
    let result = analyze(text, text, None).expect("analysis");
    let insights = get_insights(&result);

    let kinds: Vec<InsightKind> = insights.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![InsightKind::Success, InsightKind::Info, InsightKind::Success]
    );
    assert!(insights[0].message.contains("100/100"));
    assert!(insights[1].message.starts_with("1 match(es)"));
    assert!(insights[2].message.contains("verbatim"));
}

#[test]
fn unmatched_response_yields_warnings() {
    let result = analyze("Kedi evde uyuyor.", "Matematik ödev zor.", None).expect("analysis");
    let insights = get_insights(&result);

    assert_eq!(insights.len(), 2);
    assert!(insights.iter().all(|i| i.kind == InsightKind::Warning));
    assert!(insights[1].message.contains("No source sentence"));
}

#[test]
fn medium_band_has_no_band_insight() {
    let source = "Yapay zeka hızla gelişiyor.";
    let response = "Yapay zeka hızla gelişiyor. Bugün hava güzel. Futbol maçı akşam.";
    let result = analyze(source, response, None).expect("analysis");
    assert_eq!(result.visibility, 40);

    let insights = get_insights(&result);
    assert!(insights.iter().all(|i| !i.message.contains("visibility (")));
    assert_eq!(insights.len(), 2);
}

#[test]
fn insights_do_not_depend_on_timing() {
    let text = "Bu metin birebir eşleşecek.";
    let mut result = analyze(text, text, None).expect("analysis");
    let before = get_insights(&result);
    result.meta.processing_time_ms = 1e9;
    assert_eq!(get_insights(&result), before);
}
