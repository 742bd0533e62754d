use std::thread;

use geoscore::{split_into_sentences, AnalysisResult, GeoEngine};

const SOURCE: &str = "Yapay zeka hızla gelişiyor. Dr. Yılmaz'a göre büyüme 3.5 kat oldu. \
    Bu teknoloji eğitimi dönüştürecek...";
const RESPONSE: &str = "Araştırmalar gösteriyor ki yapay zeka hızla gelişiyor. \
    Dr. Yılmaz'a göre büyüme 3.5 kat oldu! Eğitim de değişecek.";

fn strip_timing(mut result: AnalysisResult) -> AnalysisResult {
    result.meta.processing_time_ms = 0.0;
    result
}

#[test]
fn repeated_analysis_is_identical() {
    let engine = GeoEngine::default();
    let first = engine.analyze(SOURCE, RESPONSE, None).expect("first");
    let second = engine.analyze(SOURCE, RESPONSE, None).expect("second");
    assert_eq!(strip_timing(first), strip_timing(second));
}

#[test]
fn fresh_engines_agree() {
    let a = GeoEngine::default().analyze(SOURCE, RESPONSE, None).expect("a");
    let b = GeoEngine::default().analyze(SOURCE, RESPONSE, None).expect("b");
    assert_eq!(strip_timing(a), strip_timing(b));
}

#[test]
fn shared_engine_across_threads() {
    let engine = GeoEngine::default();
    let expected = strip_timing(engine.analyze(SOURCE, RESPONSE, None).expect("baseline"));

    let results: Vec<AnalysisResult> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| engine.analyze(SOURCE, RESPONSE, None).expect("threaded")))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .collect()
    });

    for result in results {
        assert_eq!(strip_timing(result), expected);
    }
}

#[test]
fn splitting_is_restartable() {
    let first = split_into_sentences(SOURCE);
    let second = split_into_sentences(SOURCE);
    assert_eq!(first, second);
    assert_eq!(
        first,
        vec![
            "Yapay zeka hızla gelişiyor.",
            "Dr. Yılmaz'a göre büyüme 3.5 kat oldu.",
            "Bu teknoloji eğitimi dönüştürecek...",
        ]
    );
}

#[test]
fn matches_are_reproducible_evidence() {
    let result = GeoEngine::default()
        .analyze(SOURCE, RESPONSE, None)
        .expect("analysis");
    let kinds: Vec<(usize, &str)> = result
        .matches
        .iter()
        .map(|m| (m.position, m.kind.as_str()))
        .collect();
    assert_eq!(kinds, vec![(0, "exact"), (1, "fuzzy")]);
}
