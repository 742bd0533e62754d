//! Content-side GEO signals: phrasing patterns generative engines tend to
//! quote, keyword density, and coarse quality scores for a single text.
//!
//! These look at one text in isolation and are independent of the
//! source/response pipeline.

use canonical::{count_words, split_into_sentences, split_paragraphs, words};
use fxhash::FxHashMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Occurrences at which a pattern family scores 1.0.
const PATTERN_SATURATION: f64 = 5.0;

const STOP_WORDS: &[&str] = &[
    "ve", "veya", "bir", "bu", "şu", "için", "ile", "da", "de", "mi", "den", "dan",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PatternFamily {
    Authority,
    Statistics,
    Citations,
    ExpertLanguage,
}

impl PatternFamily {
    pub const ALL: [PatternFamily; 4] = [
        PatternFamily::Authority,
        PatternFamily::Statistics,
        PatternFamily::Citations,
        PatternFamily::ExpertLanguage,
    ];

    fn patterns(self) -> &'static [Regex] {
        match self {
            PatternFamily::Authority => &AUTHORITY,
            PatternFamily::Statistics => &STATISTICS,
            PatternFamily::Citations => &CITATIONS,
            PatternFamily::ExpertLanguage => &EXPERT_LANGUAGE,
        }
    }
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|p| Regex::new(&format!("(?i){p}")).ok())
        .collect()
}

static AUTHORITY: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"araştırmalar gösteriyor",
        r"uzmanlar belirtiyor",
        r"bilimsel veriler",
        r"kanıtlanmış",
        r"çalışmalar gösteriyor",
    ])
});

static STATISTICS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\d+%",
        r"\d+ kişi",
        r"\d+\.\d+",
        r"\d+ (milyon|milyar)",
    ])
});

static CITATIONS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"kaynak:",
        r"referans:",
        r"alıntı:",
        r"\[\d+\]",
        r"\(\d{4}\)",
    ])
});

static EXPERT_LANGUAGE: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"analiz",
        r"metodoloji",
        r"hipotez",
        r"sonuç olarak",
        r"bu bağlamda",
    ])
});

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatternReport {
    pub count: usize,
    /// Matched substrings, pattern by pattern, in text order within a pattern.
    pub matches: Vec<String>,
    /// `min(count / 5, 1)`.
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoPatternAnalysis {
    pub authority: PatternReport,
    pub statistics: PatternReport,
    pub citations: PatternReport,
    pub expert_language: PatternReport,
}

impl GeoPatternAnalysis {
    pub fn get(&self, family: PatternFamily) -> &PatternReport {
        match family {
            PatternFamily::Authority => &self.authority,
            PatternFamily::Statistics => &self.statistics,
            PatternFamily::Citations => &self.citations,
            PatternFamily::ExpertLanguage => &self.expert_language,
        }
    }
}

fn scan(text: &str, family: PatternFamily) -> PatternReport {
    let matches: Vec<String> = family
        .patterns()
        .iter()
        .flat_map(|re| re.find_iter(text).map(|m| m.as_str().to_string()))
        .collect();
    let count = matches.len();
    PatternReport {
        count,
        matches,
        score: (count as f64 / PATTERN_SATURATION).min(1.0),
    }
}

/// Counts authority, statistics, citation and expert-language phrasing.
/// Patterns are case-insensitive; a span matched by two patterns of the same
/// family counts twice.
pub fn analyze_geo_patterns(text: &str) -> GeoPatternAnalysis {
    GeoPatternAnalysis {
        authority: scan(text, PatternFamily::Authority),
        statistics: scan(text, PatternFamily::Statistics),
        citations: scan(text, PatternFamily::Citations),
        expert_language: scan(text, PatternFamily::ExpertLanguage),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeywordDensity {
    pub word: String,
    pub count: usize,
    /// `count / retained words`.
    pub density: f64,
}

/// Top `top_n` keywords by count, ties broken by first occurrence.
///
/// Words are lower-cased; stop words and words of two characters or fewer
/// are not counted and do not enter the denominator.
pub fn keyword_density(text: &str, top_n: usize) -> Vec<KeywordDensity> {
    // word -> (count, first index)
    let mut counts: FxHashMap<String, (usize, usize)> = FxHashMap::default();
    let mut total = 0usize;

    for word in words(text).map(str::to_lowercase) {
        if word.chars().count() <= 2 || STOP_WORDS.contains(&word.as_str()) {
            continue;
        }
        let first_seen = counts.len();
        counts.entry(word).or_insert((0, first_seen)).0 += 1;
        total += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(top_n)
        .map(|(word, count, _)| KeywordDensity {
            word,
            count,
            density: count as f64 / total as f64,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ContentQuality {
    /// `min(words / 1000, 1)`.
    pub length_score: f64,
    /// Peaks at 15 words per sentence.
    pub readability_score: f64,
    /// `min(paragraphs / 10, 1)`.
    pub structure_score: f64,
    /// Mean of the three scores.
    pub overall_score: f64,
}

const IDEAL_WORDS: f64 = 1000.0;
const IDEAL_SENTENCE_WORDS: f64 = 15.0;
const IDEAL_PARAGRAPHS: f64 = 10.0;

pub fn content_quality(text: &str) -> ContentQuality {
    let word_total = count_words(text);
    let sentences = split_into_sentences(text);

    let length_score = (word_total as f64 / IDEAL_WORDS).min(1.0);
    let readability_score = if sentences.is_empty() {
        0.0
    } else {
        let average = sentences.iter().map(|s| count_words(s)).sum::<usize>() as f64
            / sentences.len() as f64;
        1.0 - ((average - IDEAL_SENTENCE_WORDS).abs() / IDEAL_SENTENCE_WORDS).min(1.0)
    };
    let structure_score = (split_paragraphs(text).len() as f64 / IDEAL_PARAGRAPHS).min(1.0);

    ContentQuality {
        length_score,
        readability_score,
        structure_score,
        overall_score: (length_score + readability_score + structure_score) / 3.0,
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    /// `content` or `geo`.
    pub category: String,
    pub element: String,
    pub severity: Severity,
    pub message: String,
}

impl Recommendation {
    fn medium(category: &str, element: &str, message: &str) -> Self {
        Self {
            category: category.to_string(),
            element: element.to_string(),
            severity: Severity::Medium,
            message: message.to_string(),
        }
    }
}

pub fn content_recommendations(
    patterns: &GeoPatternAnalysis,
    quality: &ContentQuality,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if quality.length_score < 0.5 {
        recommendations.push(Recommendation::medium(
            "content",
            "length",
            "Content should be at least 500 words long.",
        ));
    }
    if patterns.authority.score < 0.3 {
        recommendations.push(Recommendation::medium(
            "geo",
            "authority",
            "Add phrases that signal authority, such as cited research or expert statements.",
        ));
    }
    if patterns.statistics.score < 0.3 {
        recommendations.push(Recommendation::medium(
            "geo",
            "statistics",
            "Add concrete statistics: percentages, counts and figures.",
        ));
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE: &str = "Araştırmalar gösteriyor ki yapay zeka hızla büyüyor. \
        Uzmanlar belirtiyor: 2023 yılında kullanıcıların 45% kadarı yapay zeka kullandı. \
        Türkiye'de 3 milyon kişi bu araçları deniyor ve büyüme 2.5 kat oldu [1]. \
        Kaynak: TÜİK (2023). Sonuç olarak bu bağlamda yapılan analiz önemlidir.";

    #[test]
    fn pattern_families_are_counted() {
        let analysis = analyze_geo_patterns(ARTICLE);
        assert_eq!(analysis.authority.count, 2);
        assert_eq!(
            analysis.authority.matches,
            vec!["Araştırmalar gösteriyor", "Uzmanlar belirtiyor"]
        );
        assert!((analysis.authority.score - 0.4).abs() < 1e-12);

        // "45%", "2.5", "3 milyon"
        assert_eq!(analysis.statistics.count, 3);
        assert!(analysis.statistics.matches.contains(&"3 milyon".to_string()));

        // "Kaynak:", "[1]", "(2023)"
        assert_eq!(analysis.citations.count, 3);

        // "analiz", "Sonuç olarak", "bu bağlamda"
        assert_eq!(analysis.expert_language.count, 3);
    }

    #[test]
    fn pattern_score_saturates() {
        let text = "10% 20% 30% 40% 50% 60% 70%";
        let analysis = analyze_geo_patterns(text);
        assert_eq!(analysis.statistics.count, 7);
        assert_eq!(analysis.statistics.score, 1.0);
        assert_eq!(analysis.get(PatternFamily::Statistics).count, 7);
    }

    #[test]
    fn empty_text_has_no_patterns() {
        let analysis = analyze_geo_patterns("");
        for family in PatternFamily::ALL {
            assert_eq!(analysis.get(family).count, 0);
            assert_eq!(analysis.get(family).score, 0.0);
        }
    }

    #[test]
    fn keyword_density_skips_stop_words_and_short_words() {
        let text = "Yapay zeka ve yapay öğrenme için bir yapay ağ, zeka.";
        let top = keyword_density(text, 3);
        // retained: yapay, zeka, yapay, öğrenme, yapay, zeka
        assert_eq!(top[0].word, "yapay");
        assert_eq!(top[0].count, 3);
        assert!((top[0].density - 0.5).abs() < 1e-12);
        assert_eq!(top[1].word, "zeka");
        assert_eq!(top[2].word, "öğrenme");
        assert_eq!(top.len(), 3);
    }

    #[test]
    fn keyword_ties_keep_first_occurrence() {
        let top = keyword_density("gamma alpha beta gamma beta alpha", 3);
        let order: Vec<&str> = top.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(order, vec!["gamma", "alpha", "beta"]);
    }

    #[test]
    fn keyword_density_of_empty_text() {
        assert!(keyword_density("", 10).is_empty());
        assert!(keyword_density("ve bu da", 10).is_empty());
    }

    #[test]
    fn quality_of_empty_text_is_zero() {
        let quality = content_quality("");
        assert_eq!(quality.length_score, 0.0);
        assert_eq!(quality.readability_score, 0.0);
        assert_eq!(quality.structure_score, 0.0);
        assert_eq!(quality.overall_score, 0.0);
    }

    #[test]
    fn quality_rewards_fifteen_word_sentences() {
        let sentence = "Bu cümle tam olarak on beş kelimeden oluşan \
            ve okunması kolay olan örnek bir cümledir.";
        assert_eq!(count_words(sentence), 15);
        let quality = content_quality(sentence);
        assert_eq!(quality.readability_score, 1.0);
        assert!((quality.length_score - 0.015).abs() < 1e-12);
        assert!((quality.structure_score - 0.1).abs() < 1e-12);
        let mean =
            (quality.length_score + quality.readability_score + quality.structure_score) / 3.0;
        assert!((quality.overall_score - mean).abs() < 1e-12);
    }

    #[test]
    fn recommendations_follow_thresholds() {
        let weak = content_recommendations(&analyze_geo_patterns(""), &content_quality(""));
        let elements: Vec<&str> = weak.iter().map(|r| r.element.as_str()).collect();
        assert_eq!(elements, vec!["length", "authority", "statistics"]);
        assert!(weak.iter().all(|r| r.severity == Severity::Medium));

        let strong_patterns = analyze_geo_patterns(
            "Araştırmalar gösteriyor. Uzmanlar belirtiyor. Kanıtlanmış. 10% 20% 30%",
        );
        let long_quality = ContentQuality {
            length_score: 1.0,
            readability_score: 1.0,
            structure_score: 1.0,
            overall_score: 1.0,
        };
        assert!(content_recommendations(&strong_patterns, &long_quality).is_empty());
    }
}
