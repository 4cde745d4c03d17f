// analysis.rs — pulls structure out of free-text coaching commentary.
//
// The commentary arrives as an opaque blob from an external AI/coach source
// with no format guarantee, so everything here is heuristic: an ordered
// pattern cascade for the score, line/keyword scanning for corrections.
// All functions are pure; absent signal degrades to None / empty, never errors.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::focus::FocusSet;

/// Score patterns, most specific first. A labeled form must win over a bare
/// `N/100` so an unrelated number elsewhere in the text can't claim the score.
const SCORE_PATTERNS: &[&str] = &[
    r"(?i)score[:\s]*(\d+)/100",       // "Score: 75/100"
    r"(?i)technique\s+score[:\s]*(\d+)", // "Technique Score: 82"
    r"(\d+)/100",                      // "75/100"
    r"(?i)score[:\s]*(\d+)",           // "Score: 75"
    r"(?i)rating[:\s]*(\d+)",          // "Rating: 75"
    r"(?i)\*\*score[:\s]*(\d+)\*\*",   // "**Score: 75**"
    r"(?i)overall[:\s]*(\d+)",         // "Overall: 75"
];

fn score_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        SCORE_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("score pattern must compile"))
            .collect()
    })
}

/// Extract a 0–100 quality score from commentary, or `None` when no pattern
/// yields one. Callers must treat `None` as "no score available", not zero.
pub fn extract_score(text: &str) -> Option<u8> {
    if text.is_empty() {
        return None;
    }
    for pattern in score_patterns() {
        let Some(caps) = pattern.captures(text) else { continue };
        let Ok(value) = caps[1].parse::<u32>() else { continue };
        // Out of range means this pattern grabbed the wrong number; keep going.
        if value <= 100 {
            tracing::debug!(score = value, pattern = %pattern, "extracted score");
            return Some(value as u8);
        }
    }
    tracing::debug!("no score pattern matched commentary");
    None
}

/// Lexical cues that mark a sentence as correction-like even without
/// numbering or bullets.
const CORRECTION_CUES: &[&str] = &["improve", "focus on", "work on", "keep", "maintain", "adjust"];

const MAX_CORRECTIONS: usize = 5;

fn numbered() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\s*").expect("numbering pattern must compile"))
}

fn bulleted() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[-*•]\s*").expect("bullet pattern must compile"))
}

fn sentences() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^.!?]+[.!?]+").expect("sentence pattern must compile"))
}

fn line_qualifies(line: &str) -> bool {
    if numbered().is_match(line) || bulleted().is_match(line) {
        return true;
    }
    let lower = line.to_lowercase();
    CORRECTION_CUES.iter().any(|cue| lower.contains(cue))
}

/// Scan commentary for actionable correction statements: numbered or bulleted
/// lines, or lines carrying an improvement cue. Falls back to the first three
/// sentences when nothing qualifies. At most five entries, discovery order.
pub fn extract_corrections(text: &str) -> Vec<String> {
    let mut corrections = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if !line_qualifies(trimmed) {
            continue;
        }
        let denumbered = numbered().replace(trimmed, "");
        let cleaned = bulleted().replace(denumbered.as_ref(), "");
        let len = cleaned.chars().count();
        if len > 10 && len < 150 {
            corrections.push(cleaned.into_owned());
        }
    }

    if corrections.is_empty() {
        corrections.extend(
            sentences()
                .find_iter(text)
                .take(3)
                .map(|m| m.as_str().trim().to_string()),
        );
    }

    corrections.truncate(MAX_CORRECTIONS);
    corrections
}

/// Skill-rating adjustment breakpoints. This is the surrounding application's
/// business rule, not part of the visualization core; it rides along in the
/// report so the storage collaborator can apply it.
pub fn rating_delta(score: u8) -> i32 {
    match score {
        90..=u8::MAX => 15,
        80..=89 => 10,
        70..=79 => 5,
        60..=69 => 0,
        50..=59 => -5,
        _ => -10,
    }
}

/// Apply [`rating_delta`] to an existing skill rating, clamped to the
/// 100..=3000 band the rating system lives in.
pub fn apply_rating(rating: i32, score: u8) -> i32 {
    (rating + rating_delta(score)).clamp(100, 3000)
}

/// Everything the extraction stages derive from one commentary blob.
/// Recomputed fresh per commentary; never cached or mutated.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub score: Option<u8>,
    pub corrections: Vec<String>,
    pub focus: FocusSet,
    pub rating_delta: Option<i32>,
}

impl AnalysisReport {
    pub fn from_commentary(text: &str) -> Self {
        let score = extract_score(text);
        let corrections = extract_corrections(text);
        let focus = FocusSet::classify(&corrections);
        Self {
            score,
            corrections,
            focus,
            rating_delta: score.map(rating_delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::FocusArea;

    #[test]
    fn labeled_fraction_wins() {
        assert_eq!(extract_score("Score: 87/100. Solid release."), Some(87));
    }

    #[test]
    fn case_insensitive_patterns() {
        assert_eq!(extract_score("TECHNIQUE SCORE: 82"), Some(82));
        assert_eq!(extract_score("**score: 64**"), Some(64));
        assert_eq!(extract_score("overall: 71"), Some(71));
    }

    #[test]
    fn cascade_order_decides_between_candidates() {
        // The 12/100 drill count must not shadow the labeled score.
        let text = "You made 12/100 attempts. Score: 55";
        // Pattern 1 (labeled fraction) misses, pattern 3 (bare fraction) hits
        // first with 12 — which is in range, so it wins by cascade order.
        assert_eq!(extract_score(text), Some(12));
        // But a labeled fraction beats the bare one outright.
        assert_eq!(extract_score("12 reps done. Score: 55/100"), Some(55));
    }

    #[test]
    fn out_of_range_falls_through_to_next_pattern() {
        assert_eq!(extract_score("Score: 150. Rating: 85"), Some(85));
        assert_eq!(extract_score("Score: 999"), None);
    }

    #[test]
    fn no_score_is_none_not_zero() {
        assert_eq!(extract_score(""), None);
        assert_eq!(extract_score("Nice work on the footwork today."), None);
    }

    #[test]
    fn numbered_and_bulleted_lines_qualify() {
        let text = "Summary of the attempt.\n1. Bend your knees more deeply.\n- Keep your elbow tucked in.\n* Maintain a straight back.";
        let got = extract_corrections(text);
        assert_eq!(
            got,
            vec![
                "Bend your knees more deeply.",
                "Keep your elbow tucked in.",
                "Maintain a straight back.",
            ]
        );
    }

    #[test]
    fn keyword_lines_qualify_without_markers() {
        let got = extract_corrections("You should focus on your follow through every time.");
        assert_eq!(got, vec!["You should focus on your follow through every time."]);
    }

    #[test]
    fn short_and_long_lines_are_dropped() {
        let long = format!("1. {}", "a".repeat(160));
        let text = format!("{long}\n2. Tuck.\n3. Adjust your plant foot position.");
        assert_eq!(extract_corrections(&text), vec!["Adjust your plant foot position."]);
    }

    #[test]
    fn sentence_fallback_takes_first_three() {
        let text = "Great energy today. The release looked late. Next session we film again. A fourth sentence.";
        let got = extract_corrections(text);
        assert_eq!(
            got,
            vec![
                "Great energy today.",
                "The release looked late.",
                "Next session we film again.",
            ]
        );
    }

    #[test]
    fn capped_at_five() {
        let text = (1..=8)
            .map(|i| format!("{i}. Work on correction number {i} now."))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(extract_corrections(&text).len(), 5);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert!(extract_corrections("").is_empty());
    }

    #[test]
    fn rating_breakpoints() {
        assert_eq!(rating_delta(95), 15);
        assert_eq!(rating_delta(90), 15);
        assert_eq!(rating_delta(84), 10);
        assert_eq!(rating_delta(70), 5);
        assert_eq!(rating_delta(60), 0);
        assert_eq!(rating_delta(50), -5);
        assert_eq!(rating_delta(12), -10);
    }

    #[test]
    fn rating_clamped_to_band() {
        assert_eq!(apply_rating(2995, 95), 3000);
        assert_eq!(apply_rating(100, 10), 100);
        assert_eq!(apply_rating(1200, 85), 1210);
    }

    #[test]
    fn report_end_to_end() {
        let report = AnalysisReport::from_commentary(
            "Score: 45/100.\n1. Bend your knee more please.\n2. Keep your back straight.",
        );
        assert_eq!(report.score, Some(45));
        assert_eq!(
            report.corrections,
            vec!["Bend your knee more please.", "Keep your back straight."]
        );
        assert_eq!(report.rating_delta, Some(-10));
        assert!(report.focus.contains(FocusArea::Legs));
        assert!(report.focus.contains(FocusArea::Posture));
    }

    #[test]
    fn empty_commentary_report() {
        let report = AnalysisReport::from_commentary("");
        assert_eq!(report.score, None);
        assert!(report.corrections.is_empty());
        assert!(report.focus.is_empty());
        assert_eq!(report.rating_delta, None);
    }
}
