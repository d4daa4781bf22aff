use crate::protocol::{BandSnapshot, MaturityBand, Pillar};

use super::catalog;
use super::AnswerSet;

// ── Score derivation ────────────────────────────────────────────────

/// Mean of the answered scores within one pillar. Unanswered questions
/// contribute nothing; `None` when the pillar has no answered questions.
pub fn pillar_score(pillar: Pillar, answers: &AnswerSet) -> Option<f64> {
    let scores: Vec<u8> = catalog::pillar_questions(pillar)
        .iter()
        .filter_map(|q| answers.get(&q.id).copied())
        .collect();
    mean(&scores)
}

/// Mean of all answered scores across every pillar.
pub fn overall_score(answers: &AnswerSet) -> Option<f64> {
    let scores: Vec<u8> = catalog::all_questions()
        .iter()
        .filter_map(|q| answers.get(&q.id).copied())
        .collect();
    mean(&scores)
}

/// Collapses a possibly-absent score to its displayed value. An
/// assessment with nothing answered renders as 0.0, which lands in the
/// lowest band.
pub fn display_score(score: Option<f64>) -> f64 {
    score.unwrap_or(0.0)
}

fn mean(scores: &[u8]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let sum: f64 = scores.iter().map(|&s| f64::from(s)).sum();
    Some(sum / scores.len() as f64)
}

// ── Maturity bands ──────────────────────────────────────────────────

pub struct BandInfo {
    pub band: MaturityBand,
    pub label: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

static NASCENT: BandInfo = BandInfo {
    band: MaturityBand::Nascent,
    label: "Nascent",
    description: "AI is an idea, not yet a practice. The foundations — data, \
                  platform, skills — still need to be laid before investment pays off.",
    color: "#ef4444",
};

static DEVELOPING: BandInfo = BandInfo {
    band: MaturityBand::Developing,
    label: "Developing",
    description: "Early building blocks are in place and pilots are underway, \
                  but results are uneven and hard to repeat.",
    color: "#f59e0b",
};

static ADVANCING: BandInfo = BandInfo {
    band: MaturityBand::Advancing,
    label: "Advancing",
    description: "AI delivers value in several parts of the business, with \
                  working platforms and processes. Scale and consistency are the next frontier.",
    color: "#3b82f6",
};

static LEADING: BandInfo = BandInfo {
    band: MaturityBand::Leading,
    label: "Leading",
    description: "AI is part of how the organization runs. The opportunity now \
                  is compounding advantage: sharper governance, faster iteration, new products.",
    color: "#22c55e",
};

/// Thresholds a score on the 1..=4 scale into its maturity band.
/// Lower-inclusive cut points at 1.5, 2.5, and 3.5: a score of exactly
/// 2.5 is Advancing, and anything below 1.5 (including the degenerate
/// 0.0 shown for an empty assessment) is Nascent.
pub fn maturity_band(score: f64) -> &'static BandInfo {
    if score >= 3.5 {
        &LEADING
    } else if score >= 2.5 {
        &ADVANCING
    } else if score >= 1.5 {
        &DEVELOPING
    } else {
        &NASCENT
    }
}

impl BandInfo {
    pub fn snapshot(&self) -> BandSnapshot {
        BandSnapshot {
            band: self.band,
            label: self.label.to_string(),
            description: self.description.to_string(),
            color: self.color.to_string(),
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────
