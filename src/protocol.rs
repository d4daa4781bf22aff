use serde::{Deserialize, Serialize};

// ── Core type aliases ──────────────────────────────────────────────

pub type QuestionId = u32;

// ── Pillars ────────────────────────────────────────────────────────

/// Top-level categories of organizational AI maturity. Each pillar owns
/// a fixed, ordered pair of questions in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pillar {
    DataReadiness,
    Infrastructure,
    Talent,
    Governance,
    Strategy,
    Culture,
}

// ── Maturity bands ─────────────────────────────────────────────────

/// Qualitative maturity tiers, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaturityBand {
    Nascent,
    Developing,
    Advancing,
    Leading,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandSnapshot {
    pub band: MaturityBand,
    pub label: String,
    pub description: String,
    pub color: String,
}

// ── Intro ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntroSnapshot {
    pub title: String,
    pub blurb: String,
    pub question_count: u32,
    pub pillar_names: Vec<String>,
}

// ── Question view ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionSnapshot {
    pub label: String,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSnapshot {
    pub id: QuestionId,
    pub pillar: Pillar,
    pub pillar_name: String,
    pub prompt: String,
    pub options: Vec<OptionSnapshot>,
    /// Score previously chosen for this question, if the visitor has
    /// stepped back to it.
    pub selected: Option<u8>,
    /// 1-based position of this question across the whole assessment.
    pub number: u32,
    pub total: u32,
    pub answered: u32,
}

// ── Results view ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PillarResult {
    pub pillar: Pillar,
    pub name: String,
    /// Mean of the answered scores in this pillar; 0.0 when none were
    /// answered.
    pub score: f64,
    pub band: BandSnapshot,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsSnapshot {
    pub overall_score: f64,
    pub overall_band: BandSnapshot,
    pub pillars: Vec<PillarResult>,
    pub answered: u32,
    pub total: u32,
}

// ── Client → Server messages ───────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ClientAction {
    /// Leave the intro screen and begin the first question.
    Start,
    /// Answer the question currently on screen with one of its option
    /// scores.
    Answer { score: u8 },
    /// Step back to the previous question, or to the intro from the
    /// very first question.
    Back,
    /// Discard all answers and return to the intro.
    Restart,
}

/// Server-to-client message wrapper. The server is authoritative over
/// the assessment flow; after every accepted (or rejected) action the
/// client receives the snapshot for the current phase and renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ServerMessage {
    Intro(IntroSnapshot),
    Question(QuestionSnapshot),
    Results(ResultsSnapshot),
}
