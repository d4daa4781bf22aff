use crate::protocol::Pillar;

// ── Score buckets ───────────────────────────────────────────────────

/// Coarse tier used to pick guidance for a pillar. Upper-inclusive cut
/// points: a pillar score of exactly 2.0 is Low and exactly 3.0 is
/// Medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBucket {
    Low,
    Medium,
    High,
}

pub fn score_bucket(score: f64) -> ScoreBucket {
    if score <= 2.0 {
        ScoreBucket::Low
    } else if score <= 3.0 {
        ScoreBucket::Medium
    } else {
        ScoreBucket::High
    }
}

/// Returns the fixed guidance list for a pillar at the given score.
/// Each (pillar, bucket) pairing carries three recommendations.
pub fn recommendations(pillar: Pillar, score: f64) -> &'static [&'static str] {
    match (pillar, score_bucket(score)) {
        (Pillar::DataReadiness, ScoreBucket::Low) => DATA_READINESS_LOW,
        (Pillar::DataReadiness, ScoreBucket::Medium) => DATA_READINESS_MEDIUM,
        (Pillar::DataReadiness, ScoreBucket::High) => DATA_READINESS_HIGH,
        (Pillar::Infrastructure, ScoreBucket::Low) => INFRASTRUCTURE_LOW,
        (Pillar::Infrastructure, ScoreBucket::Medium) => INFRASTRUCTURE_MEDIUM,
        (Pillar::Infrastructure, ScoreBucket::High) => INFRASTRUCTURE_HIGH,
        (Pillar::Talent, ScoreBucket::Low) => TALENT_LOW,
        (Pillar::Talent, ScoreBucket::Medium) => TALENT_MEDIUM,
        (Pillar::Talent, ScoreBucket::High) => TALENT_HIGH,
        (Pillar::Governance, ScoreBucket::Low) => GOVERNANCE_LOW,
        (Pillar::Governance, ScoreBucket::Medium) => GOVERNANCE_MEDIUM,
        (Pillar::Governance, ScoreBucket::High) => GOVERNANCE_HIGH,
        (Pillar::Strategy, ScoreBucket::Low) => STRATEGY_LOW,
        (Pillar::Strategy, ScoreBucket::Medium) => STRATEGY_MEDIUM,
        (Pillar::Strategy, ScoreBucket::High) => STRATEGY_HIGH,
        (Pillar::Culture, ScoreBucket::Low) => CULTURE_LOW,
        (Pillar::Culture, ScoreBucket::Medium) => CULTURE_MEDIUM,
        (Pillar::Culture, ScoreBucket::High) => CULTURE_HIGH,
    }
}

// ── Data Readiness ──────────────────────────────────────────────────

const DATA_READINESS_LOW: &[&str] = &[
    "Run a data inventory: catalogue the ten datasets your business decisions depend on most and name an owner for each.",
    "Stand up one governed, central store for a single high-value domain before trying to boil the ocean.",
    "Stop new spreadsheet silos at the source: route recurring reports through the shared store from day one.",
];

const DATA_READINESS_MEDIUM: &[&str] = &[
    "Introduce data quality checks with published thresholds on your most-used pipelines.",
    "Document lineage for the datasets feeding customer-facing decisions first.",
    "Pilot a self-serve access workflow in one domain to cut the ticket queue.",
];

const DATA_READINESS_HIGH: &[&str] = &[
    "Package your best-governed datasets as internal data products with contracts and SLAs.",
    "Automate freshness and drift monitoring so degradation pages a human before it reaches a model.",
    "Open curated slices to partner teams to multiply the return on your catalogue investment.",
];

// ── Infrastructure ──────────────────────────────────────────────────

const INFRASTRUCTURE_LOW: &[&str] = &[
    "Consolidate workloads off laptops into one managed environment, even a modest one.",
    "Pick a single cloud region and account structure now; sprawl is far cheaper to prevent than to unwind.",
    "Script environment setup so a new analyst is productive in hours, not weeks.",
];

const INFRASTRUCTURE_MEDIUM: &[&str] = &[
    "Define one paved road to production and migrate your highest-traffic model onto it.",
    "Add basic serving metrics — latency, error rate, prediction volume — to every deployed model.",
    "Put cost visibility in front of the teams spending the compute.",
];

const INFRASTRUCTURE_HIGH: &[&str] = &[
    "Introduce automated retraining triggers driven by drift, not calendars.",
    "Load-test your serving tier against peak-season traffic before it finds you first.",
    "Treat platform capabilities as products: a roadmap, versioning, and deprecation policy.",
];

// ── Talent ──────────────────────────────────────────────────────────

const TALENT_LOW: &[&str] = &[
    "Hire or designate one accountable data lead before expanding headcount sideways.",
    "Pair outside specialists with insiders on the first project so the knowledge stays when the engagement ends.",
    "Map which roles lose the most hours to work AI could assist, and start there.",
];

const TALENT_MEDIUM: &[&str] = &[
    "Give the practitioners a shared home with a clear mandate and a senior sponsor.",
    "Create role-based AI training tracks rather than one-size-fits-all workshops.",
    "Define career ladders for data scientists and ML engineers so your best people can grow without leaving.",
];

const TALENT_HIGH: &[&str] = &[
    "Embed AI practitioners in product teams and keep a small central guild for standards and craft.",
    "Rotate domain experts through the AI team to deepen the bench in both directions.",
    "Make AI fluency part of onboarding for every knowledge role, not just technical ones.",
];

// ── Governance ──────────────────────────────────────────────────────

const GOVERNANCE_LOW: &[&str] = &[
    "Write a one-page acceptable-use policy for AI and data; something imperfect today beats something perfect next year.",
    "Inventory where automated decisions already touch customers, including vendor tools.",
    "Bring legal and security in at project kickoff, not at launch review.",
];

const GOVERNANCE_MEDIUM: &[&str] = &[
    "Stand up a lightweight review board with a published turnaround target so governance is a gate, not a wall.",
    "Classify use cases by risk tier and scale the scrutiny to the tier.",
    "Log model decisions with enough context to reconstruct any individual outcome.",
];

const GOVERNANCE_HIGH: &[&str] = &[
    "Automate policy checks in the deployment pipeline so compliance is the default path.",
    "Run periodic audits of high-risk models with findings tracked to closure.",
    "Publish your AI principles externally; accountability in public sharpens practice in private.",
];

// ── Strategy ────────────────────────────────────────────────────────

const STRATEGY_LOW: &[&str] = &[
    "Pick one measurable business problem for a first AI initiative and fund it properly.",
    "Name an executive owner; orphaned initiatives stall at the first budget cycle.",
    "Set success criteria before the pilot starts, not after the demo.",
];

const STRATEGY_MEDIUM: &[&str] = &[
    "Build a portfolio view of AI initiatives scored on value and feasibility, and prune it quarterly.",
    "Tie each funded initiative to a line-of-business metric its sponsor already reports on.",
    "Kill stalled pilots publicly and recycle the capacity; a graveyard of zombies erodes credibility.",
];

const STRATEGY_HIGH: &[&str] = &[
    "Review AI priorities alongside the P&L in the same cadence as other capital allocation.",
    "Scan for opportunities where AI changes the product, not just the process.",
    "Share your prioritization discipline with suppliers and partners to compound the advantage across the value chain.",
];

// ── Culture ─────────────────────────────────────────────────────────

const CULTURE_LOW: &[&str] = &[
    "Celebrate one well-run failed experiment in a company forum to make learning safe.",
    "Start leadership meetings with the data before the opinions.",
    "Replace blame-seeking post-mortems with blameless reviews that end in owned actions.",
];

const CULTURE_MEDIUM: &[&str] = &[
    "Make experiment write-ups a habit: hypothesis, result, decision, in one page.",
    "Put live dashboards where decisions actually happen, not in a portal nobody opens.",
    "Reward teams for evidence-changing-minds moments, not just for being right.",
];

const CULTURE_HIGH: &[&str] = &[
    "Push experiment design authority to the edge teams and keep central review for ethics and risk.",
    "Track decision latency: measurement cultures can still be slow ones.",
    "Teach the measurement habit outward; customers and partners who share your language move faster with you.",
];

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::catalog::PILLAR_ORDER;

    #[test]
    fn bucket_boundaries_are_upper_inclusive() {
        assert_eq!(score_bucket(2.0), ScoreBucket::Low);
        assert_eq!(score_bucket(2.01), ScoreBucket::Medium);
        assert_eq!(score_bucket(3.0), ScoreBucket::Medium);
        assert_eq!(score_bucket(3.01), ScoreBucket::High);
        assert_eq!(score_bucket(0.0), ScoreBucket::Low);
        assert_eq!(score_bucket(4.0), ScoreBucket::High);
    }

    #[test]
    fn every_pillar_bucket_has_three_entries() {
        for pillar in PILLAR_ORDER {
            for score in [1.0, 2.5, 4.0] {
                assert_eq!(recommendations(pillar, score).len(), 3, "{:?} at {}", pillar, score);
            }
        }
    }

    #[test]
    fn score_of_two_gets_the_low_tier_list() {
        let listed = recommendations(Pillar::DataReadiness, 2.0);
        assert_eq!(listed, DATA_READINESS_LOW);
    }

    #[test]
    fn buckets_select_distinct_guidance() {
        let low = recommendations(Pillar::Strategy, 1.5);
        let medium = recommendations(Pillar::Strategy, 2.5);
        let high = recommendations(Pillar::Strategy, 3.5);
        assert_ne!(low, medium);
        assert_ne!(medium, high);
    }
}
