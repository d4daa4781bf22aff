use serde::Serialize;

use crate::protocol::{Pillar, QuestionId};

// ── Scale ───────────────────────────────────────────────────────────

/// Every option carries a score on a 1..=SCALE_MAX scale.
pub const SCALE_MAX: u8 = 4;

/// Pillars in presentation order. Questions are asked pillar by pillar.
pub const PILLAR_ORDER: [Pillar; 6] = [
    Pillar::DataReadiness,
    Pillar::Infrastructure,
    Pillar::Talent,
    Pillar::Governance,
    Pillar::Strategy,
    Pillar::Culture,
];

pub fn pillar_name(pillar: Pillar) -> &'static str {
    match pillar {
        Pillar::DataReadiness => "Data Readiness",
        Pillar::Infrastructure => "Infrastructure",
        Pillar::Talent => "Talent",
        Pillar::Governance => "Governance",
        Pillar::Strategy => "Strategy",
        Pillar::Culture => "Culture",
    }
}

// ── Question definitions ────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct OptionDef {
    pub label: &'static str,
    pub score: u8,
}

#[derive(Debug, Serialize)]
pub struct QuestionDef {
    pub id: QuestionId,
    pub pillar: Pillar,
    pub prompt: &'static str,
    pub options: &'static [OptionDef],
}

/// Returns the full question catalogue, ordered by pillar then position.
pub fn all_questions() -> &'static [QuestionDef] {
    use Pillar::*;

    static QUESTIONS: &[QuestionDef] = &[
        // ── Data Readiness ───────────────────────────────────────────
        QuestionDef {
            id: 1,
            pillar: DataReadiness,
            prompt: "How would you describe the state of the data your teams rely on?",
            options: &[
                OptionDef {
                    label: "Scattered across spreadsheets and inboxes, with no single source of truth",
                    score: 1,
                },
                OptionDef {
                    label: "Centralized in places, but quality is inconsistent and poorly documented",
                    score: 2,
                },
                OptionDef {
                    label: "Governed warehouses cover most domains, with known owners",
                    score: 3,
                },
                OptionDef {
                    label: "Curated, catalogued data products with quality monitoring across the business",
                    score: 4,
                },
            ],
        },
        QuestionDef {
            id: 2,
            pillar: DataReadiness,
            prompt: "When a new analytics or AI use case needs data, what happens?",
            options: &[
                OptionDef {
                    label: "Weeks of manual extracts and email attachments",
                    score: 1,
                },
                OptionDef {
                    label: "An ad hoc pipeline is built from scratch each time",
                    score: 2,
                },
                OptionDef {
                    label: "Most sources are reachable through shared, documented pipelines",
                    score: 3,
                },
                OptionDef {
                    label: "Self-serve access with clear contracts, lineage, and SLAs",
                    score: 4,
                },
            ],
        },
        // ── Infrastructure ───────────────────────────────────────────
        QuestionDef {
            id: 3,
            pillar: Infrastructure,
            prompt: "Where do your analytical and machine-learning workloads run today?",
            options: &[
                OptionDef {
                    label: "On individual laptops and one-off servers",
                    score: 1,
                },
                OptionDef {
                    label: "A mix of unmanaged cloud accounts and legacy on-prem systems",
                    score: 2,
                },
                OptionDef {
                    label: "A managed cloud platform with standard environments",
                    score: 3,
                },
                OptionDef {
                    label: "An elastic, cost-monitored platform with automated provisioning",
                    score: 4,
                },
            ],
        },
        QuestionDef {
            id: 4,
            pillar: Infrastructure,
            prompt: "How do models and advanced analytics reach production?",
            options: &[
                OptionDef {
                    label: "They don't; everything ends up as a slide or a spreadsheet",
                    score: 1,
                },
                OptionDef {
                    label: "Manual handoffs to engineering, deployed rarely",
                    score: 2,
                },
                OptionDef {
                    label: "A repeatable deployment path exists for most projects",
                    score: 3,
                },
                OptionDef {
                    label: "Automated pipelines with monitoring, rollback, and scheduled retraining",
                    score: 4,
                },
            ],
        },
        // ── Talent ───────────────────────────────────────────────────
        QuestionDef {
            id: 5,
            pillar: Talent,
            prompt: "Who works on data and AI problems in your organization?",
            options: &[
                OptionDef {
                    label: "Nobody dedicated; analysts squeeze it in around other duties",
                    score: 1,
                },
                OptionDef {
                    label: "A few enthusiasts without a shared home or career path",
                    score: 2,
                },
                OptionDef {
                    label: "A dedicated team partnered with the business domains",
                    score: 3,
                },
                OptionDef {
                    label: "Multidisciplinary product teams with clear AI career tracks",
                    score: 4,
                },
            ],
        },
        QuestionDef {
            id: 6,
            pillar: Talent,
            prompt: "How does the wider workforce relate to AI tools?",
            options: &[
                OptionDef {
                    label: "Little awareness, and some anxiety",
                    score: 1,
                },
                OptionDef {
                    label: "Pockets of experimentation without guidance",
                    score: 2,
                },
                OptionDef {
                    label: "Role-based training exists and is starting to land",
                    score: 3,
                },
                OptionDef {
                    label: "AI fluency is part of onboarding and everyday workflows",
                    score: 4,
                },
            ],
        },
        // ── Governance ───────────────────────────────────────────────
        QuestionDef {
            id: 7,
            pillar: Governance,
            prompt: "How are AI risk and data privacy handled?",
            options: &[
                OptionDef {
                    label: "No policy; individual judgment calls",
                    score: 1,
                },
                OptionDef {
                    label: "Legal reviews happen late, case by case",
                    score: 2,
                },
                OptionDef {
                    label: "Documented policies with a defined review path",
                    score: 3,
                },
                OptionDef {
                    label: "Embedded governance with automated checks, audits, and clear accountability",
                    score: 4,
                },
            ],
        },
        QuestionDef {
            id: 8,
            pillar: Governance,
            prompt: "Could you explain an automated decision to a customer or a regulator?",
            options: &[
                OptionDef {
                    label: "No, we would not know where to start",
                    score: 1,
                },
                OptionDef {
                    label: "Only with significant manual archaeology",
                    score: 2,
                },
                OptionDef {
                    label: "For most systems, yes, with some effort",
                    score: 3,
                },
                OptionDef {
                    label: "Yes; decisions are logged, traceable, and reviewable by design",
                    score: 4,
                },
            ],
        },
        // ── Strategy ─────────────────────────────────────────────────
        QuestionDef {
            id: 9,
            pillar: Strategy,
            prompt: "How does AI feature in your business strategy?",
            options: &[
                OptionDef {
                    label: "It doesn't, beyond occasional talk",
                    score: 1,
                },
                OptionDef {
                    label: "Vague ambitions without funded initiatives",
                    score: 2,
                },
                OptionDef {
                    label: "A roadmap exists with executive sponsorship",
                    score: 3,
                },
                OptionDef {
                    label: "AI priorities are woven into the P&L and reviewed quarterly",
                    score: 4,
                },
            ],
        },
        QuestionDef {
            id: 10,
            pillar: Strategy,
            prompt: "How do you decide which AI opportunities to pursue?",
            options: &[
                OptionDef {
                    label: "Whoever argues loudest wins",
                    score: 1,
                },
                OptionDef {
                    label: "Bottom-up pilots with unclear success criteria",
                    score: 2,
                },
                OptionDef {
                    label: "A portfolio process weighing value against feasibility",
                    score: 3,
                },
                OptionDef {
                    label: "A disciplined pipeline tied to measurable business outcomes",
                    score: 4,
                },
            ],
        },
        // ── Culture ──────────────────────────────────────────────────
        QuestionDef {
            id: 11,
            pillar: Culture,
            prompt: "What happens when an experiment fails?",
            options: &[
                OptionDef {
                    label: "Blame, and the topic becomes untouchable",
                    score: 1,
                },
                OptionDef {
                    label: "Quiet abandonment; little is written down",
                    score: 2,
                },
                OptionDef {
                    label: "Retrospectives capture lessons for the next attempt",
                    score: 3,
                },
                OptionDef {
                    label: "Failures are shared openly and redirect investment quickly",
                    score: 4,
                },
            ],
        },
        QuestionDef {
            id: 12,
            pillar: Culture,
            prompt: "How do decisions get made day to day?",
            options: &[
                OptionDef {
                    label: "Gut feel and seniority",
                    score: 1,
                },
                OptionDef {
                    label: "Data is consulted when convenient",
                    score: 2,
                },
                OptionDef {
                    label: "Dashboards and metrics inform most decisions",
                    score: 3,
                },
                OptionDef {
                    label: "Experimentation and measurement are the default operating mode",
                    score: 4,
                },
            ],
        },
    ];

    QUESTIONS
}

// ── Lookups ─────────────────────────────────────────────────────────

/// Looks up a single question definition by id.
pub fn get_question(id: QuestionId) -> Option<&'static QuestionDef> {
    all_questions().iter().find(|q| q.id == id)
}

/// Returns the questions belonging to one pillar, in catalogue order.
pub fn pillar_questions(pillar: Pillar) -> Vec<&'static QuestionDef> {
    all_questions().iter().filter(|q| q.pillar == pillar).collect()
}

/// Resolves a (pillar index, question index) flow position to its
/// question, if both indices are in range.
pub fn question_at(pillar_index: usize, question_index: usize) -> Option<&'static QuestionDef> {
    let pillar = *PILLAR_ORDER.get(pillar_index)?;
    pillar_questions(pillar).get(question_index).copied()
}

pub fn question_count() -> usize {
    all_questions().len()
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn twelve_questions_two_per_pillar() {
        assert_eq!(question_count(), 12);
        for pillar in PILLAR_ORDER {
            assert_eq!(pillar_questions(pillar).len(), 2, "{:?}", pillar);
        }
    }

    #[test]
    fn question_ids_are_unique_and_resolvable() {
        let ids: HashSet<QuestionId> = all_questions().iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), question_count());
        for id in ids {
            assert!(get_question(id).is_some());
        }
        assert!(get_question(999).is_none());
    }

    #[test]
    fn every_option_score_is_on_scale() {
        for question in all_questions() {
            assert!(!question.options.is_empty());
            for option in question.options {
                assert!(
                    (1..=SCALE_MAX).contains(&option.score),
                    "question {} has off-scale option score {}",
                    question.id,
                    option.score
                );
            }
        }
    }

    #[test]
    fn options_are_ordered_by_score() {
        for question in all_questions() {
            let scores: Vec<u8> = question.options.iter().map(|o| o.score).collect();
            let mut sorted = scores.clone();
            sorted.sort_unstable();
            assert_eq!(scores, sorted, "question {}", question.id);
        }
    }

    #[test]
    fn flow_positions_cover_the_catalogue() {
        let mut seen = Vec::new();
        for (pi, pillar) in PILLAR_ORDER.iter().enumerate() {
            for qi in 0..pillar_questions(*pillar).len() {
                let question = question_at(pi, qi).expect("position in range");
                assert_eq!(question.pillar, *pillar);
                seen.push(question.id);
            }
        }
        assert_eq!(seen.len(), question_count());
        assert!(question_at(PILLAR_ORDER.len(), 0).is_none());
        assert!(question_at(0, 99).is_none());
    }
}
