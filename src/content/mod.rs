//! Static content tables for the marketing site. Everything here is
//! fixed at compile time and served as JSON by the content API.

use serde::Serialize;

// ── Case studies ────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CaseStudy {
    pub slug: &'static str,
    pub client: &'static str,
    pub industry: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub metrics: &'static [Metric],
}

pub fn case_studies() -> &'static [CaseStudy] {
    static CASE_STUDIES: &[CaseStudy] = &[
        CaseStudy {
            slug: "harbor-freight-forecasting",
            client: "Atlantic Harbor Logistics",
            industry: "Freight & Logistics",
            headline: "Demand forecasting that cut empty container miles by a fifth",
            summary: "A mid-size freight operator was repositioning containers on \
                      gut feel. We built a lane-level demand forecast on their \
                      existing booking data and wired it into the weekly planning \
                      meeting, then trained the planning team to challenge it.",
            metrics: &[
                Metric { label: "Empty repositioning miles", value: "-21%" },
                Metric { label: "Forecast horizon", value: "6 weeks" },
                Metric { label: "Time to first value", value: "9 weeks" },
            ],
        },
        CaseStudy {
            slug: "meridian-health-triage",
            client: "Caldera Health Network",
            industry: "Healthcare",
            headline: "Referral triage assistance without touching a diagnosis",
            summary: "Specialist referrals were queuing for up to three weeks. We \
                      delivered a priority-scoring assistant that drafts a triage \
                      suggestion for clinician review, with every suggestion \
                      traceable to the referral text it came from.",
            metrics: &[
                Metric { label: "Median triage wait", value: "18 days → 4 days" },
                Metric { label: "Clinician override rate", value: "7%" },
                Metric { label: "Audit trail coverage", value: "100%" },
            ],
        },
        CaseStudy {
            slug: "grainline-quality",
            client: "Grainline Foods",
            industry: "Manufacturing",
            headline: "Computer vision on the packing line, run by the line team",
            summary: "Manual spot checks were catching packaging defects after \
                      pallets were wrapped. A camera-based check at the wrapper, \
                      plus an afternoon of training for shift leads, moved defect \
                      detection upstream where rework is cheap.",
            metrics: &[
                Metric { label: "Defects caught pre-wrap", value: "94%" },
                Metric { label: "Rework cost", value: "-37%" },
                Metric { label: "Models maintained by", value: "the line team" },
            ],
        },
        CaseStudy {
            slug: "beacon-underwriting",
            client: "Beacon Mutual",
            industry: "Insurance",
            headline: "An underwriting copilot the regulator signed off on",
            summary: "Beacon wanted document-heavy commercial underwriting to move \
                      faster without loosening controls. We co-designed the review \
                      workflow with their compliance office first, then built \
                      extraction and summarization to fit it.",
            metrics: &[
                Metric { label: "Submission review time", value: "-44%" },
                Metric { label: "Referrals to senior underwriters", value: "unchanged" },
                Metric { label: "Regulatory findings", value: "zero" },
            ],
        },
    ];

    CASE_STUDIES
}

/// Looks up a case study by its slug.
pub fn get_case_study(slug: &str) -> Option<&'static CaseStudy> {
    case_studies().iter().find(|c| c.slug == slug)
}

// ── Team ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

pub fn team() -> &'static [TeamMember] {
    static TEAM: &[TeamMember] = &[
        TeamMember {
            name: "Amara Okafor",
            role: "Managing Partner",
            bio: "Fifteen years leading data organizations in logistics and retail. \
                  Believes the hard part of AI is never the model.",
        },
        TeamMember {
            name: "Daniel Reyes",
            role: "Head of Engineering",
            bio: "Former platform lead at a payments scale-up. Builds the boring \
                  infrastructure that makes the exciting demos survive contact with production.",
        },
        TeamMember {
            name: "Priya Raghavan",
            role: "Principal, AI Governance",
            bio: "Ex-regulator turned practitioner. Writes policies people actually \
                  read and review boards that actually meet.",
        },
        TeamMember {
            name: "Tomas Lindqvist",
            role: "Principal, Applied ML",
            bio: "Shipped forecasting, vision, and language systems across three \
                  industries. Will talk you out of a model if a heuristic wins.",
        },
        TeamMember {
            name: "Grace Banda",
            role: "Director, Enablement",
            bio: "Designs the training and operating rhythms that keep client teams \
                  running what we build long after we leave.",
        },
    ];

    TEAM
}

// ── Pricing ─────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PricingTier {
    pub name: &'static str,
    pub tagline: &'static str,
    pub engagement: &'static str,
    pub includes: &'static [&'static str],
}

pub fn pricing_tiers() -> &'static [PricingTier] {
    static TIERS: &[PricingTier] = &[
        PricingTier {
            name: "Readiness Sprint",
            tagline: "Know where you stand in four weeks",
            engagement: "Fixed fee, 4 weeks",
            includes: &[
                "Maturity assessment across all six pillars",
                "Data and platform audit",
                "Prioritized opportunity map with effort estimates",
                "Executive readout and 12-month roadmap",
            ],
        },
        PricingTier {
            name: "First Mile",
            tagline: "One use case, shipped and measured",
            engagement: "8–16 weeks, milestone-based",
            includes: &[
                "Everything in Readiness Sprint",
                "One production use case built with your team",
                "Deployment pipeline and monitoring handover",
                "Success metrics agreed before a line of code",
            ],
        },
        PricingTier {
            name: "Embedded Partner",
            tagline: "A standing AI capability, built inside your walls",
            engagement: "Quarterly retainer",
            includes: &[
                "Embedded engineers and a fractional AI lead",
                "Portfolio management across initiatives",
                "Governance design and review-board support",
                "Hiring support until your team can run alone",
            ],
        },
    ];

    TIERS
}

// ── Awards ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Award {
    pub year: u16,
    pub title: &'static str,
    pub citation: &'static str,
}

pub fn awards() -> &'static [Award] {
    static AWARDS: &[Award] = &[
        Award {
            year: 2025,
            title: "AI Consultancy of the Year — Northeast Business Technology Awards",
            citation: "For measurable client outcomes across logistics and healthcare engagements.",
        },
        Award {
            year: 2024,
            title: "Responsible AI Practice Award — Applied Analytics Forum",
            citation: "Recognizing the governance-first delivery model used at Beacon Mutual.",
        },
        Award {
            year: 2023,
            title: "Best Places to Work, Boutique Consulting — Meridian City Chamber",
            citation: "Voted by employees; 94% participation.",
        },
    ];

    AWARDS
}

// ── Legal pages ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct LegalPage {
    pub slug: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub fn legal_pages() -> &'static [LegalPage] {
    static PAGES: &[LegalPage] = &[
        LegalPage {
            slug: "privacy",
            title: "Privacy Policy",
            body: "Meridian Advisory collects only the information you submit through \
                   our contact form: your name, email address, company, and message. \
                   We use it solely to respond to your inquiry. Assessment answers are \
                   processed in memory for the duration of your session and are never \
                   stored, profiled, or shared. We do not sell personal data, and we do \
                   not use third-party advertising trackers. To have your contact \
                   details removed, write to privacy@meridianadvisory.example.",
        },
        LegalPage {
            slug: "terms",
            title: "Terms of Service",
            body: "The content of this site, including the AI maturity assessment and \
                   its results, is provided for general information and does not \
                   constitute professional advice for your specific situation. \
                   Assessment scores are indicative self-evaluations, not audits. \
                   Engagement terms for consulting services are set out in individual \
                   statements of work. All site content is © Meridian Advisory; the \
                   assessment may not be reproduced commercially without permission.",
        },
    ];

    PAGES
}

/// Looks up a legal page by its slug.
pub fn get_legal_page(slug: &str) -> Option<&'static LegalPage> {
    legal_pages().iter().find(|p| p.slug == slug)
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn case_study_slugs_are_unique_and_resolvable() {
        let slugs: HashSet<&str> = case_studies().iter().map(|c| c.slug).collect();
        assert_eq!(slugs.len(), case_studies().len());
        for slug in slugs {
            assert!(get_case_study(slug).is_some());
        }
        assert!(get_case_study("nonexistent").is_none());
    }

    #[test]
    fn every_case_study_carries_metrics() {
        for study in case_studies() {
            assert!(!study.metrics.is_empty(), "{}", study.slug);
        }
    }

    #[test]
    fn legal_pages_resolve_by_slug() {
        assert_eq!(get_legal_page("privacy").unwrap().title, "Privacy Policy");
        assert_eq!(get_legal_page("terms").unwrap().title, "Terms of Service");
        assert!(get_legal_page("cookies").is_none());
    }

    #[test]
    fn pricing_tiers_all_list_inclusions() {
        assert_eq!(pricing_tiers().len(), 3);
        for tier in pricing_tiers() {
            assert!(!tier.includes.is_empty(), "{}", tier.name);
        }
    }
}
