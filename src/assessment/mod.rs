pub mod catalog;
pub mod recommendations;
pub mod scoring;

use std::collections::HashMap;

use tracing::error;

use crate::protocol::{
    IntroSnapshot, PillarResult, QuestionId, QuestionSnapshot, ResultsSnapshot, ServerMessage,
};

// ── Answer set ──────────────────────────────────────────────────────

/// Per-session mapping of question id to the chosen option score.
/// Built incrementally as the visitor progresses; re-answering a
/// question overwrites its entry; cleared on restart. Never persisted.
pub type AnswerSet = HashMap<QuestionId, u8>;

// ── Flow phases ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Intro,
    InProgress {
        pillar_index: usize,
        question_index: usize,
    },
    Results,
}

// ── Assessment flow ─────────────────────────────────────────────────

/// One visitor's walk through the assessment: an explicit
/// `Intro → InProgress → Results` state machine owning the answer set.
/// Transition methods keep the position indices within the catalogue,
/// so a live `InProgress` phase always resolves to a question.
pub struct AssessmentFlow {
    phase: Phase,
    answers: AnswerSet,
}

impl AssessmentFlow {
    pub fn new() -> Self {
        Self {
            phase: Phase::Intro,
            answers: AnswerSet::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// The question currently on screen, if the flow is mid-assessment.
    pub fn current_question(&self) -> Option<&'static catalog::QuestionDef> {
        match self.phase {
            Phase::InProgress {
                pillar_index,
                question_index,
            } => catalog::question_at(pillar_index, question_index),
            _ => None,
        }
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Leave the intro for the first question.
    pub fn start(&mut self) -> Result<(), String> {
        match self.phase {
            Phase::Intro => {
                self.phase = Phase::InProgress {
                    pillar_index: 0,
                    question_index: 0,
                };
                Ok(())
            }
            _ => Err("assessment already started".to_string()),
        }
    }

    /// Record a score for the current question and advance, entering
    /// Results after the last question of the last pillar.
    pub fn answer(&mut self, score: u8) -> Result<(), String> {
        let (pillar_index, question_index) = match self.phase {
            Phase::InProgress {
                pillar_index,
                question_index,
            } => (pillar_index, question_index),
            _ => return Err("no question is awaiting an answer".to_string()),
        };

        let question = catalog::question_at(pillar_index, question_index)
            .ok_or_else(|| "assessment position out of range".to_string())?;

        if !(1..=catalog::SCALE_MAX).contains(&score) {
            return Err(format!("score {} is outside the 1-{} scale", score, catalog::SCALE_MAX));
        }
        if !question.options.iter().any(|o| o.score == score) {
            return Err(format!(
                "score {} is not an option for question {}",
                score, question.id
            ));
        }

        self.answers.insert(question.id, score);

        self.phase = if catalog::question_at(pillar_index, question_index + 1).is_some() {
            Phase::InProgress {
                pillar_index,
                question_index: question_index + 1,
            }
        } else if catalog::question_at(pillar_index + 1, 0).is_some() {
            Phase::InProgress {
                pillar_index: pillar_index + 1,
                question_index: 0,
            }
        } else {
            Phase::Results
        };
        Ok(())
    }

    /// Step to the previous question, or back to the intro from the
    /// very first question. Recorded answers are kept.
    pub fn back(&mut self) -> Result<(), String> {
        let (pillar_index, question_index) = match self.phase {
            Phase::InProgress {
                pillar_index,
                question_index,
            } => (pillar_index, question_index),
            _ => return Err("nothing to step back from".to_string()),
        };

        self.phase = if question_index > 0 {
            Phase::InProgress {
                pillar_index,
                question_index: question_index - 1,
            }
        } else if pillar_index > 0 {
            let previous = catalog::PILLAR_ORDER[pillar_index - 1];
            Phase::InProgress {
                pillar_index: pillar_index - 1,
                question_index: catalog::pillar_questions(previous).len() - 1,
            }
        } else {
            Phase::Intro
        };
        Ok(())
    }

    /// Return to the intro from any state, discarding all answers.
    pub fn restart(&mut self) {
        self.phase = Phase::Intro;
        self.answers.clear();
    }

    // ── Snapshots ────────────────────────────────────────────────────

    /// Builds the authoritative view of the current phase for the
    /// client to render.
    pub fn snapshot(&self) -> ServerMessage {
        match self.phase {
            Phase::Intro => ServerMessage::Intro(intro_snapshot()),
            Phase::InProgress {
                pillar_index,
                question_index,
            } => match catalog::question_at(pillar_index, question_index) {
                Some(question) => {
                    ServerMessage::Question(self.question_snapshot(question, pillar_index, question_index))
                }
                None => {
                    error!(
                        "Flow position ({}, {}) resolves to no question",
                        pillar_index, question_index
                    );
                    ServerMessage::Intro(intro_snapshot())
                }
            },
            Phase::Results => ServerMessage::Results(self.results_snapshot()),
        }
    }

    fn question_snapshot(
        &self,
        question: &'static catalog::QuestionDef,
        pillar_index: usize,
        question_index: usize,
    ) -> QuestionSnapshot {
        let preceding: usize = catalog::PILLAR_ORDER[..pillar_index]
            .iter()
            .map(|p| catalog::pillar_questions(*p).len())
            .sum();

        QuestionSnapshot {
            id: question.id,
            pillar: question.pillar,
            pillar_name: catalog::pillar_name(question.pillar).to_string(),
            prompt: question.prompt.to_string(),
            options: question
                .options
                .iter()
                .map(|o| crate::protocol::OptionSnapshot {
                    label: o.label.to_string(),
                    score: o.score,
                })
                .collect(),
            selected: self.answers.get(&question.id).copied(),
            number: (preceding + question_index + 1) as u32,
            total: catalog::question_count() as u32,
            answered: self.answers.len() as u32,
        }
    }

    fn results_snapshot(&self) -> ResultsSnapshot {
        let pillars = catalog::PILLAR_ORDER
            .iter()
            .map(|&pillar| {
                let score = scoring::display_score(scoring::pillar_score(pillar, &self.answers));
                PillarResult {
                    pillar,
                    name: catalog::pillar_name(pillar).to_string(),
                    score,
                    band: scoring::maturity_band(score).snapshot(),
                    recommendations: recommendations::recommendations(pillar, score)
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                }
            })
            .collect();

        let overall = scoring::display_score(scoring::overall_score(&self.answers));
        ResultsSnapshot {
            overall_score: overall,
            overall_band: scoring::maturity_band(overall).snapshot(),
            pillars,
            answered: self.answers.len() as u32,
            total: catalog::question_count() as u32,
        }
    }
}

impl Default for AssessmentFlow {
    fn default() -> Self {
        Self::new()
    }
}

fn intro_snapshot() -> IntroSnapshot {
    IntroSnapshot {
        title: "AI Maturity Assessment".to_string(),
        blurb: "Twelve questions across six pillars of organizational AI readiness. \
                Answer honestly; you'll get a maturity profile and concrete next steps \
                for each pillar."
            .to_string(),
        question_count: catalog::question_count() as u32,
        pillar_names: catalog::PILLAR_ORDER
            .iter()
            .map(|&p| catalog::pillar_name(p).to_string())
            .collect(),
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::MaturityBand;

    #[test]
    fn new_flow_starts_at_intro() {
        let flow = AssessmentFlow::new();
        assert_eq!(flow.phase(), Phase::Intro);
        assert!(flow.answers().is_empty());
        assert!(matches!(flow.snapshot(), ServerMessage::Intro(_)));
    }

    #[test]
    fn start_enters_the_first_question() {
        let mut flow = AssessmentFlow::new();
        flow.start().unwrap();
        assert_eq!(
            flow.phase(),
            Phase::InProgress {
                pillar_index: 0,
                question_index: 0
            }
        );
        let question = flow.current_question().unwrap();
        assert_eq!(question.id, catalog::all_questions()[0].id);
    }

    #[test]
    fn start_twice_is_rejected() {
        let mut flow = AssessmentFlow::new();
        flow.start().unwrap();
        assert!(flow.start().is_err());
        // State untouched by the rejected action
        assert_eq!(
            flow.phase(),
            Phase::InProgress {
                pillar_index: 0,
                question_index: 0
            }
        );
    }

    #[test]
    fn answering_every_question_reaches_results() {
        let mut flow = AssessmentFlow::new();
        flow.start().unwrap();
        for _ in 0..catalog::question_count() {
            flow.answer(3).unwrap();
        }
        assert_eq!(flow.phase(), Phase::Results);
        assert_eq!(flow.answers().len(), catalog::question_count());
    }

    #[test]
    fn answer_crosses_pillar_boundaries() {
        let mut flow = AssessmentFlow::new();
        flow.start().unwrap();
        flow.answer(2).unwrap();
        flow.answer(2).unwrap();
        // Two questions per pillar, so we are now at the second pillar
        assert_eq!(
            flow.phase(),
            Phase::InProgress {
                pillar_index: 1,
                question_index: 0
            }
        );
    }

    #[test]
    fn off_scale_answer_is_rejected() {
        let mut flow = AssessmentFlow::new();
        flow.start().unwrap();
        assert!(flow.answer(0).is_err());
        assert!(flow.answer(5).is_err());
        assert!(flow.answers().is_empty());
    }

    #[test]
    fn answer_outside_in_progress_is_rejected() {
        let mut flow = AssessmentFlow::new();
        assert!(flow.answer(3).is_err());
        assert!(flow.back().is_err());
    }

    #[test]
    fn back_from_first_question_returns_to_intro() {
        let mut flow = AssessmentFlow::new();
        flow.start().unwrap();
        flow.back().unwrap();
        assert_eq!(flow.phase(), Phase::Intro);
    }

    #[test]
    fn back_crosses_pillar_boundaries() {
        let mut flow = AssessmentFlow::new();
        flow.start().unwrap();
        flow.answer(1).unwrap();
        flow.answer(1).unwrap();
        assert_eq!(
            flow.phase(),
            Phase::InProgress {
                pillar_index: 1,
                question_index: 0
            }
        );
        flow.back().unwrap();
        assert_eq!(
            flow.phase(),
            Phase::InProgress {
                pillar_index: 0,
                question_index: 1
            }
        );
    }

    #[test]
    fn reanswering_after_back_overwrites() {
        let mut flow = AssessmentFlow::new();
        flow.start().unwrap();
        let first = flow.current_question().unwrap().id;
        flow.answer(1).unwrap();
        flow.back().unwrap();

        // The earlier choice is echoed back for re-rendering
        match flow.snapshot() {
            ServerMessage::Question(q) => assert_eq!(q.selected, Some(1)),
            other => panic!("expected question snapshot, got {:?}", other),
        }

        flow.answer(4).unwrap();
        assert_eq!(flow.answers().get(&first), Some(&4));
        assert_eq!(flow.answers().len(), 1);
    }

    #[test]
    fn restart_clears_answers_from_results() {
        let mut flow = AssessmentFlow::new();
        flow.start().unwrap();
        for _ in 0..catalog::question_count() {
            flow.answer(4).unwrap();
        }
        assert_eq!(flow.phase(), Phase::Results);

        flow.restart();
        assert_eq!(flow.phase(), Phase::Intro);
        assert!(flow.answers().is_empty());
    }

    #[test]
    fn results_snapshot_reports_scores_and_guidance() {
        let mut flow = AssessmentFlow::new();
        flow.start().unwrap();
        for _ in 0..catalog::question_count() {
            flow.answer(4).unwrap();
        }

        match flow.snapshot() {
            ServerMessage::Results(results) => {
                assert_eq!(results.overall_score, 4.0);
                assert_eq!(results.overall_band.band, MaturityBand::Leading);
                assert_eq!(results.pillars.len(), catalog::PILLAR_ORDER.len());
                for pillar in &results.pillars {
                    assert_eq!(pillar.score, 4.0);
                    assert_eq!(pillar.recommendations.len(), 3);
                }
            }
            other => panic!("expected results snapshot, got {:?}", other),
        }
    }

    #[test]
    fn empty_results_render_the_degenerate_zero() {
        // Results is unreachable without answering in the real flow, but
        // the snapshot math must still hold for an empty answer set.
        let flow = AssessmentFlow::new();
        let results = flow.results_snapshot();
        assert_eq!(results.overall_score, 0.0);
        assert_eq!(results.overall_band.band, MaturityBand::Nascent);
    }

    #[test]
    fn question_numbers_progress_across_the_assessment() {
        let mut flow = AssessmentFlow::new();
        flow.start().unwrap();
        let mut expected = 1;
        loop {
            match flow.snapshot() {
                ServerMessage::Question(q) => {
                    assert_eq!(q.number, expected);
                    assert_eq!(q.total, catalog::question_count() as u32);
                    expected += 1;
                    flow.answer(2).unwrap();
                }
                ServerMessage::Results(_) => break,
                ServerMessage::Intro(_) => panic!("unexpected intro mid-flow"),
            }
        }
        assert_eq!(expected as usize, catalog::question_count() + 1);
    }
}
