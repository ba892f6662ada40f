//! Session state: generation cycle, the one-shot question gate and the copy
//! acknowledgment.
//!
//! Pure bookkeeping; timers and DOM live in the browser layer. Every rule
//! about what may happen when is enforced here so it can be tested natively.

use crate::widget::flow::QuestionFlow;

/// Whether a generation cycle is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    Idle,
    Generating,
}

/// One-shot trigger for the question flow. Arms once per session and trips
/// on the first completed generation; an explicit state instead of a bare
/// bool so the single transition is auditable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionGate {
    Armed,
    Spent,
}

#[derive(Debug)]
pub struct Session {
    phase: GenerationPhase,
    art: Option<String>,
    gate: QuestionGate,
    flow: QuestionFlow,
    question_count: usize,
    copy_noted: bool,
}

impl Session {
    pub fn new(question_count: usize) -> Self {
        Session {
            phase: GenerationPhase::Idle,
            art: None,
            gate: QuestionGate::Armed,
            flow: QuestionFlow::Inactive,
            question_count,
            copy_noted: false,
        }
    }

    pub fn phase(&self) -> GenerationPhase {
        self.phase
    }

    pub fn is_generating(&self) -> bool {
        self.phase == GenerationPhase::Generating
    }

    /// The art on display, absent until the first generation completes.
    pub fn art(&self) -> Option<&str> {
        self.art.as_deref()
    }

    pub fn flow(&self) -> QuestionFlow {
        self.flow
    }

    /// Index of the question on screen, if the flow is open.
    pub fn current_question(&self) -> Option<usize> {
        self.flow.current()
    }

    pub fn copy_noted(&self) -> bool {
        self.copy_noted
    }

    /// Starts a generation cycle. Returns false (and changes nothing) while
    /// one is already running; overlapping requests collapse into the cycle
    /// in flight.
    pub fn begin_generation(&mut self) -> bool {
        if self.is_generating() {
            return false;
        }
        self.phase = GenerationPhase::Generating;
        true
    }

    /// Completes the running cycle with freshly generated art. The art slot
    /// is written before the phase clears, so no observer can catch the
    /// idle state holding stale art. Any pending copy acknowledgment dies
    /// with the old art. Returns true exactly once per session, on the
    /// first completion, which is the caller's cue to schedule the question
    /// flow; the gate trips here rather than when that timer fires, so a
    /// second cycle overlapping the delay cannot re-trigger it.
    pub fn finish_generation(&mut self, art: String) -> bool {
        self.art = Some(art);
        self.phase = GenerationPhase::Idle;
        self.copy_noted = false;
        match self.gate {
            QuestionGate::Armed => {
                self.gate = QuestionGate::Spent;
                true
            }
            QuestionGate::Spent => false,
        }
    }

    /// Opens the question flow at the first question. Harmless if the flow
    /// already ran; the one-way flow machine refuses to restart.
    pub fn activate_questions(&mut self) {
        self.flow.activate(self.question_count);
    }

    /// Records an affirmative answer. Returns the index of the next
    /// question to show, or None when the flow just finished (or was not
    /// open in the first place).
    pub fn answer_yes(&mut self) -> Option<usize> {
        self.flow.advance(self.question_count);
        self.flow.current()
    }

    /// The copy affordance exists only while finished art is on display.
    pub fn can_copy(&self) -> bool {
        !self.is_generating() && self.art.is_some()
    }

    /// Flags the copy acknowledgment and hands back the text to put on the
    /// clipboard. None when copying is not available right now.
    pub fn note_copy(&mut self) -> Option<&str> {
        if !self.can_copy() {
            return None;
        }
        self.copy_noted = true;
        self.art.as_deref()
    }

    /// Reverts the acknowledgment (the 2s timer's action).
    pub fn clear_copy_note(&mut self) {
        self.copy_noted = false;
    }
}
