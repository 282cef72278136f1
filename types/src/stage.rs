//! Stage runner: the intro → interaction → summary sequence for one visit.
//!
//! A runner is created when a stage screen opens and consumed when it closes.
//! Its only ways out are [`StageRunner::complete`] and
//! [`StageRunner::back_to_map`], which hand a [`StageExit`] back to whoever
//! owns the journey. Pending timers die with the runner.

use std::time::Duration;

use crate::StageId;
use crate::interaction::{Gesture, Interaction, Timers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Intro,
    Interaction,
    Summary,
}

impl Step {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Step::Intro => "intro",
            Step::Interaction => "interaction",
            Step::Summary => "summary",
        }
    }
}

/// How a stage visit ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageExit {
    Completed(StageId),
    BackToMap(StageId),
}

#[derive(Debug)]
pub struct StageRunner {
    stage: StageId,
    step: Step,
    interaction: Interaction,
    timers: Timers,
}

impl StageRunner {
    #[must_use]
    pub fn new(stage: StageId) -> Self {
        Self {
            stage,
            step: Step::Intro,
            interaction: Interaction::for_stage(stage),
            timers: Timers::new(),
        }
    }

    #[must_use]
    pub fn stage(&self) -> StageId {
        self.stage
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Time spent in this visit, on the runner's own clock.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.timers.now()
    }

    pub fn begin_interaction(&mut self) -> bool {
        if self.step != Step::Intro {
            return false;
        }
        self.step = Step::Interaction;
        true
    }

    /// Whether the continue control on the interaction step is live.
    #[must_use]
    pub fn can_continue(&self) -> bool {
        self.step == Step::Interaction && self.interaction.is_complete()
    }

    pub fn continue_to_summary(&mut self) -> bool {
        if !self.can_continue() {
            return false;
        }
        self.enter_summary();
        true
    }

    pub fn apply(&mut self, gesture: Gesture) -> bool {
        if self.step != Step::Interaction {
            return false;
        }
        let changed = self.interaction.apply(gesture, &mut self.timers);
        self.advance_if_done();
        changed
    }

    /// Moves the runner's clock forward, firing every timer that falls due.
    pub fn advance(&mut self, delta: Duration) {
        let until = self.timers.now().saturating_add(delta);
        while let Some(action) = self.timers.pop_due(until) {
            self.interaction.on_timer(action, &mut self.timers);
            self.advance_if_done();
        }
        self.timers.settle(until);
    }

    /// Only valid from the summary; otherwise the runner is handed back.
    pub fn complete(self) -> Result<StageExit, Self> {
        if self.step == Step::Summary {
            let stage = self.stage;
            Ok(self.teardown(StageExit::Completed(stage)))
        } else {
            Err(self)
        }
    }

    #[must_use]
    pub fn back_to_map(self) -> StageExit {
        let stage = self.stage;
        self.teardown(StageExit::BackToMap(stage))
    }

    fn advance_if_done(&mut self) {
        if self.step == Step::Interaction
            && self.interaction.advances_on_completion()
            && self.interaction.is_complete()
        {
            self.enter_summary();
        }
    }

    fn enter_summary(&mut self) {
        self.step = Step::Summary;
        let cancelled = self.timers.cancel_all();
        tracing::debug!(stage = %self.stage, cancelled, "Stage interaction complete");
    }

    fn teardown(mut self, exit: StageExit) -> StageExit {
        let cancelled = self.timers.cancel_all();
        if cancelled > 0 {
            tracing::debug!(stage = %self.stage, cancelled, "Cancelled pending stage timers");
        }
        exit
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{StageExit, StageRunner, Step};
    use crate::StageId;
    use crate::interaction::{Displacement, Gesture, HOLD_TICK, Interaction, ReleaseItem};

    fn stage(id: u8) -> StageId {
        StageId::new(id).expect("valid stage id")
    }

    fn interacting(id: u8) -> StageRunner {
        let mut runner = StageRunner::new(stage(id));
        assert!(runner.begin_interaction());
        runner
    }

    fn hold_progress(runner: &StageRunner) -> u8 {
        match runner.interaction() {
            Interaction::Hold(hold) => hold.progress(),
            other => panic!("expected hold, got {}", other.kind()),
        }
    }

    #[test]
    fn starts_at_intro_and_ignores_gestures_there() {
        let mut runner = StageRunner::new(stage(4));
        assert_eq!(runner.step(), Step::Intro);
        assert!(!runner.apply(Gesture::Push));
        assert!(!runner.continue_to_summary());
    }

    #[test]
    fn intro_only_moves_forward_once() {
        let mut runner = interacting(4);
        assert!(!runner.begin_interaction());
        assert_eq!(runner.step(), Step::Interaction);
    }

    #[test]
    fn continue_waits_for_predicate() {
        let mut runner = interacting(4);
        assert!(!runner.can_continue());
        assert!(!runner.continue_to_summary());

        assert!(runner.apply(Gesture::Push));
        assert!(runner.can_continue());
        assert!(runner.continue_to_summary());
        assert_eq!(runner.step(), Step::Summary);
        assert_eq!(runner.pending_timers(), 0);
    }

    #[test]
    fn hold_to_full_reaches_summary_exactly_once() {
        let mut runner = interacting(1);
        runner.apply(Gesture::HoldStart);
        for _ in 0..49 {
            runner.advance(HOLD_TICK);
            assert_eq!(runner.step(), Step::Interaction);
        }
        runner.advance(HOLD_TICK);
        assert_eq!(runner.step(), Step::Summary);
        assert_eq!(hold_progress(&runner), 100);

        // Releasing after the fact changes nothing.
        assert!(!runner.apply(Gesture::HoldEnd));
        runner.advance(Duration::from_secs(5));
        assert_eq!(runner.step(), Step::Summary);
        assert_eq!(hold_progress(&runner), 100);
    }

    #[test]
    fn releasing_hold_at_57_percent_resets() {
        let mut runner = interacting(1);
        runner.apply(Gesture::HoldStart);
        // 57 is not a multiple of the step; the counter passes it on the way to 58.
        runner.advance(HOLD_TICK * 28);
        assert_eq!(hold_progress(&runner), 56);
        runner.advance(HOLD_TICK);
        assert!(hold_progress(&runner) > 57);

        assert!(runner.apply(Gesture::HoldEnd));
        assert_eq!(hold_progress(&runner), 0);
        assert_eq!(runner.step(), Step::Interaction);
    }

    #[test]
    fn quiz_advances_when_last_answer_recorded() {
        let mut runner = interacting(7);
        assert!(runner.apply(Gesture::SelectChoice(0)));
        assert!(runner.apply(Gesture::NextQuestion));
        assert_eq!(runner.step(), Step::Interaction);
        assert!(runner.apply(Gesture::SelectChoice(3)));
        assert!(runner.apply(Gesture::NextQuestion));
        assert_eq!(runner.step(), Step::Summary);
    }

    #[test]
    fn detachment_needs_an_explicit_continue() {
        let mut runner = interacting(6);
        for item in ReleaseItem::ALL {
            runner.apply(Gesture::DragItem(item, Displacement::new(0, -10)));
        }
        assert_eq!(runner.step(), Step::Interaction);
        assert!(runner.continue_to_summary());
    }

    #[test]
    fn complete_outside_summary_hands_runner_back() {
        let runner = interacting(2);
        let runner = runner.complete().expect_err("not in summary");
        assert_eq!(runner.step(), Step::Interaction);
    }

    #[test]
    fn exits_carry_the_stage() {
        let mut runner = interacting(4);
        runner.apply(Gesture::Push);
        runner.continue_to_summary();
        assert_eq!(runner.complete().ok(), Some(StageExit::Completed(stage(4))));

        let runner = interacting(3);
        assert_eq!(runner.back_to_map(), StageExit::BackToMap(stage(3)));
    }
}
