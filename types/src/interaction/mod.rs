//! Per-law interaction micro-state-machines.
//!
//! Each law gates its summary behind one small machine. They share a shape:
//! gestures come in through [`Interaction::apply`], delayed follow-ups are
//! scheduled on the owning runner's [`Timers`] and come back through
//! [`Interaction::on_timer`], and [`Interaction::is_complete`] is the
//! completion predicate. Gestures that do not fit the current law or state
//! are ignored and report `false`.

mod assembly;
mod detachment;
mod dharma;
mod exchange;
mod growth;
mod hold;
mod intention;

pub use assembly::{Assembly, PIECE_COUNT, PIECE_STAGGER, PIECE_TRAVEL};
pub use detachment::{Detachment, RELEASE_MIN_COLUMNS, RELEASE_MIN_ROWS, ReleaseItem};
pub use dharma::{
    FALLBACK_PURPOSE, Joy, Need, QUESTIONS, Question, Quiz, QuizOption, purpose, purpose_for,
};
pub use exchange::{
    BallPosition, EXCHANGES_REQUIRED, Exchange, GIVE_DELAY, RETURN_DELAY, SWIPE_MIN_COLUMNS,
};
pub use growth::{FULL_GROWTH, GROWTH_SCHEDULE, PLANT_MIN_ROWS, Planting};
pub use hold::{HOLD_FULL, HOLD_STEP, HOLD_TICK, Hold};
pub use intention::{Intention, MAX_INTENTION_CHARS};

use crate::StageId;
use crate::schedule::Scheduler;

/// Pointer travel between press and release, in terminal cells.
/// Positive `dx` is rightward, positive `dy` is downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Displacement {
    pub dx: i32,
    pub dy: i32,
}

impl Displacement {
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// A user action inside the interaction step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    HoldStart,
    HoldEnd,
    Swipe(Displacement),
    DropSeed(Displacement),
    Push,
    InsertChar(char),
    Backspace,
    ReleaseIntention,
    DragItem(ReleaseItem, Displacement),
    SelectChoice(usize),
    NextQuestion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    HoldTick,
    ExchangeArrive,
    ExchangeSettle,
    Grow,
    SettlePiece,
}

pub type Timers = Scheduler<TimerAction>;

#[derive(Debug, Clone)]
pub enum Interaction {
    Hold(Hold),
    Exchange(Exchange),
    Planting(Planting),
    Assembly(Assembly),
    Intention(Intention),
    Detachment(Detachment),
    Quiz(Quiz),
}

impl Interaction {
    #[must_use]
    pub fn for_stage(stage: StageId) -> Self {
        match stage.value() {
            1 => Interaction::Hold(Hold::default()),
            2 => Interaction::Exchange(Exchange::default()),
            3 => Interaction::Planting(Planting::default()),
            4 => Interaction::Assembly(Assembly::default()),
            5 => Interaction::Intention(Intention::default()),
            6 => Interaction::Detachment(Detachment::default()),
            _ => Interaction::Quiz(Quiz::default()),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        match self {
            Interaction::Hold(hold) => hold.is_complete(),
            Interaction::Exchange(exchange) => exchange.is_complete(),
            Interaction::Planting(planting) => planting.is_complete(),
            Interaction::Assembly(assembly) => assembly.is_complete(),
            Interaction::Intention(intention) => intention.is_complete(),
            Interaction::Detachment(detachment) => detachment.is_complete(),
            Interaction::Quiz(quiz) => quiz.is_complete(),
        }
    }

    /// Laws whose summary follows the moment the predicate holds, with no
    /// separate confirm.
    #[must_use]
    pub fn advances_on_completion(&self) -> bool {
        matches!(self, Interaction::Hold(_) | Interaction::Quiz(_))
    }

    /// Whether the interaction wants raw text keys.
    #[must_use]
    pub fn captures_text(&self) -> bool {
        matches!(self, Interaction::Intention(intention) if !intention.is_released())
    }

    pub fn apply(&mut self, gesture: Gesture, timers: &mut Timers) -> bool {
        match (self, gesture) {
            (Interaction::Hold(hold), Gesture::HoldStart) => hold.start(timers),
            (Interaction::Hold(hold), Gesture::HoldEnd) => hold.release(timers),
            (Interaction::Exchange(exchange), Gesture::Swipe(drag)) => exchange.swipe(drag, timers),
            (Interaction::Planting(planting), Gesture::DropSeed(drag)) => {
                planting.drop_seed(drag, timers)
            }
            (Interaction::Assembly(assembly), Gesture::Push) => assembly.push(timers),
            (Interaction::Intention(intention), Gesture::InsertChar(c)) => intention.insert_char(c),
            (Interaction::Intention(intention), Gesture::Backspace) => intention.backspace(),
            (Interaction::Intention(intention), Gesture::ReleaseIntention) => intention.release(),
            (Interaction::Detachment(detachment), Gesture::DragItem(item, drag)) => {
                detachment.drag(item, drag)
            }
            (Interaction::Quiz(quiz), Gesture::SelectChoice(option)) => quiz.select(option),
            (Interaction::Quiz(quiz), Gesture::NextQuestion) => quiz.next(),
            _ => false,
        }
    }

    pub fn on_timer(&mut self, action: TimerAction, timers: &mut Timers) {
        match (self, action) {
            (Interaction::Hold(hold), TimerAction::HoldTick) => hold.on_tick(timers),
            (Interaction::Exchange(exchange), TimerAction::ExchangeArrive) => {
                exchange.on_arrive(timers);
            }
            (Interaction::Exchange(exchange), TimerAction::ExchangeSettle) => exchange.on_settle(),
            (Interaction::Planting(planting), TimerAction::Grow) => planting.on_grow(),
            (Interaction::Assembly(assembly), TimerAction::SettlePiece) => assembly.on_settle(),
            (interaction, action) => {
                tracing::warn!(?action, kind = interaction.kind(), "Timer for another interaction");
            }
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Interaction::Hold(_) => "hold",
            Interaction::Exchange(_) => "exchange",
            Interaction::Planting(_) => "planting",
            Interaction::Assembly(_) => "assembly",
            Interaction::Intention(_) => "intention",
            Interaction::Detachment(_) => "detachment",
            Interaction::Quiz(_) => "quiz",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Displacement, Gesture, Interaction, ReleaseItem, Timers};
    use crate::StageId;

    #[test]
    fn each_stage_gets_its_own_machine() {
        let kinds: Vec<&str> = StageId::all()
            .map(|id| Interaction::for_stage(id).kind())
            .collect();
        assert_eq!(
            kinds,
            [
                "hold",
                "exchange",
                "planting",
                "assembly",
                "intention",
                "detachment",
                "quiz"
            ]
        );
    }

    #[test]
    fn foreign_gestures_are_ignored() {
        let mut timers = Timers::new();
        let mut hold = Interaction::for_stage(StageId::FIRST);
        assert!(!hold.apply(Gesture::Push, &mut timers));
        assert!(!hold.apply(
            Gesture::DragItem(ReleaseItem::Weight, Displacement::new(20, 0)),
            &mut timers
        ));
        assert!(timers.is_idle());
    }

    #[test]
    fn only_hold_and_quiz_advance_by_themselves() {
        let auto: Vec<u8> = StageId::all()
            .filter(|id| Interaction::for_stage(*id).advances_on_completion())
            .map(StageId::value)
            .collect();
        assert_eq!(auto, [1, 7]);
    }
}
