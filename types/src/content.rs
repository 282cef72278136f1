//! Copy for every screen of the journey.

use crate::StageId;

pub const TITLE: &str = "The Seven Laws of Consciousness";
pub const SUBTITLE: &str = "An Interactive Journey with Deepak Chopra";
pub const OPENING_QUOTE: &str = "\"Consciousness is the ultimate reality. Let's begin a journey to explore its seven dimensions within you.\"";
pub const BEGIN_LABEL: &str = "Begin Your Journey";

pub const MAP_TITLE: &str = "Your Path to Awareness";
pub const MAP_SUBTITLE: &str = "Unlock each law to continue your journey";

pub const COMPLETION_TITLE: &str = "Journey Complete";
pub const COMPLETION_MESSAGE: &str = "You have touched the seven dimensions of your own consciousness. Carry this awareness into your daily life.";
pub const RETURN_HOME_LABEL: &str = "Return to Home";

pub const CONTINUE_LABEL: &str = "Continue";
pub const NEXT_LAW_LABEL: &str = "Continue to Next Law";
pub const FINISH_JOURNEY_LABEL: &str = "Complete Journey";
pub const BACK_TO_MAP_LABEL: &str = "Back to Map";

pub const PUSH_LABEL: &str = "Give It a Push";
pub const INTENTION_PLACEHOLDER: &str = "I intend to...";
pub const RELEASE_LABEL: &str = "Release to the Universe";
pub const NEXT_QUESTION_LABEL: &str = "Next Question";
pub const REVEAL_PURPOSE_LABEL: &str = "Reveal My Purpose";

pub const HOLD_PROMPT: &str = "Touch and hold";
pub const SWIPE_PROMPT: &str = "Swipe left to give";
pub const EXCHANGE_DONE: &str = "The cycle is complete";
pub const PLANT_PROMPT: &str = "Drag the seed into the soil";
pub const GROWING: &str = "Growing...";
pub const BLOOMED: &str = "What you sow, you reap";
pub const ASSEMBLED: &str = "Effortless harmony";
pub const RELEASED_INTENTION: &str = "Your intention has been released to the universe";
pub const DETACH_PROMPT: &str = "Drag away your attachments";
pub const DETACH_DONE: &str = "Freedom achieved";

#[must_use]
pub fn exchange_caption(exchanges: u32, required: u32) -> String {
    match exchanges {
        0 => SWIPE_PROMPT.to_string(),
        n if n < required => format!("Exchange {n}/{required}"),
        _ => EXCHANGE_DONE.to_string(),
    }
}

#[must_use]
pub fn release_caption(released: usize, total: usize) -> String {
    match released {
        0 => DETACH_PROMPT.to_string(),
        n if n < total => format!("{n}/{total} released"),
        _ => DETACH_DONE.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LawContent {
    pub name: &'static str,
    pub subtitle: &'static str,
    pub intro_quote: &'static str,
    pub intro_action: &'static str,
    /// Line shown above the interaction.
    pub reflection: Option<&'static str>,
    pub summary_quote: &'static str,
}

static LAWS: [LawContent; StageId::COUNT] = [
    LawContent {
        name: "The Law of Pure Potentiality",
        subtitle: "纯粹潜能",
        intro_quote: "\"The source of all creation is pure consciousness... the realm of pure potentiality.\"",
        intro_action: "I'm Ready to Feel It",
        reflection: Some("Pure potentiality is silent, formless. It is the space between your thoughts."),
        summary_quote: "\"You are what the universe is. You are the field of pure potentiality in its every expression.\"",
    },
    LawContent {
        name: "The Law of Giving and Receiving",
        subtitle: "给予与接收",
        intro_quote: "\"The universe operates through dynamic exchange... giving and receiving are different aspects of the flow of energy.\"",
        intro_action: "Begin the Exchange",
        reflection: Some("The flow of life is the flow of giving and receiving."),
        summary_quote: "\"Give what you want to receive. If you want abundance, give abundance. If you want love, learn to give love.\"",
    },
    LawContent {
        name: "The Law of Karma",
        subtitle: "因果",
        intro_quote: "\"Every action generates a force of energy that returns to us in like kind. What we sow is what we reap.\"",
        intro_action: "Plant Your Seed",
        reflection: Some("Every choice carries the seed of its consequence."),
        summary_quote: "\"When you make a choice, you are choosing the consequences. Plant seeds of kindness and watch beauty bloom.\"",
    },
    LawContent {
        name: "The Law of Least Effort",
        subtitle: "最省力",
        intro_quote: "\"Nature's intelligence functions effortlessly, with carefreeness and harmony. When you are in harmony with nature, you can create easily.\"",
        intro_action: "Flow with Ease",
        reflection: Some("Do less and accomplish more. Accept what is."),
        summary_quote: "\"When your actions are motivated by love, your energy multiplies. Least effort is expended when your actions are motivated by love.\"",
    },
    LawContent {
        name: "The Law of Intention and Desire",
        subtitle: "意图与愿望",
        intro_quote: "\"Intention is the starting point of every dream. It is the creative power that fulfills all our needs.\"",
        intro_action: "Set Your Intention",
        reflection: Some("The field of all possibilities is receptive to your desires."),
        summary_quote: "\"Inherent in every intention is the mechanics for its fulfillment. Trust the universe to orchestrate the details.\"",
    },
    LawContent {
        name: "The Law of Detachment",
        subtitle: "超然",
        intro_quote: "\"In detachment lies the wisdom of uncertainty. In the uncertainty lies the freedom from our past and from the known.\"",
        intro_action: "Let Go",
        reflection: Some("Attachment comes from poverty consciousness. Detachment is synonymous with freedom."),
        summary_quote: "\"Only from detached involvement can you have joy and laughter. Then the symbols of wealth are created spontaneously and effortlessly.\"",
    },
    LawContent {
        name: "The Law of Dharma",
        subtitle: "生命目的",
        intro_quote: "\"Everyone has a purpose in life, a unique gift or special talent to give to others. When we blend this talent with service, we experience the ecstasy and exultation of our own spirit.\"",
        intro_action: "Discover Your Purpose",
        reflection: None,
        summary_quote: "\"Express your talents to fulfill needs; when you do this, you create abundance and fulfillment.\"",
    },
];

#[must_use]
pub fn law(stage: StageId) -> &'static LawContent {
    &LAWS[stage.index()]
}

/// Label of the summary's primary action.
#[must_use]
pub fn summary_action(stage: StageId) -> &'static str {
    if stage.is_last() {
        FINISH_JOURNEY_LABEL
    } else {
        NEXT_LAW_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::{
        DETACH_DONE, EXCHANGE_DONE, FINISH_JOURNEY_LABEL, NEXT_LAW_LABEL, SWIPE_PROMPT,
        exchange_caption, law, release_caption, summary_action,
    };
    use crate::StageId;

    #[test]
    fn every_law_has_copy() {
        for id in StageId::all() {
            let content = law(id);
            assert!(content.name.starts_with("The Law of"), "law {id}");
            assert!(!content.intro_quote.is_empty());
            assert!(!content.summary_quote.is_empty());
        }
    }

    #[test]
    fn last_law_finishes_the_journey() {
        assert_eq!(summary_action(StageId::LAST), FINISH_JOURNEY_LABEL);
        assert_eq!(summary_action(StageId::FIRST), NEXT_LAW_LABEL);
    }

    #[test]
    fn progress_captions() {
        assert_eq!(exchange_caption(0, 3), SWIPE_PROMPT);
        assert_eq!(exchange_caption(2, 3), "Exchange 2/3");
        assert_eq!(exchange_caption(3, 3), EXCHANGE_DONE);
        assert_eq!(release_caption(1, 3), "1/3 released");
        assert_eq!(release_caption(3, 3), DETACH_DONE);
    }
}
