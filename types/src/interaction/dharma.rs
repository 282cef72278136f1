//! Law 7: two questions that reveal a purpose.
//!
//! Answers are recorded as option values in question order. The purpose is
//! looked up from the `(Joy, Need)` pair by an exhaustive match; anything
//! that does not parse to a pair falls back to [`FALLBACK_PURPOSE`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [QuizOption; 4],
}

pub static QUESTIONS: [Question; 2] = [
    Question {
        prompt: "What brings you the most joy?",
        options: [
            QuizOption {
                value: "creating",
                label: "Creating and making things",
            },
            QuizOption {
                value: "helping",
                label: "Helping and supporting others",
            },
            QuizOption {
                value: "learning",
                label: "Learning and discovering",
            },
            QuizOption {
                value: "connecting",
                label: "Connecting people and ideas",
            },
        ],
    },
    Question {
        prompt: "What does the world need most from you?",
        options: [
            QuizOption {
                value: "innovation",
                label: "Innovation and new perspectives",
            },
            QuizOption {
                value: "compassion",
                label: "Compassion and care",
            },
            QuizOption {
                value: "wisdom",
                label: "Wisdom and understanding",
            },
            QuizOption {
                value: "unity",
                label: "Unity and collaboration",
            },
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joy {
    Creating,
    Helping,
    Learning,
    Connecting,
}

impl Joy {
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "creating" => Some(Joy::Creating),
            "helping" => Some(Joy::Helping),
            "learning" => Some(Joy::Learning),
            "connecting" => Some(Joy::Connecting),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Need {
    Innovation,
    Compassion,
    Wisdom,
    Unity,
}

impl Need {
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "innovation" => Some(Need::Innovation),
            "compassion" => Some(Need::Compassion),
            "wisdom" => Some(Need::Wisdom),
            "unity" => Some(Need::Unity),
            _ => None,
        }
    }
}

/// Shown when the answers do not form a known pair.
pub const FALLBACK_PURPOSE: &str = purpose(Joy::Creating, Need::Innovation);

#[must_use]
pub const fn purpose(joy: Joy, need: Need) -> &'static str {
    match (joy, need) {
        (Joy::Creating, Need::Innovation) => {
            "Your dharma is to be a creator and innovator, bringing new realities into existence through your unique vision."
        }
        (Joy::Creating, Need::Compassion) => {
            "Your dharma is to create beauty and healing, using your talents to bring comfort and joy to the world."
        }
        (Joy::Creating, Need::Wisdom) => {
            "Your dharma is to build understanding, creating pathways for others to discover truth through your work."
        }
        (Joy::Creating, Need::Unity) => {
            "Your dharma is to craft connections, building bridges between people through your creative expression."
        }
        (Joy::Helping, Need::Innovation) => {
            "Your dharma is to pioneer new ways of service, revolutionizing how we care for one another."
        }
        (Joy::Helping, Need::Compassion) => {
            "Your dharma is to be a healer and nurturer, your very presence bringing peace to those in need."
        }
        (Joy::Helping, Need::Wisdom) => {
            "Your dharma is to guide and mentor, helping others discover their own inner wisdom."
        }
        (Joy::Helping, Need::Unity) => {
            "Your dharma is to be a unifier, bringing people together through your generous spirit."
        }
        (Joy::Learning, Need::Innovation) => {
            "Your dharma is to discover and share, expanding human knowledge into new frontiers."
        }
        (Joy::Learning, Need::Compassion) => {
            "Your dharma is to understand deeply, using knowledge to create more empathy in the world."
        }
        (Joy::Learning, Need::Wisdom) => {
            "Your dharma is to be a seeker and teacher, illuminating the path for those who follow."
        }
        (Joy::Learning, Need::Unity) => {
            "Your dharma is to weave together different fields of knowledge, creating synthesis and understanding."
        }
        (Joy::Connecting, Need::Innovation) => {
            "Your dharma is to network and catalyze, connecting dots others cannot see to spark innovation."
        }
        (Joy::Connecting, Need::Compassion) => {
            "Your dharma is to build community, creating spaces where people feel seen and valued."
        }
        (Joy::Connecting, Need::Wisdom) => {
            "Your dharma is to facilitate dialogue, helping collective wisdom emerge from diverse voices."
        }
        (Joy::Connecting, Need::Unity) => {
            "Your dharma is to be a bridge-builder, your greatest gift is bringing people together in harmony."
        }
    }
}

/// Purpose for a recorded answer pair given as option values.
#[must_use]
pub fn purpose_for(first: &str, second: &str) -> &'static str {
    match (Joy::from_value(first), Need::from_value(second)) {
        (Some(joy), Some(need)) => purpose(joy, need),
        _ => FALLBACK_PURPOSE,
    }
}

#[derive(Debug, Clone, Default)]
pub struct Quiz {
    question: usize,
    answers: Vec<&'static str>,
    selected: Option<usize>,
}

impl Quiz {
    /// The question being asked, or `None` once every answer is in.
    #[must_use]
    pub fn current(&self) -> Option<&'static Question> {
        QUESTIONS.get(self.question)
    }

    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question
    }

    #[must_use]
    pub fn answers(&self) -> &[&'static str] {
        &self.answers
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.question + 1 >= QUESTIONS.len()
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.selected.is_some() && self.current().is_some()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.question >= QUESTIONS.len()
    }

    #[must_use]
    pub fn purpose(&self) -> &'static str {
        match self.answers.as_slice() {
            [first, second, ..] => purpose_for(first, second),
            _ => FALLBACK_PURPOSE,
        }
    }

    pub(crate) fn select(&mut self, option: usize) -> bool {
        let Some(question) = self.current() else {
            return false;
        };
        if option >= question.options.len() || self.selected == Some(option) {
            return false;
        }
        self.selected = Some(option);
        true
    }

    pub(crate) fn next(&mut self) -> bool {
        let (Some(question), Some(option)) = (self.current(), self.selected) else {
            return false;
        };
        self.answers.push(question.options[option].value);
        self.selected = None;
        self.question += 1;
        true
    }
}
