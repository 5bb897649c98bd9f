pub mod distractors;
pub mod generator;

pub use generator::generate_question;

/// Question variant, drawn uniformly for every attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Meaning,
    Synonym,
    Antonym,
    Unscramble,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 4] = [
        QuestionKind::Meaning,
        QuestionKind::Synonym,
        QuestionKind::Antonym,
        QuestionKind::Unscramble,
    ];
}

/// A generated question, ready to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    /// Multiple choice, sent as a Telegram quiz poll. The option list holds
    /// four pairwise distinct entries and `options[correct_index]` is the
    /// answer taken verbatim from the word record.
    Quiz {
        kind: QuestionKind,
        prompt: String,
        options: Vec<String>,
        correct_index: usize,
    },
    /// Plain text prompt; the answer is implicit and never checked.
    Unscramble { prompt: String },
}
