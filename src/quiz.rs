//! Quiz records embedded in `quiz` media items.
//!
//! Callers describe a quiz without identifiers; [`QuizInput::into_quiz`]
//! assigns a fresh quiz id and fills question and option ids left unset.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::ids::{id_or_generate, IdGenerator};
use crate::types::Identifier;

/// A quiz with its questions in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// Unique identifier.
    pub id: Identifier,
    /// Quiz title.
    pub title: String,
    /// Questions in order.
    pub questions: Vec<QuizQuestion>,
}

/// One timed question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Unique identifier.
    pub id: Identifier,
    /// Question text.
    pub question: String,
    /// Answer time in seconds.
    pub timer: u32,
    /// Answer format, tagged by `type`.
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// Answer format of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Pick from a fixed list.
    MultipleChoice {
        /// Options in display order.
        options: Vec<QuizAnswerOption>,
    },
    /// Free-form answer.
    OpenText,
}

/// One selectable answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswerOption {
    /// Unique identifier.
    pub id: Identifier,
    /// Answer text.
    pub text: String,
    /// Whether choosing this answer is correct.
    pub is_correct: bool,
}

/// Quiz description as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizInput {
    /// Quiz title, also used as the media item name.
    pub title: String,
    /// Questions in order.
    pub questions: Vec<QuestionInput>,
}

/// Question description as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionInput {
    /// Kept when set and non-empty.
    pub id: Option<Identifier>,
    /// Question text.
    pub question: String,
    /// Answer time in seconds; defaults to 30.
    pub timer: Option<u32>,
    /// Answer format.
    pub kind: QuestionKindInput,
}

/// Answer format as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKindInput {
    /// Pick from a fixed list.
    MultipleChoice(Vec<AnswerOptionInput>),
    /// Free-form answer.
    OpenText,
}

/// Answer option as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOptionInput {
    /// Kept when set and non-empty.
    pub id: Option<Identifier>,
    /// Answer text.
    pub text: String,
    /// Whether choosing this answer is correct.
    pub is_correct: bool,
}

impl AnswerOptionInput {
    /// Option without a preset identifier.
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self { id: None, text: text.into(), is_correct }
    }
}

impl QuestionInput {
    /// Multiple-choice question with the default timer.
    pub fn multiple_choice(question: impl Into<String>, options: Vec<AnswerOptionInput>) -> Self {
        Self {
            id: None,
            question: question.into(),
            timer: None,
            kind: QuestionKindInput::MultipleChoice(options),
        }
    }

    /// Open-text question with the default timer.
    pub fn open_text(question: impl Into<String>) -> Self {
        Self {
            id: None,
            question: question.into(),
            timer: None,
            kind: QuestionKindInput::OpenText,
        }
    }

    /// Override the answer time.
    #[must_use]
    pub const fn with_timer(mut self, seconds: u32) -> Self {
        self.timer = Some(seconds);
        self
    }
}

impl QuizInput {
    /// Create a quiz description.
    pub fn new(title: impl Into<String>, questions: Vec<QuestionInput>) -> Self {
        Self { title: title.into(), questions }
    }

    /// Assign identifiers and defaults.
    pub fn into_quiz(self, ids: &dyn IdGenerator) -> Quiz {
        let id = ids.next_id();
        let questions = self
            .questions
            .into_iter()
            .map(|q| {
                let kind = match q.kind {
                    QuestionKindInput::MultipleChoice(options) => QuestionKind::MultipleChoice {
                        options: options
                            .into_iter()
                            .map(|o| QuizAnswerOption {
                                id: id_or_generate(ids, o.id),
                                text: o.text,
                                is_correct: o.is_correct,
                            })
                            .collect(),
                    },
                    QuestionKindInput::OpenText => QuestionKind::OpenText,
                };
                QuizQuestion {
                    id: id_or_generate(ids, q.id),
                    question: q.question,
                    timer: q.timer.unwrap_or(constants::quiz::TIMER_SECONDS),
                    kind,
                }
            })
            .collect();

        Quiz { id, title: self.title, questions }
    }
}
