use tracing::trace;

use crate::error::MockError;
use crate::oracle::tables::AnswerTables;

pub const FALLBACK_PREFIX: &str = "Simulated output for: ";

/// Which tier produced an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Override(String),
    Reference(String),
    Fallback(String),
}

impl Answer {
    pub fn text(&self) -> &str {
        match self {
            Answer::Override(s) | Answer::Reference(s) | Answer::Fallback(s) => s,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Answer::Override(s) | Answer::Reference(s) | Answer::Fallback(s) => s,
        }
    }

    fn tier(&self) -> &'static str {
        match self {
            Answer::Override(_) => "override",
            Answer::Reference(_) => "reference",
            Answer::Fallback(_) => "fallback",
        }
    }
}

/// Deterministic stand-in for a model: overrides first, then reference
/// answers, then an echo of the prompt. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct Responder {
    tables: AnswerTables,
}

impl Responder {
    pub fn new(tables: AnswerTables) -> Self {
        Self { tables }
    }

    pub fn builtin() -> Result<Self, MockError> {
        Ok(Self::new(AnswerTables::builtin()?))
    }

    pub fn tables(&self) -> &AnswerTables {
        &self.tables
    }

    pub fn lookup(&self, prompt: &str) -> Answer {
        if let Some(answer) = self.tables.overrides().get(prompt) {
            return traced(prompt, Answer::Override(answer.clone()));
        }
        if let Some(answer) = self.tables.correct().get(prompt) {
            return traced(prompt, Answer::Reference(answer.clone()));
        }
        traced(prompt, Answer::Fallback(format!("{}{}", FALLBACK_PREFIX, prompt)))
    }

    pub fn respond(&self, prompt: &str) -> String {
        self.lookup(prompt).into_text()
    }
}

fn traced(prompt: &str, answer: Answer) -> Answer {
    trace!(tier = answer.tier(), prompt, "answered");
    answer
}
