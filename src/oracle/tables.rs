use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::error::MockError;

const BUILTIN_ANSWERS: &str = include_str!("answers.toml");

#[derive(Debug, Deserialize)]
struct AnswersToml {
    overrides: Option<Vec<AnswerRecord>>,
    correct: Option<Vec<AnswerRecord>>,
}

#[derive(Debug, Deserialize)]
struct AnswerRecord {
    prompt: String,
    answer: String,
}

/// The two canned tables: deliberate wrong answers and reference answers.
#[derive(Debug, Clone, Default)]
pub struct AnswerTables {
    overrides: HashMap<String, String>,
    correct: HashMap<String, String>,
}

impl AnswerTables {
    /// Tables compiled into the binary.
    pub fn builtin() -> Result<Self, MockError> {
        Self::from_toml(BUILTIN_ANSWERS)
    }

    pub fn from_toml(content: &str) -> Result<Self, MockError> {
        let parsed: AnswersToml = toml::from_str(content)?;
        Ok(Self {
            overrides: fold_records("overrides", parsed.overrides),
            correct: fold_records("correct", parsed.correct),
        })
    }

    pub fn overrides(&self) -> &HashMap<String, String> {
        &self.overrides
    }

    pub fn correct(&self) -> &HashMap<String, String> {
        &self.correct
    }
}

// Later records win over earlier ones with the same prompt.
fn fold_records(table: &str, records: Option<Vec<AnswerRecord>>) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for record in records.unwrap_or_default() {
        if let Some(previous) = map.insert(record.prompt.clone(), record.answer) {
            debug!(table, prompt = %record.prompt, %previous, "duplicate prompt replaced");
        }
    }
    map
}
