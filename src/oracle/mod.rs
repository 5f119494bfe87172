pub mod responder;
pub mod tables;

pub use responder::{Answer, Responder, FALLBACK_PREFIX};
pub use tables::AnswerTables;
