pub mod cli;
pub mod error;
pub mod logging;
pub mod oracle;

pub use error::MockError;
pub use oracle::{Answer, AnswerTables, Responder};
