use thiserror::Error;

#[derive(Debug, Error)]
pub enum MockError {
    #[error("answer tables are malformed: {0}")]
    Tables(#[from] toml::de::Error),
    #[error("cannot write answer: {0}")]
    Output(#[from] std::io::Error),
}
