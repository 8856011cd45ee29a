use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Station name is required before generating a template")]
    MissingStationName,
    #[error("Text generation request failed: {0}")]
    Request(String),
    #[error("Text generation returned an invalid reply: {0}")]
    InvalidResponse(String),
    #[error("Text generation failed after {attempts} attempts: {last}")]
    Exhausted {
        attempts: u32,
        last: Box<GeneratorError>
    }
}
