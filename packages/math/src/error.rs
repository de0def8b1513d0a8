/// Errors raised by cached sequences.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    #[error("invalid index {index}: sequence positions cannot be negative")]
    InvalidIndex { index: isize },

    #[error("invalid slice step {step}: must be at least 1")]
    InvalidStep { step: isize },

    #[error("index {index} out of range: sequence ended after {len} values")]
    OutOfRange { index: usize, len: usize },

    #[error("value not found in sequence")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, SequenceError>;
