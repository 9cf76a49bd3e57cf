use thiserror::Error;

#[derive(Error, Debug)]
pub enum HanpinError {
    // 输入错误
    #[error("Empty input")]
    EmptyInput,

    #[error("Invalid character in hanzi number: {0}")]
    InvalidCharacter(char),

    // 结构错误
    #[error("Malformed hanzi number: {0}")]
    MalformedStructure(String),

    // 数值范围错误
    #[error("Magnitude overflow: {value} exceeds limit {limit}")]
    MagnitudeOverflow { value: i128, limit: u64 },
}

pub type HanpinResult<T> = Result<T, HanpinError>;
