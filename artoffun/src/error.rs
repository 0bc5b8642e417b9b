#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Option-parsing failure; the message already names the token.
    #[error("{0}")]
    Options(#[from] cmdparser::Error),

    /// Bad or missing operand discovered while dispatching.
    #[error("Error: {0}")]
    User(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
