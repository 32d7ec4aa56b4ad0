use thiserror::Error;

pub type YurisResult<T> = Result<T, YurisError>;

#[derive(Debug, Error)]
pub enum YurisError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(String),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl YurisError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        YurisError::Config(msg.into())
    }

    pub fn logging_error(msg: impl Into<String>) -> Self {
        YurisError::Logging(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_become_terminal_errors() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "tty gone");
        let err: YurisError = io_err.into();
        assert!(matches!(err, YurisError::Terminal(_)));
        assert!(err.to_string().starts_with("terminal error:"));
    }
}
