use crate::token::Token;
use thiserror::Error;

pub type MyResult<T> = Result<T, MyError>;

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ErrorKind {
    /// no token rule matched
    Lexical,
    /// the wrong token showed up
    Syntax,
    /// parsed fine but makes no sense here
    Semantic,
    /// the loader couldn't produce something
    Resource,
}

/// an error anchored at zero or more tokens
///
/// there's no recovery anywhere, one of these unwinds the whole translation
#[derive(Error, Debug, Clone)]
#[error("{kind} error: {message}{}", locations(.tokens))]
pub struct MyError {
    pub kind: ErrorKind,
    pub message: String,
    pub tokens: Vec<Token>,
}

impl MyError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            tokens: vec![],
        }
    }

    pub fn at(kind: ErrorKind, message: impl Into<String>, token: &Token) -> Self {
        Self::new(kind, message).with_token(token.clone())
    }

    pub fn lexical(message: impl Into<String>, token: &Token) -> Self {
        Self::at(ErrorKind::Lexical, message, token)
    }
    pub fn syntax(message: impl Into<String>, token: &Token) -> Self {
        Self::at(ErrorKind::Syntax, message, token)
    }
    pub fn semantic(message: impl Into<String>, token: &Token) -> Self {
        Self::at(ErrorKind::Semantic, message, token)
    }
    pub fn resource(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Resource, message)
    }

    pub fn with_token(mut self, token: Token) -> Self {
        self.tokens.push(token);
        self
    }
}

fn locations(tokens: &[Token]) -> String {
    tokens.iter().map(location).collect()
}

/// file, line, the line itself, and a caret under the column
fn location(token: &Token) -> String {
    format!(
        "\n  in file {:?} on line {}:\n{}\n{}^",
        token.filespec(),
        token.lineno(),
        token.line(),
        " ".repeat(token.colno() - 1)
    )
}
