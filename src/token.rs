//! source buffers and the tokens lexed out of them
//!
//! a token only stores its byte offset, everything you'd show a user
//! (line, column, the line itself) is worked out from the source on demand

use by_address::ByAddress;
use derivative::Derivative;
use derive_new::new;
use std::fmt::{Display, Formatter};
use std::ops::Range;
use std::rc::Rc;

/// a named input buffer, never changes after being loaded
#[derive(Debug, new)]
pub struct Source {
    pub filespec: String,
    pub data: String,
}

#[derive(
    Debug,
    Copy,
    Clone,
    Hash,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
pub enum Kind {
    // categories
    #[strum(serialize = "STR")]
    Str,
    #[strum(serialize = "CHR")]
    Chr,
    #[strum(serialize = "INT")]
    Int,
    #[strum(serialize = "FLT")]
    Flt,
    #[strum(serialize = "ID")]
    Id,
    #[strum(serialize = "EOF")]
    Eof,
    #[strum(serialize = "ERR")]
    Err,

    // keywords
    #[strum(serialize = "fn")]
    Fn,
    #[strum(serialize = "return")]
    Return,
    #[strum(serialize = "if")]
    If,
    #[strum(serialize = "else")]
    Else,
    #[strum(serialize = "while")]
    While,
    #[strum(serialize = "break")]
    Break,
    #[strum(serialize = "continue")]
    Continue,
    #[strum(serialize = "var")]
    Var,
    #[strum(serialize = "include")]
    Include,
    #[strum(serialize = "new")]
    New,
    #[strum(serialize = "true")]
    True,
    #[strum(serialize = "false")]
    False,
    #[strum(serialize = "nil")]
    Nil,
    #[strum(serialize = "self")]
    SelfKw,
    #[strum(serialize = "super")]
    Super,
    #[strum(serialize = "class")]
    Class,
    #[strum(serialize = "for")]
    For,
    #[strum(serialize = "in")]
    In,
    #[strum(serialize = "is")]
    Is,
    #[strum(serialize = "not")]
    Not,
    #[strum(serialize = "and")]
    And,
    #[strum(serialize = "or")]
    Or,
    #[strum(serialize = "using")]
    Using,

    // symbols
    #[strum(serialize = "==")]
    Eq,
    #[strum(serialize = "!=")]
    Ne,
    #[strum(serialize = "<=")]
    Le,
    #[strum(serialize = ">=")]
    Ge,
    #[strum(serialize = "+=")]
    PlusEq,
    #[strum(serialize = "-=")]
    MinusEq,
    #[strum(serialize = "*=")]
    StarEq,
    #[strum(serialize = "/=")]
    SlashEq,
    #[strum(serialize = "%=")]
    PercentEq,
    #[strum(serialize = "(")]
    LParen,
    #[strum(serialize = ")")]
    RParen,
    #[strum(serialize = "[")]
    LBracket,
    #[strum(serialize = "]")]
    RBracket,
    #[strum(serialize = "{")]
    LBrace,
    #[strum(serialize = "}")]
    RBrace,
    #[strum(serialize = ".")]
    Dot,
    #[strum(serialize = ",")]
    Comma,
    #[strum(serialize = ";")]
    Semi,
    #[strum(serialize = "=")]
    Assign,
    #[strum(serialize = ":")]
    Colon,
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "*")]
    Star,
    #[strum(serialize = "/")]
    Slash,
    #[strum(serialize = "%")]
    Percent,
    #[strum(serialize = "$")]
    Dollar,
    #[strum(serialize = "<")]
    Lt,
    #[strum(serialize = ">")]
    Gt,
}

impl Kind {
    #[cfg(test)]
    pub fn is_keyword(self) -> bool {
        use Kind::*;
        matches!(
            self,
            Fn | Return
                | If
                | Else
                | While
                | Break
                | Continue
                | Var
                | Include
                | New
                | True
                | False
                | Nil
                | SelfKw
                | Super
                | Class
                | For
                | In
                | Is
                | Not
                | And
                | Or
                | Using
        )
    }

    #[cfg(test)]
    pub fn is_symbol(self) -> bool {
        use Kind::*;
        !self.is_keyword() && !matches!(self, Str | Chr | Int | Flt | Id | Eof | Err)
    }

    /// the compound assignment operators, plus plain `=`
    pub fn is_assignment(self) -> bool {
        use Kind::*;
        matches!(
            self,
            Assign | PlusEq | MinusEq | StarEq | SlashEq | PercentEq
        )
    }
}

#[derive(Derivative, Clone, PartialEq)]
#[derivative(Debug)]
pub struct Token {
    pub kind: Kind,
    pub offset: usize,
    len: usize,
    #[derivative(Debug = "ignore")]
    pub source: ByAddress<Rc<Source>>,
}

impl Token {
    pub fn new(kind: Kind, range: Range<usize>, source: &Rc<Source>) -> Self {
        Self {
            kind,
            offset: range.start,
            len: range.end - range.start,
            source: ByAddress(source.clone()),
        }
    }

    pub fn text(&self) -> &str {
        &self.source.data[self.offset..self.offset + self.len]
    }

    pub fn filespec(&self) -> &str {
        &self.source.filespec
    }

    fn line_start(&self) -> usize {
        self.source.data[..self.offset]
            .rfind('\n')
            .map_or(0, |i| i + 1)
    }

    /// 1-based
    pub fn lineno(&self) -> usize {
        1 + self.source.data[..self.offset].matches('\n').count()
    }

    /// 1-based, counted in chars
    pub fn colno(&self) -> usize {
        1 + self.source.data[self.line_start()..self.offset]
            .chars()
            .count()
    }

    /// the whole line the token starts on, without the newline
    pub fn line(&self) -> &str {
        let data = &self.source.data;
        let start = self.line_start();
        let end = data[self.offset..]
            .find('\n')
            .map_or(data.len(), |i| self.offset + i);
        &data[start..end]
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.kind {
            Kind::Eof => write!(f, "EOF"),
            _ => write!(f, "{:?}", self.text()),
        }
    }
}
