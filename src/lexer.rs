//! turn a source buffer into a flat list of tokens
//!
//! the rule table lives in `lexer.pest`. pest's ordered choice gives us
//! "first rule that matches wins" for free, we just drive it one token at a
//! time so every token keeps its offset into the whole buffer

use crate::error::{MyError, MyResult};
use crate::token::{Kind, Source, Token};
use inner::{LexParser, Rule};
use pest::Parser;
use std::rc::Rc;

mod inner {
    //! tuck the generated stuff away

    use pest_derive::Parser;

    #[derive(Parser)]
    #[grammar = "lexer.pest"]
    pub struct LexParser;
}

/// length of the match of `rule` at the start of `input`, and the rule of the
/// first inner pair if there is one
fn match_rule(rule: Rule, input: &str) -> Option<(Rule, usize)> {
    let pair = LexParser::parse(rule, input).ok()?.next()?;
    let len = pair.as_span().end();
    let inner = pair.into_inner().next().map_or(rule, |pair| pair.as_rule());
    Some((inner, len))
}

fn skip(data: &str, i: usize) -> usize {
    i + match_rule(Rule::skip, &data[i..]).map_or(0, |(_, len)| len)
}

/// kind of the token at the start of `input`, and how long it is
fn next_token(input: &str) -> Option<(Kind, usize)> {
    let (rule, len) = match_rule(Rule::token, input)?;
    let text = &input[..len];
    let kind = match rule {
        Rule::str_lit => Kind::Str,
        Rule::chr_lit => Kind::Chr,
        Rule::flt_lit => Kind::Flt,
        Rule::int_lit => Kind::Int,
        Rule::ident => Kind::Id,
        Rule::keyword | Rule::symbol => text.parse().ok()?,
        _ => return None,
    };
    Some((kind, len))
}

pub fn lex(source: &Rc<Source>) -> MyResult<Vec<Token>> {
    let data = source.data.as_str();
    let mut tokens = vec![];

    let mut i = skip(data, 0);
    while i < data.len() {
        match next_token(&data[i..]) {
            Some((kind, len)) => {
                tokens.push(Token::new(kind, i..i + len, source));
                i += len;
            }
            None => {
                let len = match_rule(Rule::unrecognized, &data[i..]).map_or(1, |(_, len)| len);
                let token = Token::new(Kind::Err, i..i + len, source);
                return Err(MyError::lexical("unrecognized token", &token));
            }
        }
        i = skip(data, i);
    }
    tokens.push(Token::new(Kind::Eof, i..i, source));

    log::trace!("lexed {} tokens from {:?}", tokens.len(), source.filespec);
    Ok(tokens)
}
