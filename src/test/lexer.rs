use super::source;
use crate::error::ErrorKind;
use crate::lexer::lex;
use crate::token::{Kind, Source};
use std::rc::Rc;
use strum::IntoEnumIterator;

fn kinds(data: &str) -> Vec<Kind> {
    lex(&source("t.xc", data))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn longest_symbol_wins() {
    use Kind::*;
    assert_eq!(kinds("a==b"), [Id, Eq, Id, Eof]);
    assert_eq!(kinds("a=b"), [Id, Assign, Id, Eof]);
    assert_eq!(kinds("x+=1"), [Id, PlusEq, Int, Eof]);
    assert_eq!(kinds("a<=b<c"), [Id, Le, Id, Lt, Id, Eof]);
}

#[test]
fn keywords_stop_at_word_boundary() {
    use Kind::*;
    assert_eq!(kinds("whileish"), [Id, Eof]);
    assert_eq!(kinds("include in is isnt"), [Include, In, Is, Id, Eof]);
    assert_eq!(kinds("self selfish _self"), [SelfKw, Id, Id, Eof]);
}

#[test]
fn every_keyword_and_symbol_lexes_as_itself() {
    for kind in Kind::iter().filter(|kind| kind.is_keyword() || kind.is_symbol()) {
        let text = kind.to_string();
        assert_eq!(kinds(&text), [kind, Kind::Eof], "{:?}", text);
    }
}

#[test]
fn literals() {
    use Kind::*;
    assert_eq!(
        kinds(r#"1 1.5 .5 2. "s" 's' r"raw\" c'x' c"y" """tri"ple""" '''a'b''' x"#),
        [Int, Flt, Flt, Flt, Str, Str, Str, Chr, Chr, Str, Str, Id, Eof]
    );
    assert_eq!(kinds(r#""say \"hi\"""#), [Str, Eof]);
    assert_eq!(kinds("3abc"), [Int, Id, Eof]);
    assert_eq!(kinds("a.b.c"), [Id, Dot, Id, Dot, Id, Eof]);
}

#[test]
fn comments_and_whitespace_are_skipped() {
    use Kind::*;
    assert_eq!(kinds("# hi\nx # there\n\t# end"), [Id, Eof]);
    assert_eq!(kinds(""), [Eof]);
    assert_eq!(kinds("   \n  # nothing"), [Eof]);
}

#[test]
fn eof_is_empty_and_at_the_end() {
    let data = "fn main[] {}\n\n";
    let tokens = lex(&Rc::new(Source::new("t.xc".into(), data.into()))).unwrap();
    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, Kind::Eof);
    assert_eq!(eof.text(), "");
    assert_eq!(eof.offset, data.len());
    assert_eq!(tokens.iter().filter(|token| token.kind == Kind::Eof).count(), 1);
}

#[test]
fn positions_across_a_multiline_string() {
    let data = "x \"\"\"a\nb\"\"\" y";
    let tokens = lex(&Rc::new(Source::new("t.xc".into(), data.into()))).unwrap();
    assert_eq!(tokens.len(), 4);

    let string = &tokens[1];
    assert_eq!(string.kind, Kind::Str);
    assert_eq!(string.lineno(), 1);
    assert_eq!(string.colno(), 3);

    let y = &tokens[2];
    assert_eq!(y.text(), "y");
    assert_eq!(y.lineno(), 2);
    assert_eq!(y.colno(), 6);
    assert_eq!(y.line(), "b\"\"\" y");
}

#[test]
fn unrecognized_run_is_reported() {
    let err = lex(&source("t.xc", "x = `oops` y")).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Lexical);
    assert_eq!(err.tokens.len(), 1);
    assert_eq!(err.tokens[0].kind, Kind::Err);
    assert_eq!(err.tokens[0].text(), "`oops`");
    assert_eq!(err.tokens[0].colno(), 5);

    let err = lex(&source("t.xc", "x = \"never closed")).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Lexical);
    assert_eq!(err.tokens[0].text(), "\"never");
}
