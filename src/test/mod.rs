#![cfg(test)]

use crate::context::Output;
use crate::error::{MyError, MyResult};
use crate::loader::MemoryLoader;
use crate::token::Source;
use crate::translate::Translator;
use std::rc::Rc;
use unindent::Unindent;

mod cpp;
mod lexer;

fn source(filespec: &str, data: &str) -> Rc<Source> {
    Rc::new(Source::new(filespec.into(), data.unindent()))
}

fn translator_with(loader: MemoryLoader, data: &str, trace: bool) -> MyResult<Translator> {
    Translator::new(
        source("t.xc", data),
        Rc::new(loader),
        Default::default(),
        trace,
    )
}

fn translator(data: &str) -> Translator {
    translator_with(Default::default(), data, false).unwrap()
}

/// the four sections of a file that's expected to translate
fn program(data: &str) -> Output {
    translator(data).parse_program().unwrap()
}

fn expr(data: &str) -> String {
    translator(data).parse_expression().unwrap()
}

/// whatever stops a file from translating, lexing included
fn program_err(data: &str) -> MyError {
    translator_with(Default::default(), data, false)
        .and_then(|mut t| t.parse_program())
        .unwrap_err()
}

/// what the class `C` turns into up front
fn forward(name: &str) -> String {
    format!(
        "\nstruct xcs_{n};\nusing xct_{n} = SharedPtr<xcs_{n}>;",
        n = name
    )
}
