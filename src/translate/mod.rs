//! the translator: a recursive descent parser whose productions hand back c++
//!
//! there is no tree in between. every `parse_*` eats tokens and returns the
//! text it stands for, and the top level sorts that text into the four
//! sections of an `Output`

use crate::context::{Included, Output, Scope};
use crate::error::{MyError, MyResult};
use crate::lexer::lex;
use crate::loader::Loader;
use crate::runtime;
use crate::token::{Kind, Source, Token};
use crate::util::{decode_literal, sanitize};
use std::rc::Rc;

mod define;
mod expr;
mod statement;
mod ty;

pub struct Translator {
    source: Rc<Source>,
    tokens: Vec<Token>,
    /// index of the next token, never goes past EOF
    i: usize,
    loader: Rc<dyn Loader>,
    included: Included,
    trace: bool,
    /// pulled in before anything in the file itself
    includes: Vec<String>,
    pub(crate) scope: Scope,
}

impl Translator {
    pub fn new(
        source: Rc<Source>,
        loader: Rc<dyn Loader>,
        included: Included,
        trace: bool,
    ) -> MyResult<Self> {
        let tokens = lex(&source)?;
        Ok(Self {
            source,
            tokens,
            i: 0,
            loader,
            included,
            trace,
            includes: vec![],
            scope: Default::default(),
        })
    }

    pub fn with_includes(mut self, includes: impl IntoIterator<Item = String>) -> Self {
        self.includes.extend(includes);
        self
    }

    /// the whole c++ program: runtime, then every section
    pub fn translate(&mut self) -> MyResult<String> {
        log::info!("translating {:?}", self.source.filespec);
        self.included.lock().insert(self.source.filespec.clone());
        let output = self.parse_program()?;
        Ok(runtime::prologue(self.trace) + &output.render())
    }

    // tokens

    fn peek(&self) -> &Token {
        &self.tokens[self.i]
    }

    fn next(&mut self) -> Token {
        let token = self.tokens[self.i].clone();
        if token.kind != Kind::Eof {
            self.i += 1;
        }
        token
    }

    fn at(&self, kind: Kind) -> bool {
        self.peek().kind == kind
    }

    fn consume(&mut self, kind: Kind) -> Option<Token> {
        if self.at(kind) {
            Some(self.next())
        } else {
            None
        }
    }

    fn expect(&mut self, kind: Kind) -> MyResult<Token> {
        match self.consume(kind) {
            Some(token) => Ok(token),
            None => Err(MyError::syntax(
                format!("expected '{}' but found {}", kind, self.peek()),
                self.peek(),
            )),
        }
    }

    /// `open item, item, ... close`, trailing comma allowed
    fn parse_list<T>(
        &mut self,
        open: Kind,
        close: Kind,
        mut item: impl FnMut(&mut Self) -> MyResult<T>,
    ) -> MyResult<Vec<T>> {
        self.expect(open)?;
        let mut items = vec![];
        while self.consume(close).is_none() {
            items.push(item(self)?);
            if self.consume(Kind::Comma).is_none() {
                self.expect(close)?;
                break;
            }
        }
        Ok(items)
    }

    // context

    /// run `f` with `scope` swapped in, putting the old one back however it goes
    fn scoped<T>(
        &mut self,
        scope: Scope,
        f: impl FnOnce(&mut Self) -> MyResult<T>,
    ) -> MyResult<T> {
        let old = std::mem::replace(&mut self.scope, scope);
        let result = f(self);
        self.scope = old;
        result
    }

    fn in_loop<T>(&mut self, f: impl FnOnce(&mut Self) -> MyResult<T>) -> MyResult<T> {
        let scope = Scope {
            loops: self.scope.loops + 1,
            ..self.scope.clone()
        };
        self.scoped(scope, f)
    }

    /// wrap an expression so it shows up in tracebacks, if tracing is on
    fn frame(&self, token: &Token, expr: String) -> String {
        if !self.trace {
            return expr;
        }
        // the extra parens keep template commas inside one macro argument
        format!(
            "WITH_FRAME(\"File \\\"{}\\\", line \", {}, \", in {}\", ({}))",
            sanitize(&self.source.filespec),
            token.lineno(),
            sanitize(&self.scope.function_name),
            expr
        )
    }

    // program

    pub(crate) fn parse_program(&mut self) -> MyResult<Output> {
        // everything included goes before everything of our own,
        // in the order it was included
        let mut included = Output::default();
        let mut own = Output::default();
        // aliases can name any class in the file, so they go after its forwards
        let mut aliases = String::new();

        let anchor = self.peek().clone();
        for uri in std::mem::take(&mut self.includes) {
            included.append(self.process_include(&uri, &anchor)?);
        }

        while !self.at(Kind::Eof) {
            let token = self.peek().clone();
            match token.kind {
                Kind::Fn => own.append(self.parse_function()?),
                Kind::Class => own.append(self.parse_class()?),
                Kind::Var => {
                    let global = self.parse_var(true)?;
                    own.func_declares.push_str(&global)
                }
                Kind::Using => {
                    let alias = self.parse_using(true)?;
                    aliases.push_str(&alias)
                }
                Kind::Include => included.append(self.parse_include()?),
                // docstrings
                Kind::Str | Kind::Chr | Kind::Semi => {
                    self.next();
                }
                _ => return Err(MyError::syntax("expected declaration", &token)),
            }
        }

        own.forward_declares.push_str(&aliases);
        included.append(own);
        Ok(included)
    }

    fn parse_include(&mut self) -> MyResult<Output> {
        let token = self.expect(Kind::Include)?;
        let uri = match self.consume(Kind::Chr) {
            Some(uri) => uri,
            None => self.expect(Kind::Str)?,
        };
        let uri = decode_literal(uri.text());
        self.consume(Kind::Semi);
        self.process_include(&uri, &token)
    }

    /// translate `uri` on its own, unless something already pulled it in
    fn process_include(&mut self, uri: &str, token: &Token) -> MyResult<Output> {
        if !self.included.lock().insert(uri.to_string()) {
            log::debug!("{:?} already included, skipping", uri);
            return Ok(Output::default());
        }
        log::debug!("including {:?} from {:?}", uri, self.source.filespec);

        let data = self
            .loader
            .load(uri)
            .map_err(|err| err.with_token(token.clone()))?;
        let source = Rc::new(Source::new(uri.to_string(), data));
        Translator::new(source, self.loader.clone(), self.included.clone(), self.trace)?
            .parse_program()
    }
}
