use super::Translator;
use crate::context::Returns;
use crate::error::{MyError, MyResult};
use crate::token::Kind;
use crate::util::{ident, prefix, CodeExt};

impl Translator {
    /// the statements between a pair of braces, not wrapped yet
    fn parse_statements(&mut self) -> MyResult<String> {
        self.expect(Kind::LBrace)?;
        let mut inner = String::new();
        loop {
            while self.consume(Kind::Semi).is_some() {}
            match self.peek().kind {
                Kind::RBrace => {
                    self.next();
                    break;
                }
                Kind::Eof => {
                    self.expect(Kind::RBrace)?;
                }
                _ => inner.push_str(&self.parse_statement()?),
            }
        }
        Ok(inner)
    }

    pub(super) fn parse_block(&mut self) -> MyResult<String> {
        Ok(self.parse_statements()?.block())
    }

    /// a function body. `Void` ones always end by returning nothing
    pub(super) fn parse_body(&mut self) -> MyResult<String> {
        let mut inner = self.parse_statements()?;
        if self.scope.returns == Returns::Void {
            inner.push_str("\nRETURN_VOID;");
        }
        Ok(inner.block())
    }

    fn parse_statement(&mut self) -> MyResult<String> {
        let token = self.peek().clone();
        match token.kind {
            Kind::Break | Kind::Continue => {
                self.next();
                if self.scope.loops == 0 {
                    return Err(MyError::semantic(
                        format!("'{}' outside of a loop", token.kind),
                        &token,
                    ));
                }
                Ok(format!("\n{};", token.kind))
            }
            Kind::While => {
                self.next();
                let cond = self.parse_expression()?;
                let cond = self.frame(&token, cond);
                let body = self.in_loop(Self::parse_block)?;
                Ok(format!("\nwhile ({}){}", cond, body))
            }
            Kind::For => {
                self.next();
                let name = self.expect(Kind::Id)?;
                self.expect(Kind::In)?;
                let container = self.parse_expression()?;
                let container = self.frame(&token, container);
                let body = self.in_loop(Self::parse_block)?;
                Ok(format!(
                    "\nfor (auto {}: ({}).iterptr()){}",
                    ident(prefix::VAR, name.text()),
                    container,
                    body
                ))
            }
            Kind::If => self.parse_if(),
            Kind::Return => self.parse_return(),
            Kind::LBrace => self.parse_block(),
            Kind::Var => self.parse_var(false),
            Kind::Using => self.parse_using(false),
            _ => {
                let expr = self.parse_expression()?;
                Ok(format!("\n{};", self.frame(&token, expr)))
            }
        }
    }

    fn parse_if(&mut self) -> MyResult<String> {
        let token = self.expect(Kind::If)?;
        let cond = self.parse_expression()?;
        let cond = self.frame(&token, cond);
        let body = self.parse_block()?;

        let mut s = format!("\nif ({}){}", cond, body);
        if self.consume(Kind::Else).is_some() {
            if self.at(Kind::If) {
                s.push_str("\nelse ");
                s.push_str(self.parse_if()?.trim_start());
            } else {
                s.push_str("\nelse");
                s.push_str(&self.parse_block()?);
            }
        }
        Ok(s)
    }

    fn parse_return(&mut self) -> MyResult<String> {
        let token = self.expect(Kind::Return)?;
        let bare = matches!(self.peek().kind, Kind::RBrace | Kind::Semi | Kind::Eof);
        match (bare, self.scope.returns) {
            (true, Returns::Void) => Ok("\nRETURN_VOID;".into()),
            (true, Returns::Constructor) => Ok("\nreturn;".into()),
            (true, Returns::Value) => Err(MyError::semantic("missing return value", &token)),
            (false, Returns::Constructor) => Err(MyError::semantic(
                "constructors can't return a value",
                &token,
            )),
            (false, _) => {
                let value = self.parse_expression()?;
                Ok(format!("\nreturn {};", self.frame(&token, value)))
            }
        }
    }

    /// `var name Type = value`, either one can be left out but not both
    ///
    /// globals don't get frames, there's nothing to push them onto yet
    pub(super) fn parse_var(&mut self, global: bool) -> MyResult<String> {
        let token = self.expect(Kind::Var)?;
        let name = self.expect(Kind::Id)?;
        self.consume(Kind::Colon);
        let ty = if self.at(Kind::Id) {
            Some(self.parse_type()?)
        } else {
            None
        };
        let value = if self.consume(Kind::Assign).is_some() {
            Some(self.parse_expression()?)
        } else {
            None
        };
        if global {
            self.consume(Kind::Semi);
        }

        let value = match value {
            Some(value) if global => format!(" = {}", value),
            Some(value) => format!(" = {}", self.frame(&token, value)),
            None if ty.is_none() => {
                return Err(MyError::semantic(
                    "variable needs a type or a value",
                    &token,
                ))
            }
            None => String::new(),
        };
        Ok(format!(
            "\n{} {}{};",
            ty.unwrap_or_else(|| "auto".into()),
            ident(prefix::VAR, name.text()),
            value
        ))
    }
}
