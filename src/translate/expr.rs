//! expressions, lowest precedence first
//!
//! every binary operation gets its own parens, so the c++ side never has to
//! agree with us about precedence

use super::Translator;
use crate::context::Scope;
use crate::error::{MyError, MyResult};
use crate::token::{Kind, Token};
use crate::util::{decode_literal, ident, prefix, sanitize};

type Production = fn(&mut Translator) -> MyResult<String>;

impl Translator {
    pub(crate) fn parse_expression(&mut self) -> MyResult<String> {
        self.parse_or()
    }

    /// left associative loop over `ops`, with `next` for the operands
    fn parse_binary(&mut self, ops: &[(Kind, &str)], next: Production) -> MyResult<String> {
        let mut e = next(self)?;
        while let Some(&(_, op)) = ops.iter().find(|(kind, _)| self.at(*kind)) {
            self.next();
            let r = next(self)?;
            e = format!("({} {} {})", e, op, r);
        }
        Ok(e)
    }

    fn parse_or(&mut self) -> MyResult<String> {
        self.parse_binary(&[(Kind::Or, "||")], Self::parse_and)
    }

    fn parse_and(&mut self) -> MyResult<String> {
        self.parse_binary(&[(Kind::And, "&&")], Self::parse_equality)
    }

    /// `==`, `!=`, and the identity checks
    fn parse_equality(&mut self) -> MyResult<String> {
        let mut e = self.parse_relational()?;
        loop {
            if self.consume(Kind::Eq).is_some() {
                e = format!("({} == {})", e, self.parse_relational()?);
            } else if self.consume(Kind::Ne).is_some() {
                e = format!("({} != {})", e, self.parse_relational()?);
            } else if self.consume(Kind::Is).is_some() {
                let not = self.consume(Kind::Not).is_some();
                if self.consume(Kind::Nil).is_some() {
                    let check = if not { "is_not_nil" } else { "is_nil" };
                    e = format!("({}).{}()", e, check);
                } else {
                    let check = if not { "is_not" } else { "is" };
                    e = format!("({}).{}({})", e, check, self.parse_relational()?);
                }
            } else {
                return Ok(e);
            }
        }
    }

    fn parse_relational(&mut self) -> MyResult<String> {
        self.parse_binary(
            &[
                (Kind::Lt, "<"),
                (Kind::Le, "<="),
                (Kind::Gt, ">"),
                (Kind::Ge, ">="),
            ],
            Self::parse_additive,
        )
    }

    fn parse_additive(&mut self) -> MyResult<String> {
        self.parse_binary(
            &[(Kind::Plus, "+"), (Kind::Minus, "-")],
            Self::parse_multiplicative,
        )
    }

    fn parse_multiplicative(&mut self) -> MyResult<String> {
        self.parse_binary(
            &[(Kind::Star, "*"), (Kind::Slash, "/"), (Kind::Percent, "%")],
            Self::parse_unary,
        )
    }

    fn parse_unary(&mut self) -> MyResult<String> {
        if self.consume(Kind::Minus).is_some() {
            Ok(format!("(-{})", self.parse_unary()?))
        } else if self.consume(Kind::Not).is_some() {
            Ok(format!("(!{})", self.parse_unary()?))
        } else {
            self.parse_postfix()
        }
    }

    /// attribute access, method calls, plain calls
    fn parse_postfix(&mut self) -> MyResult<String> {
        let mut e = self.parse_primary()?;
        loop {
            if self.consume(Kind::Dot).is_some() {
                let name = self.expect(Kind::Id)?;
                let method = ident(prefix::METHOD, name.text());
                let attr = format!("{}->{}", e, ident(prefix::ATTR, name.text()));
                e = if self.at(Kind::LParen) {
                    let typeargs = self.parse_typeargs()?;
                    let args = self.parse_args()?;
                    format!("{}->{}<{}>({})", e, method, typeargs, args)
                } else if self.at(Kind::LBracket) {
                    format!("{}->{}({})", e, method, self.parse_args()?)
                } else if self.peek().kind.is_assignment() {
                    let op = self.next();
                    self.parse_assignment(attr, &op)?
                } else {
                    attr
                };
            } else if self.at(Kind::LBracket) {
                e = format!("{}({})", e, self.parse_args()?);
            } else {
                return Ok(e);
            }
        }
    }

    /// `target op value`, `= nil` resets the pointer instead
    fn parse_assignment(&mut self, target: String, op: &Token) -> MyResult<String> {
        if op.kind == Kind::Assign && self.consume(Kind::Nil).is_some() {
            return Ok(format!("{}.set_nil()", target));
        }
        let value = self.parse_expression()?;
        Ok(format!("({} {} {})", target, op.text(), value))
    }

    fn parse_primary(&mut self) -> MyResult<String> {
        let token = self.next();
        match token.kind {
            Kind::LParen => {
                let e = self.parse_expression()?;
                self.expect(Kind::RParen)?;
                Ok(e)
            }
            Kind::Id => {
                let name = ident(prefix::VAR, token.text());
                if self.at(Kind::LParen) {
                    let typeargs = self.parse_typeargs()?;
                    let args = self.parse_args()?;
                    Ok(format!("{}<{}>({})", name, typeargs, args))
                } else if self.at(Kind::LBracket) {
                    Ok(format!("{}({})", name, self.parse_args()?))
                } else if self.peek().kind.is_assignment() {
                    let op = self.next();
                    self.parse_assignment(name, &op)
                } else {
                    Ok(name)
                }
            }
            Kind::New => {
                let ty = self.parse_type()?;
                let args = self.parse_args()?;
                Ok(format!("{}(new {}::Pointee({}))", ty, ty, args))
            }
            Kind::SelfKw => {
                self.require_class(&token)?;
                // members go through the raw pointer so a constructor never
                // takes and drops the only handle to a half-built object
                if self.at(Kind::Dot) {
                    Ok("this".into())
                } else {
                    Ok("SharedPtr<std::remove_pointer<decltype(this)>::type>(this)".into())
                }
            }
            Kind::Super => {
                self.require_class(&token)?;
                self.expect(Kind::Dot)?;
                let name = self.expect(Kind::Id)?;
                let args = self.parse_args()?;
                Ok(format!(
                    "this->{}::{}({})",
                    self.scope.base_class_name,
                    ident(prefix::METHOD, name.text()),
                    args
                ))
            }
            Kind::True => Ok("true".into()),
            Kind::False => Ok("false".into()),
            Kind::Nil => Ok("nullptr".into()),
            Kind::Int => match token.text().parse::<i64>() {
                Ok(_) => Ok(format!("{}LL", token.text())),
                Err(_) => Err(MyError::semantic(
                    "integer literal doesn't fit in 64 bits",
                    &token,
                )),
            },
            Kind::Flt => Ok(token.text().into()),
            Kind::Str => Ok(format!(
                "xct_String(new xcs_String(\"{}\"))",
                sanitize(&decode_literal(token.text()))
            )),
            Kind::Chr => {
                let value = decode_literal(token.text());
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii() => {
                        Ok(format!("'{}'", sanitize(c.encode_utf8(&mut [0; 4]))))
                    }
                    _ => Err(MyError::semantic(
                        "character literal has to be exactly one ascii character",
                        &token,
                    )),
                }
            }
            Kind::Dollar => self.parse_aggregate(),
            Kind::Fn => self.parse_lambda(),
            _ => Err(MyError::syntax("expected expression", &token)),
        }
    }

    fn require_class(&self, token: &Token) -> MyResult<()> {
        if self.scope.in_class() {
            Ok(())
        } else {
            Err(MyError::semantic(
                format!("'{}' outside of a class", token.kind),
                token,
            ))
        }
    }

    /// `$T[a, b]` makes a list, `$K, V[k: v]` makes a map
    fn parse_aggregate(&mut self) -> MyResult<String> {
        let key = self.parse_type()?;
        if self.consume(Kind::Comma).is_none() {
            let items = self.parse_args()?;
            return Ok(format!(
                "xct_List<{t}>(new xcs_List<{t}>({{{}}}))",
                items,
                t = key
            ));
        }

        let value = self.parse_type()?;
        let items = self.parse_list(Kind::LBracket, Kind::RBracket, |this| {
            let k = this.parse_expression()?;
            this.expect(Kind::Colon)?;
            let v = this.parse_expression()?;
            Ok(format!("{{{}, {}}}", k, v))
        })?;
        Ok(format!(
            "xct_Map<{t}>(new xcs_Map<{t}>({{{}}}))",
            items.join(", "),
            t = format!("{}, {}", key, value)
        ))
    }

    /// `fn[args] Ret { ... }`, captures by value
    fn parse_lambda(&mut self) -> MyResult<String> {
        let args = self.parse_params()?;
        let (ret, returns) = self.parse_return_type()?;
        let scope = Scope {
            returns,
            loops: 0,
            ..self.scope.clone()
        };
        let body = self.scoped(scope, Self::parse_body)?;
        Ok(format!("[=]({}) -> {}{}", args, ret, body))
    }

    /// `[a, b]` call arguments
    pub(super) fn parse_args(&mut self) -> MyResult<String> {
        let args = self.parse_list(Kind::LBracket, Kind::RBracket, Self::parse_expression)?;
        Ok(args.join(", "))
    }
}
