//! file level things: functions, classes, aliases

use super::Translator;
use crate::context::{Output, Returns, Scope};
use crate::error::{MyError, MyResult};
use crate::token::Kind;
use crate::util::{ident, prefix, CodeExt};

impl Translator {
    /// `fn name(T)[args] Ret { ... }`
    pub(super) fn parse_function(&mut self) -> MyResult<Output> {
        self.expect(Kind::Fn)?;
        let name = self.expect(Kind::Id)?;
        let params = self.parse_typeparams()?;
        let args = self.parse_params()?;
        let (ret, returns) = self.parse_return_type()?;

        let scope = Scope {
            function_name: name.text().into(),
            returns,
            ..Default::default()
        };
        let body = self.scoped(scope, Self::parse_body)?;

        let template = params.map_or(String::new(), |params| {
            format!("template <{}>\n", params.sig)
        });
        let sig = format!(
            "{}{} {}({})",
            template,
            ret,
            ident(prefix::VAR, name.text()),
            args
        );
        Ok(Output {
            func_declares: format!("\n{};", sig),
            defines: format!("\n{}{}", sig, body),
            ..Default::default()
        })
    }

    /// `class Name(T) : Base { var ... fn ... }`
    pub(super) fn parse_class(&mut self) -> MyResult<Output> {
        self.expect(Kind::Class)?;
        let name = self.expect(Kind::Id)?;
        let params = self.parse_typeparams()?;
        let struct_name = ident(prefix::STRUCT, name.text());
        let type_name = ident(prefix::TYPE, name.text());

        let mut o = Output::default();
        let (template, owner) = match &params {
            None => {
                o.forward_declares = format!(
                    "\nstruct {s};\nusing {t} = SharedPtr<{s}>;",
                    s = struct_name,
                    t = type_name
                );
                (String::new(), struct_name.clone())
            }
            Some(params) => {
                o.forward_declares = format!(
                    "\ntemplate <{sig}> struct {s};\ntemplate <{sig}> using {t} = SharedPtr<{s}<{names}>>;",
                    sig = params.sig,
                    s = struct_name,
                    t = type_name,
                    names = params.names
                );
                (
                    format!("\ntemplate <{}>", params.sig),
                    format!("{}<{}>", struct_name, params.names),
                )
            }
        };

        let base = if self.consume(Kind::Colon).is_some() {
            format!("{}::Pointee", self.parse_type()?)
        } else {
            "xcs_Object".into()
        };

        let scope = Scope {
            class_name: name.text().into(),
            base_class_name: base.clone(),
            ..Default::default()
        };
        let (attrs, decls, defines) = self.scoped(scope, |this| {
            let mut attrs = String::new();
            let mut decls = String::new();
            let mut defines = String::new();
            this.expect(Kind::LBrace)?;
            loop {
                let token = this.peek().clone();
                match token.kind {
                    Kind::RBrace => {
                        this.next();
                        break;
                    }
                    Kind::Var => attrs.push_str(&this.parse_attribute()?),
                    Kind::Fn => {
                        let (decl, define) = this.parse_method(&struct_name, &owner, &template)?;
                        decls.push_str(&decl);
                        defines.push_str(&define);
                    }
                    // docstrings
                    Kind::Str | Kind::Chr | Kind::Semi => {
                        this.next();
                    }
                    _ => return Err(MyError::syntax("expected attribute or method", &token)),
                }
            }
            Ok((attrs, decls, defines))
        })?;

        o.type_declares = format!(
            "{}\nstruct {}: {}\n{{{}\n}};",
            template,
            struct_name,
            base,
            (attrs + &decls).indent()
        );
        o.defines = defines;
        Ok(o)
    }

    /// `var name Type = default`
    fn parse_attribute(&mut self) -> MyResult<String> {
        self.expect(Kind::Var)?;
        let name = self.expect(Kind::Id)?;
        self.consume(Kind::Colon);
        let ty = self.parse_type()?;
        let init = if self.consume(Kind::Assign).is_some() {
            format!(" = {}", self.parse_expression()?)
        } else {
            String::new()
        };
        self.consume(Kind::Semi);
        Ok(format!("\n{} {}{};", ty, ident(prefix::ATTR, name.text()), init))
    }

    /// gives back the declaration that goes in the struct and the definition
    /// that goes after everything
    fn parse_method(
        &mut self,
        struct_name: &str,
        owner: &str,
        template: &str,
    ) -> MyResult<(String, String)> {
        self.expect(Kind::Fn)?;
        if self.at(Kind::LBracket) {
            return self.parse_constructor(struct_name, owner, template);
        }
        let name = self.expect(Kind::Id)?;
        let args = self.parse_params()?;
        let (ret, returns) = self.parse_return_type()?;

        let scope = Scope {
            function_name: format!("{}.{}", self.scope.class_name, name.text()),
            returns,
            ..self.scope.clone()
        };
        let body = self.scoped(scope, Self::parse_body)?;

        let method = ident(prefix::METHOD, name.text());
        Ok((
            format!("\nvirtual {} {}({});", ret, method, args),
            format!("{}\n{} {}::{}({}){}", template, ret, owner, method, args, body),
        ))
    }

    /// the nameless `fn[args] { ... }`
    fn parse_constructor(
        &mut self,
        struct_name: &str,
        owner: &str,
        template: &str,
    ) -> MyResult<(String, String)> {
        let args = self.parse_params()?;

        let scope = Scope {
            function_name: format!("{}.<constructor>", self.scope.class_name),
            returns: Returns::Constructor,
            ..self.scope.clone()
        };
        let body = self.scoped(scope, Self::parse_body)?;

        Ok((
            format!("\n{}({});", struct_name, args),
            format!("{}\n{}::{}({}){}", template, owner, struct_name, args, body),
        ))
    }

    /// `using Name(T) = Type`
    ///
    /// type parameters only work at file level, c++ won't take a template
    /// alias inside a function
    pub(super) fn parse_using(&mut self, file_level: bool) -> MyResult<String> {
        let token = self.expect(Kind::Using)?;
        let name = self.expect(Kind::Id)?;
        let params = self.parse_typeparams()?;
        self.expect(Kind::Assign)?;
        let ty = self.parse_type()?;
        self.consume(Kind::Semi);

        let alias = format!("using {} = {};", ident(prefix::TYPE, name.text()), ty);
        match params {
            None => Ok(format!("\n{}", alias)),
            Some(params) if file_level => Ok(format!("\ntemplate <{}> {}", params.sig, alias)),
            Some(_) => Err(MyError::semantic(
                "type parameters on an alias are only allowed at file level",
                &token,
            )),
        }
    }
}
