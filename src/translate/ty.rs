use super::Translator;
use crate::context::Returns;
use crate::error::MyResult;
use crate::token::Kind;
use crate::util::{ident, prefix};

/// `(T, U)` after a declared name
pub(super) struct TypeParams {
    /// `class xct_T, class xct_U`
    pub sig: String,
    /// `xct_T, xct_U`
    pub names: String,
}

impl Translator {
    /// `Name` or `Name(Arg, ...)`
    pub(super) fn parse_type(&mut self) -> MyResult<String> {
        let name = self.expect(Kind::Id)?;
        let name = ident(prefix::TYPE, name.text());
        if self.at(Kind::LParen) {
            Ok(format!("{}<{}>", name, self.parse_typeargs()?))
        } else {
            Ok(name)
        }
    }

    pub(super) fn parse_typeargs(&mut self) -> MyResult<String> {
        let args = self.parse_list(Kind::LParen, Kind::RParen, Self::parse_type)?;
        Ok(args.join(", "))
    }

    /// type parameters on a declaration, if there are any
    pub(super) fn parse_typeparams(&mut self) -> MyResult<Option<TypeParams>> {
        if !self.at(Kind::LParen) {
            return Ok(None);
        }
        let names = self.parse_list(Kind::LParen, Kind::RParen, |this| {
            let name = this.expect(Kind::Id)?;
            Ok(ident(prefix::TYPE, name.text()))
        })?;
        if names.is_empty() {
            return Ok(None);
        }
        Ok(Some(TypeParams {
            sig: names
                .iter()
                .map(|name| format!("class {}", name))
                .collect::<Vec<_>>()
                .join(", "),
            names: names.join(", "),
        }))
    }

    /// `[name Type, name: Type]`
    pub(super) fn parse_params(&mut self) -> MyResult<String> {
        let params = self.parse_list(Kind::LBracket, Kind::RBracket, |this| {
            let name = this.expect(Kind::Id)?;
            this.consume(Kind::Colon);
            let ty = this.parse_type()?;
            Ok(format!("{} {}", ty, ident(prefix::VAR, name.text())))
        })?;
        Ok(params.join(", "))
    }

    /// what comes between the params and the body. nothing means `Void`
    pub(super) fn parse_return_type(&mut self) -> MyResult<(String, Returns)> {
        if self.at(Kind::LBrace) {
            return Ok(("xct_Void".into(), Returns::Void));
        }
        let ty = self.parse_type()?;
        let returns = if ty == "xct_Void" {
            Returns::Void
        } else {
            Returns::Value
        };
        Ok((ty, returns))
    }
}
