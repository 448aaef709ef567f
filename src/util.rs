use extend::ext;

/// name prefixes, so generated names never clash with c++ ones
pub mod prefix {
    pub const TYPE: &str = "xct_";
    pub const STRUCT: &str = "xcs_";
    pub const VAR: &str = "xcv_";
    /// no underscore, `_iter_` -> `xcm_iter_`
    pub const METHOD: &str = "xcm";
    pub const ATTR: &str = "xca_";
}

/// make a c++ identifier out of a source name
///
/// plain ascii words pass through, anything else gets mangled
pub fn ident(prefix: &str, name: &str) -> String {
    if name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        format!("{}{}", prefix, name)
    } else {
        format!("{}{}", prefix, mangling::mangle(name.as_bytes()))
    }
}

/// turn the text of a STR or CHR token into the string it stands for
pub fn decode_literal(text: &str) -> String {
    let text = text.strip_prefix('c').unwrap_or(text);
    let (raw, text) = match text.strip_prefix('r') {
        Some(text) => (true, text),
        None => (false, text),
    };
    let quote = if text.starts_with("\"\"\"") || text.starts_with("'''") {
        3
    } else {
        1
    };
    let body = &text[quote..text.len() - quote];
    if raw {
        return body.to_string();
    }

    let mut s = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            s.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => s.push('\n'),
            Some('t') => s.push('\t'),
            Some('r') => s.push('\r'),
            Some('0') => s.push('\0'),
            Some('x') => {
                let hex = chars.clone().take(2).collect::<String>();
                match u8::from_str_radix(&hex, 16) {
                    Ok(b) if hex.len() == 2 => {
                        s.push(b as char);
                        chars.nth(1);
                    }
                    _ => s.push_str("\\x"),
                }
            }
            Some(c @ '\\') | Some(c @ '"') | Some(c @ '\'') => s.push(c),
            Some(c) => {
                s.push('\\');
                s.push(c);
            }
            None => s.push('\\'),
        }
    }
    s
}

/// escape a string so it can sit between quotes in c++
pub fn sanitize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\{:03o}", c as u32))
            }
            c => out.push(c),
        }
    }
    out
}

#[ext(pub(crate), name = CodeExt)]
impl str {
    /// push every line after the first one in by two spaces
    fn indent(&self) -> String {
        self.replace('\n', "\n  ")
    }

    /// wrap in braces on their own lines, with the inside indented
    fn block(&self) -> String {
        format!("\n{{{}\n}}", self.indent())
    }
}
