use lantern_ir::types::{ParamKind, ParamNode};

use crate::domain::screen_colons;
use crate::error::ConfigError;

/// Parses one parameter type expression into a domain-less node tree.
///
/// The grammar is open-parenthesis only: a container kind is followed by
/// `(` and its element type, with no closing parenthesis. A `str` keyword
/// captures everything after its parenthesis verbatim as the character
/// pool, so pools containing `(` or `:` are ambiguous with the grammar
/// itself; that limitation is inherited from the format.
pub fn parse_type_expr(text: &str) -> Result<ParamNode, ConfigError> {
    let text = text.trim();

    match text {
        "int" => return Ok(ParamNode::new(ParamKind::Int)),
        "float" => return Ok(ParamNode::new(ParamKind::Float)),
        "bool" => return Ok(ParamNode::new(ParamKind::Bool)),
        _ => {}
    }

    if text.starts_with("str") {
        let open = open_paren(text)?;
        let pool = text[open + 1..].to_string();
        return Ok(ParamNode::new(ParamKind::Str { pool }));
    }

    if let Some(kind) = ["list", "tuple", "set"]
        .into_iter()
        .find(|kind| text.starts_with(kind))
    {
        let open = open_paren(text)?;
        let element = Box::new(parse_type_expr(&text[open + 1..])?);
        return Ok(ParamNode::new(match kind {
            "list" => ParamKind::List { element },
            "tuple" => ParamKind::Tuple { element },
            _ => ParamKind::Set { element },
        }));
    }

    if text.starts_with("dict") {
        screen_colons(text)?;
        let open = open_paren(text)?;
        let body = &text[open + 1..];
        let colon = dict_split(body).ok_or_else(|| ConfigError::MissingColon {
            text: text.to_string(),
        })?;
        let key = Box::new(parse_type_expr(&body[..colon])?);
        let value = Box::new(parse_type_expr(&body[colon + 1..])?);
        return Ok(ParamNode::new(ParamKind::Dict { key, value }));
    }

    Err(ConfigError::UnrecognizedType {
        text: text.to_string(),
    })
}

fn open_paren(text: &str) -> Result<usize, ConfigError> {
    text.find('(').ok_or_else(|| ConfigError::MissingParenthesis {
        text: text.to_string(),
    })
}

/// Finds the colon separating a dict's key and value type expressions.
///
/// Every `dict` nested in the key owes one colon of its own, so the outer
/// split is the first colon with no inner dict still pending. Parentheses
/// opened by list/tuple/set keys never carry colons and are skipped, and
/// everything after a `str` keyword's parenthesis is pool text, never
/// grammar. A first-occurrence scan would split inside a dict-typed key.
fn dict_split(body: &str) -> Option<usize> {
    let mut pending = 0usize;
    let mut in_pool = false;
    for (i, ch) in body.char_indices() {
        if ch == ':' {
            if pending == 0 {
                return Some(i);
            }
            pending -= 1;
            in_pool = false;
        } else if in_pool {
            continue;
        } else if keyword_at(body, i, "dict") {
            pending += 1;
        } else if keyword_at(body, i, "str") {
            in_pool = true;
        }
    }
    None
}

/// True when `kw` occurs at `i` in a position where a type expression can
/// begin: at the start of the text or after a `(` or `:`, modulo
/// whitespace.
fn keyword_at(body: &str, i: usize, kw: &str) -> bool {
    if !body[i..].starts_with(kw) {
        return false;
    }
    let before = body[..i].trim_end();
    before.is_empty() || before.ends_with('(') || before.ends_with(':')
}
