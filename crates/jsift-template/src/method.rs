use jsift_types::{modifiers, MethodStub, TypeStore};

use crate::cursor::{identifier, quoted_literal, Cursor};
use crate::error::Result;
use crate::name::NameRule;
use crate::type_ref::TypeRef;

/// Positioning of one parameter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParamMode {
    /// Must match the candidate parameter at this position in the prefix.
    Positional,
    /// Must match some candidate parameter, anywhere (`?` suffix).
    Anywhere,
}

#[derive(Debug)]
struct ParamPattern {
    ty: TypeRef,
    mode: ParamMode,
}

/// One compiled method clause.
#[derive(Debug)]
pub struct MethodPattern {
    modifiers: u16,
    name: NameRule,
    params: Vec<ParamPattern>,
    /// Candidate parameters beyond the positional prefix are unconstrained
    /// (set by a `*` slot or by any `?` slot).
    open_tail: bool,
    return_type: Option<TypeRef>,
}

impl MethodPattern {
    /// Parse `MODIFIER* NAME '(' [PARAM (',' PARAM)*] ')' [':' TYPE] ';'`.
    pub(crate) fn parse(cursor: &mut Cursor<'_>, store: &TypeStore) -> Result<MethodPattern> {
        let mut mask = 0u16;
        let name = loop {
            match cursor.peek_char()? {
                '"' => break NameRule::pattern(cursor.consume_token(quoted_literal())?)?,
                '*' => {
                    cursor.consume_if_char('*')?;
                    break NameRule::Any;
                }
                _ => {
                    let word = cursor.consume_token(identifier())?;
                    match modifiers::from_keyword(word) {
                        Some(bit) => mask |= bit,
                        None => break NameRule::Exact(word.to_owned()),
                    }
                }
            }
        };

        cursor.expect_char('(')?;
        let mut params = Vec::new();
        let mut open_tail = false;
        loop {
            match cursor.peek_char()? {
                ')' => break,
                '*' => {
                    cursor.consume_if_char('*')?;
                    open_tail = true;
                    break;
                }
                _ => {
                    let ty = TypeRef::parse(cursor, store)?;
                    let mode = if cursor.consume_if_char('?')? {
                        open_tail = true;
                        ParamMode::Anywhere
                    } else {
                        ParamMode::Positional
                    };
                    params.push(ParamPattern { ty, mode });
                }
            }
            if !cursor.consume_if_char(',')? {
                break;
            }
        }
        cursor.expect_char(')')?;

        let return_type = if cursor.consume_if_char(':')? {
            Some(TypeRef::parse(cursor, store)?)
        } else {
            None
        };
        cursor.expect_char(';')?;

        Ok(MethodPattern {
            modifiers: mask,
            name,
            params,
            open_tail,
            return_type,
        })
    }

    /// True iff `method` satisfies every requirement of this clause.
    pub fn matches(&self, store: &TypeStore, method: &MethodStub) -> bool {
        if self.modifiers != 0 && method.modifiers & self.modifiers != self.modifiers {
            return false;
        }
        if !self.name.matches(&method.name) {
            return false;
        }

        let positional = self
            .params
            .iter()
            .filter(|p| p.mode == ParamMode::Positional)
            .count();
        if method.params.len() < positional {
            return false;
        }
        if !self.open_tail && method.params.len() != positional {
            return false;
        }

        let mut next = 0;
        for param in &self.params {
            match param.mode {
                ParamMode::Positional => {
                    if !param.ty.matches(store, &method.params[next]) {
                        return false;
                    }
                    next += 1;
                }
                ParamMode::Anywhere => {
                    if !method.params.iter().any(|t| param.ty.matches(store, t)) {
                        return false;
                    }
                }
            }
        }

        match &self.return_type {
            Some(rule) => rule.matches(store, &method.return_type),
            None => true,
        }
    }
}
