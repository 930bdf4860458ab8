use jsift_types::{ClassId, Type, TypeStore};

use crate::cursor::{class_name, quoted_literal, Cursor};
use crate::error::Result;
use crate::method::MethodPattern;
use crate::name::NameRule;
use crate::result::MatchResult;

/// Supertype requirement of a class clause.
#[derive(Debug)]
pub enum ParentRule {
    /// `*`: no requirement.
    Any,
    /// The candidate must be assignable to every listed type. Non-empty.
    AllOf(Vec<ClassId>),
}

/// One compiled template: `NAME ':' PARENT_LIST '{' METHOD* '}'`.
///
/// Immutable once compiled; matching is a read-only evaluation, so a single
/// pattern can be shared across threads matching different candidates.
#[derive(Debug)]
pub struct ClassPattern {
    name: NameRule,
    parents: ParentRule,
    methods: Vec<MethodPattern>,
}

impl ClassPattern {
    /// Compile a whole template. The store is passed explicitly so
    /// independent compilations cannot interfere.
    pub fn compile(text: &str, store: &TypeStore) -> Result<ClassPattern> {
        ClassPattern::parse(&mut Cursor::new(text), store)
    }

    /// Parse a template starting at the cursor's current position, leaving
    /// the cursor just past the closing `}`.
    pub fn parse(cursor: &mut Cursor<'_>, store: &TypeStore) -> Result<ClassPattern> {
        let name = match cursor.peek_char()? {
            '"' => NameRule::pattern(cursor.consume_token(quoted_literal())?)?,
            '*' => {
                cursor.consume_if_char('*')?;
                NameRule::Any
            }
            _ => NameRule::Exact(cursor.consume_token(class_name())?.to_owned()),
        };
        cursor.expect_char(':')?;

        let parents = if cursor.consume_if_char('*')? {
            ParentRule::Any
        } else {
            let mut list = Vec::new();
            loop {
                let token = cursor.consume_token(class_name())?;
                match store.lookup_class(token) {
                    Some(id) => list.push(id),
                    None => return Err(jsift_types::LookupError(token.to_owned()).into()),
                }
                if !cursor.consume_if_char(',')? {
                    break;
                }
            }
            ParentRule::AllOf(list)
        };

        cursor.expect_char('{')?;
        let mut methods = Vec::new();
        while cursor.peek_char()? != '}' {
            methods.push(MethodPattern::parse(cursor, store)?);
        }
        cursor.expect_char('}')?;

        Ok(ClassPattern {
            name,
            parents,
            methods,
        })
    }

    pub fn method_patterns(&self) -> &[MethodPattern] {
        &self.methods
    }

    /// Evaluate the pattern against one candidate.
    ///
    /// `None` is a plain non-match, never a fault. The class matches iff the
    /// name and parent rules pass and every method clause found at least one
    /// declared method; one method may satisfy several clauses.
    pub fn match_class(&self, store: &TypeStore, id: ClassId) -> Option<MatchResult> {
        let stub = store.stub(id);
        if !self.name.matches(&stub.name) {
            return None;
        }

        if let ParentRule::AllOf(parents) = &self.parents {
            let candidate = Type::Class(id);
            for &parent in parents {
                if !store.is_assignable(&Type::Class(parent), &candidate) {
                    return None;
                }
            }
        }

        let mut result = MatchResult::new(id);
        if self.methods.is_empty() {
            return Some(result);
        }

        for (pattern_idx, pattern) in self.methods.iter().enumerate() {
            for (method_idx, method) in stub.methods.iter().enumerate() {
                if pattern.matches(store, method) {
                    result.record(pattern_idx, method_idx);
                }
            }
        }

        (result.matched_pattern_count() == self.methods.len()).then_some(result)
    }
}
