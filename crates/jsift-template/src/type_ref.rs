use jsift_types::{Type, TypeStore};

use crate::cursor::{type_token, Cursor};
use crate::error::Result;

/// How a [`TypeRef`] compares against a candidate type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variance {
    /// Exact identity.
    Invariant,
    /// The candidate may be the named type or any subtype of it.
    Extends,
    /// The candidate may be the named type or any supertype of it.
    Super,
}

/// A type requirement, resolved once at compile time.
#[derive(Debug, Clone)]
pub struct TypeRef {
    ty: Type,
    variance: Variance,
}

impl TypeRef {
    /// Parse `['extends' | 'super'] type-name ('[]')*` and resolve it.
    pub(crate) fn parse(cursor: &mut Cursor<'_>, store: &TypeStore) -> Result<TypeRef> {
        let mut token = cursor.consume_token(type_token())?;
        let variance = match token {
            "extends" => {
                token = cursor.consume_token(type_token())?;
                Variance::Extends
            }
            "super" => {
                token = cursor.consume_token(type_token())?;
                Variance::Super
            }
            _ => Variance::Invariant,
        };
        let ty = store.resolve(token)?;
        Ok(TypeRef { ty, variance })
    }

    pub fn variance(&self) -> Variance {
        self.variance
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn matches(&self, store: &TypeStore, candidate: &Type) -> bool {
        match self.variance {
            Variance::Invariant => *candidate == self.ty,
            Variance::Extends => store.is_assignable(&self.ty, candidate),
            Variance::Super => store.is_assignable(candidate, &self.ty),
        }
    }
}
