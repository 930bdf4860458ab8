use crate::modifiers;
use crate::ty::{ClassId, Type};

/// Declared-method metadata of one candidate type.
#[derive(Debug, Clone)]
pub struct MethodStub {
    pub name: String,
    pub modifiers: u16,
    pub params: Vec<Type>,
    pub return_type: Type,
}

/// One candidate type's metadata inside a [`crate::TypeStore`].
///
/// `defined == false` marks a placeholder: a name that only ever appeared in
/// supertype/parameter/return position. Placeholders resolve by name but carry
/// no methods or supertypes and are never offered to the matcher.
#[derive(Debug, Clone)]
pub struct TypeStub {
    pub name: String,
    pub modifiers: u16,
    pub super_class: Option<ClassId>,
    pub interfaces: Vec<ClassId>,
    pub methods: Vec<MethodStub>,
    pub defined: bool,
}

impl TypeStub {
    pub fn is_interface(&self) -> bool {
        self.modifiers & modifiers::INTERFACE != 0
    }

    pub fn is_synthetic(&self) -> bool {
        self.modifiers & modifiers::SYNTHETIC != 0
    }
}
