use std::collections::HashMap;

use thiserror::Error;
use tracing::warn;

use crate::raw::RawTypeRecord;
use crate::stub::{MethodStub, TypeStub};
use crate::ty::{ClassId, Primitive, Type};

/// A type name referenced by a template could not be resolved against the
/// pool. Fatal to the compilation that requested it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("class {0} not found")]
pub struct LookupError(pub String);

const OBJECT: &str = "java.lang.Object";
const CLONEABLE: &str = "java.lang.Cloneable";
const SERIALIZABLE: &str = "java.io.Serializable";

/// Accumulates raw type records, then freezes them into a [`TypeStore`].
#[derive(Debug, Default)]
pub struct TypeStoreBuilder {
    records: Vec<RawTypeRecord>,
    by_name: HashMap<String, usize>,
}

impl TypeStoreBuilder {
    pub fn new() -> TypeStoreBuilder {
        TypeStoreBuilder::default()
    }

    /// Add one record to the pool. A repeated name replaces the earlier
    /// record in place (last record wins).
    pub fn add_record(&mut self, record: RawTypeRecord) {
        match self.by_name.get(&record.name) {
            Some(&slot) => {
                warn!(name = %record.name, "duplicate type record, keeping the later one");
                self.records[slot] = record;
            }
            None => {
                self.by_name.insert(record.name.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Resolve every reference and freeze the pool.
    ///
    /// Names that only appear in supertype/parameter/return position become
    /// placeholder entries: resolvable, but without methods or supertypes.
    pub fn build(self) -> TypeStore {
        let mut interner = Interner::default();

        // Defined entries keep record order; placeholders follow.
        for record in &self.records {
            interner.intern(&record.name);
        }
        let defined_count = self.records.len();

        // Array values are assignable to these three regardless of the pool's
        // contents, so make sure they resolve.
        let object = interner.intern(OBJECT);
        let cloneable = interner.intern(CLONEABLE);
        let serializable = interner.intern(SERIALIZABLE);

        let mut resolved = Vec::with_capacity(defined_count);
        for record in &self.records {
            let super_class = record
                .superclass
                .as_deref()
                .map(|name| interner.intern(name));
            let interfaces: Vec<ClassId> = record
                .interfaces
                .iter()
                .map(|name| interner.intern(name))
                .collect();
            let methods: Vec<MethodStub> = record
                .methods
                .iter()
                .map(|m| MethodStub {
                    name: m.name.clone(),
                    modifiers: m.modifiers,
                    params: m
                        .parameters
                        .iter()
                        .map(|token| interner.resolve_token(token))
                        .collect(),
                    return_type: interner.resolve_token(&m.returns),
                })
                .collect();
            resolved.push((super_class, interfaces, methods));
        }

        let mut entries = Vec::with_capacity(interner.names.len());
        for (idx, name) in interner.names.iter().enumerate() {
            if idx < defined_count {
                let record = &self.records[idx];
                let (super_class, interfaces, methods) = resolved[idx].clone();
                entries.push(TypeStub {
                    name: name.clone(),
                    modifiers: record.modifiers,
                    super_class,
                    interfaces,
                    methods,
                    defined: true,
                });
            } else {
                entries.push(TypeStub {
                    name: name.clone(),
                    modifiers: 0,
                    super_class: None,
                    interfaces: Vec::new(),
                    methods: Vec::new(),
                    defined: false,
                });
            }
        }

        let closures = compute_closures(&entries);

        TypeStore {
            entries,
            by_name: interner.by_name,
            closures,
            object,
            cloneable,
            serializable,
        }
    }
}

#[derive(Debug, Default)]
struct Interner {
    names: Vec<String>,
    by_name: HashMap<String, ClassId>,
}

impl Interner {
    fn intern(&mut self, name: &str) -> ClassId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = ClassId::new(self.names.len());
        self.names.push(name.to_owned());
        self.by_name.insert(name.to_owned(), id);
        id
    }

    /// Builder-time token resolution: never fails, interning a placeholder
    /// for any class name it has not seen.
    fn resolve_token(&mut self, token: &str) -> Type {
        let token = token.trim();
        let (base, dims) = split_array_token(token);
        let element = match Primitive::from_keyword(base) {
            // `void[]` is not a type; keep the verbatim token as an opaque name.
            Some(Primitive::Void) if dims > 0 => return Type::Class(self.intern(token)),
            Some(prim) => Type::Primitive(prim),
            None => Type::Class(self.intern(base)),
        };
        Type::with_dims(element, dims)
    }
}

fn split_array_token(token: &str) -> (&str, usize) {
    let mut base = token;
    let mut dims = 0;
    while let Some(rest) = base.strip_suffix("[]") {
        base = rest.trim_end();
        dims += 1;
    }
    (base, dims)
}

/// Ancestor set (self included) per entry, sorted for binary search.
fn compute_closures(entries: &[TypeStub]) -> Vec<Vec<ClassId>> {
    let mut closures = Vec::with_capacity(entries.len());
    for start in 0..entries.len() {
        let mut seen = vec![false; entries.len()];
        let mut stack = vec![ClassId::new(start)];
        let mut closure = Vec::new();
        while let Some(id) = stack.pop() {
            if std::mem::replace(&mut seen[id.index()], true) {
                continue;
            }
            closure.push(id);
            let stub = &entries[id.index()];
            if let Some(super_id) = stub.super_class {
                stack.push(super_id);
            }
            stack.extend(stub.interfaces.iter().copied());
        }
        closure.sort_unstable();
        closures.push(closure);
    }
    closures
}

/// The frozen pool of candidate types.
///
/// All operations are read-only; a built store can be shared across threads
/// without synchronization.
#[derive(Debug)]
pub struct TypeStore {
    entries: Vec<TypeStub>,
    by_name: HashMap<String, ClassId>,
    closures: Vec<Vec<ClassId>>,
    object: ClassId,
    cloneable: ClassId,
    serializable: ClassId,
}

impl TypeStore {
    /// Resolve a textual type token: a primitive name, a dotted class name,
    /// or either followed by trailing `[]` groups.
    pub fn resolve(&self, token: &str) -> Result<Type, LookupError> {
        let token = token.trim();
        let (base, dims) = split_array_token(token);
        let element = match Primitive::from_keyword(base) {
            Some(Primitive::Void) if dims > 0 => return Err(LookupError(token.to_owned())),
            Some(prim) => Type::Primitive(prim),
            None => match self.by_name.get(base) {
                Some(&id) => Type::Class(id),
                None => return Err(LookupError(token.to_owned())),
            },
        };
        Ok(Type::with_dims(element, dims))
    }

    pub fn lookup_class(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    pub fn stub(&self, id: ClassId) -> &TypeStub {
        &self.entries[id.index()]
    }

    pub fn class_name(&self, id: ClassId) -> &str {
        &self.entries[id.index()].name
    }

    /// Defined classes only; placeholders are resolvable but are not
    /// candidates.
    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &TypeStub)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, stub)| stub.defined)
            .map(|(idx, stub)| (ClassId::new(idx), stub))
    }

    /// True iff `source` is `target` or a subtype/implementer of `target`.
    pub fn is_assignable(&self, target: &Type, source: &Type) -> bool {
        match (target, source) {
            (Type::Primitive(a), Type::Primitive(b)) => a == b,
            (Type::Class(t), Type::Class(s)) => self.is_class_assignable(*t, *s),
            // Arrays are assignable to Object, Cloneable and Serializable only.
            (Type::Class(t), Type::Array(_)) => {
                *t == self.object || *t == self.cloneable || *t == self.serializable
            }
            // Element-wise: primitive elements are invariant, reference
            // elements are covariant.
            (Type::Array(t), Type::Array(s)) => self.is_assignable(t, s),
            _ => false,
        }
    }

    fn is_class_assignable(&self, target: ClassId, source: ClassId) -> bool {
        self.closures[source.index()].binary_search(&target).is_ok()
    }

    /// Source-form rendering (`int[]`, `java.lang.String`).
    pub fn display_type(&self, ty: &Type) -> String {
        match ty {
            Type::Primitive(prim) => prim.as_str().to_owned(),
            Type::Class(id) => self.class_name(*id).to_owned(),
            Type::Array(element) => {
                let mut out = self.display_type(element);
                out.push_str("[]");
                out
            }
        }
    }
}
