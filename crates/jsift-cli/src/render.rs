use jsift_template::MatchResult;
use jsift_types::{modifiers, MethodStub, TypeStore, TypeStub};

/// `public int read(byte[])`
pub fn method_signature(store: &TypeStore, method: &MethodStub) -> String {
    let mut out = modifiers::describe(method.modifiers);
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(&store.display_type(&method.return_type));
    out.push(' ');
    out.push_str(&method.name);
    out.push('(');
    for (idx, param) in method.params.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        out.push_str(&store.display_type(param));
    }
    out.push(')');
    out
}

/// One block per matched class, one line per bound method in scan order.
pub fn match_block(store: &TypeStore, stub: &TypeStub, result: &MatchResult) -> String {
    let mut out = String::new();
    out.push_str(&stub.name);
    out.push_str(" {\n");
    for &method_idx in result.bound_methods() {
        out.push_str("    ");
        out.push_str(&method_signature(store, &stub.methods[method_idx]));
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsift_types::{RawMethodRecord, RawTypeRecord, TypeStoreBuilder};

    #[test]
    fn signatures_render_in_source_form() {
        let mut builder = TypeStoreBuilder::new();
        builder.add_record(RawTypeRecord {
            name: "com.example.Foo".to_owned(),
            modifiers: modifiers::PUBLIC,
            superclass: None,
            interfaces: Vec::new(),
            methods: vec![RawMethodRecord {
                name: "read".to_owned(),
                modifiers: modifiers::PUBLIC | modifiers::FINAL,
                parameters: vec!["byte[]".to_owned(), "int".to_owned()],
                returns: "int".to_owned(),
            }],
        });
        let store = builder.build();
        let (_, stub) = store.classes().next().unwrap();
        assert_eq!(
            method_signature(&store, &stub.methods[0]),
            "public final int read(byte[], int)"
        );
    }
}
