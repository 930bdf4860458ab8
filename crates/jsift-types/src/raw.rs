use serde::Deserialize;

/// One type record as exported by the introspection facility.
///
/// Parameter and return entries are textual type tokens in source form
/// (`int`, `byte[]`, `java.util.List`); they are resolved against the pool
/// when the store is built.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTypeRecord {
    pub name: String,
    #[serde(default)]
    pub modifiers: u16,
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub methods: Vec<RawMethodRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMethodRecord {
    pub name: String,
    #[serde(default)]
    pub modifiers: u16,
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default = "default_returns")]
    pub returns: String,
}

fn default_returns() -> String {
    "void".to_owned()
}
