use std::collections::HashMap;

use jsift_types::ClassId;

/// Outcome of one successful class match.
///
/// Methods are referenced by index into the candidate's declared-method list.
/// The flat list keeps every `(pattern, method)` hit in scan order; the
/// per-pattern binding keeps the hit encountered last.
#[derive(Debug)]
pub struct MatchResult {
    class: ClassId,
    methods: Vec<usize>,
    bound: HashMap<usize, usize>,
}

impl MatchResult {
    pub(crate) fn new(class: ClassId) -> MatchResult {
        MatchResult {
            class,
            methods: Vec::new(),
            bound: HashMap::new(),
        }
    }

    pub(crate) fn record(&mut self, pattern: usize, method: usize) {
        self.methods.push(method);
        self.bound.insert(pattern, method);
    }

    pub fn class(&self) -> ClassId {
        self.class
    }

    /// Every hit's method index, in scan order (duplicates preserved).
    pub fn bound_methods(&self) -> &[usize] {
        &self.methods
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    /// Number of distinct method patterns that found at least one method.
    pub fn matched_pattern_count(&self) -> usize {
        self.bound.len()
    }

    /// The method bound to one pattern (the last hit during the scan).
    pub fn binding(&self, pattern: usize) -> Option<usize> {
        self.bound.get(&pattern).copied()
    }
}
