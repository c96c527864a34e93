//! Batch contrast validation over a corpus of themes.
//!
//! Each entry is checked on its own; a malformed entry fails but never stops
//! the batch. Results are keyed and sorted by identifier so the persisted
//! report diffs cleanly between runs.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::contrast::ContrastResult;

/// One foreground/background pair to check, as read from a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContrastPair {
    pub id: String,
    pub fg: Option<String>,
    pub bg: Option<String>,
}

impl ContrastPair {
    #[must_use]
    pub fn new(id: impl Into<String>, fg: Option<&str>, bg: Option<&str>) -> Self {
        Self {
            id: id.into(),
            fg: fg.map(str::to_owned),
            bg: bg.map(str::to_owned),
        }
    }
}

/// Per-identifier results, sorted by identifier.
///
/// Serializes as `{ "<id>": { "ratio": f64, "wcag_aa": bool }, ... }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CorpusReport {
    results: BTreeMap<String, ContrastResult>,
}

impl CorpusReport {
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ContrastResult> {
        self.results.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// `(id, result)` in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContrastResult)> {
        self.results.iter().map(|(id, r)| (id.as_str(), r))
    }

    /// Identifiers that fail AA, in identifier order.
    #[must_use]
    pub fn failures(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, r)| !r.passes_aa)
            .map(|(id, _)| id)
            .collect()
    }

    /// True when no entry fails.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.results.values().all(|r| r.passes_aa)
    }

    /// Record one result. A repeated identifier keeps the last result.
    pub fn insert(&mut self, id: impl Into<String>, result: ContrastResult) {
        let id = id.into();
        if self.results.contains_key(&id) {
            tracing::warn!(%id, "duplicate corpus identifier, keeping the later entry");
        }
        self.results.insert(id, result);
    }
}

/// Check every pair in the corpus.
///
/// Entries are independent; the order they arrive in has no effect on the
/// report apart from which of two duplicate identifiers wins.
pub fn validate_corpus<I>(pairs: I) -> CorpusReport
where
    I: IntoIterator<Item = ContrastPair>,
{
    let mut report = CorpusReport::default();
    for pair in pairs {
        let result = ContrastResult::evaluate(pair.fg.as_deref(), pair.bg.as_deref());
        tracing::debug!(id = %pair.id, ratio = result.ratio, aa = result.passes_aa, "checked");
        report.insert(pair.id, result);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_themes() -> Vec<ContrastPair> {
        vec![
            ContrastPair::new("zinc", Some("#e4e4e8"), Some("#09090b")),
            ContrastPair::new("murky", Some("#444444"), Some("#333333")),
        ]
    }

    #[test]
    fn high_and_low_contrast_corpus() {
        let report = validate_corpus(two_themes());

        let zinc = report.get("zinc").unwrap();
        assert!(zinc.passes_aa);
        assert_eq!(zinc.ratio, 15.69);

        let murky = report.get("murky").unwrap();
        assert!(!murky.passes_aa);
        assert!(murky.ratio < 4.5);

        assert_eq!(report.failures(), vec!["murky"]);
        assert!(!report.passed());
    }

    #[test]
    fn malformed_entry_does_not_stop_batch() {
        let report = validate_corpus(vec![
            ContrastPair::new("broken", None, Some("#000000")),
            ContrastPair::new("fine", Some("#ffffff"), Some("#000000")),
            ContrastPair::new("no-hash", Some("ffffff"), Some("#000000")),
        ]);
        assert_eq!(report.len(), 3);
        assert_eq!(report.get("broken"), Some(&ContrastResult::MALFORMED));
        assert_eq!(report.get("no-hash"), Some(&ContrastResult::MALFORMED));
        assert_eq!(report.failures(), vec!["broken", "no-hash"]);
    }

    #[test]
    fn order_of_input_does_not_matter() {
        let forward = validate_corpus(two_themes());
        let reversed = validate_corpus(two_themes().into_iter().rev());
        assert_eq!(forward, reversed);
    }

    #[test]
    fn empty_corpus_passes() {
        let report = validate_corpus(Vec::new());
        assert!(report.is_empty());
        assert!(report.passed());
    }

    #[test]
    fn duplicate_id_keeps_last() {
        let report = validate_corpus(vec![
            ContrastPair::new("same", Some("#ffffff"), Some("#000000")),
            ContrastPair::new("same", Some("#444444"), Some("#333333")),
        ]);
        assert_eq!(report.len(), 1);
        assert!(!report.get("same").unwrap().passes_aa);
    }

    #[test]
    fn serializes_sorted_by_id() {
        let report = validate_corpus(two_themes());
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"murky":{"ratio":1.3,"wcag_aa":false},"zinc":{"ratio":15.69,"wcag_aa":true}}"#
        );
    }
}
