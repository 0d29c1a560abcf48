use serde::{Deserialize, Serialize};

/// Summary of one test-data import batch
///
/// `errors` is in input order. `success` only turns false on a parse failure
/// or a persistence failure; rejected entries are counted in `skipped`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestDataImportResult {
    pub success: bool,
    pub imported: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}

impl TestDataImportResult {
    pub fn new() -> Self {
        Self {
            success: true,
            imported: 0,
            skipped: 0,
            errors: Vec::new(),
        }
    }

    /// A batch that could not be read at all
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            imported: 0,
            skipped: 0,
            errors: vec![error.into()],
        }
    }

    pub fn record_imported(&mut self) {
        self.imported += 1;
    }

    pub fn record_skipped(&mut self, error: String) {
        self.skipped += 1;
        self.errors.push(error);
    }

    pub fn record_persistence_failure(&mut self, error: String) {
        self.record_skipped(error);
        self.success = false;
    }
}

impl Default for TestDataImportResult {
    fn default() -> Self {
        Self::new()
    }
}
