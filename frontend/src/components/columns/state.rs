//! State of the column panel: the latest metadata, the worksheet and
//! header-row inputs, and the bookkeeping that makes overlapping fetches
//! safe.

use common::model::columns::ColumnsInfo;
use web_sys::AbortController;

/// Monotonic sequence for in-flight metadata requests.
///
/// Every fetch is tagged with the number [`begin`] returned; a response is
/// applied only when its tag still [`is_current`]. Combined with aborting
/// the superseded request, this guarantees the last request issued wins no
/// matter what order the responses arrive in.
///
/// [`begin`]: RequestGuard::begin
/// [`is_current`]: RequestGuard::is_current
#[derive(Debug, Default)]
pub struct RequestGuard {
    issued: u64,
}

impl RequestGuard {
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.issued == seq
    }
}

/// State container for the `ColumnsPanel` component.
pub struct ColumnsPanel {
    /// Metadata of the current file, absent until a fetch succeeds.
    pub info: Option<ColumnsInfo>,
    /// Worksheet names of the current workbook, empty for flat files.
    pub worksheets: Vec<String>,
    /// Currently selected worksheet, if the file has worksheets.
    pub worksheet: Option<String>,
    /// Whether row 1 is interpreted as column names.
    pub has_column_names: bool,
    pub guard: RequestGuard,
    /// Abort handle of the in-flight request, if any.
    pub abort: Option<AbortController>,
}

impl ColumnsPanel {
    pub fn new() -> Self {
        Self {
            info: None,
            worksheets: Vec::new(),
            worksheet: None,
            has_column_names: true,
            guard: RequestGuard::default(),
            abort: None,
        }
    }

    /// Drops the current result and worksheet selection, e.g. when the file
    /// is removed. Anything still in flight is aborted and its response
    /// invalidated.
    pub fn reset(&mut self) {
        self.info = None;
        self.worksheets.clear();
        self.worksheet = None;
        self.guard.begin();
        if let Some(controller) = self.abort.take() {
            controller.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RequestGuard;

    #[test]
    fn last_issued_request_wins() {
        let mut guard = RequestGuard::default();
        let first = guard.begin();
        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn next_request_invalidates_current() {
        let mut guard = RequestGuard::default();
        let seq = guard.begin();
        assert!(guard.is_current(seq));
        guard.begin();
        assert!(!guard.is_current(seq));
    }
}
