#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningCode {
    RowsDropped,
    MalformedTable,
    NoTablesDetected,
    DuplicateSection,
    MissingDayColumn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    pub code: WarningCode,
    pub message: String,
    pub section: Option<String>,
    pub dropped_rows: Option<usize>,
}

impl ParseWarning {
    #[must_use]
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            section: None,
            dropped_rows: None,
        }
    }

    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    #[must_use]
    pub fn with_dropped_rows(mut self, dropped_rows: usize) -> Self {
        self.dropped_rows = Some(dropped_rows);
        self
    }
}
