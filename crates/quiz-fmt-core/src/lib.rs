pub mod format;
pub mod record;
pub mod render;

pub use format::criteria::{
    format_criteria, format_section, NG_SUFFIX, REPEAT_SUFFIX, SECTION_SEPARATOR,
};
pub use format::quoting::{add_quotes_if_needed, CLOSE_BRACKET, OPEN_BRACKET};
pub use record::file_repository::FileRecordRepository;
pub use record::{
    validate_records, Criteria, QuizRecord, RecordRepository, ValidationIssue, ValidationReport,
};
pub use render::template::{render_template, Clock, SystemClock};
pub use render::{detect_output_format, render_csv, OutputFormat, CSV_HEADER};
