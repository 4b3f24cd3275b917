/// Formatter adapters for the catalogue report output formats
mod declaration_list_formatter;
mod json_report_formatter;
mod markdown_formatter;

pub use declaration_list_formatter::DeclarationListFormatter;
pub use json_report_formatter::JsonReportFormatter;
pub use markdown_formatter::MarkdownFormatter;
