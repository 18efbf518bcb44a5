use chrono::{DateTime, FixedOffset, Local};

use crate::pdf::StreamFilters;

/// `D:YYYYMMDDHHmmSS` followed by a fixed UTC marker.
const DATE_FORMAT: &str = "D:%Y%m%d%H%M%S-00'00'";

/// How names and literal strings are escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Escaping {
    /// Letters and digits are written as they are.
    #[default]
    Minimal,
    /// Name bytes all become `#xx` and string chars become octal escapes.
    /// Readers decode to the same values.
    Obfuscated,
}

/// Settings that apply to the whole document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentConfig {
    /// Header version, `(1, 7)` writes `%PDF-1.7`.
    pub version: (u8, u8),
    pub title: String,
    pub author: String,
    pub producer: String,
    pub creation_date: DateTime<FixedOffset>,
    /// Filters of the cross-reference stream.
    pub xref_stream_filters: StreamFilters,
    pub escaping: Escaping,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        let author = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_owned());
        Self {
            version: (1, 7),
            title: "Untitled".to_owned(),
            author,
            producer: env!("CARGO_PKG_NAME").to_owned(),
            creation_date: Local::now().into(),
            xref_stream_filters: StreamFilters::default(),
            escaping: Escaping::default(),
        }
    }
}

impl DocumentConfig {
    pub fn with_version(mut self, major: u8, minor: u8) -> Self {
        self.version = (major, minor);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_producer(mut self, producer: impl Into<String>) -> Self {
        self.producer = producer.into();
        self
    }

    pub fn with_creation_date(mut self, date: impl Into<DateTime<FixedOffset>>) -> Self {
        self.creation_date = date.into();
        self
    }

    pub fn with_xref_stream_filters(mut self, filters: StreamFilters) -> Self {
        self.xref_stream_filters = filters;
        self
    }

    pub fn with_escaping(mut self, escaping: Escaping) -> Self {
        self.escaping = escaping;
        self
    }

    /// Creation date as written to the info dictionary.
    pub(crate) fn pdf_creation_date(&self) -> String {
        self.creation_date.format(DATE_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn defaults() {
        let config = DocumentConfig::default();
        assert_eq!(config.version, (1, 7));
        assert_eq!(config.title, "Untitled");
        assert_eq!(config.producer, "kiln");
        assert_eq!(config.xref_stream_filters, StreamFilters::new(true, true));
        assert_eq!(config.escaping, Escaping::Minimal);
    }

    #[test]
    fn creation_date_format() {
        let date = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2023, 1, 2, 3, 4, 5)
            .unwrap();
        let config = DocumentConfig::default().with_creation_date(date);
        assert_eq!(config.pdf_creation_date(), "D:20230102030405-00'00'");
    }
}
