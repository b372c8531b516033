//! Title markup.
//!
//! Section titles are authored as short strings such as
//! `"Ma<b>teri</b> <br>Pembelajaran"`. Only `<b>`, `</b>` and `<br>` are
//! recognised; anything else is kept as literal text.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A contiguous piece of title text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleRun {
    Text { text: String, bold: bool },
    LineBreak,
}

/// A parsed title, kept together with its source for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledTitle {
    source: String,
    runs: Vec<TitleRun>,
}

impl StyledTitle {
    pub fn parse(source: &str) -> Self {
        Self {
            source: source.to_string(),
            runs: parse_runs(source),
        }
    }

    pub fn runs(&self) -> &[TitleRun] {
        &self.runs
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Title text without styling, line breaks collapsed to spaces.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for run in &self.runs {
            match run {
                TitleRun::Text { text, .. } => out.push_str(text),
                TitleRun::LineBreak => {
                    if !out.ends_with(' ') {
                        out.push(' ');
                    }
                }
            }
        }
        out.trim().to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

impl From<&str> for StyledTitle {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl Serialize for StyledTitle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for StyledTitle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Ok(Self::parse(&source))
    }
}

fn parse_runs(source: &str) -> Vec<TitleRun> {
    let mut runs = Vec::new();
    let mut bold = false;
    let mut buffer = String::new();
    let mut rest = source;

    let flush = |buffer: &mut String, bold: bool, runs: &mut Vec<TitleRun>| {
        if !buffer.is_empty() {
            runs.push(TitleRun::Text {
                text: std::mem::take(buffer),
                bold,
            });
        }
    };

    while let Some(pos) = rest.find('<') {
        buffer.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        let tag_len = ["<b>", "</b>", "<br>", "<br/>", "<br />"]
            .iter()
            .find(|tag| tail.to_ascii_lowercase().starts_with(*tag))
            .map(|tag| tag.len());

        match tag_len {
            Some(len) => {
                let tag = tail[..len].to_ascii_lowercase();
                flush(&mut buffer, bold, &mut runs);
                match tag.as_str() {
                    "<b>" => bold = true,
                    "</b>" => bold = false,
                    _ => runs.push(TitleRun::LineBreak),
                }
                rest = &tail[len..];
            }
            None => {
                buffer.push('<');
                rest = &tail[1..];
            }
        }
    }
    buffer.push_str(rest);
    flush(&mut buffer, bold, &mut runs);
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(t: &str, bold: bool) -> TitleRun {
        TitleRun::Text {
            text: t.to_string(),
            bold,
        }
    }

    #[test]
    fn parses_bold_and_breaks() {
        let title = StyledTitle::parse("Ma<b>teri</b> <br>Pembelajaran");
        assert_eq!(
            title.runs(),
            &[
                text("Ma", false),
                text("teri", true),
                text(" ", false),
                TitleRun::LineBreak,
                text("Pembelajaran", false),
            ]
        );
        assert_eq!(title.plain_text(), "Materi Pembelajaran");
    }

    #[test]
    fn unknown_tags_stay_literal() {
        let title = StyledTitle::parse("a <i>b</i>");
        assert_eq!(title.runs(), &[text("a <i>b</i>", false)]);
    }

    #[test]
    fn round_trips_through_json_as_a_string() {
        let title: StyledTitle = serde_json::from_str("\"PROGRAM <b>MAGANG</b>\"").unwrap();
        assert_eq!(title.plain_text(), "PROGRAM MAGANG");
        assert_eq!(serde_json::to_string(&title).unwrap(), "\"PROGRAM <b>MAGANG</b>\"");
    }
}
