//! Source-aware validation context and identifier rules.

use miette::{NamedSource, SourceSpan};

use crate::{Error, Result};

/// Validation context that carries source information.
///
/// Tracks the raw TOML, the filename for diagnostics, the path through the
/// manifest (record, then field) and the offset where the current item's
/// declaration starts, so spans point at the right occurrence of a name.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "shapegen.toml");
/// ctx.validate_name("Outer", "record")?;
///
/// let record = ctx.push("Outer");
/// record.validate_name("InnerStuff", "field")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    src: &'a str,
    filename: &'a str,
    path: Vec<&'a str>,
    offset: usize,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self {
            src,
            filename,
            path: Vec::new(),
            offset: 0,
        }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    pub fn filename(&self) -> &'a str {
        self.filename
    }

    /// Descend into a named item.
    ///
    /// Later span lookups start at the item's declaration.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        let offset = self
            .find_span(segment)
            .map(|span| span.offset())
            .unwrap_or(self.offset);
        Self {
            src: self.src,
            filename: self.filename,
            path,
            offset,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Describe an item kind for error messages, e.g. "field in 'Outer'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Span of the first quoted occurrence of `value` after the current item.
    pub fn find_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_spans(&self.src[self.offset..], value)
            .into_iter()
            .next()
            .map(|span| shift(span, self.offset))
    }

    /// Span of the `nth` quoted occurrence of `value` after the current item.
    pub fn find_nth_span(&self, value: &str, nth: usize) -> Option<SourceSpan> {
        find_value_spans(&self.src[self.offset..], value)
            .into_iter()
            .nth(nth)
            .map(|span| shift(span, self.offset))
    }

    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    /// Validate that a name is usable as an interface or field identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_identifier(name) {
            return Err(Box::new(Error::InvalidIdentifier {
                src: self.named_source(),
                span: self.find_span(name),
                name: name.to_string(),
                context: self.context_for(kind),
                reason: reason.to_string(),
            }));
        }
        Ok(())
    }

    pub fn invalid_type_error(&self, ty: &str, kind: &str, reason: &str) -> Box<Error> {
        Box::new(Error::InvalidType {
            src: self.named_source(),
            span: self.find_span(ty),
            ty: ty.to_string(),
            context: self.context_for(kind),
            reason: reason.to_string(),
        })
    }

    pub fn unknown_root_error(&self, name: &str) -> Box<Error> {
        // Roots are listed in [output], ahead of the records
        let span = self
            .src
            .find("roots")
            .and_then(|start| {
                find_value_spans(&self.src[start..], name)
                    .into_iter()
                    .next()
                    .map(|span| shift(span, start))
            })
            .or_else(|| self.find_span(name));
        Box::new(Error::UnknownRoot {
            src: self.named_source(),
            span,
            name: name.to_string(),
        })
    }

    pub fn duplicate_record_error(&self, name: &str) -> Box<Error> {
        Box::new(Error::DuplicateRecord {
            src: self.named_source(),
            first_span: self.find_nth_span(name, 0),
            second_span: self.find_nth_span(name, 1),
            name: name.to_string(),
        })
    }

    pub fn duplicate_field_error(&self, record: &str, name: &str) -> Box<Error> {
        Box::new(Error::DuplicateField {
            src: self.named_source(),
            first_span: self.find_nth_span(name, 0),
            second_span: self.find_nth_span(name, 1),
            record: record.to_string(),
            name: name.to_string(),
        })
    }
}

fn shift(span: SourceSpan, by: usize) -> SourceSpan {
    SourceSpan::from((span.offset() + by, span.len()))
}

/// Spans of every `"value"` string in the TOML source, quotes excluded.
pub(crate) fn find_value_spans(src: &str, value: &str) -> Vec<SourceSpan> {
    let needle = format!("\"{}\"", value);
    src.match_indices(needle.as_str())
        .map(|(pos, _)| SourceSpan::from((pos + 1, value.len())))
        .collect()
}

/// Validate that a name is a valid interface or field identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("Outer").is_none());
        assert!(validate_identifier("InnerStuff").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("field_2").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("1st").is_some());
        assert!(validate_identifier("has-dash").is_some());
        assert!(validate_identifier("has space").is_some());
        assert!(validate_identifier("dotted.name").is_some());
    }

    #[test]
    fn test_find_value_spans() {
        let src = "[[record]]\nname = \"Outer\"\n\n[[record]]\nname = \"Outer\"\n";
        let spans = find_value_spans(src, "Outer");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].offset(), 19);
        assert_eq!(spans[0].len(), 5);
        assert_eq!(&src[spans[1].offset()..spans[1].offset() + 5], "Outer");
    }

    #[test]
    fn test_push_narrows_span_search() {
        let src = "[[record]]\nname = \"A\"\n[[record.field]]\nname = \"id\"\n\n\
                   [[record]]\nname = \"B\"\n[[record.field]]\nname = \"id\"\n";
        let ctx = ParseContext::new(src, "shapegen.toml");
        let first = ctx.push("A").find_span("id").unwrap();
        let second = ctx.push("B").find_span("id").unwrap();
        assert!(second.offset() > first.offset());
        assert_eq!(&src[second.offset()..second.offset() + 2], "id");
    }

    #[test]
    fn test_context_for() {
        let ctx = ParseContext::new("", "shapegen.toml");
        assert_eq!(ctx.context_for("record"), "record");
        assert_eq!(ctx.push("Outer").context_for("field"), "field in 'Outer'");
        assert_eq!(
            ctx.push("Outer").push("x").context_for("type"),
            "type in 'Outer.x'"
        );
    }

    #[test]
    fn test_validate_name_error_has_span() {
        let src = "[[record]]\nname = \"bad-name\"\n";
        let ctx = ParseContext::new(src, "shapegen.toml");
        let err = ctx.validate_name("bad-name", "record").unwrap_err();
        match *err {
            Error::InvalidIdentifier { span, ref context, .. } => {
                assert_eq!(context, "record");
                assert_eq!(span.map(|s| s.offset()), Some(19));
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
    }
}
