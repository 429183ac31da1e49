//! Builder-pattern printer for rendering translation errors.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use super::{Error, Span};

/// Builder for rendering an [`Error`] with various options.
pub struct ErrorPrinter<'e, 's> {
    error: &'e Error,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> ErrorPrinter<'e, 's> {
    pub fn new(error: &'e Error) -> Self {
        Self {
            error,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return self.format_plain(w);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let error = self.error;
        let title = error.to_string();
        let site = error.site.to_string();
        let range = adjust_range(error.span, source.len());

        let mut snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(range)
                .label(error.kind.label()),
        );

        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        // Point at the enclosing field or declaration when the error itself
        // sits elsewhere, e.g. inside an alias the field refers to.
        if let Some(site_span) = error.site.span()
            && !site_span.contains(error.span)
        {
            snippet = snippet.annotation(
                AnnotationKind::Context
                    .span(adjust_range(site_span, source.len()))
                    .label(&site),
            );
        }

        let report = vec![Level::ERROR.primary_title(&title).element(snippet)];
        writeln!(w, "{}", renderer.render(&report))
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        writeln!(w, "error at {}: {}", self.error.span, self.error)
    }
}

fn adjust_range(span: Span, limit: usize) -> std::ops::Range<usize> {
    let start = span.start.min(limit);
    let end = span.end.min(limit);

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}
