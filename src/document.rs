//! In-memory model of the host scene tree the transform runs against.
//!
//! The host exposes text as ordered styled spans; a uniform element is one
//! maximal run, a heterogeneous one decomposes into several. Mutation goes
//! back through [`TextElement::set_run_style`] over character ranges.

use crate::style::{LetterSpacing, StyleRun};

/// One styled span inside a text element.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpan {
    /// Character length of this span.
    pub len: usize,
    /// Font family name.
    pub family: String,
    /// Font size in points.
    pub size: f32,
    /// Current letter-spacing.
    pub spacing: LetterSpacing,
    /// Shared named text style governing this span, if any.
    pub text_style: Option<String>,
}

impl TextSpan {
    /// Span with no shared style.
    pub fn new(len: usize, family: impl Into<String>, size: f32, spacing: LetterSpacing) -> Self {
        Self {
            len,
            family: family.into(),
            size,
            spacing,
            text_style: None,
        }
    }

    /// Attach a shared named text style id.
    pub fn with_text_style(mut self, id: impl Into<String>) -> Self {
        self.text_style = Some(id.into());
        self
    }

    fn same_style(&self, other: &TextSpan) -> bool {
        self.family == other.family
            && self.size == other.size
            && self.spacing == other.spacing
            && self.text_style == other.text_style
    }
}

/// A text element: an ordered list of styled spans over its character extent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextElement {
    /// Host-visible element name, used for logging.
    pub name: String,
    spans: Vec<TextSpan>,
}

impl TextElement {
    /// Empty text element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spans: Vec::new(),
        }
    }

    /// Builder-style span append.
    pub fn with_span(mut self, span: TextSpan) -> Self {
        self.push_span(span);
        self
    }

    /// Append a span at the end of the extent.
    pub fn push_span(&mut self, span: TextSpan) {
        self.spans.push(span);
    }

    /// Raw spans in order.
    pub fn spans(&self) -> &[TextSpan] {
        &self.spans
    }

    /// Total character length.
    pub fn len(&self) -> usize {
        self.spans.iter().map(|span| span.len).sum()
    }

    /// Whether the element has no characters.
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|span| span.len == 0)
    }

    /// Whether the whole extent shares one style.
    pub fn is_uniform(&self) -> bool {
        self.runs().len() <= 1
    }

    /// Maximal uniformly styled runs over the extent.
    ///
    /// Adjacent spans with identical style coalesce into one run, so each
    /// returned run is the largest contiguous range sharing family, size,
    /// letter-spacing, and shared-style reference. Zero-length spans are
    /// skipped.
    pub fn runs(&self) -> Vec<StyleRun> {
        let mut runs: Vec<StyleRun> = Vec::with_capacity(self.spans.len());
        let mut offset = 0usize;
        for span in &self.spans {
            if span.len == 0 {
                continue;
            }
            let start = offset;
            offset += span.len;
            if let Some(last) = runs.last_mut() {
                let mergeable = last.end == start
                    && last.family == span.family
                    && last.size == span.size
                    && last.spacing == span.spacing
                    && last.text_style == span.text_style;
                if mergeable {
                    last.end = offset;
                    continue;
                }
            }
            runs.push(StyleRun {
                start,
                end: offset,
                family: span.family.clone(),
                size: span.size,
                spacing: span.spacing,
                text_style: span.text_style.clone(),
            });
        }
        runs
    }

    /// Write `family` (when given) and `spacing` across `[start, end)`.
    ///
    /// Every span intersecting the range is rewritten. Ranges produced by
    /// [`Self::runs`] always align to span boundaries, so no span is ever
    /// split.
    pub fn set_run_style(
        &mut self,
        start: usize,
        end: usize,
        family: Option<&str>,
        spacing: LetterSpacing,
    ) {
        let mut offset = 0usize;
        for span in &mut self.spans {
            let span_start = offset;
            let span_end = offset + span.len;
            offset = span_end;
            if span_start >= end || span_end <= start || span.len == 0 {
                continue;
            }
            if let Some(family) = family {
                span.family = family.to_string();
            }
            span.spacing = spacing;
        }
        self.coalesce();
    }

    // Keeps span storage canonical after writes so repeated runs() stay maximal.
    fn coalesce(&mut self) {
        let mut merged: Vec<TextSpan> = Vec::with_capacity(self.spans.len());
        for span in self.spans.drain(..) {
            if let Some(last) = merged.last_mut() {
                if last.same_style(&span) {
                    last.len += span.len;
                    continue;
                }
            }
            merged.push(span);
        }
        self.spans = merged;
    }
}

/// A node in the host scene tree.
///
/// Traversal dispatches on the tag only: containers recurse, text elements
/// transform, anything else counts as unsupported.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Grouping node; never transformed itself.
    Container {
        /// Host-visible name.
        name: String,
        /// Child nodes in document order.
        children: Vec<Node>,
    },
    /// Text element with styled spans.
    Text(TextElement),
    /// Any other leaf (shape, image, component instance, ...).
    Other {
        /// Host-visible name.
        name: String,
    },
}

impl Node {
    /// Container with children.
    pub fn container(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Container {
            name: name.into(),
            children,
        }
    }

    /// Non-text, non-container leaf.
    pub fn other(name: impl Into<String>) -> Self {
        Node::Other { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(value: f32) -> LetterSpacing {
        LetterSpacing::pixels(value)
    }

    #[test]
    fn adjacent_identical_spans_coalesce_into_one_run() {
        let text = TextElement::new("label")
            .with_span(TextSpan::new(5, "SF Pro Text", 13.0, px(0.0)))
            .with_span(TextSpan::new(3, "SF Pro Text", 13.0, px(0.0)));
        let runs = text.runs();
        assert_eq!(runs.len(), 1);
        assert_eq!((runs[0].start, runs[0].end), (0, 8));
        assert!(text.is_uniform());
    }

    #[test]
    fn differing_spans_stay_separate_runs() {
        let text = TextElement::new("label")
            .with_span(TextSpan::new(5, "SF Pro Text", 13.0, px(0.0)))
            .with_span(TextSpan::new(3, "SF Pro Display", 24.0, px(0.1)));
        let runs = text.runs();
        assert_eq!(runs.len(), 2);
        assert_eq!((runs[0].start, runs[0].end), (0, 5));
        assert_eq!((runs[1].start, runs[1].end), (5, 8));
        assert!(!text.is_uniform());
    }

    #[test]
    fn shared_style_reference_prevents_coalescing() {
        let text = TextElement::new("label")
            .with_span(TextSpan::new(4, "SF Pro Text", 13.0, px(0.0)))
            .with_span(TextSpan::new(4, "SF Pro Text", 13.0, px(0.0)).with_text_style("body"));
        assert_eq!(text.runs().len(), 2);
    }

    #[test]
    fn zero_length_spans_produce_no_runs() {
        let text = TextElement::new("empty").with_span(TextSpan::new(0, "SF Pro", 12.0, px(0.0)));
        assert!(text.runs().is_empty());
        assert!(text.is_empty());
    }

    #[test]
    fn set_run_style_rewrites_only_the_range() {
        let mut text = TextElement::new("label")
            .with_span(TextSpan::new(5, "SF Pro Display", 18.0, px(0.0)))
            .with_span(TextSpan::new(3, "Helvetica", 18.0, px(0.0)));
        text.set_run_style(0, 5, Some("SF Pro Text"), px(-0.45));
        let runs = text.runs();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].family, "SF Pro Text");
        assert_eq!(runs[0].spacing, px(-0.45));
        assert_eq!(runs[1].family, "Helvetica");
        assert_eq!(runs[1].spacing, px(0.0));
    }

    #[test]
    fn writes_that_unify_style_re_coalesce_spans() {
        let mut text = TextElement::new("label")
            .with_span(TextSpan::new(5, "SF Pro Text", 13.0, px(0.1)))
            .with_span(TextSpan::new(3, "SF Pro Text", 13.0, px(0.2)));
        text.set_run_style(0, 5, None, px(0.0));
        text.set_run_style(5, 8, None, px(0.0));
        assert_eq!(text.spans().len(), 1);
        assert_eq!(text.runs().len(), 1);
    }
}
