//! Typeface variant and tracking normalization for styled document trees.
//!
//! Given a text run's font family and point size, `retrack` computes the
//! correct optical variant (the `Text`/`Display` pair switches at a published
//! size threshold) and the correct letter-spacing from dense per-size tracking
//! tables, then applies both across a tree of styled text elements. Text
//! governed by a shared named style is never touched, repeated application
//! converges, and every item in a selection is classified into an aggregate
//! outcome count with a one-line summary.
//!
//! The tracking tables are built once from published sparse control points
//! ([`build_table`]) and are immutable afterwards. The transform itself runs
//! against an in-memory model of the host scene ([`Node`], [`TextElement`])
//! plus an async [`FontLoader`] that must confirm a variant's glyph data is
//! available before the family is applied.
//!
//! ```
//! use retrack::{
//!     LetterSpacing, Node, PreloadedFonts, TextElement, TextSpan, TrackingTables, Transformer,
//!     TypefaceVariant,
//! };
//!
//! # async fn demo() {
//! let tables = TrackingTables::new();
//! let fonts = PreloadedFonts::new(TypefaceVariant::ALL.map(|v| v.family()));
//! let transformer = Transformer::new(&tables, &fonts);
//!
//! let mut selection = vec![Node::Text(
//!     TextElement::new("headline").with_span(TextSpan::new(
//!         8,
//!         "SF Pro Display",
//!         18.0,
//!         LetterSpacing::pixels(0.0),
//!     )),
//! )];
//! let report = transformer.apply(&mut selection).await;
//! assert_eq!(report.counts.modified, 1);
//! # }
//! ```

#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::panic_in_result_fn,
        clippy::todo,
        clippy::unimplemented
    )
)]

mod document;
mod error;
mod font;
mod style;
mod tracking;
mod transform;
mod variant;

pub use document::{Node, TextElement, TextSpan};
pub use error::FontLoadError;
pub use font::{FontLoader, PreloadedFonts};
pub use style::{plan_run, round_sig2, LetterSpacing, RunOutcome, RunPlan, SpacingUnit, StyleRun};
pub use tracking::{build_table, TrackingTables};
pub use transform::{OutcomeCount, TransformReport, Transformer};
pub use variant::{TypefaceVariant, DISPLAY_SWAP_THRESHOLD, TRACKING_UNIT};
