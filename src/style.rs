//! Style runs and the per-run transform decision.

use crate::tracking::TrackingTables;
use crate::variant::TypefaceVariant;

/// Unit of a letter-spacing value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpacingUnit {
    /// Device-independent pixels. The transform always writes pixels.
    Pixels,
    /// Percentage of font size, as some hosts store it.
    Percent,
}

/// Letter-spacing value with its unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LetterSpacing {
    /// Numeric value in `unit`.
    pub value: f32,
    /// Unit of `value`.
    pub unit: SpacingUnit,
}

impl LetterSpacing {
    /// Spacing in pixels.
    pub fn pixels(value: f32) -> Self {
        Self {
            value,
            unit: SpacingUnit::Pixels,
        }
    }

    /// Spacing as a percentage of font size.
    pub fn percent(value: f32) -> Self {
        Self {
            value,
            unit: SpacingUnit::Percent,
        }
    }
}

/// One maximal contiguous span of uniformly styled text.
///
/// `start..end` are character indices into the owning text element. A run
/// governed by a shared named text style carries its id in `text_style` and is
/// never touched by the transform.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleRun {
    /// Inclusive start character index.
    pub start: usize,
    /// Exclusive end character index.
    pub end: usize,
    /// Font family name.
    pub family: String,
    /// Font size in points; may be fractional.
    pub size: f32,
    /// Current letter-spacing.
    pub spacing: LetterSpacing,
    /// Shared named text style governing this run, if any.
    pub text_style: Option<String>,
}

/// Classification of one run after the transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Family or letter-spacing changed.
    Modified,
    /// Supported and already correct.
    Unmodified,
    /// Out of scope: shared style or unsupported family.
    Unsupported,
}

/// Planned action for one run, decided before any mutation or font load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RunPlan {
    /// Out of scope. No mutation, no font load.
    Skip,
    /// Apply the resolved variant and spacing.
    Apply {
        /// Variant the run should use (post swap rule).
        variant: TypefaceVariant,
        /// Whether the family changes, which requires a font load first.
        family_change: bool,
        /// Letter-spacing to write, always in pixels.
        spacing: LetterSpacing,
        /// Classification the write will produce.
        outcome: RunOutcome,
    },
}

/// Round to two significant digits.
///
/// Used for change detection so that float noise below the second significant
/// digit never classifies a run as modified. Zero and non-finite values pass
/// through unchanged.
pub fn round_sig2(value: f32) -> f32 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor();
    let scale = 10f32.powf(1.0 - magnitude);
    (value * scale).round() / scale
}

fn spacing_differs(current: LetterSpacing, next: LetterSpacing) -> bool {
    current.unit != next.unit || round_sig2(current.value) != round_sig2(next.value)
}

/// Decide what the transform would do to one run.
///
/// Pure: consults only the run and the tables. The shared-style exclusion is
/// checked before the family is even inspected. The returned plan carries
/// everything the traversal needs to batch font loads and apply mutations.
pub fn plan_run(run: &StyleRun, tables: &TrackingTables) -> RunPlan {
    if run.text_style.is_some() {
        return RunPlan::Skip;
    }
    let Some(current) = TypefaceVariant::from_family(&run.family) else {
        return RunPlan::Skip;
    };
    let variant = current.for_size(run.size);
    let spacing = LetterSpacing::pixels(tables.letter_spacing(variant, run.size));
    let family_change = variant != current;
    let outcome = if family_change || spacing_differs(run.spacing, spacing) {
        RunOutcome::Modified
    } else {
        RunOutcome::Unmodified
    };
    RunPlan::Apply {
        variant,
        family_change,
        spacing,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(family: &str, size: f32, spacing: LetterSpacing) -> StyleRun {
        StyleRun {
            start: 0,
            end: 10,
            family: family.to_string(),
            size,
            spacing,
            text_style: None,
        }
    }

    #[test]
    fn round_sig2_keeps_two_significant_digits() {
        assert_eq!(round_sig2(0.0), 0.0);
        assert_eq!(round_sig2(19.0), 19.0);
        assert_eq!(round_sig2(-0.494), -0.49);
        assert_eq!(round_sig2(0.4449), 0.44);
        assert_eq!(round_sig2(123.0), 120.0);
        assert_eq!(round_sig2(0.001234), 0.0012);
    }

    #[test]
    fn shared_style_skips_before_family_inspection() {
        let mut styled = run("SF Pro Display", 18.0, LetterSpacing::pixels(0.0));
        styled.text_style = Some("heading/large".to_string());
        assert_eq!(plan_run(&styled, &TrackingTables::new()), RunPlan::Skip);

        // Even a family the transform knows nothing about.
        let mut styled = run("Helvetica", 18.0, LetterSpacing::pixels(0.0));
        styled.text_style = Some("body".to_string());
        assert_eq!(plan_run(&styled, &TrackingTables::new()), RunPlan::Skip);
    }

    #[test]
    fn unsupported_family_skips() {
        let tables = TrackingTables::new();
        let plan = plan_run(&run("Helvetica", 12.0, LetterSpacing::pixels(0.0)), &tables);
        assert_eq!(plan, RunPlan::Skip);
    }

    #[test]
    fn display_below_threshold_retargets_to_text() {
        let tables = TrackingTables::new();
        let expected = LetterSpacing::pixels(tables.letter_spacing(TypefaceVariant::Text, 18.0));
        let plan = plan_run(
            &run("SF Pro Display", 18.0, LetterSpacing::pixels(0.0)),
            &tables,
        );
        assert_eq!(
            plan,
            RunPlan::Apply {
                variant: TypefaceVariant::Text,
                family_change: true,
                spacing: expected,
                outcome: RunOutcome::Modified,
            }
        );
    }

    #[test]
    fn correct_run_is_unmodified() {
        let tables = TrackingTables::new();
        let spacing = tables.letter_spacing(TypefaceVariant::Text, 13.0);
        let plan = plan_run(
            &run("SF Pro Text", 13.0, LetterSpacing::pixels(spacing)),
            &tables,
        );
        match plan {
            RunPlan::Apply {
                family_change,
                outcome,
                ..
            } => {
                assert!(!family_change);
                assert_eq!(outcome, RunOutcome::Unmodified);
            }
            RunPlan::Skip => panic!("supported run must produce an apply plan"),
        }
    }

    #[test]
    fn spacing_noise_below_two_significant_digits_is_unmodified() {
        let tables = TrackingTables::new();
        let spacing = tables.letter_spacing(TypefaceVariant::Text, 13.0);
        let noisy = spacing + spacing.abs() * 1e-4;
        let plan = plan_run(
            &run("SF Pro Text", 13.0, LetterSpacing::pixels(noisy)),
            &tables,
        );
        match plan {
            RunPlan::Apply { outcome, .. } => assert_eq!(outcome, RunOutcome::Unmodified),
            RunPlan::Skip => panic!("supported run must produce an apply plan"),
        }
    }

    #[test]
    fn non_pixel_unit_is_modified_even_when_value_matches() {
        let tables = TrackingTables::new();
        let spacing = tables.letter_spacing(TypefaceVariant::Text, 13.0);
        let plan = plan_run(
            &run("SF Pro Text", 13.0, LetterSpacing::percent(spacing)),
            &tables,
        );
        match plan {
            RunPlan::Apply { outcome, .. } => assert_eq!(outcome, RunOutcome::Modified),
            RunPlan::Skip => panic!("supported run must produce an apply plan"),
        }
    }

    #[test]
    fn serif_beyond_domain_maximum_plans_exact_zero() {
        let tables = TrackingTables::new();
        let plan = plan_run(
            &run("New York", 160.0, LetterSpacing::pixels(-1.5)),
            &tables,
        );
        match plan {
            RunPlan::Apply {
                variant, spacing, ..
            } => {
                assert_eq!(variant, TypefaceVariant::Serif);
                assert_eq!(spacing, LetterSpacing::pixels(0.0));
            }
            RunPlan::Skip => panic!("supported run must produce an apply plan"),
        }
    }
}
