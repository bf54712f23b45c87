//! Tree traversal, outcome accumulation, and summary reporting.

use smallvec::SmallVec;

use crate::document::{Node, TextElement};
use crate::error::FontLoadError;
use crate::font::FontLoader;
use crate::style::{plan_run, RunOutcome, RunPlan};
use crate::tracking::TrackingTables;
use crate::variant::TypefaceVariant;

/// Aggregate outcome counters for one transform pass.
///
/// Purely additive; [`merge`](Self::merge) is associative and commutative, so
/// subtree counts combine deterministically regardless of visit order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutcomeCount {
    /// Elements whose family or letter-spacing changed.
    pub modified: usize,
    /// Supported elements that were already correct.
    pub supported_unmodified: usize,
    /// Out-of-scope items: unsupported families, shared styles, non-text leaves.
    pub unsupported_or_styled: usize,
}

impl OutcomeCount {
    /// Fold one classification into the counters.
    pub fn record(&mut self, outcome: RunOutcome) {
        match outcome {
            RunOutcome::Modified => self.modified += 1,
            RunOutcome::Unmodified => self.supported_unmodified += 1,
            RunOutcome::Unsupported => self.unsupported_or_styled += 1,
        }
    }

    /// Combine counters from another subtree.
    pub fn merge(&mut self, other: OutcomeCount) {
        self.modified += other.modified;
        self.supported_unmodified += other.supported_unmodified;
        self.unsupported_or_styled += other.unsupported_or_styled;
    }
}

/// Result of one transform pass over a selection.
#[derive(Clone, Debug, Default)]
pub struct TransformReport {
    /// Per-element classification counts.
    pub counts: OutcomeCount,
    /// Font-load failures; the affected elements were left untouched.
    pub failures: Vec<FontLoadError>,
}

impl TransformReport {
    /// One-line human-readable summary, first matching branch wins.
    pub fn summary(&self) -> String {
        let OutcomeCount {
            modified,
            supported_unmodified,
            unsupported_or_styled,
        } = self.counts;
        let mut line = if modified == 1 {
            "Updated tracking for 1 text element".to_string()
        } else if modified > 1 {
            format!("Updated tracking for {} text elements", modified)
        } else if supported_unmodified > 0 && unsupported_or_styled > 0 {
            "Tracking is already correct; some selected items are unsupported or use a shared style"
                .to_string()
        } else if supported_unmodified == 1 {
            "Tracking is already correct for the selected text".to_string()
        } else if supported_unmodified > 1 {
            format!(
                "Tracking is already correct for all {} text elements",
                supported_unmodified
            )
        } else {
            format!(
                "Nothing eligible selected; supported families are {}",
                supported_family_list()
            )
        };
        if !self.failures.is_empty() {
            line.push_str(&format!(
                " ({} element(s) skipped: font unavailable)",
                self.failures.len()
            ));
        }
        line
    }
}

fn supported_family_list() -> String {
    let names: Vec<&str> = TypefaceVariant::ALL
        .iter()
        .map(|variant| variant.family())
        .collect();
    names.join(", ")
}

/// Applies variant and tracking normalization over node trees.
///
/// Borrows the immutable [`TrackingTables`] and the host's [`FontLoader`];
/// holds no other state, so one transformer can serve many passes.
pub struct Transformer<'a, L> {
    tables: &'a TrackingTables,
    loader: &'a L,
}

impl<'a, L: FontLoader> Transformer<'a, L> {
    /// Transformer over the given tables and loader.
    pub fn new(tables: &'a TrackingTables, loader: &'a L) -> Self {
        Self { tables, loader }
    }

    /// Transform every eligible text element under `nodes`.
    ///
    /// Containers recurse (explicit work stack, no depth limit), text elements
    /// go through the per-run pipeline, any other leaf counts as unsupported.
    /// A font-load failure aborts only the element that needed the font; its
    /// siblings still transform and the failure lands in the report.
    pub async fn apply(&self, nodes: &mut [Node]) -> TransformReport {
        let mut report = TransformReport::default();
        let mut stack: Vec<&mut Node> = nodes.iter_mut().collect();
        while let Some(node) = stack.pop() {
            match node {
                Node::Container { children, .. } => {
                    stack.extend(children.iter_mut());
                }
                Node::Text(text) => match self.transform_text(text).await {
                    Ok(outcome) => {
                        log::debug!("text element {:?} classified {:?}", text.name, outcome);
                        report.counts.record(outcome);
                    }
                    Err(err) => {
                        log::warn!("text element {:?} skipped: {}", text.name, err);
                        report.failures.push(err);
                    }
                },
                Node::Other { name } => {
                    log::debug!("non-text node {:?} counted as unsupported", name);
                    report.counts.record(RunOutcome::Unsupported);
                }
            }
        }
        report
    }

    /// Transform one text element and derive its classification.
    ///
    /// All runs are planned first; every distinct family that must change is
    /// loaded (deduplicated) before any mutation, so a load failure returns
    /// with the element untouched. The element classifies `Modified` if any
    /// run modified, else `Unmodified` if any run was supported, else
    /// `Unsupported`.
    pub async fn transform_text(
        &self,
        text: &mut TextElement,
    ) -> Result<RunOutcome, FontLoadError> {
        let runs = text.runs();
        if runs.is_empty() {
            return Ok(RunOutcome::Unsupported);
        }

        let plans: SmallVec<[RunPlan; 4]> =
            runs.iter().map(|run| plan_run(run, self.tables)).collect();

        let mut pending: SmallVec<[&'static str; 2]> = SmallVec::new();
        for plan in &plans {
            if let RunPlan::Apply {
                variant,
                family_change: true,
                ..
            } = plan
            {
                let family = variant.family();
                if !pending.contains(&family) {
                    pending.push(family);
                }
            }
        }
        for family in pending {
            log::debug!("loading font family {:?} for {:?}", family, text.name);
            self.loader.load(family).await?;
        }

        let mut element_outcome = RunOutcome::Unsupported;
        for (run, plan) in runs.iter().zip(&plans) {
            let RunPlan::Apply {
                variant,
                family_change,
                spacing,
                outcome,
            } = plan
            else {
                continue;
            };
            if *family_change {
                log::debug!(
                    "retargeting {:?} range {}..{} from {:?} to {:?}",
                    text.name,
                    run.start,
                    run.end,
                    run.family,
                    variant.family()
                );
            }
            let family = family_change.then(|| variant.family());
            text.set_run_style(run.start, run.end, family, *spacing);
            element_outcome = match (element_outcome, *outcome) {
                (RunOutcome::Modified, _) | (_, RunOutcome::Modified) => RunOutcome::Modified,
                _ => RunOutcome::Unmodified,
            };
        }
        Ok(element_outcome)
    }
}
