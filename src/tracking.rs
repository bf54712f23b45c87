//! Dense per-size tracking tables built from sparse published control points.

use std::collections::BTreeMap;

use crate::variant::{TypefaceVariant, TRACKING_UNIT};

/// Densify sparse control points over the integer domain `[min_size, max_size)`.
///
/// Scans sizes ascending with a hold-previous-value step rule: a control point
/// at size `S` applies to every size from `S` up to the next control point.
/// Sizes below the first listed key resolve to `0`, and control points below
/// `min_size` are never consulted. `control_points` must be sorted ascending
/// by size. An empty domain produces an empty table; this never errors.
pub fn build_table(
    control_points: &[(u32, i32)],
    min_size: u32,
    max_size: u32,
) -> BTreeMap<u32, i32> {
    debug_assert!(control_points.windows(2).all(|pair| pair[0].0 < pair[1].0));

    let mut table = BTreeMap::new();
    let mut points = control_points
        .iter()
        .skip_while(|(size, _)| *size < min_size)
        .peekable();
    let mut current = 0i32;
    for size in min_size..max_size {
        if let Some(&&(key, value)) = points.peek() {
            if key == size {
                current = value;
                points.next();
            }
        }
        table.insert(size, current);
    }
    table
}

/// Immutable dense tracking tables for every supported variant.
///
/// Built once at startup and shared by reference; safe for unrestricted
/// concurrent reads.
#[derive(Clone, Debug)]
pub struct TrackingTables {
    tables: [BTreeMap<u32, i32>; 5],
}

impl TrackingTables {
    /// Build the dense table for each variant from its published points.
    pub fn new() -> Self {
        let tables = TypefaceVariant::ALL.map(|variant| {
            let (min, max) = variant.size_domain();
            build_table(variant.control_points(), min, max)
        });
        Self { tables }
    }

    /// Dense table for one variant.
    pub fn table(&self, variant: TypefaceVariant) -> &BTreeMap<u32, i32> {
        &self.tables[variant.index()]
    }

    /// Tracking coefficient for `variant` at `size`.
    ///
    /// Fractional sizes use the entry for their floor; sizes below the domain
    /// minimum clamp up to it. Returns `None` at or beyond the domain maximum,
    /// where the letter-spacing contribution is defined to be zero.
    pub fn coefficient(&self, variant: TypefaceVariant, size: f32) -> Option<i32> {
        let (min, max) = variant.size_domain();
        if size >= max as f32 {
            return None;
        }
        let key = (size.floor().max(min as f32)) as u32;
        Some(
            self.tables[variant.index()]
                .get(&key)
                .copied()
                .unwrap_or(0),
        )
    }

    /// Letter-spacing in pixels for `variant` at `size`.
    ///
    /// At or beyond the domain maximum this is exactly `0.0`, bypassing any
    /// table read.
    pub fn letter_spacing(&self, variant: TypefaceVariant, size: f32) -> f32 {
        match self.coefficient(variant, size) {
            Some(coefficient) => size * coefficient as f32 / TRACKING_UNIT,
            None => 0.0,
        }
    }
}

impl Default for TrackingTables {
    fn default() -> Self {
        Self::new()
    }
}
