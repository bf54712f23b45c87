//! Typeface variant model and the published tracking control points.
//!
//! Control-point literals are pinned from the five-variant revision of the
//! published tracking tables. Each entry maps an integer point size to a
//! tracking coefficient in thousandths ([`TRACKING_UNIT`]); intermediate sizes
//! inherit the nearest lower anchor's value via the step rule in
//! [`crate::build_table`].

/// Fixed-point scale for tracking coefficients.
///
/// A coefficient `c` at font size `s` yields `s * c / TRACKING_UNIT` pixels of
/// letter-spacing.
pub const TRACKING_UNIT: f32 = 1000.0;

/// Point size at which the `Default`/`Text` ↔ `Display` optical pair switches.
///
/// Sizes at exactly the threshold route to `Display`.
pub const DISPLAY_SWAP_THRESHOLD: f32 = 20.0;

const DEFAULT_POINTS: &[(u32, i32)] = &[
    (7, 30),
    (8, 24),
    (9, 19),
    (10, 14),
    (11, 9),
    (12, 5),
    (13, 1),
    (14, -2),
    (15, -5),
    (16, -8),
    (17, -11),
    (18, -14),
    (19, -16),
];

const TEXT_POINTS: &[(u32, i32)] = &[
    (7, 32),
    (8, 26),
    (9, 19),
    (10, 12),
    (11, 6),
    (12, 0),
    (13, -6),
    (14, -11),
    (15, -16),
    (16, -20),
    (17, -24),
    (18, -25),
    (19, -26),
];

const DISPLAY_POINTS: &[(u32, i32)] = &[
    (20, 19),
    (21, 17),
    (22, 16),
    (24, 15),
    (25, 14),
    (27, 13),
    (30, 12),
    (33, 11),
    (40, 10),
    (44, 9),
    (48, 8),
    (50, 7),
    (53, 6),
    (56, 5),
    (60, 4),
    (65, 3),
    (69, 2),
    (74, 1),
    (80, 0),
];

const ROUNDED_POINTS: &[(u32, i32)] = &[
    (6, 87),
    (7, 80),
    (8, 72),
    (9, 65),
    (10, 58),
    (11, 52),
    (12, 46),
    (13, 40),
    (14, 35),
    (15, 30),
    (16, 25),
    (17, 21),
    (18, 17),
    (19, 14),
    (20, 11),
    (21, 9),
    (22, 7),
    (23, 6),
    (24, 5),
    (25, 4),
    (28, 3),
    (32, 2),
    (36, 1),
    (48, 0),
];

const SERIF_POINTS: &[(u32, i32)] = &[
    (6, 40),
    (7, 32),
    (8, 25),
    (9, 20),
    (10, 16),
    (11, 11),
    (12, 6),
    (13, 4),
    (14, 2),
    (15, 0),
    (16, -2),
    (17, -4),
    (18, -6),
    (19, -8),
    (20, -10),
    (22, -11),
    (24, -12),
    (28, -13),
    (34, -14),
    (44, -15),
    (60, -16),
];

/// One of the supported typeface design variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypefaceVariant {
    /// The base optical family.
    Default,
    /// Variant optimized for small sizes.
    Text,
    /// Variant optimized for large sizes.
    Display,
    /// Rounded variant; never retargets.
    Rounded,
    /// Serif companion family; never retargets.
    Serif,
}

impl TypefaceVariant {
    /// All supported variants, in canonical order.
    pub const ALL: [TypefaceVariant; 5] = [
        TypefaceVariant::Default,
        TypefaceVariant::Text,
        TypefaceVariant::Display,
        TypefaceVariant::Rounded,
        TypefaceVariant::Serif,
    ];

    /// Canonical family name for this variant.
    pub fn family(self) -> &'static str {
        match self {
            TypefaceVariant::Default => "SF Pro",
            TypefaceVariant::Text => "SF Pro Text",
            TypefaceVariant::Display => "SF Pro Display",
            TypefaceVariant::Rounded => "SF Pro Rounded",
            TypefaceVariant::Serif => "New York",
        }
    }

    /// Resolve a family name to a supported variant, if any.
    ///
    /// Matching is exact; anything else is out of scope for the transform.
    pub fn from_family(family: &str) -> Option<Self> {
        match family {
            "SF Pro" => Some(TypefaceVariant::Default),
            "SF Pro Text" => Some(TypefaceVariant::Text),
            "SF Pro Display" => Some(TypefaceVariant::Display),
            "SF Pro Rounded" => Some(TypefaceVariant::Rounded),
            "New York" => Some(TypefaceVariant::Serif),
            _ => None,
        }
    }

    /// Supported integer point-size domain `[min, max)`.
    ///
    /// At or beyond `max` the tracking contribution is defined to be zero.
    pub fn size_domain(self) -> (u32, u32) {
        match self {
            TypefaceVariant::Default | TypefaceVariant::Text => (6, 20),
            TypefaceVariant::Display => (20, 96),
            TypefaceVariant::Rounded => (6, 96),
            TypefaceVariant::Serif => (6, 140),
        }
    }

    /// Published sparse control points, sorted ascending by size.
    pub fn control_points(self) -> &'static [(u32, i32)] {
        match self {
            TypefaceVariant::Default => DEFAULT_POINTS,
            TypefaceVariant::Text => TEXT_POINTS,
            TypefaceVariant::Display => DISPLAY_POINTS,
            TypefaceVariant::Rounded => ROUNDED_POINTS,
            TypefaceVariant::Serif => SERIF_POINTS,
        }
    }

    /// Variant that should actually be used at `size`.
    ///
    /// Only the `Default`/`Text` ↔ `Display` pair retargets: `Display` below
    /// the threshold becomes `Text`, `Default`/`Text` at or above it become
    /// `Display`. `Rounded` and `Serif` are returned unchanged.
    pub fn for_size(self, size: f32) -> Self {
        match self {
            TypefaceVariant::Default | TypefaceVariant::Text if size >= DISPLAY_SWAP_THRESHOLD => {
                TypefaceVariant::Display
            }
            TypefaceVariant::Display if size < DISPLAY_SWAP_THRESHOLD => TypefaceVariant::Text,
            other => other,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            TypefaceVariant::Default => 0,
            TypefaceVariant::Text => 1,
            TypefaceVariant::Display => 2,
            TypefaceVariant::Rounded => 3,
            TypefaceVariant::Serif => 4,
        }
    }
}
