//! Pixel → Tailwind scale conversion.
//!
//! Tailwind's spacing and radius scales are expressed in rem. Pixel values
//! are divided by the root font size and snapped to the closest entry.

/// Root font size used for px → rem.
pub const ROOT_FONT_PX: f32 = 16.0;

/// Border widths Tailwind ships classes for, in px.
pub const BORDER_WIDTHS: [f32; 4] = [1.0, 2.0, 4.0, 8.0];

/// Width, height and spacing scale: rem → class suffix.
const SIZE_SCALE: &[(f32, &str)] = &[
    (0.0, "0"),
    (0.0625, "px"),
    (0.25, "1"),
    (0.5, "2"),
    (0.75, "3"),
    (1.0, "4"),
    (1.25, "5"),
    (1.5, "6"),
    (2.0, "8"),
    (2.5, "10"),
    (3.0, "12"),
    (4.0, "16"),
    (5.0, "20"),
    (6.0, "24"),
    (8.0, "32"),
    (10.0, "40"),
    (12.0, "48"),
    (14.0, "56"),
    (16.0, "64"),
];

/// Border-radius scale: rem → class suffix (leading dash included).
const RADIUS_SCALE: &[(f32, &str)] = &[
    (0.0, "-none"),
    (0.125, "-sm"),
    (0.25, ""),
    (0.375, "-md"),
    (0.5, "-lg"),
    (0.75, "-xl"),
    (1.0, "-2xl"),
    (1.5, "-3xl"),
    (10.0, "-full"),
];

/// Closest member of `scale` to `goal`.
///
/// On an exact tie the earlier member wins, which for the ascending scales
/// used here means the smaller one. An empty scale returns `goal` unchanged.
pub fn nearest_value(goal: f32, scale: &[f32]) -> f32 {
    let mut iter = scale.iter().copied();
    let Some(first) = iter.next() else {
        return goal;
    };
    iter.fold(first, |best, candidate| {
        if (candidate - goal).abs() < (best - goal).abs() {
            candidate
        } else {
            best
        }
    })
}

fn lookup(px: f32, table: &'static [(f32, &'static str)]) -> &'static str {
    let rem = px / ROOT_FONT_PX;
    if let Some(&(_, token)) = table.iter().find(|(value, _)| *value == rem) {
        return token;
    }

    let mut best = table[0];
    for &entry in &table[1..] {
        if (entry.0 - rem).abs() < (best.0 - rem).abs() {
            best = entry;
        }
    }
    best.1
}

/// Size bucket for a width, height or spacing value in px (`16.0` → `"4"`).
pub fn px_to_size(px: f32) -> &'static str {
    lookup(px, SIZE_SCALE)
}

/// Radius suffix for a corner radius in px (`4.0` → `""`, `8.0` → `"-lg"`).
pub fn px_to_radius(px: f32) -> &'static str {
    lookup(px, RADIUS_SCALE)
}
