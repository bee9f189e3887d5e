//! Variant option-code tables.
//!
//! Storefront variants carry a color and a size option; labels caption them
//! with a compact code like `R-SM`. Matching is case-insensitive on the
//! short code.

const COLORS: &[(&str, &str)] = &[
    ("R", "Red"),
    ("Bl", "Blue"),
    ("Y", "Yellow"),
    ("G", "Green"),
    ("P", "Purple"),
    ("O", "Orange"),
    ("Br", "Brown"),
    ("Bk", "Black"),
];

const SIZES: &[(&str, &str)] = &[
    ("SM", "Small"),
    ("MD", "Medium"),
    ("LG", "Large"),
    ("XL", "Extra Large"),
];

fn lookup(table: &'static [(&str, &str)], value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    table
        .iter()
        .find(|(code, name)| code.eq_ignore_ascii_case(trimmed) || name.eq_ignore_ascii_case(trimmed))
        .map(|(code, _)| *code)
}

/// Canonical color code for a stored option value (code or full name).
pub fn color_code(value: &str) -> Option<&'static str> {
    lookup(COLORS, value)
}

/// Canonical size code for a stored option value (code or full name).
pub fn size_code(value: &str) -> Option<&'static str> {
    lookup(SIZES, value)
}

pub fn color_name(code: &str) -> Option<&'static str> {
    let trimmed = code.trim();
    COLORS
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(trimmed))
        .map(|(_, name)| *name)
}

pub fn size_name(code: &str) -> Option<&'static str> {
    let trimmed = code.trim();
    SIZES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(trimmed))
        .map(|(_, name)| *name)
}

/// Derives the compact `COLOR-SIZE` code for a variant's option values.
/// Returns `None` when either value is not a recognized color/size.
pub fn variant_code(color_value: &str, size_value: &str) -> Option<String> {
    let color = color_code(color_value)?;
    let size = size_code(size_value)?;
    Some(format!("{color}-{size}"))
}

/// Whether the pair forms a recognized color/size combination.
pub fn is_valid_pair(color_value: &str, size_value: &str) -> bool {
    variant_code(color_value, size_value).is_some()
}
