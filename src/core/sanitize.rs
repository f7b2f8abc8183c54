// src/core/sanitize.rs

regex!(TAG = r"<[^>]+>");

/// Collapse runs of whitespace (U+00A0 included) to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove complete `<...>` tags. An unclosed `<` is kept as text.
pub fn strip_tags(s: &str) -> String {
    TAG.replace_all(s, "").into_owned()
}

/// Squeeze a coordinate token into grammar form:
/// `51° 30′ 26,5″&nbsp;N` → `51°30′26.5″N`.
///
/// Tags and `&nbsp;` go, all whitespace (including U+00A0) goes, `,` becomes `.`.
pub fn compact_dms(s: &str) -> String {
    strip_tags(s)
        .replace("&nbsp;", "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}
