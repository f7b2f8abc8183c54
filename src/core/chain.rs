// src/core/chain.rs

/// Run suppliers in order and return the first `Some`; later suppliers never run.
///
/// Shared by the colour source fallback (image, then style) and the
/// coordinate-candidate search.
pub fn first_successful<T, S>(suppliers: impl IntoIterator<Item = S>) -> Option<T>
where
    S: FnOnce() -> Option<T>,
{
    suppliers.into_iter().find_map(|supply| supply())
}
