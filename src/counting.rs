//! Generic equality counting over slices.

/// Counts the elements of `items` equal to `target`.
pub fn count_element<T: PartialEq>(items: &[T], target: &T) -> usize {
    items.iter().filter(|&item| item == target).count()
}

/// Counts the elements of `items` whose projection equals `target`.
///
/// The projection runs once per element; equality is decided on the
/// projected value, not on the element itself.
pub fn count_element_by<T, K, F>(items: &[T], target: &K, project: F) -> usize
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    items.iter().filter(|&item| project(item) == *target).count()
}
