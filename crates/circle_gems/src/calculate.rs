/// Applies `logic` to every element of `values` and collects the results in input order.
///
/// `logic` is called exactly once per element, front to back.
pub fn calculate<T, U>(values: impl IntoIterator<Item = T>, logic: impl FnMut(T) -> U) -> Vec<U> {
    values.into_iter().map(logic).collect()
}
