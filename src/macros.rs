//! Macros for the whole app

/// Parses query part of the url into types provided.
/// Returns tuple of `Option`s of the provided types,
/// `None` for params that are absent or failed to parse.
///
/// # Examples
///
/// ```
/// #[macro_use]
/// extern crate coupons_lib;
///
/// fn main() {
///     let (limit,) = parse_query!("limit=10", "limit" => i64);
///     assert_eq!(limit, Some(10));
/// }
/// ```
#[macro_export]
macro_rules! parse_query {
    ($query:expr, $($name:tt => $t:ty),+) => ({
        (
            $(
                $query
                    .split('&')
                    .filter_map(|pair| {
                        let mut params = pair.splitn(2, '=');
                        match (params.next(), params.next()) {
                            (Some(name), Some(value)) if name == $name => Some(value),
                            _ => None,
                        }
                    }).next()
                    .and_then(|value| value.parse::<$t>().ok()),
            )+
        )
    })
}
