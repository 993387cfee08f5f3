//! Global id construction.
//!
//! The Admin GraphQL schema identifies objects by opaque global ids of the
//! form `gid://shopify/<Type>/<number>` instead of bare numeric ids.

/// Scheme prefix shared by every Shopify global id.
pub const GID_PREFIX: &str = "gid://shopify";

/// Resource type name for products.
pub const PRODUCT: &str = "Product";

/// Builds the global id for a resource from a path parameter.
///
/// The conversion is purely textual. The id is not checked for being
/// numeric; the upstream rejects malformed ids and that surfaces through
/// the normal response mapping.
///
/// # Example
///
/// ```rust
/// use shopify_proxy::routes::gid::{global_id, PRODUCT};
///
/// assert_eq!(global_id(PRODUCT, "12345"), "gid://shopify/Product/12345");
/// ```
#[must_use]
pub fn global_id(resource: &str, id: &str) -> String {
    format!("{GID_PREFIX}/{resource}/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_global_id() {
        assert_eq!(global_id(PRODUCT, "12345"), "gid://shopify/Product/12345");
    }

    #[test]
    fn test_global_id_does_not_validate() {
        assert_eq!(global_id(PRODUCT, "abc"), "gid://shopify/Product/abc");
        assert_eq!(global_id(PRODUCT, ""), "gid://shopify/Product/");
    }
}
