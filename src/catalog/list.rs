use std::collections::HashSet;

use crate::api::{Product, ProductId};

/// Appends the records of `incoming` whose id is not yet in `accumulated`.
///
/// Existing order is kept; new records follow in page order. Duplicates
/// inside `incoming` itself are dropped too.
pub fn merge_unique(accumulated: Vec<Product>, incoming: Vec<Product>) -> Vec<Product> {
    let mut seen: HashSet<ProductId> = accumulated.iter().map(|p| p.id).collect();
    let mut merged = accumulated;
    merged.extend(incoming.into_iter().filter(|p| seen.insert(p.id)));
    merged
}

/// First occurrence of every id in `incoming`, in order.
pub fn unique_page(incoming: Vec<Product>) -> Vec<Product> {
    merge_unique(Vec::new(), incoming)
}

/// Case-insensitive substring match on the product title.
///
/// An empty query yields the whole list.
pub fn filter_by_title(products: &[Product], query: &str) -> Vec<Product> {
    if query.is_empty() {
        return products.to_vec();
    }

    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ProductId, title: &str) -> Product {
        Product {
            id,
            thumbnail: String::new(),
            images: Vec::new(),
            title: title.to_string(),
            description: String::new(),
            stock: 1,
            price: 1.0,
        }
    }

    fn ids(products: &[Product]) -> Vec<ProductId> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn merge_appends_only_unseen_ids() {
        let merged = merge_unique(
            vec![product(1, "a"), product(2, "b")],
            vec![product(2, "b"), product(3, "c")],
        );
        assert_eq!(ids(&merged), vec![1, 2, 3]);
    }

    #[test]
    fn merge_drops_duplicates_inside_the_page() {
        let merged = merge_unique(vec![product(1, "a")], vec![product(4, "d"), product(4, "d")]);
        assert_eq!(ids(&merged), vec![1, 4]);
    }

    #[test]
    fn merge_keeps_first_seen_record() {
        let merged = merge_unique(vec![product(1, "old")], vec![product(1, "new")]);
        assert_eq!(merged[0].title, "old");
    }

    #[test]
    fn unique_page_preserves_order() {
        let page = unique_page(vec![product(5, "e"), product(3, "c"), product(5, "e")]);
        assert_eq!(ids(&page), vec![5, 3]);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let list = vec![product(1, "Red Hat"), product(2, "Blue Shirt"), product(3, "Green Cap")];
        assert_eq!(ids(&filter_by_title(&list, "b")), vec![2]);
        assert_eq!(ids(&filter_by_title(&list, "SHIRT")), vec![2]);
    }

    #[test]
    fn empty_query_returns_everything() {
        let list = vec![product(1, "Red Hat"), product(2, "Blue Shirt")];
        assert_eq!(ids(&filter_by_title(&list, "")), vec![1, 2]);
    }

    #[test]
    fn no_match_is_empty() {
        let list = vec![product(1, "Red Hat")];
        assert!(filter_by_title(&list, "lamp").is_empty());
    }
}
