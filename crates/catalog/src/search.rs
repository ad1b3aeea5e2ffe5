//! Full-text search over the product list.
//!
//! Matching works on a derived text per product: all text fields plus the
//! numeric fields rendered the way a user would type them ("$549",
//! "4.69 stars", "94 in stock"). Every whitespace-separated term of the
//! query must appear as a substring of that text.

use storefront_core::Product;

/// Build the derived searchable text for one product.
///
/// Field order is fixed: title, description, brand, category, then the
/// formatted numeric fields, joined by single spaces and lower-cased.
pub fn searchable_text(product: &Product) -> String {
    format!(
        "{} {} {} {} ${} {} stars {} in stock",
        product.title,
        product.description,
        product.brand,
        product.category,
        product.price,
        product.rating,
        product.stock,
    )
    .to_lowercase()
}

/// Filter `items` down to those matching every term of `query`.
///
/// Terms are the non-empty whitespace-separated fragments of the trimmed,
/// lower-cased query; each needs only substring containment, not a word
/// boundary. An empty or whitespace-only query keeps every item. Input
/// order is preserved.
pub fn filter(items: &[Product], query: &str) -> Vec<Product> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return items.to_vec();
    }

    let terms: Vec<&str> = query.split_whitespace().collect();

    items
        .iter()
        .filter(|item| {
            let text = searchable_text(item);
            terms.iter().all(|term| text.contains(term))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> Product {
        Product {
            id: 1,
            title: "iPhone 9".to_string(),
            description: "An apple mobile which is nothing like apple".to_string(),
            price: 549.0,
            image: "https://example.com/1/thumbnail.jpg".to_string(),
            brand: "Apple".to_string(),
            category: "smartphones".to_string(),
            stock: 94,
            rating: 4.69,
        }
    }

    fn laptop() -> Product {
        Product {
            id: 2,
            title: "MacBook Pro".to_string(),
            description: "MacBook Pro 2021 with mini-LED display".to_string(),
            price: 1749.99,
            image: "https://example.com/2/thumbnail.jpg".to_string(),
            brand: "Apple".to_string(),
            category: "laptops".to_string(),
            stock: 83,
            rating: 4.57,
        }
    }

    fn perfume() -> Product {
        Product {
            id: 3,
            title: "Perfume Oil".to_string(),
            description: "Mega discount, impression of A. D. P. by Dior".to_string(),
            price: 13.0,
            image: "https://example.com/3/thumbnail.jpg".to_string(),
            brand: "Impression of Acqua".to_string(),
            category: "fragrances".to_string(),
            stock: 65,
            rating: 4.26,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![phone(), laptop(), perfume()]
    }

    #[test]
    fn empty_query_returns_items_unchanged() {
        let items = catalog();
        assert_eq!(filter(&items, ""), items);

        let none: Vec<Product> = Vec::new();
        assert_eq!(filter(&none, ""), none);
    }

    #[test]
    fn whitespace_query_is_treated_as_empty() {
        let items = catalog();
        assert_eq!(filter(&items, "   \t \n "), items);
    }

    #[test]
    fn empty_items_yield_empty_result_regardless_of_query() {
        let none: Vec<Product> = Vec::new();
        assert!(filter(&none, "anything").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let items = catalog();
        let hits = filter(&items, "IPHONE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn all_terms_must_match() {
        let items = catalog();

        // "apple" alone hits the phone and the laptop.
        assert_eq!(filter(&items, "apple").len(), 2);

        // Adding "laptops" narrows to the one item carrying both.
        let hits = filter(&items, "apple laptops");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);

        // A term nothing contains empties the result.
        assert!(filter(&items, "apple zzz").is_empty());
    }

    #[test]
    fn substring_containment_needs_no_word_boundary() {
        let items = catalog();
        let hits = filter(&items, "book");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "MacBook Pro");
    }

    #[test]
    fn price_is_searchable_with_dollar_prefix() {
        let items = catalog();
        let hits = filter(&items, "$549");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        // Fractional prices keep their decimal rendering.
        let hits = filter(&items, "$1749.99");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn rating_and_stock_render_as_phrases() {
        let items = catalog();

        let hits = filter(&items, "4.69 stars");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        let hits = filter(&items, "65 in stock");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 3);
    }

    #[test]
    fn surviving_items_keep_input_order() {
        let items = catalog();
        let hits = filter(&items, "apple");
        let ids: Vec<u64> = hits.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn searchable_text_joins_fields_in_order() {
        let text = searchable_text(&phone());
        assert_eq!(
            text,
            "iphone 9 an apple mobile which is nothing like apple apple smartphones \
             $549 4.69 stars 94 in stock"
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_product() -> impl Strategy<Value = Product> {
            (
                any::<u64>(),
                "[a-z]{1,12}",
                "[a-z ]{0,30}",
                0.0f64..10_000.0,
                "[a-z]{1,8}",
                "[a-z]{1,8}",
                0u32..500,
                0.0f64..5.0,
            )
                .prop_map(
                    |(id, title, description, price, brand, category, stock, rating)| Product {
                        id,
                        title,
                        description,
                        price,
                        image: "thumbnail.jpg".to_string(),
                        brand,
                        category,
                        stock,
                        rating,
                    },
                )
        }

        proptest! {
            /// Property: an empty query is the identity filter.
            #[test]
            fn empty_query_is_identity(items in proptest::collection::vec(arb_product(), 0..20)) {
                prop_assert_eq!(filter(&items, ""), items);
            }

            /// Property: an item survives iff every term is contained in its
            /// derived text (AND across terms).
            #[test]
            fn term_and_property(
                items in proptest::collection::vec(arb_product(), 0..20),
                terms in proptest::collection::vec("[a-z$.]{1,4}", 1..4),
            ) {
                let query = terms.join(" ");
                let hits = filter(&items, &query);

                for item in &items {
                    let text = searchable_text(item);
                    let matches = terms.iter().all(|t| text.contains(t.as_str()));
                    let included = hits.iter().any(|h| h == item);
                    prop_assert_eq!(matches, included);
                }
            }

            /// Property: the result is a subsequence of the input.
            #[test]
            fn result_preserves_input_order(
                items in proptest::collection::vec(arb_product(), 0..20),
                query in "[a-z ]{0,10}",
            ) {
                let hits = filter(&items, &query);

                let mut cursor = 0;
                for hit in &hits {
                    let pos = items[cursor..].iter().position(|i| i == hit);
                    prop_assert!(pos.is_some(), "hit not found in input order");
                    cursor += pos.unwrap() + 1;
                }
            }
        }
    }
}
