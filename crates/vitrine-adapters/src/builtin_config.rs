//! Built-in reference data: categories, the color palette, and the seed
//! catalog.
//!
//! These are the lists the editor offers out of the box. They are plain
//! constructors rather than statics so each caller gets owned values.

use vitrine_core::domain::{Category, ProductDraft};

/// The selectable product categories. The first entry is the default.
pub fn categories() -> Vec<Category> {
    vec![
        Category::new("Cars", "https://images.vitrine.dev/categories/cars.jpg"),
        Category::new("Clothes", "https://images.vitrine.dev/categories/clothes.jpg"),
        Category::new("Electronics", "https://images.vitrine.dev/categories/electronics.jpg"),
        Category::new("Shoes", "https://images.vitrine.dev/categories/shoes.jpg"),
    ]
}

/// The selectable color tokens, as hex strings.
pub fn palette() -> Vec<String> {
    [
        "#A31ACB", "#3C2A21", "#1F8A70", "#ff0032", "#84D2C5", "#13005A",
        "#FF6E31", "#8E3200", "#645CBB",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Drafts for the products the catalog starts with, newest first.
///
/// Kept as drafts so they pass through the same validation gate as user
/// input when loaded (see `InMemoryCatalog::load_builtin`). Each draft is
/// paired with the name of its category.
pub fn seed_products() -> Vec<(ProductDraft, &'static str)> {
    vec![
        (
            ProductDraft::new()
                .title("2022 Genesis GV70: All Wheel Drive")
                .description(
                    "Luxury compact SUV with a 2.5L turbocharged engine, \
                     panoramic sunroof, and a 14.5-inch infotainment display.",
                )
                .image_url("https://images.vitrine.dev/products/gv70.jpg")
                .price("500000")
                .colors(["#ff0032", "#13005A", "#3C2A21"]),
            "Cars",
        ),
        (
            ProductDraft::new()
                .title("Classic denim jacket, unisex fit")
                .description(
                    "Mid-wash denim with button front, two chest pockets, \
                     and adjustable waist tabs. Machine washable.",
                )
                .image_url("https://images.vitrine.dev/products/denim-jacket.jpg")
                .price("450")
                .colors(["#13005A", "#84D2C5"]),
            "Clothes",
        ),
        (
            ProductDraft::new()
                .title("Noise-cancelling over-ear headphones")
                .description(
                    "Bluetooth 5.3, 40-hour battery life, multipoint pairing \
                     and a low-latency wired mode for desk use.",
                )
                .image_url("https://images.vitrine.dev/products/headphones.jpg")
                .price("1999")
                .colors(["#1F8A70", "#A31ACB"]),
            "Electronics",
        ),
        (
            ProductDraft::new()
                .title("Trail running shoes with rock plate")
                .description(
                    "Aggressive lugs for loose terrain, breathable mesh \
                     upper, and a reinforced toe cap.",
                )
                .image_url("https://images.vitrine.dev/products/trail-shoes.jpg")
                .price("890")
                .colors(["#FF6E31", "#8E3200", "#645CBB"]),
            "Shoes",
        ),
    ]
}
