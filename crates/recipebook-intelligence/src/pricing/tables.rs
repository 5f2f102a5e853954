// ABOUTME: Built-in grocery reference prices and category keyword rules
// ABOUTME: Ordered slices; earlier rows take priority in partial and keyword passes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

use recipebook_core::constants::pricing::DEFAULT_ITEM_PRICE;
use recipebook_core::models::{CategoryKeyword, GroceryCategory, ReferenceEntry};

use GroceryCategory::{
    Bakery, Beverages, Dairy, Fruits, Frozen, Grains, Meat, Pantry, Seafood, Snacks, Vegetables,
};

/// Reference prices, in priority order
///
/// Row order matters: the partial pass takes the first key contained in (or
/// containing) the item name. Plural forms are listed so that singular user
/// input still hits them through containment.
pub const REFERENCE_PRICES: &[ReferenceEntry] = &[
    // Vegetables
    ReferenceEntry::new("tomatoes", 2.50, Vegetables),
    ReferenceEntry::new("potatoes", 3.00, Vegetables),
    ReferenceEntry::new("onions", 1.50, Vegetables),
    ReferenceEntry::new("garlic", 0.75, Vegetables),
    ReferenceEntry::new("carrots", 1.25, Vegetables),
    ReferenceEntry::new("lettuce", 2.00, Vegetables),
    ReferenceEntry::new("spinach", 3.00, Vegetables),
    ReferenceEntry::new("broccoli", 2.25, Vegetables),
    ReferenceEntry::new("bell peppers", 1.75, Vegetables),
    ReferenceEntry::new("cucumber", 1.00, Vegetables),
    ReferenceEntry::new("mushrooms", 2.75, Vegetables),
    ReferenceEntry::new("zucchini", 1.50, Vegetables),
    // Fruits
    ReferenceEntry::new("apples", 3.50, Fruits),
    ReferenceEntry::new("bananas", 0.60, Fruits),
    ReferenceEntry::new("lemons", 0.80, Fruits),
    ReferenceEntry::new("limes", 0.50, Fruits),
    ReferenceEntry::new("oranges", 3.00, Fruits),
    ReferenceEntry::new("strawberries", 4.00, Fruits),
    ReferenceEntry::new("avocado", 1.50, Fruits),
    // Meat
    ReferenceEntry::new("chicken breast", 7.50, Meat),
    ReferenceEntry::new("ground beef", 6.00, Meat),
    ReferenceEntry::new("bacon", 5.50, Meat),
    ReferenceEntry::new("pork chops", 6.50, Meat),
    ReferenceEntry::new("steak", 12.00, Meat),
    // Seafood
    ReferenceEntry::new("salmon", 11.00, Seafood),
    ReferenceEntry::new("shrimp", 9.00, Seafood),
    ReferenceEntry::new("tuna", 2.00, Seafood),
    // Dairy
    ReferenceEntry::new("milk", 3.50, Dairy),
    ReferenceEntry::new("eggs", 4.00, Dairy),
    ReferenceEntry::new("butter", 4.50, Dairy),
    ReferenceEntry::new("cheddar cheese", 5.00, Dairy),
    ReferenceEntry::new("yogurt", 1.25, Dairy),
    ReferenceEntry::new("heavy cream", 3.75, Dairy),
    // Bakery
    ReferenceEntry::new("bread", 3.00, Bakery),
    ReferenceEntry::new("tortillas", 2.50, Bakery),
    ReferenceEntry::new("bagels", 4.00, Bakery),
    // Grains
    ReferenceEntry::new("rice", 2.00, Grains),
    ReferenceEntry::new("pasta", 1.50, Grains),
    ReferenceEntry::new("flour", 3.00, Grains),
    ReferenceEntry::new("oats", 3.50, Grains),
    // Pantry
    ReferenceEntry::new("sugar", 2.50, Pantry),
    ReferenceEntry::new("salt", 1.00, Pantry),
    ReferenceEntry::new("black pepper", 3.50, Pantry),
    ReferenceEntry::new("olive oil", 8.00, Pantry),
    ReferenceEntry::new("vegetable oil", 4.00, Pantry),
    ReferenceEntry::new("soy sauce", 2.75, Pantry),
    ReferenceEntry::new("honey", 5.00, Pantry),
    // Beverages
    ReferenceEntry::new("coffee", 7.00, Beverages),
    ReferenceEntry::new("orange juice", 3.50, Beverages),
    // Frozen
    ReferenceEntry::new("frozen peas", 2.00, Frozen),
    ReferenceEntry::new("ice cream", 4.50, Frozen),
    // Snacks
    ReferenceEntry::new("chips", 3.50, Snacks),
    ReferenceEntry::new("chocolate", 2.50, Snacks),
];

/// Keyword → category rules, in priority order
pub const CATEGORY_KEYWORDS: &[CategoryKeyword] = &[
    CategoryKeyword::new("vegetable", Vegetables),
    CategoryKeyword::new("lettuce", Vegetables),
    CategoryKeyword::new("pepper", Vegetables),
    CategoryKeyword::new("squash", Vegetables),
    CategoryKeyword::new("fruit", Fruits),
    CategoryKeyword::new("berries", Fruits),
    CategoryKeyword::new("melon", Fruits),
    CategoryKeyword::new("chicken", Meat),
    CategoryKeyword::new("beef", Meat),
    CategoryKeyword::new("pork", Meat),
    CategoryKeyword::new("turkey", Meat),
    CategoryKeyword::new("lamb", Meat),
    CategoryKeyword::new("sausage", Meat),
    CategoryKeyword::new("fish", Seafood),
    CategoryKeyword::new("cod", Seafood),
    CategoryKeyword::new("crab", Seafood),
    CategoryKeyword::new("cheese", Dairy),
    CategoryKeyword::new("cream", Dairy),
    CategoryKeyword::new("bun", Bakery),
    CategoryKeyword::new("roll", Bakery),
    CategoryKeyword::new("cereal", Grains),
    CategoryKeyword::new("noodle", Grains),
    CategoryKeyword::new("spice", Pantry),
    CategoryKeyword::new("sauce", Pantry),
    CategoryKeyword::new("juice", Beverages),
    CategoryKeyword::new("soda", Beverages),
    CategoryKeyword::new("frozen", Frozen),
    CategoryKeyword::new("cookie", Snacks),
    CategoryKeyword::new("cracker", Snacks),
];

/// Fixed price used for a keyword-only category guess
#[must_use]
pub const fn category_default_price(category: GroceryCategory) -> f64 {
    match category {
        Vegetables => 2.00,
        Fruits => 2.50,
        Meat => 8.00,
        Seafood => 10.00,
        Dairy => 3.50,
        Bakery | Pantry | Beverages => 3.00,
        Grains => 2.50,
        Frozen => 4.00,
        Snacks => 3.50,
        GroceryCategory::Other => DEFAULT_ITEM_PRICE,
    }
}
