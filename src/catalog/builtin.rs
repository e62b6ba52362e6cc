//! Built-in sample catalog.

/// A small catalog of recipe names, already lowercase.
///
/// Used by the CLI when no catalog file is given, and handy as a fixture in
/// tests and benchmarks.
pub fn sample_recipes() -> Vec<String> {
    [
        "cheesy pickle chips",
        "minestrone soup",
        "cauliflower soup",
        "sesame soba noodles",
        "crispy baked falafel",
        "jerk chicken",
        "spicy korean fried chicken",
        "roasted broccoli salad",
        "spicy chicken curry",
        "creamy garlic chicken",
        "soy garlic korean fried chicken",
    ]
    .iter()
    .map(|name| name.to_string())
    .collect()
}
