//! Products and query strings the scenarios run against
use quickview_core::{Image, Money, OptionDimension, Product, SelectedOption, Variant};
use rand::Rng;
use rust_decimal::Decimal;

const DIMENSIONS: [(&str, &[&str]); 3] = [
    ("Color", &["Red", "Blue", "Green", "Black"]),
    ("Size", &["XS", "S", "M", "L"]),
    ("Material", &["Cotton", "Linen", "Wool"]),
];

fn variant(id: String, options: &[(&str, &str)], available: bool, cents: i64) -> Variant {
    Variant {
        title: options
            .iter()
            .map(|(_, value)| *value)
            .collect::<Vec<_>>()
            .join(" / "),
        id,
        available_for_sale: available,
        selected_options: options
            .iter()
            .map(|(name, value)| SelectedOption::new(*name, *value))
            .collect(),
        price: Money::new(Decimal::new(cents, 2), "USD"),
        image: None,
    }
}

/// Color {Red, Blue} x Size {S, M}: (Red,S) and (Blue,S) available,
/// (Red,M) unavailable, (Blue,M) absent.
#[must_use]
pub fn classic_tee() -> Product {
    let mut red_s = variant("red-s".into(), &[("Color", "Red"), ("Size", "S")], true, 1999);
    red_s.image = Some(Image::new("https://cdn.example.com/tee/red.jpg"));
    let mut blue_s = variant("blue-s".into(), &[("Color", "Blue"), ("Size", "S")], true, 2199);
    blue_s.image = Some(Image::new("https://cdn.example.com/tee/blue.jpg"));
    Product {
        id: "gid://shopify/Product/1003".into(),
        handle: "classic-tee".into(),
        title: "Classic Tee".into(),
        description: "Midweight cotton jersey.".into(),
        description_html: String::new(),
        options: vec![
            OptionDimension::new("Color", ["Red", "Blue"]),
            OptionDimension::new("Size", ["S", "M"]),
        ],
        variants: vec![
            red_s,
            variant("red-m".into(), &[("Color", "Red"), ("Size", "M")], false, 1999),
            blue_s,
        ],
        images: vec![
            Image::new("https://cdn.example.com/tee/red.jpg"),
            Image::new("https://cdn.example.com/tee/flat.jpg"),
        ],
    }
}

/// A product with 1 to 3 dimensions where each combination is present
/// and available at random.
pub fn random_product<R: Rng>(rng: &mut R, handle: &str) -> Product {
    let dims = rng.gen_range(1..=DIMENSIONS.len());
    let options: Vec<OptionDimension> = DIMENSIONS[..dims]
        .iter()
        .map(|(name, values)| {
            let count = rng.gen_range(1..=values.len());
            OptionDimension::new(*name, values[..count].iter().copied())
        })
        .collect();

    let mut combos: Vec<Vec<(&str, &str)>> = vec![Vec::new()];
    for option in &options {
        combos = combos
            .into_iter()
            .flat_map(|prefix| {
                option.values.iter().map(move |value| {
                    let mut next = prefix.clone();
                    next.push((option.name.as_str(), value.as_str()));
                    next
                })
            })
            .collect();
    }

    let mut variants = Vec::new();
    for (idx, combo) in combos.iter().enumerate() {
        if !rng.gen_bool(0.75) {
            continue;
        }
        let available = rng.gen_bool(0.6);
        let cents = rng.gen_range(500..10_000);
        let mut v = variant(format!("{handle}-{idx}"), combo, available, cents);
        if rng.gen_bool(0.5) {
            v.image = Some(Image::new(format!("https://cdn.example.com/{handle}/{idx}.jpg")));
        }
        variants.push(v);
    }

    Product {
        id: format!("gid://shopify/Product/{handle}"),
        handle: handle.to_string(),
        title: format!("Random {handle}"),
        description: String::new(),
        description_html: String::new(),
        options,
        variants,
        images: vec![Image::new(format!("https://cdn.example.com/{handle}/main.jpg"))],
    }
}

const QUERY_SEGMENTS: [&str; 8] = [
    "utm_source=mail%20list",
    "sort=price-asc",
    "page=2",
    "ref",
    "",
    "q=caf%C3%A9+au+lait",
    "filter.v.price.gte=10",
    "x=%2Fproducts%3Fa%3Db",
];

/// A raw query string (`""` or `?...`) built from unrelated parameters.
pub fn random_query<R: Rng>(rng: &mut R) -> String {
    let count = rng.gen_range(0..=4);
    if count == 0 {
        return String::new();
    }
    let segments: Vec<&str> = (0..count)
        .map(|_| QUERY_SEGMENTS[rng.gen_range(0..QUERY_SEGMENTS.len())])
        .collect();
    let joined = segments.join("&");
    // A lone `?` has no segments to preserve.
    if joined.is_empty() {
        String::new()
    } else {
        format!("?{joined}")
    }
}

/// A handle that passes validation.
pub fn random_handle<R: Rng>(rng: &mut R) -> String {
    const WORDS: [&str; 6] = ["canvas", "tote", "wool", "cap", "classic", "tee"];
    let first = WORDS[rng.gen_range(0..WORDS.len())];
    let second = WORDS[rng.gen_range(0..WORDS.len())];
    format!("{first}-{second}-{}", rng.gen_range(1..100))
}
