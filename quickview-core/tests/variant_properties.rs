use quickview_core::{
    DisplayImage, Image, Money, OptionDimension, Product, SelectedOption, Selection, Variant,
    VariantSession, availability_matrix, is_value_reachable, resolve,
};
use rust_decimal::Decimal;

const COLORS: [&str; 3] = ["Red", "Blue", "Green"];
const SIZES: [&str; 2] = ["S", "M"];

/// Every Color x Size combination, with `present` and `available` picked by bit masks.
fn grid_product(present: u32, available: u32) -> Product {
    let mut variants = Vec::new();
    for (ci, color) in COLORS.iter().enumerate() {
        for (si, size) in SIZES.iter().enumerate() {
            let bit = 1 << (ci * SIZES.len() + si);
            if present & bit == 0 {
                continue;
            }
            variants.push(Variant {
                id: format!("{color}-{size}"),
                title: format!("{color} / {size}"),
                available_for_sale: available & bit != 0,
                selected_options: vec![
                    SelectedOption::new("Color", *color),
                    SelectedOption::new("Size", *size),
                ],
                price: Money::new(Decimal::new(1000 + bit as i64, 2), "USD"),
                image: Some(Image::new(format!("https://cdn.test/{color}.jpg"))),
            });
        }
    }
    Product {
        id: "grid".into(),
        handle: "grid".into(),
        title: "Grid".into(),
        description: String::new(),
        description_html: String::new(),
        options: vec![
            OptionDimension::new("Color", COLORS),
            OptionDimension::new("Size", SIZES),
        ],
        variants,
        images: vec![Image::new("https://cdn.test/default.jpg")],
    }
}

fn all_selections() -> Vec<Selection> {
    COLORS
        .iter()
        .flat_map(|color| {
            SIZES
                .iter()
                .map(move |size| Selection::from_pairs([("Color", *color), ("Size", *size)]))
        })
        .collect()
}

#[test]
fn resolve_matches_exactly_the_equal_complete_selection() {
    let product = grid_product(0b10_1101, 0b11_1111);
    for selection in all_selections() {
        let expected = product.variants.iter().find(|variant| {
            variant
                .selected_options
                .iter()
                .all(|opt| selection.get(&opt.name) == Some(opt.value.as_str()))
        });
        assert_eq!(resolve(&product, &selection).map(|v| &v.id), expected.map(|v| &v.id));
    }
    let partial = Selection::from_pairs([("Color", "Red")]);
    assert!(resolve(&product, &partial).is_none());
    assert!(resolve(&product, &Selection::new()).is_none());
}

#[test]
fn reachability_agrees_with_brute_force_on_every_grid() {
    for present in [0b11_1111u32, 0b01_0110, 0b10_1001, 0b00_0001] {
        for available in [0b11_1111u32, 0b00_0000, 0b01_0101, 0b10_0010] {
            let product = grid_product(present, available);
            for selection in all_selections() {
                for option in &product.options {
                    for candidate in &option.values {
                        let mut moved = Selection::from_pairs(selection.iter());
                        moved.set(&option.name, candidate);
                        let brute = product.variants.iter().any(|variant| {
                            variant.available_for_sale
                                && variant.selected_options.iter().all(|opt| {
                                    moved.get(&opt.name) == Some(opt.value.as_str())
                                })
                        });
                        assert_eq!(
                            is_value_reachable(&product, &selection, &option.name, candidate),
                            brute,
                            "present={present:#b} available={available:#b} {}={candidate}",
                            option.name
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn availability_matrix_marks_exactly_one_active_value_per_row() {
    let product = grid_product(0b11_1111, 0b01_0101);
    for selection in all_selections() {
        for row in availability_matrix(&product, &selection) {
            assert_eq!(row.values.iter().filter(|v| v.active).count(), 1);
        }
    }
}

#[test]
fn every_single_dimension_change_resets_override() {
    let product = grid_product(0b11_1111, 0b11_1111);
    for (dimension, values) in [("Color", &COLORS[..]), ("Size", &SIZES[..])] {
        for value in values {
            let mut session = VariantSession::new(product.clone());
            session.pick_image(Image::new("https://cdn.test/picked.jpg"));
            let changed = session.select(dimension, value).expect("declared value");
            if changed {
                assert!(session.override_image().is_none(), "{dimension}={value}");
                assert!(!matches!(session.display().image, DisplayImage::Override(_)));
            } else {
                assert!(session.override_image().is_some(), "{dimension}={value}");
            }
        }
    }
}

#[test]
fn price_follows_resolution() {
    let product = grid_product(0b00_0001, 0b00_0001);
    let mut session = VariantSession::new(product);
    assert!(session.display().price.is_resolved());
    session.select("Color", "Blue").expect("declared value");
    let price = session.display().price;
    assert!(!price.is_resolved());
    assert_eq!(price.money().amount, Decimal::ZERO);
    assert_eq!(price.money().currency_code, "USD");
}

#[test]
fn product_without_variants_has_empty_selection_and_no_purchase() {
    let session = VariantSession::new(grid_product(0, 0));
    assert!(session.selection().is_empty());
    assert!(session.resolved().is_none());
    assert!(!session.can_purchase());
    assert_eq!(
        session.display().image.url(),
        Some("https://cdn.test/default.jpg")
    );
}
