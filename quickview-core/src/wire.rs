//! Storefront JSON payloads and their conversion into the model
//!
//! The endpoints return GraphQL-shaped documents where lists are wrapped in
//! `edges`/`node` connections. These types mirror that shape exactly and are
//! flattened on conversion.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use crate::catalog::CatalogEntry;
use crate::error::ProductError;
use crate::model::{Image, Money, OptionDimension, Product, SelectedOption, Variant};

#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

impl<T> Connection<T> {
    fn into_nodes(self) -> impl Iterator<Item = T> {
        self.edges.into_iter().map(|edge| edge.node)
    }
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireMoney {
    pub amount: String,
    pub currency_code: String,
}

impl WireMoney {
    fn into_money(self) -> Result<Money, ProductError> {
        let amount = Decimal::from_str(self.amount.trim())
            .map_err(|_| ProductError::Amount(self.amount.clone()))?;
        Ok(Money::new(amount, self.currency_code))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireImage {
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl From<WireImage> for Image {
    fn from(wire: WireImage) -> Self {
        Self {
            url: wire.url,
            alt_text: wire.alt_text,
            width: wire.width,
            height: wire.height,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WireOption {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireVariant {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub available_for_sale: bool,
    #[serde(default)]
    pub selected_options: Vec<WireSelectedOption>,
    pub price: WireMoney,
    #[serde(default)]
    pub image: Option<WireImage>,
}

#[derive(Debug, Deserialize)]
pub struct WireSelectedOption {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireProduct {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_html: String,
    #[serde(default)]
    pub options: Vec<WireOption>,
    #[serde(default)]
    pub variants: Connection<WireVariant>,
    #[serde(default)]
    pub images: Connection<WireImage>,
}

impl TryFrom<WireProduct> for Product {
    type Error = ProductError;

    fn try_from(wire: WireProduct) -> Result<Self, Self::Error> {
        let variants = wire
            .variants
            .into_nodes()
            .map(|variant| {
                Ok(Variant {
                    id: variant.id,
                    title: variant.title,
                    available_for_sale: variant.available_for_sale,
                    selected_options: variant
                        .selected_options
                        .into_iter()
                        .map(|opt| SelectedOption::new(opt.name, opt.value))
                        .collect(),
                    price: variant.price.into_money()?,
                    image: variant.image.map(Image::from),
                })
            })
            .collect::<Result<Vec<_>, ProductError>>()?;

        Ok(Self {
            id: wire.id,
            handle: wire.handle,
            title: wire.title,
            description: wire.description,
            description_html: wire.description_html,
            options: wire
                .options
                .into_iter()
                .map(|opt| OptionDimension::new(opt.name, opt.values))
                .collect(),
            variants,
            images: wire.images.into_nodes().map(Image::from).collect(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductEnvelope {
    #[serde(default)]
    pub product: Option<WireProduct>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePriceRange {
    pub min_variant_price: WireMoney,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireCatalogProduct {
    pub id: String,
    pub handle: String,
    pub title: String,
    pub price_range: WirePriceRange,
    #[serde(default)]
    pub images: Connection<WireImage>,
}

#[derive(Debug, Deserialize)]
pub struct WireCollection {
    #[serde(default)]
    pub products: Connection<WireCatalogProduct>,
}

#[derive(Debug, Deserialize)]
pub struct CollectionEnvelope {
    #[serde(default)]
    pub collection: Option<WireCollection>,
}

/// Decode a product endpoint body. `Ok(None)` when the product is null.
///
/// # Errors
///
/// Returns [`ProductError::Decode`] for malformed JSON and
/// [`ProductError::Amount`] for unparsable prices.
pub fn decode_product(body: &str) -> Result<Option<Product>, ProductError> {
    let envelope: ProductEnvelope = serde_json::from_str(body)?;
    envelope.product.map(Product::try_from).transpose()
}

/// Decode a collection endpoint body. A missing collection is an empty list.
///
/// # Errors
///
/// Returns [`ProductError::Decode`] for malformed JSON and
/// [`ProductError::Amount`] for unparsable prices.
pub fn decode_catalog(body: &str) -> Result<Vec<CatalogEntry>, ProductError> {
    let envelope: CollectionEnvelope = serde_json::from_str(body)?;
    let Some(collection) = envelope.collection else {
        return Ok(Vec::new());
    };
    collection
        .products
        .into_nodes()
        .map(|node| {
            Ok(CatalogEntry {
                id: node.id,
                handle: node.handle,
                title: node.title,
                price: node.price_range.min_variant_price.into_money()?,
                image: node.images.into_nodes().next().map(Image::from),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT: &str = r#"{
      "product": {
        "id": "gid://shopify/Product/7",
        "handle": "canvas-tote",
        "title": "Canvas Tote",
        "description": "Sturdy.",
        "descriptionHtml": "<p>Sturdy.</p>",
        "options": [
          {"name": "Color", "values": ["Sand", "Olive"]}
        ],
        "variants": {"edges": [
          {"node": {
            "id": "v1", "title": "Sand", "availableForSale": true,
            "selectedOptions": [{"name": "Color", "value": "Sand"}],
            "price": {"amount": "48.0", "currencyCode": "USD"},
            "image": {"url": "https://cdn.test/sand.jpg", "altText": null, "width": 800, "height": 800}
          }},
          {"node": {
            "id": "v2", "title": "Olive", "availableForSale": false,
            "selectedOptions": [{"name": "Color", "value": "Olive"}],
            "price": {"amount": "52.50", "currencyCode": "USD"},
            "image": null
          }}
        ]},
        "images": {"edges": [
          {"node": {"url": "https://cdn.test/tote.jpg", "altText": "Tote on a bench"}}
        ]}
      }
    }"#;

    #[test]
    fn decodes_connections_into_model() {
        let product = decode_product(PRODUCT).expect("valid").expect("present");
        assert_eq!(product.handle, "canvas-tote");
        assert_eq!(product.variants.len(), 2);
        assert_eq!(product.variants[1].price.amount, Decimal::new(5250, 2));
        assert!(!product.variants[1].available_for_sale);
        assert_eq!(
            product.variants[0].image.as_ref().and_then(|i| i.width),
            Some(800)
        );
        assert_eq!(product.images[0].alt_or("x"), "Tote on a bench");
        assert!(product.validate().is_ok());
    }

    #[test]
    fn null_product_is_absent() {
        assert!(matches!(decode_product(r#"{"product": null}"#), Ok(None)));
        assert!(matches!(decode_product("{}"), Ok(None)));
    }

    #[test]
    fn malformed_body_is_decode_error() {
        assert!(matches!(
            decode_product("<html>"),
            Err(ProductError::Decode(_))
        ));
    }

    #[test]
    fn bad_amount_is_reported() {
        let body = PRODUCT.replace("52.50", "fifty");
        assert!(matches!(
            decode_product(&body),
            Err(ProductError::Amount(amount)) if amount == "fifty"
        ));
    }

    #[test]
    fn decodes_catalog_with_first_image() {
        let body = r#"{"collection": {"products": {"edges": [
          {"node": {"id": "p1", "handle": "canvas-tote", "title": "Canvas Tote",
            "priceRange": {"minVariantPrice": {"amount": "48.0", "currencyCode": "USD"}},
            "images": {"edges": [{"node": {"url": "https://cdn.test/a.jpg"}}, {"node": {"url": "https://cdn.test/b.jpg"}}]}}},
          {"node": {"id": "p2", "handle": "wool-cap", "title": "Wool Cap",
            "priceRange": {"minVariantPrice": {"amount": "22", "currencyCode": "EUR"}},
            "images": {"edges": []}}}
        ]}}}"#;
        let entries = decode_catalog(body).expect("valid");
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0].image.as_ref().map(|i| i.url.as_str()),
            Some("https://cdn.test/a.jpg")
        );
        assert!(entries[1].image.is_none());
        assert_eq!(entries[1].price.currency_code, "EUR");
    }

    #[test]
    fn missing_collection_is_empty() {
        assert_eq!(decode_catalog(r#"{"collection": null}"#).map(|e| e.len()).ok(), Some(0));
    }
}
