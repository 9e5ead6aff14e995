use crate::features::blog::types::slugify;
use crate::features::forms::{FieldErrors, optional_text, valid_http_url};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Minor units, e.g. cents.
    #[serde(default)]
    pub price: u64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Product {
    pub fn display_price(&self) -> String {
        format_price(self.price, &self.currency)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: u64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub features: Vec<String>,
    pub active: bool,
}

/// Raw editor state. `features` holds one feature per line.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub currency: String,
    pub category: String,
    pub image_url: String,
    pub features: String,
    pub active: bool,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            currency: DEFAULT_CURRENCY.to_string(),
            category: String::new(),
            image_url: String::new(),
            features: String::new(),
            active: true,
        }
    }
}

impl ProductDraft {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: format_minor_units(product.price),
            currency: product.currency.clone(),
            category: product.category.clone().unwrap_or_default(),
            image_url: product.image_url.clone().unwrap_or_default(),
            features: product.features.join("\n"),
            active: product.active,
        }
    }
}

/// Parses a non-negative decimal with at most two fractional digits into
/// minor units. `"12"`, `"12.5"` and `"12.50"` all yield `1250`.
pub fn parse_price(value: &str) -> Result<u64, &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Price is required");
    }

    let (whole, fraction) = value.split_once('.').unwrap_or((value, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err("Enter a valid price");
    }
    if !whole.chars().all(|ch| ch.is_ascii_digit())
        || !fraction.chars().all(|ch| ch.is_ascii_digit())
    {
        return Err("Enter a valid price");
    }
    if fraction.len() > 2 {
        return Err("Price can have at most two decimal places");
    }

    let whole: u64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| "Price is too large")?
    };
    let cents: u64 = format!("{fraction:0<2}").parse().map_err(|_| "Enter a valid price")?;

    whole
        .checked_mul(100)
        .and_then(|minor| minor.checked_add(cents))
        .ok_or("Price is too large")
}

pub fn format_minor_units(minor: u64) -> String {
    format!("{}.{:02}", minor / 100, minor % 100)
}

pub fn format_price(minor: u64, currency: &str) -> String {
    let currency = currency.trim();
    if currency.is_empty() {
        format_minor_units(minor)
    } else {
        format!("{} {}", format_minor_units(minor), currency)
    }
}

pub fn valid_currency(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|ch| ch.is_ascii_uppercase())
}

pub fn validate_draft(draft: &ProductDraft) -> Result<ProductInput, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.insert("name", "Name is required");
    }

    let price = parse_price(&draft.price).unwrap_or_else(|message| {
        errors.insert("price", message);
        0
    });

    let currency = draft.currency.trim().to_ascii_uppercase();
    if !valid_currency(&currency) {
        errors.insert("currency", "Currency must be a 3-letter code");
    }

    let image_url = optional_text(&draft.image_url);
    if image_url.as_deref().is_some_and(|url| !valid_http_url(url)) {
        errors.insert("image_url", "Image must be an http(s) URL");
    }

    let features = draft
        .features
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    errors.into_result(ProductInput {
        name: name.to_string(),
        slug: slugify(name),
        description: optional_text(&draft.description),
        price,
        currency,
        category: optional_text(&draft.category),
        image_url,
        features,
        active: draft.active,
    })
}

#[cfg(test)]
mod tests {
    use super::{Product, ProductDraft, format_price, parse_price, validate_draft};

    #[test]
    fn parse_price_accepts_up_to_two_decimals() {
        assert_eq!(parse_price("12"), Ok(1200));
        assert_eq!(parse_price("12.5"), Ok(1250));
        assert_eq!(parse_price(" 12.05 "), Ok(1205));
        assert_eq!(parse_price("0"), Ok(0));
        assert_eq!(parse_price(".99"), Ok(99));
        assert_eq!(parse_price("3."), Ok(300));
    }

    #[test]
    fn parse_price_rejects_bad_input() {
        assert_eq!(parse_price(""), Err("Price is required"));
        assert_eq!(parse_price("-1"), Err("Enter a valid price"));
        assert_eq!(parse_price("1,50"), Err("Enter a valid price"));
        assert_eq!(parse_price("."), Err("Enter a valid price"));
        assert_eq!(parse_price("1.999"), Err("Price can have at most two decimal places"));
        assert_eq!(parse_price("99999999999999999999"), Err("Price is too large"));
    }

    #[test]
    fn format_price_pads_minor_units() {
        assert_eq!(format_price(1205, "EUR"), "12.05 EUR");
        assert_eq!(format_price(7, ""), "0.07");
    }

    #[test]
    fn validate_draft_builds_input() {
        let draft = ProductDraft {
            name: "Website Audit".to_string(),
            price: "499.9".to_string(),
            currency: "eur".to_string(),
            features: "Performance\n\n Accessibility ".to_string(),
            ..ProductDraft::default()
        };
        let input = validate_draft(&draft).ok();
        let input = input.as_ref();
        assert_eq!(input.map(|i| i.price), Some(49990));
        assert_eq!(input.map(|i| i.currency.as_str()), Some("EUR"));
        assert_eq!(input.map(|i| i.slug.as_str()), Some("website-audit"));
        assert_eq!(input.map(|i| i.features.len()), Some(2));
    }

    #[test]
    fn validate_draft_collects_errors() {
        let draft = ProductDraft {
            currency: "EURO".to_string(),
            image_url: "ftp://files.example.com/a.png".to_string(),
            ..ProductDraft::default()
        };
        let errors = validate_draft(&draft).err().unwrap_or_default();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("price"), Some("Price is required"));
        assert!(errors.get("currency").is_some());
        assert!(errors.get("image_url").is_some());
    }

    #[test]
    fn editing_round_trips_price_text() {
        let product = Product {
            name: "Retainer".to_string(),
            price: 150000,
            currency: "USD".to_string(),
            ..Product::default()
        };
        let draft = ProductDraft::from_product(&product);
        assert_eq!(draft.price, "1500.00");
        assert_eq!(product.display_price(), "1500.00 USD");
    }
}
