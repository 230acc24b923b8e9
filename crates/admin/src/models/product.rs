//! Catalog products.
//!
//! Besides its stored fields a product exposes a derived `price_range`
//! field (`low`, `medium`, `high`) so the price can be filtered like any
//! other choice.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use backoffice_core::{Category, EntityKind, Price, ProductId};

use super::{Record, RecordForm, ValidationErrors, check_choice, check_name};
use crate::components::filter::Searchable;

/// A persisted product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Price as entered (`"150.000"`).
    pub price: Price,
    /// Image URL, empty when the product has no picture.
    #[serde(default)]
    pub image: String,
    /// Catalog category.
    pub category: Category,
}

/// A validated product without an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub price: Price,
    pub image: String,
    pub category: Category,
}

/// Raw product form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    /// Set while editing an existing product.
    #[serde(default)]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
}

impl ProductForm {
    /// A form for a new product without an image.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            category: category.into(),
            ..Self::default()
        }
    }

    /// Attach an image URL.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

impl Record for Product {
    type Id = ProductId;
    type Draft = ProductDraft;
    type Form = ProductForm;

    const KIND: EntityKind = EntityKind::Product;

    fn id(&self) -> ProductId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            image: draft.image,
            category: draft.category,
        }
    }
}

impl RecordForm for ProductForm {
    type Record = Product;

    fn id(&self) -> Option<ProductId> {
        self.id
    }

    fn validate(&self) -> Result<ProductDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = check_name(&mut errors, &self.name);
        let price = Price::parse(&self.price)
            .inspect_err(|_| errors.add("price", "Price is required"))
            .ok();
        let image = self.image.trim();
        if !image.is_empty() && url::Url::parse(image).is_err() {
            errors.add("image", "Invalid image URL");
        }
        let category = check_choice::<Category>(
            &mut errors,
            "category",
            &self.category,
            "Category is required",
            "Invalid category",
        );

        match (name, price, category) {
            (Some(name), Some(price), Some(category)) if errors.is_empty() => Ok(ProductDraft {
                name,
                price,
                image: image.to_owned(),
                category,
            }),
            _ => Err(errors),
        }
    }

    fn from_record(record: &Product) -> Self {
        Self {
            id: Some(record.id),
            name: record.name.clone(),
            price: record.price.to_string(),
            image: record.image.clone(),
            category: record.category.to_string(),
        }
    }
}

impl Searchable for Product {
    const SEARCH_FIELDS: &'static [&'static str] = &["name"];

    fn field(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            "name" => Some(Cow::Borrowed(&self.name)),
            "price" => Some(Cow::Borrowed(self.price.as_str())),
            "image" => Some(Cow::Borrowed(&self.image)),
            "category" => Some(Cow::Borrowed(self.category.as_str())),
            "price_range" => Some(Cow::Borrowed(self.price.range().as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(price: &str) -> Product {
        Product::from_draft(
            ProductId::new(1),
            ProductForm::new("Slime figure", price, "figure")
                .validate()
                .unwrap(),
        )
    }

    #[test]
    fn test_valid_form_without_image() {
        let draft = ProductForm::new("Keyring", "25.000", "keychain")
            .validate()
            .unwrap();
        assert_eq!(draft.category, Category::Keychain);
        assert_eq!(draft.price.as_str(), "25.000");
        assert!(draft.image.is_empty());
    }

    #[test]
    fn test_image_must_be_a_url() {
        let errors = ProductForm::new("Tee", "150.000", "t-shirt")
            .with_image("not a url")
            .validate()
            .unwrap_err();
        assert_eq!(errors.message_for("image"), Some("Invalid image URL"));

        let ok = ProductForm::new("Tee", "150.000", "t-shirt")
            .with_image("https://cdn.example.com/tee.png")
            .validate()
            .unwrap();
        assert_eq!(ok.image, "https://cdn.example.com/tee.png");
    }

    #[test]
    fn test_blank_form_reports_every_field() {
        let errors = ProductForm::default().validate().unwrap_err();
        assert_eq!(errors.message_for("name"), Some("Name is required"));
        assert_eq!(errors.message_for("price"), Some("Price is required"));
        assert_eq!(errors.message_for("category"), Some("Category is required"));
        assert_eq!(errors.message_for("image"), None);
    }

    #[test]
    fn test_unknown_category() {
        let errors = ProductForm::new("Mug", "10.000", "mug")
            .validate()
            .unwrap_err();
        assert_eq!(errors.message_for("category"), Some("Invalid category"));
    }

    #[test]
    fn test_price_range_field() {
        assert_eq!(product("99.999").field("price_range").as_deref(), Some("low"));
        assert_eq!(product("100.000").field("price_range").as_deref(), Some("medium"));
        assert_eq!(product("500.000").field("price_range").as_deref(), Some("medium"));
        assert_eq!(product("500.001").field("price_range").as_deref(), Some("high"));
    }

    #[test]
    fn test_decodes_without_image() {
        let product: Product = serde_json::from_str(
            r#"{"id":3,"name":"Tee","price":"75.000","category":"t-shirt"}"#,
        )
        .unwrap();
        assert_eq!(product.category, Category::TShirt);
        assert!(product.image.is_empty());
    }
}
