//! Selected banking products

use crate::assumptions::ProductCategory;
use serde::{Deserialize, Serialize};

/// A product picked for the plan
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub name: String,

    /// Explicit category; when absent the name is matched against keywords
    #[serde(default)]
    pub category: Option<ProductCategory>,
}

impl Product {
    /// A legacy product known only by name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
        }
    }

    pub fn with_category(name: impl Into<String>, category: ProductCategory) -> Self {
        Self {
            name: name.into(),
            category: Some(category),
        }
    }

    /// Parse "Name" or "Name=category"
    ///
    /// An unknown category suffix is kept as part of the name.
    pub fn parse_arg(arg: &str) -> Self {
        if let Some((name, category)) = arg.rsplit_once('=') {
            if let Ok(category) = category.parse() {
                return Self::with_category(name.trim(), category);
            }
        }
        Self::named(arg.trim())
    }

    pub fn category(&self) -> ProductCategory {
        self.category
            .unwrap_or_else(|| ProductCategory::from_product_name(&self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_category_wins() {
        // Name would match "fond" first
        let product = Product::with_category("Fond de Pensii Facultative", ProductCategory::PrivatePension);
        assert_eq!(product.category(), ProductCategory::PrivatePension);
    }

    #[test]
    fn test_name_fallback() {
        assert_eq!(Product::named("Depozit la termen").category(), ProductCategory::Deposit);
    }

    #[test]
    fn test_parse_arg() {
        let explicit = Product::parse_arg("Pilon III = private_pension");
        assert_eq!(explicit.name, "Pilon III");
        assert_eq!(explicit.category, Some(ProductCategory::PrivatePension));

        let plain = Product::parse_arg("Cont de Economii");
        assert_eq!(plain.category, None);

        let odd = Product::parse_arg("Promo=2024");
        assert_eq!(odd.name, "Promo=2024");
        assert_eq!(odd.category, None);
    }
}
