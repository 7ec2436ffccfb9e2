//! Static product catalog
//!
//! Four herbal product lines, sixteen products. Lookups, filtering and
//! sorting operate on `&'static Product` and never allocate product data.

mod data;

use crate::money;
use serde::{Deserialize, Serialize};

/// Product badge shown on cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Sale,
    New,
}

/// Product line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub slug: &'static str,
    pub icon: &'static str,
}

/// Catalog product
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    /// Category slug
    pub category: &'static str,
    pub category_name: &'static str,
    /// Price in GHS
    pub price: f64,
    pub original_price: Option<f64>,
    pub rating: f64,
    pub reviews: u32,
    pub badge: Option<Badge>,
    pub image: &'static str,
    pub description: &'static str,
    pub short_description: &'static str,
    pub ingredients: &'static [&'static str],
    pub dosage: &'static str,
    pub stock: u32,
}

impl Product {
    pub fn is_on_sale(&self) -> bool {
        self.badge == Some(Badge::Sale)
    }

    pub fn is_new(&self) -> bool {
        self.badge == Some(Badge::New)
    }

    fn matches_text(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.category_name.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }
}

/// Sort orders offered on the shop page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    PriceLow,
    PriceHigh,
    Rating,
    /// `new` badge first, otherwise catalog order
    Newest,
    Name,
}

/// Shop filter; `category == "all"` means no category filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
    pub search: Option<String>,
    pub sort: Option<SortBy>,
}

/// Star breakdown for a 5-star rating widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

pub fn categories() -> &'static [Category] {
    &data::CATEGORIES
}

pub fn products() -> &'static [Product] {
    &data::PRODUCTS
}

pub fn category_by_id(id: &str) -> Option<&'static Category> {
    data::CATEGORIES.iter().find(|c| c.id == id)
}

pub fn product_by_id(id: u32) -> Option<&'static Product> {
    data::PRODUCTS.iter().find(|p| p.id == id)
}

pub fn products_by_category(category: &str) -> Vec<&'static Product> {
    data::PRODUCTS
        .iter()
        .filter(|p| p.category == category)
        .collect()
}

/// First `limit` products in catalog order
pub fn featured(limit: usize) -> Vec<&'static Product> {
    data::PRODUCTS.iter().take(limit).collect()
}

pub fn on_sale() -> Vec<&'static Product> {
    data::PRODUCTS.iter().filter(|p| p.is_on_sale()).collect()
}

pub fn new_arrivals() -> Vec<&'static Product> {
    data::PRODUCTS.iter().filter(|p| p.is_new()).collect()
}

/// Case-insensitive match over name, category name and description
pub fn search(query: &str) -> Vec<&'static Product> {
    let needle = query.trim().to_lowercase();
    data::PRODUCTS
        .iter()
        .filter(|p| p.matches_text(&needle))
        .collect()
}

/// Apply every set criterion of `filter`, then its sort order if any.
pub fn filter(filter: &ProductFilter) -> Vec<&'static Product> {
    let needle = filter
        .search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());
    let category = filter
        .category
        .as_deref()
        .filter(|c| !c.is_empty() && *c != "all");

    let matched = data::PRODUCTS
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .filter(|p| filter.min_price.is_none_or(|min| p.price >= min))
        .filter(|p| filter.max_price.is_none_or(|max| p.price <= max))
        .filter(|p| filter.min_rating.is_none_or(|min| p.rating >= min))
        .filter(|p| needle.as_deref().is_none_or(|n| p.matches_text(n)))
        .collect();

    match filter.sort {
        Some(order) => sort(matched, order),
        None => matched,
    }
}

/// Stable sort; ties keep catalog order.
pub fn sort(mut products: Vec<&'static Product>, order: SortBy) -> Vec<&'static Product> {
    match order {
        SortBy::PriceLow => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortBy::PriceHigh => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortBy::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortBy::Newest => products.sort_by_key(|p| !p.is_new()),
        SortBy::Name => products.sort_by_cached_key(|p| p.name.to_lowercase()),
    }
    products
}

pub fn star_rating(rating: f64) -> StarRating {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as u8;
    let half = rating.fract() >= 0.5;
    StarRating {
        full,
        half,
        empty: 5 - full - u8::from(half),
    }
}

/// `GH₵` price label
pub fn format_price(price: f64) -> String {
    money::format_ghs(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn catalog_shape() {
        assert_eq!(categories().len(), 4);
        assert_eq!(products().len(), 16);
        for product in products() {
            assert!(category_by_id(product.category).is_some(), "{}", product.name);
        }
        assert_eq!(category_by_id("dianab").unwrap().name, "DiaoNab");
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(product_by_id(1).unwrap().price, 690.0);
        assert_eq!(product_by_id(16).unwrap().name, "Nabdol Anti-Stress Formula");
        assert!(product_by_id(0).is_none());
        assert!(product_by_id(17).is_none());
    }

    #[test]
    fn by_category_and_badges() {
        assert_eq!(ids(&products_by_category("nabdol")), vec![13, 14, 15, 16]);
        assert!(products_by_category("unknown").is_empty());
        assert_eq!(ids(&featured(4)), vec![1, 2, 3, 4]);
        assert!(on_sale().iter().all(|p| p.original_price.is_some()));
        assert_eq!(ids(&new_arrivals()), vec![2, 6, 10, 15]);
    }

    #[test]
    fn search_is_case_insensitive() {
        assert_eq!(ids(&search("PROSTANAB")), vec![9, 10, 11, 12]);
        assert_eq!(ids(&search("insulin")), vec![7]);
        assert!(search("zzz").is_empty());
    }

    #[test]
    fn filter_combines_criteria() {
        let f = ProductFilter {
            category: Some("cardionab".into()),
            max_price: Some(700.0),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&f)), vec![1, 2, 4]);

        let f = ProductFilter {
            category: Some("all".into()),
            min_rating: Some(4.9),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&f)), vec![5, 13]);

        let f = ProductFilter {
            search: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(filter(&f).len(), 16);
    }

    #[test]
    fn filter_applies_sort() {
        let f = ProductFilter {
            category: Some("nabdol".into()),
            sort: Some(SortBy::PriceLow),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&f)), vec![16, 13, 15, 14]);
    }

    #[test]
    fn sort_orders() {
        let all: Vec<_> = products().iter().collect();
        let sorted = sort(all.clone(), SortBy::PriceHigh);
        assert_eq!(sorted[0].id, 7);
        assert_eq!(sorted[15].id, 16);

        let sorted = sort(all.clone(), SortBy::Rating);
        assert_eq!(ids(&sorted[..2]), vec![5, 13]);

        let sorted = sort(all.clone(), SortBy::Newest);
        assert_eq!(ids(&sorted[..5]), vec![2, 6, 10, 15, 1]);

        let sorted = sort(all, SortBy::Name);
        assert_eq!(sorted[0].name, "CardioNab Blood Pressure Balance");
    }

    #[test]
    fn sort_deserializes_from_kebab_case() {
        let sort: SortBy = serde_json::from_str("\"price-low\"").unwrap();
        assert_eq!(sort, SortBy::PriceLow);
    }

    #[test]
    fn stars() {
        assert_eq!(
            star_rating(4.8),
            StarRating {
                full: 4,
                half: true,
                empty: 0
            }
        );
        assert_eq!(
            star_rating(4.4),
            StarRating {
                full: 4,
                half: false,
                empty: 1
            }
        );
        assert_eq!(star_rating(5.0).empty, 0);
    }

    #[test]
    fn product_json_uses_camel_case() {
        let json = serde_json::to_value(product_by_id(1).unwrap()).unwrap();
        assert_eq!(json["categoryName"], "CardioNab");
        assert_eq!(json["originalPrice"], 899.0);
        assert_eq!(json["badge"], "sale");
        assert_eq!(format_price(690.0), "GH₵690.00");
    }
}
