use crate::utils::error::Result;
use crate::utils::validation::{validate_non_negative_price, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row of the backend's `alcohol` table. Price columns are independently
/// nullable; a pour size without a price is simply not offered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlcoholItem {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub price_30ml: Option<f64>,
    #[serde(default)]
    pub price_60ml: Option<f64>,
    #[serde(default)]
    pub price_90ml: Option<f64>,
    #[serde(default)]
    pub price_180ml: Option<f64>,
    #[serde(default)]
    pub price_bottle: Option<f64>,
    pub available: bool,
}

/// Row of the backend's `food_menu` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub vegetarian: bool,
    pub available: bool,
}

/// An authenticated login as persisted by the session store. A session past
/// `expires_at` counts as absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Row of the backend's `user_roles` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRecord {
    pub user_id: String,
    pub role: String,
}

/// Anything the category grouper can partition.
pub trait Categorized {
    fn category(&self) -> &str;
}

impl Categorized for AlcoholItem {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Categorized for FoodItem {
    fn category(&self) -> &str {
        &self.category
    }
}

/// One display section: a category name plus its records in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySection<T> {
    pub name: String,
    pub items: Vec<T>,
}

/// Both grouped views of the menu, ready for rendering.
#[derive(Debug, Clone, Default)]
pub struct MenuSnapshot {
    pub alcohol: Vec<CategorySection<AlcoholItem>>,
    pub food: Vec<CategorySection<FoodItem>>,
}

fn validate_record_keys(kind: &str, id: &str, category: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(crate::utils::error::MenuError::DataError {
            message: format!("{} row is missing a required id", kind),
        });
    }
    if category.trim().is_empty() {
        return Err(crate::utils::error::MenuError::DataError {
            message: format!("{} row '{}' is missing a required category", kind, id),
        });
    }
    Ok(())
}

impl Validate for AlcoholItem {
    fn validate(&self) -> Result<()> {
        validate_record_keys("alcohol", &self.id, &self.category)?;
        for (field, price) in [
            ("price_30ml", self.price_30ml),
            ("price_60ml", self.price_60ml),
            ("price_90ml", self.price_90ml),
            ("price_180ml", self.price_180ml),
            ("price_bottle", self.price_bottle),
        ] {
            if let Some(price) = price {
                validate_non_negative_price(field, price)?;
            }
        }
        Ok(())
    }
}

impl Validate for FoodItem {
    fn validate(&self) -> Result<()> {
        validate_record_keys("food_menu", &self.id, &self.category)?;
        validate_non_negative_price("price", self.price)
    }
}
