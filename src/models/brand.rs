//! Phone brands carried in the inventory.

use crate::domain::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A phone manufacturer the company stocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    Apple,
    Samsung,
    Google,
    Huawei,
    Xiaomi,
    Motorola,
}

impl Brand {
    /// Every brand in the inventory, in catalogue order.
    pub const ALL: [Brand; 6] = [
        Brand::Apple,
        Brand::Samsung,
        Brand::Google,
        Brand::Huawei,
        Brand::Xiaomi,
        Brand::Motorola,
    ];

    /// Display name, also used as the serial number source.
    pub fn as_str(self) -> &'static str {
        match self {
            Brand::Apple => "Apple",
            Brand::Samsung => "Samsung",
            Brand::Google => "Google",
            Brand::Huawei => "Huawei",
            Brand::Xiaomi => "Xiaomi",
            Brand::Motorola => "Motorola",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Brand {
    type Err = ValidationError;

    /// Case-insensitive lookup by display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Brand::ALL
            .into_iter()
            .find(|brand| brand.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ValidationError::UnknownBrand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_names() {
        let names: Vec<&str> = Brand::ALL.iter().map(|b| b.as_str()).collect();
        assert_eq!(
            names,
            vec!["Apple", "Samsung", "Google", "Huawei", "Xiaomi", "Motorola"]
        );
    }

    #[test]
    fn test_brand_from_str() {
        assert_eq!("apple".parse::<Brand>().unwrap(), Brand::Apple);
        assert_eq!(" MOTOROLA ".parse::<Brand>().unwrap(), Brand::Motorola);
        assert_eq!(
            "Nokia".parse::<Brand>(),
            Err(ValidationError::UnknownBrand("Nokia".to_string()))
        );
    }

    #[test]
    fn test_brand_serde() {
        assert_eq!(serde_json::to_string(&Brand::Xiaomi).unwrap(), "\"Xiaomi\"");
        let brand: Brand = serde_json::from_str("\"Google\"").unwrap();
        assert_eq!(brand, Brand::Google);
    }
}
