//! Products and the discriminators that select them.
//!
//! A product is anything exposing [`Product::describe`]. The single-axis
//! variants (A, B, C) are selected by [`ProductType`]; the two-axis variants
//! (A1, A2, B1, B2) are selected by a ([`Family`], [`Tier`]) pair and also
//! implement [`TieredProduct`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::FactoryError;

// =============================================================================
// Milestone 1: The product capability
// =============================================================================

pub trait Product: Send + Sync {
    fn describe(&self) -> String;
}

/// A product from the two-axis case, which also knows its family and tier.
pub trait TieredProduct: Product {
    fn family(&self) -> Family;
    fn tier(&self) -> Tier;
}

impl fmt::Debug for dyn Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Product").field(&self.describe()).finish()
    }
}

impl fmt::Debug for dyn TieredProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TieredProduct")
            .field("family", &self.family())
            .field("tier", &self.tier())
            .field("describe", &self.describe())
            .finish()
    }
}

// =============================================================================
// Milestone 2: Single-axis products
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductA;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductB;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductC;

impl Product for ProductA {
    fn describe(&self) -> String {
        "I'm ProductA".to_string()
    }
}

impl Product for ProductB {
    fn describe(&self) -> String {
        "I'm ProductB".to_string()
    }
}

impl Product for ProductC {
    fn describe(&self) -> String {
        "I'm ProductC".to_string()
    }
}

/// Closed set of single-axis variants.
///
/// Raw integer values follow declaration order: `0 => A`, `1 => B`, `2 => C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ProductType {
    A,
    B,
    C,
}

impl ProductType {
    pub const ALL: [ProductType; 3] = [ProductType::A, ProductType::B, ProductType::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::A => "A",
            ProductType::B => "B",
            ProductType::C => "C",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i64> for ProductType {
    type Error = FactoryError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(ProductType::A),
            1 => Ok(ProductType::B),
            2 => Ok(ProductType::C),
            other => {
                warn!(raw = other, "rejected product discriminator");
                Err(FactoryError::unknown_discriminator(other))
            }
        }
    }
}

impl FromStr for ProductType {
    type Err = FactoryError;

    /// Accepts `a`, `typea` or `producta` in any case (likewise for B and C).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let letter = normalized
            .strip_prefix("type")
            .or_else(|| normalized.strip_prefix("product"))
            .unwrap_or(&normalized);

        match letter {
            "a" => Ok(ProductType::A),
            "b" => Ok(ProductType::B),
            "c" => Ok(ProductType::C),
            _ => {
                warn!(name = s, "rejected product discriminator");
                Err(FactoryError::unknown_discriminator(s))
            }
        }
    }
}

impl TryFrom<String> for ProductType {
    type Error = FactoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// =============================================================================
// Milestone 3: Two-axis discriminators and products
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    A,
    B,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::A => f.write_str("A"),
            Family::B => f.write_str("B"),
        }
    }
}

/// Quality grade. `Low` is made by factory 1, `High` by factory 2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Tier {
    #[default]
    Low,
    High,
}

impl Tier {
    pub const ALL: [Tier; 2] = [Tier::Low, Tier::High];

    /// Suffix used in product names: `1` for low, `2` for high.
    pub fn grade(&self) -> u8 {
        match self {
            Tier::Low => 1,
            Tier::High => 2,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Low => f.write_str("low"),
            Tier::High => f.write_str("high"),
        }
    }
}

impl FromStr for Tier {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" | "1" => Ok(Tier::Low),
            "high" | "2" => Ok(Tier::High),
            _ => {
                warn!(tier = s, "rejected tier");
                Err(FactoryError::unknown_tier(s))
            }
        }
    }
}

impl TryFrom<String> for Tier {
    type Error = FactoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Family A, low tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductA1;

/// Family A, high tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductA2;

/// Family B, low tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductB1;

/// Family B, high tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductB2;

impl Product for ProductA1 {
    fn describe(&self) -> String {
        "I'm ProductA1".to_string()
    }
}

impl TieredProduct for ProductA1 {
    fn family(&self) -> Family {
        Family::A
    }

    fn tier(&self) -> Tier {
        Tier::Low
    }
}

impl Product for ProductA2 {
    fn describe(&self) -> String {
        "I'm ProductA2".to_string()
    }
}

impl TieredProduct for ProductA2 {
    fn family(&self) -> Family {
        Family::A
    }

    fn tier(&self) -> Tier {
        Tier::High
    }
}

impl Product for ProductB1 {
    fn describe(&self) -> String {
        "I'm ProductB1".to_string()
    }
}

impl TieredProduct for ProductB1 {
    fn family(&self) -> Family {
        Family::B
    }

    fn tier(&self) -> Tier {
        Tier::Low
    }
}

impl Product for ProductB2 {
    fn describe(&self) -> String {
        "I'm ProductB2".to_string()
    }
}

impl TieredProduct for ProductB2 {
    fn family(&self) -> Family {
        Family::B
    }

    fn tier(&self) -> Tier {
        Tier::High
    }
}
