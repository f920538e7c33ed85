//! Simple factory: one factory, one `match` over the discriminator.

use tracing::debug;

use crate::error::Result;
use crate::product::{Product, ProductA, ProductB, ProductC, ProductType};

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleFactory;

impl SimpleFactory {
    pub fn new() -> Self {
        SimpleFactory
    }

    /// Builds the product for a discriminator of the closed enum.
    ///
    /// Cannot fail: every `ProductType` has a branch.
    pub fn create(&self, product_type: ProductType) -> Box<dyn Product> {
        debug!(%product_type, "simple factory creating product");
        match product_type {
            ProductType::A => Box::new(ProductA),
            ProductType::B => Box::new(ProductB),
            ProductType::C => Box::new(ProductC),
        }
    }

    /// Builds the product for a raw integer discriminator (`0..=2`).
    pub fn create_raw(&self, raw: i64) -> Result<Box<dyn Product>> {
        let product_type = ProductType::try_from(raw)?;
        Ok(self.create(product_type))
    }

    /// Builds the product named by `name` (`"A"`, `"TypeA"`, `"ProductA"`, ...).
    pub fn create_named(&self, name: &str) -> Result<Box<dyn Product>> {
        let product_type = name.parse::<ProductType>()?;
        Ok(self.create(product_type))
    }
}
