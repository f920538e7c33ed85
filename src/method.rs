//! Factory method: one creator per product variant.
//!
//! There is no shared dispatch. Supporting a new product means adding a new
//! `Creator` implementation; existing creators stay untouched.

use tracing::debug;

use crate::product::{Product, ProductA, ProductB, ProductC, ProductType};

pub trait Creator: Send + Sync {
    /// The variant this creator is dedicated to.
    fn product_type(&self) -> ProductType;

    fn create(&self) -> Box<dyn Product>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FactoryA;

#[derive(Debug, Clone, Copy, Default)]
pub struct FactoryB;

#[derive(Debug, Clone, Copy, Default)]
pub struct FactoryC;

impl Creator for FactoryA {
    fn product_type(&self) -> ProductType {
        ProductType::A
    }

    fn create(&self) -> Box<dyn Product> {
        debug!("FactoryA creating product");
        Box::new(ProductA)
    }
}

impl Creator for FactoryB {
    fn product_type(&self) -> ProductType {
        ProductType::B
    }

    fn create(&self) -> Box<dyn Product> {
        debug!("FactoryB creating product");
        Box::new(ProductB)
    }
}

impl Creator for FactoryC {
    fn product_type(&self) -> ProductType {
        ProductType::C
    }

    fn create(&self) -> Box<dyn Product> {
        debug!("FactoryC creating product");
        Box::new(ProductC)
    }
}

/// Picks the dedicated creator for a discriminator.
pub fn creator_for(product_type: ProductType) -> Box<dyn Creator> {
    match product_type {
        ProductType::A => Box::new(FactoryA),
        ProductType::B => Box::new(FactoryB),
        ProductType::C => Box::new(FactoryC),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simple::SimpleFactory;

    #[test]
    fn test_dedicated_creators() {
        assert_eq!(FactoryA.create().describe(), "I'm ProductA");
        assert_eq!(FactoryB.create().describe(), "I'm ProductB");
        assert_eq!(FactoryC.create().describe(), "I'm ProductC");
    }

    #[test]
    fn test_creator_for_matches_simple_factory() {
        let simple = SimpleFactory::new();
        for product_type in ProductType::ALL {
            let creator = creator_for(product_type);
            assert_eq!(creator.product_type(), product_type);
            assert_eq!(
                creator.create().describe(),
                simple.create(product_type).describe()
            );
        }
    }

    #[test]
    fn test_heterogeneous_creators() {
        let creators: Vec<Box<dyn Creator>> =
            vec![Box::new(FactoryA), Box::new(FactoryB), Box::new(FactoryC)];
        let descriptions: Vec<String> = creators.iter().map(|c| c.create().describe()).collect();
        assert_eq!(
            descriptions,
            vec!["I'm ProductA", "I'm ProductB", "I'm ProductC"]
        );
    }

    // A creator defined outside the built-in set plugs in without touching the others.
    struct EchoCreator;

    struct Echo;

    impl Product for Echo {
        fn describe(&self) -> String {
            "I'm Echo".to_string()
        }
    }

    impl Creator for EchoCreator {
        fn product_type(&self) -> ProductType {
            ProductType::A
        }

        fn create(&self) -> Box<dyn Product> {
            Box::new(Echo)
        }
    }

    #[test]
    fn test_open_for_extension() {
        let creator: &dyn Creator = &EchoCreator;
        assert_eq!(creator.create().describe(), "I'm Echo");
        assert_eq!(FactoryA.create().describe(), "I'm ProductA");
    }
}
