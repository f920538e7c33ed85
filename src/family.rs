//! Abstract factory: one factory per tier, each producing a family of
//! related products.
//!
//! A factory only ever builds products of its own tier, so the products from
//! one [`AbstractFactory::create_family`] call are always compatible.

use tracing::debug;

use crate::product::{ProductA1, ProductA2, ProductB1, ProductB2, Tier, TieredProduct};

pub trait AbstractFactory: Send + Sync {
    fn tier(&self) -> Tier;

    fn create_product_a(&self) -> Box<dyn TieredProduct>;

    fn create_product_b(&self) -> Box<dyn TieredProduct>;

    fn create_family(&self) -> ProductFamily {
        debug!(tier = %self.tier(), "creating product family");
        ProductFamily {
            tier: self.tier(),
            product_a: self.create_product_a(),
            product_b: self.create_product_b(),
        }
    }
}

/// Both products of one tier, built together.
#[derive(Debug)]
pub struct ProductFamily {
    tier: Tier,
    product_a: Box<dyn TieredProduct>,
    product_b: Box<dyn TieredProduct>,
}

impl ProductFamily {
    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn product_a(&self) -> &dyn TieredProduct {
        self.product_a.as_ref()
    }

    pub fn product_b(&self) -> &dyn TieredProduct {
        self.product_b.as_ref()
    }

    pub fn describe(&self) -> [String; 2] {
        [self.product_a.describe(), self.product_b.describe()]
    }

    pub fn into_parts(self) -> (Box<dyn TieredProduct>, Box<dyn TieredProduct>) {
        (self.product_a, self.product_b)
    }
}

/// Factory 1: low-end products only.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowTierFactory;

/// Factory 2: high-end products only.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighTierFactory;

impl AbstractFactory for LowTierFactory {
    fn tier(&self) -> Tier {
        Tier::Low
    }

    fn create_product_a(&self) -> Box<dyn TieredProduct> {
        Box::new(ProductA1)
    }

    fn create_product_b(&self) -> Box<dyn TieredProduct> {
        Box::new(ProductB1)
    }
}

impl AbstractFactory for HighTierFactory {
    fn tier(&self) -> Tier {
        Tier::High
    }

    fn create_product_a(&self) -> Box<dyn TieredProduct> {
        Box::new(ProductA2)
    }

    fn create_product_b(&self) -> Box<dyn TieredProduct> {
        Box::new(ProductB2)
    }
}

pub fn factory_for(tier: Tier) -> Box<dyn AbstractFactory> {
    match tier {
        Tier::Low => Box::new(LowTierFactory),
        Tier::High => Box::new(HighTierFactory),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Family;
    use proptest::prelude::*;

    #[test]
    fn test_low_tier_factory() {
        let factory = LowTierFactory;
        assert_eq!(factory.create_product_a().describe(), "I'm ProductA1");
        assert_eq!(factory.create_product_b().describe(), "I'm ProductB1");
    }

    #[test]
    fn test_high_tier_factory() {
        let factory = HighTierFactory;
        assert_eq!(factory.create_product_a().describe(), "I'm ProductA2");
        assert_eq!(factory.create_product_b().describe(), "I'm ProductB2");
    }

    #[test]
    fn test_family_keeps_axes_apart() {
        let family = LowTierFactory.create_family();
        assert_eq!(family.product_a().family(), Family::A);
        assert_eq!(family.product_b().family(), Family::B);
        assert_eq!(
            family.describe(),
            ["I'm ProductA1".to_string(), "I'm ProductB1".to_string()]
        );
    }

    #[test]
    fn test_into_parts_transfers_ownership() {
        let (a, b) = HighTierFactory.create_family().into_parts();
        assert_eq!(a.describe(), "I'm ProductA2");
        assert_eq!(b.describe(), "I'm ProductB2");
    }

    fn tier_strategy() -> impl Strategy<Value = Tier> {
        prop_oneof![Just(Tier::Low), Just(Tier::High)]
    }

    proptest! {
        #[test]
        fn prop_family_never_mixes_tiers(tier in tier_strategy()) {
            let factory = factory_for(tier);
            let family = factory.create_family();
            prop_assert_eq!(family.tier(), tier);
            prop_assert_eq!(family.product_a().tier(), tier);
            prop_assert_eq!(family.product_b().tier(), tier);
        }

        #[test]
        fn prop_separate_calls_share_tier(tier in tier_strategy()) {
            let factory = factory_for(tier);
            prop_assert_eq!(factory.create_product_a().tier(), factory.create_product_b().tier());
            prop_assert_eq!(factory.tier(), tier);
        }
    }
}
