use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, warn};

use crate::error::{FactoryError, Result};
use crate::product::{Product, ProductA, ProductB, ProductC, ProductType};

type Constructor<P> = Box<dyn Fn() -> P + Send + Sync>;

/// Maps a discriminator key to a constructor.
///
/// Each [`create`](CreationRegistry::create) call runs the constructor again,
/// so callers always receive a fresh, exclusively owned value. A key without a
/// constructor fails with [`FactoryError::UnknownDiscriminator`].
///
/// ```
/// use creational_patterns::{CreationRegistry, ProductType};
///
/// let registry = CreationRegistry::standard();
/// let product = registry.create(&ProductType::A).unwrap();
/// assert_eq!(product.describe(), "I'm ProductA");
/// ```
pub struct CreationRegistry<K, P> {
    constructors: HashMap<K, Constructor<P>>,
}

impl<K, P> Default for CreationRegistry<K, P> {
    fn default() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }
}

impl<K, P> CreationRegistry<K, P>
where
    K: Hash + Eq + fmt::Display,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `constructor` to `key`, replacing any previous one.
    pub fn register(
        mut self,
        key: K,
        constructor: impl Fn() -> P + Send + Sync + 'static,
    ) -> Self {
        self.insert(key, constructor);
        self
    }

    /// In-place form of [`register`](CreationRegistry::register). Returns true
    /// if a previous constructor was replaced.
    pub fn insert(
        &mut self,
        key: K,
        constructor: impl Fn() -> P + Send + Sync + 'static,
    ) -> bool {
        debug!(%key, "registering constructor");
        self.constructors.insert(key, Box::new(constructor)).is_some()
    }

    pub fn create(&self, key: &K) -> Result<P> {
        match self.constructors.get(key) {
            Some(constructor) => {
                debug!(%key, "registry creating product");
                Ok(constructor())
            }
            None => {
                warn!(%key, "no constructor registered");
                Err(FactoryError::unknown_discriminator(key))
            }
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.constructors.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.constructors.keys()
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl CreationRegistry<ProductType, Box<dyn Product>> {
    /// Registry holding the three single-axis products.
    pub fn standard() -> Self {
        Self::new()
            .register(ProductType::A, || Box::new(ProductA) as Box<dyn Product>)
            .register(ProductType::B, || Box::new(ProductB) as Box<dyn Product>)
            .register(ProductType::C, || Box::new(ProductC) as Box<dyn Product>)
    }
}

impl<K: fmt::Debug, P> fmt::Debug for CreationRegistry<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreationRegistry")
            .field("keys", &self.constructors.keys().collect::<Vec<_>>())
            .finish()
    }
}
