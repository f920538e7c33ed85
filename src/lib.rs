//! # Creational Patterns in Rust
//!
//! This crate demonstrates the three textbook object-creation patterns and the
//! single parameterized registry that generalizes them:
//!
//! ## Pattern 1: Simple Factory
//! - One factory, one `match` over a closed discriminator enum
//! - Raw and textual discriminators fail with an explicit error instead of a null
//!
//! ## Pattern 2: Factory Method
//! - One creator per product variant behind a `Creator` trait
//! - Extension means adding a creator, never editing an existing one
//!
//! ## Pattern 3: Abstract Factory
//! - One factory per tier producing a whole family of related products
//! - A single factory never mixes tiers
//!
//! ## Pattern 4: Creation Registry
//! - Discriminator key mapped to a boxed constructor
//! - Replaces the hand-written dispatch of the three patterns above
//!
//! Run the demo with: `cargo run --bin factory_demo -- all`

pub mod config;
pub mod error;
pub mod family;
pub mod logging;
pub mod method;
pub mod product;
pub mod registry;
pub mod simple;

pub use config::{ConfigParser, FactoryConfig};
pub use error::{FactoryError, Result};
pub use family::{factory_for, AbstractFactory, HighTierFactory, LowTierFactory, ProductFamily};
pub use method::{creator_for, Creator, FactoryA, FactoryB, FactoryC};
pub use product::{Family, Product, ProductType, Tier, TieredProduct};
pub use registry::CreationRegistry;
pub use simple::SimpleFactory;
