//! Password generation: character categories, pool assembly, and sampling.

pub mod charset;
mod generate;

pub use charset::Categories;
pub use generate::{Generator, generate_password};
