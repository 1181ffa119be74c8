pub mod core;
pub mod key;

#[cfg(test)]
mod tests;

pub use self::core::*;
pub use self::key::*;
