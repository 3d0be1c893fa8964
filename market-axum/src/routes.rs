//! One module per resource, one file per verb within it.

pub mod markets;
pub mod products;
pub mod sellers;
