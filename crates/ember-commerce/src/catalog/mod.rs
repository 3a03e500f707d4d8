//! Product catalog types.

mod product;
mod sort;

pub use product::Product;
pub use sort::{filter_by_category, search_by_name, SortKey};
