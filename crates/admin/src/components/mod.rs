//! List building blocks shared by every record page.
//!
//! - `filter` - free-text search and field predicates
//! - `pagination` - fixed-size page slicing

pub mod filter;
pub mod pagination;

pub use filter::{ALL, Choice, FilterSpec, Searchable, filter};
pub use pagination::{DEFAULT_PAGE_SIZE, PageInfo, page_count, paginate};
