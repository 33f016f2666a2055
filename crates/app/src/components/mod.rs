//! Presentational building blocks shared by the role pages.

mod badge;
mod card;
mod filters;
mod page;
mod pickup_table;
mod report_table;

pub use badge::*;
pub use card::*;
pub use filters::*;
pub use page::*;
pub use pickup_table::*;
pub use report_table::*;
