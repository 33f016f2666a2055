pub mod access;
pub mod cancel;
pub mod compliance;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod feature_flags;
pub mod fleet;
pub mod models;
pub mod pickup;
pub mod query;
pub mod waste;

pub use cancel::CancelToken;
pub use compliance::*;
pub use dashboard::*;
pub use dataset::Dataset;
pub use error::*;
pub use feature_flags::*;
pub use fleet::*;
pub use models::*;
pub use pickup::*;
pub use waste::*;

// query and access are used through their module paths:
// `query::filter_pickups`, `access::evaluate`.
