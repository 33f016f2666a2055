mod compliance;
mod customers;
mod dashboard;
mod fleet;
mod pickup_requests;
mod reports;
mod settings;
mod tracking;

pub use compliance::ProviderCompliance;
pub use customers::ProviderCustomers;
pub use dashboard::ProviderDashboard;
pub use fleet::ProviderFleet;
pub use pickup_requests::ProviderPickupRequests;
pub use reports::ProviderReports;
pub use settings::ProviderSettings;
pub use tracking::ProviderTracking;
