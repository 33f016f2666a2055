mod dashboard;
mod pickup_detail;
mod pickups;
mod reports;
mod request_pickup;
mod settings;
mod waste_profile;

pub use dashboard::BusinessDashboard;
pub use pickup_detail::BusinessPickupDetail;
pub use pickups::BusinessPickups;
pub use reports::BusinessReports;
pub use request_pickup::BusinessRequestPickup;
pub use settings::BusinessSettings;
pub use waste_profile::BusinessWasteProfile;
