mod analytics;
mod businesses;
mod compliance;
mod dashboard;
mod providers;
mod reports;
mod settings;

pub use analytics::GovernmentAnalytics;
pub use businesses::GovernmentBusinesses;
pub use compliance::GovernmentCompliance;
pub use dashboard::GovernmentDashboard;
pub use providers::GovernmentProviders;
pub use reports::GovernmentReports;
pub use settings::GovernmentSettings;
