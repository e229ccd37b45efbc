/// SQLite-backed stores, one per entity.
/// Every method runs a single statement against the bounded pool;
/// connection acquisition is scoped to the call and released on all
/// exit paths, including errors.

pub mod booking;
pub mod district;
pub mod document;
pub mod dropping_point;
pub mod provider;
pub mod route;

pub use booking::{Booking, BookingStore};
pub use district::DistrictStore;
pub use document::DocumentStore;
pub use dropping_point::DroppingPointStore;
pub use provider::ProviderStore;
pub use route::RouteStore;
