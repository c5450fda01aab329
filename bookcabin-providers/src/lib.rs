//! Provider adapters. Each module normalises one upstream payload shape into
//! [`bookcabin_domain::search::UnifiedFlight`] rows; the engine treats them
//! all through [`bookcabin_core::FlightProvider`].

pub mod airasia;
pub mod batik;
pub mod garuda;
pub mod lion;

pub use airasia::AirAsia;
pub use batik::Batik;
pub use garuda::Garuda;
pub use lion::Lion;
