//! Portfolio Core Library
//!
//! Platform-independent logic for the portfolio showcase:
//! - Sector catalog (`SectorCatalog`)
//! - Sector detail page rendering (`SectorPage`)
//! - Page transitions with a covering overlay (`PageTransitions`)
//! - Proximity-triggered navigation sidebar (`ProximitySidebar`)
//!
//! The page the components work on is abstracted through the `Document` and
//! `Navigator` traits, and time is always supplied by the host, so the same
//! state machines drive a terminal UI, a test harness or any other front end.

pub mod error;
pub mod services;
pub mod sidebar;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{PageTransitions, SectorCatalog, SectorPage};
pub use sidebar::ProximitySidebar;
pub use traits::{Document, InMemoryDocument, Navigator};
