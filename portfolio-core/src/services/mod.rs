//! 业务逻辑服务层

mod page_transition;
mod sector_catalog;
mod sector_page;

pub use page_transition::{
    parse_link, LinkTarget, OverlayPhase, PageTransitions, TickOutcome, TransitionConfig,
    OVERLAY_ID,
};
pub use sector_catalog::SectorCatalog;
pub use sector_page::{regions, RenderOutcome, SectorPage};
