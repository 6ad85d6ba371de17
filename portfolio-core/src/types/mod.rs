//! 类型定义模块

mod region;
mod sector;

pub use region::{
    BadgeKind, GalleryImage, LinkView, MockupView, NotFoundView, RegionContent,
};
pub use sector::{
    MockupType, NewSector, Sector, SectorLink, SectorLinks, SectorSummary, SectorUpdate,
};
