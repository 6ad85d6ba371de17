//! 页面视图

pub mod home;
pub mod not_found;
pub mod sector;
