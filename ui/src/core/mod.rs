//! Platform-agnostic plumbing shared by the stores and sections.

pub mod lifecycle;
pub mod platform;
pub mod scroll;
pub mod storage;
pub mod timing;
