//! Per-variant node handlers.
//!
//! Each handler turns one typed operation payload into a [`RenderNode`]. The
//! dispatcher decides which handler runs; handlers never inspect raw JSON
//! except to preserve it for [`unknown`] fallbacks.
//!
//! [`RenderNode`]: super::RenderNode

pub(super) mod divider;
pub(super) mod fold;
pub(super) mod image;
pub(super) mod link;
pub(super) mod link_card;
pub(super) mod mention;
pub(super) mod text;
pub(super) mod unknown;
pub(super) mod video;
