//! BBS-facing pieces: payload models, post sources, and URL classification.

pub mod models;
pub mod source;
pub mod url;

pub use models::{FullData, Post, PostContent, PostData, PostResponse};
pub use source::{FileSource, LoadedPost, PostSource, STDIN_REFERENCE, parse_post_document};
pub use url::{
  LinkDestination, LinkTarget, classify, extract_post_id, is_internal_post, lottery_route, post_detail_route,
  user_profile_url,
};
