use crate::mys::url::{LinkTarget, user_profile_url};
use crate::render::RenderNode;
use crate::render::node::{Icon, Link};
use crate::render::ops::Mention;

/// Renders an `@user` mention as a link to the user's profile.
pub(crate) fn render(mention: &Mention) -> RenderNode {
  RenderNode::Link(Link {
    href: user_profile_url(&mention.uid),
    target: LinkTarget::External,
    label: mention.nickname.clone(),
    icon: Some(Icon::Person),
  })
}
