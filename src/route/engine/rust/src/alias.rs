/* src/route/engine/rust/src/alias.rs */

use crate::builder::{RouteOverrides, create_route};
use crate::context::GeneratorContext;
use crate::path::{build_full_path, normalize_dynamic_segments};
use crate::types::PageNode;

/// One extra top-level route per declared alias of `page`, prefixed the
/// same way as the canonical localized route and carrying a copy of its
/// children. Alias routes are unnamed so they never clash with the
/// canonical route name.
pub fn generate_alias_routes(
  page: &PageNode,
  canonical: &PageNode,
  codes: &[String],
  ctx: &GeneratorContext,
) -> Vec<PageNode> {
  if codes.is_empty() {
    return Vec::new();
  }
  page
    .alias
    .iter()
    .map(|alias| {
      let path = build_full_path(codes, &normalize_dynamic_segments(alias), ctx.custom_regex());
      let mut route = create_route(canonical, RouteOverrides::new().path(path).clear_alias());
      route.name = None;
      route
    })
    .collect()
}
