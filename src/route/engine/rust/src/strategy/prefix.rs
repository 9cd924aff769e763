/* src/route/engine/rust/src/strategy/prefix.rs */

use super::localize::default_locale_route;
use super::{
  GeneratedRoute, RouteKind, RouteStrategy, allowed_for, intersect, localized_with_aliases,
  order_base_first,
};
use crate::context::GeneratorContext;
use crate::types::{PageNode, Strategy};

/// Every locale, default included, lives under a locale segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixStrategy;

impl RouteStrategy for PrefixStrategy {
  fn strategy(&self) -> Strategy {
    Strategy::Prefix
  }

  fn generate_variants(&self, page: &PageNode, ctx: &GeneratorContext) -> Vec<GeneratedRoute> {
    let (allowed, default_allowed) = allowed_for(page, ctx);
    let mut routes = Vec::new();
    // only survives post_process on static hosting
    if default_allowed {
      routes.push(GeneratedRoute::base(default_locale_route(page, ctx)));
    }
    let codes = intersect(ctx.active_locale_codes(), &allowed);
    routes.extend(localized_with_aliases(page, &codes, &allowed, ctx));
    routes
  }

  fn post_process(
    &self,
    routes: Vec<GeneratedRoute>,
    ctx: &GeneratorContext,
  ) -> Vec<GeneratedRoute> {
    if ctx.is_cloudflare_pages() {
      return order_base_first(routes);
    }
    order_base_first(routes.into_iter().filter(|r| r.kind != RouteKind::Base).collect())
  }
}
