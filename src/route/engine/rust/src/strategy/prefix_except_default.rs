/* src/route/engine/rust/src/strategy/prefix_except_default.rs */

use super::localize::default_locale_route;
use super::{GeneratedRoute, RouteStrategy, allowed_for, intersect, localized_with_aliases};
use crate::context::GeneratorContext;
use crate::types::{PageNode, Strategy};

/// Default locale at the bare path, every other locale prefixed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixExceptDefaultStrategy;

impl RouteStrategy for PrefixExceptDefaultStrategy {
  fn strategy(&self) -> Strategy {
    Strategy::PrefixExceptDefault
  }

  fn generate_variants(&self, page: &PageNode, ctx: &GeneratorContext) -> Vec<GeneratedRoute> {
    let (allowed, default_allowed) = allowed_for(page, ctx);
    let mut routes = Vec::new();
    if default_allowed {
      routes.push(GeneratedRoute::base(default_locale_route(page, ctx)));
    }
    let codes = intersect(ctx.active_locale_codes(), &allowed);
    // aliases also cover the default locale
    routes.extend(localized_with_aliases(page, &codes, &allowed, ctx));
    routes
  }
}
