/* src/route/engine/rust/src/strategy/prefix_and_default.rs */

use super::localize::default_locale_route;
use super::{GeneratedRoute, RouteStrategy, allowed_for, intersect, localized_with_aliases};
use crate::context::GeneratorContext;
use crate::types::{PageNode, Strategy};

/// Default locale reachable both bare and prefixed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixAndDefaultStrategy;

impl RouteStrategy for PrefixAndDefaultStrategy {
  fn strategy(&self) -> Strategy {
    Strategy::PrefixAndDefault
  }

  fn generate_variants(&self, page: &PageNode, ctx: &GeneratorContext) -> Vec<GeneratedRoute> {
    let (allowed, default_allowed) = allowed_for(page, ctx);
    let mut routes = Vec::new();
    if default_allowed {
      routes.push(GeneratedRoute::base(default_locale_route(page, ctx)));
    }
    let codes = intersect(ctx.active_locale_codes(), &allowed);
    routes.extend(localized_with_aliases(page, &codes, &allowed, ctx));
    routes
  }
}
