/* src/route/engine/rust/src/strategy/no_prefix.rs */

use super::localize::locale_route;
use super::{GeneratedRoute, RouteStrategy};
use crate::builder::{RouteOverrides, create_route};
use crate::context::GeneratorContext;
use crate::extract::page_base_name;
use crate::path::{normalize_dynamic_segments, normalize_path, resolve_child_path};
use crate::types::{PageNode, Strategy};

/// URLs never carry a locale. The original page always stays; locales with
/// their own custom path get an extra sibling route.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrefixStrategy;

impl RouteStrategy for NoPrefixStrategy {
  fn strategy(&self) -> Strategy {
    Strategy::NoPrefix
  }

  fn generate_variants(&self, page: &PageNode, ctx: &GeneratorContext) -> Vec<GeneratedRoute> {
    let original = normalize_path(&page.path);
    // custom paths are stored in router syntax
    let comparable = normalize_path(&normalize_dynamic_segments(&page.path));
    let allowed = ctx.allowed_locales(&page.path, page.name.as_deref());
    // Custom path equal to the original needs no extra route.
    let distinct_custom = |locale: &str| {
      ctx
        .custom_path(&original, locale)
        .map(|custom| resolve_child_path("/", custom))
        .filter(|custom| *custom != comparable)
    };

    let mut overrides = RouteOverrides::new().name(page_base_name(page));
    if ctx.no_prefix_redirect() {
      if let Some(target) = distinct_custom(ctx.default_locale()) {
        overrides = overrides.redirect(target);
      }
    }

    let mut routes = vec![GeneratedRoute::base(create_route(page, overrides))];
    for code in &allowed {
      if distinct_custom(code.as_str()).is_some() {
        routes.push(GeneratedRoute::localized(locale_route(page, code, false, ctx)));
      }
    }
    routes
  }
}
