/* src/route/engine/rust/src/strategy/mod.rs */

//! Prefixing strategies. Exactly one is active per generation run; each
//! expands a top-level page into route variants and then reorders or
//! filters the collected output.

mod localize;
mod no_prefix;
mod prefix;
mod prefix_and_default;
mod prefix_except_default;


use std::str::FromStr;

use crate::context::GeneratorContext;
use crate::errors::GenerateError;
use crate::types::{PageNode, Strategy};

pub use no_prefix::NoPrefixStrategy;
pub use prefix::PrefixStrategy;
pub use prefix_and_default::PrefixAndDefaultStrategy;
pub use prefix_except_default::PrefixExceptDefaultStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
  /// Page returned untouched (redirect-only, excluded or disabled).
  Passthrough,
  /// Unprefixed route.
  Base,
  Localized,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedRoute {
  pub kind: RouteKind,
  pub page: PageNode,
}

impl GeneratedRoute {
  pub fn passthrough(page: PageNode) -> Self {
    Self { kind: RouteKind::Passthrough, page }
  }

  pub fn base(page: PageNode) -> Self {
    Self { kind: RouteKind::Base, page }
  }

  pub fn localized(page: PageNode) -> Self {
    Self { kind: RouteKind::Localized, page }
  }

  pub fn into_page(self) -> PageNode {
    self.page
  }
}

pub trait RouteStrategy {
  fn strategy(&self) -> Strategy;

  /// Expand one localizable top-level page.
  fn generate_variants(&self, page: &PageNode, ctx: &GeneratorContext) -> Vec<GeneratedRoute>;

  /// Runs once over every collected route.
  fn post_process(
    &self,
    routes: Vec<GeneratedRoute>,
    _ctx: &GeneratorContext,
  ) -> Vec<GeneratedRoute> {
    order_base_first(routes)
  }
}

impl Strategy {
  pub fn handler(self) -> &'static dyn RouteStrategy {
    match self {
      Self::Prefix => &PrefixStrategy,
      Self::PrefixExceptDefault => &PrefixExceptDefaultStrategy,
      Self::PrefixAndDefault => &PrefixAndDefaultStrategy,
      Self::NoPrefix => &NoPrefixStrategy,
    }
  }
}

/// Strategy factory for string configuration.
pub fn strategy_for(name: &str) -> Result<&'static dyn RouteStrategy, GenerateError> {
  Strategy::from_str(name).map(Strategy::handler)
}

/// Pass non-localizable pages through; expand the rest.
pub fn process_page(
  strategy: &dyn RouteStrategy,
  page: &PageNode,
  ctx: &GeneratorContext,
) -> Vec<GeneratedRoute> {
  let skip = if page.is_redirect_only() {
    Some("redirect-only")
  } else if ctx.is_excluded(&page.path) {
    Some("excluded")
  } else if ctx.is_localization_disabled(page) {
    Some("localization disabled")
  } else {
    None
  };
  if let Some(reason) = skip {
    tracing::debug!(path = %page.path, reason, "page passed through");
    return vec![GeneratedRoute::passthrough(page.clone())];
  }
  strategy.generate_variants(page, ctx)
}

/// Stable reorder: unprefixed routes before localized ones, so a greedy
/// matcher tries them first.
pub fn order_base_first(routes: Vec<GeneratedRoute>) -> Vec<GeneratedRoute> {
  let (mut ordered, localized): (Vec<_>, Vec<_>) =
    routes.into_iter().partition(|r| r.kind != RouteKind::Localized);
  ordered.extend(localized);
  ordered
}

/// `codes` restricted to `allowed`, keeping `codes` order.
fn intersect(codes: &[String], allowed: &[String]) -> Vec<String> {
  codes.iter().filter(|c| allowed.contains(c)).cloned().collect()
}

/// Prefixed variants for `codes` followed by alias routes over `alias_codes`.
fn localized_with_aliases(
  page: &PageNode,
  codes: &[String],
  alias_codes: &[String],
  ctx: &GeneratorContext,
) -> Vec<GeneratedRoute> {
  let variants = localize::prefixed_variants(page, codes, ctx);
  if page.alias.is_empty() || alias_codes.is_empty() {
    return variants.into_iter().map(GeneratedRoute::localized).collect();
  }
  // only the default locale is served: aliases follow the bare route
  let fallback;
  let canonical = match variants.first() {
    Some(canonical) => canonical,
    None => {
      fallback = localize::default_locale_route(page, ctx);
      &fallback
    }
  };
  let aliases = crate::alias::generate_alias_routes(page, canonical, alias_codes, ctx);
  variants.into_iter().chain(aliases).map(GeneratedRoute::localized).collect()
}

/// Allowed codes for a top-level page plus whether the default locale is
/// among them.
fn allowed_for(page: &PageNode, ctx: &GeneratorContext) -> (Vec<String>, bool) {
  if !ctx.has_locale_restrictions(&page.path, page.name.as_deref()) {
    return (ctx.locale_codes().to_vec(), true);
  }
  let allowed = ctx.allowed_locales(&page.path, page.name.as_deref());
  tracing::debug!(path = %page.path, ?allowed, "route restricted to locales");
  let default_allowed = allowed.iter().any(|c| c == ctx.default_locale());
  (allowed, default_allowed)
}
