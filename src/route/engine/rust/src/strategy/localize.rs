/* src/route/engine/rust/src/strategy/localize.rs */

//! Subtree localization shared by all strategies.
//!
//! Two path coordinates travel down the recursion: the *original* path
//! (the only valid key for custom-path lookups) and the *localized* path
//! (what the rendered tree actually nests under). They diverge as soon as
//! an ancestor has a custom path.

use crate::builder::{RouteOverrides, create_route};
use crate::context::GeneratorContext;
use crate::extract::page_base_name;
use crate::path::{build_full_path, join_path, normalize_path, resolve_child_path};
use crate::types::PageNode;

/// One locale being rendered in single-locale mode.
#[derive(Debug, Clone, Copy)]
pub(super) struct LocaleTarget<'a> {
  pub(super) locale: &'a str,
  /// Path carries a locale segment (matters for escaped absolute children).
  pub(super) prefixed: bool,
  /// Names get `<prefix><base>-<locale>`; otherwise they are left alone.
  pub(super) renamed: bool,
}

/// Single-locale mode: render `children` for `target.locale`.
pub(super) fn localize_children(
  children: &[PageNode],
  parent_localized: &str,
  parent_original: &str,
  target: LocaleTarget<'_>,
  ctx: &GeneratorContext,
) -> Vec<PageNode> {
  children
    .iter()
    .map(|child| localize_child(child, parent_localized, parent_original, target, ctx))
    .collect()
}

fn localize_child(
  child: &PageNode,
  parent_localized: &str,
  parent_original: &str,
  target: LocaleTarget<'_>,
  ctx: &GeneratorContext,
) -> PageNode {
  let child_original = join_path(parent_original, &child.path);
  // index children share the parent's key
  let custom =
    if child.path.is_empty() { None } else { ctx.custom_path(&child_original, target.locale) };

  let (segment, localized) = match custom {
    Some(custom) => {
      let localized = resolve_child_path(parent_localized, custom);
      let segment = if custom.starts_with('/') {
        match relative_to(parent_localized, &localized) {
          Some(rest) => rest,
          None if target.prefixed => build_full_path(&[target.locale], &localized, None),
          None => localized.clone(),
        }
      } else {
        normalize_path(custom)
      };
      (segment, localized)
    }
    None => (child.path.clone(), join_path(parent_localized, &child.path)),
  };

  let children = localize_children(&child.children, &localized, &child_original, target, ctx);
  let mut overrides = RouteOverrides::new().path(segment).children(children);
  if target.renamed {
    overrides = overrides
      .name(ctx.localized_name(&page_base_name(child), Some(target.locale)))
      .clear_alias();
  }
  create_route(child, overrides)
}

/// `path` expressed relative to `parent`, when it lies at or below it.
fn relative_to(parent: &str, path: &str) -> Option<String> {
  if path == parent {
    return Some(String::new());
  }
  let base = if parent.ends_with('/') { parent.to_string() } else { format!("{parent}/") };
  path.strip_prefix(&base).map(str::to_string)
}

/// Shared mode: `codes` are still served by one combined route. A child
/// forks into one route per locale as soon as any of them has a custom
/// path for it; siblings are unaffected.
pub(super) fn localize_children_all_locales(
  children: &[PageNode],
  parent_path: &str,
  parent_original: &str,
  codes: &[String],
  ctx: &GeneratorContext,
) -> Vec<PageNode> {
  let mut out = Vec::with_capacity(children.len());
  for child in children {
    let child_original = join_path(parent_original, &child.path);
    let diverges = !child.path.is_empty()
      && ctx.filter_locale_codes_without_custom_paths(codes, &child_original).len() != codes.len();

    if diverges {
      for code in codes {
        let target = LocaleTarget { locale: code, prefixed: true, renamed: true };
        out.push(localize_child(child, parent_path, parent_original, target, ctx));
      }
      continue;
    }

    let child_path = join_path(parent_path, &child.path);
    let grandchildren =
      localize_children_all_locales(&child.children, &child_path, &child_original, codes, ctx);
    out.push(create_route(
      child,
      RouteOverrides::new()
        .name(ctx.localized_name(&page_base_name(child), None))
        .children(grandchildren)
        .clear_alias(),
    ));
  }
  out
}

/// Absolute localized path of a top-level page for `locale`.
fn localized_top_path(page: &PageNode, locale: &str, ctx: &GeneratorContext) -> Option<String> {
  ctx.custom_path(&page.path, locale).map(|custom| resolve_child_path("/", custom))
}

/// A top-level page rendered for exactly one locale, with or without the
/// locale segment. Always named `<prefix><base>-<locale>`.
pub(super) fn locale_route(
  page: &PageNode,
  locale: &str,
  prefixed: bool,
  ctx: &GeneratorContext,
) -> PageNode {
  let original = normalize_path(&page.path);
  let localized = localized_top_path(page, locale, ctx).unwrap_or_else(|| original.clone());
  let target = LocaleTarget { locale, prefixed, renamed: true };
  let children = localize_children(&page.children, &localized, &original, target, ctx);
  let path = if prefixed { build_full_path(&[locale], &localized, None) } else { localized };
  create_route(
    page,
    RouteOverrides::new()
      .path(path)
      .name(ctx.localized_name(&page_base_name(page), Some(locale)))
      .children(children)
      .clear_alias(),
  )
}

/// Prefixed variants for `codes`: one combined `:locale(a|b)` route while
/// no locale has a custom path for the page itself, otherwise one route
/// per locale.
pub(super) fn prefixed_variants(
  page: &PageNode,
  codes: &[String],
  ctx: &GeneratorContext,
) -> Vec<PageNode> {
  if codes.is_empty() {
    return Vec::new();
  }
  let original = normalize_path(&page.path);
  let shared = ctx.filter_locale_codes_without_custom_paths(codes, &original);
  if shared.len() != codes.len() {
    return codes.iter().map(|code| locale_route(page, code, true, ctx)).collect();
  }

  let children = localize_children_all_locales(&page.children, &original, &original, codes, ctx);
  vec![create_route(
    page,
    RouteOverrides::new()
      .path(build_full_path(codes, &original, ctx.custom_regex()))
      .name(ctx.localized_name(&page_base_name(page), None))
      .children(children)
      .clear_alias(),
  )]
}

/// Unprefixed default-locale route: the page itself, moved to the default
/// locale's custom path when it has one. Keeps its name and aliases.
pub(super) fn default_locale_route(page: &PageNode, ctx: &GeneratorContext) -> PageNode {
  let original = normalize_path(&page.path);
  let default = ctx.default_locale();
  let custom = localized_top_path(page, default, ctx);
  let parent_localized = custom.clone().unwrap_or_else(|| original.clone());
  let target = LocaleTarget { locale: default, prefixed: false, renamed: false };
  let children = localize_children(&page.children, &parent_localized, &original, target, ctx);

  let mut overrides = RouteOverrides::new().name(page_base_name(page)).children(children);
  if let Some(path) = custom {
    overrides = overrides.path(path);
  }
  create_route(page, overrides)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn relative_to_parent() {
    assert_eq!(relative_to("/eltern", "/eltern/kind"), Some("kind".to_string()));
    assert_eq!(relative_to("/eltern", "/eltern"), Some(String::new()));
    assert_eq!(relative_to("/", "/news"), Some("news".to_string()));
    assert_eq!(relative_to("/eltern", "/elternteil"), None);
    assert_eq!(relative_to("/eltern", "/kind"), None);
  }
}
