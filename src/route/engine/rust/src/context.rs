/* src/route/engine/rust/src/context.rs */

use std::collections::HashSet;

use regex::Regex;

use crate::config::GeneratorOptions;
use crate::errors::GenerateError;
use crate::extract::{
  canonical_route_config, extract_localized_paths, lookup_entry, page_base_name,
};
use crate::path::{normalize_path, path_key};
use crate::types::{
  LocaleRouteConfig, LocalizedPathsMap, PageNode, RouteLocalesConfig, Strategy,
};

/// Read-only snapshot for one generation run. Built once, queried by every
/// strategy, dropped when the run ends.
#[derive(Debug)]
pub struct GeneratorContext {
  locale_codes: Vec<String>,
  default_locale: String,
  strategy: Strategy,
  global_locale_routes: LocaleRouteConfig,
  route_locales: RouteLocalesConfig,
  localized_paths: LocalizedPathsMap,
  active_locale_codes: Vec<String>,
  exclude_patterns: Vec<Regex>,
  custom_regex: Option<String>,
  name_prefix: String,
  no_prefix_redirect: bool,
  is_cloudflare_pages: bool,
}

impl GeneratorContext {
  pub fn new(pages: &[PageNode], options: &GeneratorOptions) -> Result<Self, GenerateError> {
    options.validate()?;

    let locale_codes: Vec<String> =
      options.locales.iter().filter(|l| !l.disabled).map(|l| l.code.clone()).collect();
    if !locale_codes.contains(&options.default_locale) {
      return Err(GenerateError::InvalidConfig(format!(
        "default locale \"{}\" is disabled",
        options.default_locale
      )));
    }

    let exclude_patterns = options
      .exclude_patterns
      .iter()
      .map(|pattern| {
        Regex::new(pattern).map_err(|e| GenerateError::InvalidExcludePattern {
          pattern: pattern.clone(),
          message: e.to_string(),
        })
      })
      .collect::<Result<Vec<_>, _>>()?;

    let active_locale_codes = match options.strategy {
      Strategy::Prefix | Strategy::PrefixAndDefault => locale_codes.clone(),
      Strategy::PrefixExceptDefault => {
        locale_codes.iter().filter(|c| **c != options.default_locale).cloned().collect()
      }
      Strategy::NoPrefix => Vec::new(),
    };

    let route_locales = canonical_route_locales(&options.route_locales, &locale_codes);
    let localized_paths = extract_localized_paths(
      pages,
      &options.global_locale_routes,
      &options.files_locale_routes,
      "",
    );

    Ok(Self {
      locale_codes,
      default_locale: options.default_locale.clone(),
      strategy: options.strategy,
      global_locale_routes: canonical_route_config(&options.global_locale_routes),
      route_locales,
      localized_paths,
      active_locale_codes,
      exclude_patterns,
      custom_regex: options.custom_regex.clone(),
      name_prefix: options.localized_route_name_prefix.clone(),
      no_prefix_redirect: options.no_prefix_redirect,
      is_cloudflare_pages: options.is_cloudflare_pages,
    })
  }

  pub fn strategy(&self) -> Strategy {
    self.strategy
  }

  pub fn default_locale(&self) -> &str {
    &self.default_locale
  }

  /// Enabled locale codes in configuration order.
  pub fn locale_codes(&self) -> &[String] {
    &self.locale_codes
  }

  /// Locales that get a prefixed route under the current strategy.
  pub fn active_locale_codes(&self) -> &[String] {
    &self.active_locale_codes
  }

  pub fn localized_paths(&self) -> &LocalizedPathsMap {
    &self.localized_paths
  }

  pub fn custom_regex(&self) -> Option<&str> {
    self.custom_regex.as_deref()
  }

  pub fn name_prefix(&self) -> &str {
    &self.name_prefix
  }

  pub fn no_prefix_redirect(&self) -> bool {
    self.no_prefix_redirect
  }

  pub fn is_cloudflare_pages(&self) -> bool {
    self.is_cloudflare_pages
  }

  fn restriction(&self, path: &str, name: Option<&str>) -> Option<&Vec<String>> {
    self
      .route_locales
      .get(&path_key(path))
      .or_else(|| name.and_then(|n| self.route_locales.get(n)))
  }

  pub fn has_locale_restrictions(&self, path: &str, name: Option<&str>) -> bool {
    self.restriction(path, name).is_some()
  }

  /// Restriction list in locale order, or every enabled code when the
  /// route is unrestricted.
  pub fn allowed_locales(&self, path: &str, name: Option<&str>) -> Vec<String> {
    match self.restriction(path, name) {
      Some(allowed) => {
        self.locale_codes.iter().filter(|code| allowed.contains(code)).cloned().collect()
      }
      None => self.locale_codes.clone(),
    }
  }

  pub fn custom_path(&self, original_full_path: &str, locale: &str) -> Option<&str> {
    self
      .localized_paths
      .get(&path_key(original_full_path))
      .and_then(|paths| paths.get(locale))
      .map(String::as_str)
  }

  pub fn has_custom_path(&self, original_full_path: &str, locale: &str) -> bool {
    self.custom_path(original_full_path, locale).is_some()
  }

  /// Codes that can still share one combined route for `original_full_path`.
  pub fn filter_locale_codes_without_custom_paths(
    &self,
    codes: &[String],
    original_full_path: &str,
  ) -> Vec<String> {
    codes.iter().filter(|code| !self.has_custom_path(original_full_path, code)).cloned().collect()
  }

  pub fn is_excluded(&self, path: &str) -> bool {
    let path = normalize_path(path);
    self.exclude_patterns.iter().any(|re| re.is_match(&path))
  }

  /// `globalLocaleRoutes[key] == false` for this top-level page.
  pub fn is_localization_disabled(&self, page: &PageNode) -> bool {
    lookup_entry(&self.global_locale_routes, &path_key(&page.path), &page_base_name(page))
      .is_some_and(|entry| entry.is_disabled())
  }

  /// `localized-about`, or `localized-about-de` for a locale-specific route.
  pub fn localized_name(&self, base_name: &str, locale: Option<&str>) -> String {
    match locale {
      Some(code) => format!("{}{base_name}-{code}", self.name_prefix),
      None => format!("{}{base_name}", self.name_prefix),
    }
  }
}

fn canonical_route_locales(config: &RouteLocalesConfig, known: &[String]) -> RouteLocalesConfig {
  let known: HashSet<&str> = known.iter().map(String::as_str).collect();
  let mut out = RouteLocalesConfig::new();
  for (key, codes) in config {
    let unknown: Vec<&str> =
      codes.iter().map(String::as_str).filter(|c| !known.contains(c)).collect();
    if !unknown.is_empty() {
      tracing::warn!(route = %key, ?unknown, "route locale restriction names unknown locales");
    }
    out.entry(path_key(key)).or_insert_with(|| codes.clone());
  }
  out
}
