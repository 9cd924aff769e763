/* src/route/engine/rust/src/config.rs */

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::errors::GenerateError;
use crate::types::{Locale, LocaleRouteConfig, RouteLocalesConfig, Strategy};

/// Everything one generation run needs besides the page tree.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorOptions {
  pub locales: Vec<Locale>,
  #[serde(alias = "defaultLocale")]
  pub default_locale: String,
  #[serde(default = "default_strategy")]
  pub strategy: Strategy,
  /// Authoritative customizations (module / app config).
  #[serde(default, alias = "globalLocaleRoutes")]
  pub global_locale_routes: LocaleRouteConfig,
  /// Per-file customizations, consulted by route name only.
  #[serde(default, alias = "filesLocaleRoutes")]
  pub files_locale_routes: LocaleRouteConfig,
  #[serde(default, alias = "routeLocales")]
  pub route_locales: RouteLocalesConfig,
  #[serde(default, alias = "noPrefixRedirect")]
  pub no_prefix_redirect: bool,
  #[serde(default, alias = "excludePatterns")]
  pub exclude_patterns: Vec<String>,
  /// Replaces the `en|de|...` alternation in combined locale segments.
  #[serde(default, alias = "customRegexMatcher")]
  pub custom_regex: Option<String>,
  #[serde(default = "default_name_prefix", alias = "localizedRouteNamePrefix")]
  pub localized_route_name_prefix: String,
  #[serde(default, alias = "isCloudflarePages")]
  pub is_cloudflare_pages: bool,
}

fn default_strategy() -> Strategy {
  Strategy::PrefixExceptDefault
}

fn default_name_prefix() -> String {
  "localized-".to_string()
}

impl GeneratorOptions {
  pub fn new(locales: Vec<Locale>, default_locale: impl Into<String>, strategy: Strategy) -> Self {
    Self {
      locales,
      default_locale: default_locale.into(),
      strategy,
      global_locale_routes: LocaleRouteConfig::new(),
      files_locale_routes: LocaleRouteConfig::new(),
      route_locales: RouteLocalesConfig::new(),
      no_prefix_redirect: false,
      exclude_patterns: Vec::new(),
      custom_regex: None,
      localized_route_name_prefix: default_name_prefix(),
      is_cloudflare_pages: false,
    }
  }

  pub fn validate(&self) -> Result<(), GenerateError> {
    if self.locales.is_empty() {
      return Err(GenerateError::InvalidConfig("locales must not be empty".into()));
    }
    let mut seen = HashSet::new();
    for locale in &self.locales {
      if locale.code.is_empty() {
        return Err(GenerateError::InvalidConfig("locale code must not be empty".into()));
      }
      if !seen.insert(locale.code.as_str()) {
        return Err(GenerateError::InvalidConfig(format!(
          "duplicate locale code \"{}\"",
          locale.code
        )));
      }
    }
    if !seen.contains(self.default_locale.as_str()) {
      let codes: Vec<&str> = self.locales.iter().map(|l| l.code.as_str()).collect();
      return Err(GenerateError::InvalidConfig(format!(
        "default locale \"{}\" is not in locales {codes:?}",
        self.default_locale
      )));
    }
    Ok(())
  }
}

pub fn parse_options_toml(content: &str) -> Result<GeneratorOptions> {
  let options: GeneratorOptions = toml::from_str(content).context("invalid generator options")?;
  options.validate()?;
  Ok(options)
}

pub fn parse_options_json(content: &str) -> Result<GeneratorOptions> {
  let options: GeneratorOptions =
    serde_json::from_str(content).context("invalid generator options")?;
  options.validate()?;
  Ok(options)
}

/// Load options from a `.toml` or `.json` file.
pub fn load_options(path: &Path) -> Result<GeneratorOptions> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let parsed = match path.extension().and_then(|e| e.to_str()) {
    Some("json") => parse_options_json(&content),
    _ => parse_options_toml(&content),
  };
  parsed.with_context(|| format!("failed to load {}", path.display()))
}
