/* src/route/engine/rust/src/types.rs */

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GenerateError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
  pub code: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub iso: Option<String>,
  #[serde(default, alias = "displayName", skip_serializing_if = "Option::is_none")]
  pub display_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub dir: Option<String>,
  #[serde(default, alias = "baseUrl", skip_serializing_if = "Option::is_none")]
  pub base_url: Option<String>,
  #[serde(default, alias = "baseDefault", skip_serializing_if = "Option::is_none")]
  pub base_default: Option<bool>,
  /// Disabled locales are invisible to the generator.
  #[serde(default, skip_serializing_if = "std::ops::Not::not")]
  pub disabled: bool,
}

impl Locale {
  pub fn new(code: impl Into<String>) -> Self {
    Self {
      code: code.into(),
      iso: None,
      display_name: None,
      dir: None,
      base_url: None,
      base_default: None,
      disabled: false,
    }
  }
}

/// Framework-neutral page/route node. Input and output of generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageNode {
  pub path: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub children: Vec<PageNode>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub alias: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub meta: Option<serde_json::Map<String, serde_json::Value>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub file: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub redirect: Option<String>,
}

impl PageNode {
  pub fn new(path: impl Into<String>) -> Self {
    Self {
      path: path.into(),
      name: None,
      children: Vec::new(),
      alias: Vec::new(),
      meta: None,
      file: None,
      redirect: None,
    }
  }

  pub fn named(path: impl Into<String>, name: impl Into<String>) -> Self {
    Self { name: Some(name.into()), ..Self::new(path) }
  }

  /// Pure redirect entries have no component to localize.
  pub fn is_redirect_only(&self) -> bool {
    self.redirect.is_some() && self.file.is_none()
  }
}

/// One `globalLocaleRoutes` / `filesLocaleRoutes` value: `false` turns
/// localization off, a table maps locale code to custom path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocaleRouteEntry {
  Toggle(bool),
  Paths(BTreeMap<String, String>),
}

impl LocaleRouteEntry {
  pub fn is_disabled(&self) -> bool {
    matches!(self, Self::Toggle(false))
  }

  pub fn paths(&self) -> Option<&BTreeMap<String, String>> {
    match self {
      Self::Paths(paths) => Some(paths),
      Self::Toggle(_) => None,
    }
  }
}

/// Path key or route name -> entry.
pub type LocaleRouteConfig = BTreeMap<String, LocaleRouteEntry>;

/// Path key or route name -> allow-list of locale codes.
pub type RouteLocalesConfig = BTreeMap<String, Vec<String>>;

/// Original path key -> locale code -> custom path.
pub type LocalizedPathsMap = BTreeMap<String, BTreeMap<String, String>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
  Prefix,
  PrefixExceptDefault,
  PrefixAndDefault,
  NoPrefix,
}

impl Strategy {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Prefix => "prefix",
      Self::PrefixExceptDefault => "prefix_except_default",
      Self::PrefixAndDefault => "prefix_and_default",
      Self::NoPrefix => "no_prefix",
    }
  }
}

impl FromStr for Strategy {
  type Err = GenerateError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "prefix" => Ok(Self::Prefix),
      "prefix_except_default" => Ok(Self::PrefixExceptDefault),
      "prefix_and_default" => Ok(Self::PrefixAndDefault),
      "no_prefix" => Ok(Self::NoPrefix),
      other => Err(GenerateError::UnknownStrategy(other.to_string())),
    }
  }
}

impl fmt::Display for Strategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn page_node_defaults() {
    let page: PageNode = serde_json::from_value(json!({"path": "/about"})).unwrap();
    assert_eq!(page, PageNode::new("/about"));
    assert!(!page.is_redirect_only());
  }

  #[test]
  fn page_node_missing_path_rejected() {
    let err = serde_json::from_value::<PageNode>(json!({"name": "about"})).unwrap_err();
    assert!(err.to_string().contains("path"));
  }

  #[test]
  fn redirect_only_requires_no_file() {
    let mut page = PageNode::new("/old");
    page.redirect = Some("/new".into());
    assert!(page.is_redirect_only());
    page.file = Some("pages/old.vue".into());
    assert!(!page.is_redirect_only());
  }

  #[test]
  fn page_node_skips_empty_fields_on_output() {
    let value = serde_json::to_value(PageNode::named("/about", "about")).unwrap();
    assert_eq!(value, json!({"path": "/about", "name": "about"}));
  }

  #[test]
  fn locale_accepts_camel_case_aliases() {
    let locale: Locale = serde_json::from_value(json!({
      "code": "de",
      "displayName": "Deutsch",
      "baseUrl": "https://example.de",
      "baseDefault": true
    }))
    .unwrap();
    assert_eq!(locale.display_name.as_deref(), Some("Deutsch"));
    assert_eq!(locale.base_url.as_deref(), Some("https://example.de"));
    assert_eq!(locale.base_default, Some(true));
    assert!(!locale.disabled);
  }

  #[test]
  fn locale_route_entry_from_bool_or_table() {
    let config: LocaleRouteConfig = serde_json::from_value(json!({
      "/about": {"de": "/ueber-uns"},
      "/admin": false,
      "/contact": true
    }))
    .unwrap();
    assert_eq!(config["/about"].paths().unwrap()["de"], "/ueber-uns");
    assert!(config["/admin"].is_disabled());
    assert!(!config["/contact"].is_disabled());
    assert!(config["/contact"].paths().is_none());
  }

  #[test]
  fn strategy_from_str() {
    assert_eq!("prefix".parse::<Strategy>().unwrap(), Strategy::Prefix);
    assert_eq!("no_prefix".parse::<Strategy>().unwrap(), Strategy::NoPrefix);
    let err = "suffix".parse::<Strategy>().unwrap_err();
    assert_eq!(err, GenerateError::UnknownStrategy("suffix".into()));
  }

  #[test]
  fn strategy_serde_snake_case() {
    let s: Strategy = serde_json::from_value(json!("prefix_and_default")).unwrap();
    assert_eq!(s, Strategy::PrefixAndDefault);
    assert_eq!(s.to_string(), "prefix_and_default");
    assert!(serde_json::from_value::<Strategy>(json!("suffix")).is_err());
  }
}
