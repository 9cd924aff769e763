/* src/route/engine/rust/src/generator/tests.rs */

use serde_json::json;

use super::*;
use crate::config::parse_options_toml;
use crate::strategy::strategy_for;
use crate::types::{Locale, Strategy};

fn options(strategy: Strategy) -> GeneratorOptions {
  GeneratorOptions::new(
    vec![Locale::new("en"), Locale::new("de"), Locale::new("ru")],
    "en",
    strategy,
  )
}

fn pages(value: serde_json::Value) -> Vec<PageNode> {
  serde_json::from_value(value).unwrap()
}

fn paths(routes: &[PageNode]) -> Vec<&str> {
  routes.iter().map(|r| r.path.as_str()).collect()
}

#[test]
fn prefix_about() {
  let routes = generate_routes(&pages(json!([{"path": "/about"}])), &options(Strategy::Prefix))
    .unwrap();
  assert_eq!(paths(&routes), vec!["/:locale(en|de|ru)/about"]);
  assert_eq!(routes[0].name.as_deref(), Some("localized-about"));
}

#[test]
fn prefix_except_default_about() {
  let routes = generate_routes(
    &pages(json!([{"path": "/about", "name": "about"}])),
    &options(Strategy::PrefixExceptDefault),
  )
  .unwrap();
  assert_eq!(paths(&routes), vec!["/about", "/:locale(de|ru)/about"]);
  assert_eq!(routes[0].name.as_deref(), Some("about"));
  assert_eq!(routes[1].name.as_deref(), Some("localized-about"));
}

#[test]
fn custom_path_forks_locales() {
  let mut opts = options(Strategy::PrefixExceptDefault);
  opts.global_locale_routes =
    serde_json::from_value(json!({"about": {"de": "/ueber-uns"}})).unwrap();
  let routes = generate_routes(&pages(json!([{"path": "/about"}])), &opts).unwrap();
  assert_eq!(
    paths(&routes),
    vec!["/about", "/:locale(de)/ueber-uns", "/:locale(ru)/about"]
  );
  assert_eq!(routes[1].name.as_deref(), Some("localized-about-de"));
  assert_eq!(routes[2].name.as_deref(), Some("localized-about-ru"));
}

#[test]
fn files_locale_routes_apply_by_name() {
  let mut opts = options(Strategy::PrefixExceptDefault);
  opts.files_locale_routes =
    serde_json::from_value(json!({"about": {"de": "/ueber-uns"}})).unwrap();
  let routes =
    generate_routes(&pages(json!([{"path": "/about", "name": "about"}])), &opts).unwrap();
  assert!(paths(&routes).contains(&"/:locale(de)/ueber-uns"));
}

#[test]
fn nested_child_under_custom_parent() {
  let mut opts = options(Strategy::PrefixExceptDefault);
  opts.global_locale_routes =
    serde_json::from_value(json!({"/parent": {"de": "/eltern"}})).unwrap();
  let routes = generate_routes(
    &pages(json!([{"path": "/parent", "children": [{"path": "child"}]}])),
    &opts,
  )
  .unwrap();
  let de = routes.iter().find(|r| r.path == "/:locale(de)/eltern").unwrap();
  assert_eq!(de.children.len(), 1);
  assert_eq!(de.children[0].path, "child");
}

#[test]
fn alias_routes_share_canonical_children() {
  let routes = generate_routes(
    &pages(json!([{
      "path": "/about",
      "alias": ["/company", "/team/[member]"],
      "children": [{"path": "history"}]
    }])),
    &options(Strategy::Prefix),
  )
  .unwrap();
  assert_eq!(
    paths(&routes),
    vec![
      "/:locale(en|de|ru)/about",
      "/:locale(en|de|ru)/company",
      "/:locale(en|de|ru)/team/:member"
    ]
  );
  for alias in &routes[1..] {
    assert!(alias.name.is_none());
    assert_eq!(alias.children, routes[0].children);
  }
}

#[test]
fn no_prefix_redirect_and_sibling() {
  let opts: GeneratorOptions = serde_json::from_value(json!({
    "locales": [{"code": "en"}, {"code": "de"}],
    "defaultLocale": "en",
    "strategy": "no_prefix",
    "noPrefixRedirect": true,
    "globalLocaleRoutes": {"/about": {"en": "/about-us", "de": "/ueber-uns"}}
  }))
  .unwrap();
  let routes = generate_routes(&pages(json!([{"path": "/about"}])), &opts).unwrap();
  assert_eq!(paths(&routes), vec!["/about", "/about-us", "/ueber-uns"]);
  assert_eq!(routes[0].redirect.as_deref(), Some("/about-us"));
  assert_eq!(routes[2].name.as_deref(), Some("localized-about-de"));
}

#[test]
fn input_is_never_mutated() {
  let mut opts = options(Strategy::PrefixExceptDefault);
  opts.global_locale_routes = serde_json::from_value(json!({
    "/parent": {"de": "/eltern"},
    "/parent/child": {"ru": "rebenok"}
  }))
  .unwrap();
  let input = pages(json!([
    {
      "path": "/parent",
      "name": "parent",
      "alias": ["/p"],
      "meta": {"alias": ["/p"], "auth": true},
      "children": [{"path": "child", "name": "parent-child"}]
    },
    {"path": "/old", "redirect": "/parent"}
  ]));
  let before = input.clone();
  let routes = generate_routes(&input, &opts).unwrap();
  assert_eq!(input, before);
  assert!(routes.len() > input.len());
}

#[test]
fn generate_replaces_in_place() {
  let mut list = pages(json!([{"path": "/about"}]));
  generate(&mut list, &options(Strategy::PrefixExceptDefault)).unwrap();
  assert_eq!(paths(&list), vec!["/about", "/:locale(de|ru)/about"]);
}

#[test]
fn generate_error_leaves_pages_untouched() {
  let mut opts = options(Strategy::Prefix);
  opts.exclude_patterns = vec!["(".into()];
  let mut list = pages(json!([{"path": "/about"}]));
  let before = list.clone();
  let err = generate(&mut list, &opts).unwrap_err();
  assert_eq!(err.code(), "INVALID_EXCLUDE_PATTERN");
  assert_eq!(list, before);
}

#[test]
fn parse_pages_requires_path() {
  let err = parse_pages(r#"[{"name": "about"}]"#).unwrap_err();
  assert!(matches!(err, GenerateError::MalformedPage(_)));

  let ok = parse_pages(r#"[{"path": "/about", "children": [{"path": "team"}]}]"#).unwrap();
  assert_eq!(ok[0].children[0].path, "team");
}

#[test]
fn unknown_strategy_name() {
  let err = strategy_for("suffix").err().unwrap();
  assert_eq!(err.code(), "UNKNOWN_STRATEGY");
}

#[test]
fn cloudflare_keeps_bare_route_first() {
  let mut opts = options(Strategy::Prefix);
  opts.is_cloudflare_pages = true;
  let routes =
    generate_routes(&pages(json!([{"path": "/a"}, {"path": "/b"}])), &opts).unwrap();
  assert_eq!(
    paths(&routes),
    vec!["/a", "/b", "/:locale(en|de|ru)/a", "/:locale(en|de|ru)/b"]
  );
}

#[test]
fn restricted_route_only_for_allowed_locales() {
  let mut opts = options(Strategy::PrefixExceptDefault);
  opts.route_locales = serde_json::from_value(json!({"/imprint": ["de", "xx"]})).unwrap();
  let routes = generate_routes(&pages(json!([{"path": "/imprint"}])), &opts).unwrap();
  assert_eq!(paths(&routes), vec!["/:locale(de)/imprint"]);
}

#[test]
fn passthrough_pages_keep_their_shape() {
  let mut opts = options(Strategy::PrefixExceptDefault);
  opts.exclude_patterns = vec!["^/api".into()];
  opts.global_locale_routes = serde_json::from_value(json!({"/admin": false})).unwrap();
  let input = pages(json!([
    {"path": "/api/status", "name": "api-status"},
    {"path": "/admin", "name": "admin"},
    {"path": "/legacy", "redirect": "/"},
    {"path": "/"}
  ]));
  let routes = generate_routes(&input, &opts).unwrap();
  assert_eq!(&routes[..3], &input[..3]);
  assert_eq!(paths(&routes[3..]), vec!["/", "/:locale(de|ru)"]);
  assert_eq!(routes[4].name.as_deref(), Some("localized-index"));
}

#[test]
fn toml_options_end_to_end() {
  let opts = parse_options_toml(
    r#"
default_locale = "en"
strategy = "prefix_and_default"

[[locales]]
code = "en"

[[locales]]
code = "de"

[global_locale_routes."/about"]
de = "/ueber-uns"
"#,
  )
  .unwrap();
  let routes = generate_routes(&pages(json!([{"path": "/about"}])), &opts).unwrap();
  assert_eq!(
    paths(&routes),
    vec!["/about", "/:locale(en)/about", "/:locale(de)/ueber-uns"]
  );
}
