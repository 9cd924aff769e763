/* src/route/engine/rust/src/extract.rs */

use std::collections::BTreeMap;

use crate::path::{join_path, normalize_dynamic_segments, path_key, slugify_path};
use crate::types::{LocaleRouteConfig, LocaleRouteEntry, LocalizedPathsMap, PageNode};

/// Canonicalize config keys with `path_key` and rewrite bracket params in
/// custom path values. On key collision the first entry (in key order) wins.
pub(crate) fn canonical_route_config(config: &LocaleRouteConfig) -> LocaleRouteConfig {
  let mut out = LocaleRouteConfig::new();
  for (key, entry) in config {
    let canonical = path_key(key);
    if out.contains_key(&canonical) {
      tracing::warn!(key = %key, canonical = %canonical, "duplicate locale route key ignored");
      continue;
    }
    let entry = match entry {
      LocaleRouteEntry::Paths(paths) => LocaleRouteEntry::Paths(
        paths.iter().map(|(code, p)| (code.clone(), normalize_dynamic_segments(p))).collect(),
      ),
      toggle @ LocaleRouteEntry::Toggle(_) => toggle.clone(),
    };
    out.insert(canonical, entry);
  }
  out
}

/// Route name used for config lookups and generated names.
pub(crate) fn page_base_name(page: &PageNode) -> String {
  page.name.clone().unwrap_or_else(|| slugify_path(&page.path))
}

/// Global entry for a page: by path key first, then by route name.
pub(crate) fn lookup_entry<'a>(
  config: &'a LocaleRouteConfig,
  key: &str,
  page_name: &str,
) -> Option<&'a LocaleRouteEntry> {
  config.get(key).or_else(|| config.get(page_name))
}

/// Walk the page tree once and merge both customization sources into
/// `path key -> locale -> custom path`.
///
/// Per-file entries are consulted only when no global entry exists; a
/// global `true` or `false` carries no paths. Keys are always built from original segments.
pub fn extract_localized_paths(
  pages: &[PageNode],
  global: &LocaleRouteConfig,
  files: &LocaleRouteConfig,
  parent_path: &str,
) -> LocalizedPathsMap {
  let global = canonical_route_config(global);
  let files = canonical_route_config(files);
  let mut map = BTreeMap::new();
  collect(pages, &global, &files, parent_path, &mut map);
  map
}

fn collect(
  pages: &[PageNode],
  global: &LocaleRouteConfig,
  files: &LocaleRouteConfig,
  parent_path: &str,
  map: &mut LocalizedPathsMap,
) {
  for page in pages {
    let full_path = join_path(parent_path, &normalize_dynamic_segments(&page.path));
    let key = path_key(&full_path);
    let page_name = page_base_name(page);

    match lookup_entry(global, &key, &page_name) {
      Some(LocaleRouteEntry::Paths(paths)) => {
        map.insert(key, paths.clone());
      }
      // a global toggle is still a global entry: no paths, no fallback
      Some(LocaleRouteEntry::Toggle(_)) => {}
      None => {
        if let Some(LocaleRouteEntry::Paths(paths)) = files.get(&page_name) {
          map.insert(key, paths.clone());
        }
      }
    }

    if !page.children.is_empty() {
      let child_parent = if full_path.is_empty() { "/".to_string() } else { full_path };
      collect(&page.children, global, files, &child_parent, map);
    }
  }
}
