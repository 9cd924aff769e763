/* src/route/engine/rust/src/builder.rs */

use crate::types::PageNode;

/// Field overrides applied by `create_route`. Unset fields are copied from
/// the source page.
#[derive(Debug, Clone, Default)]
pub struct RouteOverrides {
  path: Option<String>,
  name: Option<String>,
  children: Option<Vec<PageNode>>,
  alias: Option<Vec<String>>,
  redirect: Option<String>,
}

impl RouteOverrides {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn path(mut self, path: impl Into<String>) -> Self {
    self.path = Some(path.into());
    self
  }

  pub fn name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  pub fn children(mut self, children: Vec<PageNode>) -> Self {
    self.children = Some(children);
    self
  }

  pub fn alias(mut self, alias: Vec<String>) -> Self {
    self.alias = Some(alias);
    self
  }

  /// Empty alias list; also drops `meta.alias`.
  pub fn clear_alias(self) -> Self {
    self.alias(Vec::new())
  }

  pub fn redirect(mut self, target: impl Into<String>) -> Self {
    self.redirect = Some(target.into());
    self
  }
}

/// New route from `page` plus overrides. The source is only read.
pub fn create_route(page: &PageNode, overrides: RouteOverrides) -> PageNode {
  let mut meta = page.meta.clone();
  if overrides.alias.as_ref().is_some_and(Vec::is_empty) {
    if let Some(meta) = meta.as_mut() {
      meta.remove("alias");
    }
    if meta.as_ref().is_some_and(serde_json::Map::is_empty) {
      meta = None;
    }
  }

  PageNode {
    path: overrides.path.unwrap_or_else(|| page.path.clone()),
    name: overrides.name.or_else(|| page.name.clone()),
    children: overrides.children.unwrap_or_else(|| page.children.clone()),
    alias: overrides.alias.unwrap_or_else(|| page.alias.clone()),
    meta,
    file: page.file.clone(),
    redirect: overrides.redirect.or_else(|| page.redirect.clone()),
  }
}
