/* src/route/engine/rust/src/generator.rs */

//! Entry points: build the context once, expand every top-level page with
//! the configured strategy, post-process, hand back the new route list.

use crate::config::GeneratorOptions;
use crate::context::GeneratorContext;
use crate::errors::GenerateError;
use crate::strategy::{GeneratedRoute, process_page};
use crate::types::PageNode;

#[cfg(test)]
mod tests;

/// Parse a JSON page tree. A node without `path` is fatal.
pub fn parse_pages(json: &str) -> Result<Vec<PageNode>, GenerateError> {
  serde_json::from_str(json).map_err(|e| GenerateError::MalformedPage(e.to_string()))
}

/// Expand `pages` into the full localized route set. `pages` is only read.
pub fn generate_routes(
  pages: &[PageNode],
  options: &GeneratorOptions,
) -> Result<Vec<PageNode>, GenerateError> {
  let ctx = GeneratorContext::new(pages, options)?;
  let strategy = ctx.strategy().handler();

  let mut routes = Vec::with_capacity(pages.len() * (ctx.locale_codes().len() + 1));
  for page in pages {
    routes.extend(process_page(strategy, page, &ctx));
  }
  let routes = strategy.post_process(routes, &ctx);

  tracing::debug!(
    strategy = %strategy.strategy(),
    pages = pages.len(),
    routes = routes.len(),
    "generated localized routes"
  );
  Ok(routes.into_iter().map(GeneratedRoute::into_page).collect())
}

/// In-place form: on success `pages` holds the generated routes, on error
/// it is left as it was.
pub fn generate(
  pages: &mut Vec<PageNode>,
  options: &GeneratorOptions,
) -> Result<(), GenerateError> {
  *pages = generate_routes(pages, options)?;
  Ok(())
}
