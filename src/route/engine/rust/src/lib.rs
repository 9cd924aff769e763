/* src/route/engine/rust/src/lib.rs */

//! Localized route-tree generator.
//!
//! Takes a framework-neutral page tree plus a locale configuration and
//! produces every router entry needed to serve each locale under one of
//! four prefixing strategies, honouring per-locale custom paths, aliases
//! and per-route locale restrictions. Runs once at build/setup time; no
//! request-time routing happens here.

pub mod alias;
pub mod builder;
pub mod config;
pub mod context;
pub mod errors;
pub mod extract;
pub mod generator;
pub mod path;
pub mod strategy;
pub mod types;

pub use builder::{RouteOverrides, create_route};
pub use config::{GeneratorOptions, load_options, parse_options_json, parse_options_toml};
pub use context::GeneratorContext;
pub use errors::GenerateError;
pub use extract::extract_localized_paths;
pub use generator::{generate, generate_routes, parse_pages};
pub use strategy::{GeneratedRoute, RouteKind, RouteStrategy, strategy_for};
pub use types::{
  Locale, LocaleRouteConfig, LocaleRouteEntry, LocalizedPathsMap, PageNode, RouteLocalesConfig,
  Strategy,
};
