/* src/route/engine/rust/src/path.rs */

//! Pure path and name helpers shared by extraction, context and strategies.

use std::sync::OnceLock;

use regex::Regex;

/// POSIX-style normalization: collapses empty and `.` segments, resolves
/// `..`, drops the trailing slash. Absolute paths stay absolute (`/` for
/// root); an empty or fully collapsed relative path becomes `""`.
pub fn normalize_path(path: &str) -> String {
  if path.is_empty() {
    return String::new();
  }
  let absolute = path.starts_with('/');
  let mut segments: Vec<&str> = Vec::new();
  for segment in path.split('/') {
    match segment {
      "" | "." => {}
      ".." => {
        if segments.last().is_some_and(|s| *s != "..") {
          segments.pop();
        } else if !absolute {
          segments.push("..");
        }
      }
      s => segments.push(s),
    }
  }
  let joined = segments.join("/");
  if absolute { format!("/{joined}") } else { joined }
}

pub fn remove_leading_slash(path: &str) -> &str {
  path.trim_start_matches('/')
}

/// Join a child segment onto a parent path and normalize the result.
pub fn join_path(parent: &str, child: &str) -> String {
  if parent.is_empty() {
    return normalize_path(child);
  }
  if child.is_empty() {
    return normalize_path(parent);
  }
  normalize_path(&format!("{parent}/{child}"))
}

/// A leading `/` in `segment` replaces the parent path entirely.
pub fn resolve_child_path(parent: &str, segment: &str) -> String {
  if segment.starts_with('/') { normalize_path(segment) } else { join_path(parent, segment) }
}

/// Route name derived from a path: `/users/:id` -> `users-id`, `/` -> `index`.
pub fn slugify_path(path: &str) -> String {
  let slug: String = remove_leading_slash(path)
    .trim_end_matches('/')
    .replace('/', "-")
    .chars()
    .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '_'))
    .collect();
  if slug.is_empty() { "index".to_string() } else { slug }
}

/// `:locale(en|de)`, or `:locale(<custom>)` when a matcher override is set.
pub fn locale_segment<S: AsRef<str>>(codes: &[S], custom_regex: Option<&str>) -> String {
  match custom_regex {
    Some(pattern) => format!(":locale({pattern})"),
    None => {
      let alternation = codes.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("|");
      format!(":locale({alternation})")
    }
  }
}

/// `/` + locale segment + `/` + `base_path`, normalized.
pub fn build_full_path<S: AsRef<str>>(
  codes: &[S],
  base_path: &str,
  custom_regex: Option<&str>,
) -> String {
  let segment = locale_segment(codes, custom_regex);
  normalize_path(&format!("/{segment}/{}", remove_leading_slash(base_path)))
}

fn catch_all_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"\[\.\.\.([^\]/]+)\]").expect("catch-all pattern compiles"))
}

fn optional_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"\[\[([^\]/]+)\]\]").expect("optional pattern compiles"))
}

fn param_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"\[([^\]/]+)\]").expect("param pattern compiles"))
}

/// File-route bracket syntax to router syntax:
/// `[...slug]` -> `:slug(.*)*`, `[[opt]]` -> `:opt?`, `[id]` -> `:id`.
pub fn normalize_dynamic_segments(path: &str) -> String {
  if !path.contains('[') {
    return path.to_string();
  }
  let out = catch_all_re().replace_all(path, ":${1}(.*)*");
  let out = optional_re().replace_all(&out, ":${1}?");
  param_re().replace_all(&out, ":${1}").into_owned()
}

/// Lookup key for customization maps: normalized, router syntax, no
/// leading slash. Route names pass through unchanged.
pub fn path_key(path: &str) -> String {
  remove_leading_slash(&normalize_path(&normalize_dynamic_segments(path))).to_string()
}
