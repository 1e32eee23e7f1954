// src/utils/name.rs

//! Filename derivation for downloaded assets.

/// Replace every character outside {alphanumeric, `.`, `_`, `-`} with `_`.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Last path segment of a link with query and fragment stripped.
pub fn link_basename(link: &str) -> String {
    let path = link
        .split(['?', '#'])
        .next()
        .unwrap_or(link);
    path.rsplit('/').next().unwrap_or("").to_string()
}

/// Derive the final filename for a downloaded asset.
///
/// A detected DOI names the file `<doi>.pdf` with its slashes flattened
/// to underscores; otherwise the sanitized link basename is kept under
/// the `NO_DOI_` prefix. Both forms pass the sanitizer.
pub fn final_filename(doi: Option<&str>, link: &str) -> String {
    match doi {
        Some(doi) => sanitize(&format!("{}.pdf", doi.replace('/', "_"))),
        None => format!("NO_DOI_{}", sanitize(&link_basename(link))),
    }
}
