/// Resolves an overlay URL returned by the backend.
///
/// Absolute `http(s)://` URLs pass through untouched. Anything else is treated
/// as a path below `base`. `None` means there is no image to show.
pub fn to_absolute(url: Option<&str>, base: &str) -> Option<String> {
    let url = url.filter(|value| !value.is_empty())?;

    if has_http_scheme(url) {
        return Some(url.to_string());
    }

    let base = base.strip_suffix('/').unwrap_or(base);
    let path = url.trim_start_matches('/');
    Some(format!("{base}/{path}"))
}

/// Joins an API route onto the configured base without doubling the slash.
pub fn endpoint(base: &str, route: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    format!("{base}/{}", route.trim_start_matches('/'))
}

fn has_http_scheme(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}
