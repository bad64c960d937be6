use url::Url;

/// Resolve the `Access-Control-Allow-Origin` value for a request.
///
/// `allowed_pattern` is `*`, an exact origin, or a `*.domain` wildcard.
/// The wildcard match is anchored at a label boundary: the request hostname
/// must equal the base domain or end with `.` + base domain, so
/// `notexample.com` never matches `*.example.com`.
///
/// An empty return value means "no access": the caller still emits a
/// response, and the browser blocks the cross-origin read.
pub fn resolve_origin(allowed_pattern: &str, request_origin: Option<&str>) -> String {
    if allowed_pattern.is_empty() || allowed_pattern == "*" {
        return "*".to_string();
    }

    let Some(request_origin) = request_origin else {
        // No Origin header to match against; echo the pattern as-is.
        return allowed_pattern.to_string();
    };

    if let Some(base_domain) = allowed_pattern.strip_prefix("*.") {
        return match Url::parse(request_origin).ok().and_then(|u| {
            u.host_str()
                .map(|h| h == base_domain || h.ends_with(&format!(".{}", base_domain)))
        }) {
            Some(true) => request_origin.to_string(),
            _ => String::new(),
        };
    }

    if request_origin == allowed_pattern {
        allowed_pattern.to_string()
    } else {
        String::new()
    }
}
