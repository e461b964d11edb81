//! Admin notices: request-scoped advisory banners computed from current state
//! and the redirect parameters. Never persisted.

use super::page::esc_attr;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Warning => "warning",
            NoticeKind::Error => "error",
        }
    }

    /// Parse the `alert-type` request parameter; anything unrecognized is
    /// treated as success.
    pub fn parse(s: &str) -> Self {
        match s {
            "warning" => NoticeKind::Warning,
            "error" => NoticeKind::Error,
            _ => NoticeKind::Success,
        }
    }
}

/// One advisory banner shown at the top of the settings page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    /// Sanitized rich text; only `<a>` and `<strong>` survive.
    pub message: String,
    pub dismissible: bool,
}

/// Compute the notice set for one request.
///
/// The configuration-health warning comes first, then the last-action result
/// carried on the redirect, when both apply.
pub fn compute_notices(
    enabled_providers: usize,
    settings_url: &str,
    alert: Option<&str>,
    alert_type: Option<&str>,
) -> Vec<Notice> {
    let mut notices = Vec::new();

    if enabled_providers == 0 {
        notices.push(Notice {
            kind: NoticeKind::Warning,
            message: format!(
                "<strong>Quick Login</strong> plugin is active, but no login providers are \
                 enabled. <a href=\"{}\">Enable providers now</a> and let visitors log in with \
                 Facebook, Twitter or Google",
                esc_attr(settings_url)
            ),
            dismissible: false,
        });
    }

    if let Some(message) = alert {
        notices.push(Notice {
            kind: alert_type.map(NoticeKind::parse).unwrap_or(NoticeKind::Success),
            message: sanitize_message(message),
            dismissible: true,
        });
    }

    notices
}

/// Render the notice set as markup.
pub fn render_notices(notices: &[Notice]) -> String {
    let mut out = String::new();
    for notice in notices {
        let dismissible = if notice.dismissible {
            " is-dismissible"
        } else {
            ""
        };
        out.push_str(&format!(
            "<div class=\"notice notice-{}{}\"><p>{}</p></div>\n",
            notice.kind.as_str(),
            dismissible,
            notice.message,
        ));
    }
    out
}

/// Sanitize notice text: `<a>` (with `href`/`title` only) and `<strong>` are
/// kept, every other tag is stripped. `javascript:` hrefs are dropped.
pub fn sanitize_message(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(idx) = rest.find('<') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];

        match rest[1..].find('>') {
            Some(end) => {
                let tag = &rest[1..=end];
                if let Some(rendered) = allowed_tag(tag) {
                    out.push_str(&rendered);
                }
                rest = &rest[end + 2..];
            }
            None => {
                // Dangling '<' with no closing bracket.
                out.push_str("&lt;");
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn allowed_tag(tag: &str) -> Option<String> {
    let trimmed = tag.trim();
    let lower = trimmed.to_ascii_lowercase();

    match lower.as_str() {
        "strong" => return Some("<strong>".into()),
        "/strong" => return Some("</strong>".into()),
        "/a" => return Some("</a>".into()),
        _ => {}
    }

    if lower == "a" || lower.starts_with("a ") || lower.starts_with("a\t") {
        let mut out = String::from("<a");
        for attr in ["href", "title"] {
            if let Some(value) = attr_value(trimmed, attr) {
                if attr == "href"
                    && value
                        .trim_start()
                        .to_ascii_lowercase()
                        .starts_with("javascript:")
                {
                    continue;
                }
                out.push_str(&format!(" {attr}=\"{}\"", esc_attr(&value)));
            }
        }
        out.push('>');
        return Some(out);
    }

    None
}

/// Extract the value of `name="..."` (double-, single- or unquoted) from the
/// inside of a tag.
fn attr_value(tag: &str, name: &str) -> Option<String> {
    let lower = tag.to_ascii_lowercase();
    let needle = format!("{name}=");
    let mut search = 0;

    while let Some(pos) = lower[search..].find(&needle) {
        let start = search + pos;
        let value_start = start + needle.len();

        // The attribute name must start a word.
        if start > 0 && !lower.as_bytes()[start - 1].is_ascii_whitespace() {
            search = value_start;
            continue;
        }

        let rest = &tag[value_start..];
        let value = if let Some(stripped) = rest.strip_prefix('"') {
            stripped.split('"').next().unwrap_or("")
        } else if let Some(stripped) = rest.strip_prefix('\'') {
            stripped.split('\'').next().unwrap_or("")
        } else {
            rest.split_whitespace().next().unwrap_or("")
        };
        return Some(value.to_string());
    }

    None
}
