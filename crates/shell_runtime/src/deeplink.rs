//! URL deep-link parsing shared by the site entrypoint and the shell boot
//! flow: `?open=<appId>[,<appId>...]&section=<n>`.

use serde::{Deserialize, Serialize};

use crate::model::AppId;

/// Parsed deep-link instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DeepLinkState {
    /// Apps to open, in request order.
    pub open: Vec<AppId>,
    /// Optional scroll section to jump to.
    pub section: Option<usize>,
}

/// Parses deep-link instructions from a query string.
///
/// Unknown keys are ignored and malformed values dropped; returns `None` when
/// the query requests nothing.
pub fn parse_deep_link_from_query(query: &str) -> Option<DeepLinkState> {
    let mut open = Vec::new();
    let mut section = None;

    for pair in query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
    {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "open" => {
                for raw in value.split(',') {
                    let raw = raw.trim();
                    if !raw.is_empty() {
                        open.push(AppId::new(raw));
                    }
                }
            }
            "section" => {
                section = value.trim().parse::<usize>().ok();
            }
            _ => {}
        }
    }

    if open.is_empty() && section.is_none() {
        return None;
    }
    Some(DeepLinkState { open, section })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_open_targets_and_section() {
        let parsed = parse_deep_link_from_query("?open=finder,settings&section=2").expect("link");
        assert_eq!(
            parsed.open,
            vec![AppId::new("finder"), AppId::new("settings")]
        );
        assert_eq!(parsed.section, Some(2));
    }

    #[test]
    fn ignores_unknown_keys_and_empty_targets() {
        let parsed =
            parse_deep_link_from_query("?utm_source=mail&open=,about,&theme=dark").expect("link");
        assert_eq!(parsed.open, vec![AppId::new("about")]);
        assert_eq!(parsed.section, None);
    }

    #[test]
    fn drops_malformed_section_values() {
        let parsed = parse_deep_link_from_query("?open=finder&section=two").expect("link");
        assert_eq!(parsed.section, None);
    }

    #[test]
    fn empty_query_requests_nothing() {
        assert_eq!(parse_deep_link_from_query(""), None);
        assert_eq!(parse_deep_link_from_query("?utm_source=mail"), None);
    }
}
