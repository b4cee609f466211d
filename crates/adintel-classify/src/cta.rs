//! CTA button resolution and redirect-through landing-page decoding.

use std::sync::LazyLock;

use adintel_core::{CtaLink, LandingPage};
use percent_encoding::percent_decode_str;
use regex::Regex;

/// Card chrome that reaches us as CTA text on some layouts; never a real
/// call to action. Substring match, case-insensitive.
static BOILERPLATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)See ad details|Like|Comment|Share").expect("valid regex"));

/// Hosts that wrap the real destination in a `u` query parameter.
const REDIRECT_HOST: &str = "l.facebook.com";

#[derive(Debug, Default)]
pub(crate) struct CtaOutcome {
    pub cta_button: Option<String>,
    pub landing: Option<LandingPage>,
}

/// Resolve a raw CTA link into the button text and, when the href is a
/// redirect-through URL, the decoded landing page.
///
/// Boilerplate CTA text discards the whole link — the extraction side found
/// card chrome, not a call to action. Decode failures leave `landing` unset
/// and never abort classification.
pub(crate) fn resolve_cta(cta: &CtaLink) -> CtaOutcome {
    if BOILERPLATE.is_match(&cta.text) {
        return CtaOutcome::default();
    }

    let landing = cta.href.as_deref().and_then(|href| {
        if !href.contains(REDIRECT_HOST) {
            return None;
        }
        match decode_destination(href) {
            Some(url) => match host_of(&url) {
                Some(domain) => Some(LandingPage {
                    url,
                    domain,
                    cta_text: cta.text.clone(),
                }),
                None => {
                    tracing::warn!(href, "redirect destination has no parseable host");
                    None
                }
            },
            None => None,
        }
    });

    CtaOutcome {
        cta_button: Some(cta.text.clone()),
        landing,
    }
}

/// Extract and percent-decode the `u` destination parameter from a
/// redirect-through href. Decodes twice: once for the query-string encoding
/// and once more for destinations that were encoded before wrapping.
fn decode_destination(href: &str) -> Option<String> {
    let query = href.split_once('?')?.1;
    let raw = query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == "u").then_some(value)
    })?;

    let once = percent_decode_str(raw).decode_utf8().ok()?.into_owned();
    let twice = percent_decode_str(&once).decode_utf8().ok()?.into_owned();
    Some(twice)
}

/// Hostname of a URL string: the authority between `://` and the first
/// delimiter, minus userinfo and port, lowercased.
fn host_of(url: &str) -> Option<String> {
    let after_scheme = url.split_once("://")?.1;
    let authority = after_scheme
        .split(['/', '?', '#'])
        .next()
        .filter(|s| !s.is_empty())?;
    let host = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);
    let host = host.split(':').next().filter(|s| !s.is_empty())?;
    Some(host.to_ascii_lowercase())
}
