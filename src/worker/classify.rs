use url::Url;

use crate::domain::entities::{HttpMethod, HttpRequest, RequestDestination};
use crate::shared::config::CacheConfig;

/// File extensions treated as image traffic even without a destination hint.
const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "webp", "svg", "ico"];

/// Caching strategy chosen for an intercepted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestClass {
    /// Forwarded untouched: non-GET or a non-http(s) scheme.
    Passthrough,
    /// Remote database traffic: network-first with timeout.
    Api,
    /// Image asset: cache-first against the image bucket.
    Image,
    /// Font or stylesheet: cache-first against the static bucket.
    StaticAsset,
    /// Full-page navigation: network-first with shell fallback.
    Navigation,
    /// Everything else same-origin: stale-while-revalidate.
    Script,
}

/// Pure classification of an intercepted request, evaluated in priority
/// order. Keeping this free of I/O makes the routing table testable on its
/// own.
pub fn classify(request: &HttpRequest, config: &CacheConfig) -> RequestClass {
    if request.method != HttpMethod::Get {
        return RequestClass::Passthrough;
    }
    if !matches!(request.url.scheme(), "http" | "https") {
        return RequestClass::Passthrough;
    }

    let host = request.url.host_str().unwrap_or_default();

    if host.contains(&config.api_host_fragment) {
        return RequestClass::Api;
    }

    if request.destination == RequestDestination::Image || is_image_path(request) {
        return RequestClass::Image;
    }

    if matches!(
        request.destination,
        RequestDestination::Font | RequestDestination::Style
    ) || config.font_hosts.iter().any(|h| h == host)
    {
        return RequestClass::StaticAsset;
    }

    if request.destination == RequestDestination::Document {
        return RequestClass::Navigation;
    }

    // The leftover stale-while-revalidate rule only covers same-origin
    // traffic; anything else goes to the network untouched.
    if !is_same_origin(request, config) {
        return RequestClass::Passthrough;
    }

    RequestClass::Script
}

fn is_same_origin(request: &HttpRequest, config: &CacheConfig) -> bool {
    Url::parse(&config.app_origin)
        .map(|origin| origin.origin() == request.url.origin())
        .unwrap_or(false)
}

fn is_image_path(request: &HttpRequest) -> bool {
    request
        .path_extension()
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::HttpMethod;
    use crate::shared::config::AppConfig;

    fn config() -> CacheConfig {
        AppConfig::default().cache
    }

    fn get(url: &str, destination: RequestDestination) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, url, destination).unwrap()
    }

    #[test]
    fn non_get_requests_pass_through() {
        let req = HttpRequest::new(
            HttpMethod::Post,
            "https://abc.supabase.co/rest/v1/projects",
            RequestDestination::Other,
        )
        .unwrap();
        assert_eq!(classify(&req, &config()), RequestClass::Passthrough);
    }

    #[test]
    fn extension_schemes_pass_through() {
        let req = get(
            "chrome-extension://abcdef/content.js",
            RequestDestination::Script,
        );
        assert_eq!(classify(&req, &config()), RequestClass::Passthrough);
    }

    #[test]
    fn api_origin_wins_over_other_rules() {
        // Substring match on the host, and higher priority than the image rule.
        let req = get(
            "https://abc.supabase.co/storage/v1/photo.jpg",
            RequestDestination::Image,
        );
        assert_eq!(classify(&req, &config()), RequestClass::Api);
    }

    #[test]
    fn images_match_by_destination_or_extension() {
        let by_dest = get(
            "https://cdn.armortrack.example/asset",
            RequestDestination::Image,
        );
        assert_eq!(classify(&by_dest, &config()), RequestClass::Image);

        let by_ext = get(
            "https://cdn.armortrack.example/photos/door-panel.WEBP",
            RequestDestination::Other,
        );
        assert_eq!(classify(&by_ext, &config()), RequestClass::Image);
    }

    #[test]
    fn fonts_and_styles_are_static_assets() {
        let font = get(
            "https://fonts.gstatic.com/s/inter/v12/inter.woff2",
            RequestDestination::Other,
        );
        assert_eq!(classify(&font, &config()), RequestClass::StaticAsset);

        let style = get(
            "https://app.armortrack.example/assets/index.css",
            RequestDestination::Style,
        );
        assert_eq!(classify(&style, &config()), RequestClass::StaticAsset);
    }

    #[test]
    fn cross_origin_misc_requests_pass_through() {
        // Third-party traffic outside the font allow-list must never land
        // in the static bucket.
        let telemetry = get(
            "https://telemetry.thirdparty.example/collect",
            RequestDestination::Other,
        );
        assert_eq!(classify(&telemetry, &config()), RequestClass::Passthrough);

        let same_origin = get(
            "https://app.armortrack.example/assets/vendor.js",
            RequestDestination::Other,
        );
        assert_eq!(classify(&same_origin, &config()), RequestClass::Script);
    }

    #[test]
    fn navigations_and_scripts_are_distinguished() {
        let nav = get(
            "https://app.armortrack.example/projects/42",
            RequestDestination::Document,
        );
        assert_eq!(classify(&nav, &config()), RequestClass::Navigation);

        let script = get(
            "https://app.armortrack.example/assets/index.js",
            RequestDestination::Script,
        );
        assert_eq!(classify(&script, &config()), RequestClass::Script);
    }
}
