use web_sys::window;

use crate::config;

/// Opens `url` in a new browsing context. Nothing is reported back if the
/// target is unreachable.
pub fn open_external(url: &str) {
    log::info!("Opening external link {}", url);
    if let Some(window) = window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            log::warn!("Browser refused to open {}: {:?}", url, e);
        }
    }
}

/// Player deep link for an AniList media id, tinted with `color`.
pub fn watch_url(id: u32, color: &str) -> String {
    let color = color.trim().trim_start_matches('#');
    let color = if color.is_empty() {
        config::DEFAULT_ACCENT_COLOR.trim_start_matches('#')
    } else {
        color
    };
    format!(
        "https://{}/anime/{}?color={}",
        config::PLAYER_HOST,
        id,
        urlencoding::encode(color)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url_strips_hash() {
        assert_eq!(
            watch_url(21, "#e4a15d"),
            format!("https://{}/anime/21?color=e4a15d", config::PLAYER_HOST)
        );
    }

    #[test]
    fn test_watch_url_falls_back_to_default_color() {
        assert_eq!(
            watch_url(1, ""),
            format!("https://{}/anime/1?color=7EB2FF", config::PLAYER_HOST)
        );
    }

    #[test]
    fn test_watch_url_encodes_color() {
        let url = watch_url(5, "red blue");
        assert!(url.ends_with("?color=red%20blue"), "{}", url);
    }
}
