//! Device classification for wallet deep links.
//!
//! A browser is *redirectable* when it runs on a mobile device and is not a
//! wallet app's own in-app browser. Only then does connecting to a wallet
//! that is not injected go through the wallet's deep link.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::DeviceContext;

static MOBILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)Mobile|iP(hone|od|ad)|Android|BlackBerry|IEMobile|Kindle|NetFront|Silk-Accelerated|(hpw|web)OS|Fennec|Minimo|Opera M(obi|ini)|Blazer|Dolfin|Dolphin|Skyfire|Zune",
    )
    .expect("mobile user agent pattern is valid")
});

static IOS_WEBKIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(iPhone|iPod|iPad).*AppleWebKit").expect("iOS webview pattern is valid")
});

static ANDROID_WEBVIEW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Android.*Version/[0-9.]+.*Chrome/[^ ]+ Mobile")
        .expect("Android webview pattern is valid")
});

pub fn is_mobile(user_agent: &str) -> bool {
    MOBILE.is_match(user_agent)
}

/// Embedded webviews (wallet in-app browsers) rather than the system browser.
///
/// iOS webviews carry `AppleWebKit` without a trailing `Safari` token;
/// Android webviews carry a `Version/x.y` token before `Chrome/... Mobile`.
pub fn is_in_app_browser(user_agent: &str) -> bool {
    let ios_webview = IOS_WEBKIT.find(user_agent).is_some_and(|m| {
        !user_agent[m.end()..]
            .to_ascii_lowercase()
            .contains("safari")
    });
    ios_webview || ANDROID_WEBVIEW.is_match(user_agent)
}

pub fn is_redirectable(user_agent: &str) -> bool {
    is_mobile(user_agent) && !is_in_app_browser(user_agent)
}

impl DeviceContext {
    pub fn from_user_agent(user_agent: &str) -> Self {
        Self {
            redirectable: is_redirectable(user_agent),
        }
    }

    /// Classify the current browser. Defaults to desktop when unknown.
    pub fn detect() -> Self {
        web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .map(|ua| Self::from_user_agent(&ua))
            .unwrap_or_default()
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_detect_matches_navigator() {
        let ua = web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_default();
        assert_eq!(DeviceContext::detect(), DeviceContext::from_user_agent(&ua));
    }
}
