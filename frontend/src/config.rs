use web_sys::window;

pub fn get_api_base_url() -> String {
    // On the production domain the backend is served behind the same
    // host, so relative URLs are enough.
    if let Some(window) = window() {
        if let Ok(location) = window.location().host() {
            if location.contains("luckydraw.app") {
                return "".to_string();
            }

            // Use the current hostname and port for API requests so the
            // app also works when opened from another machine on the LAN.
            let protocol = window
                .location()
                .protocol()
                .unwrap_or_else(|_| "http:".to_string());
            return format!("{}//{}", protocol, location);
        }
    }

    // Default to 127.0.0.1 for development
    "http://127.0.0.1:8000".to_string()
}

pub fn get_asset_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", get_api_base_url(), path)
    }
}
