use web_sys::window;

/// Admin access token, stored by the login flow outside this app.
pub fn get_auth_token() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item("accessToken").ok().flatten())
        .or_else(|| {
            window()
                .and_then(|w| w.session_storage().ok().flatten())
                .and_then(|s| s.get_item("accessToken").ok().flatten())
        })
}

/// Trims an ISO datetime down to its date part for display.
pub fn format_date(iso: &str) -> &str {
    iso.split('T').next().unwrap_or(iso)
}

/// Today's date as YYYY-MM-DD, for date-input defaults.
pub fn today() -> String {
    let iso = js_sys::Date::new_0().to_iso_string();
    let iso = iso.as_string().unwrap_or_default();
    iso.split('T').next().unwrap_or("").to_string()
}
