/// Display name for an OS id; unknown ids pass through unchanged
pub fn platform_label(os: &str) -> String {
    match os.to_ascii_lowercase().as_str() {
        "windows" => "Windows".to_string(),
        "macos" => "macOS".to_string(),
        "linux" => "Linux".to_string(),
        _ => os.to_string(),
    }
}

/// `Mobile` layout on macOS, `Desktop` everywhere else
pub fn ui_label(os: &str) -> &'static str {
    if os.eq_ignore_ascii_case("macos") {
        "Mobile"
    } else {
        "Desktop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_platforms() {
        assert_eq!(platform_label("windows"), "Windows");
        assert_eq!(platform_label("MacOS"), "macOS");
        assert_eq!(platform_label("linux"), "Linux");
    }

    #[test]
    fn unknown_platform_keeps_case() {
        assert_eq!(platform_label("Android"), "Android");
    }

    #[test]
    fn ui_mode() {
        assert_eq!(ui_label("macos"), "Mobile");
        assert_eq!(ui_label("windows"), "Desktop");
    }
}
