use std::path::{Path, PathBuf};

/// Icon shown before the first fetch and whenever the API hands back a
/// code we have no asset for.
pub const DEFAULT_ICON: &str = "01d";

/// Path of the icon bitmap for an icon code: `{res}/icons/{code}.png`.
///
/// The code comes off the wire, so anything that is not short plain
/// alphanumerics falls back to the default before touching the
/// filesystem.
pub fn icon_path(res_dir: &Path, code: &str) -> PathBuf {
    res_dir.join("icons").join(format!("{}.png", sanitized(code)))
}

/// Window icon, the clear-day asset.
pub fn window_icon_path(res_dir: &Path) -> PathBuf {
    icon_path(res_dir, DEFAULT_ICON)
}

fn sanitized(code: &str) -> &str {
    let ok = !code.is_empty()
        && code.len() <= 4
        && code.chars().all(|c| c.is_ascii_alphanumeric());
    if ok {
        code
    } else {
        DEFAULT_ICON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_path_is_code_addressed() {
        let path = icon_path(Path::new("res"), "10n");
        assert_eq!(path, Path::new("res").join("icons").join("10n.png"));
    }

    #[test]
    fn suspicious_codes_fall_back_to_default() {
        let res = Path::new("res");
        assert_eq!(icon_path(res, "../etc"), icon_path(res, DEFAULT_ICON));
        assert_eq!(icon_path(res, ""), icon_path(res, DEFAULT_ICON));
        assert_eq!(icon_path(res, "01d.png"), icon_path(res, DEFAULT_ICON));
    }

    #[test]
    fn window_icon_is_the_clear_day_asset() {
        assert_eq!(
            window_icon_path(Path::new("res")),
            Path::new("res").join("icons").join("01d.png")
        );
    }
}
