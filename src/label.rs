//! Human-readable classification labels for discovered icons.
//!
//! Labels are derived two ways, depending on where the candidate came
//! from: from the path's filename pattern for conventional-path guesses,
//! and from the `rel`/`sizes`/`type` attributes for markup-declared icons.
//! In both cases the most specific match wins — an exact sized filename
//! beats the generic family name, which beats an extension-based fallback.

/// Apple touch icon sizes that get a dedicated label, most specific first.
const APPLE_SIZES: [&str; 7] = [
    "180x180", "152x152", "144x144", "120x120", "114x114", "72x72", "57x57",
];

/// Sized favicon filenames that get a dedicated label.
const FAVICON_SIZES: [&str; 6] = [
    "256x256", "192x192", "128x128", "96x96", "32x32", "16x16",
];

/// Asset directories that qualify a plain `.ico` label.
const ASSET_DIRS: [&str; 7] = [
    "/img/", "/images/", "/assets/", "/static/", "/public/", "/res/", "/resources/",
];

/// Classify a conventional favicon path by its filename pattern.
#[must_use]
pub fn from_path(path: &str) -> String {
    let file_name = path.rsplit('/').next().unwrap_or(path);

    if file_name.contains("apple-touch-icon") {
        for size in APPLE_SIZES {
            if file_name.contains(size) {
                return format!("Apple Touch Icon {size}");
            }
        }
        if file_name.contains("precomposed") {
            return "Apple Touch Icon (precomposed)".to_string();
        }
        return "Apple Touch Icon".to_string();
    }

    if file_name.contains("favicon") {
        for size in FAVICON_SIZES {
            if file_name.contains(size) {
                return format!("Favicon {size}");
            }
        }
        if file_name.contains(".svg") {
            return "SVG Favicon".to_string();
        }
        if file_name.contains(".png") {
            return "PNG Favicon".to_string();
        }
        if file_name.contains(".ico") {
            for dir in ASSET_DIRS {
                if path.contains(dir) {
                    let dir_name = dir.trim_matches('/');
                    return format!("Favicon ({dir_name} directory)");
                }
            }
            return "ICO Favicon".to_string();
        }
    }

    // Strip at most one image suffix; a stacked name like `logo.svg.png`
    // keeps its inner extension.
    let stem = [".ico", ".png", ".svg"]
        .iter()
        .find_map(|ext| file_name.strip_suffix(ext))
        .unwrap_or(file_name);
    if stem.is_empty() {
        "Favicon".to_string()
    } else {
        stem.to_string()
    }
}

/// Classify a markup-declared icon from its link attributes.
///
/// The `rel` family takes priority (apple-touch-icon over plain icon),
/// then an explicit `sizes` attribute, then SVG/PNG MIME hints.
#[must_use]
pub fn from_markup(rel: &str, sizes: &str, mime: &str) -> String {
    if rel.contains("apple-touch-icon") {
        if sizes.is_empty() {
            return "Apple Touch Icon".to_string();
        }
        return format!("Apple Touch Icon {sizes}");
    }

    if rel.contains("icon") {
        if !sizes.is_empty() {
            return format!("Favicon {sizes}");
        }
        if mime.contains("svg") {
            return "SVG Favicon".to_string();
        }
        if mime.contains("png") {
            return "PNG Favicon".to_string();
        }
        return "Favicon".to_string();
    }

    "Icon".to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn path_label_sized_apple_touch_icon() {
        assert_eq!(
            from_path("/apple-touch-icon-180x180.png"),
            "Apple Touch Icon 180x180"
        );
        assert_eq!(
            from_path("/apple-touch-icon-57x57.png"),
            "Apple Touch Icon 57x57"
        );
    }

    #[test]
    fn path_label_precomposed_apple_touch_icon() {
        assert_eq!(
            from_path("/apple-touch-icon-precomposed.png"),
            "Apple Touch Icon (precomposed)"
        );
        assert_eq!(from_path("/apple-touch-icon.png"), "Apple Touch Icon");
    }

    #[test]
    fn path_label_sized_favicon_beats_extension() {
        assert_eq!(from_path("/favicon-32x32.png"), "Favicon 32x32");
        assert_eq!(from_path("/favicon-256x256.png"), "Favicon 256x256");
    }

    #[test]
    fn path_label_extension_fallbacks() {
        assert_eq!(from_path("/favicon.svg"), "SVG Favicon");
        assert_eq!(from_path("/favicon.png"), "PNG Favicon");
        assert_eq!(from_path("/favicon.ico"), "ICO Favicon");
    }

    #[test]
    fn path_label_ico_qualified_by_directory() {
        assert_eq!(from_path("/img/favicon.ico"), "Favicon (img directory)");
        assert_eq!(
            from_path("/assets/favicon.ico"),
            "Favicon (assets directory)"
        );
        assert_eq!(
            from_path("/resources/favicon.ico"),
            "Favicon (resources directory)"
        );
    }

    #[test]
    fn path_label_falls_back_to_stem() {
        assert_eq!(from_path("/icon.png"), "icon");
        assert_eq!(from_path("/touch.ico"), "touch");
    }

    #[test]
    fn path_label_stem_strips_one_suffix_only() {
        assert_eq!(from_path("/logo.svg.png"), "logo.svg");
        assert_eq!(from_path("/logo.png.ico"), "logo.png");
    }

    #[test]
    fn markup_label_apple_rel_takes_priority() {
        assert_eq!(
            from_markup("apple-touch-icon", "152x152", "image/png"),
            "Apple Touch Icon 152x152"
        );
        assert_eq!(from_markup("apple-touch-icon", "", ""), "Apple Touch Icon");
    }

    #[test]
    fn markup_label_sizes_then_mime() {
        assert_eq!(from_markup("icon", "32x32", ""), "Favicon 32x32");
        assert_eq!(from_markup("icon", "", "image/svg+xml"), "SVG Favicon");
        assert_eq!(from_markup("icon", "", "image/png"), "PNG Favicon");
        assert_eq!(from_markup("icon", "", ""), "Favicon");
    }

    #[test]
    fn markup_label_unrecognized_rel() {
        assert_eq!(from_markup("mask", "", ""), "Icon");
    }
}
