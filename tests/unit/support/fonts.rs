use std::path::Path;

/// Locate any usable system font for shaping/rendering tests.
///
/// Tests that need a real font skip themselves when none is installed, the
/// same gating used for environment-dependent tooling elsewhere.
pub fn find_system_font() -> Option<Vec<u8>> {
    let roots = [
        "/usr/share/fonts",
        "/usr/local/share/fonts",
        "/System/Library/Fonts",
        "C:\\Windows\\Fonts",
    ];
    roots.iter().find_map(|root| scan_dir(Path::new(root)))
}

fn scan_dir(dir: &Path) -> Option<Vec<u8>> {
    let rd = std::fs::read_dir(dir).ok()?;
    for entry in rd.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if let Some(bytes) = scan_dir(&path) {
                return Some(bytes);
            }
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" {
            continue;
        }
        if let Ok(bytes) = std::fs::read(&path) {
            return Some(bytes);
        }
    }
    None
}
