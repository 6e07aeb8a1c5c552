//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Assert bytes are a PNG file
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&PNG_SIGNATURE),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Collect the `(d, fill)` attribute pairs of every `<path>` element
pub fn svg_paths(svg: &str) -> Vec<(String, String)> {
    svg.lines()
        .filter(|line| line.trim_start().starts_with("<path "))
        .map(|line| (attribute(line, "d"), attribute(line, "fill")))
        .collect()
}

fn attribute(element: &str, name: &str) -> String {
    let key = format!(" {name}=\"");
    let start = element
        .find(&key)
        .unwrap_or_else(|| panic!("Missing {name} in {element}"))
        + key.len();
    let len = element[start..]
        .find('"')
        .unwrap_or_else(|| panic!("Unterminated {name} in {element}"));
    element[start..start + len].to_string()
}

/// Assert the SVG root declares a `width` x `height` canvas
pub fn assert_svg_canvas(svg: &str, width: usize, height: usize) {
    let root = svg
        .lines()
        .find(|line| line.starts_with("<svg "))
        .expect("Should have an <svg> root element");
    assert_eq!(attribute(root, "width"), width.to_string());
    assert_eq!(attribute(root, "height"), height.to_string());
    assert_eq!(attribute(root, "viewBox"), format!("0 0 {width} {height}"));
    assert_eq!(attribute(root, "baseProfile"), "tiny");
}
