//! SVG serialization of a traced [`Document`].

use std::fmt::Write;

use stencil_trace::Document;

/// Serialize `document` as an SVG 1.2 Tiny file.
///
/// The canvas matches the source raster one unit per pixel. Each path is
/// written in document order with an even-odd fill and no stroke, which is
/// what cutting software expects for layered stencils.
pub fn document_to_svg(document: &Document) -> String {
    let (w, h) = (document.width(), document.height());
    let mut svg = String::with_capacity(256 + document.paths().len() * 128);
    svg.push_str("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n");
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.2\" baseProfile=\"tiny\" \
         width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
    );
    for path in document.paths() {
        let _ = writeln!(
            svg,
            "  <path d=\"{}\" fill=\"{}\" fill-rule=\"evenodd\" stroke=\"none\"/>",
            path.data(),
            path.fill_hex()
        );
    }
    svg.push_str("</svg>\n");
    svg
}
