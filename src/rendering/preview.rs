//! PNG previews: the rasterized SVG and the posterized raster.

use std::io::Cursor;

use resvg::usvg::{self, Transform};
use stencil_trace::IndexedImage;
use tiny_skia::Pixmap;

use crate::error::RenderError;

/// Rasterize an SVG document at its own size onto a transparent canvas.
///
/// Areas no path covers (background, holes) stay fully transparent, so the
/// preview shows exactly what would be cut.
pub fn render_preview_png(svg: &str) -> Result<Vec<u8>, RenderError> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
        .map_err(|e| RenderError::SvgParse(e.to_string()))?;
    let size = tree.size().to_int_size();

    let mut pixmap =
        Pixmap::new(size.width(), size.height()).ok_or(RenderError::PixmapAllocation)?;
    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

    // Pixmap stores premultiplied alpha; PNG wants straight alpha
    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    encode_png(
        size.width(),
        size.height(),
        png::ColorType::Rgba,
        png::BitDepth::Eight,
        None,
        &rgba,
    )
}

/// Encode the posterized raster as an indexed PNG.
///
/// The PLTE chunk holds the palette in index order, so the file's color
/// indices are the pipeline's indices. Bit depth is the smallest of 1, 2, 4
/// or 8 that addresses the whole palette.
pub fn encode_posterized_png(image: &IndexedImage) -> Result<Vec<u8>, RenderError> {
    let (width, height) = match (u32::try_from(image.width()), u32::try_from(image.height())) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
        _ => {
            return Err(RenderError::UnsupportedDimensions {
                width: image.width(),
                height: image.height(),
            })
        }
    };

    let (depth, bits) = match image.palette().len() {
        0..=2 => (png::BitDepth::One, 1),
        3..=4 => (png::BitDepth::Two, 2),
        5..=16 => (png::BitDepth::Four, 4),
        _ => (png::BitDepth::Eight, 8),
    };
    let plte: Vec<u8> = image
        .palette()
        .colors()
        .iter()
        .flat_map(|c| c.to_bytes())
        .collect();
    let packed = if bits == 8 {
        image.indices().to_vec()
    } else {
        pack_nbits(image.indices(), width, bits)
    };

    encode_png(
        width,
        height,
        png::ColorType::Indexed,
        depth,
        Some(&plte),
        &packed,
    )
}

fn encode_png(
    width: u32,
    height: u32,
    color_type: png::ColorType,
    bit_depth: png::BitDepth,
    plte: Option<&[u8]>,
    data: &[u8],
) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(bit_depth);
        if let Some(plte) = plte {
            encoder.set_palette(plte);
        }
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(data)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Pack indices into N-bit PNG rows (1, 2, or 4 bits per pixel).
///
/// Every row starts on a byte boundary; the tail of a short last byte is
/// zero.
fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
    let per_byte = 8 / bits as usize;
    let row_bytes = (width as usize).div_ceil(per_byte);
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(row_bytes * (indices.len() / width as usize));

    for row in indices.chunks(width as usize) {
        for group in row.chunks(per_byte) {
            let byte = group.iter().enumerate().fold(0u8, |acc, (i, &idx)| {
                acc | ((idx & mask) << (8 - bits - i as u8 * bits))
            });
            packed.push(byte);
        }
    }

    packed
}
