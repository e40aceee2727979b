//! PNG loading and storing for grids of colors.
//!
//! Loading accepts any non-indexed or indexed PNG the `png` crate can expand
//! to 8 bits per channel. Gray is replicated into all three channels and
//! alpha is dropped. Storing always writes 8-bit RGB.

use std::io::Cursor;
use std::path::Path;

use allrgb_core::{Grid, Rgb};

use crate::error::ImageError;

/// Read a PNG file into a `height x width` grid.
pub fn load(path: &Path) -> Result<Grid<Rgb>, ImageError> {
    let data = std::fs::read(path).map_err(|source| ImageError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = decode(&data, path)?;
    tracing::info!(
        path = %path.display(),
        rows = grid.rows(),
        cols = grid.cols(),
        "Loaded image"
    );
    Ok(grid)
}

/// Decode PNG bytes. `path` is only used in errors.
pub fn decode(data: &[u8], path: &Path) -> Result<Grid<Rgb>, ImageError> {
    let decode_error = |e: png::DecodingError| ImageError::PngDecode {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut decoder = png::Decoder::new(Cursor::new(data));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info().map_err(decode_error)?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf).map_err(decode_error)?;
    buf.truncate(frame.buffer_size());

    if frame.bit_depth != png::BitDepth::Eight {
        return Err(unsupported(path, frame.color_type, frame.bit_depth));
    }

    let line = frame.line_size;
    let channels = match frame.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        other => return Err(unsupported(path, other, frame.bit_depth)),
    };

    let (width, height) = (frame.width as usize, frame.height as usize);
    let mut colors = Vec::with_capacity(width * height);
    for row in buf.chunks_exact(line) {
        for pixel in row[..width * channels].chunks_exact(channels) {
            colors.push(match channels {
                1 | 2 => Rgb::new(pixel[0], pixel[0], pixel[0]),
                _ => Rgb::new(pixel[0], pixel[1], pixel[2]),
            });
        }
    }

    Grid::from_vec(height, width, colors).map_err(|_| ImageError::Empty {
        path: path.to_path_buf(),
        width: frame.width,
        height: frame.height,
    })
}

fn unsupported(path: &Path, color_type: png::ColorType, bit_depth: png::BitDepth) -> ImageError {
    ImageError::UnsupportedFormat {
        path: path.to_path_buf(),
        color_type: format!("{color_type:?}"),
        bit_depth: bit_depth as u8,
    }
}

/// Encode a grid as an 8-bit RGB PNG. `path` is only used in errors.
pub fn encode(grid: &Grid<Rgb>, path: &Path) -> Result<Vec<u8>, ImageError> {
    let too_large = || ImageError::TooLarge {
        path: path.to_path_buf(),
        rows: grid.rows(),
        cols: grid.cols(),
    };
    let width = u32::try_from(grid.cols()).map_err(|_| too_large())?;
    let height = u32::try_from(grid.rows()).map_err(|_| too_large())?;

    let encode_error = |e: png::EncodingError| ImageError::PngEncode {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let data: Vec<u8> = grid.iter().flat_map(|color| color.to_bytes()).collect();

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder.write_header().map_err(encode_error)?;
        writer.write_image_data(&data).map_err(encode_error)?;
    }
    Ok(buf.into_inner())
}

/// Encode `grid` and write it to `path`.
///
/// The file is only created once encoding has succeeded.
pub fn store(path: &Path, grid: &Grid<Rgb>) -> Result<(), ImageError> {
    let bytes = encode(grid, path)?;
    std::fs::write(path, &bytes).map_err(|source| ImageError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        rows = grid.rows(),
        cols = grid.cols(),
        bytes = bytes.len(),
        "Wrote image"
    );
    Ok(())
}
