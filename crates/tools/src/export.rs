use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use foundation::math::Projection;
use render::{ColorScheme, PixelBuffer, RenderMode};

#[derive(Debug)]
pub enum ExportError {
    Io(io::Error),
    Image(image::ImageError),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "i/o: {e}"),
            ExportError::Image(e) => write!(f, "png encode: {e}"),
        }
    }
}

impl std::error::Error for ExportError {}

/// Filename for an exported map: body, mode, dimensions, scheme, and (when
/// not rectangular) the projection.
pub fn export_file_name(
    body_name: &str,
    mode: RenderMode,
    scheme: ColorScheme,
    projection: Projection,
    width: u32,
    height: u32,
) -> String {
    let grey = match scheme {
        ColorScheme::Grayscale => "-grey",
        ColorScheme::Color => "",
    };
    let proj = match projection {
        Projection::Rectangular => String::new(),
        other => format!("_{other}"),
    };
    format!("{body_name}_{mode}{grey}_{width}x{height}{proj}.png")
}

/// Write a finished buffer to `dir` as a PNG, returning the full path.
///
/// The buffer's row 0 is the southernmost row, so rows are flipped into
/// image order here.
pub fn export_png(
    buffer: &PixelBuffer,
    dir: &Path,
    body_name: &str,
    mode: RenderMode,
    scheme: ColorScheme,
    projection: Projection,
) -> Result<PathBuf, ExportError> {
    let (w, h) = (buffer.width(), buffer.height());
    let mut img = image::RgbaImage::new(w, h);
    for y in 0..h {
        let source = buffer.row(h - 1 - y);
        for x in 0..w {
            img.put_pixel(x, y, image::Rgba(source[x as usize].to_bytes()));
        }
    }

    fs::create_dir_all(dir).map_err(ExportError::Io)?;
    let path = dir.join(export_file_name(body_name, mode, scheme, projection, w, h));
    img.save(&path).map_err(ExportError::Image)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use foundation::Rgba;
    use foundation::math::Projection;
    use render::{ColorScheme, PixelBuffer, RenderMode};

    use super::{export_file_name, export_png};

    #[test]
    fn file_names_encode_the_configuration() {
        assert_eq!(
            export_file_name(
                "Kerbin",
                RenderMode::Elevation,
                ColorScheme::Color,
                Projection::Rectangular,
                720,
                360
            ),
            "Kerbin_elevation_720x360.png"
        );
        assert_eq!(
            export_file_name(
                "Mun",
                RenderMode::Biome,
                ColorScheme::Grayscale,
                Projection::KavrayskiyVii,
                360,
                180
            ),
            "Mun_biome-grey_360x180_KavrayskiyVII.png"
        );
    }

    #[test]
    fn exported_png_is_flipped_into_image_order() {
        let mut buffer = PixelBuffer::new(2, 2);
        // South row red, north row white.
        buffer.write_row(0, &[Rgba::RED; 2]);
        buffer.write_row(1, &[Rgba::WHITE; 2]);

        let dir = tempfile::tempdir().unwrap();
        let path = export_png(
            &buffer,
            dir.path(),
            "Test",
            RenderMode::Elevation,
            ColorScheme::Color,
            Projection::Rectangular,
        )
        .unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        // Image row 0 is the top of the map: the north (white) row.
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(0, 1).0, [255, 0, 0, 255]);
    }
}
