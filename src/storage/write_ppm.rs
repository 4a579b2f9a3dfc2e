use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes `buffer` as a binary (P6) PPM image.
pub fn write_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let filepath = filepath.as_ref();
    if let Some(parent) = filepath.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = BufWriter::new(File::create(filepath)?);
    write_ppm_to(buffer, &mut file)?;
    file.flush()
}

pub fn write_ppm_to<W: Write>(buffer: &PixelBuffer, writer: &mut W) -> std::io::Result<()> {
    // P6: binary RGB, then width height max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_payload() {
        let buffer = PixelBuffer::from_data(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let mut out = Vec::new();

        write_ppm_to(&buffer, &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_write_ppm_creates_parent_directories() {
        let dir = std::env::temp_dir().join(format!("fractal_engine_ppm_{}", std::process::id()));
        let path = dir.join("nested").join("image.ppm");
        let buffer = PixelBuffer::new(3, 2);

        write_ppm(&buffer, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert!(written.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(written.len(), b"P6\n3 2\n255\n".len() + 18);

        std::fs::remove_dir_all(dir).unwrap();
    }
}
