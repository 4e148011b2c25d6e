pub mod image_helper {
    use image::ImageEncoder;

    /// Decodes an image file into a flat row-major RGBA byte buffer.
    pub fn load(name: &str) -> Result<(u32, u32, Vec<u8>), image::error::ImageError> {
        let img = image::open(name)?.into_rgba8();
        let (width, height) = img.dimensions();
        Ok((width, height, img.into_raw()))
    }

    /// Encodes a flat RGBA byte buffer as a PNG file.
    pub fn save(
        name: &str,
        width: u32,
        height: u32,
        buffer: &[u8],
    ) -> Result<(), image::error::ImageError> {
        let output = std::fs::File::create(name)?;
        let encoder = image::codecs::png::PngEncoder::new(output);

        encoder.write_image(buffer, width, height, image::ExtendedColorType::Rgba8)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::image_helper::*;
    use crate::sorter::{PixelSorter, SorterConfig};

    #[test]
    fn save_sorted_gradient_round_trip() {
        let width = 64u32;
        let height = 64u32;
        let mut buffer = vec![255u8; (width * height * 4) as usize];

        let mut intensity = 0u8;
        for pixel in buffer.chunks_mut(4) {
            pixel[0] = intensity;
            pixel[1] = intensity.wrapping_mul(3);
            pixel[2] = 255 - intensity;
            intensity = intensity.wrapping_add(7);
        }

        let sorter = PixelSorter::new(SorterConfig::default());
        sorter
            .sort_frame(&mut buffer, width, height)
            .expect("sorting the gradient failed");

        let name = std::env::temp_dir().join("sorted_gradient.png");
        let name = name.to_str().expect("temp path is not utf-8");

        save(name, width, height, &buffer).expect("Error Saving File.");

        let (w, h, reloaded) = load(name).expect("Error Loading File.");
        assert_eq!((w, h), (width, height));
        assert_eq!(reloaded, buffer);
    }
}
