use std::path::Path;

use crate::error::IoError;
use lenswarp_image::{Image, ImageSize};

/// A decoded image whose channel layout is only known at runtime.
pub enum GenericImage {
    /// 8-bit grayscale image
    L8(Image<u8, 1>),
    /// 8-bit RGB image
    Rgb8(Image<u8, 3>),
}

impl GenericImage {
    /// Returns the image size in pixels.
    pub fn size(&self) -> ImageSize {
        match self {
            Self::L8(image) => image.size(),
            Self::Rgb8(image) => image.size(),
        }
    }

    /// Returns the number of channels of the underlying image.
    pub fn num_channels(&self) -> usize {
        match self {
            Self::L8(_) => 1,
            Self::Rgb8(_) => 3,
        }
    }
}

/// Reads an image from the given file path and decodes it into either a
/// grayscale or an RGB image based on the color type found in the file.
///
/// The format is inferred from the file content, so any extension accepted by
/// the underlying decoders (currently PNG and JPEG) will work.
///
/// # Arguments
///
/// - `file_path` - The path to the image file.
///
/// # Returns
///
/// A [`GenericImage`] holding the decoded pixel data.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<GenericImage, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let data = std::fs::read(file_path)?;
    let img = image::ImageReader::new(std::io::Cursor::new(&data))
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    match img.color() {
        image::ColorType::L8 => {
            let image = Image::new(size, img.into_luma8().into_raw())?;
            Ok(GenericImage::L8(image))
        }
        image::ColorType::Rgb8 => {
            let image = Image::new(size, img.into_rgb8().into_raw())?;
            Ok(GenericImage::Rgb8(image))
        }
        color => Err(IoError::UnsupportedImageFormat(format!("{color:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::png::{write_image_png_gray8, write_image_png_rgb8};
    use lenswarp_image::{Image, ImageSize};

    #[test]
    fn read_any_rgb8() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gradient.png");

        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            (0..18).collect(),
        )?;
        write_image_png_rgb8(&file_path, &image)?;

        let generic = read_image_any(&file_path)?;
        assert_eq!(generic.num_channels(), 3);
        assert_eq!(generic.size().width, 2);
        assert_eq!(generic.size().height, 3);

        match generic {
            GenericImage::Rgb8(rgb) => assert_eq!(rgb.as_slice(), image.as_slice()),
            _ => panic!("expected an rgb8 image"),
        }

        Ok(())
    }

    #[test]
    fn read_any_mono8() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gradient.png");

        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 4,
                height: 2,
            },
            (0..8).collect(),
        )?;
        write_image_png_gray8(&file_path, &image)?;

        let generic = read_image_any(&file_path)?;
        assert_eq!(generic.num_channels(), 1);

        match generic {
            GenericImage::L8(gray) => assert_eq!(gray.as_slice(), image.as_slice()),
            _ => panic!("expected a mono8 image"),
        }

        Ok(())
    }

    #[test]
    fn read_any_rejects_unsupported_color() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("rgba.png");

        let rgba = image::RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 4]));
        rgba.save(&file_path)
            .map_err(|e| IoError::PngEncodingError(e.to_string()))?;

        let res = read_image_any(&file_path);
        assert!(matches!(res, Err(IoError::UnsupportedImageFormat(_))));

        Ok(())
    }

    #[test]
    fn read_any_missing_file() {
        let res = read_image_any("missing.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }
}
