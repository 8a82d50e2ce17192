//! Image fixtures for tests.

use std::io::Cursor;

use bytes::Bytes;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

use crate::domain::entities::{FetchedResource, ResponseMetadata};

/// Encodes a solid-color image of the given size.
pub fn encoded_image(format: ImageFormat, width: u32, height: u32) -> Bytes {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([200, 120, 40])));
    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, format)
        .expect("fixture image encodes");
    Bytes::from(cursor.into_inner())
}

/// A 200 response carrying a JPEG of the given size.
pub fn jpeg_response(width: u32, height: u32) -> FetchedResource {
    FetchedResource::new(
        encoded_image(ImageFormat::Jpeg, width, height),
        ResponseMetadata::ok("image/jpeg"),
    )
}

/// A 200 response carrying a PNG of the given size.
pub fn png_response(width: u32, height: u32) -> FetchedResource {
    FetchedResource::new(
        encoded_image(ImageFormat::Png, width, height),
        ResponseMetadata::ok("image/png"),
    )
}
