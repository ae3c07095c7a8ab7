//! Embedded static assets

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Caption shown under the decorative banner image.
pub const DNA_IMAGE_CAPTION: &str = "DNA Double Helix";

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

// Base64-encoded DNA helix image (small two-color PNG).
const DNA_IMAGE_BASE64: &str = "
iVBORw0KGgoAAAANSUhEUgAAAOEAAADhAQMAAAAEfUA5AAAABlBMVEUAAAD///+l2Z/dAAACV0lEQVR42t2ZTXLCMAyFzbDIMkfw
TczFPFOOxlE4AkstOqVkKCD/6BNp2qGpN21i5MiS/J4kh6DH9hhgpAST2yMJ5xCiOTkcQticQNQWnkRt4Xz9Ew2Fac+p+adrpp5w
bBRQQ6t6VV6Pca8exNhOf1OlJrVe47kYAgvXS9fGLbWu91D+OuIWMliu41P9qdbu+k1rWL1aYeTG1DwbzSD73VnWajg34/SsrdjO
bRAWmiTz2HSVFgrR6lngs4218pyzUC7dKBkxRPn86v0nC61MxMoQC8rJfbATM1DUazFgVED0a0JM+BYQnfZsQ/u050iMM5BoiBkm
N6eOe7STM1AZMWGyWOERa5ZwsinlovDNvwdDYYtSdDT19qycI2Ee9OnlWjemAFBQ/rzWq/qUwML144v4iJHQ4SPE53/IR4d5sKln
18lHu9K7HxSizQ6X8JHWsgM77FBGhse7LrzfX0oASDJAONpgdhc28TuC6FUYoP+itgBtCFDZRZhEnVlcGbXiHaE12JLoBfYgex8j
h6MOI5ajnU8KnrLBRGeXjxgZGFUYkRjNEAkZRZfg8xr5aGz592m2YmZ3+IgzCs5GOJPhLMiJWM6+OHPjrM/JGJ3EhpGBs9wQb659
/wYfYWbuZPVcETjVBFciThXDFZBTPWHlxVUbVnxcLWKlyVXqzb97uxFotQKxsuaqHCt6hs0FfMQdDO5+rI+Pti0+/1A374/y0YLq
aVE372V89Fa5dw4fOd087Io7HXWnm4edfOcWgG8QnNsHvrlwbj34xsS5beGbGueWJ+yqwvcTCli3HTjPuwwAAAAASUVORK5CYII=
";

/// A decoded embedded image with the header fields the UI cares about.
#[derive(Debug, Clone)]
pub struct EmbeddedImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decode the embedded DNA helix image.
///
/// The literal is stored with line breaks for readability, so whitespace is
/// stripped before decoding. Width and height come from the PNG IHDR chunk,
/// which directly follows the 8-byte signature.
pub fn decode_dna_image() -> Result<EmbeddedImage, String> {
    let compact: String = DNA_IMAGE_BASE64
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let bytes = STANDARD
        .decode(compact)
        .map_err(|e| format!("embedded image is not valid base64: {e}"))?;

    if bytes.len() < 24 || bytes[..8] != PNG_SIGNATURE {
        return Err("embedded image is not a PNG".to_string());
    }

    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);

    if width == 0 || height == 0 {
        return Err("embedded image has empty dimensions".to_string());
    }

    Ok(EmbeddedImage { bytes, width, height })
}
