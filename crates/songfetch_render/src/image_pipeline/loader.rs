use std::error::Error;
use std::path::PathBuf;

use image::io::Reader as ImageReader;
use image::DynamicImage;

use crate::ArtError;

pub type FetchError = Box<dyn Error + Send + Sync>;

/// Downloads the raw bytes behind a remote artwork URL.
pub trait RemoteFetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl<F> RemoteFetch for F
where
    F: Fn(&str) -> Result<Vec<u8>, FetchError>,
{
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self(url)
    }
}

/// Where the artwork comes from.
#[derive(Clone, Debug)]
pub enum ArtSource {
    Empty,
    File(PathBuf),
    Url(String),
    Decoded(DynamicImage),
}

impl ArtSource {
    /// Classifies an artwork URI as reported by a media player.
    ///
    /// `file://` URIs are percent-decoded into a local path. Anything that is
    /// neither a file nor an http(s) URL is treated as empty, including URIs
    /// with leading whitespace.
    pub fn from_uri(uri: &str) -> Self {
        if uri.trim().is_empty() {
            ArtSource::Empty
        } else if let Some(path) = uri.strip_prefix("file://") {
            ArtSource::File(PathBuf::from(percent_decode(path)))
        } else if uri.starts_with("https://") || uri.starts_with("http://") {
            ArtSource::Url(uri.to_owned())
        } else {
            ArtSource::Empty
        }
    }

    pub fn load(self, fetcher: Option<&dyn RemoteFetch>) -> Result<DynamicImage, ArtError> {
        match self {
            ArtSource::Empty => Err(ArtError::Unavailable),
            // Players often hand out extensionless cache files, so the format
            // comes from the content rather than the file name.
            ArtSource::File(path) => {
                Ok(ImageReader::open(path)?.with_guessed_format()?.decode()?)
            },
            ArtSource::Url(url) => {
                let fetcher = fetcher.ok_or(ArtError::Unavailable)?;
                let bytes =
                    fetcher.fetch(&url).map_err(|source| ArtError::Fetch { url, source })?;
                Ok(image::load_from_memory(&bytes)?)
            },
            ArtSource::Decoded(image) => Ok(image),
        }
    }
}

impl From<DynamicImage> for ArtSource {
    fn from(image: DynamicImage) -> Self {
        ArtSource::Decoded(image)
    }
}

fn percent_decode(input: &str) -> String {
    fn hex(byte: u8) -> Option<u8> {
        char::from(byte).to_digit(16).map(|digit| digit as u8)
    }

    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex(bytes[i + 1]), hex(bytes[i + 2])) {
                decoded.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use image::{GenericImageView, ImageFormat, Rgb, RgbImage};

    use super::*;

    #[test]
    fn classifies_uris() {
        assert!(matches!(ArtSource::from_uri(""), ArtSource::Empty));
        assert!(matches!(ArtSource::from_uri("   "), ArtSource::Empty));
        assert!(matches!(ArtSource::from_uri("ftp://host/a.png"), ArtSource::Empty));
        assert!(matches!(ArtSource::from_uri("/plain/path.png"), ArtSource::Empty));
        assert!(matches!(
            ArtSource::from_uri("https://i.scdn.co/image/ab67"),
            ArtSource::Url(url) if url == "https://i.scdn.co/image/ab67"
        ));
        assert!(matches!(ArtSource::from_uri("http://host/x.jpg"), ArtSource::Url(_)));
    }

    #[test]
    fn leading_whitespace_is_not_a_uri() {
        assert!(matches!(ArtSource::from_uri(" file:///tmp/cover.png"), ArtSource::Empty));
        assert!(matches!(ArtSource::from_uri("\thttps://host/x.jpg"), ArtSource::Empty));
    }

    #[test]
    fn file_uris_are_percent_decoded() {
        match ArtSource::from_uri("file:///home/me/Music/Cover%20Art%E2%99%AA.png") {
            ArtSource::File(path) => {
                assert_eq!(path, Path::new("/home/me/Music/Cover Art♪.png"))
            },
            other => panic!("unexpected source {other:?}"),
        }
    }

    #[test]
    fn malformed_escapes_are_kept() {
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("a%zzb"), "a%zzb");
        assert_eq!(percent_decode("%4"), "%4");
        assert_eq!(percent_decode("%41"), "A");
    }

    #[test]
    fn empty_source_is_unavailable() {
        assert!(matches!(ArtSource::Empty.load(None), Err(ArtError::Unavailable)));
    }

    #[test]
    fn url_without_fetcher_is_unavailable() {
        let source = ArtSource::from_uri("https://example.invalid/cover.png");
        assert!(matches!(source.load(None), Err(ArtError::Unavailable)));
    }

    #[test]
    fn fetch_failures_carry_the_url() {
        let failing = |_: &str| -> Result<Vec<u8>, FetchError> { Err("connection refused".into()) };
        let source = ArtSource::from_uri("https://example.invalid/cover.png");
        match source.load(Some(&failing)) {
            Err(ArtError::Fetch { url, .. }) => assert_eq!(url, "https://example.invalid/cover.png"),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn undecodable_bytes_are_image_errors() {
        let garbage = |_: &str| -> Result<Vec<u8>, FetchError> { Ok(b"not an image".to_vec()) };
        let source = ArtSource::from_uri("https://example.invalid/cover.png");
        assert!(matches!(source.load(Some(&garbage)), Err(ArtError::Image(_))));
    }

    #[test]
    fn missing_file_is_an_error() {
        let source = ArtSource::from_uri("file:///definitely/not/here.png");
        assert!(matches!(source.load(None), Err(ArtError::Io(_))));
    }

    #[test]
    fn extensionless_file_is_sniffed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".org.chromium.Chromium.AbCdEf");
        RgbImage::from_pixel(8, 8, Rgb([255, 255, 255]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let image = ArtSource::File(path).load(None).unwrap();
        assert_eq!(image.dimensions(), (8, 8));
    }

    #[test]
    fn non_image_file_is_an_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover");
        std::fs::write(&path, b"plain text, not pixels").unwrap();
        assert!(matches!(ArtSource::File(path).load(None), Err(ArtError::Image(_))));
    }
}
