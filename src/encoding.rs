//! Encoding detection and line reading
//!
//! Text files are read line by line so memory stays bounded by the longest
//! line. Non UTF-8 input is detected from a sample and transcoded.

use crate::error::{Error, Result};
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use encoding_rs_io::{DecodeReaderBytes, DecodeReaderBytesBuilder};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Bytes sampled for encoding detection
const SAMPLE_SIZE: usize = 64 * 1024;

/// Read buffer for line iteration
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Result of encoding detection
#[derive(Debug, Clone)]
pub struct EncodingInfo {
    /// Detected encoding name
    pub name: &'static str,
    /// Confidence level (0.0 - 1.0)
    pub confidence: f32,
    /// The encoding_rs Encoding reference
    pub encoding: &'static Encoding,
}

impl Default for EncodingInfo {
    fn default() -> Self {
        Self {
            name: "UTF-8",
            confidence: 1.0,
            encoding: encoding_rs::UTF_8,
        }
    }
}

/// Detect the encoding of a file by sampling its content
pub fn detect_encoding(path: &Path) -> Result<EncodingInfo> {
    let file = File::open(path).map_err(|e| Error::read(path, e))?;
    let mut sample = Vec::with_capacity(SAMPLE_SIZE);
    file.take(SAMPLE_SIZE as u64)
        .read_to_end(&mut sample)
        .map_err(|e| Error::read(path, e))?;

    Ok(detect_sample(&sample))
}

/// Detect the encoding of an in-memory sample
pub fn detect_sample(sample: &[u8]) -> EncodingInfo {
    if sample.is_empty() {
        return EncodingInfo::default();
    }

    if let Some((encoding, _)) = Encoding::for_bom(sample) {
        return EncodingInfo {
            name: encoding.name(),
            confidence: 1.0,
            encoding,
        };
    }

    if is_utf8_prefix(sample) {
        return EncodingInfo::default();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(sample, true);
    let encoding = detector.guess(None, true);

    let confidence = if encoding == encoding_rs::UTF_8 { 0.5 } else { 0.8 };

    EncodingInfo {
        name: encoding.name(),
        confidence,
        encoding,
    }
}

/// Valid UTF-8, allowing a character cut off at the end of the sample
fn is_utf8_prefix(sample: &[u8]) -> bool {
    match std::str::from_utf8(sample) {
        Ok(_) => true,
        Err(e) => e.error_len().is_none(),
    }
}

/// Line iterator that decodes every line to UTF-8
///
/// The underlying file is closed when the iterator is dropped, whether or not
/// it was read to the end.
pub struct EncodedLineIterator {
    reader: BufReader<DecodeReaderBytes<File, Vec<u8>>>,
    path: PathBuf,
    encoding: &'static Encoding,
    line_buffer: Vec<u8>,
    bytes_read: u64,
}

impl EncodedLineIterator {
    /// Open a file with automatic encoding detection
    pub fn new(path: &Path) -> Result<Self> {
        let info = detect_encoding(path)?;
        log::debug!(
            "Detected encoding {} for {:?} (confidence {:.1})",
            info.name,
            path,
            info.confidence
        );
        Self::with_encoding(path, info.encoding)
    }

    /// Open a file with a specific encoding
    ///
    /// A byte order mark, if present, takes precedence and is stripped.
    pub fn with_encoding(path: &Path, encoding: &'static Encoding) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::read(path, e))?;
        let decoder = DecodeReaderBytesBuilder::new()
            .encoding(Some(encoding))
            .bom_sniffing(true)
            .build(file);

        Ok(Self {
            reader: BufReader::with_capacity(READ_BUFFER_SIZE, decoder),
            path: path.to_path_buf(),
            encoding,
            line_buffer: Vec::with_capacity(4096),
            bytes_read: 0,
        })
    }

    /// Encoding used to decode lines
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// UTF-8 bytes produced so far, line endings included
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}

impl Iterator for EncodedLineIterator {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.line_buffer.clear();

        match self.reader.read_until(b'\n', &mut self.line_buffer) {
            Ok(0) => None,
            Ok(n) => {
                self.bytes_read += n as u64;
                while matches!(self.line_buffer.last(), Some(b'\n' | b'\r')) {
                    self.line_buffer.pop();
                }
                Some(Ok(String::from_utf8_lossy(&self.line_buffer).into_owned()))
            }
            Err(e) => Some(Err(Error::read(&self.path, e))),
        }
    }
}
