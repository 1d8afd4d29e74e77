//! Audio types for speech processing

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported audio container formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// WAV (PCM) - the format the upload endpoint expects
    Wav,
    /// MP3
    Mp3,
    /// WebM
    Webm,
}

impl AudioFormat {
    /// File extension for this format (without dot)
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Webm => "webm",
        }
    }

    /// MIME type for this format
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mpeg",
            Self::Webm => "audio/webm",
        }
    }

    /// Whether the recognition provider accepts this format directly
    pub const fn is_recognition_supported(self) -> bool {
        matches!(self, Self::Wav | Self::Mp3 | Self::Webm)
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// An audio payload together with its format
#[derive(Clone, PartialEq, Eq)]
pub struct AudioData {
    data: Vec<u8>,
    format: AudioFormat,
}

impl fmt::Debug for AudioData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioData")
            .field("size_bytes", &self.data.len())
            .field("format", &self.format)
            .finish()
    }
}

impl AudioData {
    /// Create audio data from raw bytes
    pub const fn new(data: Vec<u8>, format: AudioFormat) -> Self {
        Self { data, format }
    }

    /// The audio format
    pub const fn format(&self) -> AudioFormat {
        self.format
    }

    /// Size of the payload in bytes
    pub const fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Whether the payload is empty
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Build a filename with the format's extension
    pub fn filename(&self, stem: &str) -> String {
        format!("{stem}.{}", self.format.extension())
    }

    /// Borrow the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume into the raw bytes
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_extensions() {
        assert_eq!(AudioFormat::Wav.extension(), "wav");
        assert_eq!(AudioFormat::Mp3.extension(), "mp3");
        assert_eq!(AudioFormat::Webm.extension(), "webm");
    }

    #[test]
    fn format_mime_types() {
        assert_eq!(AudioFormat::Wav.mime_type(), "audio/wav");
        assert_eq!(AudioFormat::Mp3.mime_type(), "audio/mpeg");
    }

    #[test]
    fn filename_uses_extension() {
        let audio = AudioData::new(vec![1, 2, 3], AudioFormat::Wav);
        assert_eq!(audio.filename("audio"), "audio.wav");
    }

    #[test]
    fn empty_audio_detected() {
        assert!(AudioData::new(vec![], AudioFormat::Wav).is_empty());
        assert!(!AudioData::new(vec![0], AudioFormat::Wav).is_empty());
    }

    #[test]
    fn debug_does_not_dump_payload() {
        let audio = AudioData::new(vec![0u8; 4096], AudioFormat::Wav);
        let debug = format!("{audio:?}");
        assert!(debug.contains("4096"));
        assert!(debug.contains("Wav"));
    }

    #[test]
    fn into_data_returns_bytes() {
        let audio = AudioData::new(vec![9, 8, 7], AudioFormat::Mp3);
        assert_eq!(audio.into_data(), vec![9, 8, 7]);
    }
}
