/// A file argument, either raw data or a string that may be a url
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    Text(String),
    Bytes(Vec<u8>),
}

impl From<&str> for FileSource {
    fn from(text: &str) -> FileSource {
        FileSource::Text(text.to_string())
    }
}

impl From<String> for FileSource {
    fn from(text: String) -> FileSource {
        FileSource::Text(text)
    }
}

impl From<Vec<u8>> for FileSource {
    fn from(bytes: Vec<u8>) -> FileSource {
        FileSource::Bytes(bytes)
    }
}

impl From<&[u8]> for FileSource {
    fn from(bytes: &[u8]) -> FileSource {
        FileSource::Bytes(bytes.to_vec())
    }
}
