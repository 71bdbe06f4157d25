use bytes::Bytes;

/// An in-memory image file as handed over by the capture flow.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub file_name: String,
    pub mime_type: String,
    pub data: Bytes,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, data: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            data,
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
