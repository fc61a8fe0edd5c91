use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("unsupported file type: {0}. Upload a text or PDF file")]
    UnsupportedType(String),
    #[error("An error occurred while reading the text file: {0}")]
    Decode(String),
    #[error("An error occurred while reading the PDF file: {0}")]
    Extraction(String),
    #[error("Unable to extract text from the uploaded file")]
    Empty,
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::UnsupportedType(_) => AppError::UnsupportedMediaType(err.to_string()),
            DocumentError::Decode(_) | DocumentError::Extraction(_) | DocumentError::Empty => {
                AppError::BadRequest(err.to_string())
            }
        }
    }
}
