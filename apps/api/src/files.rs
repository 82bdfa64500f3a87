//! File ingestion — turns uploaded files into `FileRecord`s the engine consumes.
//!
//! PDFs go through `pdf-extract`; everything else is decoded as UTF-8 text.
//! A single unreadable file aborts the whole request, with the failing file
//! named in the error: downstream matching needs the complete batch.

use axum::extract::Multipart;
use axum::Json;
use bytes::Bytes;

use crate::errors::AppError;
use crate::matching::types::FileRecord;

/// POST /api/v1/files/extract
///
/// Multipart upload of resumes or job descriptions. Returns the decoded
/// `FileRecord`s in upload order.
pub async fn handle_extract_files(mut multipart: Multipart) -> Result<Json<Vec<FileRecord>>, AppError> {
    let mut records = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        let name = field
            .file_name()
            .or_else(|| field.name())
            .unwrap_or("unnamed")
            .to_string();

        let data = field.bytes().await.map_err(|e| AppError::FileRead {
            file: name.clone(),
            reason: e.to_string(),
        })?;

        let content = decode_file(&name, data)?;
        records.push(FileRecord { name, content });
    }

    if records.is_empty() {
        return Err(AppError::Validation(
            "No files were provided in the upload".to_string(),
        ));
    }

    Ok(Json(records))
}

/// Decodes one uploaded file to text based on its extension.
fn decode_file(name: &str, data: Bytes) -> Result<String, AppError> {
    if name.to_lowercase().ends_with(".pdf") {
        pdf_extract::extract_text_from_mem(&data).map_err(|e| AppError::FileRead {
            file: name.to_string(),
            reason: format!("PDF text extraction failed: {e}"),
        })
    } else {
        String::from_utf8(data.to_vec()).map_err(|_| AppError::FileRead {
            file: name.to_string(),
            reason: "File is not valid UTF-8 text".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain_text() {
        let content = decode_file("resume.txt", Bytes::from_static(b"Jane Smith\n")).unwrap();
        assert_eq!(content, "Jane Smith\n");
    }

    #[test]
    fn test_decode_invalid_utf8_names_the_file() {
        let err = decode_file("resume.txt", Bytes::from_static(&[0xff, 0xfe])).unwrap_err();
        match err {
            AppError::FileRead { file, .. } => assert_eq!(file, "resume.txt"),
            other => panic!("expected FileRead, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_broken_pdf_names_the_file() {
        let err = decode_file("resume.pdf", Bytes::from_static(b"not a pdf")).unwrap_err();
        match err {
            AppError::FileRead { file, reason } => {
                assert_eq!(file, "resume.pdf");
                assert!(reason.contains("PDF"));
            }
            other => panic!("expected FileRead, got {other:?}"),
        }
    }
}
