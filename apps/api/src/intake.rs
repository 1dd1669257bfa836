//! Resume file intake: extracts plain text from uploaded resume files.
//!
//! PDF extraction happens in memory; plain text must be valid UTF-8. Anything
//! else is rejected up front with a clear message.

use bytes::Bytes;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResumeFormat {
    Pdf,
    PlainText,
}

/// Extracts the text of an uploaded resume, trimmed. Fails with a validation
/// error for unsupported formats and an unprocessable-entity error when the
/// file cannot be read or contains no text.
pub fn extract_resume_text(
    file_name: &str,
    content_type: Option<&str>,
    data: &Bytes,
) -> Result<String, AppError> {
    let format = detect_format(file_name, content_type).ok_or_else(|| {
        AppError::Validation(
            "Unsupported file format. Please upload a PDF or plain-text resume.".to_string(),
        )
    })?;

    let text = match format {
        ResumeFormat::Pdf => pdf_extract::extract_text_from_mem(data.as_ref())
            .map_err(|e| AppError::UnprocessableEntity(format!("Failed to parse PDF file: {e}")))?,
        ResumeFormat::PlainText => String::from_utf8(data.to_vec()).map_err(|_| {
            AppError::UnprocessableEntity("Resume text is not valid UTF-8".to_string())
        })?,
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "No text could be extracted from the file. Please ensure the file contains readable text."
                .to_string(),
        ));
    }

    Ok(text)
}

/// Content type wins when the client sends one; the file extension is the
/// fallback for clients that do not.
fn detect_format(file_name: &str, content_type: Option<&str>) -> Option<ResumeFormat> {
    match content_type {
        Some("application/pdf") => return Some(ResumeFormat::Pdf),
        Some("text/plain") => return Some(ResumeFormat::PlainText),
        _ => {}
    }

    let lower = file_name.to_lowercase();
    if lower.ends_with(".pdf") {
        Some(ResumeFormat::Pdf)
    } else if lower.ends_with(".txt") || lower.ends_with(".text") || lower.ends_with(".md") {
        Some(ResumeFormat::PlainText)
    } else {
        None
    }
}
