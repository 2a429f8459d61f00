//! Multipart attachment upload.
//!
//! Attachment URLs are pre-authorized by the API, so uploads are always sent
//! with [`OpenAuth`] and never carry merchant credentials.

use bytes::Bytes;
use mapi_auth::OpenAuth;
use mapi_core::{MapiRequest, MapiResponse};

use crate::dispatch::send;
use crate::error::MapiResult;
use crate::transport::{Attachment, Transport};

/// Multipart field name of the uploaded file.
pub const ATTACHMENT_FIELD: &str = "file";

/// File name reported for every upload.
pub const ATTACHMENT_FILENAME: &str = "filename";

/// POST `data` as the single `file` part of a multipart body to `url`.
///
/// # Errors
///
/// Returns [`MapiError::Api`](crate::MapiError::Api) for non-2xx statuses and
/// the usual transport and encoding errors otherwise.
pub async fn upload_attachment(
    transport: &dyn Transport,
    url: &str,
    mime_type: &str,
    data: impl Into<Bytes>,
) -> MapiResult<MapiResponse> {
    let attachment = Attachment {
        field: ATTACHMENT_FIELD.to_owned(),
        filename: ATTACHMENT_FILENAME.to_owned(),
        mime_type: mime_type.to_owned(),
        data: data.into(),
    };
    send(
        transport,
        &OpenAuth,
        MapiRequest::new("POST", url),
        Some(attachment),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::tests::MockTransport;
    use crate::error::MapiError;

    const URL: &str = "https://attachments.example.com/upload/abc123";

    #[tokio::test]
    async fn test_should_send_single_file_part_without_auth() {
        let transport = MockTransport::new(201, "");
        upload_attachment(&transport, URL, "image/png", &b"\x89PNG"[..])
            .await
            .unwrap();

        let sent = transport.last();
        assert_eq!(sent.request.method, "POST");
        assert_eq!(sent.request.url, URL);
        assert!(sent.request.headers.is_empty());
        let attachment = sent.attachment.unwrap();
        assert_eq!(attachment.field, "file");
        assert_eq!(attachment.filename, "filename");
        assert_eq!(attachment.mime_type, "image/png");
        assert_eq!(attachment.data.as_ref(), b"\x89PNG");
    }

    #[tokio::test]
    async fn test_should_fail_on_rejected_upload() {
        let transport = MockTransport::new(413, "too large");
        let err = upload_attachment(&transport, URL, "application/pdf", vec![0u8; 16])
            .await
            .unwrap_err();
        assert!(matches!(err, MapiError::Api(ref api) if api.status == 413 && api.body == "too large"));
    }
}
