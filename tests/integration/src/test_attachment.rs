//! Multipart attachment uploads against the mock server.

#[cfg(test)]
mod tests {
    use mapi_auth::SecretAuth;
    use mapi_client::MapiError;

    use crate::MockMerchantServer;

    #[tokio::test]
    async fn test_should_upload_file_part_without_credentials() {
        let server = MockMerchantServer::start_without_verifier().await;
        let client = server.client(SecretAuth::new("pos-secret").unwrap());
        let url = server.base_url().join("attachment/upload").unwrap();

        let response = client
            .upload_attachment(url.as_str(), "text/plain", "receipt #42")
            .await
            .unwrap();
        assert_eq!(response.status, 200);

        let recorded = server.requests();
        let request = &recorded[0].request;
        assert_eq!(request.method, "POST");
        assert!(!request.headers.contains("Authorization"));
        assert!(
            request
                .headers
                .get("Content-Type")
                .unwrap()
                .starts_with("multipart/form-data; boundary=")
        );

        let body = String::from_utf8_lossy(request.body_bytes()).to_ascii_lowercase();
        assert!(body.contains(r#"name="file"; filename="filename""#));
        assert!(body.contains("content-type: text/plain"));
        assert!(body.contains("receipt #42"));
    }

    #[tokio::test]
    async fn test_should_fail_on_rejected_upload() {
        let server = MockMerchantServer::start_without_verifier().await;
        let client = server.client(SecretAuth::new("pos-secret").unwrap());
        let url = server.base_url().join("attachment/status/404").unwrap();

        let err = client
            .upload_attachment(url.as_str(), "image/png", vec![0x89, b'P', b'N', b'G'])
            .await
            .unwrap_err();
        assert!(matches!(err, MapiError::Api(ref api) if api.status == 404));
    }
}
