//! Authentication round trips against the mock server.

#[cfg(test)]
mod tests {
    use mapi_auth::{OpenAuth, RsaSha256Auth, SecretAuth};
    use mapi_client::MapiError;
    use mapi_model::MapiOperation;
    use serde_json::{Value, json};

    use crate::{MERCHANT_KEY, MERCHANT_PUBLIC_KEY, MockMerchantServer, OTHER_PUBLIC_KEY};

    fn rsa_auth() -> RsaSha256Auth {
        RsaSha256Auth::new(MERCHANT_KEY).unwrap()
    }

    #[tokio::test]
    async fn test_should_accept_rsa_signed_operation() {
        let server = MockMerchantServer::start(MERCHANT_PUBLIC_KEY).await;
        let client = server.client(rsa_auth());

        let response = client
            .call(
                MapiOperation::CreateLedger,
                "ledger/",
                &json!({"currency": "NOK", "description": "Kiosk"}),
            )
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        let echo: Value = response.json().unwrap();
        assert_eq!(echo["method"], "POST");
        assert_eq!(echo["path"], "/merchant/v1/ledger/");
        assert_eq!(echo["auth"], "RSA-SHA256");

        let recorded = server.requests();
        assert_eq!(recorded.len(), 1);
        let signed_at = recorded[0].signed_at.as_deref().unwrap();
        assert_eq!(signed_at.len(), "2026-03-01 12:30:45".len());
        assert_eq!(
            recorded[0].request.headers.get("X-Mcash-Merchant"),
            Some("merchant-1")
        );
    }

    #[tokio::test]
    async fn test_should_sign_bodyless_get() {
        let server = MockMerchantServer::start(MERCHANT_PUBLIC_KEY).await;
        let client = server.client(rsa_auth());

        let response = client.request("get", "/pos/?page=2", None).await.unwrap();
        assert_eq!(response.status, 200);
        assert!(server.requests()[0].signed_at.is_some());
    }

    #[tokio::test]
    async fn test_should_reject_signature_from_unknown_key() {
        let server = MockMerchantServer::start(OTHER_PUBLIC_KEY).await;
        let client = server.client(rsa_auth());

        let err = client.request("GET", "pos/", None).await.unwrap_err();
        assert!(matches!(err, MapiError::Api(ref api) if api.status == 401));
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_should_send_shared_secret() {
        let server = MockMerchantServer::start_without_verifier().await;
        let client = server.client(SecretAuth::new("pos-secret").unwrap());

        let response = client.request("GET", "pos/", None).await.unwrap();
        let echo: Value = response.json().unwrap();
        assert_eq!(echo["auth"], "SECRET");
        assert_eq!(
            server.requests()[0].request.headers.get("Authorization"),
            Some("SECRET pos-secret")
        );
    }

    #[tokio::test]
    async fn test_should_send_open_requests_without_authorization() {
        let server = MockMerchantServer::start_without_verifier().await;
        let client = server.client(OpenAuth);

        client.request("GET", "pos/", None).await.unwrap();
        let recorded = server.requests();
        assert!(!recorded[0].request.headers.contains("Authorization"));
        assert!(!recorded[0].request.headers.contains("X-Mcash-Timestamp"));
    }
}
