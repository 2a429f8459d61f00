//! Error normalization against the mock server.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mapi_auth::OpenAuth;
    use mapi_client::{MapiClient, MapiError, ReqwestTransport, TransportError};
    use mapi_model::MapiOperation;
    use serde_json::json;
    use url::Url;

    use crate::MockMerchantServer;

    #[tokio::test]
    async fn test_should_surface_404_as_api_error() {
        let server = MockMerchantServer::start_without_verifier().await;
        let client = server.client(OpenAuth);

        let err = client
            .request("GET", "payment_request/missing/status/404", None)
            .await
            .unwrap_err();
        match err {
            MapiError::Api(api) => {
                assert_eq!(api.status, 404);
                assert_eq!(api.body, r#"{"error":"not found"}"#);
                assert_eq!(api.headers.get("content-type"), Some("application/json"));
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_should_reject_non_utf8_response() {
        let server = MockMerchantServer::start_without_verifier().await;
        let client = server.client(OpenAuth);

        let err = client.request("GET", "binary", None).await.unwrap_err();
        assert!(matches!(err, MapiError::Encoding(ref e) if e.status == 200));
    }

    #[tokio::test]
    async fn test_should_not_send_invalid_payload() {
        let server = MockMerchantServer::start_without_verifier().await;
        let client = server.client(OpenAuth);

        let err = client
            .call(
                MapiOperation::CreatePaymentRequest,
                "payment_request/",
                &json!({"amount": "10.00", "currency": "NOKK"}),
            )
            .await
            .unwrap_err();
        let MapiError::Validation(validation) = err else {
            panic!("expected validation error");
        };
        assert!(validation.fields().contains(&"currency"));
        assert!(validation.fields().contains(&"customer"));
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_should_report_connection_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = MapiClient::builder()
            .base_url(Url::parse(&format!("http://{addr}/merchant/v1/")).unwrap())
            .transport(Arc::new(ReqwestTransport::new()))
            .build();
        let err = client.request("GET", "pos/", None).await.unwrap_err();
        assert!(matches!(err, MapiError::Transport(TransportError::Request(_))));
    }
}
