//! Health endpoint tests

use crate::common::*;

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = send(
        test_app(),
        Request::get("/health").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "void-gateway");
    assert!(json["version"].is_string());
}
