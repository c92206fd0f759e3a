use modelsmith::plantuml::{validate_model, RenderClient};

const VALID_SOURCE: &str = "@startuml\nclass Library {\n  name : String\n}\n@enduml";

#[tokio::test]
async fn accepts_model_the_server_renders() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            mockito::Matcher::Regex(r"^/svg/[0-9A-Za-z_-]+$".to_string()),
        )
        .with_status(200)
        .with_header("content-type", "image/svg+xml")
        .with_body("<svg/>")
        .create_async()
        .await;

    let client = RenderClient::new(Some(&server.url())).unwrap();
    let report = validate_model(VALID_SOURCE, &client).await.unwrap();

    assert!(report.structure_ok);
    assert_eq!(report.remote_ok, Some(true));
    assert!(report.is_valid());
    mock.assert_async().await;
}

#[tokio::test]
async fn reports_server_rejection_with_reason() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock(
            "GET",
            mockito::Matcher::Regex(r"^/svg/[0-9A-Za-z_-]+$".to_string()),
        )
        .with_status(400)
        .with_body("Syntax Error? (line 2)\nsome details")
        .create_async()
        .await;

    let client = RenderClient::new(Some(&server.url())).unwrap();
    let report = validate_model(VALID_SOURCE, &client).await.unwrap();

    assert!(report.structure_ok);
    assert_eq!(report.remote_ok, Some(false));
    assert!(!report.is_valid());
    assert!(report.message.contains("400"));
    assert!(report.message.contains("Syntax Error?"));
}

#[tokio::test]
async fn structural_check_fails_without_markers() {
    // The server would accept anything; the structural check must fail first.
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            mockito::Matcher::Regex(r"^/svg/.*$".to_string()),
        )
        .with_status(200)
        .expect(0)
        .create_async()
        .await;

    let client = RenderClient::new(Some(&server.url())).unwrap();
    let report = validate_model("class Library {}", &client).await.unwrap();

    assert!(!report.structure_ok);
    assert!(report.remote_ok.is_none());
    mock.assert_async().await;
}
