//! API documentation.

use axum::response::Html;
use utoipa::OpenApi;

use crate::infrastructure::http::open_api::ApiDocs;

const SPEC_URL: &str = "/api/v1/openapi.json";

/// Stoplight Elements page rendering the v1 OpenAPI document.
pub async fn handler() -> Html<String> {
    let title = ApiDocs::openapi().info.title;

    Html(format!(
        r#"<!doctype html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title} API</title>
    <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
    <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
</head>
<body>
    <elements-api apiDescriptionUrl="{SPEC_URL}" router="hash" layout="sidebar" />
</body>
</html>
"#
    ))
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use testresult::TestResult;

    use super::SPEC_URL;
    use crate::infrastructure::http::{router, state::tests::test_state};

    #[tokio::test]
    async fn test_docs_handler() -> TestResult {
        let response = TestServer::new(router(test_state(None, None)))?
            .get("/api/v1")
            .await;

        response.assert_status_ok();

        let raw_text = response.text();

        assert!(raw_text.contains("Account Emails API"));
        assert!(raw_text.contains(SPEC_URL));

        Ok(())
    }
}
