use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use error_stack::Report;
use kernel::{KernelError, PublicMessage};
use serde::Serialize;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl ErrorStatus {
    pub fn new(context: KernelError, message: impl Into<String>) -> Self {
        Self(Report::new(context).attach_printable(PublicMessage::new(message)))
    }

    fn status(&self) -> StatusCode {
        match self.0.current_context() {
            KernelError::Concurrency => StatusCode::CONFLICT,
            KernelError::Timeout => StatusCode::REQUEST_TIMEOUT,
            KernelError::Invalid => StatusCode::BAD_REQUEST,
            KernelError::NotFound => StatusCode::NOT_FOUND,
            KernelError::Unauthorized => StatusCode::UNAUTHORIZED,
            KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The latest public message, or the error kind when none was attached.
    fn message(&self) -> String {
        self.0
            .downcast_ref::<PublicMessage>()
            .map(ToString::to_string)
            .unwrap_or_else(|| self.0.current_context().to_string())
    }
}

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{:?}", self.0);
        } else {
            tracing::debug!(%status, "{}", self.0);
        }
        let body = ErrorResponse {
            error: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod test {
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use error_stack::Report;
    use kernel::{KernelError, PublicMessage};
    use serde_json::Value;

    use super::ErrorStatus;

    async fn render(status: ErrorStatus) -> (StatusCode, Value) {
        let response = status.into_response();
        let code = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (code, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn kinds_map_to_statuses() {
        let cases = [
            (KernelError::Concurrency, StatusCode::CONFLICT),
            (KernelError::Timeout, StatusCode::REQUEST_TIMEOUT),
            (KernelError::Invalid, StatusCode::BAD_REQUEST),
            (KernelError::NotFound, StatusCode::NOT_FOUND),
            (KernelError::Unauthorized, StatusCode::UNAUTHORIZED),
            (KernelError::Internal, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (kind, expected) in cases {
            let (code, _) = render(ErrorStatus::from(Report::new(kind))).await;
            assert_eq!(code, expected);
        }
    }

    #[tokio::test]
    async fn latest_public_message_is_rendered() {
        let report = Report::new(KernelError::Internal)
            .attach_printable(PublicMessage::new("first"))
            .attach_printable("connection reset by peer")
            .attach_printable(PublicMessage::new("Failed to delete author and related books"));
        let (code, body) = render(ErrorStatus::from(report)).await;
        assert_eq!(code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            serde_json::json!({ "error": "Failed to delete author and related books" })
        );
    }

    #[tokio::test]
    async fn diagnostics_never_leak() {
        let report = Report::new(KernelError::Internal).attach_printable("password=hunter2");
        let (_, body) = render(ErrorStatus::from(report)).await;
        assert_eq!(body, serde_json::json!({ "error": "Internal kernel error" }));
    }
}
