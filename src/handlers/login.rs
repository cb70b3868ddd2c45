use crate::error::Error;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder credential check: the one username the server accepts.
static KNOWN_USERNAME: &str = "admin";

/// Fixed token issued on a match. There is no generation, validation, or
/// expiry; clients get the same opaque literal every time.
static TOKEN: &str = "token123";

#[derive(Debug, Deserialize)]
pub struct Req {
    /// Kept as a raw JSON value so a non-string username (or a missing one)
    /// falls through to the unauthorized branch instead of failing to
    /// deserialize.
    #[serde(default)]
    username: Value,
}

#[derive(Debug, Serialize)]
pub struct Resp {
    token: String,
}

#[tracing::instrument(skip(req))]
pub async fn handler(Json(req): Json<Req>) -> Result<Json<Resp>, Error> {
    if req.username.as_str() != Some(KNOWN_USERNAME) {
        return Err(Error::Unauthorized);
    }

    Ok(Json(Resp {
        token: TOKEN.to_string(),
    }))
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test_log::test(tokio::test)]
    async fn test_known_username() {
        let req = Req {
            username: json!("admin"),
        };

        let Json(resp) = handler(Json(req)).await.unwrap();

        assert_eq!(resp.token, "token123");
    }

    #[test_log::test(tokio::test)]
    async fn test_success_wire_shape() {
        let req = Req {
            username: json!("admin"),
        };

        let Json(resp) = handler(Json(req)).await.unwrap();

        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({"token": "token123"})
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_unknown_username() {
        let req = Req {
            username: json!("guest"),
        };

        let err = handler(Json(req)).await.unwrap_err();

        assert_eq!(err, Error::Unauthorized);
    }

    #[test_log::test(tokio::test)]
    async fn test_case_sensitive_match() {
        let req = Req {
            username: json!("Admin"),
        };

        let err = handler(Json(req)).await.unwrap_err();

        assert_eq!(err, Error::Unauthorized);
    }

    #[test_log::test(tokio::test)]
    async fn test_missing_username() {
        let req: Req = serde_json::from_str("{}").unwrap();

        let err = handler(Json(req)).await.unwrap_err();

        assert_eq!(err, Error::Unauthorized);
    }

    #[test_log::test(tokio::test)]
    async fn test_non_string_username() {
        let req = Req {
            username: json!(42),
        };

        let err = handler(Json(req)).await.unwrap_err();

        assert_eq!(err, Error::Unauthorized);
    }
}
