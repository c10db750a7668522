//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that classifies failures observed by the
//! client, keyed by the HTTP status the server answered with.

use serde::Serialize;

/// エラー種別の列挙体
///
/// サーバーが返した HTTP ステータス、または通信そのものの失敗を分類します。
/// 通信失敗（接続不可など）は `Network` として扱い、ステータスコードを持ちません。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::from_status_code(404);
/// assert_eq!(kind, ErrorKind::NotFound);
/// assert_eq!(kind.status_code(), Some(404));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - Bad Request: 入力内容が不正
    BadRequest,
    /// 401 - Unauthorized: セッションが無効（ログアウトを誘発する）
    Unauthorized,
    /// 403 - Forbidden: 権限不足
    Forbidden,
    /// 404 - Not Found: レコードが存在しない
    NotFound,
    /// 409 - Conflict: 既に存在する（重複申請など）
    Conflict,
    /// 422 - Unprocessable Entity: 処理不可能な入力
    UnprocessableEntity,
    /// 429 - Too Many Requests: レート制限超過
    TooManyRequests,
    /// 500 - Internal Server Error: サーバー内部エラー
    InternalServerError,
    /// 502 - Bad Gateway: 想定外の応答形式
    BadGateway,
    /// 503 - Service Unavailable: サービス利用不可
    ServiceUnavailable,
    /// 通信失敗: サーバーに到達できない
    Network,
    /// 上記以外のステータスコード
    Other(u16),
}

impl ErrorKind {
    /// HTTP ステータスコードから種別を判定
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::from_status_code(401), ErrorKind::Unauthorized);
    /// assert_eq!(ErrorKind::from_status_code(418), ErrorKind::Other(418));
    /// ```
    pub const fn from_status_code(code: u16) -> Self {
        match code {
            400 => ErrorKind::BadRequest,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::Conflict,
            422 => ErrorKind::UnprocessableEntity,
            429 => ErrorKind::TooManyRequests,
            500 => ErrorKind::InternalServerError,
            502 => ErrorKind::BadGateway,
            503 => ErrorKind::ServiceUnavailable,
            other => ErrorKind::Other(other),
        }
    }

    /// HTTP ステータスコードを取得
    ///
    /// ## Returns
    /// 通信失敗 (`Network`) の場合は `None`
    #[inline]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            ErrorKind::BadRequest => Some(400),
            ErrorKind::Unauthorized => Some(401),
            ErrorKind::Forbidden => Some(403),
            ErrorKind::NotFound => Some(404),
            ErrorKind::Conflict => Some(409),
            ErrorKind::UnprocessableEntity => Some(422),
            ErrorKind::TooManyRequests => Some(429),
            ErrorKind::InternalServerError => Some(500),
            ErrorKind::BadGateway => Some(502),
            ErrorKind::ServiceUnavailable => Some(503),
            ErrorKind::Network => None,
            ErrorKind::Other(code) => Some(*code),
        }
    }

    /// ユーザー向けの文字列表現を取得
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::TooManyRequests => "Too Many Requests",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::BadGateway => "Bad Gateway",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
            ErrorKind::Network => "Network Error",
            ErrorKind::Other(_) => "Unexpected Status",
        }
    }

    /// サーバー側のエラーかどうかを判定
    ///
    /// 5xx 系のエラーは `true` を返します。
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        match self.status_code() {
            Some(code) => code >= 500,
            None => false,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for code in [400, 401, 403, 404, 409, 422, 429, 500, 502, 503, 418, 504] {
            assert_eq!(ErrorKind::from_status_code(code).status_code(), Some(code));
        }
    }

    #[test]
    fn test_network_has_no_status() {
        assert_eq!(ErrorKind::Network.status_code(), None);
        assert!(!ErrorKind::Network.is_server_error());
    }

    #[test]
    fn test_error_classes() {
        assert!(ErrorKind::Other(504).is_server_error());
        assert!(ErrorKind::BadGateway.is_server_error());
        assert!(!ErrorKind::NotFound.is_server_error());
    }
}
