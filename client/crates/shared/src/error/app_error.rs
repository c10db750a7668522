//! Application Error - Unified user-facing error type
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

type Text = Cow<'static, str>;

/// 画面表示用の統一エラー型
///
/// 各クレートのエラー（`ClientError`, `AuthError`, `PortalError`）は
/// `to_app_error()` でこの型に変換されます。`message` に入るのは
/// サーバーが返した文字列か固定の文言だけです。
///
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::from_status(409, "You have already applied to this scheme");
/// assert_eq!(err.kind(), ErrorKind::Conflict);
///
/// let err = AppError::unauthorized("Your session has expired")
///     .with_action("Please sign in again");
/// assert_eq!(err.action(), Some("Please sign in again"));
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Text,
    /// 次に取るべき操作（再ログインなど）
    action: Option<Text>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// アプリケーション結果型エイリアス
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Text>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            source: None,
        }
    }

    /// サーバーが返したステータスから作成
    pub fn from_status(status: u16, message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::from_status_code(status), message)
    }

    /// 401: セッション切れ
    pub fn unauthorized(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// 409: 同じレコードへの操作が競合
    pub fn conflict(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// 応答形式が想定外
    pub fn bad_gateway(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::BadGateway, message)
    }

    /// サーバーに到達できない
    pub fn network(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    pub fn with_action(mut self, action: impl Into<Text>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// 元のエラーを保持（表示はされない）
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// 通信失敗時は `None`
    #[inline]
    pub fn status_code(&self) -> Option<u16> {
        self.kind.status_code()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    #[inline]
    pub fn is_unauthorized(&self) -> bool {
        self.kind == ErrorKind::Unauthorized
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("action", &self.action)
            .field("source", &self.source)
            .finish()
    }
}

/// `message` に続けて、あれば `action` を表示
impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.action {
            Some(action) => write!(f, "{}. {}", self.message, action),
            None => f.write_str(&self.message),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_keeps_server_text() {
        let err = AppError::from_status(409, "You have already applied to this scheme");
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.status_code(), Some(409));
        assert_eq!(err.to_string(), "You have already applied to this scheme");
    }

    #[test]
    fn test_display_appends_action() {
        let err = AppError::unauthorized("Your session has expired")
            .with_action("Please sign in again");
        assert!(err.is_unauthorized());
        assert_eq!(
            err.to_string(),
            "Your session has expired. Please sign in again"
        );
    }

    #[test]
    fn test_network_error_has_no_status() {
        let err = AppError::network("Could not reach the server");
        assert_eq!(err.status_code(), None);
        assert!(!err.kind().is_server_error());
    }

    #[test]
    fn test_source_is_hidden_from_message() {
        let io = std::io::Error::other("disk unplugged");
        let err = AppError::bad_gateway("Unexpected response from server").with_source(io);
        assert!(err.source().is_some());
        assert!(!err.to_string().contains("disk"));
    }
}
