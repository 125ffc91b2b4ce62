//! Error Kind
//!
//! The three ways a request can fail: it could not be parsed, it parsed but
//! broke a schema rule, or the server (usually the store) failed.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Body is not JSON
    BadRequest,
    /// Body is JSON but fails validation
    UnprocessableEntity,
    /// Storage and everything else
    InternalServerError,
}

impl ErrorKind {
    pub const fn status_code(self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::InternalServerError => 500,
        }
    }

    /// Reason phrase, used as the problem `title`
    pub const fn title(self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::InternalServerError => "Internal Server Error",
        }
    }

}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_title() {
        let cases = [
            (ErrorKind::BadRequest, 400, "Bad Request"),
            (ErrorKind::UnprocessableEntity, 422, "Unprocessable Entity"),
            (ErrorKind::InternalServerError, 500, "Internal Server Error"),
        ];
        for (kind, status, title) in cases {
            assert_eq!(kind.status_code(), status);
            assert_eq!(kind.to_string(), title);
        }
    }
}
