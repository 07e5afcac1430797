//! Error kinds and the code dispatch table.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// The category of a server-reported error.
///
/// Each known monday.com error code maps to exactly one kind. Anything else
/// resolves to [`ErrorKind::Generic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Unknown or missing error code.
    Generic,
    InternalServerError,
    Complexity,
    DailyLimitExceeded,
    ConcurrencyLimitExceeded,
    RateLimitExceeded,
    IpRateLimitExceeded,
    ApiTemporarilyBlocked,
    Unauthorized,
    UserUnauthorized,
    MissingRequiredPermissions,
    ResourceNotFound,
    BadRequest,
    ParseError,
    JsonParse,
    InvalidArgument,
    InvalidUserId,
    InvalidVersion,
    InvalidColumnId,
    InvalidItemId,
    InvalidBoardId,
    InvalidGroupId,
    ColumnValue,
    CorrectedValue,
    CreateBoard,
    ItemNameTooLong,
    ItemsLimitation,
    DeleteLastGroup,
    RecordValidation,
}

const CODES: [(&str, ErrorKind); 28] = [
    ("INTERNAL_SERVER_ERROR", ErrorKind::InternalServerError),
    ("ComplexityException", ErrorKind::Complexity),
    ("DAILY_LIMIT_EXCEEDED", ErrorKind::DailyLimitExceeded),
    ("maxConcurrencyExceeded", ErrorKind::ConcurrencyLimitExceeded),
    ("RateLimitExceeded", ErrorKind::RateLimitExceeded),
    ("IP_RATE_LIMIT_EXCEEDED", ErrorKind::IpRateLimitExceeded),
    ("API_TEMPORARILY_BLOCKED", ErrorKind::ApiTemporarilyBlocked),
    ("Unauthorized", ErrorKind::Unauthorized),
    ("USER_UNAUTHORIZED", ErrorKind::UserUnauthorized),
    ("missingRequiredPermissions", ErrorKind::MissingRequiredPermissions),
    ("ResourceNotFoundException", ErrorKind::ResourceNotFound),
    ("BadRequest", ErrorKind::BadRequest),
    ("ParseError", ErrorKind::ParseError),
    ("JsonParseException", ErrorKind::JsonParse),
    ("InvalidArgumentException", ErrorKind::InvalidArgument),
    ("InvalidUserIdException", ErrorKind::InvalidUserId),
    ("InvalidVersionException", ErrorKind::InvalidVersion),
    ("InvalidColumnIdException", ErrorKind::InvalidColumnId),
    ("InvalidItemIdException", ErrorKind::InvalidItemId),
    ("InvalidBoardIdException", ErrorKind::InvalidBoardId),
    ("InvalidGroupIdException", ErrorKind::InvalidGroupId),
    ("ColumnValueException", ErrorKind::ColumnValue),
    ("CorrectedValueException", ErrorKind::CorrectedValue),
    ("CreateBoardException", ErrorKind::CreateBoard),
    ("ItemNameTooLongException", ErrorKind::ItemNameTooLong),
    ("ItemsLimitationException", ErrorKind::ItemsLimitation),
    ("DeleteLastGroupException", ErrorKind::DeleteLastGroup),
    ("RecordValidationError", ErrorKind::RecordValidation),
];

static DISPATCH: LazyLock<HashMap<&'static str, ErrorKind>> =
    LazyLock::new(|| CODES.into_iter().collect());

impl ErrorKind {
    /// Map an error code to its kind.
    ///
    /// Unknown and absent codes give [`ErrorKind::Generic`].
    pub fn resolve(code: Option<&str>) -> Self {
        code.and_then(|code| DISPATCH.get(code).copied())
            .unwrap_or(Self::Generic)
    }

    /// Every known code with its kind, in table order.
    pub fn known_codes() -> impl Iterator<Item = (&'static str, ErrorKind)> {
        CODES.into_iter()
    }

    /// The monday.com code for this kind, `None` for [`ErrorKind::Generic`].
    pub fn code(self) -> Option<&'static str> {
        CODES
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(code, _)| *code)
    }

    /// The message used when the server sends none.
    pub fn default_message(self) -> &'static str {
        match self {
            Self::Generic => "An error occurred while calling the monday.com API",
            Self::InternalServerError => "Internal server error, the request could not be processed",
            Self::Complexity => "Complexity budget exhausted, the query exceeded the allowed complexity",
            Self::DailyLimitExceeded => "Daily limit of API requests exceeded",
            Self::ConcurrencyLimitExceeded => "Maximum number of concurrent requests exceeded",
            Self::RateLimitExceeded => "Rate limit of requests per minute exceeded",
            Self::IpRateLimitExceeded => "Rate limit of requests from this IP address exceeded",
            Self::ApiTemporarilyBlocked => "API access is temporarily blocked",
            Self::Unauthorized => "Not authorized, check the API token",
            Self::UserUnauthorized => "The user is not authorized to perform this action",
            Self::MissingRequiredPermissions => "The token is missing the permissions this request requires",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::BadRequest => "Bad request, the query is malformed",
            Self::ParseError => "The query could not be parsed",
            Self::JsonParse => "The JSON in the request could not be parsed",
            Self::InvalidArgument => "An argument of the query is invalid",
            Self::InvalidUserId => "The user ID does not exist",
            Self::InvalidVersion => "The requested API version is invalid",
            Self::InvalidColumnId => "The column ID does not exist",
            Self::InvalidItemId => "The item ID does not exist",
            Self::InvalidBoardId => "The board ID does not exist",
            Self::InvalidGroupId => "The group ID does not exist",
            Self::ColumnValue => "The column value is not formatted correctly",
            Self::CorrectedValue => "The column value has the wrong type for this column",
            Self::CreateBoard => "The board could not be created",
            Self::ItemNameTooLong => "The item name exceeds the character limit",
            Self::ItemsLimitation => "The board has reached its item limit",
            Self::DeleteLastGroup => "The last group of a board cannot be deleted",
            Self::RecordValidation => "The record failed validation",
        }
    }

    /// Whether this kind means the client should back off and retry later.
    pub fn is_rate_limit(self) -> bool {
        matches!(
            self,
            Self::Complexity
                | Self::DailyLimitExceeded
                | Self::ConcurrencyLimitExceeded
                | Self::RateLimitExceeded
                | Self::IpRateLimitExceeded
                | Self::ApiTemporarilyBlocked
        )
    }

    /// Whether this kind is a permission or authentication failure.
    pub fn is_authorization(self) -> bool {
        matches!(
            self,
            Self::Unauthorized | Self::UserUnauthorized | Self::MissingRequiredPermissions
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
