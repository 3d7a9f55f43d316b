use thiserror::Error;

use crate::auth::AuthSignal;

#[derive(Debug, Error)]
pub enum FulfillmentError {
    /// No session cookie is configured for live requests.
    #[error("session cookie is not configured")]
    MissingCredential,

    /// The retailer rejected the session or bounced us to a sign-in page.
    #[error("session likely expired ({signal})")]
    AuthExpired { signal: AuthSignal },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid fulfillment URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to read fixture {path}: {source}")]
    FixtureIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// How a failed cycle is reported and whether the operator is alerted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    Configuration,
    Authentication,
    Transport,
    Parse,
}

impl FailureClass {
    /// Configuration and authentication failures need a human; the rest do not.
    #[must_use]
    pub fn alerts_operator(self) -> bool {
        matches!(
            self,
            FailureClass::Configuration | FailureClass::Authentication
        )
    }

    /// Stable machine-readable code used in API responses.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            FailureClass::Configuration => "config_error",
            FailureClass::Authentication => "auth_expired",
            FailureClass::Transport => "transport_error",
            FailureClass::Parse => "parse_error",
        }
    }
}

impl FulfillmentError {
    #[must_use]
    pub fn class(&self) -> FailureClass {
        match self {
            FulfillmentError::MissingCredential
            | FulfillmentError::InvalidUrl { .. }
            | FulfillmentError::FixtureIo { .. } => FailureClass::Configuration,
            FulfillmentError::AuthExpired { .. } => FailureClass::Authentication,
            FulfillmentError::Http(_) | FulfillmentError::UnexpectedStatus { .. } => {
                FailureClass::Transport
            }
            FulfillmentError::Deserialize { .. } => FailureClass::Parse,
        }
    }

    /// Upstream HTTP status that triggered an authentication failure, if any.
    #[must_use]
    pub fn auth_status(&self) -> Option<u16> {
        match self {
            FulfillmentError::AuthExpired {
                signal: AuthSignal::Status(status),
            } => Some(*status),
            _ => None,
        }
    }
}
