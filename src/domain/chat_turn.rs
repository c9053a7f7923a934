use std::fmt;

/// Role tag for a single conversation turn.
///
/// The wire mapping is total: `"user"` maps to [`TurnRole::User`] and every
/// other role string maps to [`TurnRole::Assistant`]. Callers sending
/// `"model"`, `"assistant"`, or anything else all land on the assistant side,
/// so a malformed role can never reject a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnRole {
    User,
    Assistant,
}

impl TurnRole {
    pub fn from_wire(role: &str) -> Self {
        match role {
            "user" => TurnRole::User,
            _ => TurnRole::Assistant,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Assistant => "assistant",
        }
    }
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One turn of a conversation, as supplied by the caller. The caller is the
/// source of truth for history; the service never reorders or stores turns.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: TurnRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}
