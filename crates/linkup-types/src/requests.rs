//! Request payloads accepted by the feed store.
//!
//! Every field is `#[serde(default)]` so a missing field deserializes to an
//! empty string and is reported by [`validator`] as a validation failure
//! rather than a body-parsing failure. Call `normalized()` before
//! `validate()` so whitespace-only input counts as absent.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::{Validate, ValidationErrors};

/// Body of `POST /posts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase", default)]
pub struct NewPost {
    /// Author identifier.
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,
    /// Author display name.
    #[validate(length(min = 1, message = "userName is required"))]
    pub user_name: String,
    /// Author title.
    pub user_title: String,
    /// Author avatar reference.
    pub user_avatar: String,
    /// Post body.
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
}

impl NewPost {
    /// Trim every field.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            user_id: trimmed(self.user_id),
            user_name: trimmed(self.user_name),
            user_title: trimmed(self.user_title),
            user_avatar: trimmed(self.user_avatar),
            content: trimmed(self.content),
        }
    }
}

/// Body of `POST /posts/{id}/comment`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase", default)]
pub struct NewComment {
    /// Author identifier.
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,
    /// Author display name.
    #[validate(length(min = 1, message = "userName is required"))]
    pub user_name: String,
    /// Author title.
    pub user_title: String,
    /// Author avatar reference.
    pub user_avatar: String,
    /// Comment body.
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
}

impl NewComment {
    /// Trim every field.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            user_id: trimmed(self.user_id),
            user_name: trimmed(self.user_name),
            user_title: trimmed(self.user_title),
            user_avatar: trimmed(self.user_avatar),
            text: trimmed(self.text),
        }
    }
}

/// Body of `POST /posts/{id}/like`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase", default)]
pub struct LikeRequest {
    /// The user whose like is toggled.
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,
}

impl LikeRequest {
    /// Trim the user identifier.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            user_id: trimmed(self.user_id),
        }
    }
}

/// Flatten [`ValidationErrors`] into a single human-readable message.
///
/// Messages are sorted so the output does not depend on hash order.
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .map(|e| {
            e.message
                .as_ref()
                .map_or_else(|| e.code.to_string(), ToString::to_string)
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

fn trimmed(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_owned()
    }
}
