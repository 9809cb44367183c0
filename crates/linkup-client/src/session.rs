//! Client-side session identity.
//!
//! There is no real authentication. Signing in or signing up only
//! synthesizes an [`Identity`] in memory; the store never sees a session,
//! only the denormalized identity fields copied into each request.

use chrono::{DateTime, Utc};
use linkup_types::{NewComment, NewPost, UserId};

const DEMO_AVATAR: &str = "https://placehold.co/200x200/60A5FA/FFFFFF?text=DU";
const SIGNUP_AVATAR_BASE: &str = "https://placehold.co/200x200/9CA3AF/FFFFFF?text=";

/// Shown on the profile when the identity has no "about" text.
pub const EMPTY_ABOUT: &str = "This user hasn't written an 'about' section yet.";

/// The signed-in user as the client knows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// User identifier sent with every request.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Title shown under the name.
    pub title: String,
    /// Avatar URL.
    pub avatar: String,
    /// Free-form profile text.
    pub about: String,
}

impl Identity {
    /// The fixed identity used by the login form.
    pub fn demo() -> Self {
        Self {
            id: UserId::from("user_12345"),
            name: String::from("Demo User"),
            title: String::from("Frontend Developer"),
            avatar: DEMO_AVATAR.to_owned(),
            about: String::from("A passionate developer exploring MERN stack."),
        }
    }

    /// A fresh identity for the signup form.
    ///
    /// The id is derived from `now` in epoch milliseconds. A blank name
    /// becomes "Anonymous" and the avatar shows the name's first two
    /// letters.
    pub fn signup(name: &str, now: DateTime<Utc>) -> Self {
        let name = name.trim();
        let initials: String = if name.is_empty() {
            String::from("A")
        } else {
            name.chars().take(2).collect::<String>().to_uppercase()
        };

        Self {
            id: UserId(format!("user_{}", now.timestamp_millis())),
            name: if name.is_empty() {
                String::from("Anonymous")
            } else {
                name.to_owned()
            },
            title: String::from("New LinkUp Member"),
            avatar: format!("{SIGNUP_AVATAR_BASE}{initials}"),
            about: String::new(),
        }
    }

    /// The about text, or the placeholder when there is none.
    pub fn about_or_placeholder(&self) -> &str {
        if self.about.is_empty() {
            EMPTY_ABOUT
        } else {
            &self.about
        }
    }

    /// A create-post request carrying this identity.
    pub fn new_post(&self, content: &str) -> NewPost {
        NewPost {
            user_id: self.id.to_string(),
            user_name: self.name.clone(),
            user_title: self.title.clone(),
            user_avatar: self.avatar.clone(),
            content: content.to_owned(),
        }
    }

    /// A comment request carrying this identity.
    pub fn new_comment(&self, text: &str) -> NewComment {
        NewComment {
            user_id: self.id.to_string(),
            user_name: self.name.clone(),
            user_title: self.title.clone(),
            user_avatar: self.avatar.clone(),
            text: text.to_owned(),
        }
    }
}

/// Two-state session machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// No identity; the main view is hidden.
    #[default]
    Unauthenticated,
    /// Identity held in memory; the main view is shown.
    Authenticated(Identity),
}

impl Session {
    /// The active identity, if any.
    pub const fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Unauthenticated => None,
            Self::Authenticated(identity) => Some(identity),
        }
    }

    /// Whether the main view should be shown.
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Transition to authenticated as `identity`.
    pub fn sign_in(&mut self, identity: Identity) {
        *self = Self::Authenticated(identity);
    }

    /// Transition back to unauthenticated.
    pub fn sign_out(&mut self) {
        *self = Self::Unauthenticated;
    }
}
