use crate::utils::format_duration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A playable podcast episode with its display metadata.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub title: String,
    pub members: String,
    pub thumbnail: String,
    /// Length in seconds
    pub duration: u64,
    pub url: String,
}

impl Episode {
    pub fn new(
        title: impl Into<String>,
        members: impl Into<String>,
        thumbnail: impl Into<String>,
        duration: u64,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            members: members.into(),
            thumbnail: thumbnail.into(),
            duration,
            url: url.into(),
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration)
    }

    pub fn format_duration(&self) -> String {
        format_duration(self.duration())
    }
}

impl fmt::Display for Episode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members = if self.members.is_empty() {
            "Unknown Members"
        } else {
            self.members.as_str()
        };

        write!(f, "{} - {} [{}]", members, self.title, self.format_duration())
    }
}
