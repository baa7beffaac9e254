use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub title: String,
    pub time: String,
    pub hall_number: i64,
}

impl Show {
    pub fn new(title: impl Into<String>, time: impl Into<String>, hall_number: i64) -> Self {
        Self {
            title: title.into(),
            time: time.into(),
            hall_number,
        }
    }
}

impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hall {}: {} at {}", self.hall_number, self.title, self.time)
    }
}
