use std::fmt;

/// IMAP sequence number of a message within the selected mailbox.
pub type MessageId = u32;

/// One message pulled off the server, before it is written to disk.
#[derive(Debug, Clone)]
pub struct FetchedEmail {
    pub id: MessageId,
    pub sender: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Normal,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Normal => "NORMAL",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Business,
    Personal,
    Promotion,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "BUSINESS",
            Category::Personal => "PERSONAL",
            Category::Promotion => "PROMOTION",
            Category::Other => "OTHER",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the final report: filename plus the derived summary and labels.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailSummary {
    pub filename: String,
    pub summary: String,
    pub priority: Priority,
    pub category: Category,
}
