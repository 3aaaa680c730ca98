//! Outbound notification payloads.

/// Subject and body of one published message. Constructed per invocation,
/// sent once, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub message: String,
}

impl Notification {
    /// The routine message sent after every resize while volume is normal.
    pub fn resized() -> Self {
        Self {
            subject: "Lambda SNS Email Notification".into(),
            message: "Resized Image".into(),
        }
    }

    /// The escalation message sent when the trailing-window count crosses
    /// the volume threshold.
    pub fn high_volume(count: usize) -> Self {
        Self {
            subject: "Lambda SNS Email Notification - High Resize Volume".into(),
            message: format!(
                "More than 5 objects have been resized in the last 10 minutes. Total: {}",
                count
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_volume_message_carries_the_count() {
        let n = Notification::high_volume(7);
        assert!(n.message.contains("Total: 7"));
        assert!(n.subject.contains("High Resize Volume"));
    }
}
