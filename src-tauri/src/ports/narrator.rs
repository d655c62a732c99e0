//! Voice narration port

/// Speaks short announcements such as "You have selected G8Tab"
pub trait Narrator: Send + Sync {
    fn announce(&self, text: &str);
}
