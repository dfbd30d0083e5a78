//! Events emitted by the editor and the notifications derived from them.
//!
//! The editor never shows anything itself. Form controllers and the session
//! push [`EditorEvent`]s into an [`EventSink`]; the shell decides how to
//! present them, usually by turning them into a [`Notification`].

use std::fmt;

use crate::settings::NotificationSettings;

/// Kind of nested entity an event or error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Section,
    Chapter,
}

impl EntityKind {
    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Section => "Section",
            Self::Chapter => "Chapter",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Section => f.write_str("section"),
            Self::Chapter => f.write_str("chapter"),
        }
    }
}

/// What a staged change did to the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagedChange {
    Added,
    Updated,
    Deleted,
}

impl StagedChange {
    pub fn past_tense(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }
}

/// Something the user should know about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// A mutation was committed to the draft but not persisted yet.
    Staged {
        entity: EntityKind,
        change: StagedChange,
        section_index: usize,
        chapter_index: Option<usize>,
    },
    /// The whole draft was replaced (fresh load).
    DraftReplaced { sections: usize },
    /// The draft was flushed by the save coordinator.
    Saved { sections: usize },
    /// The save coordinator reported a failure.
    SaveFailed { reason: String },
}

/// Receiver for editor events.
pub trait EventSink {
    fn emit(&mut self, event: EditorEvent);
}

impl EventSink for Vec<EditorEvent> {
    fn emit(&mut self, event: EditorEvent) {
        self.push(event);
    }
}

/// Type of notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

/// A user-facing message derived from an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    /// Build the notification for an event, if it warrants one.
    pub fn for_event(event: &EditorEvent, settings: &NotificationSettings) -> Option<Self> {
        if !settings.enabled {
            return None;
        }
        match event {
            EditorEvent::Staged { entity, change, .. } => Some(Self {
                message: format!(
                    "{} {} successfully but {}",
                    entity.label(),
                    change.past_tense(),
                    settings.staged_reminder
                ),
                kind: NotificationKind::Success,
            }),
            EditorEvent::DraftReplaced { .. } => None,
            EditorEvent::Saved { .. } => Some(Self {
                message: "Course saved".to_string(),
                kind: NotificationKind::Success,
            }),
            EditorEvent::SaveFailed { reason } => Some(Self {
                message: reason.clone(),
                kind: NotificationKind::Error,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staged_notification_reminds_to_save() {
        let event = EditorEvent::Staged {
            entity: EntityKind::Section,
            change: StagedChange::Added,
            section_index: 0,
            chapter_index: None,
        };
        let notification =
            Notification::for_event(&event, &NotificationSettings::default()).unwrap();
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(
            notification.message,
            "Section added successfully but you need to save the course to apply the changes"
        );
    }

    #[test]
    fn test_disabled_notifications() {
        let settings = NotificationSettings {
            enabled: false,
            ..NotificationSettings::default()
        };
        let event = EditorEvent::Saved { sections: 1 };
        assert!(Notification::for_event(&event, &settings).is_none());
    }
}
