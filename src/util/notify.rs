use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
}

/// A transient, non-blocking notification shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
}

impl Notification {
    /// Rejection shown when a submission is missing name or phone.
    pub fn required_fields() -> Self {
        Notification {
            title: "Campos obrigatórios".to_string(),
            description: "Por favor, preencha nome e telefone.".to_string(),
            kind: NotificationKind::Warning,
        }
    }

    /// Confirmation shown once the WhatsApp redirect has been issued.
    pub fn redirecting() -> Self {
        Notification {
            title: "Redirecionando para WhatsApp".to_string(),
            description: "Complete o envio pelo WhatsApp para finalizar seu orçamento.".to_string(),
            kind: NotificationKind::Success,
        }
    }
}

/// Delivery capability for notifications; the host UI decides how to render
/// them.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Sink that forwards notifications to the tracing pipeline.
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => {
                info!(title = %notification.title, "{}", notification.description)
            }
            NotificationKind::Warning => {
                warn!(title = %notification.title, "{}", notification.description)
            }
        }
    }
}
