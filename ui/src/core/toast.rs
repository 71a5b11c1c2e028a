//! Notification toasts.
//!
//! A toast is inserted off-screen, slides in after [`ENTER_DELAY_MS`], slides
//! out once [`DISPLAY_MS`] have passed since creation and is removed
//! [`EXIT_MS`] later. There is no queue and no cap: concurrent toasts share
//! the same top-right placement and simply overlap.

use serde::{Deserialize, Serialize};

pub const ENTER_DELAY_MS: u64 = 100;
pub const DISPLAY_MS: u64 = 4000;
pub const EXIT_MS: u64 = 300;

/// Sleeps between lifecycle refreshes, in order, from creation.
pub const PHASE_STEPS_MS: [u64; 3] = [ENTER_DELAY_MS, DISPLAY_MS - ENTER_DELAY_MS, EXIT_MS];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastSeverity {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastSeverity::Info => "info",
            ToastSeverity::Success => "success",
            ToastSeverity::Error => "error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            ToastSeverity::Success => "#2ecc71",
            ToastSeverity::Error => "#e74c3c",
            ToastSeverity::Info => "#3498db",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Shown,
    Leaving,
    Gone,
}

impl ToastPhase {
    pub fn at(elapsed_ms: f64) -> Self {
        if elapsed_ms < ENTER_DELAY_MS as f64 {
            ToastPhase::Entering
        } else if elapsed_ms < DISPLAY_MS as f64 {
            ToastPhase::Shown
        } else if elapsed_ms < (DISPLAY_MS + EXIT_MS) as f64 {
            ToastPhase::Leaving
        } else {
            ToastPhase::Gone
        }
    }

    pub fn transform(self) -> &'static str {
        match self {
            ToastPhase::Shown => "translateX(0)",
            _ => "translateX(100%)",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: ToastSeverity,
    pub created_at_ms: f64,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn class(&self) -> String {
        format!("notification notification-{}", self.severity.as_str())
    }

    pub fn style(&self) -> String {
        format!(
            "background: {}; transform: {};",
            self.severity.background(),
            self.phase.transform()
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastStack {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn show(&mut self, message: impl Into<String>, severity: ToastSeverity, now_ms: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            severity,
            created_at_ms: now_ms,
            phase: ToastPhase::Entering,
        });
        id
    }

    /// Advance every toast to the phase matching `now_ms`; drop finished ones.
    pub fn refresh(&mut self, now_ms: f64) {
        for toast in self.toasts.iter_mut() {
            toast.phase = ToastPhase::at(now_ms - toast.created_at_ms);
        }
        self.toasts.retain(|toast| toast.phase != ToastPhase::Gone);
    }

    /// Remove one toast regardless of its phase. Returns false if it was
    /// already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
