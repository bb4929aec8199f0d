//! Transient notification types.

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient, non-blocking message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Unique within a page session; used as the render key.
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}
