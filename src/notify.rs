//! One-way warning channel towards the UI.

use std::fmt;

use tokio::sync::mpsc;
use tracing::warn;

/// User-visible rejection or failure message. The texts are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Warning {
    StockExceeded,
    AddFailed,
    RemoveFailed,
    UpdateFailed,
}

impl Warning {
    pub fn message(&self) -> &'static str {
        match self {
            Warning::StockExceeded => "requested quantity exceeds stock",
            Warning::AddFailed => "failed to add product",
            Warning::RemoveFailed => "failed to remove product",
            Warning::UpdateFailed => "failed to change product quantity",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Fire-and-forget sink for warnings. Must not block the cart.
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, warning: Warning);
}

/// Emits each warning as a `tracing` event.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, warning: Warning) {
        warn!(warning = %warning, "Cart warning");
    }
}

/// Forwards warnings to a receiver the UI drains.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Warning>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Warning>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, warning: Warning) {
        // Nobody listening is fine.
        let _ = self.sender.send(warning);
    }
}
