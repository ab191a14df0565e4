//=========================================================================
// Shutdown Signal
//=========================================================================
//
// One-shot cancellation from an OS interrupt to the event loop.
//
// Architecture:
// ```text
//   ctrlc handler thread               Event loop (main thread)
//   ┌────────────────────┐            ┌──────────────────────────┐
//   │ blocks on SIGINT / │  bounded   │ top of every cycle:      │
//   │ SIGTERM            │──(1)──────►│   signal.is_raised()?    │
//   │ trigger.raise()    │            │   → finalize, exit       │
//   └────────────────────┘            └──────────────────────────┘
// ```
//
// The listener only notifies. Display teardown and exit stay in the loop,
// so there is exactly one shutdown path.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError};
use log::info;

//=== Internal Dependencies ===============================================

use super::PlatformError;

//=== ShutdownTrigger =====================================================

/// Sending half: raised by the interrupt listener.
#[derive(Debug, Clone)]
pub struct ShutdownTrigger {
    sender: Sender<()>,
}

impl ShutdownTrigger {
    /// Requests shutdown. Repeated raises collapse into one.
    pub fn raise(&self) {
        // A full channel already carries a pending request.
        let _ = self.sender.try_send(());
    }
}

//=== ShutdownSignal ======================================================

/// Receiving half: polled by the event loop without blocking.
#[derive(Debug)]
pub struct ShutdownSignal {
    receiver: Receiver<()>,
    raised: bool,
}

impl ShutdownSignal {
    /// Creates a connected trigger/signal pair.
    pub fn channel() -> (ShutdownTrigger, ShutdownSignal) {
        let (sender, receiver) = bounded(1);
        (
            ShutdownTrigger { sender },
            ShutdownSignal {
                receiver,
                raised: false,
            },
        )
    }

    /// Returns `true` once shutdown has been requested; stays `true` after.
    ///
    /// A trigger that was dropped without raising leaves the signal
    /// permanently lowered.
    pub fn is_raised(&mut self) -> bool {
        if !self.raised {
            match self.receiver.try_recv() {
                Ok(()) => self.raised = true,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {}
            }
        }
        self.raised
    }
}

//=== Interrupt Listener ==================================================

/// Installs the process-wide SIGINT/SIGTERM handler.
///
/// `ctrlc` runs the handler on its own thread, which blocks until a signal
/// arrives and then raises the returned signal.
///
/// # Errors
///
/// Returns [`PlatformError::SignalHandler`] if a handler is already
/// installed or the OS refuses registration. Can succeed only once per
/// process.
pub fn install_interrupt_listener() -> Result<ShutdownSignal, PlatformError> {
    let (trigger, signal) = ShutdownSignal::channel();

    ctrlc::set_handler(move || {
        info!(target: "platform", "Interrupt received, requesting shutdown");
        trigger.raise();
    })
    .map_err(|e| PlatformError::SignalHandler(e.to_string()))?;

    info!(target: "platform", "Interrupt listener installed");
    Ok(signal)
}

//=========================================================================
// Unit Tests
//=========================================================================
