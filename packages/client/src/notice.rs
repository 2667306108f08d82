use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Default visibility window of a notice.
pub const DEFAULT_DISMISS: Duration = Duration::from_millis(3000);

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

struct Active {
    message: String,
    deadline: Instant,
    generation: u64,
}

#[derive(Default)]
struct Slot {
    active: Option<Active>,
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

/// Single-slot, auto-dismissing notice.
///
/// `show` replaces whatever is visible and restarts the dismissal window. The
/// pending dismissal of the replaced notice is aborted, so one window is live
/// at a time. Dropping the notifier aborts its timer.
pub struct Notifier {
    slot: Arc<Mutex<Slot>>,
    window: Duration,
}

impl Notifier {
    pub fn new(window: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            window,
        }
    }

    pub async fn show(&self, message: impl Into<String>) {
        let mut slot = self.slot.lock().await;
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }

        slot.generation += 1;
        let generation = slot.generation;
        let deadline = Instant::now() + self.window;
        slot.active = Some(Active {
            message: message.into(),
            deadline,
            generation,
        });

        let shared = Arc::clone(&self.slot);
        slot.timer = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let mut slot = shared.lock().await;
            if slot
                .active
                .as_ref()
                .is_some_and(|active| active.generation == generation)
            {
                slot.active = None;
                slot.timer = None;
            }
        }));
    }

    /// The visible notice, if its window has not elapsed.
    pub async fn current(&self) -> Option<Notice> {
        let slot = self.slot.lock().await;
        slot.active
            .as_ref()
            .filter(|active| Instant::now() < active.deadline)
            .map(|active| Notice {
                message: active.message.clone(),
            })
    }

    /// Close the visible notice early.
    pub async fn dismiss(&self) {
        let mut slot = self.slot.lock().await;
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        slot.active = None;
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_DISMISS)
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.slot.try_lock() {
            if let Some(timer) = slot.timer.take() {
                timer.abort();
            }
        }
    }
}
