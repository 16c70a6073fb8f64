use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use normode::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

#[derive(Default)]
struct BarState {
    base_message: String,
}

/// Maps core progress events onto a single reusable terminal bar.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
    state: Arc<Mutex<BarState>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    /// A handler that tracks state without drawing anything.
    pub fn hidden() -> Self {
        Self::with_draw_target(ProgressDrawTarget::hidden())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::new(0)
            .with_style(Self::spinner_style())
            .with_message("Initializing...");
        pb.set_draw_target(target);
        pb.disable_steady_tick();
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
            state: Arc::new(Mutex::new(BarState::default())),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let handler = self.clone();
        Box::new(move |progress: Progress| handler.handle(progress))
    }

    fn handle(&self, progress: Progress) {
        let (Ok(pb), Ok(mut state)) = (self.pb.lock(), self.state.lock()) else {
            warn!("Progress bar mutex was poisoned. Cannot update progress.");
            return;
        };

        match progress {
            Progress::PhaseStart { name } => {
                pb.reset();
                pb.set_length(0);
                pb.set_style(Self::spinner_style());
                pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                pb.set_message(name.to_string());
                state.base_message = name.to_string();
            }
            Progress::PhaseFinish => {
                pb.disable_steady_tick();
                pb.finish_with_message(format!("✓ {}", state.base_message));
                state.base_message.clear();
            }
            Progress::TaskStart { total } => {
                pb.disable_steady_tick();
                pb.reset();
                pb.set_length(total);
                pb.set_position(0);
                pb.set_style(Self::bar_style());
            }
            Progress::TaskIncrement { amount } => {
                pb.inc(amount);
            }
            Progress::TaskFinish => {
                let length = pb.length().unwrap_or(0);
                if pb.position() < length {
                    pb.set_position(length);
                }
                pb.finish();
            }
            Progress::StatusUpdate { text } => {
                pb.set_message(format!("{} ({})", state.base_message, text));
            }
            Progress::Message(msg) => {
                if !pb.is_finished() {
                    pb.println(format!("  {}", msg));
                } else {
                    pb.set_message(msg);
                }
            }
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .expect("Failed to create spinner style template")
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<30} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .expect("Failed to create bar style template")
            .with_key(
                "eta",
                |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                    let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
                },
            )
            .progress_chars("━╸ ")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
