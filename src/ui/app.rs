use crate::counter::data::CounterStoreImpl;
use crate::counter::view_model::{CounterView, CounterViewModel};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Terminal-side state wrapped around the counter view-model.
pub struct App {
    view_model: CounterViewModel<CounterStoreImpl>,
    should_quit: bool,
    mounted: bool,
    spinner_frame: usize,
}

impl App {
    pub fn new(view_model: CounterViewModel<CounterStoreImpl>) -> Self {
        Self {
            view_model,
            should_quit: false,
            mounted: false,
            spinner_frame: 0,
        }
    }

    /// Start the initial load. Only the first call has an effect.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        let _ = self.view_model.get_counter();
    }

    pub fn view(&self) -> CounterView {
        self.view_model.view()
    }

    pub fn last_error(&self) -> Option<String> {
        self.view_model.store().snapshot().last_error
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn increment(&mut self) {
        let _ = self.view_model.increment_counter();
    }

    /// Ignored while decrementing is not allowed, like a disabled button.
    pub fn decrement(&mut self) {
        if !self.view().can_decrement {
            return;
        }
        let _ = self.view_model.decrement_counter();
    }

    /// Fetch the remote value again.
    ///
    /// Skipped while a load is running, and while local changes are still
    /// on their way to the remote: the fetch would overwrite them with the
    /// older remote value.
    pub fn reload(&mut self) {
        if !self.can_reload() {
            tracing::debug!("Reload skipped");
            return;
        }
        let _ = self.view_model.get_counter();
    }

    pub fn can_reload(&self) -> bool {
        !self.view_model.store().snapshot().is_loading && !self.view_model.has_unsaved_changes()
    }

    pub fn on_tick(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame]
    }
}
