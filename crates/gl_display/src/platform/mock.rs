//! In-memory windowing platform for tests
//!
//! Records every call into a shared [`MockState`] so tests can assert on what
//! the bootstrap and the display asked the platform to do.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use super::{NativeWindow, ProcAddress, WindowSpec, WindowSystem};
use crate::core::config::ContextVersion;
use crate::display::DisplayEvent;
use crate::error::{DisplayError, DisplayResult};

#[derive(Debug, Default)]
pub(crate) struct MockState {
    pub fail_init: bool,
    pub fail_create: bool,
    pub init_calls: u32,
    pub terminate_calls: u32,
    pub context_requests: Vec<ContextVersion>,
    pub windows_created: u32,
    pub windows_destroyed: u32,
    pub close_requested: bool,
    pub current_window: Option<u32>,
}

#[derive(Default)]
pub(crate) struct MockSystem {
    pub state: Rc<RefCell<MockState>>,
}

impl MockSystem {
    pub fn new() -> (Self, Rc<RefCell<MockState>>) {
        let system = Self::default();
        let state = Rc::clone(&system.state);
        (system, state)
    }
}

impl WindowSystem for MockSystem {
    fn init(&mut self) -> DisplayResult<()> {
        let mut state = self.state.borrow_mut();
        state.init_calls += 1;
        if state.fail_init {
            return Err(DisplayError::InitializationFailed("no display available".to_string()));
        }
        Ok(())
    }

    fn request_context(&mut self, version: ContextVersion) {
        self.state.borrow_mut().context_requests.push(version);
    }

    fn create_window(&mut self, spec: &WindowSpec<'_>) -> DisplayResult<Box<dyn NativeWindow>> {
        let mut state = self.state.borrow_mut();
        if state.fail_create {
            return Err(DisplayError::CreationFailed {
                width: spec.width,
                height: spec.height,
                title: spec.title.to_string(),
            });
        }

        state.windows_created += 1;
        Ok(Box::new(MockWindow {
            id: state.windows_created,
            state: Rc::clone(&self.state),
            size: (spec.width, spec.height),
            title: spec.title.to_string(),
            should_close: false,
            swap_interval: None,
            swaps: 0,
            polls: 0,
            events: Vec::new(),
        }))
    }

    fn terminate(&mut self) {
        self.state.borrow_mut().terminate_calls += 1;
    }
}

pub(crate) struct MockWindow {
    pub id: u32,
    pub state: Rc<RefCell<MockState>>,
    pub size: (u32, u32),
    pub title: String,
    pub should_close: bool,
    pub swap_interval: Option<u32>,
    pub swaps: u32,
    pub polls: u32,
    pub events: Vec<DisplayEvent>,
}

impl NativeWindow for MockWindow {
    fn make_current(&mut self) {
        self.state.borrow_mut().current_window = Some(self.id);
    }

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.should_close = should_close;
    }

    fn swap_buffers(&mut self) {
        self.swaps += 1;
    }

    fn poll_events(&mut self) {
        self.polls += 1;

        let mut state = self.state.borrow_mut();
        if std::mem::take(&mut state.close_requested) {
            self.should_close = true;
            self.events.push(DisplayEvent::CloseRequested);
        }
    }

    fn drain_events(&mut self) -> Vec<DisplayEvent> {
        std::mem::take(&mut self.events)
    }

    fn set_swap_interval(&mut self, interval: u32) {
        self.swap_interval = Some(interval);
    }

    fn get_proc_address(&mut self, _symbol: &str) -> ProcAddress {
        std::ptr::null()
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        self.size
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Drop for MockWindow {
    fn drop(&mut self) {
        self.state.borrow_mut().windows_destroyed += 1;
    }
}
