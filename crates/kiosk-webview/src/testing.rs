//! In-memory widgets for exercising the registry and bridge without a
//! browser engine.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use kiosk_common::{Color, Geometry};

use crate::error::WebViewError;
use crate::handle::ViewHandle;
use crate::observer::ViewObserver;
use crate::widget::{ViewFactory, ViewWidget};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MockState {
    pub url: Option<String>,
    pub geometry: Option<Geometry>,
    pub visible: bool,
    pub opaque_fill: bool,
    pub background: Color,
    pub messages: Vec<(String, serde_json::Value)>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            url: None,
            geometry: None,
            visible: false,
            opaque_fill: true,
            background: Color::WHITE,
            messages: Vec::new(),
        }
    }
}

/// Shared bookkeeping visible to tests after the factory moves into a registry.
#[derive(Default)]
pub(crate) struct MockWorld {
    /// On-screen stacking, bottom to top.
    pub screen: Vec<ViewHandle>,
    pub released: Vec<ViewHandle>,
    pub states: HashMap<ViewHandle, Rc<RefCell<MockState>>>,
}

pub(crate) struct MockView {
    handle: ViewHandle,
    state: Rc<RefCell<MockState>>,
    world: Rc<RefCell<MockWorld>>,
}

impl ViewWidget for MockView {
    fn set_url(&mut self, url: &str) -> Result<(), WebViewError> {
        self.state.borrow_mut().url = Some(url.to_string());
        Ok(())
    }

    fn set_geometry(&mut self, geometry: Geometry) -> Result<(), WebViewError> {
        self.state.borrow_mut().geometry = Some(geometry);
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), WebViewError> {
        self.state.borrow_mut().visible = visible;
        Ok(())
    }

    fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    fn set_opaque_fill(&mut self, opaque: bool) -> Result<(), WebViewError> {
        self.state.borrow_mut().opaque_fill = opaque;
        Ok(())
    }

    fn set_page_background(&mut self, color: Color) -> Result<(), WebViewError> {
        self.state.borrow_mut().background = color;
        Ok(())
    }

    fn bring_to_front(&mut self) -> Result<(), WebViewError> {
        let mut world = self.world.borrow_mut();
        world.screen.retain(|h| *h != self.handle);
        world.screen.push(self.handle);
        Ok(())
    }

    fn post_message(&self, kind: &str, payload: &serde_json::Value) -> Result<(), WebViewError> {
        self.state
            .borrow_mut()
            .messages
            .push((kind.to_string(), payload.clone()));
        Ok(())
    }
}

impl Drop for MockView {
    fn drop(&mut self) {
        let mut world = self.world.borrow_mut();
        world.screen.retain(|h| *h != self.handle);
        world.released.push(self.handle);
    }
}

#[derive(Default)]
pub(crate) struct MockFactory {
    pub world: Rc<RefCell<MockWorld>>,
    pub observers: HashMap<ViewHandle, Arc<dyn ViewObserver>>,
    pub fail_next: bool,
}

impl MockFactory {
    pub fn state(&self, handle: ViewHandle) -> MockState {
        self.world.borrow().states[&handle].borrow().clone()
    }

    pub fn screen(&self) -> Vec<ViewHandle> {
        self.world.borrow().screen.clone()
    }

    pub fn released(&self) -> Vec<ViewHandle> {
        self.world.borrow().released.clone()
    }

    pub fn observer(&self, handle: ViewHandle) -> Arc<dyn ViewObserver> {
        Arc::clone(&self.observers[&handle])
    }
}

impl ViewFactory for MockFactory {
    type View = MockView;

    fn create_view(
        &mut self,
        handle: ViewHandle,
        observer: Arc<dyn ViewObserver>,
    ) -> Result<MockView, WebViewError> {
        if std::mem::take(&mut self.fail_next) {
            return Err(WebViewError::InvalidMessage("mock build failure".into()));
        }
        let state = Rc::new(RefCell::new(MockState::default()));
        {
            let mut world = self.world.borrow_mut();
            world.screen.push(handle);
            world.states.insert(handle, Rc::clone(&state));
        }
        self.observers.insert(handle, observer);
        Ok(MockView {
            handle,
            state,
            world: Rc::clone(&self.world),
        })
    }
}

/// Observer that records every callback.
#[derive(Default)]
pub(crate) struct RecordingObserver {
    pub calls: Mutex<Vec<String>>,
}

impl ViewObserver for RecordingObserver {
    fn on_url_changed(&self, handle: ViewHandle, url: &str) {
        self.calls.lock().unwrap().push(format!("url {} {url}", handle.0));
    }

    fn on_title_changed(&self, handle: ViewHandle, title: &str) {
        self.calls.lock().unwrap().push(format!("title {} {title}", handle.0));
    }

    fn on_load_progress(&self, handle: ViewHandle, percent: u8) {
        self.calls.lock().unwrap().push(format!("progress {} {percent}", handle.0));
    }
}
