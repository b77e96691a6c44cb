//! Handle-keyed ownership of embedded views.
//!
//! The registry exclusively owns every view it creates and is the only
//! place a view is released. It also keeps the window's paint order
//! (bottom to top) and pushes changes to the widgets.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::WebViewError;
use crate::handle::ViewHandle;
use crate::observer::ViewObserver;
use crate::widget::{ViewFactory, ViewWidget};


/// Maps handles to live views.
pub struct ViewRegistry<F: ViewFactory> {
    factory: F,
    /// Keyed by handle; handles are monotonic, so this is insertion order.
    views: BTreeMap<ViewHandle, F::View>,
    /// Live handles, bottom to top.
    paint_order: Vec<ViewHandle>,
    next_handle: u64,
}

impl<F: ViewFactory> ViewRegistry<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            views: BTreeMap::new(),
            paint_order: Vec::new(),
            next_handle: 0,
        }
    }

    /// Create a view and register it on top of the paint order.
    ///
    /// The handle is consumed even if the factory fails, so handles are
    /// never handed out twice.
    pub fn create(&mut self, observer: Arc<dyn ViewObserver>) -> Result<ViewHandle, WebViewError> {
        let handle = ViewHandle(self.next_handle);
        self.next_handle += 1;

        let view = self.factory.create_view(handle, observer)?;
        self.views.insert(handle, view);
        self.paint_order.push(handle);

        debug!(%handle, live = self.views.len(), "view created");
        Ok(handle)
    }

    /// Hide, unregister and release a view. Unknown handles are ignored.
    pub fn destroy(&mut self, handle: ViewHandle) -> bool {
        let Some(view) = self.views.get_mut(&handle) else {
            return false;
        };
        if let Err(e) = view.set_visible(false) {
            warn!(%handle, error = %e, "failed to hide view before release");
        }

        let view = self.views.remove(&handle);
        self.paint_order.retain(|h| *h != handle);
        drop(view);

        debug!(%handle, live = self.views.len(), "view destroyed");
        true
    }

    /// Destroy every live view. Used during graceful shutdown.
    pub fn destroy_all(&mut self) {
        for handle in self.handles() {
            self.destroy(handle);
        }
    }

    pub fn lookup(&self, handle: ViewHandle) -> Option<&F::View> {
        self.views.get(&handle)
    }

    pub fn lookup_mut(&mut self, handle: ViewHandle) -> Option<&mut F::View> {
        self.views.get_mut(&handle)
    }

    /// First visible view in creation order.
    pub fn lookup_first_visible(&self) -> Option<ViewHandle> {
        self.views
            .iter()
            .find(|(_, view)| view.is_visible())
            .map(|(handle, _)| *handle)
    }

    pub fn contains(&self, handle: ViewHandle) -> bool {
        self.views.contains_key(&handle)
    }

    /// Place `top` directly beneath `under`. No-op unless both resolve.
    pub fn stack_under(&mut self, top: ViewHandle, under: ViewHandle) -> bool {
        if top == under || !self.contains(top) || !self.contains(under) {
            return false;
        }

        self.paint_order.retain(|h| *h != top);
        let index = self
            .paint_order
            .iter()
            .position(|h| *h == under)
            .unwrap_or(self.paint_order.len());
        self.paint_order.insert(index, top);

        self.restack_from(index);
        true
    }

    /// Move a view to the top of the paint order.
    pub fn raise_to_top(&mut self, handle: ViewHandle) -> bool {
        if !self.contains(handle) {
            return false;
        }

        self.paint_order.retain(|h| *h != handle);
        self.paint_order.push(handle);

        self.restack_from(self.paint_order.len() - 1);
        true
    }

    /// Re-raise every view from `start` upward so the widgets match
    /// `paint_order`. Views below `start` keep their relative order.
    fn restack_from(&mut self, start: usize) {
        for handle in self.paint_order[start..].to_vec() {
            if let Some(view) = self.views.get_mut(&handle) {
                if let Err(e) = view.bring_to_front() {
                    warn!(%handle, error = %e, "failed to restack view");
                }
            }
        }
    }

    /// Live handles, bottom to top.
    pub fn paint_order(&self) -> &[ViewHandle] {
        &self.paint_order
    }

    /// Live handles in creation order.
    pub fn handles(&self) -> Vec<ViewHandle> {
        self.views.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ViewHandle, &F::View)> {
        self.views.iter().map(|(h, v)| (*h, v))
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }
}
