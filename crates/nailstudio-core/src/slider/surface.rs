//! Root-scoped pointer surface.
//!
//! A drag must keep receiving move and release events after the pointer has
//! left the component that started it. The host owns one [`PointerSurface`]
//! covering the whole window and feeds it every pointer/touch event; components
//! subscribe for the lifetime of a drag and hold a [`Subscription`] guard that
//! deregisters on drop.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Pointer or touch input, in absolute window coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceEvent {
    Press { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Release,
    /// Pointer left the window, touch was cancelled, or focus was lost.
    Cancel,
}

/// Returned by a listener to stay registered or to drop its registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerControl {
    Keep,
    Detach,
}

pub trait PointerListener {
    fn on_event(&mut self, event: &SurfaceEvent) -> ListenerControl;
}

pub type SharedListener = Rc<RefCell<dyn PointerListener>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(ListenerId, SharedListener)>,
}

impl Registry {
    fn insert(&mut self, listener: SharedListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn contains(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|(lid, _)| *lid == id)
    }
}

/// Cloneable handle to the window-wide listener registry.
#[derive(Clone, Default)]
pub struct PointerSurface {
    registry: Rc<RefCell<Registry>>,
}

impl PointerSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: SharedListener) -> Subscription {
        let id = self.registry.borrow_mut().insert(listener);
        tracing::trace!(?id, "pointer listener registered");
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    /// Deliver `event` to every registered listener, then drop the ones that
    /// asked to detach. Returns the number of listeners notified.
    ///
    /// Listeners are snapshotted first, so a [`Subscription`] dropped from
    /// inside a callback does not conflict with the dispatch.
    pub fn dispatch(&self, event: SurfaceEvent) -> usize {
        let snapshot: Vec<(ListenerId, SharedListener)> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(id, l)| (*id, Rc::clone(l)))
            .collect();

        let mut detached = Vec::new();
        for (id, listener) in &snapshot {
            if listener.borrow_mut().on_event(&event) == ListenerControl::Detach {
                detached.push(*id);
            }
        }

        if !detached.is_empty() {
            let mut registry = self.registry.borrow_mut();
            for id in detached {
                registry.remove(id);
                tracing::trace!(?id, "pointer listener detached");
            }
        }

        snapshot.len()
    }
}

/// Registration guard. Dropping it removes the listener if it is still registered.
pub struct Subscription {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// False once the listener detached itself or the surface is gone.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|r| r.borrow().contains(self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if registry.borrow_mut().remove(self.id) {
                tracing::trace!(id = ?self.id, "pointer listener unregistered");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        seen: usize,
        detach_on_release: bool,
    }

    impl PointerListener for Counter {
        fn on_event(&mut self, event: &SurfaceEvent) -> ListenerControl {
            self.seen += 1;
            match event {
                SurfaceEvent::Release if self.detach_on_release => ListenerControl::Detach,
                _ => ListenerControl::Keep,
            }
        }
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let surface = PointerSurface::new();
        let listener = Rc::new(RefCell::new(Counter {
            seen: 0,
            detach_on_release: false,
        }));
        let sub = surface.subscribe(listener.clone());
        assert_eq!(surface.listener_count(), 1);
        assert!(sub.is_active());

        drop(sub);
        assert_eq!(surface.listener_count(), 0);
        surface.dispatch(SurfaceEvent::Move { x: 1.0, y: 1.0 });
        assert_eq!(listener.borrow().seen, 0);
    }

    #[test]
    fn detach_removes_listener_after_dispatch() {
        let surface = PointerSurface::new();
        let listener = Rc::new(RefCell::new(Counter {
            seen: 0,
            detach_on_release: true,
        }));
        let sub = surface.subscribe(listener.clone());

        assert_eq!(surface.dispatch(SurfaceEvent::Move { x: 0.0, y: 0.0 }), 1);
        assert_eq!(surface.dispatch(SurfaceEvent::Release), 1);
        assert!(!sub.is_active());
        assert_eq!(surface.dispatch(SurfaceEvent::Release), 0);
        assert_eq!(listener.borrow().seen, 2);
    }

    #[test]
    fn subscription_outliving_surface_is_inactive() {
        let surface = PointerSurface::new();
        let listener = Rc::new(RefCell::new(Counter {
            seen: 0,
            detach_on_release: false,
        }));
        let sub = surface.subscribe(listener);
        drop(surface);
        assert!(!sub.is_active());
    }
}
