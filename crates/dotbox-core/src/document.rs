//! Host-wide event listeners with scoped lifetimes.
//!
//! A [`Document`] is the registry of listeners that want to see input no
//! matter where it lands: a dropdown that closes on a click anywhere else, or
//! that routes arrow keys while its list is open. The runtime hands every
//! [`HostEvent`] to [`Document::dispatch`], which asks each matching listener
//! to map the event into a message.
//!
//! Registrations are owned by [`ListenerGuard`] values. Dropping a guard (or
//! calling [`ListenerGuard::release`]) removes the listener exactly once, so a
//! component that keeps its guards in a field releases them automatically when
//! it is dropped.
//!
//! ```rust,ignore
//! let document = Document::<AppMsg>::new();
//!
//! // Child components register through a scope that lifts their messages.
//! picker.mount(&document.scope(AppMsg::Picker));
//!
//! for msg in document.dispatch(&HostEvent::PointerDown { column: 0, row: 0 }) {
//!     app.update(msg);
//! }
//! ```

use crate::event::HostEvent;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Which host events a listener receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Mouse button presses anywhere on screen.
    PointerDown,
    /// Key presses, wherever input focus is.
    KeyDown,
}

impl ListenerKind {
    /// Whether `event` is delivered to listeners of this kind.
    pub fn matches(self, event: &HostEvent) -> bool {
        matches!(
            (self, event),
            (ListenerKind::PointerDown, HostEvent::PointerDown { .. })
                | (ListenerKind::KeyDown, HostEvent::Key(_))
        )
    }
}

/// Identity of one registration, unique for the lifetime of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

type Handler<Msg> = Arc<dyn Fn(&HostEvent) -> Option<Msg> + Send + Sync>;

struct Registry<Msg> {
    next_id: u64,
    listeners: BTreeMap<ListenerId, (ListenerKind, Handler<Msg>)>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Something listeners can be attached to.
///
/// Implemented by [`Document`] itself and by [`Scope`], which lets a child
/// component register handlers that produce the child's own message type.
pub trait EventTarget<Msg> {
    /// Register `handler` for events of `kind`.
    ///
    /// The handler should be a pure mapping from event to message; it must
    /// not assume anything about the state of the component it reports to.
    fn add_listener(
        &self,
        kind: ListenerKind,
        handler: Box<dyn Fn(&HostEvent) -> Option<Msg> + Send + Sync>,
    ) -> ListenerGuard;
}

/// Registry of host-wide listeners producing messages of type `Msg`.
///
/// Cloning a `Document` yields another handle to the same registry.
pub struct Document<Msg: Send + 'static> {
    registry: Arc<Mutex<Registry<Msg>>>,
}

impl<Msg: Send + 'static> Clone for Document<Msg> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<Msg: Send + 'static> Default for Document<Msg> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Msg: Send + 'static> Document<Msg> {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                next_id: 0,
                listeners: BTreeMap::new(),
            })),
        }
    }

    /// Deliver `event` to every matching listener, in registration order,
    /// and collect the messages they produce.
    pub fn dispatch(&self, event: &HostEvent) -> Vec<Msg> {
        // Handlers run outside the lock so they may touch the document.
        let handlers: Vec<Handler<Msg>> = lock(&self.registry)
            .listeners
            .values()
            .filter(|(kind, _)| kind.matches(event))
            .map(|(_, handler)| handler.clone())
            .collect();
        handlers.iter().filter_map(|h| h(event)).collect()
    }

    /// Number of live registrations.
    pub fn listener_count(&self) -> usize {
        lock(&self.registry).listeners.len()
    }

    /// Number of live registrations of the given kind.
    pub fn listener_count_of(&self, kind: ListenerKind) -> usize {
        lock(&self.registry)
            .listeners
            .values()
            .filter(|(k, _)| *k == kind)
            .count()
    }

    /// A target that registers listeners producing `Sub` messages, lifted
    /// into this document's message type through `lift`.
    pub fn scope<Sub, F>(&self, lift: F) -> Scope<'_, Msg, F>
    where
        F: Fn(Sub) -> Msg + Send + Sync + Clone + 'static,
    {
        Scope {
            document: self,
            lift,
        }
    }
}

impl<Msg: Send + 'static> EventTarget<Msg> for Document<Msg> {
    fn add_listener(
        &self,
        kind: ListenerKind,
        handler: Box<dyn Fn(&HostEvent) -> Option<Msg> + Send + Sync>,
    ) -> ListenerGuard {
        let id = {
            let mut registry = lock(&self.registry);
            let id = ListenerId(registry.next_id);
            registry.next_id += 1;
            registry.listeners.insert(id, (kind, Arc::from(handler)));
            id
        };
        tracing::trace!(?id, ?kind, "listener registered");

        let weak: Weak<Mutex<Registry<Msg>>> = Arc::downgrade(&self.registry);
        ListenerGuard {
            id,
            kind,
            release: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade() {
                    lock(&registry).listeners.remove(&id);
                    tracing::trace!(?id, ?kind, "listener released");
                }
            })),
        }
    }
}

/// A view of a [`Document`] for a child component whose messages are lifted
/// into the parent's message type. Created by [`Document::scope`].
pub struct Scope<'a, Msg: Send + 'static, F> {
    document: &'a Document<Msg>,
    lift: F,
}

impl<Msg, Sub, F> EventTarget<Sub> for Scope<'_, Msg, F>
where
    Msg: Send + 'static,
    Sub: 'static,
    F: Fn(Sub) -> Msg + Send + Sync + Clone + 'static,
{
    fn add_listener(
        &self,
        kind: ListenerKind,
        handler: Box<dyn Fn(&HostEvent) -> Option<Sub> + Send + Sync>,
    ) -> ListenerGuard {
        let lift = self.lift.clone();
        self.document
            .add_listener(kind, Box::new(move |ev| handler(ev).map(&lift)))
    }
}

/// Owns one listener registration; releases it when dropped.
pub struct ListenerGuard {
    id: ListenerId,
    kind: ListenerKind,
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl ListenerGuard {
    /// The registration this guard owns.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// The kind of events the listener receives.
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }

    /// Deregister now instead of at drop.
    pub fn release(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.release_once();
    }
}

impl std::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("released", &self.release.is_none())
            .finish()
    }
}
