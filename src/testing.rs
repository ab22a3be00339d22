//! Test doubles shared by unit tests across modules.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use std::task::Poll;

use futures::channel::oneshot;
use futures::future::{LocalBoxFuture, poll_fn};
use serde_json::Value;

use crate::net::gateway::{GatewayError, HttpGateway, Method};
use crate::net::types::{AuthProvider, UserIdentity};
use crate::state::mode::History;

/// One recorded gateway call.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

enum Reply {
    Ready(Result<Value, GatewayError>),
    Deferred(oneshot::Receiver<Result<Value, GatewayError>>),
}

/// Scripted gateway: replies are consumed in call order. With no scripted
/// reply left, calls fail with a network error.
#[derive(Default)]
pub struct MockGateway {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, result: Result<Value, GatewayError>) {
        lock(&self.replies).push_back(Reply::Ready(result));
    }

    /// Queue a reply that resolves only when the returned sender fires.
    pub fn defer(&self) -> oneshot::Sender<Result<Value, GatewayError>> {
        let (tx, rx) = oneshot::channel();
        lock(&self.replies).push_back(Reply::Deferred(rx));
        tx
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }
}

impl HttpGateway for MockGateway {
    fn send(&self, method: Method, path: &str, body: Option<Value>) -> LocalBoxFuture<'static, Result<Value, GatewayError>> {
        lock(&self.calls).push(RecordedCall { method, path: path.to_owned(), body });
        let reply = lock(&self.replies).pop_front();
        Box::pin(async move {
            match reply {
                Some(Reply::Ready(result)) => result,
                Some(Reply::Deferred(rx)) => rx
                    .await
                    .unwrap_or_else(|_| Err(GatewayError::Network("reply dropped".to_owned()))),
                None => Err(GatewayError::Network("no scripted reply".to_owned())),
            }
        })
    }
}

/// In-memory browser history with back/forward and change listeners.
pub struct MemoryHistory {
    entries: Mutex<Vec<String>>,
    cursor: Mutex<usize>,
    listeners: Mutex<Vec<(u64, Arc<dyn Fn() + Send + Sync>)>>,
    next_listener: Mutex<u64>,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Arc<Self> {
        Arc::new(Self {
            entries: Mutex::new(vec![initial.to_owned()]),
            cursor: Mutex::new(0),
            listeners: Mutex::new(Vec::new()),
            next_listener: Mutex::new(0),
        })
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn entries(&self) -> Vec<String> {
        lock(&self.entries).clone()
    }

    pub fn listen(&self, listener: impl Fn() + Send + Sync + 'static) -> u64 {
        let mut next = lock(&self.next_listener);
        *next += 1;
        lock(&self.listeners).push((*next, Arc::new(listener)));
        *next
    }

    pub fn unlisten(&self, id: u64) {
        lock(&self.listeners).retain(|(listener_id, _)| *listener_id != id);
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).len()
    }

    /// Simulate the browser back button (fires listeners like `popstate`).
    pub fn back(&self) {
        {
            let mut cursor = lock(&self.cursor);
            if *cursor == 0 {
                return;
            }
            *cursor -= 1;
        }
        self.fire();
    }

    pub fn forward(&self) {
        {
            let mut cursor = lock(&self.cursor);
            if *cursor + 1 >= lock(&self.entries).len() {
                return;
            }
            *cursor += 1;
        }
        self.fire();
    }

    /// Simulate a location change made outside the router.
    pub fn external_push(&self, path: &str) {
        self.push(path);
        self.fire();
    }

    fn fire(&self) {
        let listeners: Vec<_> = lock(&self.listeners).iter().map(|(_, f)| Arc::clone(f)).collect();
        for listener in listeners {
            listener();
        }
    }
}

impl History for MemoryHistory {
    fn pathname(&self) -> String {
        let cursor = *lock(&self.cursor);
        lock(&self.entries).get(cursor).cloned().unwrap_or_default()
    }

    fn push(&self, path: &str) {
        let mut cursor = lock(&self.cursor);
        let mut entries = lock(&self.entries);
        entries.truncate(*cursor + 1);
        entries.push(path.to_owned());
        *cursor = entries.len() - 1;
    }

    fn replace(&self, path: &str) {
        let cursor = *lock(&self.cursor);
        if let Some(entry) = lock(&self.entries).get_mut(cursor) {
            path.clone_into(entry);
        }
    }
}

pub fn sample_user() -> UserIdentity {
    UserIdentity {
        id: 1,
        email: "a@b.com".to_owned(),
        display_name: "A".to_owned(),
        provider: AuthProvider::Local,
        avatar_url: None,
    }
}

pub fn sample_user_json() -> Value {
    serde_json::json!({"id": 1, "email": "a@b.com", "displayName": "A", "provider": "LOCAL"})
}

/// Give the other branches of a `join!` one turn.
pub async fn yield_now() {
    let mut yielded = false;
    poll_fn(|cx| {
        if yielded {
            return Poll::Ready(());
        }
        yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    })
    .await;
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
