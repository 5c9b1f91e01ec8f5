use std::{
    collections::VecDeque,
    fmt::Debug,
    sync::{Arc, RwLock},
};
use tracing::{debug, trace};

type Responder<A, T, E> = Arc<dyn Fn(&A) -> Result<T, E> + Send + Sync>;

/// A single fake operation: a programmable response plus a log of every call.
///
/// Responses are picked in this order:
/// 1. one-shot responses queued with [`Stub::resolves_once`] / [`Stub::rejects_once`], FIFO
/// 2. the default response set by [`Stub::resolves`], [`Stub::rejects`] or [`Stub::responds_with`]
///
/// Clones share state, so a test can keep a handle for assertions while the code under test
/// owns another.
pub struct Stub<A, T, E> {
    name: &'static str,
    state: Arc<RwLock<StubState<A, T, E>>>,
}

struct StubState<A, T, E> {
    calls: Vec<A>,
    initial: Responder<A, T, E>,
    default: Responder<A, T, E>,
    queued: VecDeque<Result<T, E>>,
}

impl<A, T, E> Clone for Stub<A, T, E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            state: self.state.clone(),
        }
    }
}

impl<A, T, E> Debug for Stub<A, T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read().expect("Poisoned stub state");
        f.debug_struct("Stub")
            .field("name", &self.name)
            .field("call_count", &state.calls.len())
            .field("queued_responses", &state.queued.len())
            .finish()
    }
}

impl<A, T, E> Stub<A, T, E>
where
    A: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Create a stub that resolves to `value` until reconfigured
    pub fn resolving(name: &'static str, value: T) -> Self {
        let initial = constant(Ok(value));
        Self {
            name,
            state: Arc::new(RwLock::new(StubState {
                calls: Vec::new(),
                initial: initial.clone(),
                default: initial,
                queued: VecDeque::new(),
            })),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Resolve every following call to `value`
    pub fn resolves(&self, value: T) {
        self.set_default(constant(Ok(value)));
    }

    /// Reject every following call with `error`
    pub fn rejects(&self, error: E) {
        self.set_default(constant(Err(error)));
    }

    /// Compute every following response from the call arguments
    pub fn responds_with<F>(&self, responder: F)
    where
        F: Fn(&A) -> Result<T, E> + Send + Sync + 'static,
    {
        self.set_default(Arc::new(responder));
    }

    /// Resolve only the next unanswered call to `value`
    pub fn resolves_once(&self, value: T) {
        self.push_once(Ok(value));
    }

    /// Reject only the next unanswered call with `error`
    pub fn rejects_once(&self, error: E) {
        self.push_once(Err(error));
    }

    /// Record `args` and produce the configured response
    pub fn invoke(&self, args: A) -> Result<T, E> {
        let (queued, responder, call_number) = {
            let mut state = self.state.write().expect("Poisoned stub state");
            state.calls.push(args.clone());
            (
                state.queued.pop_front(),
                state.default.clone(),
                state.calls.len(),
            )
        };
        trace!(
            stub = self.name,
            call_number,
            queued = queued.is_some(),
            "Stub invoked"
        );

        // The lock is released so a responder may inspect this stub
        match queued {
            Some(response) => response,
            None => responder(&args),
        }
    }

    /// Arguments of every call so far, oldest first
    pub fn calls(&self) -> Vec<A> {
        self.state.read().expect("Poisoned stub state").calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.read().expect("Poisoned stub state").calls.len()
    }

    pub fn last_call(&self) -> Option<A> {
        self.state
            .read()
            .expect("Poisoned stub state")
            .calls
            .last()
            .cloned()
    }

    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }

    /// Clear the call log and queued responses, and restore the initial response
    pub fn reset(&self) {
        let mut state = self.state.write().expect("Poisoned stub state");
        state.calls.clear();
        state.queued.clear();
        state.default = state.initial.clone();
        debug!(stub = self.name, "Stub reset");
    }

    fn set_default(&self, responder: Responder<A, T, E>) {
        self.state.write().expect("Poisoned stub state").default = responder;
        debug!(stub = self.name, "Stub default response replaced");
    }

    fn push_once(&self, response: Result<T, E>) {
        let mut state = self.state.write().expect("Poisoned stub state");
        state.queued.push_back(response);
        debug!(
            stub = self.name,
            queued = state.queued.len(),
            "Stub one-shot response queued"
        );
    }
}

fn constant<A, T, E>(response: Result<T, E>) -> Responder<A, T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    Arc::new(move |_: &A| response.clone())
}
