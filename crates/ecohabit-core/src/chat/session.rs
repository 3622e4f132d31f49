//! Chat session state shared between the caller and in-flight replies.
//!
//! The session owns the message log and the loading flag behind one mutex.
//! A send appends the user message, marks the session as loading and hands a
//! pending reply to the caller or to a spawned task. The reply holds only a
//! weak handle, so a reply that arrives after the session is dropped is
//! discarded and the shared state is freed with the last strong handle.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::{ChatLog, ChatMessage, InferenceClient, FALLBACK_REPLY, GREETING};
use crate::error::ChatError;
use crate::storage::ChatConfig;

#[derive(Debug, Default)]
struct ChatState {
    log: ChatLog,
    loading: bool,
}

fn lock(state: &Mutex<ChatState>) -> MutexGuard<'_, ChatState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A chat conversation: message log, loading flag and the client that
/// answers user messages.
///
/// Cloning yields another handle to the same conversation. One message may
/// be in flight at a time; a second send while loading is rejected with
/// [`ChatError::RequestInFlight`].
#[derive(Clone)]
pub struct ChatSession {
    client: Arc<InferenceClient>,
    state: Arc<Mutex<ChatState>>,
}

impl ChatSession {
    pub fn new(client: InferenceClient) -> Self {
        Self {
            client: Arc::new(client),
            state: Arc::new(Mutex::new(ChatState::default())),
        }
    }

    pub fn from_config(config: &ChatConfig) -> Result<Self, ChatError> {
        InferenceClient::from_config(config).map(Self::new)
    }

    /// Snapshot of the log.
    pub fn log(&self) -> ChatLog {
        lock(&self.state).log.clone()
    }

    pub fn last_message(&self) -> Option<ChatMessage> {
        lock(&self.state).log.last().cloned()
    }

    /// True from dispatch of a remote call until its reply (or fallback) is
    /// in the log.
    pub fn is_loading(&self) -> bool {
        lock(&self.state).loading
    }

    /// Append the greeting. No remote call is made.
    pub fn send_initial_message(&self) {
        lock(&self.state).log.append(ChatMessage::assistant(GREETING));
    }

    /// Append `text` as a user message, then wait for the assistant reply.
    ///
    /// The user message is in the log before the first await. Remote
    /// failures are not returned; they become [`FALLBACK_REPLY`].
    pub async fn send_user_message(&self, text: &str) -> Result<(), ChatError> {
        self.begin(text)?.resolve().await;
        Ok(())
    }

    /// Like [`send_user_message`](Self::send_user_message) but runs the
    /// remote call on the tokio runtime.
    ///
    /// The task only holds a weak reference to the log: if every session
    /// handle is dropped before the reply arrives, the reply is discarded.
    pub fn spawn_user_message(&self, text: &str) -> Result<JoinHandle<()>, ChatError> {
        let pending = self.begin(text)?;
        Ok(tokio::spawn(pending.resolve()))
    }

    fn begin(&self, text: &str) -> Result<PendingReply, ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let mut state = lock(&self.state);
        if state.loading {
            return Err(ChatError::RequestInFlight);
        }
        state.log.append(ChatMessage::user(text));
        state.loading = true;

        Ok(PendingReply {
            client: Arc::clone(&self.client),
            prompt: text.to_string(),
            guard: LoadingGuard {
                state: Arc::downgrade(&self.state),
            },
        })
    }
}

/// Clears the loading flag however the request ends, panics and
/// cancellation included.
struct LoadingGuard {
    state: Weak<Mutex<ChatState>>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            lock(&state).loading = false;
        }
    }
}

struct PendingReply {
    client: Arc<InferenceClient>,
    prompt: String,
    guard: LoadingGuard,
}

impl PendingReply {
    async fn resolve(self) {
        let reply = match self.client.generate(&self.prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "chat request failed");
                FALLBACK_REPLY.to_string()
            }
        };

        let Some(state) = self.guard.state.upgrade() else {
            debug!("chat session closed; discarding late reply");
            return;
        };
        let mut state = lock(&state);
        state.log.append(ChatMessage::assistant(reply));
        state.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Author;
    use std::time::Duration;

    fn offline_session() -> ChatSession {
        // Port 9 on localhost (discard) is not expected to accept connections.
        let client =
            InferenceClient::new("http://127.0.0.1:9", "m", "t", Duration::from_secs(2)).unwrap();
        ChatSession::new(client)
    }

    #[test]
    fn greeting_does_not_set_loading() {
        let session = offline_session();
        session.send_initial_message();

        let log = session.log();
        assert_eq!(log.len(), 1);
        assert_eq!(log.messages()[0].content(), GREETING);
        assert_eq!(log.messages()[0].author(), Author::Assistant);
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn blank_message_is_rejected_without_logging() {
        let session = offline_session();
        assert!(matches!(
            session.send_user_message("   ").await,
            Err(ChatError::EmptyMessage)
        ));
        assert!(session.log().is_empty());
    }

    #[test]
    fn second_send_while_loading_is_rejected() {
        let session = offline_session();
        let pending = session.begin("first").unwrap();
        assert!(session.is_loading());

        assert!(matches!(
            session.begin("second"),
            Err(ChatError::RequestInFlight)
        ));
        assert_eq!(session.log().len(), 1);

        drop(pending);
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn reply_after_session_drop_frees_shared_state() {
        let session = offline_session();
        let pending = session.begin("anyone there?").unwrap();
        let state = pending.guard.state.clone();
        assert!(state.upgrade().is_some());

        drop(session);
        assert!(state.upgrade().is_none());

        pending.resolve().await;
        assert!(state.upgrade().is_none());
        assert_eq!(state.strong_count(), 0);
    }

    #[tokio::test]
    async fn unreachable_endpoint_yields_fallback() {
        let session = offline_session();
        session.send_user_message("hello?").await.unwrap();

        let log = session.log();
        assert_eq!(log.len(), 2);
        assert_eq!(log.messages()[0].content(), "hello?");
        assert_eq!(log.last().unwrap().content(), FALLBACK_REPLY);
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn malformed_endpoint_yields_fallback() {
        let client = InferenceClient::new("::nope::", "m", "t", Duration::from_secs(1)).unwrap();
        let session = ChatSession::new(client);
        session.send_user_message("hi").await.unwrap();

        assert_eq!(session.last_message().unwrap().content(), FALLBACK_REPLY);
        assert!(!session.is_loading());
    }
}
