//! Single-threaded event loop around a [`PermissionStatusView`].
//!
//! Button presses and OS prompt results both arrive as [`Message`]s in one
//! mailbox. Each message goes through the view's update function; the screen
//! is re-rendered after every state write and the requested effect is
//! carried out against the permission backend or the notice sink.

use async_channel::{Receiver, Sender, unbounded};
use grantkit_notice::NoticeSink;
use grantkit_permission::{Permission, PermissionBackend, PermissionReply};
use log::{debug, warn};

use crate::config::ViewConfig;
use crate::view::{Effect, Message, PermissionStatusView, Screen};

/// Receives the screen after every state change.
pub trait Renderer {
    /// Draw `screen`.
    fn render(&mut self, screen: &Screen);
}

impl<F: FnMut(&Screen)> Renderer for F {
    fn render(&mut self, screen: &Screen) {
        self(screen);
    }
}

/// Posts messages into a [`Session`] from UI callbacks.
///
/// Closing the handle ends [`Session::run`] once the queued messages are
/// handled. Prompt results that arrive after that are dropped.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    sender: Sender<Message>,
}

impl SessionHandle {
    /// Queue a message. Returns `false` if the session is closed.
    pub fn post(&self, message: Message) -> bool {
        post(&self.sender, message)
    }

    /// Queue a button press for `permission`.
    pub fn press(&self, permission: Permission) -> bool {
        self.post(Message::Pressed(permission))
    }

    /// Stop the session.
    pub fn close(&self) {
        self.sender.close();
    }

    /// Whether the session has been stopped.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

fn post(sender: &Sender<Message>, message: Message) -> bool {
    match sender.try_send(message) {
        Ok(()) => true,
        Err(err) => {
            debug!("dropping {:?}: {err}", err.into_inner());
            false
        }
    }
}

/// Owns a view together with the collaborators that carry out its effects.
#[derive(Debug)]
pub struct Session<B, N, R> {
    view: PermissionStatusView,
    backend: B,
    notices: N,
    renderer: R,
    sender: Sender<Message>,
    receiver: Receiver<Message>,
}

impl<B, N, R> Session<B, N, R>
where
    B: PermissionBackend,
    N: NoticeSink,
    R: Renderer,
{
    /// Initialize the view from `backend` and draw the first screen.
    pub fn new(backend: B, notices: N, mut renderer: R, config: ViewConfig) -> Self {
        let view = PermissionStatusView::initialize(&backend, config);
        renderer.render(&view.render());

        let (sender, receiver) = unbounded();
        Self {
            view,
            backend,
            notices,
            renderer,
            sender,
            receiver,
        }
    }

    /// A handle for posting messages from elsewhere.
    #[must_use]
    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            sender: self.sender.clone(),
        }
    }

    /// The view in its current state.
    #[must_use]
    pub const fn view(&self) -> &PermissionStatusView {
        &self.view
    }

    /// Handle one message right away.
    pub fn dispatch(&mut self, message: Message) {
        debug!("dispatch {message:?}");
        let update = self.view.update(message);
        if update.dirty {
            self.renderer.render(&self.view.render());
        }
        if let Some(effect) = update.effect {
            self.perform(effect);
        }
    }

    fn perform(&mut self, effect: Effect) {
        match effect {
            Effect::Notify(notice) => self.notices.show(&notice),
            Effect::Prompt(permission) => {
                let sender = self.sender.clone();
                let reply = PermissionReply::new(move |result| {
                    let granted = match result {
                        Ok(status) => status.is_granted(),
                        Err(err) => {
                            warn!("{permission} prompt failed, treating as denied: {err}");
                            false
                        }
                    };
                    post(
                        &sender,
                        Message::Resolved {
                            permission,
                            granted,
                        },
                    );
                });
                self.backend.request(permission, reply);
            }
        }
    }

    /// Handle every message that is already queued, without waiting.
    ///
    /// Returns how many messages were handled. Hosts that own their UI loop
    /// call this after forwarding a UI event or an OS callback.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(message) = self.receiver.try_recv() {
            self.dispatch(message);
            handled += 1;
        }
        handled
    }

    /// Handle messages until the session is closed and its mailbox drained.
    pub async fn run(&mut self) {
        while let Ok(message) = self.receiver.recv().await {
            self.dispatch(message);
        }
        debug!("session finished");
    }
}
