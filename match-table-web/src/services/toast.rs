use std::collections::HashSet;

use match_table_core::{Notification, Notifier};
use yew_agent::{Agent, AgentLink, Context, Dispatched, HandlerId};

/// A [`Notifier`] showing notifications as toasts.
///
/// Notifications are broadcast to every subscriber of the [`ToastBus`]. Nothing is shown if no
/// [`Toasts`] component is mounted.
///
/// [`Toasts`]: crate::components::Toasts
#[derive(Copy, Clone, Debug, Default)]
pub struct ToastNotifier;

impl Notifier for ToastNotifier {
    #[inline]
    fn notify(&self, notification: Notification) {
        ToastBus::dispatcher().send(notification);
    }
}

pub struct ToastBus {
    link: AgentLink<Self>,
    subscribers: HashSet<HandlerId>,
}

impl Agent for ToastBus {
    type Reach = Context<Self>;
    type Message = ();
    type Input = Notification;
    type Output = Notification;

    fn create(link: AgentLink<Self>) -> Self {
        Self {
            link,
            subscribers: HashSet::new(),
        }
    }

    fn update(&mut self, _msg: Self::Message) {}

    fn handle_input(&mut self, msg: Self::Input, _id: HandlerId) {
        for sub in self.subscribers.iter() {
            self.link.respond(*sub, msg.clone());
        }
    }

    fn connected(&mut self, id: HandlerId) {
        self.subscribers.insert(id);
    }

    fn disconnected(&mut self, id: HandlerId) {
        self.subscribers.remove(&id);
    }
}
