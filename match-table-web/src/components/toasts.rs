use gloo_timers::callback::Timeout;
use match_table_core::notify::Level;
use match_table_core::Notification;
use yew::html;
use yew::html::{Component, Context, Html};
use yew_agent::{Bridge, Bridged};

use crate::services::ToastBus;

/// Time in milliseconds until a toast is dismissed automatically.
const TOAST_TIMEOUT: u32 = 5000;

/// Renders the notifications sent to the [`ToastBus`].
pub struct Toasts {
    toasts: Vec<Toast>,
    next_id: u64,
    _producer: Box<dyn Bridge<ToastBus>>,
}

struct Toast {
    id: u64,
    notification: Notification,
    _timeout: Timeout,
}

impl Component for Toasts {
    type Properties = ();
    type Message = Message;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            _producer: ToastBus::bridge(ctx.link().callback(Message::Append)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Append(notification) => {
                let id = self.next_id;
                self.next_id += 1;

                let link = ctx.link().clone();
                let timeout = Timeout::new(TOAST_TIMEOUT, move || {
                    link.send_message(Message::Remove(id));
                });

                self.toasts.push(Toast {
                    id,
                    notification,
                    _timeout: timeout,
                });

                true
            }
            Message::Remove(id) => {
                let len = self.toasts.len();
                self.toasts.retain(|toast| toast.id != id);

                self.toasts.len() != len
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toasts: Html = self
            .toasts
            .iter()
            .map(|toast| {
                let id = toast.id;
                let onclick = ctx.link().callback(move |_| Message::Remove(id));

                let class = match toast.notification.level {
                    Level::Success => "mt-toast mt-toast-success",
                    Level::Error => "mt-toast mt-toast-error",
                };

                html! {
                    <div key={id} {class} role="status">
                        <span>{ &toast.notification.message }</span>
                        <button {onclick} aria-label="Close">{ "\u{00d7}" }</button>
                    </div>
                }
            })
            .collect();

        html! {
            <div class="mt-toasts">
                { toasts }
            </div>
        }
    }
}

#[derive(Debug)]
pub enum Message {
    Append(Notification),
    Remove(u64),
}
