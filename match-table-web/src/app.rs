use yew::prelude::*;

use crate::components::providers::ClientProvider;
use crate::components::{MatchTable, Toasts};
use crate::statics::config;

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let config = config();

        html! {
            <ClientProvider>
                <MatchTable tournament_id={config.tournament_id.clone()} classes={config.classes.clone()} />
                <Toasts />
            </ClientProvider>
        }
    }
}
