use match_table_api::Client;
use yew::context::ContextProvider;
use yew::prelude::*;

use super::Provider;
use crate::statics::config;
use crate::utils::Rc;

/// Provides the api [`Client`] for all children.
pub struct ClientProvider {
    client: Rc<Client>,
}

impl Component for ClientProvider {
    type Message = ();
    type Properties = Properties;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            client: Rc::new(Client::new(config().api_base())),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<Rc<Client>> context={self.client.clone()}>
                { for ctx.props().children.iter() }
            </ContextProvider<Rc<Client>>>
        }
    }
}

impl Provider<Rc<Client>> for ClientProvider {
    fn get<C>(ctx: &Context<C>) -> Rc<Client>
    where
        C: Component,
    {
        let (client, _) = ctx
            .link()
            .context::<Rc<Client>>(Callback::noop())
            .expect("No ClientProvider given");

        client
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Properties {
    pub children: Children,
}
