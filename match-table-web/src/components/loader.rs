use yew::prelude::*;

pub struct Loader;

impl Component for Loader {
    type Message = ();
    type Properties = Properties;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class={ctx.props().class.clone()}>{ ctx.props().text }</div>
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Properties)]
pub struct Properties {
    #[prop_or_default]
    pub class: String,
    #[prop_or("Loading..")]
    pub text: &'static str,
}
