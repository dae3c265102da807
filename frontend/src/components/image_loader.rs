use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ImageLoaderProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// An `<img>` that shows a placeholder until the browser reports it loaded,
/// then fades in.
pub struct ImageLoader {
    loaded: bool,
}

pub enum Msg {
    Loaded,
}

impl Component for ImageLoader {
    type Message = Msg;
    type Properties = ImageLoaderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { loaded: false }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded => {
                self.loaded = true;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let opacity = if self.loaded { "1" } else { "0" };

        html! {
            <div class={classes!("image-loader", props.class.clone())} style="position:relative;overflow:hidden;">
                if !self.loaded {
                    <div
                        class="image-loader-placeholder"
                        style="position:absolute;inset:0;background:#e0e0e0;"
                    />
                }
                <img
                    src={props.src.clone()}
                    alt={props.alt.clone()}
                    onload={ctx.link().callback(|_: Event| Msg::Loaded)}
                    style={format!("width:100%;height:100%;object-fit:cover;transition:opacity 0.3s ease-in;opacity:{opacity};")}
                />
            </div>
        }
    }
}
