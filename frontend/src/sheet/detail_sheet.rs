use uuid::Uuid;
use yew::prelude::*;

/// Modal container: a backdrop with a titled panel, rendered only while
/// `open` is set.
pub struct DetailSheet {
    title_id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub footer: Html,
}

impl Component for DetailSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            title_id: format!("sheet-title-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }
        let on_close = props.on_close.reform(|_: MouseEvent| ());

        html! {
            <div
                class="detail-sheet show"
                role="dialog"
                aria-modal="true"
                aria-labelledby={self.title_id.clone()}
                style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.6);z-index:9999;display:flex;align-items:center;justify-content:center;"
            >
                <div class="detail-sheet-panel" style="position:relative;background:#fff;border-radius:8px;width:min(720px,92vw);max-height:88vh;overflow:auto;padding:24px;">
                    <button
                        class="detail-sheet-close"
                        aria-label="Close"
                        onclick={on_close}
                        style="position:absolute;top:12px;right:16px;font-size:1.25rem;background:none;border:none;cursor:pointer;"
                    >
                        { "✕" }
                    </button>
                    <h2 id={self.title_id.clone()}>{ props.title.clone() }</h2>
                    { props.children.clone() }
                    <div class="detail-sheet-footer" style="display:flex;gap:8px;justify-content:flex-end;margin-top:24px;">
                        { props.footer.clone() }
                    </div>
                </div>
            </div>
        }
    }
}
