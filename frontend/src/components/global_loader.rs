use yew::{html, Component, Context, Html};

/// Full-viewport overlay with a spinner. Visible for as long as a parent
/// keeps it mounted.
pub struct GlobalLoader;

impl Component for GlobalLoader {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        GlobalLoader
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div
                class="global-loader"
                role="progressbar"
                style="position:fixed;top:0;left:0;width:100vw;height:100vh;display:flex;align-items:center;justify-content:center;background:rgba(255,255,255,0.9);z-index:9000;"
            >
                <div style="display:flex;flex-direction:column;align-items:center;">
                    <div class="spin" style="width:48px;height:48px;border:6px solid #ccc;border-top-color:#1976d2;border-radius:50%;animation:spin 1s linear infinite;"></div>
                    <div style="margin-top:12px;color:#000;">{"Loading..."}</div>
                </div>
                <style>{r#"
                        @keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
                    "#}</style>
            </div>
        }
    }
}
