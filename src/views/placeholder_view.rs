use yew::prelude::*;

/// Stand-in body for pages whose content lives elsewhere
#[derive(Properties, PartialEq)]
pub struct PlaceholderViewProps {
    pub title: AttrValue,
}

#[function_component(PlaceholderView)]
pub fn placeholder_view(props: &PlaceholderViewProps) -> Html {
    html! {
        <div class="page">
            <div class="page-header">
                <h2>{props.title.clone()}</h2>
            </div>
            <div class="empty-state">
                <p>{"Nothing to show here yet."}</p>
            </div>
        </div>
    }
}
