use yew::prelude::*;

use crate::animation::hooks::{use_scroll_reveal, use_seq_stagger};

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or("top 80%")]
    pub start: &'static str,
    #[prop_or("top top")]
    pub end: &'static str,
    #[prop_or_default]
    pub children: Children,
}

/// A page section whose `.seq` children fade in one after another while it
/// scrolls between `start` and `end`.
#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let state = use_scroll_reveal(node.clone(), props.start, props.end);
    use_seq_stagger(node.clone(), state);

    html! {
        <section ref={node} id={props.id.clone()} class={classes!("reveal-section", props.class.clone())}>
            { for props.children.iter() }
        </section>
    }
}
