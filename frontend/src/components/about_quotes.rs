use yew::prelude::*;

use crate::animation::hooks::use_scroll_reveal;
use crate::animation::timeline::Timeline;
use crate::content::AboutQuotes;
use crate::dom;

/// Opacity of a line that is not being read.
const DIM: f64 = 0.2;

#[derive(Properties, PartialEq)]
pub struct AboutQuotesProps {
    pub quotes: AboutQuotes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// Two statements lit up in turn as the section passes the middle of the
/// screen.
#[function_component(AboutQuotesSection)]
pub fn about_quotes(props: &AboutQuotesProps) -> Html {
    let node = use_node_ref();
    let first = use_node_ref();
    let second = use_node_ref();
    let state = use_scroll_reveal(node.clone(), "center 80%", "center top");
    let timeline = use_memo(|_| Timeline::highlight_pair(DIM), ());

    {
        let (first, second) = (first.clone(), second.clone());
        use_effect_with_deps(
            move |state| {
                for (index, line) in [first, second].iter().enumerate() {
                    if let Some(line) = line.cast::<web_sys::HtmlElement>() {
                        let opacity = timeline.sample_progress(index, state.progress).unwrap_or(DIM);
                        dom::set_style(&line, "opacity", &opacity.to_string());
                    }
                }
                || ()
            },
            state,
        );
    }

    html! {
        <section ref={node} id={props.id.clone()}
            class={classes!("about-quotes", state.active.then_some("animating"))}>
            <div class="section-container">
                <p ref={first} class="about-line" style={format!("opacity: {DIM}")}>
                    { props.quotes.first }
                </p>
                <p ref={second} class="about-line" style={format!("opacity: {DIM}")}>
                    { props.quotes.second }
                </p>
            </div>
        </section>
    }
}
