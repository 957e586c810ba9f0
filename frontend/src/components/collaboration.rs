use yew::prelude::*;

use crate::animation::hooks::use_marquee;
use crate::animation::marquee::{Direction, Marquee};
use crate::content::Collaboration;

#[derive(Properties, PartialEq)]
struct StripProps {
    text: &'static str,
    marquee: Marquee,
}

#[function_component(Strip)]
fn strip(props: &StripProps) -> Html {
    let node = use_node_ref();
    use_marquee(node.clone(), props.marquee);

    html! {
        <div class="marquee">
            <div ref={node} class="marquee-track">{ props.marquee.repeat(props.text) }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CollaborationProps {
    pub copy: Collaboration,
}

/// Call to action between two lines of text sliding in opposite directions.
#[function_component(CollaborationBand)]
pub fn collaboration_band(props: &CollaborationProps) -> Html {
    let copy = props.copy;
    html! {
        <section class="collaboration">
            <Strip text={copy.leading} marquee={Marquee::new(Direction::Left, copy.period_ms)} />
            <h2 class="collaboration-call">
                { copy.call }{" "}<span>{"DURKKAS"}</span>{"?"}
            </h2>
            <Strip text={copy.trailing} marquee={Marquee::new(Direction::Right, copy.period_ms)} />
        </section>
    }
}
