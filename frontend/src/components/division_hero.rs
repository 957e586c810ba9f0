use yew::prelude::*;

use crate::animation::hooks::{use_intro_reveal, IntroReveal};
use crate::content::Division;

#[derive(Properties, PartialEq)]
pub struct DivisionHeroProps {
    pub division: &'static Division,
}

/// Opening screen of a microsite: division name, what it covers and why.
#[function_component(DivisionHero)]
pub fn division_hero(props: &DivisionHeroProps) -> Html {
    let node = use_node_ref();
    use_intro_reveal(node.clone(), IntroReveal::DIVISION_HERO);
    let division = props.division;
    let (from, to) = division.gradient;

    html! {
        <section ref={node} id="home" class="division-hero" style="opacity: 0">
            <div class="section-container division-hero-grid">
                <div>
                    <h1 class="seq division-title"
                        style={format!("background-image: linear-gradient(90deg, {from}, {to})")}>
                        { "DURKKAS " }{ division.name }
                    </h1>
                    <h2 class="seq division-subtitle">{ division.description }</h2>
                    <p class="seq division-purpose">{ division.purpose }</p>
                </div>
                <img class="seq division-image" src={division.image} alt={division.name} loading="lazy" />
            </div>
        </section>
    }
}
