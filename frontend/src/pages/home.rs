use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::hooks::{use_intro_reveal, IntroReveal};
use crate::animation::typewriter::{Speeds, Typewriter};
use crate::components::about_quotes::AboutQuotesSection;
use crate::components::collaboration::CollaborationBand;
use crate::components::footer::Footer;
use crate::components::reveal::ScrollReveal;
use crate::content::{self, Division};
use crate::Route;

#[function_component(TypedLine)]
fn typed_line() -> Html {
    let writer = use_state_eq(|| Typewriter::new(content::TYPED_PHRASES, Speeds::default()));
    {
        let handle = writer.clone();
        use_effect_with_deps(
            move |writer| {
                let writer = *writer;
                let next = Timeout::new(writer.delay(), move || handle.set(writer.step()));
                move || drop(next)
            },
            *writer,
        );
    }

    let (plain, highlighted) = writer.shown();
    let class = writer.current().map(|phrase| phrase.class).unwrap_or_default();
    html! {
        <p class="seq typed-line">
            { plain }<span class={class}>{ highlighted }</span><span class="typed-cursor">{"|"}</span>
        </p>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let node = use_node_ref();
    use_intro_reveal(node.clone(), IntroReveal::HERO);

    html! {
        <section ref={node} id="home" class="hero" style="opacity: 0">
            <div class="section-container hero-content">
                <h1 class="seq hero-title">{"Welcome to "}<span>{"DURKKAS"}</span></h1>
                <TypedLine />
                <div class="seq social-row">
                    { for content::SOCIAL_LINKS.iter().map(|social| html! {
                        <a key={social.name} class="link social-link" href={social.href}
                            target="_blank" rel="noopener noreferrer" aria-label={social.name}>
                            <img src={social.icon()} alt={social.name} width="28" height="28" />
                        </a>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn division_tile(division: &Division) -> Html {
    let (from, to) = division.gradient;
    html! {
        <Link<Route> to={division.site.route()} classes="link division-tile seq">
            <div class="division-tile-inner"
                style={format!("background: linear-gradient(135deg, {from}, {to})")}>
                <img src={division.image} alt={division.name} loading="lazy" />
                <h3>{ division.name }</h3>
                <p>{ division.description }</p>
            </div>
        </Link<Route>>
    }
}

fn statement(title: &str, text: &str, points: &[&str]) -> Html {
    html! {
        <div class="statement seq">
            <h3>{ title.to_string() }</h3>
            <p>{ text.to_string() }</p>
            <ul>
                { for points.iter().map(|point| html! { <li>{ point.to_string() }</li> }) }
            </ul>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="page home-page">
            <Hero />
            <AboutQuotesSection quotes={content::HOME_ABOUT} />
            <ScrollReveal id="about" class="divisions">
                <div class="section-container">
                    <h2 class="section-title seq">{"Our Divisions"}</h2>
                    <div class="division-grid">
                        { for content::DIVISIONS.iter().map(division_tile) }
                    </div>
                </div>
            </ScrollReveal>
            <ScrollReveal class="quote-band" start="top 90%" end="center center">
                <h2 class="seq">{"Innovate."}</h2>
                <h2 class="seq">{"Educate."}</h2>
                <h2 class="seq">{"Elevate."}</h2>
            </ScrollReveal>
            <ScrollReveal id="vision" class="vision-mission">
                <div class="section-container statement-grid">
                    { statement("Our Vision", content::VISION, content::VISION_PATHWAYS) }
                    { statement("Our Mission", content::MISSION, content::MISSION_FOCUS) }
                </div>
            </ScrollReveal>
            <ScrollReveal id="innovation" class="framework">
                <div class="section-container">
                    <h2 class="section-title seq">{"Durkkas Business Framework"}</h2>
                    <ol class="framework-steps">
                        { for content::FRAMEWORK.iter().map(|step| html! {
                            <li key={step.title} class="framework-step seq">
                                <span class="framework-letter">{ step.letter.to_string() }</span>
                                <img src={step.image} alt={step.title} loading="lazy" />
                                <div>
                                    <h4>{ step.title }</h4>
                                    <p>{ step.summary }</p>
                                </div>
                            </li>
                        }) }
                    </ol>
                </div>
            </ScrollReveal>
            <CollaborationBand copy={content::HOME_COLLABORATION} />
            <Footer />
        </main>
    }
}
