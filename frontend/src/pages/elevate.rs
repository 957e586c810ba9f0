use yew::prelude::*;

use crate::components::about_quotes::AboutQuotesSection;
use crate::components::collaboration::CollaborationBand;
use crate::components::division_hero::DivisionHero;
use crate::components::footer::Footer;
use crate::components::reveal::ScrollReveal;
use crate::contact::provider::use_contact;
use crate::content::{self, Site};

#[function_component(ServiceCards)]
fn service_cards() -> Html {
    let contact = use_contact();
    let enquire = Callback::from(move |_: MouseEvent| match &contact {
        Some(contact) => contact.open(),
        None => log::error!("Enquiry clicked outside the contact provider"),
    });

    html! {
        <ScrollReveal id="services" class="elevate-services">
            <div class="section-container">
                <h2 class="section-title seq">{"Our Services"}</h2>
                <div class="service-grid">
                    { for content::ELEVATE_SERVICES.iter().map(|service| html! {
                        <article key={service.title} class="service-card seq">
                            <h3>{ service.title }</h3>
                            <p>{ service.description }</p>
                            <div class="service-actions">
                                <a class="link" href={content::ELEVATE_LEARN_MORE}
                                    target="_blank" rel="noopener noreferrer">{"Learn more"}</a>
                                <button type="button" class="link enquiry-button" onclick={enquire.clone()}>
                                    {"Enquiry"}
                                </button>
                            </div>
                        </article>
                    }) }
                </div>
            </div>
        </ScrollReveal>
    }
}

#[function_component(Elevate)]
pub fn elevate() -> Html {
    let Some(division) = content::division(Site::Elevate) else {
        return html! {};
    };
    html! {
        <main class="page elevate-page">
            <DivisionHero {division} />
            <AboutQuotesSection id="about" quotes={content::ELEVATE_ABOUT} />
            <ServiceCards />
            <CollaborationBand copy={content::ELEVATE_COLLABORATION} />
            <Footer />
        </main>
    }
}
