use chrono::Datelike;
use yew::prelude::*;

use crate::components::site_link::SiteLink;
use crate::content::{self, MenuLink, Site};

#[derive(Properties, PartialEq)]
struct LinkColumnProps {
    title: &'static str,
    links: &'static [MenuLink],
    owner: Site,
}

#[function_component(LinkColumn)]
fn link_column(props: &LinkColumnProps) -> Html {
    html! {
        <div class="footer-column">
            <h4>{ props.title }</h4>
            <ul>
                { for props.links.iter().map(|link| html! {
                    <li key={link.name}>
                        <SiteLink link={*link} owner={props.owner} class="footer-link" />
                    </li>
                }) }
            </ul>
        </div>
    }
}

/// Shared footer: social links, address with map, and the link lists of
/// all four sites.
#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer id="contact" class="site-footer">
            <div class="section-container footer-grid">
                <div class="footer-social">
                    <img src="/favicon.png" alt="DURKKAS Logo" width="56" height="56" />
                    <p>{"Connect with us on social media"}</p>
                    <div class="social-row">
                        { for content::SOCIAL_LINKS.iter().map(|social| html! {
                            <a key={social.name} class="link social-link" href={social.href}
                                target="_blank" rel="noopener noreferrer" aria-label={social.name}>
                                <img src={social.icon()} alt={social.name} width="24" height="24" />
                            </a>
                        }) }
                    </div>
                </div>
                <div class="footer-location">
                    <h4>{"Our Location"}</h4>
                    <address>
                        { for content::ADDRESS_LINES.iter().map(|line| html! { <>{ *line }<br /></> }) }
                    </address>
                    <iframe
                        src={content::MAP_EMBED}
                        title="Durkkas Innovations location"
                        width="100%"
                        height="180"
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                    ></iframe>
                </div>
                <LinkColumn title="Quick Links" links={content::HOME_MENU} owner={Site::Home} />
                <LinkColumn title="Innovate" links={content::INNOVATE_MENU} owner={Site::Innovate} />
                <LinkColumn title="Educate" links={content::EDUCATE_MENU} owner={Site::Educate} />
                <LinkColumn title="Elevate" links={content::ELEVATE_MENU} owner={Site::Elevate} />
            </div>
            <p class="copyright">{ content::copyright(year) }</p>
        </footer>
    }
}
