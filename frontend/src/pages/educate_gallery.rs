use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::Route;

#[function_component(EducateGallery)]
pub fn educate_gallery() -> Html {
    let images = use_memo(|_| crate::content::gallery_images(), ());
    html! {
        <main class="page gallery-page">
            <section class="section-container">
                <Link<Route> to={Route::Educate} classes="link gallery-back">{"← Back to EDUCATE"}</Link<Route>>
                <h1 class="section-heading">{"Our Gallery"}</h1>
                <div class="gallery-grid">
                    { for images.iter().map(|src| html! {
                        <img key={src.clone()} src={src.clone()} alt="EDUCATE gallery" loading="lazy" />
                    }) }
                </div>
            </section>
            <Footer />
        </main>
    }
}
