use super::CardProfile;
use contracts::shared::view_switcher::View;
use leptos::prelude::*;
use web_sys::window;

/// The three card sections with their navigation and shortcut buttons.
///
/// Visibility classes are left to the view switcher, which is bound right
/// after mount.
#[component]
pub fn NameCard(profile: CardProfile) -> impl IntoView {
    let page_url = window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let mailto = profile.mailto();
    let tel = profile.tel();

    view! {
        <div class="card-container">
            <section id={View::Main.element_id()} class="card card--main">
                <div class="card__avatar">{profile.name.chars().next().unwrap_or('?').to_string()}</div>
                <h1 class="card__name">{profile.name.clone()}</h1>
                <p class="card__role">{profile.role.clone()}" · "{profile.company.clone()}</p>
                <p class="card__bio">{profile.bio.clone()}</p>
                <nav class="card__nav">
                    <button class="nav-btn" data-tab="detail">"Details"</button>
                    <button class="nav-btn" data-tab="share">"Share"</button>
                </nav>
            </section>

            <section id={View::Detail.element_id()} class="card card--detail">
                <header class="card__toolbar">
                    <button class="card__icon-btn" title="Back">"←"</button>
                    <span class="card__toolbar-title">{profile.name.clone()}</span>
                    <button class="card__icon-btn" title="Share">"⤴"</button>
                </header>
                <dl class="card__contacts">
                    <dt>"Email"</dt>
                    <dd><a href={mailto.clone()}>{profile.email.clone()}</a></dd>
                    <dt>"Phone"</dt>
                    <dd><a href={tel}>{profile.phone.clone()}</a></dd>
                    <dt>"Website"</dt>
                    <dd><a href={profile.website.clone()} target="_blank">{profile.website.clone()}</a></dd>
                </dl>
                <nav class="card__nav">
                    <button class="nav-btn" data-tab="main">"Home"</button>
                </nav>
            </section>

            <section id={View::Share.element_id()} class="card card--share">
                <header class="card__toolbar">
                    <span class="card__toolbar-title">"Share this card"</span>
                    <button class="card__icon-btn" title="Close">"✕"</button>
                </header>
                <input class="card__share-link" type="text" readonly=true value={page_url} />
                <a class="card__share-mail" href={mailto}>"Send by email"</a>
                <nav class="card__nav">
                    <button class="nav-btn" data-tab="main">"Home"</button>
                    <button class="nav-btn" data-tab="detail">"Details"</button>
                </nav>
            </section>
        </div>
    }
}
