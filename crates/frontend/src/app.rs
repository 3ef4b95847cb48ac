use crate::shared::card::{CardProfile, NameCard};
use crate::shared::view_switcher::{bind_page, load_config, DocumentHost};
use contracts::shared::view_switcher::{View, ViewHost};
use leptos::prelude::*;

#[component]
pub fn App(profile: CardProfile) -> impl IntoView {
    view! {
        <NameCard profile=profile />
    }
}

/// Render the card if the page has no markup of its own, then bind the
/// view switcher to whatever sections are present.
pub fn run() {
    let Some(host) = DocumentHost::current() else {
        log::error!("no document available, view switcher not started");
        return;
    };

    if needs_builtin_markup(&host) {
        let profile = CardProfile::load(host.document());
        leptos::mount::mount_to_body(move || view! { <App profile=profile /> });
    }

    let config = load_config(host.document());
    bind_page(host, config);
}

/// True when the page has none of the view containers.
pub fn needs_builtin_markup<H: ViewHost>(host: &H) -> bool {
    View::all()
        .iter()
        .all(|view| host.find_view(&view.element_id()).is_none())
}
