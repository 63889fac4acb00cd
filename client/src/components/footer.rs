use leptos::prelude::*;

use crate::content::profile::{COPYRIGHT_YEAR, FOOTER_LINKS, NAME};

#[component]
pub fn Footer() -> impl IntoView {
    let links = FOOTER_LINKS
        .iter()
        .map(|(label, href)| {
            view! {
                <a href=*href target="_blank" rel="noopener noreferrer">
                    {*label}
                </a>
            }
        })
        .collect_view();

    view! {
        <footer class="footer">
            <p>{format!("© {COPYRIGHT_YEAR} {NAME}. Built with love⚡")}</p>
            <nav class="footer__links">{links}</nav>
        </footer>
    }
}
