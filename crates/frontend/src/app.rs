use crate::contact::ContactSection;
use crate::shared::config::load_config;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the contact settings to the whole page via context.
    provide_context(load_config());

    view! {
        <ConfigProvider>
            <ToasterProvider>
                <ContactSection />
            </ToasterProvider>
        </ConfigProvider>
    }
}
