//! Static content renderer: one block per table entry, in table order

use crate::shared::icons::icon;
use contracts::contact::{BusinessHoursEntry, ContactMethod, SocialLink};
use leptos::prelude::*;

/// DOM ids of the rendered blocks, one per entry, in the same order.
/// Ids follow the entry key, with the index appended on a collision so
/// no block is dropped or merged.
pub fn block_ids<'a>(prefix: &str, keys: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for (index, key) in keys.into_iter().enumerate() {
        let id = format!("{}-{}", prefix, key);
        if ids.contains(&id) {
            ids.push(format!("{}-{}", id, index));
        } else {
            ids.push(id);
        }
    }
    ids
}

#[component]
pub fn ContactMethods(methods: &'static [ContactMethod]) -> impl IntoView {
    let ids = block_ids("contact-method", methods.iter().map(|m| m.key));

    view! {
        <div class="contact-methods">
            {methods
                .iter()
                .zip(ids)
                .map(|(method, id)| {
                    view! {
                        <div id=id class=format!("contact-card contact-card--{}", method.color)>
                            <div class="contact-card__header">
                                <div class="contact-card__icon">{icon(method.icon)}</div>
                                <div>
                                    <h4 class="contact-card__title">{method.title}</h4>
                                    <p class="contact-card__subtitle">{method.subtitle}</p>
                                </div>
                            </div>
                            <dl class="contact-card__items">
                                {method
                                    .items
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <div class={
                                                if item.highlight {
                                                    "contact-card__item contact-card__item--highlight"
                                                } else {
                                                    "contact-card__item"
                                                }
                                            }>
                                                <dt>{item.label}</dt>
                                                <dd>{item.value}</dd>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </dl>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn BusinessHours(entries: &'static [BusinessHoursEntry]) -> impl IntoView {
    view! {
        <div class="contact-card contact-hours">
            <div class="contact-card__header">
                <div class="contact-card__icon">{icon("clock")}</div>
                <h4 class="contact-card__title">"Horário de Funcionamento"</h4>
            </div>
            <ul class="contact-hours__list">
                {entries
                    .iter()
                    .map(|entry| {
                        view! {
                            <li class="contact-hours__row">
                                <span class="contact-hours__day">{entry.day}</span>
                                <span class="contact-hours__time">{entry.hours}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn SocialLinks(links: &'static [SocialLink]) -> impl IntoView {
    let ids = block_ids("social", links.iter().map(|l| l.key));

    view! {
        <div class="contact-card contact-social">
            <h4 class="contact-card__title">"Nos acompanhe nas redes sociais"</h4>
            <div class="contact-social__links">
                {links
                    .iter()
                    .zip(ids)
                    .map(|(link, id)| {
                        view! {
                            <a
                                id=id
                                class="btn btn-outline contact-social__link"
                                href=link.url.unwrap_or("#")
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {icon(link.icon)}
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="contact-social__hint">"Fique por dentro das nossas promoções e novidades!"</p>
        </div>
    }
}
