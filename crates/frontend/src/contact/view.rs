use super::info::{BusinessHours, ContactMethods, SocialLinks};
use super::model::{ContactSubmitter, SimulatedSubmitter};
use super::notifier::{Notifier, ToastNotifier};
use super::view_model::ContactFormViewModel;
use crate::shared::config::Config;
use crate::shared::icons::icon;
use contracts::contact::{FieldMetadata, BUSINESS_HOURS, CONTACT_METHODS, FIELDS, SOCIAL_LINKS};
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;

/// Секция «Entre em Contato»
#[component]
pub fn ContactSection() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let submitter: Rc<dyn ContactSubmitter> =
        Rc::new(SimulatedSubmitter::new(config.submission.delay_ms));
    let vm = ContactFormViewModel::new(submitter, config.confirmation.copy);
    let notifier: Rc<dyn Notifier> = Rc::new(ToastNotifier::from_context());

    view! {
        <section id="contato" class="contact-section">
            <div class="contact-section__header">
                <h2>"Entre em Contato"</h2>
                <p>
                    "Estamos aqui para te atender! Entre em contato conosco ou visite uma de nossas lojas."
                </p>
            </div>

            <div class="contact-section__grid">
                // Informações de contato
                <div class="contact-section__info">
                    <h3>"Fale Conosco"</h3>
                    <p>
                        "Nossa equipe está sempre pronta para ajudar você. Entre em contato através de qualquer um dos canais abaixo."
                    </p>
                    <ContactMethods methods=CONTACT_METHODS />
                    <BusinessHours entries=BUSINESS_HOURS />
                    <SocialLinks links=SOCIAL_LINKS />
                </div>

                // Formulário
                <div class="contact-card contact-section__form">
                    <h3>"Envie uma Mensagem"</h3>
                    <ContactFormView vm=vm notifier=notifier />
                    <div class="contact-tip">
                        <p>
                            <strong>"Dica:"</strong>
                            " Para um atendimento mais rápido, entre em contato via WhatsApp ou ligue diretamente para a loja de sua preferência."
                        </p>
                    </div>
                </div>
            </div>

            <div class="contact-careers">
                <h3>"Trabalhe Conosco"</h3>
                <p>
                    "Faça parte da nossa equipe! Estamos sempre em busca de pessoas dedicadas e comprometidas para crescer junto conosco."
                </p>
                <button type="button" class="btn btn-primary">"Ver Vagas Disponíveis"</button>
            </div>
        </section>
    }
}

#[component]
pub fn ContactFormView(vm: ContactFormViewModel, notifier: Rc<dyn Notifier>) -> impl IntoView {
    let button = vm.submit_button();

    // Fires only after the browser's `required` check has passed
    let on_submit = {
        let vm = vm.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            vm.submit_command(notifier.clone());
        }
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            {FIELDS.iter().map(|meta| field_input(&vm, meta)).collect_view()}

            <button
                type="submit"
                class="btn btn-primary contact-form__submit"
                disabled=move || button().disabled
            >
                {move || {
                    let state = button();
                    if state.busy {
                        view! {
                            <Spinner size=SpinnerSize::Small />
                            <span>{state.label}</span>
                        }
                            .into_any()
                    } else {
                        view! {
                            {icon("send")}
                            <span>{state.label}</span>
                        }
                            .into_any()
                    }
                }}
            </button>
        </form>
    }
}

fn field_input(vm: &ContactFormViewModel, meta: &'static FieldMetadata) -> AnyView {
    let field = meta.field;
    let name = field.as_str();
    let value = vm.field(field);
    let on_input = {
        let vm = vm.clone();
        move |ev: leptos::ev::Event| vm.on_field_change(field, event_target_value(&ev))
    };

    let control = if meta.is_multiline() {
        view! {
            <textarea
                id=name
                name=name
                required=meta.required
                rows=meta.rows.unwrap_or(4).to_string()
                placeholder=meta.placeholder.unwrap_or_default()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    } else {
        view! {
            <input
                type=meta.input_type
                id=name
                name=name
                required=meta.required
                placeholder=meta.placeholder.unwrap_or_default()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class=format!("form-group contact-form__field contact-form__field--{}", name)>
            <label for=name>{meta.display_label()}</label>
            {control}
        </div>
    }
    .into_any()
}
