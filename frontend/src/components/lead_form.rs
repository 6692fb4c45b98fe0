use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::{FocusEvent, HtmlInputElement, HtmlSelectElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::components::ripple::RippleButton;
use crate::config::{ERROR_BORDER_COLOR, SUBMIT_DELAY_MS};
use crate::form::{FieldKind, FieldSpec, LeadForm, SubmitStep};
use crate::validation::error_element_id;

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    /// Called once the simulated submission has finished.
    pub on_submitted: Callback<()>,
}

#[function_component(LeadFormSection)]
pub fn lead_form_section(props: &LeadFormProps) -> Html {
    let form = use_state(LeadForm::default);
    let pending: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    {
        let pending = pending.clone();
        use_effect_with_deps(
            move |_| move || {
                pending.borrow_mut().take();
            },
            (),
        );
    }

    let onsubmit = {
        let form = form.clone();
        let pending = pending.clone();
        let on_submitted = props.on_submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut checked = (*form).clone();
            if checked.begin_submit() == SubmitStep::Blocked {
                debug!("Lead form has invalid fields, not submitting");
                form.set(checked);
                return;
            }

            info!("Submitting lead");
            debug!("Lead details: {}", checked.snapshot());

            let done = {
                let form = form.clone();
                let on_submitted = on_submitted.clone();
                let mut finished = checked.clone();
                Timeout::new(SUBMIT_DELAY_MS, move || {
                    if finished.finish_submit() {
                        on_submitted.emit(());
                    }
                    form.set(finished);
                    debug!("Lead form reset");
                })
            };
            // A newer submission replaces (and cancels) one still in flight.
            *pending.borrow_mut() = Some(done);
            form.set(checked);
        })
    };

    let fields = form
        .fields()
        .iter()
        .enumerate()
        .map(|(index, spec)| render_field(&form, index, spec))
        .collect::<Html>();

    let loading = form.is_submitting();

    html! {
        <section class="lead-form-section" id="lead-form">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{"Become a Partner"}</h2>
                    <p class="section-subtitle">{"Tell us about your business and we will reach out within a day."}</p>
                </div>
                <form class="lead-form" id="leadForm" novalidate={true} {onsubmit}>
                    { fields }
                    <RippleButton
                        id="submitBtn"
                        button_type="submit"
                        classes={classes!("submit-btn", loading.then_some("loading"))}
                        disabled={loading}
                    >
                        <span class="btn-text">{"Get Started"}</span>
                        <span class="loader" id="submitLoader"></span>
                    </RippleButton>
                    <p class="form-note">{"We never share your details. No spam, ever."}</p>
                </form>
            </div>
        </section>
    }
}

fn render_field(form: &UseStateHandle<LeadForm>, index: usize, spec: &FieldSpec) -> Html {
    let error = form.state(index).error();
    let style = error.map(|_| format!("border-color: {};", ERROR_BORDER_COLOR));

    let onblur = {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*form).clone();
            next.blur(index);
            form.set(next);
        })
    };

    let input = match spec.kind {
        FieldKind::Select(options) => {
            let oninput = {
                let form = form.clone();
                Callback::from(move |e: InputEvent| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    let mut next = (*form).clone();
                    next.input(index, select.value());
                    form.set(next);
                })
            };
            html! {
                <select id={spec.id} name={spec.id} required={spec.required} {style} {oninput} {onblur}>
                    { for options.iter().map(|(value, label)| html! {
                        <option value={*value} selected={form.value(index) == *value}>{*label}</option>
                    }) }
                </select>
            }
        }
        kind => {
            let input_type = match kind {
                FieldKind::Tel => "tel",
                FieldKind::Email => "email",
                _ => "text",
            };
            let oninput = {
                let form = form.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let mut next = (*form).clone();
                    next.input(index, input.value());
                    form.set(next);
                })
            };
            html! {
                <input
                    type={input_type}
                    id={spec.id}
                    name={spec.id}
                    placeholder={spec.placeholder}
                    required={spec.required}
                    value={form.value(index).to_string()}
                    {style}
                    {oninput}
                    {onblur}
                />
            }
        }
    };

    html! {
        <div class="form-group">
            <label for={spec.id}>{spec.label}</label>
            { input }
            <span class="error-message" id={error_element_id(spec.id)}>{error.unwrap_or_default()}</span>
        </div>
    }
}
