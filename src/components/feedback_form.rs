//! Feedback Form Component
//!
//! Shared fields of the new and edit forms, with per-field error messages.

use leptos::prelude::*;

use feedback_core::{Category, FeedbackForm, FeedbackItem, Field, Status, SubmitError, ValidationErrors};

use crate::components::OptionPicker;

/// Form input state. Holds the raw text so validation sees exactly what was typed.
#[derive(Clone, Copy)]
pub struct FormSignals {
    pub title: RwSignal<String>,
    pub category: RwSignal<String>,
    pub status: RwSignal<Option<String>>,
    pub description: RwSignal<String>,
    pub errors: RwSignal<ValidationErrors>,
    /// Remote failure shown above the buttons
    pub remote_error: RwSignal<Option<String>>,
    pub submitting: RwSignal<bool>,
}

impl FormSignals {
    /// Empty form for new feedback
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            category: RwSignal::new(Category::Feature.as_str().to_string()),
            status: RwSignal::new(None),
            description: RwSignal::new(String::new()),
            errors: RwSignal::new(ValidationErrors::default()),
            remote_error: RwSignal::new(None),
            submitting: RwSignal::new(false),
        }
    }

    /// Load an existing item into the fields
    pub fn fill(&self, item: &FeedbackItem) {
        self.title.set(item.title.clone());
        self.category.set(item.category.as_str().to_string());
        self.status.set(Some(item.status.as_str().to_string()));
        self.description.set(item.description.clone());
    }

    pub fn snapshot(&self) -> FeedbackForm {
        FeedbackForm::new(
            self.title.get_untracked(),
            self.category.get_untracked(),
            self.status.get_untracked(),
            self.description.get_untracked(),
        )
    }

    /// Mark a request as started; false if one is already running
    pub fn begin_submit(&self) -> bool {
        if self.submitting.get_untracked() {
            return false;
        }
        self.submitting.set(true);
        self.errors.set(ValidationErrors::default());
        self.remote_error.set(None);
        true
    }

    /// Show a failed submission
    pub fn fail(&self, err: SubmitError) {
        self.submitting.set(false);
        match err {
            SubmitError::Invalid(errors) => self.errors.set(errors),
            SubmitError::Remote(err) => self.remote_error.set(Some(err.to_string())),
        }
    }

    fn error(&self, field: Field) -> Option<String> {
        self.errors.with(|e| e.get(field).map(str::to_string))
    }
}

#[component]
fn FieldError(form: FormSignals, field: Field) -> impl IntoView {
    move || form.error(field).map(|message| view! { <p class="field-error">{message}</p> })
}

#[component]
pub fn FeedbackFormFields(
    form: FormSignals,
    /// Edit form shows the status picker
    #[prop(optional)]
    with_status: bool,
) -> impl IntoView {
    let invalid = move |field: Field| form.error(field).is_some();

    view! {
        <div class=move || if invalid(Field::Title) { "form-field invalid" } else { "form-field" }>
            <label>"Feedback Title"</label>
            <p class="form-hint">"Add a short, descriptive headline"</p>
            <input
                type="text"
                prop:value=move || form.title.get()
                on:input=move |ev| form.title.set(event_target_value(&ev))
            />
            <FieldError form=form field=Field::Title />
        </div>

        <div class=move || if invalid(Field::Category) { "form-field invalid" } else { "form-field" }>
            <label>"Category"</label>
            <p class="form-hint">"Choose a category for your feedback"</p>
            <OptionPicker
                options=Category::ALL.iter().map(|c| c.as_str()).collect()
                selected=Signal::derive(move || form.category.get())
                on_select=move |value: String| form.category.set(value)
            />
            <FieldError form=form field=Field::Category />
        </div>

        {with_status.then(|| view! {
            <div class=move || if invalid(Field::Status) { "form-field invalid" } else { "form-field" }>
                <label>"Update Status"</label>
                <p class="form-hint">"Change feature state"</p>
                <OptionPicker
                    options=Status::ALL.iter().map(|s| s.as_str()).collect()
                    selected=Signal::derive(move || form.status.get().unwrap_or_default())
                    on_select=move |value: String| form.status.set(Some(value))
                />
                <FieldError form=form field=Field::Status />
            </div>
        })}

        <div class=move || if invalid(Field::Description) { "form-field invalid" } else { "form-field" }>
            <label>"Feedback Detail"</label>
            <p class="form-hint">"Include any specific comments on what should be improved, added, etc."</p>
            <textarea
                prop:value=move || form.description.get()
                on:input=move |ev| form.description.set(event_target_value(&ev))
            ></textarea>
            <FieldError form=form field=Field::Description />
        </div>

        {move || form.remote_error.get().map(|message| view! { <p class="form-error">{message}</p> })}
    }
}
