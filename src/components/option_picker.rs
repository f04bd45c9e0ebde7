//! Option Picker Component
//!
//! Dropdown list used for sort order, category and status.

use leptos::prelude::*;

#[component]
pub fn OptionPicker(
    /// Text shown before the current value, e.g. "Sort by:"
    #[prop(optional, into)] label: String,
    options: Vec<&'static str>,
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let options = StoredValue::new(options);

    view! {
        <div class="option-picker">
            <button
                type="button"
                class="option-picker-toggle"
                on:click=move |_| set_open.update(|v| *v = !*v)
            >
                <span class="option-picker-label">{label}</span>
                " "
                <strong>{move || selected.get()}</strong>
                <span class="option-picker-arrow">{move || if open.get() { "▴" } else { "▾" }}</span>
            </button>
            <Show when=move || open.get()>
                <ul class="option-picker-list">
                    {options.get_value().into_iter().map(|option| {
                        let is_selected = move || selected.get() == option;
                        view! {
                            <li
                                class=move || if is_selected() { "option-picker-item active" } else { "option-picker-item" }
                                on:click=move |_| {
                                    on_select.run(option.to_string());
                                    set_open.set(false);
                                }
                            >
                                {option}
                                {move || is_selected().then_some(" ✓")}
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}
