use leptos::prelude::*;

/// DateInput component with native date picker
/// Browser automatically displays dates in locale format (dd.mm.yyyy for RU locale)
#[component]
pub fn DateInput(
    /// Label shown above the input
    #[prop(into)]
    label: String,
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format)
    on_change: impl Fn(String) + 'static,
    /// Upper bound in yyyy-mm-dd format
    #[prop(optional, into)]
    max: Option<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                type="date"
                class="form__input"
                max=max
                prop:value=value
                on:input=move |ev| {
                    on_change(event_target_value(&ev));
                }
                style="padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff; width: 150px;"
            />
        </div>
    }
}
