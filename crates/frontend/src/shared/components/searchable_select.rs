use leptos::prelude::*;

/// Варианты, содержащие строку поиска (без учёта регистра), в исходном порядке.
///
/// Выбранное значение остаётся в списке при любом запросе: `<select>` всегда
/// показывает то, что хранится в `value`.
pub fn filter_options(options: &[String], query: &str, selected: &str) -> Vec<String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .filter(|option| {
            (!selected.is_empty() && option.as_str() == selected)
                || option.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Select с полем поиска
///
/// Виджет `<select>` пересоздаётся целиком при каждом изменении `generation`.
#[component]
pub fn SearchableSelect(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Options: values are shown as is
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Selected value, empty string when nothing is selected
    value: RwSignal<String>,
    /// Search query
    search: RwSignal<String>,
    /// While loading the widget is disabled and shows a placeholder
    #[prop(into)]
    loading: Signal<bool>,
    #[prop(into)]
    generation: Signal<u64>,
    /// Every change moves focus to the search field
    #[prop(into)]
    focus_requests: Signal<u64>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Click on the label
    #[prop(optional)]
    on_open: Option<Callback<()>>,
) -> impl IntoView {
    let search_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |prev: Option<u64>| {
        let requests = focus_requests.get();
        if prev.is_some() {
            if let Some(input) = search_ref.get() {
                let _ = input.focus();
            }
        }
        requests
    });

    let visible =
        Memo::new(move |_| filter_options(&options.get(), &search.get(), &value.get()));

    view! {
        <div class="form__group searchable-select">
            {move || label.get().map(|l| view! {
                <label
                    class="form__label"
                    style="cursor: pointer;"
                    on:click=move |_| {
                        if let Some(handler) = on_open {
                            handler.run(());
                        }
                    }
                >
                    {l}
                </label>
            })}
            <input
                type="search"
                class="form__input"
                node_ref=search_ref
                placeholder="Поиск..."
                prop:value=move || search.get()
                disabled=move || loading.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            {move || {
                let _ = generation.get();
                view! {
                    <select
                        class="form__select"
                        disabled=move || loading.get()
                        on:change=move |ev| {
                            let selected = event_target_value(&ev);
                            value.set(selected.clone());
                            if let Some(handler) = on_change {
                                handler.run(selected);
                            }
                        }
                    >
                        {move || {
                            if loading.get() {
                                view! { <option value="">"Загрузка..."</option> }.into_any()
                            } else {
                                view! {
                                    <option
                                        value=""
                                        disabled=true
                                        selected=move || {
                                            let current = value.get();
                                            !visible.with(|v| v.contains(&current))
                                        }
                                    >
                                        "Выберите организацию"
                                    </option>
                                }.into_any()
                            }
                        }}
                        <For
                            each=move || visible.get()
                            key=|option| option.clone()
                            children=move |option| {
                                let option_value = option.clone();
                                let option_clone = option.clone();
                                let is_selected = move || value.get() == option_clone;
                                view! {
                                    <option value=option_value selected=is_selected>
                                        {option}
                                    </option>
                                }
                            }
                        />
                    </select>
                }
            }}
        </div>
    }
}
