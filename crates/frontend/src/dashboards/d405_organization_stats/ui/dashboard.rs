use super::adapters::{
    BrowserNavigator, DashboardSignals, SelectorSignals, SignalDashboardView,
    SignalOrganizationSelector,
};
use super::chart_js::{DRIVERS_CANVAS_ID, ORDERS_CANVAS_ID};
use crate::dashboards::d405_organization_stats::api::HttpReportClient;
use crate::dashboards::d405_organization_stats::controller::{
    Dashboard, DashboardController, DashboardPorts,
};
use crate::dashboards::d405_organization_stats::filter::RawFilter;
use crate::dashboards::d405_organization_stats::state::ViewMode;
use crate::shared::api_utils::api_base;
use crate::shared::components::{DateInput, SearchableSelect};
use crate::shared::config::DashboardConfig;
use crate::shared::date_utils::{parse_input_date, today_iso};
use crate::shared::notifications::NotificationService;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

/// Дашборд статистики по организациям (d405)
#[component]
pub fn OrganizationStatsDashboard(config: DashboardConfig) -> impl IntoView {
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not found in context");

    let signals = DashboardSignals::new();
    let selector = SelectorSignals::new();

    let (date_from, set_date_from) = signal(String::new());
    let (date_to, set_date_to) = signal(String::new());
    let (monthly, set_monthly) = signal(false);
    let corp_filter = RwSignal::new(config.organizations.corp_filter_default);

    let controller = DashboardController::new(
        DashboardPorts {
            client: Rc::new(HttpReportClient::new(api_base(&config.api.base_url))),
            view: Box::new(SignalDashboardView::new(signals)),
            selector: Box::new(SignalOrganizationSelector::new(selector)),
            notifier: Rc::new(notifications),
            navigator: Box::new(BrowserNavigator),
        },
        config.organizations.corp_filter_default,
    );
    let dashboard = StoredValue::new_local(Dashboard::new(controller));

    // Снимок формы на момент действия пользователя
    let raw_filter = move || {
        let organization = selector.selected.get_untracked();
        RawFilter {
            organization: (!organization.is_empty()).then_some(organization),
            date_from: parse_input_date(&date_from.get_untracked()),
            date_to: parse_input_date(&date_to.get_untracked()),
            monthly: monthly.get_untracked(),
        }
    };

    {
        let dashboard = dashboard.get_value();
        spawn_local(async move {
            dashboard.reload_organizations().await;
        });
    }

    let on_submit = move |_| {
        let dashboard = dashboard.get_value();
        let raw = raw_filter();
        spawn_local(async move {
            dashboard.submit_filter(raw).await;
        });
    };

    let on_monthly_change = move |ev: leptos::ev::Event| {
        set_monthly.set(event_target_checked(&ev));
        let dashboard = dashboard.get_value();
        let raw = raw_filter();
        spawn_local(async move {
            dashboard.aggregation_changed(raw).await;
        });
    };

    let on_corp_change = move |ev: leptos::ev::Event| {
        let enabled = event_target_checked(&ev);
        corp_filter.set(enabled);
        let dashboard = dashboard.get_value();
        spawn_local(async move {
            dashboard.toggle_corp_filter(enabled).await;
        });
    };

    let on_export = move |_| {
        dashboard.with_value(|d| {
            d.request_export(&raw_filter());
        });
    };

    let show_mode = move |mode: ViewMode| {
        dashboard.with_value(|d| d.set_view_mode(mode));
    };

    let mode_appearance = move |mode: ViewMode| {
        Signal::derive(move || {
            if signals.view_mode.get() == mode {
                ButtonAppearance::Primary
            } else {
                ButtonAppearance::Secondary
            }
        })
    };

    let today = today_iso();

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Статистика по организациям"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=mode_appearance(ViewMode::Table)
                        size=ButtonSize::Small
                        on_click=move |_| show_mode(ViewMode::Table)
                    >
                        "Таблица"
                    </Button>
                    <Button
                        appearance=mode_appearance(ViewMode::Chart)
                        size=ButtonSize::Small
                        on_click=move |_| show_mode(ViewMode::Chart)
                    >
                        "График"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel" style="display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin-bottom: 16px;">
                    <SearchableSelect
                        label="Организация"
                        options=selector.options
                        value=selector.selected
                        search=selector.search
                        loading=selector.loading
                        generation=selector.generation
                        focus_requests=selector.focus_requests
                        on_open=Callback::new(move |_| {
                            dashboard.with_value(|d| d.focus_organization_search())
                        })
                    />
                    <DateInput
                        label="Дата с"
                        value=date_from
                        on_change=move |v| set_date_from.set(v)
                        max=today.clone()
                    />
                    <DateInput
                        label="Дата по"
                        value=date_to
                        on_change=move |v| set_date_to.set(v)
                        max=today
                    />
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || monthly.get()
                            on:change=on_monthly_change
                        />
                        " По месяцам"
                    </label>
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || corp_filter.get()
                            on:change=on_corp_change
                        />
                        " Только корпоративные"
                    </label>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !signals.submit_enabled.get())
                        on_click=on_submit
                    >
                        {move || if signals.submit_enabled.get() { "Показать" } else { "Загрузка..." }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=on_export
                    >
                        "Экспорт в Excel"
                    </Button>
                </div>

                <Show when=move || signals.empty_state.get()>
                    <div class="placeholder" style="padding: 40px; text-align: center; color: #6c757d;">
                        "Выберите организацию и период и нажмите «Показать»"
                    </div>
                </Show>

                {move || signals.table.get().map(|table| {
                    let headers = table.headers;
                    view! {
                        <div class="table-wrapper">
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        {headers.into_iter().map(|title| view! {
                                            <TableHeaderCell resizable=false>{title}</TableHeaderCell>
                                        }).collect_view()}
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {table.rows.into_iter().map(|row| view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{row.period}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.organization}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="display: block; text-align: right;">{row.drivers}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="display: block; text-align: right;">{row.orders}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }).collect_view()}
                                </TableBody>
                            </Table>
                        </div>
                    }
                })}

                // Холсты всегда в DOM: Chart.js ищет их по id
                <div
                    class="chart-grid"
                    style=move || {
                        if signals.chart_visible.get() {
                            "display: grid; grid-template-columns: 1fr; gap: 16px;"
                        } else {
                            "display: none;"
                        }
                    }
                >
                    <div style="position: relative; height: 320px;">
                        <canvas id=DRIVERS_CANVAS_ID></canvas>
                    </div>
                    <div style="position: relative; height: 320px;">
                        <canvas id=ORDERS_CANVAS_ID></canvas>
                    </div>
                </div>
            </div>
        </div>
    }
}
