//! Отрисовка графиков через глобальный `window.Chart` (Chart.js).
//!
//! Перед созданием нового графика прежний экземпляр на том же canvas
//! уничтожается через `Chart.getChart(canvas).destroy()`.

use crate::dashboards::d405_organization_stats::render::{
    AxisKind, ChartPresentation, LineSeries, RenderError,
};
use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use serde_json::{json, Value};
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};

pub const DRIVERS_CANVAS_ID: &str = "d405-chart-drivers";
pub const ORDERS_CANVAS_ID: &str = "d405-chart-orders";

const DRIVERS_COLOR: &str = "#0f6cbd";
const ORDERS_COLOR: &str = "#e8590c";

/// Конфигурация одного линейного графика
pub fn chart_config(chart: &ChartPresentation, series: &LineSeries, color: &str) -> Value {
    let x_scale = match chart.axis {
        AxisKind::Category => json!({ "type": "category" }),
        AxisKind::Time => json!({
            "type": "time",
            "time": { "unit": "day", "tooltipFormat": "dd.MM.yyyy" }
        }),
    };

    json!({
        "type": "line",
        "data": {
            "labels": chart.labels,
            "datasets": [{
                "label": series.label,
                "data": series.points,
                "borderColor": color,
                "backgroundColor": color,
                "tension": 0.2
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "animation": false,
            "interaction": { "mode": "index", "intersect": false },
            "scales": {
                "x": x_scale,
                "y": { "beginAtZero": true }
            }
        }
    })
}

#[derive(Debug, Clone, Default)]
pub struct ChartJsSurface;

impl ChartJsSurface {
    pub fn new() -> Self {
        Self
    }

    pub fn draw(&self, chart: &ChartPresentation) -> Result<(), RenderError> {
        let window = web_sys::window()
            .ok_or_else(|| RenderError::CapabilityUnavailable("нет window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| RenderError::CapabilityUnavailable("нет document".to_string()))?;
        let ctor = chart_constructor(&window)?;

        for (canvas_id, series, color) in [
            (DRIVERS_CANVAS_ID, &chart.drivers, DRIVERS_COLOR),
            (ORDERS_CANVAS_ID, &chart.orders, ORDERS_COLOR),
        ] {
            let canvas = document.get_element_by_id(canvas_id).ok_or_else(|| {
                RenderError::CapabilityUnavailable(format!("canvas #{} не найден", canvas_id))
            })?;
            destroy_existing(&ctor, &canvas);

            let config = chart_config(chart, series, color)
                .serialize(&Serializer::json_compatible())
                .map_err(|e| RenderError::CapabilityUnavailable(e.to_string()))?;

            Reflect::construct(&ctor, &Array::of2(&canvas.into(), &config))
                .map_err(|e| RenderError::CapabilityUnavailable(format!("{:?}", e)))?;
        }

        Ok(())
    }

    pub fn purge(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(ctor) = chart_constructor(&window) else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        for canvas_id in [DRIVERS_CANVAS_ID, ORDERS_CANVAS_ID] {
            if let Some(canvas) = document.get_element_by_id(canvas_id) {
                destroy_existing(&ctor, &canvas);
            }
        }
    }
}

fn chart_constructor(window: &web_sys::Window) -> Result<Function, RenderError> {
    let value = Reflect::get(window, &JsValue::from_str("Chart"))
        .map_err(|e| RenderError::CapabilityUnavailable(format!("{:?}", e)))?;
    if !value.is_function() {
        return Err(RenderError::CapabilityUnavailable(
            "Chart.js не загружен".to_string(),
        ));
    }
    value
        .dyn_into::<Function>()
        .map_err(|e| RenderError::CapabilityUnavailable(format!("{:?}", e)))
}

fn destroy_existing(ctor: &Function, canvas: &web_sys::Element) {
    let Ok(get_chart) = Reflect::get(ctor, &JsValue::from_str("getChart")) else {
        return;
    };
    let Ok(get_chart) = get_chart.dyn_into::<Function>() else {
        return;
    };
    let Ok(instance) = get_chart.call1(ctor, canvas) else {
        return;
    };
    if instance.is_undefined() || instance.is_null() {
        return;
    }
    if let Ok(destroy) = Reflect::get(&instance, &JsValue::from_str("destroy")) {
        if let Ok(destroy) = destroy.dyn_into::<Function>() {
            if let Err(err) = destroy.call0(&instance) {
                log::warn!("Chart.destroy failed: {:?}", err);
            }
        }
    }
}
