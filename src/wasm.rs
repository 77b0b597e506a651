//! WebAssembly bindings for the blooming calendar chart.
//!
//! The host page owns the DOM and forwards pointer events; the chart owns the
//! hover state and hands back SVG markup or PNG bytes to display.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { BloomChartHandle } from 'bloom-sunburst';
//!
//! await init();
//!
//! const chart = new BloomChartHandle(500, 500);
//! const host = document.getElementById('chart');
//! host.innerHTML = chart.svg();
//!
//! host.addEventListener('pointermove', (e) => {
//!     const r = host.getBoundingClientRect();
//!     if (chart.pointer_move(e.clientX - r.left, e.clientY - r.top)) {
//!         host.innerHTML = chart.svg();
//!     }
//! });
//! ```

use wasm_bindgen::prelude::*;

use crate::error::Error;
use crate::geometry::Point;
use crate::plots::SunburstChart;

fn to_js(e: Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    // WASM module initialized
}

/// A live chart driven by host pointer events.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct BloomChartHandle {
    chart: SunburstChart,
}

#[wasm_bindgen]
impl BloomChartHandle {
    /// Chart of the reference garden at the given size.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<BloomChartHandle, JsValue> {
        let chart = SunburstChart::new()
            .dimensions(width, height)
            .build()
            .map_err(to_js)?;
        Ok(Self { chart })
    }

    /// Chart described by a YAML configuration.
    #[wasm_bindgen(js_name = fromYaml)]
    pub fn from_yaml(yaml: &str) -> Result<BloomChartHandle, JsValue> {
        let chart = crate::config::ChartConfig::parse(yaml)
            .and_then(crate::config::ChartConfig::into_chart)
            .map_err(to_js)?;
        Ok(Self { chart })
    }

    /// The pointer entered month arc `index`. Returns `true` if the view changed.
    #[wasm_bindgen]
    pub fn pointer_enter(&mut self, index: usize) -> bool {
        self.chart.pointer_enter(index)
    }

    /// The pointer left the month ring. Returns `true` if the view changed.
    #[wasm_bindgen]
    pub fn pointer_leave(&mut self) -> bool {
        self.chart.pointer_leave()
    }

    /// The pointer moved to `(x, y)` in chart pixels. Returns `true` if the
    /// view changed.
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.chart.pointer_move(Point::new(x, y))
    }

    /// Hovered month name, if any.
    #[wasm_bindgen]
    pub fn selected_month(&self) -> Option<String> {
        self.chart.selected_month().map(str::to_string)
    }

    /// Current view as SVG markup.
    #[wasm_bindgen]
    pub fn svg(&self) -> String {
        self.chart.to_svg()
    }

    /// Current view as PNG bytes.
    #[wasm_bindgen]
    pub fn png(&self) -> Result<Vec<u8>, JsValue> {
        self.chart.to_png_bytes().map_err(to_js)
    }
}
