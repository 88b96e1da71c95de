use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title, VisualMap, VisualMapPiece},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, LineStyle, LineStyleType, SplitLine,
        TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Bar,
};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::forecast::Forecast;

const CHART_ID: &str = "demand-chart";

#[derive(Properties, PartialEq)]
pub struct ForecastChartProps {
    pub forecast: Rc<Forecast>,
}

/// Per-hour demand bars for the selected city and day.
#[function_component(ForecastChart)]
pub fn forecast_chart(props: &ForecastChartProps) -> Html {
    let container_ref = use_node_ref();
    let series_data = use_memo(props.forecast.clone(), |forecast| forecast.series_data());

    {
        let container_ref = container_ref.clone();

        use_effect_with((series_data, container_ref), |(series_data, container_ref)| {
            let listener = container_ref.cast::<HtmlElement>().map(|container| {
                render_chart(&container, series_data);

                let series_data = series_data.clone();
                EventListener::new(&web_sys::window().unwrap(), "resize", move |_| {
                    render_chart(&container, &series_data);
                })
            });

            move || drop(listener)
        });
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, series_data: &(Vec<String>, Vec<f64>)) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(series_data);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

fn build_chart(series_data: &(Vec<String>, Vec<f64>)) -> CharmingChart {
    let (x_data, y_data) = series_data;

    // Cool-to-hot ramp over expected earnings per hour
    let bar_colors = [
        "#648fff", // quiet
        "#00b4a0", // steady
        "#ffb000", // busy
        "#fe6100", // peak
        "#dc267f", // surge-grade
    ];

    CharmingChart::new()
        .title(
            Title::new()
                .text("Expected €/hr by hour")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color("#1f2937")),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .visual_map(VisualMap::new().show(false).pieces(vec![
            VisualMapPiece::new().lt(12.0).color(bar_colors[0]),
            VisualMapPiece::new().gte(12.0).lt(18.0).color(bar_colors[1]),
            VisualMapPiece::new().gte(18.0).lt(24.0).color(bar_colors[2]),
            VisualMapPiece::new().gte(24.0).lt(30.0).color(bar_colors[3]),
            VisualMapPiece::new().gte(30.0).color(bar_colors[4]),
        ]))
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("14%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(x_data.clone())
                .axis_label(AxisLabel::new().rotate(45).color("#6b7280").interval(1)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("€/hr")
                .axis_label(AxisLabel::new().color("#6b7280"))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color("#e5e7eb")
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(Bar::new().data(y_data.clone()).bar_width("70%"))
}
