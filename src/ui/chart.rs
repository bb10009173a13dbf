use crate::format::format_currency;
use crate::model::ChartSeries;
use yew::prelude::*;

// circumference of 100 so dash lengths are percentages
const RADIUS: f64 = 15.915_494_309_189_533;

#[derive(Properties, PartialEq)]
pub struct DoughnutProps {
    pub series: ChartSeries,
    pub symbol: String,
}

/// Doughnut chart of the spending breakdown, drawn as stroked SVG circles.
#[function_component(Doughnut)]
pub fn doughnut(props: &DoughnutProps) -> Html {
    let percentages = props.series.percentages();
    let mut offset = 25.0;
    let arcs = props
        .series
        .slices()
        .iter()
        .zip(percentages)
        .map(|(slice, pct)| {
            let arc = html! {
                <circle cx="21" cy="21" r={RADIUS.to_string()} fill="transparent"
                    stroke={slice.color.clone()} stroke-width="5"
                    stroke-dasharray={format!("{:.3} {:.3}", pct, 100.0 - pct)}
                    stroke-dashoffset={format!("{:.3}", offset)} />
            };
            offset -= pct;
            arc
        })
        .collect::<Html>();

    html! {
        <div class="bg-card rounded-[10px] p-6 border border-border">
            <h3 class="font-bold text-foreground text-lg mb-3">{"Distribuição"}</h3>
            { if props.series.is_empty() {
                html! { <p class="text-sm text-muted-foreground">{"Nada para exibir ainda."}</p> }
            } else {
                html! {
                    <>
                        <svg viewBox="0 0 42 42" class="w-full max-w-[220px] mx-auto">
                            <circle cx="21" cy="21" r={RADIUS.to_string()} fill="transparent" stroke="#e2e8f0" stroke-width="5" />
                            { arcs }
                        </svg>
                        <ul class="mt-4 space-y-1 text-sm">
                            { for props.series.slices().iter().map(|slice| html! {
                                <li class="flex items-center justify-between">
                                    <span class="flex items-center gap-2">
                                        <span class="inline-block w-3 h-3 rounded-full border"
                                            style={format!("background:{};border-color:{}", slice.color, slice.border_color)}></span>
                                        { slice.label.clone() }
                                    </span>
                                    <span class="text-muted-foreground">{ format_currency(slice.value, &props.symbol) }</span>
                                </li>
                            }) }
                        </ul>
                    </>
                }
            }}
        </div>
    }
}
