use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::{format_balance, CategoryBucket};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const CANVAS_SIZE: u32 = 220;

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    pub buckets: Vec<CategoryBucket>,
    pub loading: bool,
    #[prop_or_default]
    pub title: Option<String>,
    /// Canvas fill, `#RRGGBB`; white when absent or unparsable
    #[prop_or_default]
    pub background: Option<String>,
}

/// Pie chart of category buckets with an HTML legend.
///
/// An empty bucket list renders the "no data" state instead of a chart.
pub struct CategoryChart {
    canvas_ref: NodeRef,
}

impl Component for CategoryChart {
    type Message = ();
    type Properties = CategoryChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        ctx.props() != old_props
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if has_chartable_data(&ctx.props().buckets) {
            self.draw_chart(ctx.props());
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <div class="category-chart">
                {if let Some(title) = &props.title {
                    html! { <h3 class="chart-title">{title}</h3> }
                } else { html! {} }}

                {if props.buckets.is_empty() && props.loading {
                    html! {
                        <div class="chart-loading">
                            <div class="loading-spinner"></div>
                            <p>{"Loading chart data..."}</p>
                        </div>
                    }
                } else if props.buckets.is_empty() {
                    html! {
                        <div class="chart-empty">
                            <i class="fas fa-chart-pie chart-empty-icon"></i>
                            <p>{"No data for this period"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="chart-content">
                            {if has_chartable_data(&props.buckets) {
                                html! {
                                    <canvas
                                        ref={self.canvas_ref.clone()}
                                        class="category-chart-canvas"
                                        width={CANVAS_SIZE.to_string()}
                                        height={CANVAS_SIZE.to_string()}
                                    ></canvas>
                                }
                            } else { html! {} }}
                            <ul class="chart-legend">
                                {for props.buckets.iter().map(|bucket| html! {
                                    <li class="legend-item" key={bucket.category.id.clone()}>
                                        <span class="legend-swatch" style={format!("background-color: {};", bucket.color)}></span>
                                        <span class="legend-name">{&bucket.category.name}</span>
                                        <span class="legend-amount">{format_balance(i64::try_from(bucket.total_abs_cents).unwrap_or(i64::MAX))}</span>
                                        <span class="legend-percentage">{format!("{:.1}%", bucket.percentage)}</span>
                                    </li>
                                })}
                            </ul>
                        </div>
                    }
                }}
            </div>
        }
    }
}

impl CategoryChart {
    fn draw_chart(&self, props: &CategoryChartProps) {
        let buckets = &props.buckets;
        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };

        let root = backend.into_drawing_area();
        let background = props
            .background
            .as_deref()
            .and_then(parse_hex_color)
            .unwrap_or(WHITE);
        if root.fill(&background).is_err() {
            return;
        }

        let sizes: Vec<f64> = buckets.iter().map(|bucket| bucket.total_abs_cents as f64).collect();
        let colors: Vec<RGBColor> = buckets
            .iter()
            .map(|bucket| parse_hex_color(&bucket.color).unwrap_or(RGBColor(143, 143, 143)))
            .collect();
        // names live in the HTML legend
        let labels: Vec<&str> = buckets.iter().map(|_| "").collect();

        let center = ((CANVAS_SIZE / 2) as i32, (CANVAS_SIZE / 2) as i32);
        let radius = f64::from(CANVAS_SIZE) * 0.42;

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(-90.0);
        pie.donut_hole(radius * 0.55);

        if let Err(e) = root.draw(&pie) {
            log::warn!(target: "category-chart", "failed to draw pie: {:?}", e);
            return;
        }

        let _ = root.present();
    }
}

/// A pie needs at least one non-zero slice
fn has_chartable_data(buckets: &[CategoryBucket]) -> bool {
    buckets.iter().any(|bucket| bucket.total_abs_cents > 0)
}

/// `#RRGGBB` into a plotters color
fn parse_hex_color(hex: &str) -> Option<RGBColor> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Category;

    fn bucket(total_abs_cents: u64) -> CategoryBucket {
        CategoryBucket {
            category: Category::new("food", "Food", "orange"),
            total_abs_cents,
            percentage: 0.0,
            color: "#FF8042".to_string(),
        }
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF8042"), Some(RGBColor(255, 128, 66)));
        assert_eq!(parse_hex_color("#0088fe"), Some(RGBColor(0, 136, 254)));
        assert_eq!(parse_hex_color("FF8042"), None);
        assert_eq!(parse_hex_color("#FF80"), None);
        assert_eq!(parse_hex_color("#GG8042"), None);
    }

    #[test]
    fn test_zero_buckets_are_not_chartable() {
        assert!(!has_chartable_data(&[]));
        assert!(!has_chartable_data(&[bucket(0)]));
        assert!(has_chartable_data(&[bucket(0), bucket(10)]));
    }
}
