// File: crates/chart-dioxus/src/lib.rs
// Summary: Line chart panel for Dioxus desktop: title bar with a "Change Color" button over an
// inline-SVG chart that tracks the pointer.
// Notes:
// - UI deps stay behind the `desktop` feature; `PanelState` holds all behavior and builds
//   without them so it can be tested headless.
// - Pointer coordinates come from the wrapper div; the SVG itself ignores pointer events.

use linechart_core::{ChartConfig, ChartPanel, ColorCycler, LineChart, LoadState, PointerEvent, Scene};
use linechart_data::{DataPoint, FetchError, Query};
use tracing::debug;

pub const TITLE: &str = "Simple Line chart";
pub const CHANGE_COLOR: &str = "Change Color";

/// Everything the panel component owns, independent of the UI toolkit.
/// Each mutating call returns fresh SVG markup when the picture changed.
pub struct PanelState {
    panel: ChartPanel<DataPoint>,
    scene: Scene,
    query: Query<Vec<DataPoint>>,
}

impl PanelState {
    pub fn new(config: ChartConfig) -> Self {
        let scene = Scene::new(config.width, config.height);
        let mut panel = ChartPanel::new(LineChart::new(config, DataPoint::accessors()), ColorCycler::default());
        let query = Query::new();
        panel.set_load_state(query.load_state());
        Self { panel, scene, query }
    }

    pub fn panel(&self) -> &ChartPanel<DataPoint> {
        &self.panel
    }

    pub fn load_state(&self) -> LoadState {
        self.panel.load_state()
    }

    /// Render the current presentation and serialize it.
    pub fn repaint(&mut self) -> String {
        self.panel.render(&mut self.scene);
        self.scene.to_svg()
    }

    /// Mark a fetch as started.
    pub fn begin_fetch(&mut self) -> String {
        self.query.begin();
        self.panel.set_load_state(self.query.load_state());
        self.repaint()
    }

    /// Apply the outcome of a fetch: data on success, the error message otherwise.
    pub fn settle(&mut self, result: Result<Vec<DataPoint>, FetchError>) -> String {
        self.query.finish(result);
        self.panel.set_load_state(self.query.load_state());
        if let Some(data) = self.query.take_data() {
            self.panel.chart_mut().set_data(Some(data));
        }
        self.repaint()
    }

    pub fn change_color(&mut self) -> String {
        self.panel.change_color();
        self.repaint()
    }

    /// Feed a pointer event. `None` when the crosshair did not move.
    pub fn pointer(&mut self, event: PointerEvent) -> Option<String> {
        let before = self.panel.chart().crosshair().position();
        self.panel.handle_event(event, &mut self.scene);
        let after = self.panel.chart().crosshair().position();
        if before == after {
            return None;
        }
        debug!(?after, "crosshair moved");
        Some(self.scene.to_svg())
    }
}

#[cfg(feature = "desktop")]
pub mod ui {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    use dioxus::prelude::*;
    use linechart_core::theme::colors;
    use linechart_core::{ChartConfig, PointerEvent};
    use linechart_data::DataSource;

    use super::{PanelState, CHANGE_COLOR, TITLE};

    #[derive(Props, Clone)]
    pub struct LineChartPanelProps {
        pub source: Arc<dyn DataSource>,
        #[props(default)]
        pub config: ChartConfig,
    }

    impl PartialEq for LineChartPanelProps {
        fn eq(&self, other: &Self) -> bool {
            Arc::ptr_eq(&self.source, &other.source) && self.config == other.config
        }
    }

    /// The chart card: header with title and color button, then the chart itself.
    /// The dataset is fetched once on mount.
    #[component]
    pub fn LineChartPanel(props: LineChartPanelProps) -> Element {
        let state = use_hook(|| Rc::new(RefCell::new(PanelState::new(props.config.clone()))));
        let mut svg = use_signal({
            let state = state.clone();
            move || state.borrow_mut().repaint()
        });

        let _fetch = use_future({
            let state = state.clone();
            let source = props.source.clone();
            move || {
                let state = state.clone();
                let source = source.clone();
                async move {
                    svg.set(state.borrow_mut().begin_fetch());
                    let result = source.fetch().await;
                    svg.set(state.borrow_mut().settle(result));
                }
            }
        });

        let on_color = {
            let state = state.clone();
            move |_| svg.set(state.borrow_mut().change_color())
        };
        let on_move = {
            let state = state.clone();
            move |evt: MouseEvent| {
                let p = evt.element_coordinates();
                let event = PointerEvent::Move { x: p.x as f32, y: p.y as f32 };
                if let Some(markup) = state.borrow_mut().pointer(event) {
                    svg.set(markup);
                }
            }
        };
        let on_leave = {
            let state = state.clone();
            move |_| {
                if let Some(markup) = state.borrow_mut().pointer(PointerEvent::Leave) {
                    svg.set(markup);
                }
            }
        };

        let (w, h) = (props.config.width, props.config.height);
        rsx! {
            article {
                style: format!(
                    "padding:16px; background-color:{}; display:inline-flex; flex-direction:column; border-radius:4px; border:1px solid {}; box-shadow:0 4px 16px 4px {};",
                    colors::WHITE, colors::LIGHTER, colors::LIGHTER
                ),
                div {
                    style: format!(
                        "display:flex; margin:16px; padding-bottom:16px; justify-content:space-between; align-items:center; border-bottom:1px solid {};",
                        colors::LIGHTER
                    ),
                    h1 { style: format!("font-family:sans-serif; color:{};", colors::DARKER), "{TITLE}" }
                    button {
                        style: format!(
                            "width:max-content; border:1px solid {}; border-radius:4px; padding:0.25em 0.5em; color:{}; background:none; font-family:sans-serif; font-size:16px; cursor:pointer;",
                            colors::LIGHTER, colors::DARKER
                        ),
                        onclick: on_color,
                        "{CHANGE_COLOR}"
                    }
                }
                div {
                    style: format!("position:relative; width:{w}px; height:{h}px;"),
                    onmousemove: on_move,
                    onmouseleave: on_leave,
                    div { style: "pointer-events:none;", dangerous_inner_html: "{svg}" }
                }
            }
        }
    }

    /// Launch a desktop window hosting one panel fed by `source`.
    pub fn run_desktop(source: Arc<dyn DataSource>, config: ChartConfig) {
        #[derive(Clone)]
        struct Launch {
            source: Arc<dyn DataSource>,
            config: ChartConfig,
        }

        #[component]
        fn App() -> Element {
            let launch = use_context::<Launch>();
            rsx! {
                main {
                    style: format!(
                        "background:{}; width:100%; height:100vh; display:flex; justify-content:center; align-items:center;",
                        colors::BG
                    ),
                    LineChartPanel { source: launch.source.clone(), config: launch.config.clone() }
                }
            }
        }

        let launch = Launch { source, config };
        let cfg = dioxus_desktop::Config::new()
            .with_prerendered("<style>html,body{margin:0;height:100%}</style>".to_string());
        let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = vec![Box::new(move || {
            Box::new(launch.clone()) as Box<dyn std::any::Any>
        })];
        let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(App, providers, globals);
    }
}
