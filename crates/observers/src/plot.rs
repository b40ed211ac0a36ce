//! Plotting with egui.
//!
//! [`EguiPlotter`] opens one window per [`Figure`]. [`PlotObserver`] collects
//! per-iteration traces from any solver whose events are [`Plottable`] and
//! hands them to the same plotter once the run is over.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use numlab_core::{
    Observer, Plotter,
    output::{Figure, Series, Style},
};
use numlab_solvers::{
    equation::{bisection, newton},
    ode,
};
use thiserror::Error;

/// A solver event that contributes one point to each of `N` traces.
///
/// An event with no abscissa is ignored; a `None` trace value leaves a gap in
/// that trace only.
pub trait Plottable<const N: usize> {
    fn x(&self) -> Option<f64>;

    fn traces(&self) -> [Option<f64>; N];
}

/// Iterate and residual against iteration.
impl Plottable<2> for bisection::Event {
    fn x(&self) -> Option<f64> {
        #[allow(clippy::cast_precision_loss)]
        Some(self.iter as f64)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.x), Some(self.residual)]
    }
}

/// Iterate and residual against iteration.
impl Plottable<2> for newton::Event {
    fn x(&self) -> Option<f64> {
        #[allow(clippy::cast_precision_loss)]
        Some(self.iter as f64)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.x), Some(self.residual)]
    }
}

/// The integrated solution against the independent variable.
impl Plottable<1> for ode::Event {
    fn x(&self) -> Option<f64> {
        Some(self.x)
    }

    fn traces(&self) -> [Option<f64>; 1] {
        [Some(self.y)]
    }
}

/// Records named traces from [`Plottable`] solver events.
///
/// # Example
///
/// ```ignore
/// let mut traces = PlotObserver::<2>::new(["x", "residual"]);
/// bisection::solve(f, [0.0, 1.0], &config, &mut traces)?;
/// traces.show("Bisection", &mut EguiPlotter::new().log_y())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Converts the collected traces into a [`Figure`].
    #[must_use]
    pub fn to_figure(&self, title: &str) -> Figure {
        self.names
            .iter()
            .zip(&self.data)
            .fold(Figure::new(title), |figure, (name, points)| {
                figure.with(Series::new(name.as_str(), points.clone()))
            })
    }

    /// Shows the collected traces as a single figure.
    ///
    /// # Errors
    ///
    /// Returns an error if the plot window cannot be opened.
    pub fn show(&self, title: &str, plotter: &mut EguiPlotter) -> Result<(), PlotError> {
        plotter.plot(&self.to_figure(title))
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// Returned when an egui window cannot be opened.
#[derive(Debug, Error)]
#[error("cannot open plot window for {title:?}: {message}")]
pub struct PlotError {
    pub title: String,
    pub message: String,
}

/// Shows each figure in its own window; [`Plotter::plot`] blocks until the
/// window is closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct EguiPlotter {
    log_y: bool,
}

impl EguiPlotter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Plots every figure on a logarithmic y-axis.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }
}

impl Plotter for EguiPlotter {
    type Error = PlotError;

    fn plot(&mut self, figure: &Figure) -> Result<(), PlotError> {
        let app = FigureApp {
            series: figure.series.clone(),
            bounds: [figure.x_domain, figure.y_domain],
            log_y: self.log_y,
        };

        eframe::run_native(
            &figure.title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| Ok(Box::new(app))),
        )
        .map_err(|e| PlotError {
            title: figure.title.clone(),
            message: e.to_string(),
        })
    }
}

struct FigureApp {
    series: Vec<Series>,
    bounds: [Option<[f64; 2]>; 2],
    log_y: bool,
}

impl FigureApp {
    fn plot_points(&self, points: &[[f64; 2]]) -> PlotPoints {
        if self.log_y {
            points
                .iter()
                .filter(|p| p[1] > 0.0)
                .map(|p| [p[0], p[1].log10()])
                .collect()
        } else {
            points.iter().copied().collect()
        }
    }
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("numlab_figure").legend(Legend::default());
            if self.log_y {
                plot = plot.y_axis_label("log₁₀");
            }
            if let [Some([x0, x1]), _] = self.bounds {
                plot = plot.include_x(x0).include_x(x1);
            }
            if let [_, Some([y0, y1])] = self.bounds {
                plot = plot.include_y(y0).include_y(y1);
            }

            plot.show(ui, |plot_ui| {
                for series in &self.series {
                    let points = self.plot_points(&series.points);
                    match series.style {
                        Style::Line => plot_ui.line(Line::new(points).name(&series.name)),
                        Style::Points => {
                            plot_ui.points(Points::new(points).radius(3.0).name(&series.name));
                        }
                    }
                }
            });
        });
    }
}
