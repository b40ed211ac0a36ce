//! Sinks for results: figures for a plotting service, values and tables for
//! an output renderer.
//!
//! The numerical crates never draw or print anything themselves. Lab runs
//! build [`Figure`]s and [`Table`]s from pure data and hand them to whatever
//! [`Plotter`] and [`Renderer`] the caller injects.

use std::{convert::Infallible, fmt::Display};

/// How a [`Series`] should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Consecutive points joined by line segments.
    #[default]
    Line,
    /// Unconnected markers.
    Points,
}

/// A named sequence of `[x, y]` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub style: Style,
    pub points: Vec<[f64; 2]>,
}

impl Series {
    /// Creates a line series from existing points.
    pub fn new(name: impl Into<String>, points: Vec<[f64; 2]>) -> Self {
        Self {
            name: name.into(),
            style: Style::Line,
            points,
        }
    }

    /// Samples `f` at `samples` evenly spaced points across `domain`.
    ///
    /// Fewer than two samples yields the left end only.
    pub fn sampled(
        name: impl Into<String>,
        f: impl Fn(f64) -> f64,
        domain: [f64; 2],
        samples: usize,
    ) -> Self {
        let [from, to] = domain;
        let points = match samples {
            0 => Vec::new(),
            1 => vec![[from, f(from)]],
            n => {
                #[allow(clippy::cast_precision_loss)]
                let step = (to - from) / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        #[allow(clippy::cast_precision_loss)]
                        let x = if i == n - 1 { to } else { from + i as f64 * step };
                        [x, f(x)]
                    })
                    .collect()
            }
        };
        Self::new(name, points)
    }

    /// Sets the drawing style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// A titled chart made of one or more series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Figure {
    pub title: String,
    pub x_domain: Option<[f64; 2]>,
    pub y_domain: Option<[f64; 2]>,
    pub series: Vec<Series>,
}

impl Figure {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn x_domain(mut self, domain: [f64; 2]) -> Self {
        self.x_domain = Some(domain);
        self
    }

    #[must_use]
    pub fn y_domain(mut self, domain: [f64; 2]) -> Self {
        self.y_domain = Some(domain);
        self
    }

    #[must_use]
    pub fn with(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }
}

/// A titled table stored column by column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub title: String,
    pub headers: Vec<String>,
    pub columns: Vec<Vec<f64>>,
}

impl Table {
    pub fn new(title: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            title: title.into(),
            headers: headers.iter().map(|&h| h.to_owned()).collect(),
            columns: Vec::new(),
        }
    }

    #[must_use]
    pub fn column(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.columns.push(values.into());
        self
    }

    /// Number of rows, taken from the longest column.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.columns.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns the cells of row `index`; short columns yield `None`.
    pub fn row(&self, index: usize) -> impl Iterator<Item = Option<f64>> + '_ {
        self.columns.iter().map(move |c| c.get(index).copied())
    }
}

/// A sink that displays figures.
pub trait Plotter {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Displays (or records) a figure.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the figure cannot be shown.
    fn plot(&mut self, figure: &Figure) -> Result<(), Self::Error>;
}

/// A sink that displays labeled values and tables.
pub trait Renderer {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Appends a `(label, value)` record.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the record cannot be written.
    fn value(&mut self, label: &str, value: &dyn Display) -> Result<(), Self::Error>;

    /// Appends a table.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the table cannot be written.
    fn table(&mut self, table: &Table) -> Result<(), Self::Error>;
}

/// Discards every figure.
impl Plotter for () {
    type Error = Infallible;

    fn plot(&mut self, _figure: &Figure) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Discards every record.
impl Renderer for () {
    type Error = Infallible;

    fn value(&mut self, _label: &str, _value: &dyn Display) -> Result<(), Infallible> {
        Ok(())
    }

    fn table(&mut self, _table: &Table) -> Result<(), Infallible> {
        Ok(())
    }
}

impl<P: Plotter + ?Sized> Plotter for &mut P {
    type Error = P::Error;

    fn plot(&mut self, figure: &Figure) -> Result<(), Self::Error> {
        (**self).plot(figure)
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    type Error = R::Error;

    fn value(&mut self, label: &str, value: &dyn Display) -> Result<(), Self::Error> {
        (**self).value(label, value)
    }

    fn table(&mut self, table: &Table) -> Result<(), Self::Error> {
        (**self).table(table)
    }
}
