//! Charts module - Chart sinks and the adapter feeding them

mod plotter;
mod renderer;
mod sink;

pub use plotter::LineChart;
pub use renderer::RendererAdapter;
pub use sink::{ChartSink, RedrawMode, SeriesWindow};
