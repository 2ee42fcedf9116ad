//! Figures module - The article figure set
//!
//! One module per figure; each embeds its data tables and draws onto a
//! backend-generic drawing area.

mod architecture_evolution;
mod architecture_radar;
mod component_metrics;
mod error_trend;
mod module_distribution;
mod pattern_usage;
mod performance_scalability;
mod solid_impact;
mod task_time_comparison;
mod test_coverage;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::FigureError;

/// Every figure in the article set, in publication order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Figure {
    ComponentMetrics,
    TaskTimeComparison,
    TestCoverage,
    ArchitectureEvolution,
    PatternUsage,
    SolidImpact,
    ErrorTrend,
    ArchitectureRadar,
    ModuleDistribution,
    PerformanceScalability,
}

impl Figure {
    pub const ALL: [Figure; 10] = [
        Figure::ComponentMetrics,
        Figure::TaskTimeComparison,
        Figure::TestCoverage,
        Figure::ArchitectureEvolution,
        Figure::PatternUsage,
        Figure::SolidImpact,
        Figure::ErrorTrend,
        Figure::ArchitectureRadar,
        Figure::ModuleDistribution,
        Figure::PerformanceScalability,
    ];

    /// Output file basename (no extension).
    pub fn name(self) -> &'static str {
        match self {
            Figure::ComponentMetrics => "component_metrics",
            Figure::TaskTimeComparison => "task_time_comparison",
            Figure::TestCoverage => "test_coverage",
            Figure::ArchitectureEvolution => "architecture_evolution",
            Figure::PatternUsage => "pattern_usage",
            Figure::SolidImpact => "solid_impact",
            Figure::ErrorTrend => "error_trend",
            Figure::ArchitectureRadar => "architecture_radar",
            Figure::ModuleDistribution => "module_distribution",
            Figure::PerformanceScalability => "performance_scalability",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Figure::ComponentMetrics => component_metrics::TITLE,
            Figure::TaskTimeComparison => task_time_comparison::TITLE,
            Figure::TestCoverage => test_coverage::TITLE,
            Figure::ArchitectureEvolution => architecture_evolution::TITLE,
            Figure::PatternUsage => pattern_usage::TITLE,
            Figure::SolidImpact => solid_impact::TITLE,
            Figure::ErrorTrend => error_trend::TITLE,
            Figure::ArchitectureRadar => architecture_radar::TITLE,
            Figure::ModuleDistribution => module_distribution::TITLE,
            Figure::PerformanceScalability => performance_scalability::TITLE,
        }
    }

    /// Canvas size in pixels.
    pub fn size(self) -> (u32, u32) {
        match self {
            Figure::ComponentMetrics => (1400, 1000),
            Figure::TaskTimeComparison => (1600, 1000),
            Figure::TestCoverage => (2000, 800),
            Figure::ArchitectureEvolution => (2000, 1000),
            Figure::PatternUsage => (1600, 1200),
            Figure::SolidImpact => (2400, 1000),
            Figure::ErrorTrend => (1800, 1000),
            Figure::ArchitectureRadar => (2000, 1200),
            Figure::ModuleDistribution => (2400, 1000),
            Figure::PerformanceScalability => (2400, 1000),
        }
    }

    /// Render this figure onto `root`.
    pub fn draw<DB: DrawingBackend>(
        self,
        root: &DrawingArea<DB, Shift>,
    ) -> Result<(), FigureError> {
        match self {
            Figure::ComponentMetrics => component_metrics::draw(root),
            Figure::TaskTimeComparison => task_time_comparison::draw(root),
            Figure::TestCoverage => test_coverage::draw(root),
            Figure::ArchitectureEvolution => architecture_evolution::draw(root),
            Figure::PatternUsage => pattern_usage::draw(root),
            Figure::SolidImpact => solid_impact::draw(root),
            Figure::ErrorTrend => error_trend::draw(root),
            Figure::ArchitectureRadar => architecture_radar::draw(root),
            Figure::ModuleDistribution => module_distribution::draw(root),
            Figure::PerformanceScalability => performance_scalability::draw(root),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn registry_names_are_unique() {
        let names: HashSet<&str> = Figure::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names.len(), Figure::ALL.len());
    }

    #[test]
    fn every_figure_has_a_title_and_canvas() {
        for fig in Figure::ALL {
            assert!(!fig.title().is_empty());
            let (w, h) = fig.size();
            assert!(w > 0 && h > 0);
        }
    }
}
