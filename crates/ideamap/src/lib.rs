#![forbid(unsafe_code)]

//! `ideamap` is a headless mind-map generator.
//!
//! A single immutable [`MapRequest`] (central topic + subtopics + style)
//! flows through a pure pipeline: tree construction, layout, styled SVG.
//! Each render is independent; nothing persists between calls.
//!
//! # Features
//!
//! - `raster`: PNG / JPEG / PDF output via pure-Rust SVG rasterization
//!   (`ideamap::raster`)

pub use ideamap_core::{
    Edge, Error as BuildError, LayoutStyle, MapRequest, MindmapGraph, Node, NodeId, NodeKind,
    NodeShape, StyleConfig,
};
pub use ideamap_layout::{LayoutOptions, LayoutResult, Point, ShellPartition, layout};
pub use ideamap_render::{RenderError, render_svg};

#[cfg(feature = "raster")]
pub mod raster;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Build(#[from] ideamap_core::Error),
    #[error(transparent)]
    Render(#[from] ideamap_render::RenderError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Runs the whole pipeline for one request: build the tree, lay it out under
/// the request's layout style, render SVG.
pub fn render_mindmap_svg(request: &MapRequest, layout_options: &LayoutOptions) -> Result<String> {
    let graph = MindmapGraph::build(request)?;
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        layout = request.style.layout.name(),
        "mind-map graph built"
    );
    let positions = layout(&graph, request.style.layout, layout_options);
    Ok(render_svg(&graph, &positions, &request.style)?)
}

/// Convenience bundle holding layout options for repeated renders.
///
/// All work is CPU-bound and synchronous; one render runs to completion
/// before the next starts, and no state carries over between renders.
#[derive(Debug, Clone, Default)]
pub struct MindmapRenderer {
    pub layout: LayoutOptions,
}

impl MindmapRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout_options(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self
    }

    pub fn render_svg(&self, request: &MapRequest) -> Result<String> {
        render_mindmap_svg(request, &self.layout)
    }

    #[cfg(feature = "raster")]
    pub fn render_png(
        &self,
        request: &MapRequest,
        options: &raster::RasterOptions,
    ) -> raster::Result<Vec<u8>> {
        let svg = self.render_svg(request)?;
        raster::svg_to_png(&svg, options)
    }

    #[cfg(feature = "raster")]
    pub fn render_jpeg(
        &self,
        request: &MapRequest,
        options: &raster::RasterOptions,
    ) -> raster::Result<Vec<u8>> {
        let svg = self.render_svg(request)?;
        raster::svg_to_jpeg(&svg, options)
    }

    #[cfg(feature = "raster")]
    pub fn render_pdf(&self, request: &MapRequest) -> raster::Result<Vec<u8>> {
        let svg = self.render_svg(request)?;
        raster::svg_to_pdf(&svg)
    }
}
