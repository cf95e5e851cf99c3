//! Layout strategies
//!
//! A layout answers two questions for a list of children: how big they want
//! to be under a size hint (0 meaning unconstrained), and where each child
//! goes once the container has an actual size. Invisible children take no
//! part in either.

use serde::{Deserialize, Serialize};

use crate::foundation::collections::ElementId;
use crate::foundation::math::{Dimension, Rect};
use crate::scene::LayerGraph;
use crate::ui::element::Elements;

/// Where a layout puts a child, in the container's coordinate space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Child being placed
    pub element: ElementId,
    /// Position and size within the container
    pub bounds: Rect,
}

/// Strategy for sizing and placing the children of a root or group
pub trait Layout {
    /// Preferred size of `children` under the given hints
    fn compute_size(
        &self,
        elements: &Elements,
        layers: &LayerGraph,
        children: &[ElementId],
        hint_width: f32,
        hint_height: f32,
    ) -> Dimension;

    /// Place `children` inside a container of the given size
    fn lay_out(
        &self,
        elements: &Elements,
        layers: &LayerGraph,
        children: &[ElementId],
        width: f32,
        height: f32,
    ) -> Vec<Placement>;
}

fn visible_children(elements: &Elements, layers: &LayerGraph, children: &[ElementId]) -> Vec<ElementId> {
    children
        .iter()
        .copied()
        .filter(|child| elements.get(*child).is_some_and(|element| layers.is_visible(element.layer())))
        .collect()
}

/// Stacking direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
}

/// Stacks children one after another along an axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLayout {
    axis: Axis,
    gap: f32,
    padding: f32,
    stretch: bool,
}

impl AxisLayout {
    /// Create a layout stacking along `axis` with no gap or padding
    pub fn new(axis: Axis) -> Self {
        Self { axis, gap: 0.0, padding: 0.0, stretch: false }
    }

    /// Top-to-bottom stacking
    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Left-to-right stacking
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Space between consecutive children
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Space between the container edges and the children
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Stretch children to fill the cross axis
    pub fn with_stretch(mut self, stretch: bool) -> Self {
        self.stretch = stretch;
        self
    }

    /// Stacking axis
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Split a width/height pair into (main, cross)
    fn split(&self, width: f32, height: f32) -> (f32, f32) {
        match self.axis {
            Axis::Horizontal => (width, height),
            Axis::Vertical => (height, width),
        }
    }

    /// Join (main, cross) back into a width/height pair
    fn join(&self, main: f32, cross: f32) -> (f32, f32) {
        match self.axis {
            Axis::Horizontal => (main, cross),
            Axis::Vertical => (cross, main),
        }
    }

    /// Child size hint: main axis unconstrained, cross axis minus padding
    fn child_hint(&self, cross: f32) -> (f32, f32) {
        let cross = if cross > 0.0 { (cross - 2.0 * self.padding).max(0.0) } else { 0.0 };
        self.join(0.0, cross)
    }
}

impl Layout for AxisLayout {
    fn compute_size(
        &self,
        elements: &Elements,
        layers: &LayerGraph,
        children: &[ElementId],
        hint_width: f32,
        hint_height: f32,
    ) -> Dimension {
        let (_, cross_hint) = self.split(hint_width, hint_height);
        let (child_width, child_height) = self.child_hint(cross_hint);

        let children = visible_children(elements, layers, children);
        let (mut main, mut cross) = (0.0_f32, 0.0_f32);
        for child in &children {
            let size = elements.preferred_size(*child, layers, child_width, child_height);
            let (child_main, child_cross) = self.split(size.width, size.height);
            main += child_main;
            cross = cross.max(child_cross);
        }
        if children.len() > 1 {
            main += self.gap * (children.len() - 1) as f32;
        }

        let (width, height) = self.join(main + 2.0 * self.padding, cross + 2.0 * self.padding);
        Dimension::new(width, height)
    }

    fn lay_out(
        &self,
        elements: &Elements,
        layers: &LayerGraph,
        children: &[ElementId],
        width: f32,
        height: f32,
    ) -> Vec<Placement> {
        let (_, cross_size) = self.split(width, height);
        let inner_cross = cross_size - 2.0 * self.padding;
        let (child_width, child_height) = self.child_hint(cross_size);

        let mut offset = self.padding;
        visible_children(elements, layers, children)
            .into_iter()
            .map(|child| {
                let size = elements.preferred_size(child, layers, child_width, child_height);
                let (child_main, preferred_cross) = self.split(size.width, size.height);
                let child_cross = if self.stretch { inner_cross } else { preferred_cross };

                let (x, y) = self.join(offset, self.padding);
                let (w, h) = self.join(child_main, child_cross);
                offset += child_main + self.gap;
                Placement { element: child, bounds: Rect::new(x, y, w, h) }
            })
            .collect()
    }
}

/// Leaves children wherever they were positioned, at their preferred size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbsoluteLayout;

impl Layout for AbsoluteLayout {
    fn compute_size(
        &self,
        elements: &Elements,
        layers: &LayerGraph,
        children: &[ElementId],
        _hint_width: f32,
        _hint_height: f32,
    ) -> Dimension {
        let extent = self
            .lay_out(elements, layers, children, 0.0, 0.0)
            .iter()
            .fold(Rect::default(), |extent, placement| extent.union(&placement.bounds));
        Dimension::new(extent.max_x(), extent.max_y())
    }

    fn lay_out(
        &self,
        elements: &Elements,
        layers: &LayerGraph,
        children: &[ElementId],
        _width: f32,
        _height: f32,
    ) -> Vec<Placement> {
        visible_children(elements, layers, children)
            .into_iter()
            .filter_map(|child| {
                let element = elements.get(child)?;
                let origin = layers.translation(element.layer())?;
                let size = elements.preferred_size(child, layers, 0.0, 0.0);
                Some(Placement { element: child, bounds: Rect::new(origin.x, origin.y, size.width, size.height) })
            })
            .collect()
    }
}
