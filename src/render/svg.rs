//! SVG generation
//!
//! A reference rendering surface: it paints a [`MapLayout`] using only the
//! normalized layout output, resolving percentages against a pixel box of
//! the table's aspect ratio.

use svg::Document;
use svg::node::element::{
    Circle as SvgCircle, ClipPath, Definitions, Group, Line, Rectangle, Text,
};

use crate::errors::MapError;
use crate::log::debug;
use crate::types::{Inches, Percent, PtPct};

use super::defaults;
use super::layout::{MapLayout, ObjectLayout, ZoneLayout};
use super::legend::{LegendEntry, Swatch};
use super::palette::{self, Fill};
use super::ruler::{LabelSide, RulerLayout, RulerOrientation};
use super::shapes::{LabelPlacement, ZoneGeometry};

const TABLE_CLIP_ID: &str = "table-clip";

/// Surface configuration
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub pixels_per_inch: f64,
    /// Space around the table for edge rulers
    pub margin: Inches,
    pub show_legend: bool,
    /// Game size and table dimensions above the map
    pub show_header: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            pixels_per_inch: defaults::PIXELS_PER_INCH,
            margin: defaults::MARGIN,
            show_legend: true,
            show_header: true,
        }
    }
}

impl RenderOptions {
    pub fn with_pixels_per_inch(mut self, ppi: f64) -> Self {
        self.pixels_per_inch = ppi;
        self
    }

    pub fn with_margin(mut self, margin: Inches) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    pub fn with_header(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }
}

/// Pixel frame of the table on the surface
#[derive(Clone, Copy, Debug)]
struct Frame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Frame {
    fn x(&self, pct: Percent) -> f64 {
        self.left + pct.of(self.width)
    }

    fn y(&self, pct: Percent) -> f64 {
        self.top + pct.of(self.height)
    }

    fn point(&self, p: PtPct) -> (f64, f64) {
        (self.x(p.x), self.y(p.y))
    }

    fn longest(&self) -> f64 {
        self.width.max(self.height)
    }
}

/// Render a laid-out map to an SVG document string
pub fn generate_svg(layout: &MapLayout, options: &RenderOptions) -> Result<String, MapError> {
    let ppi = options.pixels_per_inch;
    if !(ppi.is_finite() && ppi > 0.0) {
        return Err(MapError::InvalidScale { value: ppi });
    }

    let margin = options.margin.0.max(0.0) * ppi;
    let header = if options.show_header {
        defaults::HEADER_HEIGHT_PX
    } else {
        0.0
    };
    // Top ruler labels sit above the ruler line
    let headroom = if layout.has_top_rulers {
        defaults::FONT_SIZE_PX
    } else {
        0.0
    };

    let width = layout.dimensions.width.0 * ppi;
    let left = margin.max(left_label_room(&layout.rulers, width));
    let frame = Frame {
        left,
        top: header + headroom + margin,
        width,
        height: layout.dimensions.height.0 * ppi,
    };
    let doc_width = left + frame.width + margin;

    let legend_rows = if options.show_legend {
        legend_layout(&layout.legend, doc_width)
    } else {
        Vec::new()
    };
    let legend_height = legend_rows
        .last()
        .map(|(row, _, _)| (row + 1) as f64 * defaults::LEGEND_ROW_PX)
        .unwrap_or(0.0);
    let legend_top = frame.top + frame.height + margin;
    let doc_height = legend_top + legend_height;

    debug!(
        width = doc_width,
        height = doc_height,
        zones = layout.zones.len(),
        "generating svg"
    );

    let mut doc = Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("viewBox", (0.0, 0.0, doc_width, doc_height))
        .set("width", doc_width)
        .set("height", doc_height)
        .set("font-family", "sans-serif")
        .set("font-size", defaults::FONT_SIZE_PX);

    doc = doc.add(
        Definitions::new().add(
            ClipPath::new()
                .set("id", TABLE_CLIP_ID)
                .add(frame_rect(&frame)),
        ),
    );

    if options.show_header {
        doc = doc
            .add(
                text(layout.game_size.label(), margin, defaults::FONT_SIZE_PX * 1.25)
                    .set("font-weight", "600")
                    .set("data-type", "header"),
            )
            .add(
                text(
                    layout.dimensions_label(),
                    margin,
                    defaults::FONT_SIZE_PX * 2.5,
                )
                .set("font-weight", "200")
                .set("data-type", "header"),
            );
    }

    doc = doc.add(
        frame_rect(&frame)
            .set("fill", palette::TABLE.to_rgb_string())
            .set("stroke", palette::INK.to_rgb_string())
            .set("stroke-width", defaults::BORDER_PX),
    );

    let mut zones = Group::new().set("clip-path", format!("url(#{})", TABLE_CLIP_ID));
    for zone in &layout.zones {
        zones = zones.add(render_zone(zone, &frame));
    }
    doc = doc.add(zones);

    let mut objects = Group::new().set("clip-path", format!("url(#{})", TABLE_CLIP_ID));
    for object in &layout.objects {
        objects = objects.add(render_object(object, &frame));
    }
    doc = doc.add(objects);

    for ruler in &layout.rulers {
        doc = doc.add(render_ruler(ruler, &frame));
    }

    for (row, x, entry) in legend_rows {
        let y = legend_top + row as f64 * defaults::LEGEND_ROW_PX;
        doc = doc.add(render_legend_entry(entry, x, y));
    }

    Ok(doc.to_string())
}

fn frame_rect(frame: &Frame) -> Rectangle {
    Rectangle::new()
        .set("x", frame.left)
        .set("y", frame.top)
        .set("width", frame.width)
        .set("height", frame.height)
}

fn text(content: impl Into<String>, x: f64, y: f64) -> Text {
    Text::new(content).set("x", x).set("y", y)
}

fn apply_fill<T>(node: T, fill: Fill) -> T
where
    T: svg::Node,
{
    let mut node = node;
    node.assign("fill", fill.to_rgb_string());
    if fill.opacity < 1.0 {
        node.assign("fill-opacity", fill.opacity);
    }
    node
}

fn render_zone(zone: &ZoneLayout, frame: &Frame) -> Group {
    let fill = palette::resolve_color(&zone.color);
    let mut group = Group::new()
        .set("data-type", "zone")
        .set("data-shape", zone.shape.as_str());

    // Anchor and diameter used to place the label
    let (cx, cy, span) = match &zone.geometry {
        ZoneGeometry::Rect { center, extent } => {
            let (cx, cy) = frame.point(*center);
            let (w, h) = (extent.w.of(frame.width), extent.h.of(frame.height));
            group = group.add(apply_fill(
                Rectangle::new()
                    .set("x", cx - w / 2.0)
                    .set("y", cy - h / 2.0)
                    .set("width", w)
                    .set("height", h),
                fill,
            ));
            if zone.room_doors {
                group = add_doors(group, cx, cy, w, h);
            }
            (cx, cy, w)
        }
        ZoneGeometry::Circle { center, extent } => {
            let (cx, cy) = frame.point(*center);
            let d = extent.w.of(frame.width);
            group = group.add(apply_fill(
                SvgCircle::new()
                    .set("cx", cx)
                    .set("cy", cy)
                    .set("r", d / 2.0),
                fill,
            ));
            (cx, cy, d)
        }
        ZoneGeometry::Band { top, height } => {
            let y = frame.y(*top);
            let h = height.of(frame.height);
            group = group.add(apply_fill(
                Rectangle::new()
                    .set("x", frame.left)
                    .set("y", y)
                    .set("width", frame.width)
                    .set("height", h),
                fill,
            ));
            (frame.left + frame.width / 2.0, y + h / 2.0, frame.width)
        }
        ZoneGeometry::HorizontalLine { y } => {
            let y = frame.y(*y);
            group = group.add(hairline(fill, (frame.left, y), (frame.left + frame.width, y)));
            (frame.left + frame.width / 2.0, y, 0.0)
        }
        ZoneGeometry::VerticalLine { x } => {
            let x = frame.x(*x);
            group = group.add(hairline(fill, (x, frame.top), (x, frame.top + frame.height)));
            (x, frame.top + frame.height / 2.0, 0.0)
        }
        ZoneGeometry::Diagonal {
            center,
            length,
            angle,
        } => {
            let (cx, cy) = frame.point(*center);
            let half = length.of(frame.longest()) / 2.0;
            group = group.add(
                hairline(fill, (cx, cy - half), (cx, cy + half))
                    .set("transform", format!("rotate({} {} {})", angle.0, cx, cy)),
            );
            (cx, cy, 0.0)
        }
    };

    if let Some(label) = &zone.label {
        let node = match label.placement {
            LabelPlacement::Centered => text(label.text.as_str(), cx, cy)
                .set("text-anchor", "middle")
                .set("dominant-baseline", "middle"),
            LabelPlacement::Quadrant { east, south } => {
                let reach = span * (defaults::CIRCLE_LABEL_OFFSET - 0.5);
                let (x, anchor) = if east {
                    (cx + reach, "start")
                } else {
                    (cx - reach, "end")
                };
                let (y, baseline) = if south {
                    (cy + reach, "hanging")
                } else {
                    (cy - reach, "auto")
                };
                text(label.text.as_str(), x, y)
                    .set("text-anchor", anchor)
                    .set("dominant-baseline", baseline)
            }
        };
        group = group.add(node);
    }

    group
}

fn hairline(fill: Fill, from: (f64, f64), to: (f64, f64)) -> Line {
    Line::new()
        .set("x1", from.0)
        .set("y1", from.1)
        .set("x2", to.0)
        .set("y2", to.1)
        .set("stroke", fill.to_rgb_string())
        .set("stroke-width", defaults::HAIRLINE_PX)
}

/// Door markers centered on each side of an objective room
fn add_doors(group: Group, cx: f64, cy: f64, w: f64, h: f64) -> Group {
    let (len, depth) = (defaults::DOOR_LENGTH_PX, defaults::DOOR_DEPTH_PX);
    let doors = [
        (cx - w / 2.0 - depth, cy - len / 2.0, depth, len),
        (cx + w / 2.0, cy - len / 2.0, depth, len),
        (cx - len / 2.0, cy - h / 2.0 - depth, len, depth),
        (cx - len / 2.0, cy + h / 2.0, len, depth),
    ];
    doors.into_iter().fold(group, |group, (x, y, dw, dh)| {
        group.add(apply_fill(
            Rectangle::new()
                .set("x", x)
                .set("y", y)
                .set("width", dw)
                .set("height", dh)
                .set("data-type", "door"),
            palette::DOOR,
        ))
    })
}

fn render_object(object: &ObjectLayout, frame: &Frame) -> SvgCircle {
    let (cx, cy) = frame.point(object.center);
    apply_fill(
        SvgCircle::new()
            .set("cx", cx)
            .set("cy", cy)
            .set("r", object.extent.w.of(frame.width) / 2.0)
            .set("data-type", "object")
            .set("data-name", object.name.as_str()),
        palette::resolve_color(&object.color),
    )
}

/// Space needed left of the table so left-side ruler labels stay on the surface
fn left_label_room(rulers: &[RulerLayout], table_width: f64) -> f64 {
    rulers
        .iter()
        .filter(|r| r.orientation == RulerOrientation::Vertical && r.label_side == LabelSide::Left)
        .map(|r| {
            let label = r.label.chars().count() as f64 * defaults::CHARWID_PX;
            label + defaults::FONT_SIZE_PX / 2.0 - r.anchor.x.of(table_width)
        })
        .fold(0.0, f64::max)
}

fn render_ruler(ruler: &RulerLayout, frame: &Frame) -> Group {
    let (x, y) = frame.point(ruler.anchor);
    let stroke = defaults::RULER_STROKE_PX;
    let gap = defaults::FONT_SIZE_PX / 2.0;
    let group = Group::new().set("data-type", "ruler");

    match ruler.orientation {
        RulerOrientation::Vertical => {
            let len = ruler.length.of(frame.height);
            let (tx, anchor) = match ruler.label_side {
                LabelSide::Right => (x + stroke + gap, "start"),
                _ => (x - gap, "end"),
            };
            group
                .add(apply_fill(
                    Rectangle::new()
                        .set("x", x)
                        .set("y", y)
                        .set("width", stroke)
                        .set("height", len),
                    palette::INK,
                ))
                .add(
                    text(ruler.label.as_str(), tx, y + len / 2.0)
                        .set("text-anchor", anchor)
                        .set("dominant-baseline", "middle"),
                )
        }
        RulerOrientation::Horizontal => {
            let len = ruler.length.of(frame.width);
            let (ty, baseline) = match ruler.label_side {
                LabelSide::Below => (y + stroke + gap / 2.0, "hanging"),
                _ => (y - gap / 2.0, "auto"),
            };
            group
                .add(apply_fill(
                    Rectangle::new()
                        .set("x", x)
                        .set("y", y)
                        .set("width", len)
                        .set("height", stroke),
                    palette::INK,
                ))
                .add(
                    text(ruler.label.as_str(), x + len / 2.0, ty)
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", baseline),
                )
        }
        RulerOrientation::Rotated(angle) => {
            let len = ruler.length.of(frame.longest());
            let (tx, ty) = (x + stroke + gap, y + len / 2.0);
            group
                .set(
                    "transform",
                    format!(
                        "rotate({} {} {}) translate({} 0)",
                        angle.0,
                        x,
                        y,
                        defaults::RULER_NUDGE_PX
                    ),
                )
                .add(apply_fill(
                    Rectangle::new()
                        .set("x", x)
                        .set("y", y)
                        .set("width", stroke)
                        .set("height", len),
                    palette::INK,
                ))
                .add(
                    text(ruler.label.as_str(), tx, ty)
                        .set("dominant-baseline", "middle")
                        .set(
                            "transform",
                            format!("rotate({} {} {})", ruler.label_angle().0, tx, ty),
                        ),
                )
        }
    }
}

/// Flow legend entries into rows: (row, x, entry)
fn legend_layout(entries: &[LegendEntry], width: f64) -> Vec<(usize, f64, &LegendEntry)> {
    let gap = defaults::LEGEND_ROW_PX;
    let mut row = 0;
    let mut x = gap / 2.0;
    let mut placed = Vec::with_capacity(entries.len());
    for entry in entries {
        let entry_width = defaults::LEGEND_SWATCH_PX
            + 6.0
            + entry.name.chars().count() as f64 * defaults::CHARWID_PX;
        if x > gap / 2.0 && x + entry_width > width {
            row += 1;
            x = gap / 2.0;
        }
        placed.push((row, x, entry));
        x += entry_width + gap;
    }
    placed
}

fn render_legend_entry(entry: &LegendEntry, x: f64, y: f64) -> Group {
    let size = defaults::LEGEND_SWATCH_PX;
    let fill = palette::resolve_color(&entry.color);
    let middle = y + defaults::LEGEND_ROW_PX / 2.0;
    let group = Group::new().set("data-type", "legend");
    let group = match entry.swatch {
        Swatch::Square => group.add(apply_fill(
            Rectangle::new()
                .set("x", x)
                .set("y", middle - size / 2.0)
                .set("width", size)
                .set("height", size),
            fill,
        )),
        Swatch::Round => group.add(apply_fill(
            SvgCircle::new()
                .set("cx", x + size / 2.0)
                .set("cy", middle)
                .set("r", size / 2.0),
            fill,
        )),
    };
    group.add(
        text(entry.name.as_str(), x + size + 6.0, middle).set("dominant-baseline", "middle"),
    )
}
