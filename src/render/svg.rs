//! SVG snapshot of the marker scene and popup.

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result};

use super::{
    color::NEUTRAL,
    renderer::MapRenderer,
    scene::draw_order,
    viewport::Viewport,
};

pub(crate) struct SvgWriter {
    writer: BufWriter<File>
}

/// String-based SVG writer
pub(crate) struct SvgStringWriter {
    buffer: Vec<u8>
}

/// Implement std::io::Write so `write!` / `writeln!` work.
impl Write for SvgWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.writer.write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.writer.flush() }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> { self.writer.write_all(buf) }
}

impl Write for SvgStringWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}

impl SvgStringWriter {
    pub(crate) fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub(crate) fn into_string(self) -> Result<String> {
        String::from_utf8(self.buffer)
            .context("[render::svg] SVG output is not valid UTF-8")
    }
}

impl SvgWriter {
    pub(crate) fn new(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("[render::svg] Failed to create {}", path.display()))?;

        Ok(Self { writer: BufWriter::new(file) })
    }
}

impl MapRenderer {
    /// Render the current frame (markers + popup) to an SVG string.
    pub fn to_svg_string(&self) -> Result<String> {
        let mut writer = SvgStringWriter::new();
        write_svg(&mut writer, self)?;
        writer.into_string()
    }

    /// Render the current frame (markers + popup) to an SVG file.
    pub fn to_svg(&self, path: &Path) -> Result<()> {
        let mut writer = SvgWriter::new(path)?;
        write_svg(&mut writer, self)?;
        writer.flush()
            .with_context(|| format!("[render::svg] Failed to write {}", path.display()))?;
        Ok(())
    }
}

fn write_svg<W: Write>(writer: &mut W, renderer: &MapRenderer) -> Result<()> {
    let viewport = renderer.viewport();
    write_svg_header(writer, viewport)?;
    write_svg_styles(writer)?;

    let frame = renderer.frame();
    writeln!(writer, r#"<g class="markers">"#)?;
    for marker in draw_order(&frame) {
        let style = marker.style();
        let p = viewport.project(marker.position);
        writeln!(writer,
            r#"<g class="marker {state:?}" data-id="{id}" style="z-index:{z}"><circle cx="{x:.3}" cy="{y:.3}" r="{r:.3}" style="fill:{fill};stroke-width:{border}"/><text x="{x:.3}" y="{y:.3}" style="font-size:{font}px">{label}</text></g>"#,
            state = marker.state,
            id = escape(marker.id.as_str()),
            z = style.z_index,
            x = p.x,
            y = p.y,
            r = style.diameter() / 2.0,
            fill = marker.color,
            border = style.border_px,
            font = style.font_px,
            label = escape(&marker.label),
        )?;
    }
    writeln!(writer, "</g>")?;

    if let (Some(placement), Some(content)) = (renderer.popup(), renderer.popup_content()) {
        let (x, y) = (placement.position.x, placement.position.y);
        writeln!(writer,
            r#"<g class="popup" data-id="{id}" transform="translate({x:.3},{y:.3})"><rect x="-150" y="-114" width="300" height="114" rx="20"/><text class="badge" x="-134" y="-92">{badge}</text><text class="title" x="-134" y="-72">{name}</text><text x="-134" y="-54">{state}</text><text x="-134" y="-34">SATURATION {saturation} · UPDATE INDEX {update}</text><text x="-134" y="-14">DEVIATION {deviation} · EQUITY GAP {equity_gap}</text></g>"#,
            id = escape(content.district.as_str()),
            badge = escape(&content.badge),
            name = escape(&content.name),
            state = escape(&content.state),
            saturation = escape(&content.saturation),
            update = escape(&content.update_index),
            deviation = escape(&content.deviation),
            equity_gap = escape(&content.equity_gap),
        )?;
    }

    write_svg_footer(writer)
}

fn write_svg_header<W: Write>(writer: &mut W, viewport: &Viewport) -> Result<()> {
    let bounds = viewport.bounds();
    let camera = viewport.camera();
    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    writeln!(writer, r##"<svg xmlns="http://www.w3.org/2000/svg"
        width="{width}" height="{height}"
        viewBox="0 0 {width} {height}"
        data-lon-min="{lon_min}" data-lon-max="{lon_max}"
        data-lat-min="{lat_min}" data-lat-max="{lat_max}"
        data-zoom="{zoom}">"##,
        width = viewport.width(),
        height = viewport.height(),
        lon_min = bounds.min().x,
        lon_max = bounds.max().x,
        lat_min = bounds.min().y,
        lat_max = bounds.max().y,
        zoom = camera.zoom,
    )?;
    writeln!(writer, r##"<rect width="100%" height="100%" fill="#f8fafc"/>"##)?;
    Ok(())
}

fn write_svg_styles<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, r##"<defs>
<style>
    .marker circle {{ stroke: #ffffff; }}
    .marker text {{ fill: #ffffff; font-weight: 700; text-anchor: middle; dominant-baseline: central; }}
    .popup rect {{ fill: #ffffff; fill-opacity: 0.9; stroke: {neutral}; stroke-opacity: 0.3; }}
    .popup text {{ fill: #0f172a; font-size: 11px; }}
    .popup .title {{ font-size: 16px; font-weight: 700; }}
    .popup .badge {{ font-size: 10px; font-weight: 700; text-transform: uppercase; }}
</style>
</defs>"##, neutral = NEUTRAL)?;
    Ok(())
}

fn write_svg_footer<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "</svg>")?;
    Ok(())
}

/// Escape text for use in SVG content and attributes.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
