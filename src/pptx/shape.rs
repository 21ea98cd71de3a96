/// Shape types and their DrawingML serialization.
use crate::common::unit::{inch_to_emu, pt_to_centipoints};
use crate::common::xml::escape_xml;
use crate::error::Result;
use crate::layout::{Fill, Line, Rect, Run, ShapeKind, TableGrid, TextBox};
use crate::model::TextAlign;
use crate::theme::Rgb;
use std::fmt::Write as FmtWrite;

/// Position and size in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Xfrm {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

impl From<Rect> for Xfrm {
    fn from(rect: Rect) -> Self {
        Self {
            x: inch_to_emu(rect.x),
            y: inch_to_emu(rect.y),
            cx: inch_to_emu(rect.w),
            cy: inch_to_emu(rect.h),
        }
    }
}

impl Xfrm {
    // Hot path: every shape writes one of these.
    fn write_inner(&self, xml: &mut String) -> Result<()> {
        let mut buffer = itoa::Buffer::new();
        xml.push_str(r#"<a:off x=""#);
        xml.push_str(buffer.format(self.x));
        xml.push_str(r#"" y=""#);
        xml.push_str(buffer.format(self.y));
        xml.push_str(r#""/><a:ext cx=""#);
        xml.push_str(buffer.format(self.cx));
        xml.push_str(r#"" cy=""#);
        xml.push_str(buffer.format(self.cy));
        xml.push_str(r#""/>"#);
        Ok(())
    }
}

/// A shape on a slide.
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    /// `cNvPr/@name`; block shapes are named `"{kind} {index}"`
    pub(crate) name: String,
    pub(crate) shape_type: ShapeType,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeType {
    TextBox {
        xfrm: Xfrm,
        runs: Vec<Run>,
        size_pt: f64,
        bold: bool,
        italic: bool,
        color: Rgb,
        align: TextAlign,
        font: String,
    },
    AutoShape {
        xfrm: Xfrm,
        geometry: ShapeKind,
        fill: Rgb,
    },
    Connector {
        xfrm: Xfrm,
        flip_h: bool,
        flip_v: bool,
        color: Rgb,
    },
    Table {
        xfrm: Xfrm,
        grid: TableGrid,
        font: String,
    },
}

impl MutableShape {
    pub(crate) fn new_text_box(shape_id: u32, name: String, text: &TextBox, font: &str) -> Self {
        Self {
            shape_id,
            name,
            shape_type: ShapeType::TextBox {
                xfrm: text.rect.into(),
                runs: text.runs.clone(),
                size_pt: text.style.size_pt,
                bold: text.style.bold,
                italic: text.style.italic,
                color: text.style.color,
                align: text.style.align,
                font: font.to_string(),
            },
        }
    }

    pub(crate) fn new_auto_shape(shape_id: u32, name: String, fill: &Fill) -> Self {
        Self {
            shape_id,
            name,
            shape_type: ShapeType::AutoShape {
                xfrm: fill.rect.into(),
                geometry: fill.shape,
                fill: fill.color,
            },
        }
    }

    pub(crate) fn new_connector(shape_id: u32, name: String, line: &Line) -> Self {
        let (rect, flip_h, flip_v) = line.bounds();
        Self {
            shape_id,
            name,
            shape_type: ShapeType::Connector {
                xfrm: rect.into(),
                flip_h,
                flip_v,
                color: line.color,
            },
        }
    }

    pub(crate) fn new_table(shape_id: u32, name: String, grid: &TableGrid, font: &str) -> Self {
        Self {
            shape_id,
            name,
            shape_type: ShapeType::Table {
                xfrm: grid.rect.into(),
                grid: grid.clone(),
                font: font.to_string(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Generate XML for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match &self.shape_type {
            ShapeType::TextBox {
                xfrm,
                runs,
                size_pt,
                bold,
                italic,
                color,
                align,
                font,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                self.write_c_nv_pr(xml)?;
                xml.push_str("<p:cNvSpPr txBox=\"1\"/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                xml.push_str("<a:xfrm>");
                xfrm.write_inner(xml)?;
                xml.push_str("</a:xfrm>");
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                xml.push_str("<p:txBody>");
                xml.push_str(
                    r#"<a:bodyPr wrap="square" lIns="0" tIns="0" rIns="0" bIns="0" anchor="ctr" rtlCol="0"/>"#,
                );
                xml.push_str("<a:lstStyle/>");
                xml.push_str("<a:p>");
                write!(xml, r#"<a:pPr algn="{}"/>"#, align_attr(*align))?;
                let props = RunProps {
                    size_pt: *size_pt,
                    bold: *bold,
                    italic: *italic,
                    font,
                };
                for run in runs {
                    let run_props = RunProps {
                        bold: props.bold || run.bold,
                        ..props
                    };
                    write_run(xml, &run.text, &run_props, run.color.unwrap_or(*color))?;
                }
                xml.push_str("</a:p>");
                xml.push_str("</p:txBody>");
                xml.push_str("</p:sp>");
            },
            ShapeType::AutoShape {
                xfrm,
                geometry,
                fill,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                self.write_c_nv_pr(xml)?;
                xml.push_str("<p:cNvSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                xml.push_str("<a:xfrm>");
                xfrm.write_inner(xml)?;
                xml.push_str("</a:xfrm>");
                write!(
                    xml,
                    r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
                    preset_geometry(*geometry)
                )?;
                write_solid_fill(xml, *fill)?;
                xml.push_str("<a:ln><a:noFill/></a:ln>");
                xml.push_str("</p:spPr>");
                xml.push_str("</p:sp>");
            },
            ShapeType::Connector {
                xfrm,
                flip_h,
                flip_v,
                color,
            } => {
                xml.push_str("<p:cxnSp>");
                xml.push_str("<p:nvCxnSpPr>");
                self.write_c_nv_pr(xml)?;
                xml.push_str("<p:cNvCxnSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvCxnSpPr>");

                xml.push_str("<p:spPr>");
                xml.push_str("<a:xfrm");
                if *flip_h {
                    xml.push_str(r#" flipH="1""#);
                }
                if *flip_v {
                    xml.push_str(r#" flipV="1""#);
                }
                xml.push('>');
                xfrm.write_inner(xml)?;
                xml.push_str("</a:xfrm>");
                xml.push_str(r#"<a:prstGeom prst="line"><a:avLst/></a:prstGeom>"#);
                xml.push_str(r#"<a:ln w="19050">"#);
                write_solid_fill(xml, *color)?;
                xml.push_str(r#"<a:tailEnd type="triangle"/>"#);
                xml.push_str("</a:ln>");
                xml.push_str("</p:spPr>");
                xml.push_str("</p:cxnSp>");
            },
            ShapeType::Table { xfrm, grid, font } => {
                self.write_table(xml, xfrm, grid, font)?;
            },
        }

        Ok(())
    }

    fn write_c_nv_pr(&self, xml: &mut String) -> Result<()> {
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}"/>"#,
            self.shape_id,
            escape_xml(&self.name)
        )?;
        Ok(())
    }

    fn write_table(&self, xml: &mut String, xfrm: &Xfrm, grid: &TableGrid, font: &str) -> Result<()> {
        xml.push_str("<p:graphicFrame>");
        xml.push_str("<p:nvGraphicFramePr>");
        self.write_c_nv_pr(xml)?;
        xml.push_str(r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr>"#);
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGraphicFramePr>");

        xml.push_str("<p:xfrm>");
        xfrm.write_inner(xml)?;
        xml.push_str("</p:xfrm>");

        xml.push_str("<a:graphic>");
        xml.push_str(r#"<a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table">"#);
        xml.push_str("<a:tbl>");
        xml.push_str(r#"<a:tblPr firstRow="1" bandRow="1"/>"#);

        // Spread rounding error into the last column so the grid matches the frame.
        let columns = grid.columns() as i64;
        let col_w = xfrm.cx / columns.max(1);
        xml.push_str("<a:tblGrid>");
        for col in 0..columns {
            let w = if col == columns - 1 {
                xfrm.cx - col_w * (columns - 1)
            } else {
                col_w
            };
            write!(xml, r#"<a:gridCol w="{}"/>"#, w)?;
        }
        xml.push_str("</a:tblGrid>");

        let row_h = inch_to_emu(grid.row_height);
        let header = RunProps {
            size_pt: grid.size_pt,
            bold: true,
            italic: false,
            font,
        };
        let body = RunProps {
            bold: false,
            ..header
        };

        write!(xml, r#"<a:tr h="{}">"#, row_h)?;
        for cell in &grid.headers {
            write_cell(xml, cell, &header, grid.header_ink, grid.header_fill)?;
        }
        xml.push_str("</a:tr>");

        for (i, row) in grid.rows.iter().enumerate() {
            let fill = grid.body_fills[i % 2];
            write!(xml, r#"<a:tr h="{}">"#, row_h)?;
            for cell in row {
                write_cell(xml, cell, &body, grid.body_ink, fill)?;
            }
            xml.push_str("</a:tr>");
        }

        xml.push_str("</a:tbl>");
        xml.push_str("</a:graphicData>");
        xml.push_str("</a:graphic>");
        xml.push_str("</p:graphicFrame>");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
struct RunProps<'a> {
    size_pt: f64,
    bold: bool,
    italic: bool,
    font: &'a str,
}

fn write_run(xml: &mut String, text: &str, props: &RunProps<'_>, color: Rgb) -> Result<()> {
    xml.push_str("<a:r>");
    write!(
        xml,
        r#"<a:rPr lang="en-US" sz="{}""#,
        pt_to_centipoints(props.size_pt)
    )?;
    if props.bold {
        xml.push_str(r#" b="1""#);
    }
    if props.italic {
        xml.push_str(r#" i="1""#);
    }
    xml.push_str(r#" dirty="0">"#);
    write_solid_fill(xml, color)?;
    write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(props.font))?;
    xml.push_str("</a:rPr>");
    write!(xml, "<a:t>{}</a:t>", escape_xml(text))?;
    xml.push_str("</a:r>");
    Ok(())
}

fn write_cell(xml: &mut String, text: &str, props: &RunProps<'_>, ink: Rgb, fill: Rgb) -> Result<()> {
    xml.push_str("<a:tc>");
    xml.push_str("<a:txBody>");
    xml.push_str("<a:bodyPr/>");
    xml.push_str("<a:lstStyle/>");
    xml.push_str("<a:p>");
    write_run(xml, text, props, ink)?;
    xml.push_str("</a:p>");
    xml.push_str("</a:txBody>");
    xml.push_str(r#"<a:tcPr anchor="ctr">"#);
    write_solid_fill(xml, fill)?;
    xml.push_str("</a:tcPr>");
    xml.push_str("</a:tc>");
    Ok(())
}

pub(crate) fn write_solid_fill(xml: &mut String, color: Rgb) -> Result<()> {
    write!(
        xml,
        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
        color.to_hex()
    )?;
    Ok(())
}

fn preset_geometry(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Rect => "rect",
        ShapeKind::RoundRect => "roundRect",
        ShapeKind::Ellipse => "ellipse",
    }
}

fn align_attr(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "l",
        TextAlign::Center => "ctr",
        TextAlign::Right => "r",
    }
}
