//! Slide background (`p:bg`) serialization.

use crate::error::Result;
use crate::layout::BackgroundFill;
use std::fmt::Write as FmtWrite;

/// Gradient direction in degrees; 90 runs top to bottom.
const GRADIENT_ANGLE: f64 = 90.0;

/// Write the `p:bg` element for a slide. Must precede `p:spTree`.
pub(crate) fn write_background(xml: &mut String, fill: &BackgroundFill) -> Result<()> {
    xml.push_str("<p:bg>");
    xml.push_str("<p:bgPr>");
    match fill {
        BackgroundFill::Solid(color) => {
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex()
            )?;
        },
        BackgroundFill::Gradient(start, end) => {
            xml.push_str(r#"<a:gradFill rotWithShape="1">"#);
            xml.push_str("<a:gsLst>");
            for (pos, color) in [(0, start), (100_000, end)] {
                write!(
                    xml,
                    r#"<a:gs pos="{}"><a:srgbClr val="{}"/></a:gs>"#,
                    pos,
                    color.to_hex()
                )?;
            }
            xml.push_str("</a:gsLst>");
            write!(
                xml,
                r#"<a:lin ang="{}" scaled="0"/>"#,
                (GRADIENT_ANGLE * 60_000.0) as i32
            )?;
            xml.push_str("</a:gradFill>");
        },
    }
    xml.push_str("<a:effectLst/>");
    xml.push_str("</p:bgPr>");
    xml.push_str("</p:bg>");
    Ok(())
}
