//! Presentation template parts.
//!
//! The master, layout and property parts are the bare minimum a `.pptx`
//! needs to open. Every slide is drawn from explicit shapes on a single blank
//! layout, so the master carries no placeholders. The theme part is built from
//! the deck [`Theme`] so the file's colour scheme matches the slides.

use crate::common::xml::escape_xml;
use crate::error::Result;
use crate::model::DeckMeta;
use crate::theme::{Rgb, Theme};
use std::fmt::Write as FmtWrite;

const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const EMPTY_TREE: &str = concat!(
    "<p:spTree>",
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
    "</p:spTree>",
);

const CLR_MAP: &str = concat!(
    r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" "#,
    r#"accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" "#,
    r#"accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#,
);

fn open_root(xml: &mut String, tag: &str, extra: &str) -> Result<()> {
    xml.push_str(XML_DECL);
    write!(
        xml,
        r#"<{} xmlns:a="{}" xmlns:r="{}" xmlns:p="{}"{}>"#,
        tag, NS_A, NS_R, NS_P, extra
    )?;
    Ok(())
}

/// Slide master with one blank layout (`rId1`) and the theme (`rId2`).
pub fn slide_master_xml() -> Result<String> {
    let mut xml = String::with_capacity(1024);
    open_root(&mut xml, "p:sldMaster", "")?;
    xml.push_str("<p:cSld>");
    xml.push_str(r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    xml.push_str(EMPTY_TREE);
    xml.push_str("</p:cSld>");
    xml.push_str(CLR_MAP);
    xml.push_str(r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#);
    xml.push_str("<p:txStyles>");
    xml.push_str(r#"<p:titleStyle><a:lvl1pPr><a:defRPr sz="4400"/></a:lvl1pPr></p:titleStyle>"#);
    xml.push_str(r#"<p:bodyStyle><a:lvl1pPr><a:defRPr sz="2000"/></a:lvl1pPr></p:bodyStyle>"#);
    xml.push_str(r#"<p:otherStyle><a:lvl1pPr><a:defRPr sz="1800"/></a:lvl1pPr></p:otherStyle>"#);
    xml.push_str("</p:txStyles>");
    xml.push_str("</p:sldMaster>");
    Ok(xml)
}

/// The blank layout every slide uses.
pub fn slide_layout_xml() -> Result<String> {
    let mut xml = String::with_capacity(512);
    open_root(&mut xml, "p:sldLayout", r#" type="blank" preserve="1""#)?;
    xml.push_str(r#"<p:cSld name="Blank">"#);
    xml.push_str(EMPTY_TREE);
    xml.push_str("</p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sldLayout>");
    Ok(xml)
}

/// Notes master; its theme is related as `rId1`.
pub fn notes_master_xml() -> Result<String> {
    let mut xml = String::with_capacity(1024);
    open_root(&mut xml, "p:notesMaster", "")?;
    xml.push_str("<p:cSld>");
    xml.push_str(r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    xml.push_str(EMPTY_TREE);
    xml.push_str("</p:cSld>");
    xml.push_str(CLR_MAP);
    xml.push_str(r#"<p:notesStyle><a:lvl1pPr><a:defRPr sz="1200"/></a:lvl1pPr></p:notesStyle>"#);
    xml.push_str("</p:notesMaster>");
    Ok(xml)
}

/// Office theme part whose colour and font schemes follow `theme`.
pub fn theme_xml(theme: &Theme, name: &str) -> Result<String> {
    let palette = &theme.palette;
    let mut xml = String::with_capacity(3072);
    xml.push_str(XML_DECL);
    write!(xml, r#"<a:theme xmlns:a="{}" name="{}">"#, NS_A, escape_xml(name))?;
    xml.push_str("<a:themeElements>");

    write!(xml, r#"<a:clrScheme name="{}">"#, escape_xml(name))?;
    let scheme: [(&str, Rgb); 12] = [
        ("dk1", palette.dark_gray),
        ("lt1", palette.white),
        ("dk2", palette.navy),
        ("lt2", palette.light_gray),
        ("accent1", palette.teal),
        ("accent2", palette.accent),
        ("accent3", palette.green),
        ("accent4", palette.amber),
        ("accent5", palette.red),
        ("accent6", palette.navy),
        ("hlink", palette.accent),
        ("folHlink", palette.navy),
    ];
    for (slot, color) in scheme {
        write!(xml, r#"<a:{0}><a:srgbClr val="{1}"/></a:{0}>"#, slot, color.to_hex())?;
    }
    xml.push_str("</a:clrScheme>");

    let font = escape_xml(&theme.font_family);
    write!(xml, r#"<a:fontScheme name="{}">"#, escape_xml(name))?;
    for tag in ["a:majorFont", "a:minorFont"] {
        write!(
            xml,
            r#"<{0}><a:latin typeface="{1}"/><a:ea typeface=""/><a:cs typeface=""/></{0}>"#,
            tag, font
        )?;
    }
    xml.push_str("</a:fontScheme>");

    write!(xml, r#"<a:fmtScheme name="{}">"#, escape_xml(name))?;
    let ph_fill = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    xml.push_str("<a:fillStyleLst>");
    for _ in 0..3 {
        xml.push_str(ph_fill);
    }
    xml.push_str("</a:fillStyleLst>");
    xml.push_str("<a:lnStyleLst>");
    for w in [6350, 12700, 19050] {
        write!(xml, r#"<a:ln w="{}">{}</a:ln>"#, w, ph_fill)?;
    }
    xml.push_str("</a:lnStyleLst>");
    xml.push_str("<a:effectStyleLst>");
    for _ in 0..3 {
        xml.push_str("<a:effectStyle><a:effectLst/></a:effectStyle>");
    }
    xml.push_str("</a:effectStyleLst>");
    xml.push_str("<a:bgFillStyleLst>");
    for _ in 0..3 {
        xml.push_str(ph_fill);
    }
    xml.push_str("</a:bgFillStyleLst>");
    xml.push_str("</a:fmtScheme>");

    xml.push_str("</a:themeElements>");
    xml.push_str("<a:objectDefaults/><a:extraClrSchemeLst/>");
    xml.push_str("</a:theme>");
    Ok(xml)
}

pub fn pres_props_xml() -> Result<String> {
    let mut xml = String::with_capacity(256);
    open_root(&mut xml, "p:presentationPr", "")?;
    xml.push_str("</p:presentationPr>");
    Ok(xml)
}

pub fn view_props_xml() -> Result<String> {
    let mut xml = String::with_capacity(512);
    open_root(&mut xml, "p:viewPr", "")?;
    xml.push_str(r#"<p:normalViewPr><p:restoredLeft sz="15620"/><p:restoredTop sz="94660"/></p:normalViewPr>"#);
    xml.push_str(r#"<p:gridSpacing cx="76200" cy="76200"/>"#);
    xml.push_str("</p:viewPr>");
    Ok(xml)
}

pub fn table_styles_xml() -> String {
    format!(
        r#"{}<a:tblStyleLst xmlns:a="{}" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#,
        XML_DECL, NS_A
    )
}

/// Core properties. No timestamps, so identical decks produce identical bytes.
pub fn core_props_xml(meta: &DeckMeta, title: &str) -> Result<String> {
    let mut xml = String::with_capacity(768);
    xml.push_str(XML_DECL);
    xml.push_str(concat!(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
    ));
    write!(xml, "<dc:title>{}</dc:title>", escape_xml(title))?;
    if let Some(subject) = &meta.subject {
        write!(xml, "<dc:subject>{}</dc:subject>", escape_xml(subject))?;
    }
    if let Some(author) = &meta.author {
        write!(xml, "<dc:creator>{}</dc:creator>", escape_xml(author))?;
    }
    xml.push_str("<cp:revision>1</cp:revision>");
    xml.push_str("</cp:coreProperties>");
    Ok(xml)
}

pub fn app_props_xml(meta: &DeckMeta, slides: usize, notes: usize) -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECL);
    xml.push_str(concat!(
        r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
        r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
    ));
    write!(xml, "<Application>{}</Application>", env!("CARGO_PKG_NAME"))?;
    xml.push_str("<PresentationFormat>On-screen Show (16:9)</PresentationFormat>");
    write!(xml, "<Slides>{}</Slides><Notes>{}</Notes>", slides, notes)?;
    if let Some(company) = &meta.company {
        write!(xml, "<Company>{}</Company>", escape_xml(company))?;
    }
    xml.push_str("</Properties>");
    Ok(xml)
}
