//! Cross-renderer checks: what the terminal viewer paints must match what a
//! reader finds in the exported deck, block for block.

use crate::layout::LayoutEngine;
use crate::model::*;
use crate::pptx::{read_outline, render};
use crate::theme::Theme;
use crate::viewer::paint::{PaintedBlock, SlideCanvas};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Blocks painted by the viewer for every slide, in deck order.
fn viewer_pass(deck: &Deck, theme: &Theme) -> Vec<(String, Vec<PaintedBlock>)> {
    let area = Rect::new(0, 0, 120, 34);
    LayoutEngine::new(theme)
        .layout_deck(deck)
        .iter()
        .map(|layout| {
            let mut buf = Buffer::empty(area);
            let painted = SlideCanvas::new(layout, theme).paint(area, &mut buf);
            (layout.title.text(), painted)
        })
        .collect()
}

fn assert_renderers_agree(deck: &Deck, theme: &Theme) {
    let viewed = viewer_pass(deck, theme);
    let outline = read_outline(&render(deck, theme).unwrap()).unwrap();
    assert_eq!(viewed.len(), outline.len());

    for ((slide, (title, painted)), page) in deck.slides().iter().zip(&viewed).zip(&outline) {
        assert_eq!(&page.title, title, "slide {}", slide.id);
        assert_eq!(&page.block_texts(), painted, "slide {}", slide.id);
        assert_eq!(page.notes.as_deref(), slide.notes(), "slide {}", slide.id);
    }
}

/// Screen rows of `buf` as plain text.
fn screen_rows(buf: &Buffer) -> Vec<String> {
    buf.content()
        .chunks(usize::from(buf.area.width))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

/// Every text the viewer reports as painted is actually on screen.
fn assert_texts_on_screen(deck: &Deck, theme: &Theme) {
    let area = Rect::new(0, 0, 120, 34);
    for layout in LayoutEngine::new(theme).layout_deck(deck) {
        let mut buf = Buffer::empty(area);
        let painted = SlideCanvas::new(&layout, theme).paint(area, &mut buf);
        let rows = screen_rows(&buf);

        let title = layout.title.text();
        let texts = painted.iter().flat_map(|(_, texts)| texts).chain([&title]);
        for text in texts.filter(|t| !t.is_empty()) {
            assert!(
                rows.iter().any(|row| row.contains(text.as_str())),
                "{text:?} not drawn on slide {title:?}"
            );
        }
    }
}

#[test]
fn test_sample_deck_renders_consistently() {
    let deck = Deck::from_yaml_str(include_str!("../decks/executive-summary.yaml")).unwrap();
    assert_eq!(deck.len(), 14);
    assert_renderers_agree(&deck, &Theme::default());
}

#[test]
fn test_two_slide_scenario_in_both_renderers() {
    let yaml = r#"
slides:
  - id: 1
    title: Mission Impact
    layout: title
    background: dark
    content:
      - type: stats-row
        stats:
          - { value: "80%", label: Faster ATO }
          - { value: "$4.2M", label: Annual Savings }
          - { value: "47", label: Programs Unified }
  - id: 2
    title: Today vs Tomorrow
    layout: table
    background: light
    content:
      - type: table
        headers: [Today, Tomorrow]
        rows:
          - [Point-in-time audits, Continuous monitoring]
          - [Manual evidence, Automated evidence]
"#;
    let deck = Deck::from_yaml_str(yaml).unwrap();
    let theme = Theme::default();
    assert_renderers_agree(&deck, &theme);
    assert_texts_on_screen(&deck, &theme);

    let outline = read_outline(&render(&deck, &theme).unwrap()).unwrap();
    assert_eq!(outline[0].blocks[0].kind, BlockKind::StatsRow);
    assert_eq!(
        outline[0].blocks[0].texts,
        ["80%", "Faster ATO", "$4.2M", "Annual Savings", "47", "Programs Unified"]
    );
    assert_eq!(outline[1].blocks[0].kind, BlockKind::Table);
    assert_eq!(outline[1].blocks[0].texts.len(), 6);
}

#[test]
fn test_block_scalar_notes_survive_export() {
    let yaml = r#"
slides:
  - id: 1
    title: Rollout
    layout: content
    notes: |
      Open with the savings figure.
      Pause for questions.
    content:
      - type: text
        text: Three phases
"#;
    let deck = Deck::from_yaml_str(yaml).unwrap();
    let theme = Theme::default();
    assert_renderers_agree(&deck, &theme);

    let outline = read_outline(&render(&deck, &theme).unwrap()).unwrap();
    assert_eq!(
        outline[0].notes.as_deref(),
        Some("Open with the savings figure.\nPause for questions.\n")
    );
}

#[test]
fn test_contrast_rule_on_every_background() {
    let theme = Theme::default();
    let engine = LayoutEngine::new(&theme);
    let text = ContentBlock::Text {
        text: "Signal".to_string(),
        bold: false,
        italic: false,
        size: TextSize::Md,
        align: TextAlign::Left,
    };
    for background in [
        None,
        Some(Background::Dark),
        Some(Background::Light),
        Some(Background::Gradient),
        Some(Background::Accent),
    ] {
        let mut slide = Slide::new(1, "Contrast", LayoutKind::Content).with_block(text.clone());
        slide.background = background;
        let layout = engine.layout_slide(&slide, 1);
        let light = needs_light_text(background);
        for primitive in &layout.blocks[0].primitives {
            if let crate::layout::Primitive::Text(t) = primitive {
                assert_eq!(t.style.color.is_light(), light, "{:?}", background);
            }
        }
    }
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Printable text that exercises XML escaping, without control chars
    fn text_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 &<>'\"%$.,:-]{0,16}"
    }

    fn words(max: usize) -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(text_strategy(), 0..max)
    }

    fn icon_strategy() -> impl Strategy<Value = Option<String>> {
        prop::option::of(prop_oneof![
            Just("speed".to_string()),
            Just("shield".to_string()),
            Just("robot".to_string()),
            Just("no-such-icon".to_string()),
        ])
    }

    fn accent_strategy() -> impl Strategy<Value = Accent> {
        prop_oneof![
            Just(Accent::Teal),
            Just(Accent::Red),
            Just(Accent::Amber),
            Just(Accent::Green),
        ]
    }

    fn panel_strategy() -> impl Strategy<Value = ComparisonPanel> {
        (
            text_strategy(),
            words(4),
            prop_oneof![Just(PanelColor::Red), Just(PanelColor::Green)],
        )
            .prop_map(|(title, items, color)| ComparisonPanel { title, items, color })
    }

    fn table_strategy() -> impl Strategy<Value = ContentBlock> {
        (1..4usize).prop_flat_map(|columns| {
            (
                prop::collection::vec(text_strategy(), columns),
                prop::collection::vec(prop::collection::vec(text_strategy(), columns), 0..3),
            )
                .prop_map(|(headers, rows)| ContentBlock::Table { headers, rows })
        })
    }

    fn block_strategy() -> impl Strategy<Value = ContentBlock> {
        prop_oneof![
            (
                text_strategy(),
                any::<bool>(),
                any::<bool>(),
                prop_oneof![
                    Just(TextSize::Sm),
                    Just(TextSize::Md),
                    Just(TextSize::Lg),
                    Just(TextSize::Xl),
                    Just(TextSize::Xxl),
                ],
                prop_oneof![
                    Just(TextAlign::Left),
                    Just(TextAlign::Center),
                    Just(TextAlign::Right),
                ],
            )
                .prop_map(|(text, bold, italic, size, align)| ContentBlock::Text {
                    text,
                    bold,
                    italic,
                    size,
                    align,
                }),
            (words(4), icon_strategy()).prop_map(|(items, icon)| ContentBlock::Bullet { items, icon }),
            words(4).prop_map(|items| ContentBlock::Numbered { items }),
            table_strategy(),
            (text_strategy(), accent_strategy())
                .prop_map(|(text, color)| ContentBlock::Highlight { text, color }),
            prop_oneof![
                Just(SpacerSize::Sm),
                Just(SpacerSize::Md),
                Just(SpacerSize::Lg),
            ]
            .prop_map(|size| ContentBlock::Spacer { size }),
            (
                text_strategy(),
                text_strategy(),
                prop::option::of(prop_oneof![
                    Just(Trend::Up),
                    Just(Trend::Down),
                    Just(Trend::Neutral),
                ]),
            )
                .prop_map(|(value, label, trend)| ContentBlock::Stat { value, label, trend }),
            prop::collection::vec(
                (text_strategy(), text_strategy(), icon_strategy())
                    .prop_map(|(value, label, icon)| StatItem { value, label, icon }),
                0..4,
            )
            .prop_map(|stats| ContentBlock::StatsRow { stats }),
            (
                "[a-z]{1,8}",
                text_strategy(),
                text_strategy(),
                prop::option::of(accent_strategy()),
            )
                .prop_map(|(icon, title, description, color)| ContentBlock::IconBox {
                    icon,
                    title,
                    description,
                    color,
                }),
            (panel_strategy(), panel_strategy())
                .prop_map(|(left, right)| ContentBlock::Comparison { left, right }),
            (
                prop_oneof![
                    Just(DiagramVariant::Flow),
                    Just(DiagramVariant::Stack),
                    Just(DiagramVariant::Timeline),
                    Just(DiagramVariant::Hub),
                ],
                words(6),
            )
                .prop_map(|(variant, data)| ContentBlock::Diagram { variant, data }),
            (text_strategy(), prop::option::of(text_strategy()))
                .prop_map(|(text, author)| ContentBlock::Quote { text, author }),
            (text_strategy(), prop::option::of(text_strategy()))
                .prop_map(|(text, subtext)| ContentBlock::Cta { text, subtext }),
        ]
    }

    fn slide_strategy() -> impl Strategy<Value = Slide> {
        (
            "[A-Za-z][A-Za-z0-9 &]{0,12}",
            prop::option::of(text_strategy()),
            prop_oneof![
                Just(LayoutKind::Title),
                Just(LayoutKind::Content),
                Just(LayoutKind::Table),
                Just(LayoutKind::BigStatement),
                Just(LayoutKind::Conclusion),
                Just(LayoutKind::IconGrid),
            ],
            prop::option::of(prop_oneof![
                Just(Background::Dark),
                Just(Background::Light),
                Just(Background::Gradient),
                Just(Background::Accent),
            ]),
            prop::collection::vec(block_strategy(), 0..5),
            prop::option::of(text_strategy()),
        )
            .prop_map(|(title, subtitle, layout, background, content, notes)| {
                let mut slide = Slide::new(1, title, layout);
                slide.subtitle = subtitle;
                slide.background = background;
                slide.content = content;
                slide.notes = notes;
                slide
            })
    }

    fn deck_strategy() -> impl Strategy<Value = Deck> {
        prop::collection::vec(slide_strategy(), 1..4).prop_map(|mut slides| {
            for (i, slide) in slides.iter_mut().enumerate() {
                slide.id = i as u32 + 1;
            }
            // Titles are generated non-blank and rows match headers.
            Deck::new(slides).expect("generated decks are well-formed")
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_block_order_and_text_match(deck in deck_strategy()) {
            let theme = Theme::default();
            let viewed = viewer_pass(&deck, &theme);
            let outline = read_outline(&render(&deck, &theme).unwrap()).unwrap();

            prop_assert_eq!(viewed.len(), outline.len());
            for ((title, painted), page) in viewed.iter().zip(&outline) {
                prop_assert_eq!(&page.title, title);
                prop_assert_eq!(&page.block_texts(), painted);
            }
        }
    }
}
