//! Flexbox container.

use forge_color::format_number;
use serde::{Deserialize, Serialize};

use crate::keyword::keyword_enum;
use crate::merge;
use crate::rule::RuleBlock;

pub const SELECTOR: &str = ".flexbox";

keyword_enum! {
    #[derive(Default)]
    pub enum FlexDirection("flex direction") {
        #[default]
        Row => "row",
        RowReverse => "row-reverse",
        Column => "column",
        ColumnReverse => "column-reverse",
    }
}

keyword_enum! {
    #[derive(Default)]
    pub enum JustifyContent("justify-content value") {
        #[default]
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
    }
}

keyword_enum! {
    #[derive(Default)]
    pub enum AlignItems("align-items value") {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        #[default]
        Stretch => "stretch",
        Baseline => "baseline",
    }
}

keyword_enum! {
    #[derive(Default)]
    pub enum FlexWrap("flex wrap") {
        #[default]
        NoWrap => "nowrap",
        Wrap => "wrap",
        WrapReverse => "wrap-reverse",
    }
}

keyword_enum! {
    #[derive(Default)]
    pub enum AlignContent("align-content value") {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        #[default]
        Stretch => "stretch",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexboxConfig {
    pub flex_direction: FlexDirection,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub flex_wrap: FlexWrap,
    pub align_content: AlignContent,
    /// px.
    pub gap: f64,
}

impl Default for FlexboxConfig {
    fn default() -> Self {
        Self {
            flex_direction: FlexDirection::default(),
            justify_content: JustifyContent::default(),
            align_items: AlignItems::default(),
            flex_wrap: FlexWrap::default(),
            align_content: AlignContent::default(),
            gap: 16.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexboxPatch {
    pub flex_direction: Option<FlexDirection>,
    pub justify_content: Option<JustifyContent>,
    pub align_items: Option<AlignItems>,
    pub flex_wrap: Option<FlexWrap>,
    pub align_content: Option<AlignContent>,
    pub gap: Option<f64>,
}

impl FlexboxConfig {
    pub fn apply(&mut self, patch: FlexboxPatch) {
        merge::plain(&mut self.flex_direction, patch.flex_direction);
        merge::plain(&mut self.justify_content, patch.justify_content);
        merge::plain(&mut self.align_items, patch.align_items);
        merge::plain(&mut self.flex_wrap, patch.flex_wrap);
        merge::plain(&mut self.align_content, patch.align_content);
        merge::non_negative(&mut self.gap, patch.gap);
    }
}

#[must_use]
pub fn flexbox_css(config: &FlexboxConfig) -> RuleBlock {
    RuleBlock::new(SELECTOR)
        .with("display", "flex")
        .with("flex-direction", config.flex_direction.keyword())
        .with("justify-content", config.justify_content.keyword())
        .with("align-items", config.align_items.keyword())
        .with("flex-wrap", config.flex_wrap.keyword())
        .with("align-content", config.align_content.keyword())
        .with("gap", format!("{}px", format_number(config.gap)))
}
