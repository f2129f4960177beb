use std::fmt;
use std::str::FromStr;

use crate::class::merge_classes;
use crate::error::UiError;
use crate::markup::{Element, Node};

const BASE_CLASS: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap \
    rounded-md text-sm font-medium ring-offset-background transition-colors \
    focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring \
    focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "default",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Link => "link",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
            ButtonVariant::Destructive => {
                "bg-destructive text-destructive-foreground hover:bg-destructive/90"
            }
            ButtonVariant::Outline => {
                "border border-input bg-background hover:bg-accent hover:text-accent-foreground"
            }
            ButtonVariant::Secondary => {
                "bg-secondary text-secondary-foreground hover:bg-secondary/80"
            }
            ButtonVariant::Ghost => "hover:bg-accent hover:text-accent-foreground",
            ButtonVariant::Link => "text-primary underline-offset-4 hover:underline",
        }
    }

    /// Whether the variant paints a solid background
    pub fn is_filled(&self) -> bool {
        matches!(
            self,
            ButtonVariant::Default | ButtonVariant::Destructive | ButtonVariant::Secondary
        )
    }

    pub fn all() -> &'static [ButtonVariant] {
        &[
            ButtonVariant::Default,
            ButtonVariant::Destructive,
            ButtonVariant::Outline,
            ButtonVariant::Secondary,
            ButtonVariant::Ghost,
            ButtonVariant::Link,
        ]
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonVariant {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UiError::UnknownVariant(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl ButtonSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonSize::Default => "default",
            ButtonSize::Sm => "sm",
            ButtonSize::Lg => "lg",
            ButtonSize::Icon => "icon",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Default => "h-10 px-4 py-2",
            ButtonSize::Sm => "h-9 rounded-md px-3",
            ButtonSize::Lg => "h-11 rounded-md px-8",
            ButtonSize::Icon => "h-10 w-10",
        }
    }

    pub fn all() -> &'static [ButtonSize] {
        &[ButtonSize::Default, ButtonSize::Sm, ButtonSize::Lg, ButtonSize::Icon]
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonSize {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UiError::UnknownSize(s.to_string()))
    }
}

/// Full class string for a button: base, then variant, then size, then caller overrides
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    merge_classes(&[BASE_CLASS, variant.class(), size.class(), extra])
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonProps {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub class: String,
}

impl ButtonProps {
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

pub fn button(props: &ButtonProps, children: impl IntoIterator<Item = Node>) -> Node {
    let el = Element::new("button")
        .attr("type", "button")
        .attr("data-variant", props.variant.as_str())
        .attr("data-size", props.size.as_str())
        .class(button_class(props.variant, props.size, &props.class));

    children
        .into_iter()
        .fold(el, |el, child| el.child(child))
        .into()
}
