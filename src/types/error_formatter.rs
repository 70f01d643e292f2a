//! Rendering of failure message lists.

use crate::types::alloc_type::{String, Vec};
use alloc::string::ToString;
use core::fmt::{Display, Write};

/// Trait for customizing how a failure's messages are joined into text.
pub trait MessageFormatter {
    fn format_item(&self, _index: usize, item: &dyn Display) -> String {
        item.to_string()
    }

    fn separator(&self) -> &str {
        "; "
    }

    fn format_messages<'a>(&self, messages: impl Iterator<Item = &'a dyn Display>) -> String {
        messages
            .enumerate()
            .map(|(index, item)| self.format_item(index, item))
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}

/// Configuration-based message formatter.
///
/// # Examples
///
/// ```
/// use rail_track::{MessageFormatConfig, Messages};
///
/// let messages = Messages::try_from_iter(["name blank", "email blank"]).unwrap();
///
/// assert_eq!(messages.to_string(), "name blank; email blank");
/// assert_eq!(
///     messages.render(&MessageFormatConfig::numbered()),
///     "1. name blank\n2. email blank"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageFormatConfig {
    pub separator: String,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub numbered: bool,
}

impl Default for MessageFormatConfig {
    fn default() -> Self {
        Self {
            separator: "; ".into(),
            prefix: None,
            suffix: None,
            numbered: false,
        }
    }
}

impl MessageFormatConfig {
    #[inline]
    pub fn compact() -> Self {
        Self {
            separator: " | ".into(),
            ..Default::default()
        }
    }

    /// One message per line, prefixed with its 1-based position.
    #[inline]
    pub fn numbered() -> Self {
        Self {
            separator: "\n".into(),
            numbered: true,
            ..Default::default()
        }
    }

    /// One message per line as a bullet list.
    #[inline]
    pub fn multiline() -> Self {
        Self {
            separator: "\n".into(),
            prefix: Some("- ".into()),
            ..Default::default()
        }
    }
}

impl MessageFormatter for MessageFormatConfig {
    fn format_item(&self, index: usize, item: &dyn Display) -> String {
        let mut result = String::new();
        if self.numbered {
            let _ = write!(result, "{}. ", index + 1);
        }
        if let Some(prefix) = &self.prefix {
            result.push_str(prefix);
        }
        let _ = write!(result, "{item}");
        if let Some(suffix) = &self.suffix {
            result.push_str(suffix);
        }
        result
    }

    fn separator(&self) -> &str {
        &self.separator
    }
}
