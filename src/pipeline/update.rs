//! Updates delivered from the projections to the consumer.

use crate::core::Rgb;
use crate::pipeline::resolver::LookupError;
use std::fmt;
use tokio::sync::mpsc;

/// Placeholder shown while no color name is known.
pub const NAME_PLACEHOLDER: &str = "--";

/// What the name channel currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameState {
    /// No complete color, or a lookup superseded before finishing.
    Placeholder,
    /// A lookup finished with this name.
    Resolved(String),
    /// A lookup finished with an error the consumer may want to show.
    Failed(LookupError),
}

impl fmt::Display for NameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameState::Placeholder => f.write_str(NAME_PLACEHOLDER),
            NameState::Resolved(name) => f.write_str(name),
            NameState::Failed(err) => write!(f, "{err}"),
        }
    }
}

/// One display update from one projection channel.
///
/// The engine merges all four channels into a single stream so the consumer
/// applies updates in publication order without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// The text field should show this value.
    HexText(String),
    /// The preview background should become this color.
    Background(Rgb),
    /// The `R,G,B` caption should show this value.
    RgbString(String),
    /// The name caption changed.
    ColorName(NameState),
}

/// Receiving side of the merged update stream.
pub type UpdateReceiver = mpsc::UnboundedReceiver<Update>;

pub(crate) type UpdateSender = mpsc::UnboundedSender<Update>;
