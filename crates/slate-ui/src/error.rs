//! Error types for the widget crate.
//!
//! All errors here are programmer or configuration errors raised
//! synchronously at the point of violation, before any state is mutated;
//! construction and text assignment either fully succeed or leave prior
//! state untouched. Backend failures are propagated unchanged.

use slate_ui_raster::{RasterError, Size};
use thiserror::Error;

/// Errors raised by widget construction and mutation.
#[derive(Error, Debug)]
pub enum WidgetError {
    /// Both an explicit surface and an image path were supplied.
    #[error("both an explicit surface and an image path were supplied")]
    ArgumentConflict,

    /// Both a fill color and a background image were supplied.
    #[error("both a fill color and a background image were supplied")]
    BackgroundConflict,

    /// No background source was supplied where one is required.
    #[error("a background color, background image, or transparency request is required")]
    MissingBackground,

    /// Rendered text would not fit inside the widget's fixed bounds.
    #[error("text size {text_size:?} exceeds widget bounds {bounds:?}")]
    TextOversize { text_size: Size, bounds: Size },

    /// A raster backend operation failed.
    #[error(transparent)]
    Raster(#[from] RasterError),
}

/// Result type for widget operations.
pub type WidgetResult<T> = Result<T, WidgetError>;
