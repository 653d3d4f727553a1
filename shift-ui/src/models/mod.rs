//! Rendered view models.
//!
//! These are the addressable elements other page scripts query directly,
//! so their ids and field names are part of the public contract.

mod rendered;

pub use rendered::{
    ConfirmItem, RenderedCard, RenderedConfirmation, RenderedList, ids,
};
