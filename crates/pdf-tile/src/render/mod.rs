//! PDF rendering modules for tiling
//!
//! This module handles all PDF-specific operations:
//! - Resolving page MediaBoxes
//! - Creating XObjects from source pages
//! - Building translated tile pages and the output page tree

mod page;
mod xobject;

pub use page::*;
pub use xobject::{copy_object_deep, create_page_xobject, page_media_box};
